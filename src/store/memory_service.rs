use crate::types::{book::Catalog, error::AppError, user::User};
use std::collections::HashSet;
use std::fs;
use std::path::Path;
use std::sync::{RwLock, RwLockReadGuard, RwLockWriteGuard};
use tracing::info;

/// Process-lifetime state: registered users and the book catalog.
pub struct MemoryStore {
    pub(crate) users: RwLock<Vec<User>>,
    pub(crate) books: RwLock<Catalog>,
}

impl MemoryStore {
    pub fn new(catalog: Catalog) -> Self {
        info!("Catalog loaded with {} books.", catalog.len());
        Self {
            users: RwLock::new(Vec::new()),
            books: RwLock::new(catalog),
        }
    }

    /// Reads a `{isbn: book}` JSON document.
    pub fn load_catalog(path: impl AsRef<Path>) -> Result<Catalog, AppError> {
        let path = path.as_ref();
        info!("Loading catalog from {}", path.display());
        let raw = fs::read_to_string(path)
            .map_err(|e| AppError::Internal(format!("read {} failed: {e}", path.display())))?;
        let catalog: Catalog = serde_json::from_str(&raw)
            .map_err(|e| AppError::Internal(format!("parse {} failed: {e}", path.display())))?;
        check_unique_reviewers(&catalog)?;
        Ok(catalog)
    }

    pub(crate) fn read_users(&self) -> Result<RwLockReadGuard<'_, Vec<User>>, AppError> {
        self.users.read().map_err(|_| poisoned("users"))
    }

    pub(crate) fn write_users(&self) -> Result<RwLockWriteGuard<'_, Vec<User>>, AppError> {
        self.users.write().map_err(|_| poisoned("users"))
    }

    pub(crate) fn read_books(&self) -> Result<RwLockReadGuard<'_, Catalog>, AppError> {
        self.books.read().map_err(|_| poisoned("books"))
    }

    pub(crate) fn write_books(&self) -> Result<RwLockWriteGuard<'_, Catalog>, AppError> {
        self.books.write().map_err(|_| poisoned("books"))
    }
}

impl Default for MemoryStore {
    fn default() -> Self {
        Self::new(super::seed::default_catalog())
    }
}

/// Each book may hold at most one review per username.
fn check_unique_reviewers(catalog: &Catalog) -> Result<(), AppError> {
    for (isbn, book) in catalog {
        let mut seen = HashSet::new();
        if let Some(dup) = book.reviews.iter().find(|r| !seen.insert(r.username.as_str())) {
            return Err(AppError::Validation(format!(
                "book {isbn} has more than one review by {}",
                dup.username
            )));
        }
    }
    Ok(())
}

fn poisoned(what: &str) -> AppError {
    AppError::Internal(format!("{what} lock poisoned"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::env;

    #[test]
    fn load_catalog_reads_json_file() {
        let path = env::temp_dir().join(format!("catalog-{}.json", std::process::id()));
        fs::write(
            &path,
            r#"{"123": {"title": "Dune", "author": "Frank Herbert"}}"#,
        )
        .unwrap();

        let catalog = MemoryStore::load_catalog(&path).unwrap();
        fs::remove_file(&path).ok();

        assert_eq!(catalog.len(), 1);
        assert_eq!(catalog["123"].title, "Dune");
        assert!(catalog["123"].reviews.is_empty());
    }

    #[test]
    fn load_catalog_rejects_repeated_reviewer() {
        let path = env::temp_dir().join(format!("catalog-dup-{}.json", std::process::id()));
        fs::write(
            &path,
            r#"{"1": {"title": "T", "author": "A", "reviews": [
                {"username": "alice", "review": "x"},
                {"username": "bob", "review": "z"},
                {"username": "alice", "review": "y"}
            ]}}"#,
        )
        .unwrap();

        let result = MemoryStore::load_catalog(&path);
        fs::remove_file(&path).ok();

        match result {
            Err(AppError::Validation(msg)) => assert!(msg.contains("alice"), "{msg}"),
            other => panic!("expected validation error, got {other:?}"),
        }
    }

    #[test]
    fn load_catalog_missing_file_is_error() {
        let err = MemoryStore::load_catalog("/nonexistent/catalog.json").unwrap_err();
        assert!(matches!(err, AppError::Internal(_)));
    }
}
