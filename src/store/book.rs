use crate::store::memory_service::MemoryStore;
use crate::types::{
    book::{Book, BookEntry, Catalog, Review, ReviewOutcome},
    error::AppError,
};
use tracing::info;

fn book_not_found() -> AppError {
    AppError::NotFound("Book not found".into())
}

impl MemoryStore {
    pub fn all_books(&self) -> Result<Catalog, AppError> {
        Ok(self.read_books()?.clone())
    }

    pub fn book_by_isbn(&self, isbn: &str) -> Result<Book, AppError> {
        self.read_books()?.get(isbn).cloned().ok_or_else(book_not_found)
    }

    pub fn books_by_author(&self, author: &str) -> Result<Vec<BookEntry>, AppError> {
        let hits = self.find_books(|b| b.author == author)?;
        if hits.is_empty() {
            return Err(AppError::NotFound("No books found by this author".into()));
        }
        Ok(hits)
    }

    pub fn books_by_title(&self, title: &str) -> Result<Vec<BookEntry>, AppError> {
        let hits = self.find_books(|b| b.title == title)?;
        if hits.is_empty() {
            return Err(AppError::NotFound("No books found with this title".into()));
        }
        Ok(hits)
    }

    pub fn reviews(&self, isbn: &str) -> Result<Vec<Review>, AppError> {
        self.read_books()?
            .get(isbn)
            .map(|b| b.reviews.clone())
            .ok_or_else(|| AppError::NotFound("No reviews found for this book".into()))
    }

    /// Creates the caller's review or overwrites it in place.
    pub fn upsert_review(
        &self,
        isbn: &str,
        username: &str,
        text: &str,
    ) -> Result<ReviewOutcome, AppError> {
        if text.is_empty() {
            return Err(AppError::Validation("Review text is required.".into()));
        }
        let mut books = self.write_books()?;
        let book = books.get_mut(isbn).ok_or_else(book_not_found)?;

        match book.reviews.iter_mut().find(|r| r.username == username) {
            Some(existing) => {
                existing.text = text.to_string();
                info!("Updated review by {username} on {isbn}");
                Ok(ReviewOutcome::Updated)
            }
            None => {
                book.reviews.push(Review {
                    username: username.to_string(),
                    text: text.to_string(),
                });
                info!("Added review by {username} on {isbn}");
                Ok(ReviewOutcome::Created)
            }
        }
    }

    pub fn delete_review(&self, isbn: &str, username: &str) -> Result<(), AppError> {
        let mut books = self.write_books()?;
        let book = books.get_mut(isbn).ok_or_else(book_not_found)?;
        let idx = book
            .reviews
            .iter()
            .position(|r| r.username == username)
            .ok_or_else(|| AppError::NotFound("Review not found.".into()))?;
        book.reviews.remove(idx);
        info!("Deleted review by {username} on {isbn}");
        Ok(())
    }

    fn find_books(&self, pred: impl Fn(&Book) -> bool) -> Result<Vec<BookEntry>, AppError> {
        Ok(self
            .read_books()?
            .iter()
            .filter(|(_, book)| pred(book))
            .map(|(isbn, book)| BookEntry {
                isbn: isbn.clone(),
                book: book.clone(),
            })
            .collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    fn store() -> MemoryStore {
        let mut catalog = Catalog::new();
        catalog.insert("123".into(), Book::new("Dune", "Frank Herbert"));
        catalog.insert("456".into(), Book::new("Children of Dune", "Frank Herbert"));
        catalog.insert("789".into(), Book::new("Dune", "Someone Else"));
        MemoryStore::new(catalog)
    }

    #[test]
    fn upsert_creates_then_updates() {
        let store = store();
        assert_eq!(
            store.upsert_review("123", "alice", "Great book").unwrap(),
            ReviewOutcome::Created
        );
        assert_eq!(
            store.upsert_review("123", "alice", "Even better").unwrap(),
            ReviewOutcome::Updated
        );
        let reviews = store.reviews("123").unwrap();
        assert_eq!(
            reviews,
            vec![Review {
                username: "alice".into(),
                text: "Even better".into()
            }]
        );
    }

    #[test]
    fn upsert_rejects_empty_text_and_unknown_book() {
        let store = store();
        assert!(matches!(
            store.upsert_review("123", "alice", ""),
            Err(AppError::Validation(_))
        ));
        assert!(matches!(
            store.upsert_review("999", "alice", "hi"),
            Err(AppError::NotFound(_))
        ));
    }

    #[test]
    fn delete_missing_review_is_not_found() {
        let store = store();
        assert!(matches!(
            store.delete_review("123", "alice"),
            Err(AppError::NotFound(_))
        ));
        assert!(matches!(
            store.delete_review("999", "alice"),
            Err(AppError::NotFound(_))
        ));

        store.upsert_review("123", "alice", "ok").unwrap();
        store.upsert_review("123", "bob", "meh").unwrap();
        store.delete_review("123", "alice").unwrap();
        let reviews = store.reviews("123").unwrap();
        assert_eq!(reviews.len(), 1);
        assert_eq!(reviews[0].username, "bob");
    }

    #[test]
    fn usernames_stay_unique_per_book() {
        let store = store();
        let ops: &[(&str, &str, Option<&str>)] = &[
            ("123", "alice", Some("a")),
            ("123", "bob", Some("b")),
            ("123", "alice", Some("c")),
            ("123", "alice", None),
            ("123", "alice", Some("d")),
            ("456", "alice", Some("e")),
            ("123", "bob", Some("f")),
        ];
        for (isbn, user, text) in ops {
            match text {
                Some(t) => {
                    store.upsert_review(isbn, user, t).unwrap();
                }
                None => store.delete_review(isbn, user).unwrap(),
            }
        }
        for (_, book) in store.all_books().unwrap() {
            let names: HashSet<_> = book.reviews.iter().map(|r| &r.username).collect();
            assert_eq!(names.len(), book.reviews.len());
        }
        assert_eq!(store.reviews("123").unwrap().len(), 2);
    }

    #[test]
    fn lookups_are_exact_and_case_sensitive() {
        let store = store();
        let hits = store.books_by_author("Frank Herbert").unwrap();
        let isbns: Vec<_> = hits.iter().map(|e| e.isbn.as_str()).collect();
        assert_eq!(isbns, vec!["123", "456"]);

        let hits = store.books_by_title("Dune").unwrap();
        assert_eq!(hits.len(), 2);

        assert!(store.books_by_author("frank herbert").is_err());
        assert!(store.books_by_title("Dun").is_err());
        assert!(store.book_by_isbn("000").is_err());
        assert_eq!(store.book_by_isbn("456").unwrap().title, "Children of Dune");
    }

    #[test]
    fn known_book_without_reviews_is_empty_list() {
        let store = store();
        assert!(store.reviews("123").unwrap().is_empty());
        assert!(matches!(store.reviews("nope"), Err(AppError::NotFound(_))));
    }
}
