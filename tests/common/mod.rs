use book_reviews::store::MemoryStore;
use book_reviews::types::book::{Book, Catalog};
use book_reviews::utils::token::TokenService;
use std::sync::Arc;

pub mod client;

pub const TEST_SECRET: &str = "test_secret";

pub struct TestContext {
    pub store: Arc<MemoryStore>,
    pub tokens: Arc<TokenService>,
}

impl TestContext {
    pub fn new() -> TestContext {
        TestContext {
            store: Arc::new(MemoryStore::new(test_data::catalog())),
            tokens: Arc::new(TokenService::new(TEST_SECRET, 3600)),
        }
    }
}

// Test data helpers
pub mod test_data {
    use super::*;
    use book_reviews::types::user::RCredentials;

    pub fn catalog() -> Catalog {
        let mut catalog = Catalog::new();
        catalog.insert("123".into(), Book::new("Dune", "Frank Herbert"));
        catalog.insert("456".into(), Book::new("Children of Dune", "Frank Herbert"));
        catalog.insert("789".into(), Book::new("Dune", "Someone Else"));
        catalog
    }

    #[allow(dead_code)]
    pub fn alice() -> RCredentials {
        RCredentials::new("alice", "wonderland")
    }
}
