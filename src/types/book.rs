use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

pub type Isbn = String;

/// The catalog, keyed by ISBN.
pub type Catalog = BTreeMap<Isbn, Book>;

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct Review {
    pub username: String,
    #[serde(rename = "review")]
    pub text: String,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct Book {
    pub title: String,
    pub author: String,
    #[serde(default)]
    pub reviews: Vec<Review>,
}

impl Book {
    pub fn new(title: &str, author: &str) -> Self {
        Self {
            title: title.to_string(),
            author: author.to_string(),
            reviews: Vec::new(),
        }
    }
}

/// A search hit: the book tagged with its key.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct BookEntry {
    pub isbn: Isbn,
    #[serde(flatten)]
    pub book: Book,
}

#[derive(Deserialize, Debug, Default)]
pub struct ReviewQuery {
    pub review: Option<String>,
}

/// Result of an upsert; decides between 201 and 200.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReviewOutcome {
    Created,
    Updated,
}
