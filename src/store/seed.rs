use crate::types::book::{Book, Catalog};

const SEED: &[(&str, &str, &str)] = &[
    ("1", "Things Fall Apart", "Chinua Achebe"),
    ("2", "Fairy tales", "Hans Christian Andersen"),
    ("3", "The Divine Comedy", "Dante Alighieri"),
    ("4", "The Epic Of Gilgamesh", "Unknown"),
    ("5", "The Book Of Job", "Unknown"),
    ("6", "One Thousand and One Nights", "Unknown"),
    ("7", "Njál's Saga", "Unknown"),
    ("8", "Pride and Prejudice", "Jane Austen"),
    ("9", "Le Père Goriot", "Honoré de Balzac"),
    ("10", "Molloy, Malone Dies, The Unnamable, the trilogy", "Samuel Beckett"),
];

/// Built-in catalog used when no `CATALOG_PATH` is configured.
pub fn default_catalog() -> Catalog {
    SEED.iter()
        .map(|(isbn, title, author)| (isbn.to_string(), Book::new(title, author)))
        .collect()
}
