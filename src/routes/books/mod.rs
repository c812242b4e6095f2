pub mod author;
pub mod isbn;
pub mod list;
pub mod reviews;
pub mod title;
