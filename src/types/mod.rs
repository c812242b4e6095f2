pub mod book;
pub mod error;
pub mod response;
pub mod token;
pub mod user;
