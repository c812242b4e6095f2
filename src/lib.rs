//! Book catalog service with user registration, token login and one review
//! per user per book. All state lives in memory for the life of the process.

pub mod config;
pub mod routes;
pub mod store;
pub mod types;
pub mod utils;
