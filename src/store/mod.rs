pub mod book;
pub mod memory_service;
pub mod seed;
pub mod user;

pub use memory_service::MemoryStore;
