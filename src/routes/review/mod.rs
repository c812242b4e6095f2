pub mod delete;
pub mod upsert;
