use actix_web::web;
use std::sync::Arc;

use crate::store::MemoryStore;
use crate::types::book::BookEntry;
use crate::types::response::{ApiResponse, ApiResult};

pub async fn books_by_author(
    store: web::Data<Arc<MemoryStore>>,
    author: web::Path<String>,
) -> ApiResult<Vec<BookEntry>> {
    Ok(ApiResponse::Ok(store.books_by_author(&author)?))
}
