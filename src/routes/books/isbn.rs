use actix_web::web;
use std::sync::Arc;

use crate::store::MemoryStore;
use crate::types::book::Book;
use crate::types::response::{ApiResponse, ApiResult};

pub async fn book_by_isbn(
    store: web::Data<Arc<MemoryStore>>,
    isbn: web::Path<String>,
) -> ApiResult<Book> {
    Ok(ApiResponse::Ok(store.book_by_isbn(&isbn)?))
}
