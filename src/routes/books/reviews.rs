use actix_web::web;
use std::sync::Arc;

use crate::store::MemoryStore;
use crate::types::book::Review;
use crate::types::response::{ApiResponse, ApiResult};

pub async fn book_reviews(
    store: web::Data<Arc<MemoryStore>>,
    isbn: web::Path<String>,
) -> ApiResult<Vec<Review>> {
    Ok(ApiResponse::Ok(store.reviews(&isbn)?))
}
