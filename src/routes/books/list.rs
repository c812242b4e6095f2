use actix_web::web;
use std::sync::Arc;

use crate::store::MemoryStore;
use crate::types::book::Catalog;
use crate::types::response::{ApiResponse, ApiResult};

pub async fn list_books(store: web::Data<Arc<MemoryStore>>) -> ApiResult<Catalog> {
    Ok(ApiResponse::Pretty(store.all_books()?))
}
