use actix_web::web;
use std::sync::Arc;

use crate::store::MemoryStore;
use crate::types::response::{ApiResponse, ApiResult, MessageRes};
use crate::utils::webutils::AuthUser;

pub async fn delete_review(
    user: AuthUser,
    store: web::Data<Arc<MemoryStore>>,
    isbn: web::Path<String>,
) -> ApiResult<MessageRes> {
    store.delete_review(&isbn, &user.username)?;
    Ok(ApiResponse::Ok(MessageRes::new("Review deleted successfully.")))
}
