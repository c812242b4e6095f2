use actix_web::web;
use std::sync::Arc;

use crate::store::MemoryStore;
use crate::types::book::{ReviewOutcome, ReviewQuery};
use crate::types::error::AppError;
use crate::types::response::{ApiResponse, ApiResult, MessageRes};
use crate::utils::webutils::AuthUser;

pub async fn upsert_review(
    user: AuthUser,
    store: web::Data<Arc<MemoryStore>>,
    isbn: web::Path<String>,
    query: web::Query<ReviewQuery>,
) -> ApiResult<MessageRes> {
    // Presence is checked here so a missing query param is a 400, not a 404.
    let text = query
        .review
        .as_deref()
        .filter(|t| !t.is_empty())
        .ok_or_else(|| AppError::Validation("Review text is required.".into()))?;

    match store.upsert_review(&isbn, &user.username, text)? {
        ReviewOutcome::Created => Ok(ApiResponse::Created(MessageRes::new(
            "Review added successfully.",
        ))),
        ReviewOutcome::Updated => Ok(ApiResponse::Ok(MessageRes::new(
            "Review updated successfully.",
        ))),
    }
}
