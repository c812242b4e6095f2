use actix_web::{post, web};
use std::sync::Arc;

use crate::store::MemoryStore;
use crate::types::error::AppError;
use crate::types::response::{ApiResponse, ApiResult, MessageRes};
use crate::types::user::RCredentials;

#[post("/register")]
async fn register(
    store: web::Data<Arc<MemoryStore>>,
    body: web::Json<RCredentials>,
) -> ApiResult<MessageRes> {
    let (username, password) = body
        .pair()
        .ok_or_else(|| AppError::Validation("Username and password are required".into()))?;

    store.register_user(username, password)?;

    Ok(ApiResponse::Ok(MessageRes::new("User successfully registered")))
}
