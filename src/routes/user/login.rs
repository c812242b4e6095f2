use actix_web::{post, web, HttpResponse};
use std::sync::Arc;
use tracing::{info, warn};

use crate::store::MemoryStore;
use crate::types::error::AppError;
use crate::types::user::{LoginRes, RCredentials};
use crate::utils::{token::TokenService, webutils::auth_cookie};

#[post("/login")]
async fn login(
    store: web::Data<Arc<MemoryStore>>,
    tokens: web::Data<Arc<TokenService>>,
    body: web::Json<RCredentials>,
) -> Result<HttpResponse, AppError> {
    let (username, password) = body.pair().ok_or(AppError::InvalidCredentials)?;

    if !store.check_credentials(username, password)? {
        warn!("Failed login for {username}");
        return Err(AppError::InvalidCredentials);
    }

    let token = tokens.issue(username)?;
    info!("User {username} logged in");

    Ok(HttpResponse::Ok()
        .cookie(auth_cookie(&token))
        .json(LoginRes {
            message: "Login successful.".to_string(),
            token,
        }))
}
