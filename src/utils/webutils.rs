use actix_web::{
    cookie::Cookie, dev::Payload, http::header::Header, web, FromRequest, HttpRequest,
};
use actix_web_httpauth::headers::authorization::{Authorization, Bearer};
use std::future::{ready, Ready};
use std::sync::Arc;
use tracing::warn;

use crate::types::{error::AppError, token::AUTH_COOKIE};
use crate::utils::token::TokenService;

/// Caller identity for routes behind the token check.
#[derive(Debug, Clone)]
pub struct AuthUser {
    pub username: String,
}

impl FromRequest for AuthUser {
    type Error = AppError;
    type Future = Ready<Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _: &mut Payload) -> Self::Future {
        ready(authenticate(req))
    }
}

fn authenticate(req: &HttpRequest) -> Result<AuthUser, AppError> {
    let tokens = req
        .app_data::<web::Data<Arc<TokenService>>>()
        .ok_or_else(|| AppError::Internal("token service not configured".into()))?;
    let token = request_token(req).ok_or(AppError::MissingToken)?;
    let username = tokens.verify(&token).inspect_err(|_| {
        warn!("Invalid token on {} {}", req.method(), req.path());
    })?;
    Ok(AuthUser { username })
}

/// Cookie first, then `Authorization: Bearer`. Empty values count as missing.
pub fn request_token(req: &HttpRequest) -> Option<String> {
    if let Some(cookie) = req.cookie(AUTH_COOKIE) {
        if !cookie.value().is_empty() {
            return Some(cookie.value().to_string());
        }
    }
    Authorization::<Bearer>::parse(req)
        .ok()
        .map(|auth| auth.into_scheme().token().to_string())
        .filter(|t| !t.is_empty())
}

pub fn auth_cookie(token: &str) -> Cookie<'static> {
    Cookie::build(AUTH_COOKIE, token.to_string())
        .http_only(true)
        .path("/")
        .finish()
}
