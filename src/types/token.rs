use serde::{Deserialize, Serialize};

/// Name of the cookie carrying the session token.
pub const AUTH_COOKIE: &str = "auth_token";

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct Claims {
    pub username: String,
    pub iat: i64,
    pub exp: i64,
}
