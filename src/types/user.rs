use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct User {
    pub username: String,
    pub password: String,
}

/// Register/login body. Fields are optional so a missing one becomes a
/// JSON error from the handler rather than an extractor rejection.
#[derive(Serialize, Deserialize, Debug, Default)]
pub struct RCredentials {
    pub username: Option<String>,
    pub password: Option<String>,
}

impl RCredentials {
    pub fn new(username: &str, password: &str) -> Self {
        Self {
            username: Some(username.to_string()),
            password: Some(password.to_string()),
        }
    }

    /// Both fields, when present and non-empty.
    pub fn pair(&self) -> Option<(&str, &str)> {
        let username = self.username.as_deref().filter(|s| !s.is_empty())?;
        let password = self.password.as_deref().filter(|s| !s.is_empty())?;
        Some((username, password))
    }
}

#[derive(Serialize, Deserialize, Debug)]
pub struct LoginRes {
    pub message: String,
    pub token: String,
}
