use crate::store::memory_service::MemoryStore;
use crate::types::{error::AppError, user::User};
use tracing::info;

impl MemoryStore {
    pub fn user_exists(&self, username: &str) -> Result<bool, AppError> {
        Ok(self.read_users()?.iter().any(|u| u.username == username))
    }

    /// Exact match on both fields.
    pub fn check_credentials(&self, username: &str, password: &str) -> Result<bool, AppError> {
        Ok(self
            .read_users()?
            .iter()
            .any(|u| u.username == username && u.password == password))
    }

    /// Signup: fails with `Conflict` when the name is taken.
    pub fn register_user(&self, username: &str, password: &str) -> Result<(), AppError> {
        let mut users = self.write_users()?;
        if users.iter().any(|u| u.username == username) {
            return Err(AppError::Conflict("User already exists".into()));
        }
        users.push(User {
            username: username.to_string(),
            password: password.to_string(),
        });
        info!("Registered user {username}");
        Ok(())
    }
}
