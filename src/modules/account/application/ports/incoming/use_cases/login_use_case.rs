use async_trait::async_trait;

use crate::account::application::domain::entities::{normalize_email, Account};

#[derive(Debug, Clone)]
pub struct LoginCommand {
    pub email: String,
    pub password: String,
}

impl LoginCommand {
    /// Missing or empty credentials can never authenticate.
    /// The email gets the same normalization signup applied before storing it.
    pub fn new(email: Option<String>, password: Option<String>) -> Result<Self, LoginError> {
        let email = email.map(|e| normalize_email(&e)).unwrap_or_default();
        match password {
            Some(password) if !email.is_empty() && !password.is_empty() => {
                Ok(Self { email, password })
            }
            _ => Err(LoginError::InvalidCredentials),
        }
    }
}

#[derive(Debug, Clone)]
pub struct LoginOutput {
    pub token: String,
    pub account: Account,
}

#[derive(Debug, Clone, thiserror::Error)]
pub enum LoginError {
    /// Unknown email, wrong password and inactive accounts are indistinguishable
    #[error("Invalid credentials")]
    InvalidCredentials,

    #[error("Password verification failed: {0}")]
    HashingFailed(String),

    #[error("Token error: {0}")]
    TokenError(String),

    #[error("Repository error: {0}")]
    RepositoryError(String),
}

#[async_trait]
pub trait LoginUseCase: Send + Sync {
    async fn execute(&self, command: LoginCommand) -> Result<LoginOutput, LoginError>;
}
