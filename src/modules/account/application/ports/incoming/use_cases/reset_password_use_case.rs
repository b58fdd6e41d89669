use async_trait::async_trait;

use crate::account::application::domain::entities::normalize_email;
use crate::account::application::ports::incoming::use_cases::invalid_fields::{
    required_email, FieldError, InvalidFields,
};

#[derive(Debug, Clone)]
pub struct ResetPasswordCommand {
    email: String,
    new_password: String,
}

impl ResetPasswordCommand {
    pub fn new(email: Option<String>, new_password: Option<String>) -> Result<Self, InvalidFields> {
        let mut errors = InvalidFields::default();

        let email = required_email(&mut errors, "email", email);

        let new_password = new_password.unwrap_or_default();
        if new_password.trim().is_empty() {
            errors.push("new_password", FieldError::Required);
        }

        if !errors.is_empty() {
            return Err(errors);
        }

        Ok(Self {
            email: normalize_email(&email),
            new_password,
        })
    }

    pub fn email(&self) -> &str {
        &self.email
    }

    pub fn new_password(&self) -> &str {
        &self.new_password
    }
}

#[derive(Debug, Clone, thiserror::Error)]
pub enum ResetPasswordError {
    #[error("Account not found")]
    AccountNotFound,

    #[error("Password hashing failed: {0}")]
    HashingFailed(String),

    #[error("Repository error: {0}")]
    RepositoryError(String),
}

#[async_trait]
pub trait ResetPasswordUseCase: Send + Sync {
    async fn execute(&self, command: ResetPasswordCommand) -> Result<(), ResetPasswordError>;
}
