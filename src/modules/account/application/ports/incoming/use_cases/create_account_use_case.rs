use async_trait::async_trait;

use crate::account::application::{
    domain::entities::{normalize_email, Account, NAME_MAX_LENGTH},
    ports::incoming::use_cases::invalid_fields::{required_email, required_text, InvalidFields},
};

//
// ──────────────────────────────────────────────────────────
// Create Account Command
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Clone)]
pub struct CreateAccountCommand {
    email: String,
    first_name: String,
    last_name: String,
}

impl CreateAccountCommand {
    pub fn new(
        email: Option<String>,
        first_name: Option<String>,
        last_name: Option<String>,
    ) -> Result<Self, InvalidFields> {
        let mut errors = InvalidFields::default();

        let email = required_email(&mut errors, "email", email);
        let first_name = required_text(&mut errors, "first_name", first_name, NAME_MAX_LENGTH);
        let last_name = required_text(&mut errors, "last_name", last_name, NAME_MAX_LENGTH);

        if !errors.is_empty() {
            return Err(errors);
        }

        Ok(Self {
            email: normalize_email(&email),
            first_name,
            last_name,
        })
    }

    pub fn email(&self) -> &str {
        &self.email
    }

    pub fn first_name(&self) -> &str {
        &self.first_name
    }

    pub fn last_name(&self) -> &str {
        &self.last_name
    }
}

//
// ──────────────────────────────────────────────────────────
// Use Case Error
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Clone, thiserror::Error)]
pub enum CreateAccountError {
    #[error("Email already registered")]
    EmailAlreadyExists,

    #[error("Password hashing failed: {0}")]
    HashingFailed(String),

    #[error("Repository error: {0}")]
    RepositoryError(String),
}

//
// ──────────────────────────────────────────────────────────
// Incoming Port (Use Case)
// ──────────────────────────────────────────────────────────
//

#[async_trait]
pub trait CreateAccountUseCase: Send + Sync {
    async fn execute(&self, command: CreateAccountCommand) -> Result<Account, CreateAccountError>;
}
