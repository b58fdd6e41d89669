use async_trait::async_trait;

use crate::account::application::domain::entities::{Account, AccountId};

#[derive(Debug, Clone)]
pub struct CreateAccountData {
    pub email: String,
    pub first_name: String,
    pub last_name: String,
    pub password_hash: String,
}

#[derive(Debug, Clone, thiserror::Error)]
pub enum AccountRepositoryError {
    #[error("Email already registered")]
    EmailAlreadyExists,

    #[error("Account not found")]
    AccountNotFound,

    #[error("Database error: {0}")]
    DatabaseError(String),
}

#[async_trait]
pub trait AccountRepository: Send + Sync {
    async fn create_account(&self, data: CreateAccountData)
        -> Result<Account, AccountRepositoryError>;

    async fn update_password(
        &self,
        account_id: AccountId,
        password_hash: String,
    ) -> Result<(), AccountRepositoryError>;
}
