use async_trait::async_trait;

use crate::account::application::domain::entities::AccountId;

#[derive(Debug, Clone, thiserror::Error)]
pub enum AuthTokenRepositoryError {
    #[error("Account already has a token")]
    TokenAlreadyExists,

    #[error("Database error: {0}")]
    DatabaseError(String),
}

/// Opaque bearer keys, at most one per account. Keys are never rotated.
#[async_trait]
pub trait AuthTokenRepository: Send + Sync {
    async fn find_key_for_account(
        &self,
        account_id: AccountId,
    ) -> Result<Option<String>, AuthTokenRepositoryError>;

    async fn create_for_account(
        &self,
        account_id: AccountId,
        key: String,
    ) -> Result<String, AuthTokenRepositoryError>;

    async fn find_account_by_key(
        &self,
        key: &str,
    ) -> Result<Option<AccountId>, AuthTokenRepositoryError>;
}
