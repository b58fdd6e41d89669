use async_trait::async_trait;

use crate::friendship::application::domain::entities::{AccountSummary, PendingFriendRequest};

#[derive(Debug, Clone, thiserror::Error)]
pub enum ListFriendsError {
    #[error("Account not found")]
    AccountNotFound,

    #[error("Repository error: {0}")]
    RepositoryError(String),
}

/// Accounts that sent an accepted request to the account with `email`.
#[async_trait]
pub trait ListFriendsUseCase: Send + Sync {
    async fn execute(&self, email: &str) -> Result<Vec<AccountSummary>, ListFriendsError>;
}

#[async_trait]
pub trait ListPendingFriendRequestsUseCase: Send + Sync {
    async fn execute(&self, email: &str) -> Result<Vec<PendingFriendRequest>, ListFriendsError>;
}
