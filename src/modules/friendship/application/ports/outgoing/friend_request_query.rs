use async_trait::async_trait;

use crate::account::application::domain::entities::AccountId;
use crate::friendship::application::domain::entities::{AccountSummary, PendingFriendRequest};

#[derive(Debug, Clone, thiserror::Error)]
pub enum FriendRequestQueryError {
    #[error("Database error: {0}")]
    DatabaseError(String),
}

#[async_trait]
pub trait FriendRequestQuery: Send + Sync {
    /// Senders of accepted requests addressed to `account_id`, oldest request first.
    /// Requests the account itself sent are not considered.
    async fn friends_of(
        &self,
        account_id: AccountId,
    ) -> Result<Vec<AccountSummary>, FriendRequestQueryError>;

    /// Unaccepted requests addressed to `account_id`, ordered by `created_at`.
    async fn pending_for(
        &self,
        account_id: AccountId,
    ) -> Result<Vec<PendingFriendRequest>, FriendRequestQueryError>;
}
