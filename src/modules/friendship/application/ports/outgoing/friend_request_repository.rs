use async_trait::async_trait;

use crate::account::application::domain::entities::AccountId;
use crate::friendship::application::domain::entities::{FriendRequest, FriendRequestId};

#[derive(Debug, Clone)]
pub struct CreateFriendRequestData {
    pub from_user: AccountId,
    pub to_user: AccountId,
}

#[derive(Debug, Clone, thiserror::Error)]
pub enum FriendRequestRepositoryError {
    /// The ordered (from, to) pair already has a request
    #[error("Friend request already exists")]
    AlreadyExists,

    #[error("Friend request not found")]
    NotFound,

    #[error("Database error: {0}")]
    DatabaseError(String),
}

#[async_trait]
pub trait FriendRequestRepository: Send + Sync {
    async fn create(
        &self,
        data: CreateFriendRequestData,
    ) -> Result<FriendRequest, FriendRequestRepositoryError>;

    /// Marks the request accepted. Accepting twice is not an error.
    async fn accept(&self, id: FriendRequestId) -> Result<(), FriendRequestRepositoryError>;

    async fn delete(&self, id: FriendRequestId) -> Result<(), FriendRequestRepositoryError>;
}
