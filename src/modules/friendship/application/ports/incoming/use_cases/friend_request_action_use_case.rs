use async_trait::async_trait;
use uuid::Uuid;

use crate::friendship::application::domain::entities::FriendRequestId;

#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum RequestIdError {
    #[error("Request id is required")]
    Missing,

    #[error("Request id must be a valid UUID")]
    Invalid,
}

/// Parses the id of the request to act on, as received from a client.
pub fn parse_request_id(raw: Option<&str>) -> Result<FriendRequestId, RequestIdError> {
    let raw = raw.map(str::trim).unwrap_or_default();
    if raw.is_empty() {
        return Err(RequestIdError::Missing);
    }

    Uuid::parse_str(raw)
        .map(FriendRequestId::from)
        .map_err(|_| RequestIdError::Invalid)
}

#[derive(Debug, Clone, thiserror::Error)]
pub enum FriendRequestActionError {
    #[error("Friend request does not exist")]
    NotFound,

    #[error("Repository error: {0}")]
    RepositoryError(String),
}

#[async_trait]
pub trait AcceptFriendRequestUseCase: Send + Sync {
    async fn execute(&self, id: FriendRequestId) -> Result<(), FriendRequestActionError>;
}

#[async_trait]
pub trait RejectFriendRequestUseCase: Send + Sync {
    async fn execute(&self, id: FriendRequestId) -> Result<(), FriendRequestActionError>;
}
