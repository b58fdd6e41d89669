use async_trait::async_trait;

use crate::account::application::domain::entities::AccountId;

/// Every operation exposed over HTTP, as seen by an access policy
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operation {
    Signup,
    Login,
    PasswordReset,
    SearchAccounts,
    SendFriendRequest,
    AcceptFriendRequest,
    RejectFriendRequest,
    ListFriends,
    ListPendingFriendRequests,
}

impl Operation {
    /// Operations a caller must be able to reach before holding a token
    pub fn is_public(&self) -> bool {
        matches!(
            self,
            Operation::Signup | Operation::Login | Operation::PasswordReset
        )
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Operation::Signup => "signup",
            Operation::Login => "login",
            Operation::PasswordReset => "password_reset",
            Operation::SearchAccounts => "search_accounts",
            Operation::SendFriendRequest => "send_friend_request",
            Operation::AcceptFriendRequest => "accept_friend_request",
            Operation::RejectFriendRequest => "reject_friend_request",
            Operation::ListFriends => "list_friends",
            Operation::ListPendingFriendRequests => "list_pending_friend_requests",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Caller {
    Anonymous,
    Account(AccountId),
}

#[derive(Debug, Clone, thiserror::Error)]
pub enum AccessDenied {
    #[error("Missing bearer token")]
    MissingToken,

    #[error("Invalid token")]
    InvalidToken,

    #[error("Token lookup failed: {0}")]
    LookupFailed(String),
}

#[async_trait]
pub trait AccessPolicy: Send + Sync {
    async fn authorize(
        &self,
        operation: Operation,
        bearer: Option<&str>,
    ) -> Result<Caller, AccessDenied>;
}
