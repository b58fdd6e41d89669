use chrono::{DateTime, Utc};
use serde::Serialize;
use uuid::Uuid;

use crate::account::application::domain::entities::{Account, AccountId};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct FriendRequestId(Uuid);

impl FriendRequestId {
    pub fn value(&self) -> Uuid {
        self.0
    }
}

impl From<Uuid> for FriendRequestId {
    fn from(value: Uuid) -> Self {
        Self(value)
    }
}

impl From<FriendRequestId> for Uuid {
    fn from(value: FriendRequestId) -> Self {
        value.0
    }
}

impl std::fmt::Display for FriendRequestId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        self.0.fmt(f)
    }
}

/// A directed request from one account to another.
/// Created unaccepted; acceptance is one-way and rejection deletes it.
#[derive(Debug, Clone, PartialEq)]
pub struct FriendRequest {
    pub id: FriendRequestId,
    pub from_user: AccountId,
    pub to_user: AccountId,
    pub is_accepted: bool,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct AccountSummary {
    pub id: AccountId,
    pub email: String,
    pub first_name: String,
    pub last_name: String,
}

impl From<Account> for AccountSummary {
    fn from(account: Account) -> Self {
        Self {
            id: account.id,
            email: account.email,
            first_name: account.first_name,
            last_name: account.last_name,
        }
    }
}

/// An unaccepted request addressed to some account, with its sender
#[derive(Debug, Clone, PartialEq)]
pub struct PendingFriendRequest {
    pub id: FriendRequestId,
    pub from_user: AccountSummary,
    pub created_at: DateTime<Utc>,
}
