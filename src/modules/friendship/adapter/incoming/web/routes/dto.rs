use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};
use uuid::Uuid;

use crate::friendship::application::domain::entities::{
    AccountSummary, FriendRequest, PendingFriendRequest,
};

//
// ──────────────────────────────────────────────────────────
// Request DTOs
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Deserialize, ToSchema)]
pub struct SendFriendRequestBody {
    #[schema(example = "123e4567-e89b-12d3-a456-426614174000")]
    pub from_user_id: Option<String>,

    #[schema(example = "9b2f4c1e-7d3a-4e8b-a6c5-0f1e2d3c4b5a")]
    pub to_user_id: Option<String>,
}

/// Identifies the request to accept or reject
#[derive(Debug, Deserialize, ToSchema)]
pub struct FriendRequestActionBody {
    /// Also read from `from_user_id`
    #[serde(alias = "from_user_id")]
    #[schema(example = "5c6d7e8f-1a2b-4c3d-9e8f-7a6b5c4d3e2f")]
    pub request_id: Option<String>,
}

#[derive(Debug, Deserialize, IntoParams)]
pub struct EmailQuery {
    /// Email of the account to list for (case-insensitive)
    pub email: Option<String>,
}

//
// ──────────────────────────────────────────────────────────
// Response DTOs
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Serialize, ToSchema)]
pub struct FriendRequestResponse {
    pub id: Uuid,
    pub from_user_id: Uuid,
    pub to_user_id: Uuid,
    #[schema(example = false)]
    pub is_accepted: bool,
    pub created_at: DateTime<Utc>,
}

impl From<FriendRequest> for FriendRequestResponse {
    fn from(request: FriendRequest) -> Self {
        Self {
            id: request.id.value(),
            from_user_id: request.from_user.value(),
            to_user_id: request.to_user.value(),
            is_accepted: request.is_accepted,
            created_at: request.created_at,
        }
    }
}

#[derive(Debug, Serialize, ToSchema)]
pub struct SendFriendRequestResponse {
    #[schema(example = "Friend request sent successfully.")]
    pub message: String,
    pub friend_request: FriendRequestResponse,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct AccountSummaryResponse {
    pub id: Uuid,
    #[schema(example = "alice@example.com")]
    pub email: String,
    #[schema(example = "Alice")]
    pub first_name: String,
    #[schema(example = "Liddell")]
    pub last_name: String,
}

impl From<AccountSummary> for AccountSummaryResponse {
    fn from(summary: AccountSummary) -> Self {
        Self {
            id: summary.id.value(),
            email: summary.email,
            first_name: summary.first_name,
            last_name: summary.last_name,
        }
    }
}

#[derive(Debug, Serialize, ToSchema)]
pub struct PendingFriendRequestResponse {
    pub id: Uuid,
    pub from_user: AccountSummaryResponse,
    pub created_at: DateTime<Utc>,
}

impl From<PendingFriendRequest> for PendingFriendRequestResponse {
    fn from(pending: PendingFriendRequest) -> Self {
        Self {
            id: pending.id.value(),
            from_user: AccountSummaryResponse::from(pending.from_user),
            created_at: pending.created_at,
        }
    }
}
