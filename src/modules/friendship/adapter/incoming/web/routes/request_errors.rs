use actix_web::HttpResponse;
use tracing::{error, warn};

use crate::friendship::adapter::incoming::web::routes::dto::EmailQuery;
use crate::friendship::application::ports::incoming::use_cases::{
    FriendRequestActionError, ListFriendsError, RequestIdError,
};
use crate::shared::api::ApiResponse;

pub fn map_request_id_error(err: RequestIdError) -> HttpResponse {
    warn!(error = %err, "Friend request action rejected");
    match err {
        RequestIdError::Missing => ApiResponse::bad_request(
            "MISSING_REQUEST_ID",
            "Please provide request_id in the request body.",
        ),
        RequestIdError::Invalid => {
            ApiResponse::bad_request("INVALID_REQUEST_ID", "request_id must be a valid UUID.")
        }
    }
}

pub fn map_action_error(err: FriendRequestActionError) -> HttpResponse {
    match err {
        FriendRequestActionError::NotFound => {
            ApiResponse::not_found("FRIEND_REQUEST_NOT_FOUND", "Friend request does not exist.")
        }
        FriendRequestActionError::RepositoryError(ref e) => {
            error!(error = %e, "Friend request action failed");
            ApiResponse::internal_error()
        }
    }
}

/// Trimmed `email` query parameter, or the error response when it is absent.
pub fn email_param(query: &EmailQuery) -> Result<&str, HttpResponse> {
    match query.email.as_deref().map(str::trim) {
        Some(email) if !email.is_empty() => Ok(email),
        _ => {
            warn!("List rejected: missing email parameter");
            Err(ApiResponse::bad_request(
                "MISSING_EMAIL",
                "Please provide an email in the query parameter 'email'.",
            ))
        }
    }
}

pub fn map_list_error(err: ListFriendsError, email: &str) -> HttpResponse {
    match err {
        ListFriendsError::AccountNotFound => {
            warn!(email = %email, "List for unknown account");
            ApiResponse::not_found("ACCOUNT_NOT_FOUND", "User with this email does not exist.")
        }
        ListFriendsError::RepositoryError(ref e) => {
            error!(error = %e, "Failed to list friendship data");
            ApiResponse::internal_error()
        }
    }
}
