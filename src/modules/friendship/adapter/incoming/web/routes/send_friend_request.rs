use actix_web::{post, web, HttpResponse, Responder};
use tracing::{error, info, warn};

use crate::account::adapter::incoming::web::extractors::{authorize_or_response, BearerToken};
use crate::account::adapter::incoming::web::routes::validation_response;
use crate::account::application::ports::incoming::access_policy::Operation;
use crate::account::application::ports::incoming::use_cases::{FieldError, InvalidFields};
use crate::api::schemas::{ErrorResponse, SuccessResponse};
use crate::friendship::adapter::incoming::web::routes::dto::{
    FriendRequestResponse, SendFriendRequestBody, SendFriendRequestResponse,
};
use crate::friendship::application::ports::incoming::use_cases::{
    SendFriendRequestCommand, SendFriendRequestError,
};
use crate::shared::api::ApiResponse;
use crate::AppState;

/// Send a friend request
#[utoipa::path(
    post,
    path = "/send-friend-request",
    tag = "friendship",
    request_body = SendFriendRequestBody,
    responses(
        (status = 201, description = "Request created", body = inline(SuccessResponse<SendFriendRequestResponse>)),
        (
            status = 400,
            description = "Invalid ids or request already sent",
            body = ErrorResponse,
            example = json!({
                "success": false,
                "error": { "code": "FRIEND_REQUEST_EXISTS", "message": "Friend request already sent." }
            })
        ),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    )
)]
#[post("/send-friend-request")]
pub async fn send_friend_request_handler(
    data: web::Data<AppState>,
    bearer: BearerToken,
    payload: web::Json<SendFriendRequestBody>,
) -> impl Responder {
    if let Err(resp) = authorize_or_response(&data, Operation::SendFriendRequest, &bearer).await {
        return resp;
    }

    let dto = payload.into_inner();

    let command = match SendFriendRequestCommand::new(dto.from_user_id, dto.to_user_id) {
        Ok(cmd) => cmd,
        Err(errors) => {
            warn!(fields = ?errors.fields, "Friend request rejected: invalid input");
            return validation_response(errors);
        }
    };

    match data.friendship.send.execute(command).await {
        Ok(request) => {
            info!(
                request_id = %request.id,
                from_user = %request.from_user,
                to_user = %request.to_user,
                "Friend request sent"
            );
            ApiResponse::created(SendFriendRequestResponse {
                message: "Friend request sent successfully.".to_string(),
                friend_request: FriendRequestResponse::from(request),
            })
        }
        Err(err) => map_send_error(err),
    }
}

fn unknown_account(field: &'static str) -> HttpResponse {
    let mut errors = InvalidFields::default();
    errors.push(field, FieldError::UnknownAccount);
    validation_response(errors)
}

fn map_send_error(err: SendFriendRequestError) -> HttpResponse {
    match err {
        SendFriendRequestError::SenderNotFound => unknown_account("from_user_id"),
        SendFriendRequestError::RecipientNotFound => unknown_account("to_user_id"),
        SendFriendRequestError::AlreadyExists => {
            warn!("Friend request rejected: already sent");
            ApiResponse::bad_request("FRIEND_REQUEST_EXISTS", "Friend request already sent.")
        }
        SendFriendRequestError::RepositoryError(ref e) => {
            error!(error = %e, "Failed to send friend request");
            ApiResponse::internal_error()
        }
    }
}
