use actix_web::{post, web, Responder};
use tracing::info;

use crate::account::adapter::incoming::web::extractors::{authorize_or_response, BearerToken};
use crate::account::application::ports::incoming::access_policy::Operation;
use crate::api::schemas::{ErrorResponse, MessageResponse, SuccessResponse};
use crate::friendship::adapter::incoming::web::routes::dto::FriendRequestActionBody;
use crate::friendship::adapter::incoming::web::routes::request_errors::{
    map_action_error, map_request_id_error,
};
use crate::friendship::application::ports::incoming::use_cases::parse_request_id;
use crate::shared::api::ApiResponse;
use crate::AppState;

/// Reject a friend request
///
/// The request is deleted, so the sender may ask again later.
#[utoipa::path(
    post,
    path = "/reject-friend-request",
    tag = "friendship",
    request_body = FriendRequestActionBody,
    responses(
        (
            status = 200,
            description = "Request rejected",
            body = inline(SuccessResponse<MessageResponse>),
            example = json!({ "success": true, "data": { "message": "Friend request rejected successfully." } })
        ),
        (status = 400, description = "Missing or malformed request id", body = ErrorResponse),
        (status = 404, description = "No such friend request", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    )
)]
#[post("/reject-friend-request")]
pub async fn reject_friend_request_handler(
    data: web::Data<AppState>,
    bearer: BearerToken,
    payload: web::Json<FriendRequestActionBody>,
) -> impl Responder {
    if let Err(resp) = authorize_or_response(&data, Operation::RejectFriendRequest, &bearer).await
    {
        return resp;
    }

    let id = match parse_request_id(payload.request_id.as_deref()) {
        Ok(id) => id,
        Err(err) => return map_request_id_error(err),
    };

    match data.friendship.reject.execute(id).await {
        Ok(()) => {
            info!(request_id = %id, "Friend request rejected");
            ApiResponse::message("Friend request rejected successfully.")
        }
        Err(err) => map_action_error(err),
    }
}
