use actix_web::{get, web, Responder};
use tracing::info;

use crate::account::adapter::incoming::web::extractors::{authorize_or_response, BearerToken};
use crate::account::application::ports::incoming::access_policy::Operation;
use crate::api::schemas::{ErrorResponse, SuccessResponse};
use crate::friendship::adapter::incoming::web::routes::dto::{
    EmailQuery, PendingFriendRequestResponse,
};
use crate::friendship::adapter::incoming::web::routes::request_errors::{
    email_param, map_list_error,
};
use crate::shared::api::ApiResponse;
use crate::AppState;

/// List friend requests waiting for an account's answer
#[utoipa::path(
    get,
    path = "/list-pending-friend-requests",
    tag = "friendship",
    params(EmailQuery),
    responses(
        (status = 200, description = "Pending requests, oldest first", body = inline(SuccessResponse<Vec<PendingFriendRequestResponse>>)),
        (status = 400, description = "Email parameter missing", body = ErrorResponse),
        (status = 404, description = "No account with this email", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    )
)]
#[get("/list-pending-friend-requests")]
pub async fn list_pending_friend_requests_handler(
    data: web::Data<AppState>,
    bearer: BearerToken,
    query: web::Query<EmailQuery>,
) -> impl Responder {
    if let Err(resp) =
        authorize_or_response(&data, Operation::ListPendingFriendRequests, &bearer).await
    {
        return resp;
    }

    let email = match email_param(&query) {
        Ok(email) => email,
        Err(resp) => return resp,
    };

    match data.friendship.list_pending.execute(email).await {
        Ok(pending) => {
            info!(email = %email, count = pending.len(), "Listed pending friend requests");
            let body: Vec<PendingFriendRequestResponse> = pending
                .into_iter()
                .map(PendingFriendRequestResponse::from)
                .collect();
            ApiResponse::success(body)
        }
        Err(err) => map_list_error(err, email),
    }
}
