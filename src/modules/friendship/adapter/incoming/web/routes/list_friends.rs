use actix_web::{get, web, Responder};
use tracing::info;

use crate::account::adapter::incoming::web::extractors::{authorize_or_response, BearerToken};
use crate::account::application::ports::incoming::access_policy::Operation;
use crate::api::schemas::{ErrorResponse, SuccessResponse};
use crate::friendship::adapter::incoming::web::routes::dto::{AccountSummaryResponse, EmailQuery};
use crate::friendship::adapter::incoming::web::routes::request_errors::{
    email_param, map_list_error,
};
use crate::shared::api::ApiResponse;
use crate::AppState;

/// List the friends of an account
///
/// Friends are the senders of requests this account has accepted.
#[utoipa::path(
    get,
    path = "/list-friends",
    tag = "friendship",
    params(EmailQuery),
    responses(
        (status = 200, description = "Friends, oldest request first", body = inline(SuccessResponse<Vec<AccountSummaryResponse>>)),
        (
            status = 400,
            description = "Email parameter missing",
            body = ErrorResponse,
            example = json!({
                "success": false,
                "error": {
                    "code": "MISSING_EMAIL",
                    "message": "Please provide an email in the query parameter 'email'."
                }
            })
        ),
        (status = 404, description = "No account with this email", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    )
)]
#[get("/list-friends")]
pub async fn list_friends_handler(
    data: web::Data<AppState>,
    bearer: BearerToken,
    query: web::Query<EmailQuery>,
) -> impl Responder {
    if let Err(resp) = authorize_or_response(&data, Operation::ListFriends, &bearer).await {
        return resp;
    }

    let email = match email_param(&query) {
        Ok(email) => email,
        Err(resp) => return resp,
    };

    match data.friendship.list_friends.execute(email).await {
        Ok(friends) => {
            info!(email = %email, count = friends.len(), "Listed friends");
            let body: Vec<AccountSummaryResponse> = friends
                .into_iter()
                .map(AccountSummaryResponse::from)
                .collect();
            ApiResponse::success(body)
        }
        Err(err) => map_list_error(err, email),
    }
}
