use crate::api::schemas::{ErrorDetail, ErrorResponse, MessageResponse, SuccessResponse};
use utoipa::openapi::security::{HttpAuthScheme, HttpBuilder, SecurityScheme};
use utoipa::OpenApi;

// Accounts
use crate::account::adapter::incoming::web::routes::{
    AccountResponse, LoginRequestDto, LoginResponse, PasswordResetRequest, SignupRequest,
};

// Friendship
use crate::friendship::adapter::incoming::web::routes::{
    AccountSummaryResponse, FriendRequestActionBody, FriendRequestResponse,
    PendingFriendRequestResponse, SendFriendRequestBody, SendFriendRequestResponse,
};

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Social Network API",
        version = "1.0.0",
        description = "Accounts, token login, user search and friend requests"
    ),
    paths(
        // Account endpoints
        crate::account::adapter::incoming::web::routes::signup_handler,
        crate::account::adapter::incoming::web::routes::login_handler,
        crate::account::adapter::incoming::web::routes::password_reset_handler,
        crate::account::adapter::incoming::web::routes::search_accounts_handler,

        // Friendship endpoints
        crate::friendship::adapter::incoming::web::routes::send_friend_request_handler,
        crate::friendship::adapter::incoming::web::routes::accept_friend_request_handler,
        crate::friendship::adapter::incoming::web::routes::reject_friend_request_handler,
        crate::friendship::adapter::incoming::web::routes::list_friends_handler,
        crate::friendship::adapter::incoming::web::routes::list_pending_friend_requests_handler,
    ),
    components(
        schemas(
            // Response wrappers
            SuccessResponse<AccountResponse>,
            ErrorResponse,
            ErrorDetail,
            MessageResponse,

            // Account DTOs
            SignupRequest,
            AccountResponse,
            LoginRequestDto,
            LoginResponse,
            PasswordResetRequest,

            // Friendship DTOs
            SendFriendRequestBody,
            SendFriendRequestResponse,
            FriendRequestActionBody,
            FriendRequestResponse,
            AccountSummaryResponse,
            PendingFriendRequestResponse
        )
    ),
    modifiers(&SecurityAddon),
    tags(
        (name = "accounts", description = "Signup, login, password reset and search"),
        (name = "friendship", description = "Friend requests and friend lists"),
    )
)]
pub struct ApiDoc;

/// Documents the `Authorization: Bearer <key>` header checked when `ACCESS_POLICY=token`.
struct SecurityAddon;

impl utoipa::Modify for SecurityAddon {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        if let Some(components) = openapi.components.as_mut() {
            components.add_security_scheme(
                "TokenAuth",
                SecurityScheme::Http(
                    HttpBuilder::new()
                        .scheme(HttpAuthScheme::Bearer)
                        .bearer_format("Opaque 40-character key")
                        .description(Some("Token returned by /login"))
                        .build(),
                ),
            )
        }
    }
}
