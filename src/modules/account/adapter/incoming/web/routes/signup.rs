use actix_web::{post, web, HttpResponse, Responder};
use serde::Deserialize;
use tracing::{error, info, warn};
use utoipa::ToSchema;

use crate::account::adapter::incoming::web::extractors::{authorize_or_response, BearerToken};
use crate::account::adapter::incoming::web::routes::account_response::{
    validation_response, AccountResponse,
};
use crate::account::application::ports::incoming::{
    access_policy::Operation,
    use_cases::{CreateAccountCommand, CreateAccountError},
};
use crate::api::schemas::{ErrorResponse, SuccessResponse};
use crate::shared::api::ApiResponse;
use crate::AppState;

//
// ──────────────────────────────────────────────────────────
// Request DTO
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Deserialize, ToSchema)]
pub struct SignupRequest {
    #[schema(example = "alice@example.com")]
    pub email: Option<String>,

    #[schema(example = "Alice")]
    pub first_name: Option<String>,

    #[schema(example = "Liddell")]
    pub last_name: Option<String>,
}

//
// ──────────────────────────────────────────────────────────
// Route
// ──────────────────────────────────────────────────────────
//

/// Register a new account
///
/// The account is created with a random initial password; use the password
/// reset endpoint to choose one.
#[utoipa::path(
    post,
    path = "/signup",
    tag = "accounts",
    request_body = SignupRequest,
    responses(
        (status = 201, description = "Account created", body = inline(SuccessResponse<AccountResponse>)),
        (
            status = 400,
            description = "Invalid input or email already registered",
            body = ErrorResponse,
            example = json!({
                "success": false,
                "error": {
                    "code": "VALIDATION_ERROR",
                    "message": "Invalid input",
                    "fields": { "email": "Enter a valid email address." }
                }
            })
        ),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    )
)]
#[post("/signup")]
pub async fn signup_handler(
    data: web::Data<AppState>,
    bearer: BearerToken,
    payload: web::Json<SignupRequest>,
) -> impl Responder {
    if let Err(resp) = authorize_or_response(&data, Operation::Signup, &bearer).await {
        return resp;
    }

    let dto = payload.into_inner();

    let command = match CreateAccountCommand::new(dto.email, dto.first_name, dto.last_name) {
        Ok(cmd) => cmd,
        Err(errors) => {
            warn!(fields = ?errors.fields, "Signup rejected: invalid input");
            return validation_response(errors);
        }
    };

    info!(email = %command.email(), "Signup attempt");

    match data.account.create.execute(command).await {
        Ok(account) => {
            info!(account_id = %account.id, email = %account.email, "Account created");
            ApiResponse::created(AccountResponse::from(account))
        }
        Err(err) => map_create_account_error(err),
    }
}

//
// ──────────────────────────────────────────────────────────
// Error Mapping
// ──────────────────────────────────────────────────────────
//

fn map_create_account_error(err: CreateAccountError) -> HttpResponse {
    match err {
        CreateAccountError::EmailAlreadyExists => {
            warn!("Signup rejected: email already registered");
            ApiResponse::bad_request(
                "EMAIL_ALREADY_REGISTERED",
                "An account with this email already exists.",
            )
        }
        CreateAccountError::HashingFailed(ref e) => {
            error!(error = %e, "Password hashing failed during signup");
            ApiResponse::internal_error()
        }
        CreateAccountError::RepositoryError(ref e) => {
            error!(error = %e, "Failed to create account");
            ApiResponse::internal_error()
        }
    }
}
