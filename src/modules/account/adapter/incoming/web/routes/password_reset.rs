use actix_web::{post, web, HttpResponse, Responder};
use serde::Deserialize;
use tracing::{error, info, warn};
use utoipa::ToSchema;

use crate::account::adapter::incoming::web::extractors::{authorize_or_response, BearerToken};
use crate::account::adapter::incoming::web::routes::account_response::validation_response;
use crate::account::application::ports::incoming::{
    access_policy::Operation,
    use_cases::{ResetPasswordCommand, ResetPasswordError},
};
use crate::api::schemas::{ErrorResponse, MessageResponse, SuccessResponse};
use crate::shared::api::ApiResponse;
use crate::AppState;

#[derive(Debug, Deserialize, ToSchema)]
pub struct PasswordResetRequest {
    #[schema(example = "alice@example.com")]
    pub email: Option<String>,

    #[schema(example = "n3w-Secret!")]
    pub new_password: Option<String>,
}

/// Set a new password for an account
#[utoipa::path(
    post,
    path = "/password-reset",
    tag = "accounts",
    request_body = PasswordResetRequest,
    responses(
        (
            status = 200,
            description = "Password changed",
            body = inline(SuccessResponse<MessageResponse>),
            example = json!({ "success": true, "data": { "message": "Password reset successful" } })
        ),
        (status = 400, description = "Invalid input", body = ErrorResponse),
        (status = 404, description = "No account with this email", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    )
)]
#[post("/password-reset")]
pub async fn password_reset_handler(
    data: web::Data<AppState>,
    bearer: BearerToken,
    payload: web::Json<PasswordResetRequest>,
) -> impl Responder {
    if let Err(resp) = authorize_or_response(&data, Operation::PasswordReset, &bearer).await {
        return resp;
    }

    let dto = payload.into_inner();

    let command = match ResetPasswordCommand::new(dto.email, dto.new_password) {
        Ok(cmd) => cmd,
        Err(errors) => {
            warn!(fields = ?errors.fields, "Password reset rejected: invalid input");
            return validation_response(errors);
        }
    };

    let email = command.email().to_string();

    match data.account.reset_password.execute(command).await {
        Ok(()) => {
            info!(email = %email, "Password reset");
            ApiResponse::message("Password reset successful")
        }
        Err(err) => map_reset_password_error(err, &email),
    }
}

fn map_reset_password_error(err: ResetPasswordError, email: &str) -> HttpResponse {
    match err {
        ResetPasswordError::AccountNotFound => {
            warn!(email = %email, "Password reset for unknown account");
            ApiResponse::not_found("ACCOUNT_NOT_FOUND", "User with this email does not exist.")
        }
        ResetPasswordError::HashingFailed(ref e) => {
            error!(error = %e, "Password hashing failed during reset");
            ApiResponse::internal_error()
        }
        ResetPasswordError::RepositoryError(ref e) => {
            error!(error = %e, "Failed to reset password");
            ApiResponse::internal_error()
        }
    }
}
