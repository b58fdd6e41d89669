use actix_web::{post, web, HttpResponse, Responder};
use serde::{Deserialize, Serialize};
use tracing::{error, info, warn};
use utoipa::ToSchema;

use crate::account::adapter::incoming::web::extractors::{authorize_or_response, BearerToken};
use crate::account::adapter::incoming::web::routes::account_response::AccountResponse;
use crate::account::application::ports::incoming::{
    access_policy::Operation,
    use_cases::{LoginCommand, LoginError},
};
use crate::api::schemas::{ErrorResponse, SuccessResponse};
use crate::shared::api::ApiResponse;
use crate::AppState;

/// Login request from client
#[derive(Debug, Deserialize, ToSchema)]
pub struct LoginRequestDto {
    #[schema(example = "alice@example.com")]
    pub email: Option<String>,

    #[schema(example = "n3w-Secret!")]
    pub password: Option<String>,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct LoginResponse {
    /// Opaque bearer key, stable across logins
    #[schema(example = "9944b09199c62bcf9418ad846dd0e4bbdfc6ee4b")]
    pub token: String,

    pub user: AccountResponse,
}

/// Exchange credentials for the account's token
#[utoipa::path(
    post,
    path = "/login",
    tag = "accounts",
    request_body = LoginRequestDto,
    responses(
        (status = 200, description = "Login successful", body = inline(SuccessResponse<LoginResponse>)),
        (
            status = 400,
            description = "Invalid credentials",
            body = ErrorResponse,
            example = json!({
                "success": false,
                "error": { "code": "INVALID_CREDENTIALS", "message": "Invalid credentials" }
            })
        ),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    )
)]
#[post("/login")]
pub async fn login_handler(
    data: web::Data<AppState>,
    bearer: BearerToken,
    payload: web::Json<LoginRequestDto>,
) -> impl Responder {
    if let Err(resp) = authorize_or_response(&data, Operation::Login, &bearer).await {
        return resp;
    }

    let dto = payload.into_inner();

    let command = match LoginCommand::new(dto.email, dto.password) {
        Ok(cmd) => cmd,
        Err(err) => return map_login_error(err),
    };

    info!(email = %command.email, "Login attempt");

    match data.account.login.execute(command).await {
        Ok(output) => {
            info!(account_id = %output.account.id, "Login successful");
            ApiResponse::success(LoginResponse {
                token: output.token,
                user: AccountResponse::from(output.account),
            })
        }
        Err(err) => map_login_error(err),
    }
}

fn map_login_error(err: LoginError) -> HttpResponse {
    match err {
        LoginError::InvalidCredentials => {
            warn!("Login failed: invalid credentials");
            ApiResponse::bad_request("INVALID_CREDENTIALS", "Invalid credentials")
        }
        LoginError::HashingFailed(ref e) => {
            error!(error = %e, "Password verification failed");
            ApiResponse::internal_error()
        }
        LoginError::TokenError(ref e) => {
            error!(error = %e, "Token issuance failed");
            ApiResponse::internal_error()
        }
        LoginError::RepositoryError(ref e) => {
            error!(error = %e, "Database query failed");
            ApiResponse::internal_error()
        }
    }
}
