use actix_web::{dev::Payload, web, FromRequest, HttpRequest, HttpResponse};
use std::{
    convert::Infallible,
    future::{ready, Ready},
};
use tracing::{error, warn};

use crate::account::application::ports::incoming::access_policy::{
    AccessDenied, Caller, Operation,
};
use crate::shared::api::ApiResponse;
use crate::AppState;

/// Raw `Authorization: Bearer <key>` value, if the request carried one.
/// Never rejects; the configured access policy decides what a missing key means.
#[derive(Debug, Clone, Default)]
pub struct BearerToken(pub Option<String>);

impl BearerToken {
    pub fn as_deref(&self) -> Option<&str> {
        self.0.as_deref()
    }
}

impl FromRequest for BearerToken {
    type Error = Infallible;
    type Future = Ready<Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _payload: &mut Payload) -> Self::Future {
        ready(Ok(BearerToken(extract_token_from_header(req))))
    }
}

fn extract_token_from_header(req: &HttpRequest) -> Option<String> {
    req.headers()
        .get("Authorization")?
        .to_str()
        .ok()?
        .strip_prefix("Bearer ")
        .map(|s| s.trim().to_string())
}

pub async fn authorize_or_response(
    data: &web::Data<AppState>,
    operation: Operation,
    bearer: &BearerToken,
) -> Result<Caller, HttpResponse> {
    match data
        .access_policy
        .authorize(operation, bearer.as_deref())
        .await
    {
        Ok(caller) => Ok(caller),

        Err(AccessDenied::MissingToken) => {
            warn!(operation = operation.as_str(), "Rejected: missing bearer token");
            Err(ApiResponse::unauthorized(
                "MISSING_AUTH_HEADER",
                "Missing or invalid authorization header",
            ))
        }

        Err(AccessDenied::InvalidToken) => {
            warn!(operation = operation.as_str(), "Rejected: invalid bearer token");
            Err(ApiResponse::unauthorized("INVALID_TOKEN", "Invalid token."))
        }

        Err(AccessDenied::LookupFailed(msg)) => {
            error!(operation = operation.as_str(), error = %msg, "Token lookup failed");
            Err(ApiResponse::internal_error())
        }
    }
}
