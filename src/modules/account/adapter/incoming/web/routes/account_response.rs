use std::collections::BTreeMap;

use actix_web::HttpResponse;
use chrono::{DateTime, Utc};
use serde::Serialize;
use utoipa::ToSchema;
use uuid::Uuid;

use crate::account::application::domain::entities::Account;
use crate::account::application::ports::incoming::use_cases::InvalidFields;
use crate::shared::api::ApiResponse;

/// Public view of an account. The password hash is never part of it.
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct AccountResponse {
    #[schema(example = "123e4567-e89b-12d3-a456-426614174000")]
    pub id: Uuid,

    #[schema(example = "alice@example.com")]
    pub email: String,

    #[schema(example = "Alice")]
    pub first_name: String,

    #[schema(example = "Liddell")]
    pub last_name: String,

    #[schema(example = true)]
    pub is_active: bool,

    #[schema(example = false)]
    pub is_staff: bool,

    pub date_joined: DateTime<Utc>,
}

impl From<Account> for AccountResponse {
    fn from(account: Account) -> Self {
        Self {
            id: account.id.value(),
            email: account.email,
            first_name: account.first_name,
            last_name: account.last_name,
            is_active: account.is_active,
            is_staff: account.is_staff,
            date_joined: account.date_joined,
        }
    }
}

/// 400 VALIDATION_ERROR carrying one message per offending field
pub fn validation_response(errors: InvalidFields) -> HttpResponse {
    let fields: BTreeMap<String, String> = errors
        .fields
        .iter()
        .map(|(field, err)| (field.to_string(), err.to_string()))
        .collect();

    ApiResponse::validation_error("Invalid input", fields)
}
