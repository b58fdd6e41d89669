use std::collections::BTreeMap;

use actix_web::{get, web, HttpResponse, Responder};
use tracing::{error, info, warn};

use crate::account::adapter::incoming::web::extractors::{authorize_or_response, BearerToken};
use crate::account::adapter::incoming::web::routes::account_response::AccountResponse;
use crate::account::application::ports::incoming::{
    access_policy::Operation,
    use_cases::{SearchAccountsError, SearchKeyword, SearchKeywordError},
};
use crate::api::schemas::{ErrorResponse, SuccessResponse};
use crate::shared::api::ApiResponse;
use crate::AppState;

/// Search accounts by email, first name or last name
///
/// Case-insensitive substring match, oldest accounts first.
#[utoipa::path(
    get,
    path = "/search/{keyword}",
    tag = "accounts",
    params(
        ("keyword" = String, Path, description = "Substring to look for (1 to 100 characters)")
    ),
    responses(
        (status = 200, description = "Matching accounts", body = inline(SuccessResponse<Vec<AccountResponse>>)),
        (status = 400, description = "Keyword empty or too long", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    )
)]
#[get("/search/{keyword}")]
pub async fn search_accounts_handler(
    data: web::Data<AppState>,
    bearer: BearerToken,
    path: web::Path<String>,
) -> impl Responder {
    if let Err(resp) = authorize_or_response(&data, Operation::SearchAccounts, &bearer).await {
        return resp;
    }

    let keyword = match SearchKeyword::new(&path.into_inner()) {
        Ok(keyword) => keyword,
        Err(err) => return map_keyword_error(err),
    };

    match data.account.search.execute(keyword.clone()).await {
        Ok(accounts) => {
            info!(keyword = %keyword.as_str(), matches = accounts.len(), "Account search");
            let body: Vec<AccountResponse> =
                accounts.into_iter().map(AccountResponse::from).collect();
            ApiResponse::success(body)
        }
        Err(SearchAccountsError::QueryFailed(ref e)) => {
            error!(error = %e, "Account search failed");
            ApiResponse::internal_error()
        }
    }
}

fn map_keyword_error(err: SearchKeywordError) -> HttpResponse {
    warn!(error = %err, "Search rejected");
    let mut fields = BTreeMap::new();
    fields.insert("keyword".to_string(), err.to_string());
    ApiResponse::validation_error("Invalid keyword", fields)
}
