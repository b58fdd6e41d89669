use async_trait::async_trait;

use crate::account::application::ports::{
    incoming::access_policy::{AccessDenied, AccessPolicy, Caller, Operation},
    outgoing::{AccountQuery, AuthTokenRepository},
};

/// Requires a known token belonging to an active account for every
/// non-public operation.
///
/// This authenticates the caller only. It does not scope what the caller may
/// act on: any active token holder can send a request on behalf of another
/// account or accept a request addressed to someone else.
#[derive(Debug, Clone)]
pub struct BearerTokenPolicy<T, Q>
where
    T: AuthTokenRepository + Send + Sync,
    Q: AccountQuery + Send + Sync,
{
    tokens: T,
    accounts: Q,
}

impl<T, Q> BearerTokenPolicy<T, Q>
where
    T: AuthTokenRepository + Send + Sync,
    Q: AccountQuery + Send + Sync,
{
    pub fn new(tokens: T, accounts: Q) -> Self {
        Self { tokens, accounts }
    }
}

#[async_trait]
impl<T, Q> AccessPolicy for BearerTokenPolicy<T, Q>
where
    T: AuthTokenRepository + Send + Sync,
    Q: AccountQuery + Send + Sync,
{
    async fn authorize(
        &self,
        operation: Operation,
        bearer: Option<&str>,
    ) -> Result<Caller, AccessDenied> {
        if operation.is_public() {
            return Ok(Caller::Anonymous);
        }

        let key = bearer
            .map(str::trim)
            .filter(|k| !k.is_empty())
            .ok_or(AccessDenied::MissingToken)?;

        let account_id = self
            .tokens
            .find_account_by_key(key)
            .await
            .map_err(|e| AccessDenied::LookupFailed(e.to_string()))?
            .ok_or(AccessDenied::InvalidToken)?;

        match self.accounts.find_by_id(account_id).await {
            Ok(Some(account)) if account.is_active => Ok(Caller::Account(account_id)),
            Ok(_) => Err(AccessDenied::InvalidToken),
            Err(e) => Err(AccessDenied::LookupFailed(e.to_string())),
        }
    }
}
