use std::sync::Arc;

use crate::account::application::domain::entities::Account;
use crate::account::application::ports::outgoing::account_query::{AccountQuery, AccountQueryError};

#[derive(Debug, Clone, thiserror::Error)]
pub enum ResolveAccountError {
    #[error("Account not found")]
    NotFound,

    #[error("Repository error: {0}")]
    RepositoryError(String),
}

/// Resolves the account a caller refers to by email, ignoring case.
#[derive(Clone)]
pub struct AccountIdentityResolver {
    account_query: Arc<dyn AccountQuery + Send + Sync>,
}

impl AccountIdentityResolver {
    pub fn new(account_query: Arc<dyn AccountQuery + Send + Sync>) -> Self {
        Self { account_query }
    }

    pub async fn by_email(&self, email: &str) -> Result<Account, ResolveAccountError> {
        let email = email.trim();
        if email.is_empty() {
            return Err(ResolveAccountError::NotFound);
        }

        match self.account_query.find_by_email_ignore_case(email).await {
            Ok(Some(account)) => Ok(account.to_account()),
            Ok(None) => Err(ResolveAccountError::NotFound),
            Err(AccountQueryError::DatabaseError(msg)) => {
                Err(ResolveAccountError::RepositoryError(msg))
            }
        }
    }
}
