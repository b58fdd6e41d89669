use std::sync::Arc;

use async_trait::async_trait;

use crate::account::application::{
    domain::entities::AccountId,
    ports::{
        incoming::use_cases::{ResetPasswordCommand, ResetPasswordError, ResetPasswordUseCase},
        outgoing::{AccountQuery, AccountRepository, AccountRepositoryError, PasswordHasher},
    },
};

/// Overwrites the password hash of the account with the given exact email.
/// Issued tokens stay valid.
#[derive(Clone)]
pub struct ResetPasswordService<Q, R>
where
    Q: AccountQuery + Send + Sync,
    R: AccountRepository + Send + Sync,
{
    query: Q,
    repository: R,
    hasher: Arc<dyn PasswordHasher + Send + Sync>,
}

impl<Q, R> ResetPasswordService<Q, R>
where
    Q: AccountQuery + Send + Sync,
    R: AccountRepository + Send + Sync,
{
    pub fn new(query: Q, repository: R, hasher: Arc<dyn PasswordHasher + Send + Sync>) -> Self {
        Self {
            query,
            repository,
            hasher,
        }
    }
}

#[async_trait]
impl<Q, R> ResetPasswordUseCase for ResetPasswordService<Q, R>
where
    Q: AccountQuery + Send + Sync,
    R: AccountRepository + Send + Sync,
{
    async fn execute(&self, command: ResetPasswordCommand) -> Result<(), ResetPasswordError> {
        let account = self
            .query
            .find_by_email(command.email())
            .await
            .map_err(|e| ResetPasswordError::RepositoryError(e.to_string()))?
            .ok_or(ResetPasswordError::AccountNotFound)?;

        let password_hash = self
            .hasher
            .hash_password(command.new_password())
            .await
            .map_err(|e| ResetPasswordError::HashingFailed(e.to_string()))?;

        self.repository
            .update_password(AccountId::from(account.id), password_hash)
            .await
            .map_err(|e| match e {
                AccountRepositoryError::AccountNotFound => ResetPasswordError::AccountNotFound,
                other => ResetPasswordError::RepositoryError(other.to_string()),
            })
    }
}
