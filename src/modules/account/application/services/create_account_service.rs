use std::sync::Arc;

use async_trait::async_trait;

use crate::account::application::{
    domain::entities::Account,
    ports::{
        incoming::use_cases::{CreateAccountCommand, CreateAccountError, CreateAccountUseCase},
        outgoing::{AccountRepository, AccountRepositoryError, CreateAccountData, PasswordHasher},
    },
    services::credentials::generate_initial_password,
};

#[derive(Clone)]
pub struct CreateAccountService<R>
where
    R: AccountRepository + Send + Sync,
{
    repository: R,
    hasher: Arc<dyn PasswordHasher + Send + Sync>,
}

impl<R> CreateAccountService<R>
where
    R: AccountRepository + Send + Sync,
{
    pub fn new(repository: R, hasher: Arc<dyn PasswordHasher + Send + Sync>) -> Self {
        Self { repository, hasher }
    }
}

#[async_trait]
impl<R> CreateAccountUseCase for CreateAccountService<R>
where
    R: AccountRepository + Send + Sync,
{
    async fn execute(&self, command: CreateAccountCommand) -> Result<Account, CreateAccountError> {
        let password_hash = self
            .hasher
            .hash_password(&generate_initial_password())
            .await
            .map_err(|e| CreateAccountError::HashingFailed(e.to_string()))?;

        let data = CreateAccountData {
            email: command.email().to_string(),
            first_name: command.first_name().to_string(),
            last_name: command.last_name().to_string(),
            password_hash,
        };

        self.repository
            .create_account(data)
            .await
            .map_err(|e| match e {
                AccountRepositoryError::EmailAlreadyExists => {
                    CreateAccountError::EmailAlreadyExists
                }
                other => CreateAccountError::RepositoryError(other.to_string()),
            })
    }
}
