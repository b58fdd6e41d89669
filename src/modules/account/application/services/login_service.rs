use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::OnceCell;

use crate::account::application::{
    domain::entities::AccountId,
    ports::{
        incoming::use_cases::{LoginCommand, LoginError, LoginOutput, LoginUseCase},
        outgoing::{AccountQuery, AuthTokenRepository, AuthTokenRepositoryError, PasswordHasher},
    },
    services::credentials::{generate_initial_password, generate_token_key},
};

#[derive(Clone)]
pub struct LoginService<Q, T>
where
    Q: AccountQuery + Send + Sync,
    T: AuthTokenRepository + Send + Sync,
{
    query: Q,
    tokens: T,
    hasher: Arc<dyn PasswordHasher + Send + Sync>,
    /// Verified against when the email is unknown, so every attempt pays for a hash check
    decoy: Arc<OnceCell<String>>,
}

impl<Q, T> LoginService<Q, T>
where
    Q: AccountQuery + Send + Sync,
    T: AuthTokenRepository + Send + Sync,
{
    pub fn new(query: Q, tokens: T, hasher: Arc<dyn PasswordHasher + Send + Sync>) -> Self {
        Self {
            query,
            tokens,
            hasher,
            decoy: Arc::new(OnceCell::new()),
        }
    }

    /// Hashed once, with the same hasher and parameters as real accounts.
    async fn decoy_hash(&self) -> Result<&str, LoginError> {
        self.decoy
            .get_or_try_init(|| async {
                let password = generate_initial_password();
                self.hasher.hash_password(&password).await
            })
            .await
            .map(String::as_str)
            .map_err(|e| LoginError::HashingFailed(e.to_string()))
    }

    /// Returns the account's token, creating it on first login.
    async fn token_for(&self, account_id: AccountId) -> Result<String, LoginError> {
        if let Some(key) = self
            .tokens
            .find_key_for_account(account_id)
            .await
            .map_err(|e| LoginError::TokenError(e.to_string()))?
        {
            return Ok(key);
        }

        match self
            .tokens
            .create_for_account(account_id, generate_token_key())
            .await
        {
            Ok(key) => Ok(key),
            // A concurrent login created it first
            Err(AuthTokenRepositoryError::TokenAlreadyExists) => self
                .tokens
                .find_key_for_account(account_id)
                .await
                .map_err(|e| LoginError::TokenError(e.to_string()))?
                .ok_or_else(|| LoginError::TokenError("token missing after conflict".into())),
            Err(e) => Err(LoginError::TokenError(e.to_string())),
        }
    }
}

#[async_trait]
impl<Q, T> LoginUseCase for LoginService<Q, T>
where
    Q: AccountQuery + Send + Sync,
    T: AuthTokenRepository + Send + Sync,
{
    async fn execute(&self, command: LoginCommand) -> Result<LoginOutput, LoginError> {
        let account = self
            .query
            .find_by_email(&command.email)
            .await
            .map_err(|e| LoginError::RepositoryError(e.to_string()))?;

        let hash = match &account {
            Some(account) => account.password_hash.as_str(),
            None => self.decoy_hash().await?,
        };

        let matches = self
            .hasher
            .verify_password(&command.password, hash)
            .await
            .map_err(|e| LoginError::HashingFailed(e.to_string()))?;

        let account = match account {
            Some(account) if matches && account.is_active => account.to_account(),
            _ => return Err(LoginError::InvalidCredentials),
        };

        let token = self.token_for(account.id).await?;

        Ok(LoginOutput { token, account })
    }
}
