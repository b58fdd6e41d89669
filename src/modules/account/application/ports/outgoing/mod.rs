pub mod account_query;
pub mod account_repository;
pub mod auth_token_repository;
pub mod password_hasher;

pub use account_query::{AccountQuery, AccountQueryError, AccountQueryResult};
pub use account_repository::{AccountRepository, AccountRepositoryError, CreateAccountData};
pub use auth_token_repository::{AuthTokenRepository, AuthTokenRepositoryError};
pub use password_hasher::{HashError, PasswordHasher};
