// application/ports/outgoing/account_query.rs
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use uuid::Uuid;

use crate::account::application::domain::entities::{Account, AccountId};

/// Read model for account lookups.
/// Carries the password hash so credential checks can run without a second query.
#[derive(Debug, Clone)]
pub struct AccountQueryResult {
    pub id: Uuid,
    pub email: String,
    pub first_name: String,
    pub last_name: String,
    pub password_hash: String,
    pub is_active: bool,
    pub is_staff: bool,
    pub date_joined: DateTime<Utc>,
}

impl AccountQueryResult {
    pub fn to_account(&self) -> Account {
        Account {
            id: AccountId::from(self.id),
            email: self.email.clone(),
            first_name: self.first_name.clone(),
            last_name: self.last_name.clone(),
            is_active: self.is_active,
            is_staff: self.is_staff,
            date_joined: self.date_joined,
        }
    }
}

#[derive(Debug, Clone, thiserror::Error)]
pub enum AccountQueryError {
    #[error("Database error: {0}")]
    DatabaseError(String),
}

#[async_trait]
pub trait AccountQuery: Send + Sync {
    async fn find_by_id(
        &self,
        account_id: AccountId,
    ) -> Result<Option<AccountQueryResult>, AccountQueryError>;

    /// Exact, case-sensitive match
    async fn find_by_email(&self, email: &str)
        -> Result<Option<AccountQueryResult>, AccountQueryError>;

    async fn find_by_email_ignore_case(
        &self,
        email: &str,
    ) -> Result<Option<AccountQueryResult>, AccountQueryError>;

    /// Case-insensitive substring match on email, first name or last name,
    /// ordered by `date_joined` then `id`.
    async fn search(&self, keyword: &str) -> Result<Vec<AccountQueryResult>, AccountQueryError>;
}
