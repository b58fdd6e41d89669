use async_trait::async_trait;

use crate::account::application::domain::entities::Account;

pub const KEYWORD_MAX_LENGTH: usize = 100;

/// A validated search keyword: 1 to 100 characters after trimming.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchKeyword(String);

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SearchKeywordError {
    #[error("Keyword cannot be empty")]
    Empty,

    #[error("Keyword must not exceed 100 characters")]
    TooLong,
}

impl SearchKeyword {
    pub fn new(keyword: &str) -> Result<Self, SearchKeywordError> {
        let keyword = keyword.trim();

        if keyword.is_empty() {
            return Err(SearchKeywordError::Empty);
        }

        if keyword.chars().count() > KEYWORD_MAX_LENGTH {
            return Err(SearchKeywordError::TooLong);
        }

        Ok(Self(keyword.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

#[derive(Debug, Clone, thiserror::Error)]
pub enum SearchAccountsError {
    #[error("Failed to search accounts: {0}")]
    QueryFailed(String),
}

#[async_trait]
pub trait SearchAccountsUseCase: Send + Sync {
    async fn execute(&self, keyword: SearchKeyword) -> Result<Vec<Account>, SearchAccountsError>;
}
