use async_trait::async_trait;
use uuid::Uuid;

use crate::account::application::domain::entities::AccountId;
use crate::account::application::ports::incoming::use_cases::{FieldError, InvalidFields};
use crate::friendship::application::domain::entities::FriendRequest;

//
// ──────────────────────────────────────────────────────────
// Send Friend Request Command
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Clone, PartialEq)]
pub struct SendFriendRequestCommand {
    from_user: AccountId,
    to_user: AccountId,
}

fn required_account_id(
    errors: &mut InvalidFields,
    field: &'static str,
    value: Option<String>,
) -> Option<AccountId> {
    let value = value.map(|v| v.trim().to_string()).unwrap_or_default();

    if value.is_empty() {
        errors.push(field, FieldError::Required);
        return None;
    }

    match Uuid::parse_str(&value) {
        Ok(id) => Some(AccountId::from(id)),
        Err(_) => {
            errors.push(field, FieldError::InvalidUuid);
            None
        }
    }
}

impl SendFriendRequestCommand {
    pub fn new(from_user: Option<String>, to_user: Option<String>) -> Result<Self, InvalidFields> {
        let mut errors = InvalidFields::default();

        let from_user = required_account_id(&mut errors, "from_user_id", from_user);
        let to_user = required_account_id(&mut errors, "to_user_id", to_user);

        match (from_user, to_user) {
            (Some(from_user), Some(to_user)) if errors.is_empty() => {
                if from_user == to_user {
                    errors.push("to_user_id", FieldError::SameAsSender);
                    return Err(errors);
                }
                Ok(Self { from_user, to_user })
            }
            _ => Err(errors),
        }
    }

    pub fn from_user(&self) -> AccountId {
        self.from_user
    }

    pub fn to_user(&self) -> AccountId {
        self.to_user
    }
}

#[derive(Debug, Clone, thiserror::Error)]
pub enum SendFriendRequestError {
    #[error("Sender account does not exist")]
    SenderNotFound,

    #[error("Recipient account does not exist")]
    RecipientNotFound,

    #[error("Friend request already sent")]
    AlreadyExists,

    #[error("Repository error: {0}")]
    RepositoryError(String),
}

#[async_trait]
pub trait SendFriendRequestUseCase: Send + Sync {
    async fn execute(
        &self,
        command: SendFriendRequestCommand,
    ) -> Result<FriendRequest, SendFriendRequestError>;
}
