use async_trait::async_trait;

use crate::account::application::ports::outgoing::AccountQuery;
use crate::friendship::application::{
    domain::entities::FriendRequest,
    ports::{
        incoming::use_cases::{
            SendFriendRequestCommand, SendFriendRequestError, SendFriendRequestUseCase,
        },
        outgoing::{CreateFriendRequestData, FriendRequestRepository, FriendRequestRepositoryError},
    },
};

#[derive(Debug, Clone)]
pub struct SendFriendRequestService<A, R>
where
    A: AccountQuery + Send + Sync,
    R: FriendRequestRepository + Send + Sync,
{
    accounts: A,
    repository: R,
}

impl<A, R> SendFriendRequestService<A, R>
where
    A: AccountQuery + Send + Sync,
    R: FriendRequestRepository + Send + Sync,
{
    pub fn new(accounts: A, repository: R) -> Self {
        Self {
            accounts,
            repository,
        }
    }
}

#[async_trait]
impl<A, R> SendFriendRequestUseCase for SendFriendRequestService<A, R>
where
    A: AccountQuery + Send + Sync,
    R: FriendRequestRepository + Send + Sync,
{
    async fn execute(
        &self,
        command: SendFriendRequestCommand,
    ) -> Result<FriendRequest, SendFriendRequestError> {
        let sender = self
            .accounts
            .find_by_id(command.from_user())
            .await
            .map_err(|e| SendFriendRequestError::RepositoryError(e.to_string()))?;
        if sender.is_none() {
            return Err(SendFriendRequestError::SenderNotFound);
        }

        let recipient = self
            .accounts
            .find_by_id(command.to_user())
            .await
            .map_err(|e| SendFriendRequestError::RepositoryError(e.to_string()))?;
        if recipient.is_none() {
            return Err(SendFriendRequestError::RecipientNotFound);
        }

        self.repository
            .create(CreateFriendRequestData {
                from_user: command.from_user(),
                to_user: command.to_user(),
            })
            .await
            .map_err(|e| match e {
                FriendRequestRepositoryError::AlreadyExists => {
                    SendFriendRequestError::AlreadyExists
                }
                other => SendFriendRequestError::RepositoryError(other.to_string()),
            })
    }
}
