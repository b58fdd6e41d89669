use async_trait::async_trait;

use crate::account::application::domain::entities::Account;
use crate::account::application::helpers::{AccountIdentityResolver, ResolveAccountError};
use crate::friendship::application::{
    domain::entities::{AccountSummary, PendingFriendRequest},
    ports::{
        incoming::use_cases::{ListFriendsError, ListFriendsUseCase, ListPendingFriendRequestsUseCase},
        outgoing::FriendRequestQuery,
    },
};

async fn resolve(
    resolver: &AccountIdentityResolver,
    email: &str,
) -> Result<Account, ListFriendsError> {
    resolver.by_email(email).await.map_err(|e| match e {
        ResolveAccountError::NotFound => ListFriendsError::AccountNotFound,
        ResolveAccountError::RepositoryError(msg) => ListFriendsError::RepositoryError(msg),
    })
}

#[derive(Clone)]
pub struct ListFriendsService<Q>
where
    Q: FriendRequestQuery + Send + Sync,
{
    resolver: AccountIdentityResolver,
    query: Q,
}

impl<Q> ListFriendsService<Q>
where
    Q: FriendRequestQuery + Send + Sync,
{
    pub fn new(resolver: AccountIdentityResolver, query: Q) -> Self {
        Self { resolver, query }
    }
}

#[async_trait]
impl<Q> ListFriendsUseCase for ListFriendsService<Q>
where
    Q: FriendRequestQuery + Send + Sync,
{
    async fn execute(&self, email: &str) -> Result<Vec<AccountSummary>, ListFriendsError> {
        let account = resolve(&self.resolver, email).await?;

        self.query
            .friends_of(account.id)
            .await
            .map_err(|e| ListFriendsError::RepositoryError(e.to_string()))
    }
}

#[derive(Clone)]
pub struct ListPendingFriendRequestsService<Q>
where
    Q: FriendRequestQuery + Send + Sync,
{
    resolver: AccountIdentityResolver,
    query: Q,
}

impl<Q> ListPendingFriendRequestsService<Q>
where
    Q: FriendRequestQuery + Send + Sync,
{
    pub fn new(resolver: AccountIdentityResolver, query: Q) -> Self {
        Self { resolver, query }
    }
}

#[async_trait]
impl<Q> ListPendingFriendRequestsUseCase for ListPendingFriendRequestsService<Q>
where
    Q: FriendRequestQuery + Send + Sync,
{
    async fn execute(&self, email: &str) -> Result<Vec<PendingFriendRequest>, ListFriendsError> {
        let account = resolve(&self.resolver, email).await?;

        self.query
            .pending_for(account.id)
            .await
            .map_err(|e| ListFriendsError::RepositoryError(e.to_string()))
    }
}
