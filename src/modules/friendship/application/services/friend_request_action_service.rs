use async_trait::async_trait;

use crate::friendship::application::{
    domain::entities::FriendRequestId,
    ports::{
        incoming::use_cases::{
            AcceptFriendRequestUseCase, FriendRequestActionError, RejectFriendRequestUseCase,
        },
        outgoing::{FriendRequestRepository, FriendRequestRepositoryError},
    },
};

fn map_repository_error(err: FriendRequestRepositoryError) -> FriendRequestActionError {
    match err {
        FriendRequestRepositoryError::NotFound => FriendRequestActionError::NotFound,
        other => FriendRequestActionError::RepositoryError(other.to_string()),
    }
}

#[derive(Debug, Clone)]
pub struct AcceptFriendRequestService<R>
where
    R: FriendRequestRepository + Send + Sync,
{
    repository: R,
}

impl<R> AcceptFriendRequestService<R>
where
    R: FriendRequestRepository + Send + Sync,
{
    pub fn new(repository: R) -> Self {
        Self { repository }
    }
}

#[async_trait]
impl<R> AcceptFriendRequestUseCase for AcceptFriendRequestService<R>
where
    R: FriendRequestRepository + Send + Sync,
{
    async fn execute(&self, id: FriendRequestId) -> Result<(), FriendRequestActionError> {
        self.repository.accept(id).await.map_err(map_repository_error)
    }
}

#[derive(Debug, Clone)]
pub struct RejectFriendRequestService<R>
where
    R: FriendRequestRepository + Send + Sync,
{
    repository: R,
}

impl<R> RejectFriendRequestService<R>
where
    R: FriendRequestRepository + Send + Sync,
{
    pub fn new(repository: R) -> Self {
        Self { repository }
    }
}

#[async_trait]
impl<R> RejectFriendRequestUseCase for RejectFriendRequestService<R>
where
    R: FriendRequestRepository + Send + Sync,
{
    async fn execute(&self, id: FriendRequestId) -> Result<(), FriendRequestActionError> {
        self.repository.delete(id).await.map_err(map_repository_error)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mockall::{mock, predicate::*};
    use uuid::Uuid;

    use crate::friendship::application::domain::entities::FriendRequest;
    use crate::friendship::application::ports::outgoing::CreateFriendRequestData;

    mock! {
        pub FriendRequestRepositoryMock {}
        #[async_trait]
        impl FriendRequestRepository for FriendRequestRepositoryMock {
            async fn create(
                &self,
                data: CreateFriendRequestData,
            ) -> Result<FriendRequest, FriendRequestRepositoryError>;

            async fn accept(&self, id: FriendRequestId) -> Result<(), FriendRequestRepositoryError>;

            async fn delete(&self, id: FriendRequestId) -> Result<(), FriendRequestRepositoryError>;
        }
    }

    #[tokio::test]
    async fn accept_marks_the_request() {
        let id = FriendRequestId::from(Uuid::new_v4());

        let mut repository = MockFriendRequestRepositoryMock::new();
        repository
            .expect_accept()
            .with(eq(id))
            .times(1)
            .returning(|_| Ok(()));
        repository.expect_delete().never();

        let service = AcceptFriendRequestService::new(repository);

        assert!(service.execute(id).await.is_ok());
    }

    #[tokio::test]
    async fn accept_unknown_request_is_not_found() {
        let mut repository = MockFriendRequestRepositoryMock::new();
        repository
            .expect_accept()
            .returning(|_| Err(FriendRequestRepositoryError::NotFound));

        let service = AcceptFriendRequestService::new(repository);
        let result = service
            .execute(FriendRequestId::from(Uuid::new_v4()))
            .await;

        assert!(matches!(result, Err(FriendRequestActionError::NotFound)));
    }

    #[tokio::test]
    async fn reject_deletes_the_request() {
        let id = FriendRequestId::from(Uuid::new_v4());

        let mut repository = MockFriendRequestRepositoryMock::new();
        repository
            .expect_delete()
            .with(eq(id))
            .times(1)
            .returning(|_| Ok(()));
        repository.expect_accept().never();

        let service = RejectFriendRequestService::new(repository);

        assert!(service.execute(id).await.is_ok());
    }

    #[tokio::test]
    async fn reject_storage_failure_is_mapped() {
        let mut repository = MockFriendRequestRepositoryMock::new();
        repository
            .expect_delete()
            .returning(|_| Err(FriendRequestRepositoryError::DatabaseError("db down".into())));

        let service = RejectFriendRequestService::new(repository);
        let result = service
            .execute(FriendRequestId::from(Uuid::new_v4()))
            .await;

        assert!(matches!(
            result,
            Err(FriendRequestActionError::RepositoryError(_))
        ));
    }
}
