use async_trait::async_trait;
use sea_orm::sea_query::Expr;
use sea_orm::ActiveValue::NotSet;
use sea_orm::{ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, Set};
use std::sync::Arc;
use uuid::Uuid;

use crate::friendship::application::domain::entities::{FriendRequest, FriendRequestId};
use crate::friendship::application::ports::outgoing::{
    CreateFriendRequestData, FriendRequestRepository, FriendRequestRepositoryError,
};
use crate::shared::db::is_unique_violation;

use super::sea_orm_entity::friend_requests::{
    ActiveModel as FriendRequestActiveModel, Column as FriendRequestColumn,
    Entity as FriendRequestEntity,
};

#[derive(Debug, Clone)]
pub struct FriendRequestRepositoryPostgres {
    db: Arc<DatabaseConnection>,
}

impl FriendRequestRepositoryPostgres {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }
}

#[async_trait]
impl FriendRequestRepository for FriendRequestRepositoryPostgres {
    async fn create(
        &self,
        data: CreateFriendRequestData,
    ) -> Result<FriendRequest, FriendRequestRepositoryError> {
        let active = FriendRequestActiveModel {
            id: Set(Uuid::new_v4()),
            from_user_id: Set(data.from_user.value()),
            to_user_id: Set(data.to_user.value()),
            is_accepted: Set(false),
            created_at: NotSet,
        };

        // uq_friend_requests_from_to decides between concurrent senders
        let inserted = active.insert(&*self.db).await.map_err(|e| {
            if is_unique_violation(&e) {
                return FriendRequestRepositoryError::AlreadyExists;
            }
            FriendRequestRepositoryError::DatabaseError(e.to_string())
        })?;

        Ok(inserted.to_domain())
    }

    async fn accept(&self, id: FriendRequestId) -> Result<(), FriendRequestRepositoryError> {
        let result = FriendRequestEntity::update_many()
            .col_expr(FriendRequestColumn::IsAccepted, Expr::value(true))
            .filter(FriendRequestColumn::Id.eq(id.value()))
            .exec(&*self.db)
            .await
            .map_err(|e| FriendRequestRepositoryError::DatabaseError(e.to_string()))?;

        if result.rows_affected == 0 {
            return Err(FriendRequestRepositoryError::NotFound);
        }

        Ok(())
    }

    async fn delete(&self, id: FriendRequestId) -> Result<(), FriendRequestRepositoryError> {
        let result = FriendRequestEntity::delete_by_id(id.value())
            .exec(&*self.db)
            .await
            .map_err(|e| FriendRequestRepositoryError::DatabaseError(e.to_string()))?;

        if result.rows_affected == 0 {
            return Err(FriendRequestRepositoryError::NotFound);
        }

        Ok(())
    }
}
