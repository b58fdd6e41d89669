use async_trait::async_trait;
use sea_orm::ActiveValue::NotSet;
use sea_orm::{ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, Set};
use std::sync::Arc;

use crate::account::application::domain::entities::AccountId;
use crate::account::application::ports::outgoing::{
    AuthTokenRepository, AuthTokenRepositoryError,
};
use crate::shared::db::is_unique_violation;

use super::sea_orm_entity::auth_tokens::{
    ActiveModel as TokenActiveModel, Column as TokenColumn, Entity as TokenEntity,
};

#[derive(Clone, Debug)]
pub struct AuthTokenRepositoryPostgres {
    db: Arc<DatabaseConnection>,
}

impl AuthTokenRepositoryPostgres {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }
}

#[async_trait]
impl AuthTokenRepository for AuthTokenRepositoryPostgres {
    async fn find_key_for_account(
        &self,
        account_id: AccountId,
    ) -> Result<Option<String>, AuthTokenRepositoryError> {
        let token = TokenEntity::find()
            .filter(TokenColumn::AccountId.eq(account_id.value()))
            .one(&*self.db)
            .await
            .map_err(|e| AuthTokenRepositoryError::DatabaseError(e.to_string()))?;

        Ok(token.map(|t| t.key))
    }

    async fn create_for_account(
        &self,
        account_id: AccountId,
        key: String,
    ) -> Result<String, AuthTokenRepositoryError> {
        let active = TokenActiveModel {
            key: Set(key),
            account_id: Set(account_id.value()),
            created_at: NotSet,
        };

        let inserted = active.insert(&*self.db).await.map_err(|e| {
            if is_unique_violation(&e) {
                return AuthTokenRepositoryError::TokenAlreadyExists;
            }
            AuthTokenRepositoryError::DatabaseError(e.to_string())
        })?;

        Ok(inserted.key)
    }

    async fn find_account_by_key(
        &self,
        key: &str,
    ) -> Result<Option<AccountId>, AuthTokenRepositoryError> {
        let token = TokenEntity::find_by_id(key.to_string())
            .one(&*self.db)
            .await
            .map_err(|e| AuthTokenRepositoryError::DatabaseError(e.to_string()))?;

        Ok(token.map(|t| AccountId::from(t.account_id)))
    }
}
