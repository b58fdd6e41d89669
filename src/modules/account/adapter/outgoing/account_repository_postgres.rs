use async_trait::async_trait;
use sea_orm::sea_query::Expr;
use sea_orm::ActiveValue::NotSet;
use sea_orm::{ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, Set};
use std::sync::Arc;
use uuid::Uuid;

use crate::account::application::domain::entities::{Account, AccountId};
use crate::account::application::ports::outgoing::{
    AccountRepository, AccountRepositoryError, CreateAccountData,
};
use crate::shared::db::is_unique_violation;

use super::sea_orm_entity::accounts::{
    ActiveModel as AccountActiveModel, Column as AccountColumn, Entity as AccountEntity,
};

#[derive(Clone, Debug)]
pub struct AccountRepositoryPostgres {
    db: Arc<DatabaseConnection>,
}

impl AccountRepositoryPostgres {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }
}

#[async_trait]
impl AccountRepository for AccountRepositoryPostgres {
    async fn create_account(
        &self,
        data: CreateAccountData,
    ) -> Result<Account, AccountRepositoryError> {
        let active = AccountActiveModel {
            id: Set(Uuid::new_v4()),
            email: Set(data.email),
            first_name: Set(data.first_name),
            last_name: Set(data.last_name),
            password_hash: Set(data.password_hash),
            is_active: Set(true),
            is_staff: Set(false),
            date_joined: NotSet,
        };

        let inserted = active.insert(&*self.db).await.map_err(|e| {
            if is_unique_violation(&e) {
                return AccountRepositoryError::EmailAlreadyExists;
            }
            AccountRepositoryError::DatabaseError(e.to_string())
        })?;

        Ok(inserted.to_query_result().to_account())
    }

    async fn update_password(
        &self,
        account_id: AccountId,
        password_hash: String,
    ) -> Result<(), AccountRepositoryError> {
        let result = AccountEntity::update_many()
            .col_expr(AccountColumn::PasswordHash, Expr::value(password_hash))
            .filter(AccountColumn::Id.eq(account_id.value()))
            .exec(&*self.db)
            .await
            .map_err(|e| AccountRepositoryError::DatabaseError(e.to_string()))?;

        if result.rows_affected == 0 {
            return Err(AccountRepositoryError::AccountNotFound);
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::account::adapter::outgoing::sea_orm_entity::accounts::Model as AccountModel;
    use chrono::Utc;
    use sea_orm::{DatabaseBackend, DbErr, MockDatabase, MockExecResult};

    fn create_data() -> CreateAccountData {
        CreateAccountData {
            email: "alice@example.com".to_string(),
            first_name: "Alice".to_string(),
            last_name: "Liddell".to_string(),
            password_hash: "$argon2id$hash".to_string(),
        }
    }

    #[tokio::test]
    async fn test_create_account_success() {
        let id = Uuid::new_v4();
        let joined = Utc::now();
        let inserted = AccountModel {
            id,
            email: "alice@example.com".to_string(),
            first_name: "Alice".to_string(),
            last_name: "Liddell".to_string(),
            password_hash: "$argon2id$hash".to_string(),
            is_active: true,
            is_staff: false,
            date_joined: joined.fixed_offset(),
        };

        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results(vec![vec![inserted]])
            .into_connection();

        let repository = AccountRepositoryPostgres::new(Arc::new(db));
        let account = repository.create_account(create_data()).await.unwrap();

        assert_eq!(account.id, AccountId::from(id));
        assert_eq!(account.email, "alice@example.com");
        assert_eq!(account.first_name, "Alice");
        assert!(account.is_active);
        assert!(!account.is_staff);
        assert_eq!(account.date_joined, joined);
    }

    #[tokio::test]
    async fn test_create_account_duplicate_email() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_errors([DbErr::Custom(
                "duplicate key value violates unique constraint \"accounts_email_key\"".to_string(),
            )])
            .into_connection();

        let repository = AccountRepositoryPostgres::new(Arc::new(db));
        let result = repository.create_account(create_data()).await;

        assert!(matches!(
            result,
            Err(AccountRepositoryError::EmailAlreadyExists)
        ));
    }

    #[tokio::test]
    async fn test_create_account_database_error() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_errors([DbErr::Custom("connection timeout".to_string())])
            .into_connection();

        let repository = AccountRepositoryPostgres::new(Arc::new(db));

        match repository.create_account(create_data()).await {
            Err(AccountRepositoryError::DatabaseError(msg)) => {
                assert!(msg.contains("connection timeout"))
            }
            other => panic!("Expected DatabaseError, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_update_password_success() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_exec_results(vec![MockExecResult {
                last_insert_id: 0,
                rows_affected: 1,
            }])
            .into_connection();

        let repository = AccountRepositoryPostgres::new(Arc::new(db));
        let result = repository
            .update_password(AccountId::from(Uuid::new_v4()), "$argon2id$new".into())
            .await;

        assert!(result.is_ok());
    }

    #[tokio::test]
    async fn test_update_password_unknown_account() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_exec_results(vec![MockExecResult {
                last_insert_id: 0,
                rows_affected: 0,
            }])
            .into_connection();

        let repository = AccountRepositoryPostgres::new(Arc::new(db));
        let result = repository
            .update_password(AccountId::from(Uuid::new_v4()), "$argon2id$new".into())
            .await;

        assert!(matches!(result, Err(AccountRepositoryError::AccountNotFound)));
    }

    #[tokio::test]
    async fn test_update_password_database_error() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_exec_errors([DbErr::Custom("deadlock detected".to_string())])
            .into_connection();

        let repository = AccountRepositoryPostgres::new(Arc::new(db));
        let result = repository
            .update_password(AccountId::from(Uuid::new_v4()), "$argon2id$new".into())
            .await;

        assert!(matches!(result, Err(AccountRepositoryError::DatabaseError(_))));
    }
}
