use async_trait::async_trait;
use sea_orm::sea_query::{Expr, Func, LikeExpr};
use sea_orm::{ColumnTrait, Condition, DatabaseConnection, EntityTrait, QueryFilter, QueryOrder};
use std::sync::Arc;

use crate::account::application::domain::entities::AccountId;
use crate::account::application::ports::outgoing::{
    AccountQuery, AccountQueryError, AccountQueryResult,
};

use super::sea_orm_entity::accounts::{Column as AccountColumn, Entity as AccountEntity};

#[derive(Debug, Clone)]
pub struct AccountQueryPostgres {
    db: Arc<DatabaseConnection>,
}

impl AccountQueryPostgres {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }
}

/// Escapes `\`, `%` and `_` so they match literally inside a LIKE pattern.
fn escape_like(raw: &str) -> String {
    let mut escaped = String::with_capacity(raw.len());
    for ch in raw.chars() {
        if matches!(ch, '\\' | '%' | '_') {
            escaped.push('\\');
        }
        escaped.push(ch);
    }
    escaped
}

fn lower_contains(column: AccountColumn, pattern: &str) -> sea_orm::sea_query::SimpleExpr {
    Expr::expr(Func::lower(Expr::col(column))).like(LikeExpr::new(pattern).escape('\\'))
}

#[async_trait]
impl AccountQuery for AccountQueryPostgres {
    async fn find_by_id(
        &self,
        account_id: AccountId,
    ) -> Result<Option<AccountQueryResult>, AccountQueryError> {
        let account = AccountEntity::find_by_id(account_id.value())
            .one(&*self.db)
            .await
            .map_err(|e| AccountQueryError::DatabaseError(e.to_string()))?;

        Ok(account.map(|m| m.to_query_result()))
    }

    async fn find_by_email(
        &self,
        email: &str,
    ) -> Result<Option<AccountQueryResult>, AccountQueryError> {
        let account = AccountEntity::find()
            .filter(AccountColumn::Email.eq(email))
            .one(&*self.db)
            .await
            .map_err(|e| AccountQueryError::DatabaseError(e.to_string()))?;

        Ok(account.map(|m| m.to_query_result()))
    }

    async fn find_by_email_ignore_case(
        &self,
        email: &str,
    ) -> Result<Option<AccountQueryResult>, AccountQueryError> {
        // Served by idx_accounts_email_lower
        let account = AccountEntity::find()
            .filter(Expr::expr(Func::lower(Expr::col(AccountColumn::Email))).eq(email.to_lowercase()))
            .order_by_asc(AccountColumn::DateJoined)
            .one(&*self.db)
            .await
            .map_err(|e| AccountQueryError::DatabaseError(e.to_string()))?;

        Ok(account.map(|m| m.to_query_result()))
    }

    async fn search(&self, keyword: &str) -> Result<Vec<AccountQueryResult>, AccountQueryError> {
        let pattern = format!("%{}%", escape_like(&keyword.to_lowercase()));

        let models = AccountEntity::find()
            .filter(
                Condition::any()
                    .add(lower_contains(AccountColumn::Email, &pattern))
                    .add(lower_contains(AccountColumn::FirstName, &pattern))
                    .add(lower_contains(AccountColumn::LastName, &pattern)),
            )
            .order_by_asc(AccountColumn::DateJoined)
            .order_by_asc(AccountColumn::Id)
            .all(&*self.db)
            .await
            .map_err(|e| AccountQueryError::DatabaseError(e.to_string()))?;

        Ok(models.iter().map(|m| m.to_query_result()).collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::account::adapter::outgoing::sea_orm_entity::accounts::Model as AccountModel;
    use chrono::Utc;
    use sea_orm::{DatabaseBackend, DbErr, MockDatabase};
    use uuid::Uuid;

    fn account_model(email: &str, first_name: &str) -> AccountModel {
        AccountModel {
            id: Uuid::new_v4(),
            email: email.to_string(),
            first_name: first_name.to_string(),
            last_name: "Tester".to_string(),
            password_hash: "$argon2id$hash".to_string(),
            is_active: true,
            is_staff: false,
            date_joined: Utc::now().fixed_offset(),
        }
    }

    #[test]
    fn escape_like_escapes_wildcards() {
        assert_eq!(escape_like("50%_off\\"), "50\\%\\_off\\\\");
        assert_eq!(escape_like("plain"), "plain");
    }

    #[tokio::test]
    async fn test_find_by_id_success() {
        let model = account_model("alice@example.com", "Alice");
        let id = model.id;

        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results(vec![vec![model]])
            .into_connection();

        let query = AccountQueryPostgres::new(Arc::new(db));
        let result = query.find_by_id(AccountId::from(id)).await.unwrap();

        let account = result.expect("account should be found");
        assert_eq!(account.id, id);
        assert_eq!(account.email, "alice@example.com");
        assert_eq!(account.password_hash, "$argon2id$hash");
    }

    #[tokio::test]
    async fn test_find_by_email_not_found() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results(vec![Vec::<AccountModel>::new()])
            .into_connection();

        let query = AccountQueryPostgres::new(Arc::new(db));
        let result = query.find_by_email("ghost@example.com").await.unwrap();

        assert!(result.is_none());
    }

    #[tokio::test]
    async fn test_find_by_email_ignore_case_success() {
        let model = account_model("Bob@example.com", "Bob");

        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results(vec![vec![model]])
            .into_connection();

        let query = AccountQueryPostgres::new(Arc::new(db));
        let result = query
            .find_by_email_ignore_case("BOB@EXAMPLE.COM")
            .await
            .unwrap();

        assert_eq!(result.unwrap().email, "Bob@example.com");
    }

    #[tokio::test]
    async fn test_search_returns_rows_in_order() {
        let first = account_model("alice@x.com", "Alice");
        let second = account_model("malik@x.com", "Malik");

        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results(vec![vec![first.clone(), second.clone()]])
            .into_connection();

        let query = AccountQueryPostgres::new(Arc::new(db));
        let rows = query.search("Al").await.unwrap();

        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0].id, first.id);
        assert_eq!(rows[1].id, second.id);
    }

    #[tokio::test]
    async fn test_search_database_error() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_errors([DbErr::Custom("connection reset".to_string())])
            .into_connection();

        let query = AccountQueryPostgres::new(Arc::new(db));
        let result = query.search("al").await;

        assert!(matches!(result, Err(AccountQueryError::DatabaseError(_))));
    }
}
