use async_trait::async_trait;

use crate::account::application::{
    domain::entities::Account,
    ports::{
        incoming::use_cases::{SearchAccountsError, SearchAccountsUseCase, SearchKeyword},
        outgoing::AccountQuery,
    },
};

#[derive(Debug, Clone)]
pub struct SearchAccountsService<Q>
where
    Q: AccountQuery + Send + Sync,
{
    query: Q,
}

impl<Q> SearchAccountsService<Q>
where
    Q: AccountQuery + Send + Sync,
{
    pub fn new(query: Q) -> Self {
        Self { query }
    }
}

#[async_trait]
impl<Q> SearchAccountsUseCase for SearchAccountsService<Q>
where
    Q: AccountQuery + Send + Sync,
{
    async fn execute(&self, keyword: SearchKeyword) -> Result<Vec<Account>, SearchAccountsError> {
        let rows = self
            .query
            .search(keyword.as_str())
            .await
            .map_err(|e| SearchAccountsError::QueryFailed(e.to_string()))?;

        Ok(rows.iter().map(|row| row.to_account()).collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;
    use std::sync::Mutex;
    use uuid::Uuid;

    use crate::account::application::domain::entities::AccountId;
    use crate::account::application::ports::outgoing::{AccountQueryError, AccountQueryResult};

    struct MockAccountQuery {
        result: Result<Vec<AccountQueryResult>, AccountQueryError>,
        keyword: Mutex<Option<String>>,
    }

    impl MockAccountQuery {
        fn returning(result: Result<Vec<AccountQueryResult>, AccountQueryError>) -> Self {
            Self {
                result,
                keyword: Mutex::new(None),
            }
        }
    }

    #[async_trait]
    impl AccountQuery for MockAccountQuery {
        async fn find_by_id(
            &self,
            _account_id: AccountId,
        ) -> Result<Option<AccountQueryResult>, AccountQueryError> {
            unimplemented!()
        }

        async fn find_by_email(
            &self,
            _email: &str,
        ) -> Result<Option<AccountQueryResult>, AccountQueryError> {
            unimplemented!()
        }

        async fn find_by_email_ignore_case(
            &self,
            _email: &str,
        ) -> Result<Option<AccountQueryResult>, AccountQueryError> {
            unimplemented!()
        }

        async fn search(
            &self,
            keyword: &str,
        ) -> Result<Vec<AccountQueryResult>, AccountQueryError> {
            *self.keyword.lock().unwrap() = Some(keyword.to_string());
            self.result.clone()
        }
    }

    fn row(email: &str) -> AccountQueryResult {
        AccountQueryResult {
            id: Uuid::new_v4(),
            email: email.into(),
            first_name: "First".into(),
            last_name: "Last".into(),
            password_hash: "secret-hash".into(),
            is_active: true,
            is_staff: false,
            date_joined: Utc::now(),
        }
    }

    #[tokio::test]
    async fn returns_matches_in_query_order() {
        let query = MockAccountQuery::returning(Ok(vec![
            row("alice@x.com"),
            row("malice@x.com"),
        ]));
        let service = SearchAccountsService::new(query);

        let accounts = service
            .execute(SearchKeyword::new(" ali ").unwrap())
            .await
            .unwrap();

        assert_eq!(accounts.len(), 2);
        assert_eq!(accounts[0].email, "alice@x.com");
        assert_eq!(accounts[1].email, "malice@x.com");
        assert_eq!(
            service.query.keyword.lock().unwrap().as_deref(),
            Some("ali")
        );
    }

    #[tokio::test]
    async fn no_matches_is_an_empty_list() {
        let service = SearchAccountsService::new(MockAccountQuery::returning(Ok(vec![])));

        let accounts = service
            .execute(SearchKeyword::new("zzz").unwrap())
            .await
            .unwrap();

        assert!(accounts.is_empty());
    }

    #[tokio::test]
    async fn query_failure_is_mapped() {
        let service = SearchAccountsService::new(MockAccountQuery::returning(Err(
            AccountQueryError::DatabaseError("db down".into()),
        )));

        match service.execute(SearchKeyword::new("a").unwrap()).await {
            Err(SearchAccountsError::QueryFailed(msg)) => assert!(msg.contains("db down")),
            other => panic!("Expected QueryFailed, got {:?}", other),
        }
    }
}
