use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use chrono::{DateTime, Duration, TimeZone, Utc};
use uuid::Uuid;

use crate::account::application::domain::entities::{Account, AccountId};
use crate::account::application::ports::incoming::access_policy::{
    AccessDenied, AccessPolicy, Caller, Operation,
};
use crate::account::application::ports::incoming::use_cases::{
    CreateAccountCommand, CreateAccountError, CreateAccountUseCase, LoginCommand, LoginError,
    LoginOutput, LoginUseCase, ResetPasswordCommand, ResetPasswordError, ResetPasswordUseCase,
    SearchAccountsError, SearchAccountsUseCase, SearchKeyword,
};
use crate::account::application::ports::outgoing::{
    AccountQuery, AccountQueryError, AccountQueryResult, AccountRepository,
    AccountRepositoryError, AuthTokenRepository, AuthTokenRepositoryError, CreateAccountData,
    HashError, PasswordHasher,
};
use crate::friendship::application::domain::entities::{
    AccountSummary, FriendRequest, FriendRequestId, PendingFriendRequest,
};
use crate::friendship::application::ports::incoming::use_cases::{
    AcceptFriendRequestUseCase, FriendRequestActionError, ListFriendsError, ListFriendsUseCase,
    ListPendingFriendRequestsUseCase, RejectFriendRequestUseCase, SendFriendRequestCommand,
    SendFriendRequestError, SendFriendRequestUseCase,
};
use crate::friendship::application::ports::outgoing::{
    CreateFriendRequestData, FriendRequestQuery, FriendRequestQueryError,
    FriendRequestRepository, FriendRequestRepositoryError,
};

//
// ──────────────────────────────────────────────────────────
// Use case stubs (defaults for TestAppStateBuilder)
// ──────────────────────────────────────────────────────────
//

#[derive(Default, Clone)]
pub struct StubCreateAccountUseCase;

#[async_trait]
impl CreateAccountUseCase for StubCreateAccountUseCase {
    async fn execute(&self, _command: CreateAccountCommand) -> Result<Account, CreateAccountError> {
        unimplemented!("Not used in this test")
    }
}

#[derive(Default, Clone)]
pub struct StubLoginUseCase;

#[async_trait]
impl LoginUseCase for StubLoginUseCase {
    async fn execute(&self, _command: LoginCommand) -> Result<LoginOutput, LoginError> {
        unimplemented!("Not used in this test")
    }
}

#[derive(Default, Clone)]
pub struct StubResetPasswordUseCase;

#[async_trait]
impl ResetPasswordUseCase for StubResetPasswordUseCase {
    async fn execute(&self, _command: ResetPasswordCommand) -> Result<(), ResetPasswordError> {
        unimplemented!("Not used in this test")
    }
}

#[derive(Default, Clone)]
pub struct StubSearchAccountsUseCase;

#[async_trait]
impl SearchAccountsUseCase for StubSearchAccountsUseCase {
    async fn execute(&self, _keyword: SearchKeyword) -> Result<Vec<Account>, SearchAccountsError> {
        unimplemented!("Not used in this test")
    }
}

#[derive(Default, Clone)]
pub struct StubSendFriendRequestUseCase;

#[async_trait]
impl SendFriendRequestUseCase for StubSendFriendRequestUseCase {
    async fn execute(
        &self,
        _command: SendFriendRequestCommand,
    ) -> Result<FriendRequest, SendFriendRequestError> {
        unimplemented!("Not used in this test")
    }
}

#[derive(Default, Clone)]
pub struct StubAcceptFriendRequestUseCase;

#[async_trait]
impl AcceptFriendRequestUseCase for StubAcceptFriendRequestUseCase {
    async fn execute(&self, _id: FriendRequestId) -> Result<(), FriendRequestActionError> {
        unimplemented!("Not used in this test")
    }
}

#[derive(Default, Clone)]
pub struct StubRejectFriendRequestUseCase;

#[async_trait]
impl RejectFriendRequestUseCase for StubRejectFriendRequestUseCase {
    async fn execute(&self, _id: FriendRequestId) -> Result<(), FriendRequestActionError> {
        unimplemented!("Not used in this test")
    }
}

#[derive(Default, Clone)]
pub struct StubListFriendsUseCase;

#[async_trait]
impl ListFriendsUseCase for StubListFriendsUseCase {
    async fn execute(&self, _email: &str) -> Result<Vec<AccountSummary>, ListFriendsError> {
        unimplemented!("Not used in this test")
    }
}

#[derive(Default, Clone)]
pub struct StubListPendingFriendRequestsUseCase;

#[async_trait]
impl ListPendingFriendRequestsUseCase for StubListPendingFriendRequestsUseCase {
    async fn execute(&self, _email: &str) -> Result<Vec<PendingFriendRequest>, ListFriendsError> {
        unimplemented!("Not used in this test")
    }
}

//
// ──────────────────────────────────────────────────────────
// Access policy
// ──────────────────────────────────────────────────────────
//

/// Denies every operation with the configured reason
#[derive(Clone)]
pub struct StubAccessPolicy {
    denial: AccessDenied,
}

impl StubAccessPolicy {
    pub fn denying(denial: AccessDenied) -> Self {
        Self { denial }
    }
}

#[async_trait]
impl AccessPolicy for StubAccessPolicy {
    async fn authorize(
        &self,
        _operation: Operation,
        _bearer: Option<&str>,
    ) -> Result<Caller, AccessDenied> {
        Err(self.denial.clone())
    }
}

//
// ──────────────────────────────────────────────────────────
// Password hashers
// ──────────────────────────────────────────────────────────
//

/// Deterministic, instant hasher: `hash(pw) == "fake$" + pw`
#[derive(Default, Clone)]
pub struct FakePasswordHasher;

#[async_trait]
impl PasswordHasher for FakePasswordHasher {
    async fn hash_password(&self, password: &str) -> Result<String, HashError> {
        Ok(format!("fake${password}"))
    }

    async fn verify_password(&self, password: &str, hash: &str) -> Result<bool, HashError> {
        Ok(hash == format!("fake${password}"))
    }
}

#[derive(Default, Clone)]
pub struct FailingPasswordHasher;

#[async_trait]
impl PasswordHasher for FailingPasswordHasher {
    async fn hash_password(&self, _password: &str) -> Result<String, HashError> {
        Err(HashError::HashFailed)
    }

    async fn verify_password(&self, _password: &str, _hash: &str) -> Result<bool, HashError> {
        Err(HashError::VerifyFailed)
    }
}

//
// ──────────────────────────────────────────────────────────
// In-memory storage
// ──────────────────────────────────────────────────────────
//

/// Storage double behind every outgoing port, shared by clones.
/// Timestamps advance one second per insert so orderings are deterministic.
#[derive(Clone, Default)]
pub struct InMemoryStore {
    state: Arc<Mutex<StoreState>>,
}

#[derive(Default)]
struct StoreState {
    accounts: Vec<AccountQueryResult>,
    tokens: Vec<(String, AccountId)>,
    requests: Vec<FriendRequest>,
    ticks: i64,
}

impl StoreState {
    fn next_timestamp(&mut self) -> DateTime<Utc> {
        self.ticks += 1;
        Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap() + Duration::seconds(self.ticks)
    }

    fn summary_of(&self, id: AccountId) -> Option<AccountSummary> {
        self.accounts
            .iter()
            .find(|a| a.id == id.value())
            .map(|a| AccountSummary::from(a.to_account()))
    }
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn password_hash_of(&self, id: AccountId) -> Option<String> {
        let state = self.state.lock().unwrap();
        state
            .accounts
            .iter()
            .find(|a| a.id == id.value())
            .map(|a| a.password_hash.clone())
    }

    pub fn set_active(&self, id: AccountId, is_active: bool) {
        let mut state = self.state.lock().unwrap();
        if let Some(account) = state.accounts.iter_mut().find(|a| a.id == id.value()) {
            account.is_active = is_active;
        }
    }

    pub fn request_count(&self) -> usize {
        self.state.lock().unwrap().requests.len()
    }

    pub fn token_count(&self) -> usize {
        self.state.lock().unwrap().tokens.len()
    }
}

#[async_trait]
impl AccountQuery for InMemoryStore {
    async fn find_by_id(
        &self,
        account_id: AccountId,
    ) -> Result<Option<AccountQueryResult>, AccountQueryError> {
        let state = self.state.lock().unwrap();
        Ok(state
            .accounts
            .iter()
            .find(|a| a.id == account_id.value())
            .cloned())
    }

    async fn find_by_email(
        &self,
        email: &str,
    ) -> Result<Option<AccountQueryResult>, AccountQueryError> {
        let state = self.state.lock().unwrap();
        Ok(state.accounts.iter().find(|a| a.email == email).cloned())
    }

    async fn find_by_email_ignore_case(
        &self,
        email: &str,
    ) -> Result<Option<AccountQueryResult>, AccountQueryError> {
        let wanted = email.to_lowercase();
        let state = self.state.lock().unwrap();
        Ok(state
            .accounts
            .iter()
            .find(|a| a.email.to_lowercase() == wanted)
            .cloned())
    }

    async fn search(&self, keyword: &str) -> Result<Vec<AccountQueryResult>, AccountQueryError> {
        let needle = keyword.to_lowercase();
        let state = self.state.lock().unwrap();
        Ok(state
            .accounts
            .iter()
            .filter(|a| {
                a.email.to_lowercase().contains(&needle)
                    || a.first_name.to_lowercase().contains(&needle)
                    || a.last_name.to_lowercase().contains(&needle)
            })
            .cloned()
            .collect())
    }
}

#[async_trait]
impl AccountRepository for InMemoryStore {
    async fn create_account(
        &self,
        data: CreateAccountData,
    ) -> Result<Account, AccountRepositoryError> {
        let mut state = self.state.lock().unwrap();
        if state.accounts.iter().any(|a| a.email == data.email) {
            return Err(AccountRepositoryError::EmailAlreadyExists);
        }

        let row = AccountQueryResult {
            id: Uuid::new_v4(),
            email: data.email,
            first_name: data.first_name,
            last_name: data.last_name,
            password_hash: data.password_hash,
            is_active: true,
            is_staff: false,
            date_joined: state.next_timestamp(),
        };
        let account = row.to_account();
        state.accounts.push(row);
        Ok(account)
    }

    async fn update_password(
        &self,
        account_id: AccountId,
        password_hash: String,
    ) -> Result<(), AccountRepositoryError> {
        let mut state = self.state.lock().unwrap();
        let account = state
            .accounts
            .iter_mut()
            .find(|a| a.id == account_id.value())
            .ok_or(AccountRepositoryError::AccountNotFound)?;
        account.password_hash = password_hash;
        Ok(())
    }
}

#[async_trait]
impl AuthTokenRepository for InMemoryStore {
    async fn find_key_for_account(
        &self,
        account_id: AccountId,
    ) -> Result<Option<String>, AuthTokenRepositoryError> {
        let state = self.state.lock().unwrap();
        Ok(state
            .tokens
            .iter()
            .find(|(_, owner)| *owner == account_id)
            .map(|(key, _)| key.clone()))
    }

    async fn create_for_account(
        &self,
        account_id: AccountId,
        key: String,
    ) -> Result<String, AuthTokenRepositoryError> {
        let mut state = self.state.lock().unwrap();
        if state.tokens.iter().any(|(_, owner)| *owner == account_id) {
            return Err(AuthTokenRepositoryError::TokenAlreadyExists);
        }
        state.tokens.push((key.clone(), account_id));
        Ok(key)
    }

    async fn find_account_by_key(
        &self,
        key: &str,
    ) -> Result<Option<AccountId>, AuthTokenRepositoryError> {
        let state = self.state.lock().unwrap();
        Ok(state
            .tokens
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, owner)| *owner))
    }
}

#[async_trait]
impl FriendRequestRepository for InMemoryStore {
    async fn create(
        &self,
        data: CreateFriendRequestData,
    ) -> Result<FriendRequest, FriendRequestRepositoryError> {
        let mut state = self.state.lock().unwrap();
        if state
            .requests
            .iter()
            .any(|r| r.from_user == data.from_user && r.to_user == data.to_user)
        {
            return Err(FriendRequestRepositoryError::AlreadyExists);
        }

        let request = FriendRequest {
            id: FriendRequestId::from(Uuid::new_v4()),
            from_user: data.from_user,
            to_user: data.to_user,
            is_accepted: false,
            created_at: state.next_timestamp(),
        };
        state.requests.push(request.clone());
        Ok(request)
    }

    async fn accept(&self, id: FriendRequestId) -> Result<(), FriendRequestRepositoryError> {
        let mut state = self.state.lock().unwrap();
        let request = state
            .requests
            .iter_mut()
            .find(|r| r.id == id)
            .ok_or(FriendRequestRepositoryError::NotFound)?;
        request.is_accepted = true;
        Ok(())
    }

    async fn delete(&self, id: FriendRequestId) -> Result<(), FriendRequestRepositoryError> {
        let mut state = self.state.lock().unwrap();
        let before = state.requests.len();
        state.requests.retain(|r| r.id != id);
        if state.requests.len() == before {
            return Err(FriendRequestRepositoryError::NotFound);
        }
        Ok(())
    }
}

#[async_trait]
impl FriendRequestQuery for InMemoryStore {
    async fn friends_of(
        &self,
        account_id: AccountId,
    ) -> Result<Vec<AccountSummary>, FriendRequestQueryError> {
        let state = self.state.lock().unwrap();
        Ok(state
            .requests
            .iter()
            .filter(|r| r.to_user == account_id && r.is_accepted)
            .filter_map(|r| state.summary_of(r.from_user))
            .collect())
    }

    async fn pending_for(
        &self,
        account_id: AccountId,
    ) -> Result<Vec<PendingFriendRequest>, FriendRequestQueryError> {
        let state = self.state.lock().unwrap();
        Ok(state
            .requests
            .iter()
            .filter(|r| r.to_user == account_id && !r.is_accepted)
            .filter_map(|r| {
                state.summary_of(r.from_user).map(|from_user| PendingFriendRequest {
                    id: r.id,
                    from_user,
                    created_at: r.created_at,
                })
            })
            .collect())
    }
}
