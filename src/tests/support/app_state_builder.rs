use crate::account::application::account_use_cases::AccountUseCases;
use crate::account::application::ports::incoming::access_policy::AccessPolicy;
use crate::account::application::ports::incoming::use_cases::{
    CreateAccountUseCase, LoginUseCase, ResetPasswordUseCase, SearchAccountsUseCase,
};
use crate::account::application::services::access::AllowAllPolicy;
use crate::friendship::application::friendship_use_cases::FriendshipUseCases;
use crate::friendship::application::ports::incoming::use_cases::{
    AcceptFriendRequestUseCase, ListFriendsUseCase, ListPendingFriendRequestsUseCase,
    RejectFriendRequestUseCase, SendFriendRequestUseCase,
};
use crate::tests::support::stubs::*;
use crate::AppState;
use actix_web::web;
use std::sync::Arc;

pub struct TestAppStateBuilder {
    account: AccountUseCases,
    friendship: FriendshipUseCases,
    access_policy: Arc<dyn AccessPolicy + Send + Sync>,
}

impl Default for TestAppStateBuilder {
    fn default() -> Self {
        Self {
            account: AccountUseCases {
                create: Arc::new(StubCreateAccountUseCase),
                login: Arc::new(StubLoginUseCase),
                reset_password: Arc::new(StubResetPasswordUseCase),
                search: Arc::new(StubSearchAccountsUseCase),
            },
            friendship: FriendshipUseCases {
                send: Arc::new(StubSendFriendRequestUseCase),
                accept: Arc::new(StubAcceptFriendRequestUseCase),
                reject: Arc::new(StubRejectFriendRequestUseCase),
                list_friends: Arc::new(StubListFriendsUseCase),
                list_pending: Arc::new(StubListPendingFriendRequestsUseCase),
            },
            access_policy: Arc::new(AllowAllPolicy),
        }
    }
}

impl TestAppStateBuilder {
    pub fn with_create_account(
        mut self,
        uc: impl CreateAccountUseCase + Send + Sync + 'static,
    ) -> Self {
        self.account.create = Arc::new(uc);
        self
    }

    pub fn with_login(mut self, uc: impl LoginUseCase + Send + Sync + 'static) -> Self {
        self.account.login = Arc::new(uc);
        self
    }

    pub fn with_reset_password(
        mut self,
        uc: impl ResetPasswordUseCase + Send + Sync + 'static,
    ) -> Self {
        self.account.reset_password = Arc::new(uc);
        self
    }

    pub fn with_search_accounts(
        mut self,
        uc: impl SearchAccountsUseCase + Send + Sync + 'static,
    ) -> Self {
        self.account.search = Arc::new(uc);
        self
    }

    pub fn with_send_friend_request(
        mut self,
        uc: impl SendFriendRequestUseCase + Send + Sync + 'static,
    ) -> Self {
        self.friendship.send = Arc::new(uc);
        self
    }

    pub fn with_accept_friend_request(
        mut self,
        uc: impl AcceptFriendRequestUseCase + Send + Sync + 'static,
    ) -> Self {
        self.friendship.accept = Arc::new(uc);
        self
    }

    pub fn with_reject_friend_request(
        mut self,
        uc: impl RejectFriendRequestUseCase + Send + Sync + 'static,
    ) -> Self {
        self.friendship.reject = Arc::new(uc);
        self
    }

    pub fn with_list_friends(mut self, uc: impl ListFriendsUseCase + Send + Sync + 'static) -> Self {
        self.friendship.list_friends = Arc::new(uc);
        self
    }

    pub fn with_list_pending(
        mut self,
        uc: impl ListPendingFriendRequestsUseCase + Send + Sync + 'static,
    ) -> Self {
        self.friendship.list_pending = Arc::new(uc);
        self
    }

    pub fn with_access_policy(mut self, policy: impl AccessPolicy + Send + Sync + 'static) -> Self {
        self.access_policy = Arc::new(policy);
        self
    }

    /// Replaces every use case at once, e.g. with services wired to an in-memory store.
    pub fn with_use_cases(mut self, account: AccountUseCases, friendship: FriendshipUseCases) -> Self {
        self.account = account;
        self.friendship = friendship;
        self
    }

    pub fn build(self) -> web::Data<AppState> {
        web::Data::new(AppState {
            account: self.account,
            friendship: self.friendship,
            access_policy: self.access_policy,
        })
    }
}
