use std::sync::Arc;

use crate::friendship::application::ports::incoming::use_cases::{
    AcceptFriendRequestUseCase, ListFriendsUseCase, ListPendingFriendRequestsUseCase,
    RejectFriendRequestUseCase, SendFriendRequestUseCase,
};

#[derive(Clone)]
pub struct FriendshipUseCases {
    pub send: Arc<dyn SendFriendRequestUseCase + Send + Sync>,
    pub accept: Arc<dyn AcceptFriendRequestUseCase + Send + Sync>,
    pub reject: Arc<dyn RejectFriendRequestUseCase + Send + Sync>,
    pub list_friends: Arc<dyn ListFriendsUseCase + Send + Sync>,
    pub list_pending: Arc<dyn ListPendingFriendRequestsUseCase + Send + Sync>,
}
