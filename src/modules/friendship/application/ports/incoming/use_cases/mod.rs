mod friend_request_action_use_case;
mod list_friends_use_case;
mod send_friend_request_use_case;

pub use friend_request_action_use_case::{
    parse_request_id, AcceptFriendRequestUseCase, FriendRequestActionError,
    RejectFriendRequestUseCase, RequestIdError,
};
pub use list_friends_use_case::{
    ListFriendsError, ListFriendsUseCase, ListPendingFriendRequestsUseCase,
};
pub use send_friend_request_use_case::{
    SendFriendRequestCommand, SendFriendRequestError, SendFriendRequestUseCase,
};
