mod friend_request_action_service;
mod list_friends_service;
mod send_friend_request_service;

pub use friend_request_action_service::{AcceptFriendRequestService, RejectFriendRequestService};
pub use list_friends_service::{ListFriendsService, ListPendingFriendRequestsService};
pub use send_friend_request_service::SendFriendRequestService;
