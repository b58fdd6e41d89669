mod accept_friend_request;
mod dto;
mod list_friends;
mod list_pending_friend_requests;
mod reject_friend_request;
mod request_errors;
mod send_friend_request;

pub use accept_friend_request::*;
pub use dto::*;
pub use list_friends::*;
pub use list_pending_friend_requests::*;
pub use reject_friend_request::*;
pub use send_friend_request::*;
