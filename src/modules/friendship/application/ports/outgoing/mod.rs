pub mod friend_request_query;
pub mod friend_request_repository;

pub use friend_request_query::{FriendRequestQuery, FriendRequestQueryError};
pub use friend_request_repository::{
    CreateFriendRequestData, FriendRequestRepository, FriendRequestRepositoryError,
};
