pub mod friend_requests;
