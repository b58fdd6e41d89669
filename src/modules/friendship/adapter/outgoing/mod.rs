pub mod sea_orm_entity;

mod friend_request_query_postgres;
mod friend_request_repository_postgres;

pub use friend_request_query_postgres::FriendRequestQueryPostgres;
pub use friend_request_repository_postgres::FriendRequestRepositoryPostgres;
