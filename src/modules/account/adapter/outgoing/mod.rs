pub mod sea_orm_entity;
pub mod security;

mod account_query_postgres;
mod account_repository_postgres;
mod auth_token_repository_postgres;

pub use account_query_postgres::AccountQueryPostgres;
pub use account_repository_postgres::AccountRepositoryPostgres;
pub use auth_token_repository_postgres::AuthTokenRepositoryPostgres;
