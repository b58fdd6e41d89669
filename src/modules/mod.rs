pub mod account;
pub mod friendship;
