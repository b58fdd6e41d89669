pub mod access_policy;
pub mod use_cases;

pub use access_policy::{AccessDenied, AccessPolicy, Caller, Operation};
