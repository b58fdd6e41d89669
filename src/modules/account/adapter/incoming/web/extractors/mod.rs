mod access;

pub use access::{authorize_or_response, BearerToken};
