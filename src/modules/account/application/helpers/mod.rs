mod account_identity_resolver;

pub use account_identity_resolver::{AccountIdentityResolver, ResolveAccountError};
