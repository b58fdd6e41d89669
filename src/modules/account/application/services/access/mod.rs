mod allow_all_policy;
mod bearer_token_policy;

pub use allow_all_policy::AllowAllPolicy;
pub use bearer_token_policy::BearerTokenPolicy;
