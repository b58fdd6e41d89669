mod account_response;
mod login;
mod password_reset;
mod search_accounts;
mod signup;

pub use account_response::{validation_response, AccountResponse};
pub use login::*;
pub use password_reset::*;
pub use search_accounts::*;
pub use signup::*;
