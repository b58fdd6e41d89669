pub mod access;
pub mod credentials;

mod create_account_service;
mod login_service;
mod reset_password_service;
mod search_accounts_service;

pub use create_account_service::CreateAccountService;
pub use login_service::LoginService;
pub use reset_password_service::ResetPasswordService;
pub use search_accounts_service::SearchAccountsService;
