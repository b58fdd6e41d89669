mod create_account_use_case;
mod invalid_fields;
mod login_use_case;
mod reset_password_use_case;
mod search_accounts_use_case;

pub use create_account_use_case::{
    CreateAccountCommand, CreateAccountError, CreateAccountUseCase,
};
pub use invalid_fields::{FieldError, InvalidFields};
pub use login_use_case::{LoginCommand, LoginError, LoginOutput, LoginUseCase};
pub use reset_password_use_case::{
    ResetPasswordCommand, ResetPasswordError, ResetPasswordUseCase,
};
pub use search_accounts_use_case::{
    SearchAccountsError, SearchAccountsUseCase, SearchKeyword, SearchKeywordError,
    KEYWORD_MAX_LENGTH,
};
