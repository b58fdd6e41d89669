use std::sync::Arc;

use crate::account::application::ports::incoming::use_cases::{
    CreateAccountUseCase, LoginUseCase, ResetPasswordUseCase, SearchAccountsUseCase,
};

#[derive(Clone)]
pub struct AccountUseCases {
    pub create: Arc<dyn CreateAccountUseCase + Send + Sync>,
    pub login: Arc<dyn LoginUseCase + Send + Sync>,
    pub reset_password: Arc<dyn ResetPasswordUseCase + Send + Sync>,
    pub search: Arc<dyn SearchAccountsUseCase + Send + Sync>,
}
