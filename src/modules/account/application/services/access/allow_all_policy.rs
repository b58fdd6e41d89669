use async_trait::async_trait;

use crate::account::application::ports::incoming::access_policy::{
    AccessDenied, AccessPolicy, Caller, Operation,
};

/// Anyone may call anything. Any bearer header is ignored.
#[derive(Debug, Clone, Default)]
pub struct AllowAllPolicy;

#[async_trait]
impl AccessPolicy for AllowAllPolicy {
    async fn authorize(
        &self,
        _operation: Operation,
        _bearer: Option<&str>,
    ) -> Result<Caller, AccessDenied> {
        Ok(Caller::Anonymous)
    }
}
