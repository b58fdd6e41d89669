use async_trait::async_trait;
use sea_orm::{ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, QueryOrder};
use std::sync::Arc;

use crate::account::adapter::outgoing::sea_orm_entity::accounts::Model as AccountModel;
use crate::account::application::domain::entities::AccountId;
use crate::friendship::application::domain::entities::{
    AccountSummary, FriendRequestId, PendingFriendRequest,
};
use crate::friendship::application::ports::outgoing::{
    FriendRequestQuery, FriendRequestQueryError,
};

use super::sea_orm_entity::friend_requests::{
    Column as FriendRequestColumn, Entity as FriendRequestEntity, Model as FriendRequestModel,
    SenderLink,
};

#[derive(Debug, Clone)]
pub struct FriendRequestQueryPostgres {
    db: Arc<DatabaseConnection>,
}

impl FriendRequestQueryPostgres {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }

    /// Requests addressed to `account_id` with the given acceptance state, joined
    /// to their sender, oldest first
    async fn inbound(
        &self,
        account_id: AccountId,
        is_accepted: bool,
    ) -> Result<Vec<(FriendRequestModel, AccountModel)>, FriendRequestQueryError> {
        let rows = FriendRequestEntity::find()
            .find_also_linked(SenderLink)
            .filter(FriendRequestColumn::ToUserId.eq(account_id.value()))
            .filter(FriendRequestColumn::IsAccepted.eq(is_accepted))
            .order_by_asc(FriendRequestColumn::CreatedAt)
            .order_by_asc(FriendRequestColumn::Id)
            .all(&*self.db)
            .await
            .map_err(|e| FriendRequestQueryError::DatabaseError(e.to_string()))?;

        // The foreign key guarantees a sender; a missing one is skipped
        Ok(rows
            .into_iter()
            .filter_map(|(request, sender)| sender.map(|s| (request, s)))
            .collect())
    }
}

fn to_summary(model: &AccountModel) -> AccountSummary {
    AccountSummary {
        id: AccountId::from(model.id),
        email: model.email.clone(),
        first_name: model.first_name.clone(),
        last_name: model.last_name.clone(),
    }
}

#[async_trait]
impl FriendRequestQuery for FriendRequestQueryPostgres {
    async fn friends_of(
        &self,
        account_id: AccountId,
    ) -> Result<Vec<AccountSummary>, FriendRequestQueryError> {
        Ok(self
            .inbound(account_id, true)
            .await?
            .iter()
            .map(|(_, sender)| to_summary(sender))
            .collect())
    }

    async fn pending_for(
        &self,
        account_id: AccountId,
    ) -> Result<Vec<PendingFriendRequest>, FriendRequestQueryError> {
        Ok(self
            .inbound(account_id, false)
            .await?
            .iter()
            .map(|(request, sender)| PendingFriendRequest {
                id: FriendRequestId::from(request.id),
                from_user: to_summary(sender),
                created_at: request.created_at.with_timezone(&chrono::Utc),
            })
            .collect())
    }
}
