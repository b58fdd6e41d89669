use sea_orm::entity::prelude::*;
use uuid::Uuid;

use crate::account::application::domain::entities::AccountId;
use crate::friendship::application::domain::entities::{FriendRequest, FriendRequestId};

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "friend_requests")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    pub from_user_id: Uuid,
    pub to_user_id: Uuid,
    pub is_accepted: bool,
    pub created_at: DateTimeWithTimeZone,
}

impl Model {
    pub fn to_domain(&self) -> FriendRequest {
        FriendRequest {
            id: FriendRequestId::from(self.id),
            from_user: AccountId::from(self.from_user_id),
            to_user: AccountId::from(self.to_user_id),
            is_accepted: self.is_accepted,
            created_at: self.created_at.with_timezone(&chrono::Utc),
        }
    }
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "crate::account::adapter::outgoing::sea_orm_entity::accounts::Entity",
        from = "Column::FromUserId",
        to = "crate::account::adapter::outgoing::sea_orm_entity::accounts::Column::Id",
        on_delete = "Cascade"
    )]
    FromUser,
}

/// Joins a request to the account that sent it
pub struct SenderLink;

impl Linked for SenderLink {
    type FromEntity = Entity;
    type ToEntity = crate::account::adapter::outgoing::sea_orm_entity::accounts::Entity;

    fn link(&self) -> Vec<RelationDef> {
        vec![Relation::FromUser.def()]
    }
}

impl ActiveModelBehavior for ActiveModel {}
