use sea_orm::entity::prelude::*;
use uuid::Uuid;

use crate::account::application::ports::outgoing::AccountQueryResult;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "accounts")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    #[sea_orm(unique)]
    pub email: String,
    pub first_name: String,
    pub last_name: String,
    pub password_hash: String,
    pub is_active: bool,
    pub is_staff: bool,
    pub date_joined: DateTimeWithTimeZone,
}

impl Model {
    pub fn to_query_result(&self) -> AccountQueryResult {
        AccountQueryResult {
            id: self.id,
            email: self.email.clone(),
            first_name: self.first_name.clone(),
            last_name: self.last_name.clone(),
            password_hash: self.password_hash.clone(),
            is_active: self.is_active,
            is_staff: self.is_staff,
            date_joined: self.date_joined.with_timezone(&chrono::Utc),
        }
    }
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
