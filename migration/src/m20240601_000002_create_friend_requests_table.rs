use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(FriendRequests::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(FriendRequests::Id)
                            .uuid()
                            .not_null()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(FriendRequests::FromUserId).uuid().not_null())
                    .col(ColumnDef::new(FriendRequests::ToUserId).uuid().not_null())
                    .col(
                        ColumnDef::new(FriendRequests::IsAccepted)
                            .boolean()
                            .not_null()
                            .default(false),
                    )
                    .col(
                        ColumnDef::new(FriendRequests::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    // FK → accounts (sender)
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_friend_requests_from_user_id")
                            .from(FriendRequests::Table, FriendRequests::FromUserId)
                            .to(Accounts::Table, Accounts::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    // FK → accounts (recipient)
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_friend_requests_to_user_id")
                            .from(FriendRequests::Table, FriendRequests::ToUserId)
                            .to(Accounts::Table, Accounts::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        // One request per ordered (sender, recipient) pair
        manager
            .create_index(
                Index::create()
                    .name("uq_friend_requests_from_to")
                    .table(FriendRequests::Table)
                    .col(FriendRequests::FromUserId)
                    .col(FriendRequests::ToUserId)
                    .unique()
                    .to_owned(),
            )
            .await?;

        // Inbox lookups: friends and pending requests of a recipient
        manager
            .get_connection()
            .execute_unprepared(
                r#"
                CREATE INDEX idx_friend_requests_to_user_accepted
                ON friend_requests (to_user_id, is_accepted, created_at);
                "#,
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .get_connection()
            .execute_unprepared(
                r#"
                DROP INDEX IF EXISTS uq_friend_requests_from_to;
                DROP INDEX IF EXISTS idx_friend_requests_to_user_accepted;
                "#,
            )
            .await?;

        manager
            .drop_table(Table::drop().table(FriendRequests::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum FriendRequests {
    Table,
    Id,
    FromUserId,
    ToUserId,
    IsAccepted,
    CreatedAt,
}

#[derive(DeriveIden)]
enum Accounts {
    Table,
    Id,
}
