use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager.create_table(
            Table::create()
                .table(SupportTicket::Table)
                .if_not_exists()
                .col(ColumnDef::new(SupportTicket::Id).uuid().not_null().primary_key())
                .col(ColumnDef::new(SupportTicket::UserId).uuid().not_null())
                .col(ColumnDef::new(SupportTicket::Title).string().not_null())
                .col(ColumnDef::new(SupportTicket::Message).text().not_null())
                .col(ColumnDef::new(SupportTicket::Status).string().not_null())
                .col(
                    ColumnDef::new(SupportTicket::CreatedAt)
                        .timestamp_with_time_zone()
                        .not_null()
                        .default(Expr::current_timestamp())
                )
                .col(
                    ColumnDef::new(SupportTicket::UpdatedAt)
                        .timestamp_with_time_zone()
                        .not_null()
                        .default(Expr::current_timestamp())
                )
                .to_owned()
        ).await?;

        manager.create_index(
            Index::create()
                .if_not_exists()
                .name("idx_support_tickets_user_id")
                .table(SupportTicket::Table)
                .col(SupportTicket::UserId)
                .to_owned()
        ).await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager.drop_table(Table::drop().table(SupportTicket::Table).to_owned()).await
    }
}

#[derive(DeriveIden)]
enum SupportTicket {
    #[sea_orm(iden = "support_tickets")]
    Table,
    Id,
    UserId,
    Title,
    Message,
    Status,
    CreatedAt,
    UpdatedAt,
}
