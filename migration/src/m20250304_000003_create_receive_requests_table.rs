use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager.create_table(
            Table::create()
                .table(ReceiveRequest::Table)
                .if_not_exists()
                .col(ColumnDef::new(ReceiveRequest::Id).uuid().not_null().primary_key())
                .col(ColumnDef::new(ReceiveRequest::UserId).uuid().not_null())
                .col(ColumnDef::new(ReceiveRequest::WalletId).uuid().not_null())
                .col(ColumnDef::new(ReceiveRequest::Amount).decimal_len(30, 10).not_null())
                .col(ColumnDef::new(ReceiveRequest::Status).string().not_null())
                .col(
                    ColumnDef::new(ReceiveRequest::CreatedAt)
                        .timestamp_with_time_zone()
                        .not_null()
                        .default(Expr::current_timestamp())
                )
                .col(
                    ColumnDef::new(ReceiveRequest::UpdatedAt)
                        .timestamp_with_time_zone()
                        .not_null()
                        .default(Expr::current_timestamp())
                )
                .to_owned()
        ).await?;

        manager.create_index(
            Index::create()
                .if_not_exists()
                .name("idx_receive_requests_wallet_status")
                .table(ReceiveRequest::Table)
                .col(ReceiveRequest::WalletId)
                .col(ReceiveRequest::Status)
                .to_owned()
        ).await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager.drop_table(Table::drop().table(ReceiveRequest::Table).to_owned()).await
    }
}

#[derive(DeriveIden)]
enum ReceiveRequest {
    #[sea_orm(iden = "receive_requests")]
    Table,
    Id,
    UserId,
    WalletId,
    Amount,
    Status,
    CreatedAt,
    UpdatedAt,
}
