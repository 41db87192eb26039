use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager.create_table(
            Table::create()
                .table(WalletRequest::Table)
                .if_not_exists()
                .col(ColumnDef::new(WalletRequest::Id).uuid().not_null().primary_key())
                .col(ColumnDef::new(WalletRequest::UserId).uuid().not_null())
                .col(ColumnDef::new(WalletRequest::Address).string().null())
                .col(ColumnDef::new(WalletRequest::Network).string().not_null())
                .col(ColumnDef::new(WalletRequest::WalletType).string().not_null())
                .col(ColumnDef::new(WalletRequest::Description).text().null())
                .col(ColumnDef::new(WalletRequest::MinAmount).decimal_len(30, 10).null())
                .col(ColumnDef::new(WalletRequest::MaxAmount).decimal_len(30, 10).null())
                .col(ColumnDef::new(WalletRequest::DailyLimit).decimal_len(30, 10).null())
                .col(ColumnDef::new(WalletRequest::Status).string().not_null())
                .col(
                    ColumnDef::new(WalletRequest::CreatedAt)
                        .timestamp_with_time_zone()
                        .not_null()
                        .default(Expr::current_timestamp())
                )
                .col(
                    ColumnDef::new(WalletRequest::UpdatedAt)
                        .timestamp_with_time_zone()
                        .not_null()
                        .default(Expr::current_timestamp())
                )
                .to_owned()
        ).await?;

        manager.create_index(
            Index::create()
                .if_not_exists()
                .name("idx_wallet_requests_user_status")
                .table(WalletRequest::Table)
                .col(WalletRequest::UserId)
                .col(WalletRequest::Status)
                .to_owned()
        ).await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager.drop_table(Table::drop().table(WalletRequest::Table).to_owned()).await
    }
}

#[derive(DeriveIden)]
enum WalletRequest {
    #[sea_orm(iden = "wallet_requests")]
    Table,
    Id,
    UserId,
    Address,
    Network,
    WalletType,
    Description,
    MinAmount,
    MaxAmount,
    DailyLimit,
    Status,
    CreatedAt,
    UpdatedAt,
}
