use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager.create_table(
            Table::create()
                .table(WalletTransaction::Table)
                .if_not_exists()
                .col(ColumnDef::new(WalletTransaction::Id).uuid().not_null().primary_key())
                .col(ColumnDef::new(WalletTransaction::WalletId).uuid().not_null())
                .col(ColumnDef::new(WalletTransaction::Direction).string().not_null())
                .col(ColumnDef::new(WalletTransaction::Amount).decimal_len(30, 10).not_null())
                .col(ColumnDef::new(WalletTransaction::Balance).decimal_len(30, 10).not_null())
                .col(ColumnDef::new(WalletTransaction::Status).string().not_null())
                .col(ColumnDef::new(WalletTransaction::Hash).string().not_null())
                .col(ColumnDef::new(WalletTransaction::FromAddress).string().null())
                .col(ColumnDef::new(WalletTransaction::ToAddress).string().null())
                .col(ColumnDef::new(WalletTransaction::BlockNumber).big_integer().null())
                .col(ColumnDef::new(WalletTransaction::GasUsed).string().null())
                .col(ColumnDef::new(WalletTransaction::Fee).decimal_len(30, 10).null())
                .col(
                    ColumnDef::new(WalletTransaction::CreatedAt)
                        .timestamp_with_time_zone()
                        .not_null()
                        .default(Expr::current_timestamp())
                )
                .to_owned()
        ).await?;

        manager.create_index(
            Index::create()
                .if_not_exists()
                .name("idx_wallet_transactions_wallet_id")
                .table(WalletTransaction::Table)
                .col(WalletTransaction::WalletId)
                .to_owned()
        ).await?;

        manager.create_index(
            Index::create()
                .if_not_exists()
                .name("idx_wallet_transactions_hash")
                .table(WalletTransaction::Table)
                .col(WalletTransaction::Hash)
                .to_owned()
        ).await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager.drop_table(Table::drop().table(WalletTransaction::Table).to_owned()).await
    }
}

#[derive(DeriveIden)]
enum WalletTransaction {
    #[sea_orm(iden = "wallet_transactions")]
    Table,
    Id,
    WalletId,
    Direction,
    Amount,
    Balance,
    Status,
    Hash,
    FromAddress,
    ToAddress,
    BlockNumber,
    GasUsed,
    Fee,
    CreatedAt,
}
