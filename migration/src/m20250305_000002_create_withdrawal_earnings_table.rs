use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager.create_table(
            Table::create()
                .table(WithdrawalEarning::Table)
                .if_not_exists()
                .col(ColumnDef::new(WithdrawalEarning::Id).uuid().not_null().primary_key())
                .col(ColumnDef::new(WithdrawalEarning::WithdrawalRequestId).uuid().not_null())
                .col(ColumnDef::new(WithdrawalEarning::Amount).decimal_len(30, 10).not_null())
                .col(ColumnDef::new(WithdrawalEarning::Description).text().null())
                .col(
                    ColumnDef::new(WithdrawalEarning::CreatedAt)
                        .timestamp_with_time_zone()
                        .not_null()
                        .default(Expr::current_timestamp())
                )
                .to_owned()
        ).await?;

        manager.create_index(
            Index::create()
                .if_not_exists()
                .name("idx_withdrawal_earnings_request_id")
                .table(WithdrawalEarning::Table)
                .col(WithdrawalEarning::WithdrawalRequestId)
                .to_owned()
        ).await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager.drop_table(Table::drop().table(WithdrawalEarning::Table).to_owned()).await
    }
}

#[derive(DeriveIden)]
enum WithdrawalEarning {
    #[sea_orm(iden = "withdrawal_earnings")]
    Table,
    Id,
    WithdrawalRequestId,
    Amount,
    Description,
    CreatedAt,
}
