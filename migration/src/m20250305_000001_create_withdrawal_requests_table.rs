use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager.create_table(
            Table::create()
                .table(WithdrawalRequest::Table)
                .if_not_exists()
                .col(ColumnDef::new(WithdrawalRequest::Id).uuid().not_null().primary_key())
                .col(ColumnDef::new(WithdrawalRequest::UserId).uuid().not_null())
                .col(ColumnDef::new(WithdrawalRequest::WalletId).uuid().not_null())
                .col(ColumnDef::new(WithdrawalRequest::Amount).decimal_len(30, 10).not_null())
                .col(
                    ColumnDef::new(WithdrawalRequest::PaidAmount)
                        .decimal_len(30, 10)
                        .not_null()
                        .default(0)
                )
                .col(
                    ColumnDef::new(WithdrawalRequest::RemainingAmount)
                        .decimal_len(30, 10)
                        .not_null()
                )
                .col(ColumnDef::new(WithdrawalRequest::Status).string().not_null())
                .col(ColumnDef::new(WithdrawalRequest::Profit).decimal_len(30, 10).null())
                .col(ColumnDef::new(WithdrawalRequest::AdminNotes).text().null())
                .col(
                    ColumnDef::new(WithdrawalRequest::CreatedAt)
                        .timestamp_with_time_zone()
                        .not_null()
                        .default(Expr::current_timestamp())
                )
                .col(
                    ColumnDef::new(WithdrawalRequest::UpdatedAt)
                        .timestamp_with_time_zone()
                        .not_null()
                        .default(Expr::current_timestamp())
                )
                .to_owned()
        ).await?;

        manager.create_index(
            Index::create()
                .if_not_exists()
                .name("idx_withdrawal_requests_wallet_status")
                .table(WithdrawalRequest::Table)
                .col(WithdrawalRequest::WalletId)
                .col(WithdrawalRequest::Status)
                .to_owned()
        ).await?;

        manager.create_index(
            Index::create()
                .if_not_exists()
                .name("idx_withdrawal_requests_user_id")
                .table(WithdrawalRequest::Table)
                .col(WithdrawalRequest::UserId)
                .to_owned()
        ).await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager.drop_table(Table::drop().table(WithdrawalRequest::Table).to_owned()).await
    }
}

#[derive(DeriveIden)]
enum WithdrawalRequest {
    #[sea_orm(iden = "withdrawal_requests")]
    Table,
    Id,
    UserId,
    WalletId,
    Amount,
    PaidAmount,
    RemainingAmount,
    Status,
    Profit,
    AdminNotes,
    CreatedAt,
    UpdatedAt,
}
