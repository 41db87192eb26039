use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager.create_table(
            Table::create()
                .table(DepositRequest::Table)
                .if_not_exists()
                .col(ColumnDef::new(DepositRequest::Id).uuid().not_null().primary_key())
                .col(ColumnDef::new(DepositRequest::UserId).uuid().not_null())
                .col(ColumnDef::new(DepositRequest::Amount).decimal_len(30, 10).not_null())
                .col(ColumnDef::new(DepositRequest::FromNetwork).string().not_null())
                .col(ColumnDef::new(DepositRequest::ToNetwork).string().not_null())
                .col(ColumnDef::new(DepositRequest::AdminWalletAddress).string().null())
                .col(ColumnDef::new(DepositRequest::Status).string().not_null())
                .col(
                    ColumnDef::new(DepositRequest::CreatedAt)
                        .timestamp_with_time_zone()
                        .not_null()
                        .default(Expr::current_timestamp())
                )
                .col(
                    ColumnDef::new(DepositRequest::UpdatedAt)
                        .timestamp_with_time_zone()
                        .not_null()
                        .default(Expr::current_timestamp())
                )
                .to_owned()
        ).await?;

        manager.create_index(
            Index::create()
                .if_not_exists()
                .name("idx_deposit_requests_user_id")
                .table(DepositRequest::Table)
                .col(DepositRequest::UserId)
                .to_owned()
        ).await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager.drop_table(Table::drop().table(DepositRequest::Table).to_owned()).await
    }
}

#[derive(DeriveIden)]
enum DepositRequest {
    #[sea_orm(iden = "deposit_requests")]
    Table,
    Id,
    UserId,
    Amount,
    FromNetwork,
    ToNetwork,
    AdminWalletAddress,
    Status,
    CreatedAt,
    UpdatedAt,
}
