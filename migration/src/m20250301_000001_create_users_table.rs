use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager.create_table(
            Table::create()
                .table(User::Table)
                .if_not_exists()
                .col(ColumnDef::new(User::Id).uuid().not_null().primary_key())
                .col(ColumnDef::new(User::Email).string().null())
                .col(ColumnDef::new(User::PasswordHash).string().null())
                .col(ColumnDef::new(User::InviteToken).string().not_null())
                .col(ColumnDef::new(User::Role).string().not_null())
                .col(ColumnDef::new(User::Status).string().not_null())
                .col(
                    ColumnDef::new(User::Balance)
                        .decimal_len(30, 10)
                        .not_null()
                        .default(0)
                )
                .col(ColumnDef::new(User::InsuranceDepositAmount).decimal_len(30, 10).null())
                .col(
                    ColumnDef::new(User::InsuranceDepositPaid)
                        .decimal_len(30, 10)
                        .not_null()
                        .default(0)
                )
                .col(ColumnDef::new(User::ReferralCodeUsed).string().null())
                .col(
                    ColumnDef::new(User::CreatedAt)
                        .timestamp_with_time_zone()
                        .not_null()
                        .default(Expr::current_timestamp())
                )
                .col(
                    ColumnDef::new(User::UpdatedAt)
                        .timestamp_with_time_zone()
                        .not_null()
                        .default(Expr::current_timestamp())
                )
                .to_owned()
        ).await?;

        manager.create_index(
            Index::create()
                .if_not_exists()
                .name("idx_users_email")
                .table(User::Table)
                .col(User::Email)
                .unique()
                .to_owned()
        ).await?;

        manager.create_index(
            Index::create()
                .if_not_exists()
                .name("idx_users_invite_token")
                .table(User::Table)
                .col(User::InviteToken)
                .unique()
                .to_owned()
        ).await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager.drop_table(Table::drop().table(User::Table).to_owned()).await
    }
}

#[derive(DeriveIden)]
enum User {
    #[sea_orm(iden = "users")]
    Table,
    Id,
    Email,
    PasswordHash,
    InviteToken,
    Role,
    Status,
    Balance,
    InsuranceDepositAmount,
    InsuranceDepositPaid,
    ReferralCodeUsed,
    CreatedAt,
    UpdatedAt,
}
