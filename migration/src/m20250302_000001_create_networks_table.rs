use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager.create_table(
            Table::create()
                .table(Network::Table)
                .if_not_exists()
                .col(ColumnDef::new(Network::Id).uuid().not_null().primary_key())
                .col(ColumnDef::new(Network::Name).string().not_null())
                .col(ColumnDef::new(Network::DisplayName).string().not_null())
                .col(ColumnDef::new(Network::IsActive).boolean().not_null().default(true))
                .col(
                    ColumnDef::new(Network::CreatedAt)
                        .timestamp_with_time_zone()
                        .not_null()
                        .default(Expr::current_timestamp())
                )
                .to_owned()
        ).await?;

        manager.create_index(
            Index::create()
                .if_not_exists()
                .name("idx_networks_name")
                .table(Network::Table)
                .col(Network::Name)
                .unique()
                .to_owned()
        ).await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager.drop_table(Table::drop().table(Network::Table).to_owned()).await
    }
}

#[derive(DeriveIden)]
enum Network {
    #[sea_orm(iden = "networks")]
    Table,
    Id,
    Name,
    DisplayName,
    IsActive,
    CreatedAt,
}
