use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager.create_table(
            Table::create()
                .table(NetworkPair::Table)
                .if_not_exists()
                .col(ColumnDef::new(NetworkPair::Id).uuid().not_null().primary_key())
                .col(ColumnDef::new(NetworkPair::FromNetworkId).uuid().not_null())
                .col(ColumnDef::new(NetworkPair::ToNetworkId).uuid().not_null())
                .col(ColumnDef::new(NetworkPair::ProfitPercent).decimal_len(10, 4).not_null())
                .col(ColumnDef::new(NetworkPair::IsActive).boolean().not_null().default(true))
                .col(
                    ColumnDef::new(NetworkPair::CreatedAt)
                        .timestamp_with_time_zone()
                        .not_null()
                        .default(Expr::current_timestamp())
                )
                .to_owned()
        ).await?;

        manager.create_index(
            Index::create()
                .if_not_exists()
                .name("idx_network_pairs_from_network")
                .table(NetworkPair::Table)
                .col(NetworkPair::FromNetworkId)
                .to_owned()
        ).await?;

        manager.create_index(
            Index::create()
                .if_not_exists()
                .name("idx_network_pairs_to_network")
                .table(NetworkPair::Table)
                .col(NetworkPair::ToNetworkId)
                .to_owned()
        ).await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager.drop_table(Table::drop().table(NetworkPair::Table).to_owned()).await
    }
}

#[derive(DeriveIden)]
enum NetworkPair {
    #[sea_orm(iden = "network_pairs")]
    Table,
    Id,
    FromNetworkId,
    ToNetworkId,
    ProfitPercent,
    IsActive,
    CreatedAt,
}
