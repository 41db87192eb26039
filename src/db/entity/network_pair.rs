use sea_orm::entity::prelude::*;
use serde::{ Deserialize, Serialize };

/// Admin-defined arbitrage route between two networks.
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "network_pairs")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    pub from_network_id: Uuid,
    pub to_network_id: Uuid,
    pub profit_percent: Decimal,
    pub is_active: bool,
    pub created_at: DateTimeUtc,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::network::Entity",
        from = "Column::FromNetworkId",
        to = "super::network::Column::Id"
    )]
    FromNetwork,
    #[sea_orm(
        belongs_to = "super::network::Entity",
        from = "Column::ToNetworkId",
        to = "super::network::Column::Id"
    )]
    ToNetwork,
}

impl ActiveModelBehavior for ActiveModel {}
