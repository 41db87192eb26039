use sea_orm::entity::prelude::*;
use serde::{ Deserialize, Serialize };

/// Append-only ledger entry. One row per balance mutation.
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "wallet_transactions")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    pub wallet_id: Uuid,
    pub direction: String,
    pub amount: Decimal,
    /// Wallet balance immediately after this mutation.
    pub balance: Decimal,
    pub status: String,
    pub hash: String,
    pub from_address: Option<String>,
    pub to_address: Option<String>,
    pub block_number: Option<i64>,
    pub gas_used: Option<String>,
    pub fee: Option<Decimal>,
    pub created_at: DateTimeUtc,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::wallet::Entity",
        from = "Column::WalletId",
        to = "super::wallet::Column::Id"
    )]
    Wallet,
}

impl Related<super::wallet::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Wallet.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
