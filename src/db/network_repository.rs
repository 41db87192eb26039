use chrono::Utc;
use sea_orm::{ entity::prelude::*, Condition, DatabaseConnection, QueryOrder, Set };
use uuid::Uuid;

use crate::error::{ AppError, Result };
use crate::db::entity;

pub struct NetworkRepository {
    db: DatabaseConnection,
}

impl NetworkRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn create(
        &self,
        name: String,
        display_name: String
    ) -> Result<entity::network::Model> {
        let network = entity::network::ActiveModel {
            id: Set(Uuid::new_v4()),
            name: Set(name),
            display_name: Set(display_name),
            is_active: Set(true),
            created_at: Set(Utc::now()),
        };

        let network = network.insert(&self.db).await?;
        Ok(network)
    }

    pub async fn find_by_id(&self, id: Uuid) -> Result<entity::network::Model> {
        entity::network::Entity
            ::find_by_id(id)
            .one(&self.db).await?
            .ok_or(AppError::NotFound("Network"))
    }

    pub async fn find_by_name(&self, name: &str) -> Result<Option<entity::network::Model>> {
        let network = entity::network::Entity
            ::find()
            .filter(entity::network::Column::Name.eq(name))
            .one(&self.db).await?;

        Ok(network)
    }

    pub async fn find_all(&self, active_only: bool) -> Result<Vec<entity::network::Model>> {
        let mut query = entity::network::Entity::find();

        if active_only {
            query = query.filter(entity::network::Column::IsActive.eq(true));
        }

        let networks = query
            .order_by_desc(entity::network::Column::CreatedAt)
            .all(&self.db).await?;

        Ok(networks)
    }

    pub async fn update(
        &self,
        network: entity::network::Model,
        display_name: Option<String>,
        is_active: Option<bool>
    ) -> Result<entity::network::Model> {
        let mut model: entity::network::ActiveModel = network.into();
        if let Some(display_name) = display_name {
            model.display_name = Set(display_name);
        }
        if let Some(is_active) = is_active {
            model.is_active = Set(is_active);
        }

        let network = model.update(&self.db).await?;
        Ok(network)
    }

    pub async fn delete(&self, id: Uuid) -> Result<()> {
        entity::network::Entity::delete_by_id(id).exec(&self.db).await?;
        Ok(())
    }

    /// How many pairs reference the network on either side.
    pub async fn count_pairs_referencing(&self, network_id: Uuid) -> Result<u64> {
        use sea_orm::PaginatorTrait;

        let count = entity::network_pair::Entity
            ::find()
            .filter(
                Condition::any()
                    .add(entity::network_pair::Column::FromNetworkId.eq(network_id))
                    .add(entity::network_pair::Column::ToNetworkId.eq(network_id))
            )
            .count(&self.db).await?;

        Ok(count)
    }

    // ─── Pairs ───────────────────────────────────────────────────────

    pub async fn create_pair(
        &self,
        from_network_id: Uuid,
        to_network_id: Uuid,
        profit_percent: Decimal
    ) -> Result<entity::network_pair::Model> {
        let pair = entity::network_pair::ActiveModel {
            id: Set(Uuid::new_v4()),
            from_network_id: Set(from_network_id),
            to_network_id: Set(to_network_id),
            profit_percent: Set(profit_percent),
            is_active: Set(true),
            created_at: Set(Utc::now()),
        };

        let pair = pair.insert(&self.db).await?;
        Ok(pair)
    }

    pub async fn find_pair_by_id(&self, id: Uuid) -> Result<entity::network_pair::Model> {
        entity::network_pair::Entity
            ::find_by_id(id)
            .one(&self.db).await?
            .ok_or(AppError::NotFound("Network pair"))
    }

    pub async fn find_pairs(&self, active_only: bool) -> Result<Vec<entity::network_pair::Model>> {
        let mut query = entity::network_pair::Entity::find();

        if active_only {
            query = query.filter(entity::network_pair::Column::IsActive.eq(true));
        }

        let pairs = query
            .order_by_desc(entity::network_pair::Column::CreatedAt)
            .all(&self.db).await?;

        Ok(pairs)
    }

    pub async fn update_pair(
        &self,
        pair: entity::network_pair::Model,
        profit_percent: Option<Decimal>,
        is_active: Option<bool>
    ) -> Result<entity::network_pair::Model> {
        let mut model: entity::network_pair::ActiveModel = pair.into();
        if let Some(profit_percent) = profit_percent {
            model.profit_percent = Set(profit_percent);
        }
        if let Some(is_active) = is_active {
            model.is_active = Set(is_active);
        }

        let pair = model.update(&self.db).await?;
        Ok(pair)
    }

    pub async fn delete_pair(&self, id: Uuid) -> Result<()> {
        entity::network_pair::Entity::delete_by_id(id).exec(&self.db).await?;
        Ok(())
    }
}
