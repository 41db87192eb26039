use std::sync::Arc;

use rust_decimal::Decimal;
use serde::Serialize;
use uuid::Uuid;

use crate::db::{ entity, NetworkRepository };
use crate::error::{ AppError, Result };

/// A crossing with both endpoint networks resolved.
#[derive(Debug, Serialize)]
pub struct PairWithNetworks {
    #[serde(flatten)]
    pub pair: entity::network_pair::Model,
    pub from_network: entity::network::Model,
    pub to_network: entity::network::Model,
}

pub struct NetworkService {
    networks: Arc<NetworkRepository>,
}

impl NetworkService {
    pub fn new(networks: Arc<NetworkRepository>) -> Self {
        Self { networks }
    }

    pub async fn list(&self, active_only: bool) -> Result<Vec<entity::network::Model>> {
        self.networks.find_all(active_only).await
    }

    pub async fn create(
        &self,
        name: String,
        display_name: String
    ) -> Result<entity::network::Model> {
        let name = name.trim().to_uppercase();
        if name.is_empty() {
            return Err(AppError::InvalidInput("Network name cannot be empty".to_string()));
        }
        if self.networks.find_by_name(&name).await?.is_some() {
            return Err(AppError::Conflict(format!("Network {name} already exists")));
        }

        self.networks.create(name, display_name).await
    }

    pub async fn update(
        &self,
        id: Uuid,
        display_name: Option<String>,
        is_active: Option<bool>
    ) -> Result<entity::network::Model> {
        let network = self.networks.find_by_id(id).await?;
        self.networks.update(network, display_name, is_active).await
    }

    /// Delete a network; refused while any pair still references it.
    pub async fn delete(&self, id: Uuid) -> Result<()> {
        let network = self.networks.find_by_id(id).await?;
        let referencing = self.networks.count_pairs_referencing(network.id).await?;
        ensure_no_pair_references(referencing)?;

        self.networks.delete(network.id).await
    }

    pub async fn list_pairs(&self, active_only: bool) -> Result<Vec<PairWithNetworks>> {
        let pairs = self.networks.find_pairs(active_only).await?;

        let mut out = Vec::with_capacity(pairs.len());
        for pair in pairs {
            let from_network = self.networks.find_by_id(pair.from_network_id).await?;
            let to_network = self.networks.find_by_id(pair.to_network_id).await?;
            out.push(PairWithNetworks { pair, from_network, to_network });
        }

        Ok(out)
    }

    pub async fn create_pair(
        &self,
        from_network_id: Uuid,
        to_network_id: Uuid,
        profit_percent: Decimal
    ) -> Result<entity::network_pair::Model> {
        if from_network_id == to_network_id {
            return Err(
                AppError::InvalidInput("A pair must connect two different networks".to_string())
            );
        }
        if profit_percent < Decimal::ZERO {
            return Err(AppError::InvalidInput("Profit percent cannot be negative".to_string()));
        }
        self.networks.find_by_id(from_network_id).await?;
        self.networks.find_by_id(to_network_id).await?;

        self.networks.create_pair(from_network_id, to_network_id, profit_percent).await
    }

    pub async fn update_pair(
        &self,
        id: Uuid,
        profit_percent: Option<Decimal>,
        is_active: Option<bool>
    ) -> Result<entity::network_pair::Model> {
        if let Some(profit_percent) = profit_percent {
            if profit_percent < Decimal::ZERO {
                return Err(
                    AppError::InvalidInput("Profit percent cannot be negative".to_string())
                );
            }
        }
        let pair = self.networks.find_pair_by_id(id).await?;
        self.networks.update_pair(pair, profit_percent, is_active).await
    }

    pub async fn delete_pair(&self, id: Uuid) -> Result<()> {
        let pair = self.networks.find_pair_by_id(id).await?;
        self.networks.delete_pair(pair.id).await
    }
}

fn ensure_no_pair_references(referencing: u64) -> Result<()> {
    if referencing > 0 {
        return Err(
            AppError::Conflict("Cannot delete network that is used in network pairs".to_string())
        );
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unreferenced_network_can_be_deleted() {
        assert!(ensure_no_pair_references(0).is_ok());
    }

    #[test]
    fn test_referenced_network_cannot_be_deleted() {
        let err = ensure_no_pair_references(2).unwrap_err();
        assert!(matches!(err, AppError::Conflict(_)));
    }
}
