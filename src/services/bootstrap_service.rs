use std::sync::Arc;

use rust_decimal::Decimal;

use crate::auth::{ generate_token, hash_password };
use crate::config::Config;
use crate::db::{ NetworkRepository, UserRepository };
use crate::enums::Role;
use crate::error::{ AppError, Result };

const SEED_NETWORKS: &[(&str, &str)] = &[
    ("TRC20", "Tron (TRC20)"),
    ("BEP20", "BNB Smart Chain (BEP20)"),
    ("ERC20", "Ethereum (ERC20)"),
    ("POLYGON", "Polygon"),
];

/// One-time initialisation: the first admin account and the seed
/// network catalogue. Every step is idempotent, so the endpoint can be
/// hit again after a partial run.
pub struct BootstrapService {
    users: Arc<UserRepository>,
    networks: Arc<NetworkRepository>,
    admin_email: String,
    admin_password: String,
}

impl BootstrapService {
    pub fn new(
        users: Arc<UserRepository>,
        networks: Arc<NetworkRepository>,
        config: &Config
    ) -> Self {
        Self {
            users,
            networks,
            admin_email: config.bootstrap_admin_email.clone(),
            admin_password: config.bootstrap_admin_password.clone(),
        }
    }

    pub async fn create_admin(&self) -> Result<bool> {
        let created = self.ensure_admin().await?;
        if created {
            tracing::info!("Bootstrap admin created");
        }
        Ok(created)
    }

    pub async fn init_database(&self) -> Result<BootstrapReport> {
        let admin_created = self.ensure_admin().await?;
        let networks_created = self.ensure_networks().await?;
        let pairs_created = self.ensure_pairs().await?;

        tracing::info!(admin_created, networks_created, pairs_created, "Bootstrap finished");
        Ok(BootstrapReport { admin_created, networks_created, pairs_created })
    }

    async fn ensure_admin(&self) -> Result<bool> {
        if self.users.find_any_admin().await?.is_some() {
            return Ok(false);
        }
        if self.admin_email.is_empty() || self.admin_password.is_empty() {
            return Err(AppError::Config("Bootstrap admin credentials are not set".to_string()));
        }

        let password_hash = hash_password(&self.admin_password)?;
        self.users
            .create_registered(
                self.admin_email.clone(),
                password_hash,
                generate_token(),
                Role::Admin
            ).await?;

        Ok(true)
    }

    async fn ensure_networks(&self) -> Result<usize> {
        let mut created = 0;
        for (name, display_name) in SEED_NETWORKS {
            if self.networks.find_by_name(name).await?.is_none() {
                self.networks.create(name.to_string(), display_name.to_string()).await?;
                created += 1;
            }
        }
        Ok(created)
    }

    /// One crossing per ordered pair of distinct seed networks.
    async fn ensure_pairs(&self) -> Result<usize> {
        let existing = self.networks.find_pairs(false).await?;
        let mut created = 0;

        for (from_name, _) in SEED_NETWORKS {
            for (to_name, _) in SEED_NETWORKS {
                if from_name == to_name {
                    continue;
                }

                let from = match self.networks.find_by_name(from_name).await? {
                    Some(network) => network,
                    None => {
                        continue;
                    }
                };
                let to = match self.networks.find_by_name(to_name).await? {
                    Some(network) => network,
                    None => {
                        continue;
                    }
                };

                let already = existing
                    .iter()
                    .any(|p| p.from_network_id == from.id && p.to_network_id == to.id);
                if already {
                    continue;
                }

                self.networks.create_pair(from.id, to.id, Decimal::ZERO).await?;
                created += 1;
            }
        }

        Ok(created)
    }
}

#[derive(Debug, serde::Serialize)]
pub struct BootstrapReport {
    pub admin_created: bool,
    pub networks_created: usize,
    pub pairs_created: usize,
}
