pub use sea_orm_migration::prelude::*;

mod m20250301_000001_create_users_table;
mod m20250301_000002_create_sessions_table;
mod m20250302_000001_create_networks_table;
mod m20250302_000002_create_network_pairs_table;
mod m20250303_000001_create_wallets_table;
mod m20250303_000002_create_wallet_transactions_table;
mod m20250304_000001_create_wallet_requests_table;
mod m20250304_000002_create_deposit_requests_table;
mod m20250304_000003_create_receive_requests_table;
mod m20250305_000001_create_withdrawal_requests_table;
mod m20250305_000002_create_withdrawal_earnings_table;
mod m20250306_000001_create_support_tickets_table;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20250301_000001_create_users_table::Migration),
            Box::new(m20250301_000002_create_sessions_table::Migration),
            Box::new(m20250302_000001_create_networks_table::Migration),
            Box::new(m20250302_000002_create_network_pairs_table::Migration),
            Box::new(m20250303_000001_create_wallets_table::Migration),
            Box::new(m20250303_000002_create_wallet_transactions_table::Migration),
            Box::new(m20250304_000001_create_wallet_requests_table::Migration),
            Box::new(m20250304_000002_create_deposit_requests_table::Migration),
            Box::new(m20250304_000003_create_receive_requests_table::Migration),
            Box::new(m20250305_000001_create_withdrawal_requests_table::Migration),
            Box::new(m20250305_000002_create_withdrawal_earnings_table::Migration),
            Box::new(m20250306_000001_create_support_tickets_table::Migration)
        ]
    }
}
