use std::sync::Arc;

use arbitrage_platform::{ api, db, services, Config, Result };
use axum::{ routing::{ get, patch, post }, Router };
use migration::MigratorTrait;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use tracing_subscriber::{ layer::SubscriberExt, util::SubscriberInitExt };

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber
        ::registry()
        .with(
            tracing_subscriber::EnvFilter
                ::try_from_default_env()
                .unwrap_or_else(|_| "arbitrage_platform=debug,tower_http=debug".into())
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = Config::from_env().map_err(|e|
        arbitrage_platform::AppError::Config(e.to_string())
    )?;

    let db_conn = sea_orm::Database::connect(&config.database_url).await?;
    tracing::info!("Database connected");

    migration::Migrator::up(&db_conn, None).await?;
    tracing::info!("Migrations completed");

    let users = Arc::new(db::UserRepository::new(db_conn.clone()));
    let wallets = Arc::new(db::WalletRepository::new(db_conn.clone()));
    let wallet_requests = Arc::new(db::WalletRequestRepository::new(db_conn.clone()));
    let deposits = Arc::new(db::DepositRequestRepository::new(db_conn.clone()));
    let receives = Arc::new(db::ReceiveRequestRepository::new(db_conn.clone()));
    let withdrawals = Arc::new(db::WithdrawalRepository::new(db_conn.clone()));
    let networks = Arc::new(db::NetworkRepository::new(db_conn.clone()));
    let support = Arc::new(db::SupportRepository::new(db_conn));

    let app_state = api::AppState {
        auth_service: Arc::new(
            services::AuthService::new(users.clone(), config.session_ttl_hours)
        ),
        user_service: Arc::new(
            services::UserService::new(users.clone(), wallets.clone(), wallet_requests.clone())
        ),
        network_service: Arc::new(services::NetworkService::new(networks.clone())),
        wallet_service: Arc::new(
            services::WalletService::new(
                wallets.clone(),
                wallet_requests.clone(),
                withdrawals.clone()
            )
        ),
        wallet_request_service: Arc::new(
            services::WalletRequestService::new(
                wallet_requests.clone(),
                wallets.clone(),
                withdrawals.clone(),
                users.clone()
            )
        ),
        deposit_service: Arc::new(
            services::DepositService::new(deposits, wallets.clone())
        ),
        receive_service: Arc::new(services::ReceiveService::new(receives, wallets.clone())),
        withdrawal_service: Arc::new(
            services::WithdrawalService::new(withdrawals, wallets, users.clone())
        ),
        support_service: Arc::new(services::SupportService::new(support)),
        bootstrap_service: Arc::new(
            services::BootstrapService::new(users, networks, &config)
        ),
        init_db_secret: config.init_db_secret.clone(),
    };

    let app = Router::new()
        .route("/api/health", get(api::bootstrap::health))
        .route("/api/create-admin", post(api::bootstrap::create_admin))
        .route("/api/init-database", post(api::bootstrap::init_database))
        .route("/api/auth/register", post(api::auth::register))
        .route("/api/auth/login", post(api::auth::login))
        .route("/api/auth/logout", post(api::auth::logout))
        .route("/api/auth/me", get(api::auth::me))
        .route("/api/network-pairs", get(api::networks::list_active_pairs))
        .route(
            "/api/user/wallets",
            get(api::wallets::list_my_wallets).delete(api::wallets::delete_my_wallet)
        )
        .route(
            "/api/user/wallets/{id}/transactions",
            get(api::wallets::list_my_wallet_transactions)
        )
        .route(
            "/api/user/wallet-requests",
            get(api::wallet_requests::list_my_requests).post(api::wallet_requests::create_my_request)
        )
        .route(
            "/api/user/deposit-requests",
            get(api::deposit_requests::list_my_requests).post(
                api::deposit_requests::create_my_request
            )
        )
        .route("/api/user/deposit-requests/{id}", post(api::deposit_requests::update_my_request))
        .route(
            "/api/user/receive-requests",
            get(api::receive_requests::list_my_requests).post(
                api::receive_requests::create_my_request
            )
        )
        .route(
            "/api/user/withdrawal-requests",
            get(api::withdrawal_requests::list_my_requests).post(
                api::withdrawal_requests::create_my_request
            )
        )
        .route(
            "/api/user/withdrawal-requests/{id}",
            get(api::withdrawal_requests::get_my_request)
        )
        .route(
            "/api/user/support",
            get(api::support::list_my_tickets).post(api::support::create_my_ticket)
        )
        .route("/api/user/support/{id}", get(api::support::get_my_ticket))
        .route(
            "/api/admin/networks",
            get(api::networks::list_networks).post(api::networks::create_network)
        )
        .route(
            "/api/admin/networks/{id}",
            patch(api::networks::update_network).delete(api::networks::delete_network)
        )
        .route(
            "/api/admin/network-pairs",
            get(api::networks::list_pairs).post(api::networks::create_pair)
        )
        .route(
            "/api/admin/network-pairs/{id}",
            patch(api::networks::update_pair).delete(api::networks::delete_pair)
        )
        .route(
            "/api/admin/users",
            get(api::users::list_users).post(api::users::create_user)
        )
        .route("/api/admin/users/{id}", patch(api::users::update_user))
        .route(
            "/api/admin/wallets",
            get(api::wallets::list_wallets).post(api::wallets::create_wallet)
        )
        .route(
            "/api/admin/wallets/{id}",
            patch(api::wallets::update_wallet).delete(api::wallets::delete_wallet)
        )
        .route("/api/admin/wallet-requests", get(api::wallet_requests::list_requests))
        .route("/api/admin/wallet-requests/{id}", patch(api::wallet_requests::resolve_request))
        .route("/api/admin/deposit-requests", get(api::deposit_requests::list_requests))
        .route("/api/admin/deposit-requests/{id}", patch(api::deposit_requests::update_request))
        .route("/api/admin/receive-requests", get(api::receive_requests::list_requests))
        .route("/api/admin/receive-requests/{id}", patch(api::receive_requests::update_request))
        .route("/api/admin/withdrawal-requests", get(api::withdrawal_requests::list_requests))
        .route(
            "/api/admin/withdrawal-requests/{id}",
            patch(api::withdrawal_requests::update_request)
        )
        .route("/api/admin/support", get(api::support::list_tickets))
        .route("/api/admin/support/{id}", patch(api::support::reply_to_ticket))
        .with_state(app_state)
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http());

    let addr = format!("{}:{}", config.server_host, config.server_port);
    tracing::info!("Server listening on {}", addr);

    let listener = tokio::net::TcpListener
        ::bind(&addr).await
        .map_err(|e| arbitrage_platform::AppError::Internal(e.to_string()))?;

    axum::serve(listener, app).await.map_err(|e|
        arbitrage_platform::AppError::Internal(e.to_string())
    )?;

    Ok(())
}
