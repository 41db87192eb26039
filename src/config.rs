use std::env;

#[derive(Debug, Clone)]
pub struct Config {
    pub database_url: String,
    pub server_host: String,
    pub server_port: u16,
    /// Bearer secret gating the bootstrap endpoints.
    pub init_db_secret: String,
    pub session_ttl_hours: i64,
    /// Email/password used when the bootstrap endpoints seed the first admin.
    pub bootstrap_admin_email: String,
    pub bootstrap_admin_password: String,
}

impl Config {
    pub fn from_env() -> Result<Self, Box<dyn std::error::Error>> {
        dotenv::dotenv().ok();

        let database_url = env::var("DATABASE_URL")?;

        let server_host = env::var("SERVER_HOST").unwrap_or_else(|_| "0.0.0.0".to_string());
        let server_port = env::var("SERVER_PORT")
            .unwrap_or_else(|_| "8080".to_string())
            .parse()?;

        let init_db_secret = env::var("INIT_DB_SECRET")?;
        if init_db_secret.len() < 16 {
            return Err("INIT_DB_SECRET must be at least 16 characters".into());
        }

        let session_ttl_hours = env::var("SESSION_TTL_HOURS")
            .unwrap_or_else(|_| "72".to_string())
            .parse()?;

        let bootstrap_admin_email = env::var("BOOTSTRAP_ADMIN_EMAIL")
            .unwrap_or_else(|_| "admin@localhost".to_string());
        let bootstrap_admin_password = env::var("BOOTSTRAP_ADMIN_PASSWORD")?;

        Ok(Config {
            database_url,
            server_host,
            server_port,
            init_db_secret,
            session_ttl_hours,
            bootstrap_admin_email,
            bootstrap_admin_password,
        })
    }
}
