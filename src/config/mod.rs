//! Configuration module for the Click Fit backend.
//!
//! All configuration is loaded from environment variables with sensible defaults.

use std::env;
use std::net::SocketAddr;
use std::path::PathBuf;

/// Application configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct Config {
    /// PostgreSQL host
    pub db_host: String,
    /// PostgreSQL port
    pub db_port: u16,
    /// PostgreSQL user
    pub db_user: String,
    /// PostgreSQL password
    pub db_password: String,
    /// PostgreSQL database name
    pub db_name: String,
    /// Directory where uploaded images are stored
    pub upload_dir: PathBuf,
    /// Directory containing the static front-end assets
    pub public_dir: PathBuf,
    /// Address to bind the server to
    pub bind_addr: SocketAddr,
    /// Log level (trace, debug, info, warn, error)
    pub log_level: String,
}

impl Config {
    /// Load configuration from environment variables.
    pub fn from_env() -> Self {
        dotenvy::dotenv().ok();

        let db_host = env::var("DB_HOST").unwrap_or_else(|_| "localhost".to_string());

        let db_port = env::var("DB_PORT")
            .unwrap_or_else(|_| "5432".to_string())
            .parse()
            .expect("Invalid DB_PORT format");

        let db_user = env::var("DB_USER").unwrap_or_else(|_| "postgres".to_string());

        let db_password = env::var("DB_PASSWORD").unwrap_or_default();

        let db_name = env::var("DB_NAME").unwrap_or_else(|_| "clickfit_db".to_string());

        let upload_dir = env::var("UPLOAD_DIR")
            .unwrap_or_else(|_| "./upload_images".to_string())
            .into();

        let public_dir = env::var("PUBLIC_DIR")
            .unwrap_or_else(|_| "./public".to_string())
            .into();

        let bind_addr = env::var("BIND_ADDR")
            .unwrap_or_else(|_| "127.0.0.1:3000".to_string())
            .parse()
            .expect("Invalid BIND_ADDR format");

        let log_level = env::var("LOG_LEVEL").unwrap_or_else(|_| "info".to_string());

        Self {
            db_host,
            db_port,
            db_user,
            db_password,
            db_name,
            upload_dir,
            public_dir,
            bind_addr,
            log_level,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        // Clear any existing env vars
        env::remove_var("DB_HOST");
        env::remove_var("DB_PORT");
        env::remove_var("DB_USER");
        env::remove_var("DB_PASSWORD");
        env::remove_var("DB_NAME");
        env::remove_var("UPLOAD_DIR");
        env::remove_var("PUBLIC_DIR");
        env::remove_var("BIND_ADDR");
        env::remove_var("LOG_LEVEL");

        let config = Config::from_env();

        assert_eq!(config.db_host, "localhost");
        assert_eq!(config.db_port, 5432);
        assert_eq!(config.db_user, "postgres");
        assert_eq!(config.db_name, "clickfit_db");
        assert_eq!(config.upload_dir, PathBuf::from("./upload_images"));
        assert_eq!(config.public_dir, PathBuf::from("./public"));
        assert_eq!(config.bind_addr.to_string(), "127.0.0.1:3000");
        assert_eq!(config.log_level, "info");
    }
}
