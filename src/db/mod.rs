//! Database module for PostgreSQL access.
//!
//! User records live in PostgreSQL; writes go through the `addUser` stored
//! procedure rather than direct INSERTs.

mod repository;

pub use repository::*;

use sqlx::postgres::{PgConnectOptions, PgPool, PgPoolOptions};

use crate::config::Config;

/// Build the connection pool from the DB_* settings.
///
/// The pool connects lazily so the server can start (and serve uploads and
/// static assets) without a reachable database.
pub fn connect(config: &Config) -> PgPool {
    let options = PgConnectOptions::new()
        .host(&config.db_host)
        .port(config.db_port)
        .username(&config.db_user)
        .password(&config.db_password)
        .database(&config.db_name);

    PgPoolOptions::new()
        .max_connections(5)
        .acquire_timeout(std::time::Duration::from_secs(3))
        .connect_lazy_with(options)
}
