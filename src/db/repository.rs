//! Database repository for user operations.
//!
//! Uses prepared statements throughout. Note that PostgreSQL folds unquoted
//! identifiers to lowercase, so the `userId` column comes back as `userid`.

use sqlx::postgres::PgRow;
use sqlx::{PgPool, Row};

use crate::errors::AppError;
use crate::models::{CreateUserRequest, UserRecord};

/// Database repository for all data operations.
#[derive(Clone)]
pub struct Repository {
    pool: PgPool,
}

impl Repository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Insert a user via the `addUser` stored procedure and return the
    /// inserted row(s).
    pub async fn add_user(&self, request: &CreateUserRequest) -> Result<Vec<UserRecord>, AppError> {
        let rows = sqlx::query("SELECT * FROM addUser($1, $2, $3, $4)")
            .bind(&request.email)
            .bind(&request.password)
            .bind(&request.user_type)
            .bind(request.active)
            .fetch_all(&self.pool)
            .await?;

        Ok(rows.iter().map(user_from_row).collect())
    }

    /// List all users.
    pub async fn list_users(&self) -> Result<Vec<UserRecord>, AppError> {
        let rows = sqlx::query("SELECT userId, email, type, active FROM users")
            .fetch_all(&self.pool)
            .await?;

        Ok(rows.iter().map(user_from_row).collect())
    }
}

fn user_from_row(row: &PgRow) -> UserRecord {
    UserRecord {
        user_id: row.get("userid"),
        email: row.get("email"),
        user_type: row.get("type"),
        active: row.get("active"),
    }
}
