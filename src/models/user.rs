//! User model matching the `users` table and the `addUser` stored procedure.

use serde::{Deserialize, Serialize};

/// A user row as returned by the database.
///
/// `active` is an integer flag (1 = active), not a boolean, matching the
/// stored-procedure signature.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserRecord {
    pub user_id: i32,
    pub email: String,
    #[serde(rename = "type")]
    pub user_type: String,
    pub active: i32,
}

/// Request body for POST /api/addUser.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateUserRequest {
    pub email: String,
    pub password: String,
    #[serde(rename = "type")]
    pub user_type: String,
    #[serde(default = "default_active")]
    pub active: i32,
}

fn default_active() -> i32 {
    1
}

/// Response body for POST /api/addUser.
#[derive(Debug, Serialize)]
pub struct AddUserResponse {
    pub success: bool,
    pub message: String,
    pub data: Vec<UserRecord>,
}

/// Response body for GET /api/users.
#[derive(Debug, Serialize)]
pub struct UsersResponse {
    pub success: bool,
    pub users: Vec<UserRecord>,
}
