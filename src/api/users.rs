//! User API endpoints (thin passthrough to PostgreSQL).

use axum::extract::State;
use axum::Json;

use crate::errors::{AppError, AppErrorWithMessage};
use crate::models::{AddUserResponse, CreateUserRequest, UsersResponse};
use crate::AppState;

/// POST /api/addUser - Insert a user via the `addUser` stored procedure.
pub async fn add_user(
    State(state): State<AppState>,
    Json(request): Json<CreateUserRequest>,
) -> Result<Json<AddUserResponse>, AppErrorWithMessage> {
    // Validate required fields
    if request.email.trim().is_empty() || request.password.is_empty() {
        return Err(AppError::Validation("Email and password are required".to_string()).into());
    }

    match state.repo.add_user(&request).await {
        Ok(data) => Ok(Json(AddUserResponse {
            success: true,
            message: "User added successfully".to_string(),
            data,
        })),
        Err(e) => Err(e.with_message("Error adding user")),
    }
}

/// GET /api/users - List all users.
pub async fn list_users(
    State(state): State<AppState>,
) -> Result<Json<UsersResponse>, AppErrorWithMessage> {
    match state.repo.list_users().await {
        Ok(users) => Ok(Json(UsersResponse {
            success: true,
            users,
        })),
        Err(e) => Err(e.with_message("Error fetching users")),
    }
}
