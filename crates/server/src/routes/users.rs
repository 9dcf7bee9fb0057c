use axum::{extract::State, http::StatusCode, Json};
use tracing::info;

use models::User;

use crate::errors::JsonApiError;
use crate::state::ServerState;

/// Create a user record. The payload is validated here, at the boundary;
/// the store itself cannot fail and echoes the record back.
pub async fn create_user(
    State(state): State<ServerState>,
    Json(user): Json<User>,
) -> Result<(StatusCode, Json<User>), JsonApiError> {
    user.validate().map_err(|e| {
        JsonApiError::new(StatusCode::BAD_REQUEST, "Validation Error", Some(e.to_string()))
    })?;
    let created = state.users.create_user(user).await;
    info!(id = created.id, "user created");
    Ok((StatusCode::CREATED, Json(created)))
}

/// List all user records in creation order.
pub async fn list_users(State(state): State<ServerState>) -> Json<Vec<User>> {
    let users = state.users.list_users().await;
    info!(count = users.len(), "list users");
    Json(users)
}
