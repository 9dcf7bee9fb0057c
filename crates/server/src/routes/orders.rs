use axum::{extract::State, http::StatusCode, Json};
use tracing::info;

use models::Order;

use crate::errors::JsonApiError;
use crate::state::ServerState;

/// Create an order record, symmetric to user creation.
pub async fn create_order(
    State(state): State<ServerState>,
    Json(order): Json<Order>,
) -> Result<(StatusCode, Json<Order>), JsonApiError> {
    order.validate().map_err(|e| {
        JsonApiError::new(StatusCode::BAD_REQUEST, "Validation Error", Some(e.to_string()))
    })?;
    let created = state.orders.create_order(order).await;
    info!(id = created.id, "order created");
    Ok((StatusCode::CREATED, Json(created)))
}

/// List all order records in creation order.
pub async fn list_orders(State(state): State<ServerState>) -> Json<Vec<Order>> {
    let orders = state.orders.list_orders().await;
    info!(count = orders.len(), "list orders");
    Json(orders)
}
