use std::sync::Arc;

use service::order_service::OrderService;
use service::user_service::UserService;

/// Shared router state: one independently synchronized store per record kind,
/// constructed at startup and injected rather than reached as a global.
#[derive(Clone)]
pub struct ServerState {
    pub users: Arc<UserService>,
    pub orders: Arc<OrderService>,
}

impl ServerState {
    pub fn new() -> Self {
        Self { users: UserService::new(), orders: OrderService::new() }
    }
}

impl Default for ServerState {
    fn default() -> Self {
        Self::new()
    }
}
