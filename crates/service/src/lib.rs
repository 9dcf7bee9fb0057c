//! Service layer owning the process-local record state.
//! - Separates request handling from state ownership.
//! - Reuses record definitions and validation in the `models` crate.
//! - Stores are injected into the router at construction time; no globals.

pub mod order_service;
pub mod storage;
pub mod user_service;

#[cfg(test)]
mod tests {
    use models::{Order, User};

    use crate::order_service::OrderService;
    use crate::user_service::UserService;

    #[tokio::test]
    async fn user_and_order_stores_are_independent() {
        let users = UserService::new();
        let orders = OrderService::new();

        for id in 0..5 {
            users.create_user(User { id, name: format!("user-{id}"), email: None }).await;
        }

        assert_eq!(users.list_users().await.len(), 5);
        assert!(orders.list_orders().await.is_empty());

        orders.create_order(Order { id: 1, item: "widget".into(), amount_cents: 100 }).await;
        assert_eq!(orders.list_orders().await.len(), 1);
        assert_eq!(users.list_users().await.len(), 5);
    }
}
