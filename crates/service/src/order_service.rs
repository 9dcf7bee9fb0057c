use std::sync::Arc;

use models::Order;

use crate::storage::record_store::RecordStore;

/// Façade binding a [`RecordStore`] to the order record kind.
#[derive(Clone)]
pub struct OrderService {
    store: Arc<RecordStore<Order>>,
}

impl OrderService {
    pub fn new() -> Arc<Self> {
        Arc::new(Self { store: RecordStore::new() })
    }

    /// Store a validated order and echo it back.
    pub async fn create_order(&self, order: Order) -> Order {
        self.store.create(order).await
    }

    /// All orders in creation order.
    pub async fn list_orders(&self) -> Vec<Order> {
        self.store.list().await
    }

    pub async fn order_count(&self) -> usize {
        self.store.len().await
    }
}
