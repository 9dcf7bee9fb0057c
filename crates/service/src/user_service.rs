use std::sync::Arc;

use models::User;

use crate::storage::record_store::RecordStore;

/// Façade binding a [`RecordStore`] to the user record kind.
///
/// Pure pass-through: validation happens at the HTTP boundary and the store
/// carries the concurrency guarantees, so nothing here can fail.
#[derive(Clone)]
pub struct UserService {
    store: Arc<RecordStore<User>>,
}

impl UserService {
    pub fn new() -> Arc<Self> {
        Arc::new(Self { store: RecordStore::new() })
    }

    /// Store a validated user and echo it back.
    pub async fn create_user(&self, user: User) -> User {
        self.store.create(user).await
    }

    /// All users in creation order.
    pub async fn list_users(&self) -> Vec<User> {
        self.store.list().await
    }

    pub async fn user_count(&self) -> usize {
        self.store.len().await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn create_then_list_round_trip() {
        let svc = UserService::new();

        let a = svc.create_user(User { id: 1, name: "A".into(), email: None }).await;
        let b = svc.create_user(User { id: 2, name: "B".into(), email: None }).await;
        assert_eq!(a.id, 1);
        assert_eq!(b.id, 2);

        let listed = svc.list_users().await;
        assert_eq!(
            listed,
            vec![
                User { id: 1, name: "A".into(), email: None },
                User { id: 2, name: "B".into(), email: None },
            ]
        );
        assert_eq!(svc.user_count().await, 2);
    }

    #[tokio::test]
    async fn echo_returns_the_exact_record() {
        let svc = UserService::new();
        let user = User { id: 7, name: "Echo".into(), email: Some("echo@example.com".into()) };
        let echoed = svc.create_user(user.clone()).await;
        assert_eq!(echoed, user);
    }
}
