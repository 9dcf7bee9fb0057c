use std::sync::Arc;
use tokio::sync::RwLock;

/// Generic append-only in-memory record store.
///
/// Holds records of a single kind in insertion order and serves the two
/// operations the API needs: append one record, read them all. Records are
/// never removed or mutated after insertion; identity is positional.
/// Intended for process-local state where a database is overkill.
#[derive(Clone, Default)]
pub struct RecordStore<T> {
    inner: Arc<RwLock<Vec<T>>>,
}

impl<T> RecordStore<T>
where
    T: Clone + Send + Sync,
{
    /// Initialize an empty store.
    pub fn new() -> Arc<Self> {
        Arc::new(Self { inner: Arc::new(RwLock::new(Vec::new())) })
    }

    /// Append a record and echo it back unchanged.
    ///
    /// The write lock makes concurrent appends mutually exclusive, so no two
    /// records land at the same position and none are lost.
    pub async fn create(&self, record: T) -> T {
        let mut records = self.inner.write().await;
        records.push(record.clone());
        record
    }

    /// Snapshot of all records in insertion order.
    ///
    /// Returns a copy; callers cannot reach the internal sequence through it.
    /// An empty store yields an empty `Vec`, never an error.
    pub async fn list(&self) -> Vec<T> {
        let records = self.inner.read().await;
        records.clone()
    }

    /// Number of stored records.
    pub async fn len(&self) -> usize {
        self.inner.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.len().await == 0
    }
}
