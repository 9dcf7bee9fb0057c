use serde::{Deserialize, Serialize};

use crate::errors::ModelError;

/// An order record as submitted by the client. Orders are fully independent
/// of users; `id` carries no uniqueness guarantee.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Order {
    pub id: u64,
    pub item: String,
    pub amount_cents: u64,
}

impl Order {
    /// Boundary validation, run before the record reaches the store.
    pub fn validate(&self) -> Result<(), ModelError> {
        if self.item.trim().is_empty() {
            return Err(ModelError::invalid("item must not be empty"));
        }
        Ok(())
    }
}
