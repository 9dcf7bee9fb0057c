use serde::{Deserialize, Serialize};

use crate::errors::ModelError;

/// A user record as submitted by the client.
/// - `id` is caller-provided; the store does not assign or check keys
/// - `email` is optional contact info
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub id: u64,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
}

impl User {
    /// Boundary validation, run before the record reaches the store.
    pub fn validate(&self) -> Result<(), ModelError> {
        if self.name.trim().is_empty() {
            return Err(ModelError::invalid("name must not be empty"));
        }
        if let Some(email) = &self.email {
            if !email.contains('@') {
                return Err(ModelError::invalid("email must contain '@'"));
            }
        }
        Ok(())
    }
}
