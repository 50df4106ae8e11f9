//! The identity carried inside tokens.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// An account's internal id paired with its public handle.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Identity {
    /// Internal record identifier.
    pub id: Uuid,
    /// User-chosen public handle.
    pub handle: String,
}

impl Identity {
    /// Creates a new identity.
    pub fn new(id: Uuid, handle: impl Into<String>) -> Self {
        Self {
            id,
            handle: handle.into(),
        }
    }
}
