//! Provider dispatch receipts.

use serde::{Deserialize, Serialize};

/// Proof of a successful provider send
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DispatchReceipt {
    /// The provider-assigned message identifier
    pub message_id: String,

    /// Which provider accepted the message
    pub provider: String,
}

impl DispatchReceipt {
    /// Create a new receipt
    pub fn new(message_id: impl Into<String>, provider: impl Into<String>) -> Self {
        Self {
            message_id: message_id.into(),
            provider: provider.into(),
        }
    }
}
