//! Mock gateway for development and testing
//!
//! Accepts every payload, fabricates message identifiers, and records
//! payloads so tests can assert on what would have been sent. A scripted
//! failure can stand in for any provider error.

use async_trait::async_trait;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, Mutex};
use tracing::info;
use uuid::Uuid;

use otp_core::domain::value_objects::{DispatchReceipt, MessagePayload};
use otp_core::errors::{RelayError, RelayResult};
use otp_core::services::dispatch::MessageGateway;

/// Mock message gateway
#[derive(Clone, Default)]
pub struct MockGateway {
    /// Counter for tracking number of messages sent
    message_count: Arc<AtomicU64>,
    /// Every payload accepted so far
    sent_payloads: Arc<Mutex<Vec<MessagePayload>>>,
    /// Error returned instead of a receipt, when scripted
    fail_with: Arc<Mutex<Option<RelayError>>>,
}

impl MockGateway {
    /// Create a new mock gateway
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a mock gateway that fails every send with the given error
    pub fn failing_with(error: impl Into<RelayError>) -> Self {
        let gateway = Self::default();
        *gateway.fail_with.lock().unwrap() = Some(error.into());
        gateway
    }

    /// Script the error returned by subsequent sends, or clear it
    pub fn set_failure(&self, error: Option<RelayError>) {
        *self.fail_with.lock().unwrap() = error;
    }

    /// Total number of messages accepted
    pub fn message_count(&self) -> u64 {
        self.message_count.load(Ordering::SeqCst)
    }

    /// Snapshot of the accepted payloads
    pub fn sent_payloads(&self) -> Vec<MessagePayload> {
        self.sent_payloads.lock().unwrap().clone()
    }
}

#[async_trait]
impl MessageGateway for MockGateway {
    async fn send(&self, payload: &MessagePayload) -> RelayResult<DispatchReceipt> {
        if let Some(error) = self.fail_with.lock().unwrap().clone() {
            return Err(error);
        }

        let message_id = format!("mock_{}", Uuid::new_v4());
        let count = self.message_count.fetch_add(1, Ordering::SeqCst) + 1;
        self.sent_payloads.lock().unwrap().push(payload.clone());

        info!(
            provider = "mock",
            recipient = %payload.recipient().masked(),
            kind = payload.kind(),
            message_id = %message_id,
            count = count,
            "Mock gateway accepted message"
        );

        Ok(DispatchReceipt::new(message_id, self.provider_name()))
    }

    fn provider_name(&self) -> &'static str {
        "mock"
    }
}
