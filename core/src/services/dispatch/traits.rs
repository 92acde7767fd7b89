//! Gateway seam between the pipeline and provider integrations.

use async_trait::async_trait;

use crate::domain::value_objects::{DispatchReceipt, MessagePayload};
use crate::errors::RelayResult;

/// A provider integration able to deliver composed payloads
///
/// Implementations perform exactly one outbound call per `send`, with no
/// retry and no backoff; every failure comes back as a typed error, never
/// a panic or a provider-shaped exception.
#[async_trait]
pub trait MessageGateway: Send + Sync {
    /// Deliver the payload, returning the provider's receipt
    async fn send(&self, payload: &MessagePayload) -> RelayResult<DispatchReceipt>;

    /// Stable provider name used in logs and receipts
    fn provider_name(&self) -> &'static str;
}
