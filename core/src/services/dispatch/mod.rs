//! The message dispatch pipeline.
//!
//! One linear flow per request: validate the raw body into a contact
//! identifier, generate a one-time code where the channel needs one,
//! compose the provider-shaped payload, and hand it to the configured
//! gateway for the single outbound call. Every stage either passes its
//! output forward or short-circuits with a typed error; nothing loops
//! back and nothing is retried.

pub mod composer;
mod config;
mod service;
mod traits;
pub mod validator;

#[cfg(test)]
mod tests;

pub use config::{DispatchConfig, OtpStyle, PhonePolicy};
pub use service::DispatchService;
pub use traits::MessageGateway;
