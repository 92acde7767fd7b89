//! # OtpRelay Core
//!
//! Core domain and business logic for the OtpRelay backend.
//! This crate contains the domain values (contact identifiers, one-time
//! codes, message payloads), the error taxonomy, and the dispatch pipeline
//! that turns a raw request body into a provider send.

pub mod domain;
pub mod errors;
pub mod services;

// Re-export commonly used types for convenience
pub use domain::*;
pub use errors::*;
pub use services::*;
