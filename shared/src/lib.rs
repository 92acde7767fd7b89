//! Shared utilities and common types for the OtpRelay server
//!
//! This crate provides common functionality used across all server modules:
//! - Configuration types read from the environment
//! - The uniform API response envelope
//! - Utility functions (phone normalization and masking)

pub mod config;
pub mod types;
pub mod utils;

// Re-export commonly used items at crate root
pub use config::{AppConfig, ProviderConfig, ServerConfig};
pub use types::ApiResponse;
pub use utils::phone;
