//! Configuration module with business-specific sub-modules
//!
//! This module organizes configuration into logical areas:
//! - `provider` - Messaging provider selection per delivery channel
//! - `server` - HTTP server bind configuration
//!
//! Provider credentials are deliberately not held here; each gateway in the
//! infrastructure layer captures its own credentials so a missing secret
//! surfaces as a per-request configuration error instead of a startup crash.

pub mod provider;
pub mod server;

// Re-export commonly used types
pub use provider::ProviderConfig;
pub use server::ServerConfig;

/// Complete application configuration combining all sub-configurations
#[derive(Debug, Clone)]
pub struct AppConfig {
    /// Server configuration
    pub server: ServerConfig,

    /// Provider selection per delivery channel
    pub providers: ProviderConfig,
}

impl AppConfig {
    /// Load configuration from environment variables
    pub fn from_env() -> Self {
        Self {
            server: ServerConfig::from_env(),
            providers: ProviderConfig::from_env(),
        }
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            server: ServerConfig::default(),
            providers: ProviderConfig::default(),
        }
    }
}
