//! Type definitions shared across server modules

pub mod response;

// Re-export commonly used types at module level
pub use response::ApiResponse;
