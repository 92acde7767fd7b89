//! Domain entities representing core business objects.

pub mod one_time_code;

// Re-export commonly used types
pub use one_time_code::{OneTimeCode, CODE_LENGTH, CODE_MAX, CODE_MIN};
