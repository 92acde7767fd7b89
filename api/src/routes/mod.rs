//! HTTP route handlers.

pub mod email;
pub mod otp;
