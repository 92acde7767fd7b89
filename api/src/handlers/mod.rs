//! Request handlers and response normalization.

pub mod respond;

pub use respond::{normalize, respond};
