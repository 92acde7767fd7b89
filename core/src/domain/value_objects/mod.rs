//! Value objects flowing through the dispatch pipeline.

pub mod contact;
pub mod message;
pub mod receipt;

// Re-export commonly used types
pub use contact::ContactIdentifier;
pub use message::MessagePayload;
pub use receipt::DispatchReceipt;
