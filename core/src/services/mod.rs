//! Business services for the OtpRelay core.

pub mod dispatch;

// Re-export commonly used service types
pub use dispatch::{
    DispatchConfig, DispatchService, MessageGateway, OtpStyle, PhonePolicy,
};
