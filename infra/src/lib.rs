//! # OtpRelay Infrastructure
//!
//! Provider gateway implementations for the OtpRelay backend. Each gateway
//! implements the core `MessageGateway` trait over plain `reqwest` calls:
//! WhatsApp Cloud API (template and free-text), Twilio Messages API, and a
//! Resend-style transactional email API, plus a mock gateway for
//! development and tests.

pub mod gateway;

// Re-export commonly used types
pub use gateway::{
    create_email_gateway, create_otp_gateway, MockGateway, ResendConfig, ResendGateway,
    TwilioConfig, TwilioGateway, WhatsAppConfig, WhatsAppGateway,
};
