//! # OtpRelay API
//!
//! HTTP surface for the OtpRelay backend: route handlers, the response
//! normalizer, CORS middleware, and application wiring. The actual
//! pipeline lives in `otp_core`; this crate only moves bytes between
//! actix-web and the dispatch service.

pub mod app;
pub mod handlers;
pub mod middleware;
pub mod routes;
