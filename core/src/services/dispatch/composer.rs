//! Message composition.
//!
//! Pure payload builders; the only ambient input is the local clock for
//! the free-text greeting, and that is injectable for tests.

use chrono::{Local, Timelike};

use super::config::DispatchConfig;
use crate::domain::entities::one_time_code::OneTimeCode;
use crate::domain::value_objects::{ContactIdentifier, MessagePayload};

/// Build a template invocation carrying the code as the body parameter
pub fn compose_otp_template(
    to: ContactIdentifier,
    code: OneTimeCode,
    config: &DispatchConfig,
) -> MessagePayload {
    MessagePayload::OtpTemplate {
        to,
        template_name: config.template_name.clone(),
        language: config.template_language.clone(),
        code,
    }
}

/// Build a free-text OTP message using the local server hour
pub fn compose_otp_text(
    to: ContactIdentifier,
    code: OneTimeCode,
    config: &DispatchConfig,
) -> MessagePayload {
    compose_otp_text_at(to, code, config, Local::now().hour())
}

/// Build a free-text OTP message for an explicit hour of day
pub fn compose_otp_text_at(
    to: ContactIdentifier,
    code: OneTimeCode,
    config: &DispatchConfig,
    hour: u32,
) -> MessagePayload {
    let body = format!(
        "{}! Your verification code is {}. It expires in {} minutes. \
         Please do not share it with anyone.",
        greeting_for_hour(hour),
        code,
        config.expiry_minutes
    );
    MessagePayload::OtpText { to, body }
}

/// Build the welcome email, personalized when a name is known
pub fn compose_welcome_email(to: ContactIdentifier, name: Option<&str>) -> MessagePayload {
    let greeting_name = name.unwrap_or("there");
    let html = format!(
        "<h2>Hi {greeting_name}, welcome aboard!</h2>\
         <p>Your account is ready. We're glad to have you with us.</p>\
         <p>If you did not sign up, you can safely ignore this email.</p>"
    );
    MessagePayload::WelcomeEmail {
        to,
        subject: String::from("Welcome aboard!"),
        html,
    }
}

fn greeting_for_hour(hour: u32) -> &'static str {
    if hour < 12 {
        "Good morning"
    } else if hour < 17 {
        "Good afternoon"
    } else {
        "Good evening"
    }
}
