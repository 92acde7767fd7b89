//! Error taxonomy for the dispatch pipeline.
//!
//! Three families, per failure owner: `ValidationError` is a client input
//! defect (4xx, never retried), `ConfigError` is a deployment defect (500,
//! detail restricted to the variable name), and `DispatchError` covers
//! everything that can go wrong between the gateway and the provider.
//! No error ever carries a credential value.

use thiserror::Error;

/// Client input rejected by the request validator
///
/// Display strings are the exact messages surfaced to the caller, so they
/// are fixed here rather than formatted at the HTTP layer.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Malformed request body")]
    MalformedBody,

    #[error("Valid phone number is required")]
    PhoneRequired,

    #[error("Please enter a valid 10-digit Indian mobile number")]
    InvalidIndianMobile,

    #[error("Phone number must be in international E.164 format (e.g. +919876543210)")]
    InvalidE164,

    #[error("Valid email address is required")]
    EmailRequired,
}

/// A required environment variable was absent at send time
///
/// The detail names the variable, never its value. Gateways raise this
/// before opening any connection.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("Missing {missing}")]
pub struct ConfigError {
    /// Name of the missing environment variable
    pub missing: String,
}

impl ConfigError {
    /// Create an error naming the missing variable
    pub fn missing_var(name: impl Into<String>) -> Self {
        Self {
            missing: name.into(),
        }
    }
}

/// Classification of a provider-reported error
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProviderErrorKind {
    /// Credentials rejected by the provider
    Authentication,
    /// The provider considered the request malformed (bad recipient, bad template)
    InvalidRequest,
    /// The recipient exists but cannot currently be messaged
    RecipientNotEligible,
    /// The provider throttled us
    RateLimited,
    /// The provider reported a transient outage
    Unavailable,
    /// Anything the provider reported that we do not classify
    Unknown,
}

impl ProviderErrorKind {
    /// HTTP status surfaced to the caller for this kind
    ///
    /// `Unknown` has no fixed status; the gateway supplies the provider's
    /// own status (or 502) when it builds the error.
    pub fn suggested_status(&self) -> u16 {
        match self {
            Self::Authentication => 401,
            Self::InvalidRequest => 400,
            Self::RecipientNotEligible => 403,
            Self::RateLimited => 429,
            Self::Unavailable => 503,
            Self::Unknown => 502,
        }
    }

    /// Short label used in logs and messages
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Authentication => "authentication",
            Self::InvalidRequest => "invalid request",
            Self::RecipientNotEligible => "recipient not eligible",
            Self::RateLimited => "rate limited",
            Self::Unavailable => "provider unavailable",
            Self::Unknown => "provider error",
        }
    }
}

impl std::fmt::Display for ProviderErrorKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Failure of the single outbound provider call
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DispatchError {
    /// The provider did not answer within the request timeout
    #[error("Request to the messaging provider timed out")]
    Timeout,

    /// Transport-level failure before any response arrived
    #[error("Could not reach the messaging provider: {detail}")]
    Network { detail: String },

    /// The provider answered with an error body
    #[error("Message delivery failed ({kind}): {detail}")]
    Provider {
        kind: ProviderErrorKind,
        /// Provider-native error code, when one was supplied
        code: Option<String>,
        /// Provider's human-readable description
        detail: String,
        /// HTTP status to surface to the caller
        status: u16,
    },

    /// A 2xx response that lacked the expected message identifier
    #[error("Messaging provider returned an unexpected response")]
    InvalidResponse,

    /// A payload kind this gateway cannot carry; indicates a wiring bug
    #[error("{provider} gateway cannot deliver {kind} payloads")]
    UnsupportedPayload {
        provider: String,
        kind: &'static str,
    },
}

impl DispatchError {
    /// HTTP status surfaced to the caller for this failure
    pub fn status(&self) -> u16 {
        match self {
            Self::Timeout => 408,
            Self::Network { .. } => 503,
            Self::Provider { status, .. } => *status,
            Self::InvalidResponse => 500,
            Self::UnsupportedPayload { .. } => 500,
        }
    }
}

/// Umbrella error for the whole pipeline
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RelayError {
    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Dispatch(#[from] DispatchError),
}

pub type RelayResult<T> = Result<T, RelayError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validation_messages_are_fixed() {
        assert_eq!(
            ValidationError::PhoneRequired.to_string(),
            "Valid phone number is required"
        );
        assert_eq!(
            ValidationError::InvalidIndianMobile.to_string(),
            "Please enter a valid 10-digit Indian mobile number"
        );
        assert_eq!(
            ValidationError::MalformedBody.to_string(),
            "Malformed request body"
        );
        assert_eq!(
            ValidationError::EmailRequired.to_string(),
            "Valid email address is required"
        );
    }

    #[test]
    fn test_config_error_names_variable_only() {
        let err = ConfigError::missing_var("WHATSAPP_ACCESS_TOKEN");
        assert_eq!(err.to_string(), "Missing WHATSAPP_ACCESS_TOKEN");
    }

    #[test]
    fn test_dispatch_status_mapping() {
        assert_eq!(DispatchError::Timeout.status(), 408);
        assert_eq!(
            DispatchError::Network {
                detail: "connection refused".into()
            }
            .status(),
            503
        );
        assert_eq!(DispatchError::InvalidResponse.status(), 500);
        assert_eq!(
            DispatchError::UnsupportedPayload {
                provider: "twilio".into(),
                kind: "welcome_email",
            }
            .status(),
            500
        );
        let provider_err = DispatchError::Provider {
            kind: ProviderErrorKind::RateLimited,
            code: Some("130429".into()),
            detail: "Rate limit hit".into(),
            status: ProviderErrorKind::RateLimited.suggested_status(),
        };
        assert_eq!(provider_err.status(), 429);
    }

    #[test]
    fn test_provider_kind_statuses() {
        assert_eq!(ProviderErrorKind::Authentication.suggested_status(), 401);
        assert_eq!(ProviderErrorKind::InvalidRequest.suggested_status(), 400);
        assert_eq!(
            ProviderErrorKind::RecipientNotEligible.suggested_status(),
            403
        );
        assert_eq!(ProviderErrorKind::RateLimited.suggested_status(), 429);
        assert_eq!(ProviderErrorKind::Unavailable.suggested_status(), 503);
        assert_eq!(ProviderErrorKind::Unknown.suggested_status(), 502);
    }

    #[test]
    fn test_umbrella_conversions() {
        let err: RelayError = ValidationError::PhoneRequired.into();
        assert!(matches!(err, RelayError::Validation(_)));

        let err: RelayError = ConfigError::missing_var("RESEND_API_KEY").into();
        assert!(matches!(err, RelayError::Config(_)));

        let err: RelayError = DispatchError::Timeout.into();
        assert!(matches!(err, RelayError::Dispatch(_)));
    }
}
