//! One-time passcode entity.

use rand::Rng;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Length of a one-time code
pub const CODE_LENGTH: usize = 6;

/// Smallest valid code value (leading zeros are never generated)
pub const CODE_MIN: u32 = 100_000;

/// Largest valid code value
pub const CODE_MAX: u32 = 999_999;

/// A 6-digit numeric one-time passcode
///
/// The code lives for exactly one dispatch: it is generated, embedded into a
/// message payload, and discarded. Nothing in this system stores or verifies
/// it afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OneTimeCode(String);

impl OneTimeCode {
    /// Generate a code from the thread-local random source
    pub fn generate() -> Self {
        Self::generate_with(&mut rand::thread_rng())
    }

    /// Generate a code from a caller-supplied random source
    ///
    /// Pure function of the source, which keeps generation deterministic
    /// under a seeded generator in tests. The drawn value is uniform over
    /// `[100000, 999999]`, so the first digit is always 1-9.
    pub fn generate_with<R: Rng>(rng: &mut R) -> Self {
        let value = rng.gen_range(CODE_MIN..=CODE_MAX);
        Self(value.to_string())
    }

    /// The code digits as a string slice
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for OneTimeCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
