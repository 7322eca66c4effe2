//! Authentication error types.

use thiserror::Error;

use shiba_core::DigitCodeError;

/// Errors that can occur during OTP login.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum AuthError {
    /// Phone number is not 10 digits.
    #[error("invalid phone number: {0}")]
    InvalidPhone(DigitCodeError),

    /// OTP is not 6 digits.
    #[error("invalid OTP: {0}")]
    InvalidOtp(DigitCodeError),

    /// Verification was attempted before a code was sent.
    #[error("no OTP has been sent yet")]
    CodeNotSent,

    /// The OTP service rejected the code.
    #[error("OTP verification failed")]
    VerificationFailed,
}

impl AuthError {
    /// Whether the error comes from malformed input rather than the service.
    #[must_use]
    pub const fn is_validation(&self) -> bool {
        matches!(self, Self::InvalidPhone(_) | Self::InvalidOtp(_))
    }
}
