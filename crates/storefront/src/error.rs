//! Unified error handling.
//!
//! Each step of the flow has its own error enum. [`AppError`] wraps all of
//! them so a front end can hold one `Result` type and branch on the two
//! families that matter to a shopper: bad input ([`AppError::is_validation`])
//! and unknown products or plans ([`AppError::is_not_found`]). Every variant
//! is recoverable; none of them ends the session.

use thiserror::Error;

use crate::checkout::CheckoutError;
use crate::config::ConfigError;
use crate::personal_info::FormError;
use crate::services::auth::AuthError;
use crate::services::contract::ContractError;
use crate::store::StoreError;

/// Application-level error type for the storefront.
#[derive(Debug, Error)]
pub enum AppError {
    /// Catalog or cart lookup failed.
    #[error("Store error: {0}")]
    Store(#[from] StoreError),

    /// OTP login failed.
    #[error("Auth error: {0}")]
    Auth(#[from] AuthError),

    /// Checkout could not proceed.
    #[error("Checkout error: {0}")]
    Checkout(#[from] CheckoutError),

    /// Personal-information form is invalid.
    #[error("Form error: {0}")]
    Form(#[from] FormError),

    /// Contract could not be signed.
    #[error("Contract error: {0}")]
    Contract(#[from] ContractError),

    /// Configuration could not be loaded.
    #[error("Config error: {0}")]
    Config(#[from] ConfigError),
}

impl AppError {
    /// Whether the error is caused by malformed or incomplete input.
    #[must_use]
    pub const fn is_validation(&self) -> bool {
        match self {
            Self::Auth(err) => err.is_validation(),
            Self::Form(_) | Self::Checkout(_) | Self::Contract(_) | Self::Config(_) => true,
            Self::Store(_) => false,
        }
    }

    /// Whether the error refers to a product or plan that does not exist.
    #[must_use]
    pub const fn is_not_found(&self) -> bool {
        matches!(self, Self::Store(_))
    }
}

/// Result type alias for `AppError`.
pub type Result<T> = std::result::Result<T, AppError>;

#[cfg(test)]
mod tests {
    use shiba_core::{DigitCodeError, PlanId, ProductId};

    use super::*;

    #[test]
    fn test_app_error_display() {
        let err = AppError::from(StoreError::ProductNotFound(ProductId::new(9)));
        assert_eq!(err.to_string(), "Store error: product 9 not found");

        let err = AppError::from(CheckoutError::EmptyCart);
        assert_eq!(err.to_string(), "Checkout error: cart is empty");
    }

    #[test]
    fn test_app_error_families() {
        let not_found = AppError::from(StoreError::PlanNotFound {
            product: ProductId::new(1),
            plan: PlanId::new(9),
        });
        assert!(not_found.is_not_found());
        assert!(!not_found.is_validation());

        let bad_phone = AppError::from(AuthError::InvalidPhone(DigitCodeError::Empty));
        assert!(bad_phone.is_validation());
        assert!(!bad_phone.is_not_found());

        let rejected = AppError::from(AuthError::VerificationFailed);
        assert!(!rejected.is_validation());

        assert!(AppError::from(ContractError::MissingSignature).is_validation());
        assert!(AppError::from(FormError::MissingField("city")).is_validation());
    }
}
