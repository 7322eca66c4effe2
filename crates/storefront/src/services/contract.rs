//! Digital contract signing.
//!
//! The shopper ticks the terms and privacy boxes and types their name as a
//! signature. [`ContractForm::sign`] checks the form against the current
//! cart; a [`ContractService`] then "submits" the signed contract.

use std::future::Future;
use std::time::Duration;

use serde::Serialize;
use thiserror::Error;
use tracing::{info, instrument};

use shiba_core::Price;

use crate::models::{CartItem, cart_total};

/// Errors from filling in or submitting the contract.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ContractError {
    /// Terms and conditions box not ticked.
    #[error("terms and conditions must be accepted")]
    TermsNotAccepted,

    /// Privacy policy box not ticked.
    #[error("privacy policy must be accepted")]
    PrivacyNotAccepted,

    /// Signature blank after trimming.
    #[error("digital signature is required")]
    MissingSignature,

    /// Nothing to sign for.
    #[error("cart is empty")]
    EmptyCart,
}

/// The contract page's inputs.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContractForm {
    pub agreed_to_terms: bool,
    pub agreed_to_privacy: bool,
    /// Full name typed as the signature.
    pub signature: String,
}

impl ContractForm {
    /// Whether the sign button would be enabled.
    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.agreed_to_terms && self.agreed_to_privacy && !self.signature.trim().is_empty()
    }

    /// Check the form and bind it to `cart`.
    ///
    /// # Errors
    ///
    /// Returns the first [`ContractError`] that applies, checking the boxes,
    /// then the signature, then the cart.
    pub fn sign(&self, cart: &[CartItem]) -> Result<SignedContract, ContractError> {
        if !self.agreed_to_terms {
            return Err(ContractError::TermsNotAccepted);
        }
        if !self.agreed_to_privacy {
            return Err(ContractError::PrivacyNotAccepted);
        }
        let signature = self.signature.trim();
        if signature.is_empty() {
            return Err(ContractError::MissingSignature);
        }
        if cart.is_empty() {
            return Err(ContractError::EmptyCart);
        }

        Ok(SignedContract {
            signature: signature.to_owned(),
            item_count: cart.len(),
            total: cart_total(cart),
        })
    }
}

/// A completed contract ready to submit.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SignedContract {
    pub signature: String,
    pub item_count: usize,
    pub total: Price,
}

/// Acknowledgement returned after submission.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ContractReceipt {
    pub signature: String,
    pub total: Price,
    pub message: String,
}

/// Accepts signed contracts.
pub trait ContractService: Send + Sync {
    /// Submit `contract`.
    fn submit(
        &self,
        contract: &SignedContract,
    ) -> impl Future<Output = Result<ContractReceipt, ContractError>> + Send;
}

/// Contract service that always accepts after a fixed delay.
#[derive(Debug, Clone)]
pub struct SimulatedContractService {
    delay: Duration,
}

impl SimulatedContractService {
    /// Delay used when none is configured.
    pub const DEFAULT_DELAY: Duration = Duration::from_millis(2000);

    /// Create a service that answers after `delay`.
    #[must_use]
    pub const fn new(delay: Duration) -> Self {
        Self { delay }
    }
}

impl Default for SimulatedContractService {
    fn default() -> Self {
        Self::new(Self::DEFAULT_DELAY)
    }
}

impl ContractService for SimulatedContractService {
    #[instrument(skip_all, fields(items = contract.item_count, total = %contract.total))]
    async fn submit(&self, contract: &SignedContract) -> Result<ContractReceipt, ContractError> {
        tokio::time::sleep(self.delay).await;
        info!("contract signed");
        Ok(ContractReceipt {
            signature: contract.signature.clone(),
            total: contract.total,
            message: "Contract signed successfully! Welcome to Shiba Phone family!".to_string(),
        })
    }
}
