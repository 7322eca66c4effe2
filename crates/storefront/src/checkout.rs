//! Checkout summary and routing.
//!
//! Checkout takes no payment. It shows what is in the cart, lets the shopper
//! pick a payment method, and sends them on to login or to the
//! personal-information step.

use serde::Serialize;
use thiserror::Error;
use tracing::info;

use crate::models::CartItem;
use crate::store::Store;

/// Errors from the checkout page.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum CheckoutError {
    /// Nothing in the cart to check out.
    #[error("cart is empty")]
    EmptyCart,
}

/// How the shopper intends to pay.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum PaymentMethod {
    #[default]
    Qr,
    Transfer,
    Card,
}

impl PaymentMethod {
    /// Parse from a radio-button value. Unrecognized values fall back to QR.
    #[must_use]
    pub fn parse(s: &str) -> Self {
        match s {
            "transfer" => Self::Transfer,
            "card" => Self::Card,
            _ => Self::Qr,
        }
    }

    /// Radio-button value.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Qr => "qr",
            Self::Transfer => "transfer",
            Self::Card => "card",
        }
    }

    /// Human-readable label.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Qr => "QR Code Payment",
            Self::Transfer => "Bank Transfer",
            Self::Card => "Credit/Debit Card",
        }
    }
}

/// Where "proceed to payment" leads.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CheckoutStep {
    /// Shopper must log in first.
    Login,
    /// Shopper is logged in; collect personal details next.
    PersonalInfo,
}

/// One cart line ready for display.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CheckoutLine {
    pub name: String,
    /// Plan caption, e.g. `12 months @ ₹2,666/mo`.
    pub plan: Option<String>,
    pub coupon: Option<String>,
    /// Formatted line price.
    pub price: String,
}

impl From<&CartItem> for CheckoutLine {
    fn from(item: &CartItem) -> Self {
        Self {
            name: item.product.name.clone(),
            plan: item.plan.as_ref().map(|plan| plan.caption()),
            coupon: item.coupon.clone(),
            price: item.line_price().display(),
        }
    }
}

/// Display data for the checkout page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CheckoutSummary {
    pub lines: Vec<CheckoutLine>,
    /// Formatted cart total.
    pub total: String,
    pub is_logged_in: bool,
}

impl CheckoutSummary {
    /// Build the summary from the store's current cart and session.
    #[must_use]
    pub fn from_store(store: &Store) -> Self {
        let cart = store.cart();
        Self {
            lines: cart.iter().map(CheckoutLine::from).collect(),
            total: store.cart_total().display(),
            is_logged_in: store.user().is_logged_in,
        }
    }

    /// Check if there is nothing to check out.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }
}

/// Decide where "proceed to payment" goes.
///
/// # Errors
///
/// Returns [`CheckoutError::EmptyCart`] if the cart is empty.
pub fn proceed(store: &Store, method: PaymentMethod) -> Result<CheckoutStep, CheckoutError> {
    if store.cart_count() == 0 {
        return Err(CheckoutError::EmptyCart);
    }

    let step = if store.user().is_logged_in {
        CheckoutStep::PersonalInfo
    } else {
        CheckoutStep::Login
    };
    info!(method = method.as_str(), ?step, "proceeding from checkout");
    Ok(step)
}
