//! End-to-end purchase flow.
//!
//! Walks one product from the detail page to a signed contract: add to cart,
//! checkout routing, OTP login when needed, personal information, then the
//! contract. Each step uses the same store and services a front end would,
//! so the flow stops at the first step that fails and leaves the store as
//! that step left it.

use serde::Serialize;
use tracing::{info, instrument};

use shiba_core::{PlanId, ProductId};

use crate::checkout::{self, CheckoutStep, PaymentMethod};
use crate::error::Result;
use crate::models::{CartItem, User};
use crate::personal_info::{PersonalInfo, PersonalInfoForm};
use crate::services::{AuthService, ContractForm, ContractReceipt, ContractService, LoginFlow};
use crate::store::Store;

/// Everything the shopper types during one purchase.
#[derive(Debug, Clone)]
pub struct PurchaseRequest {
    pub product: ProductId,
    pub plan: Option<PlanId>,
    pub coupon: Option<String>,
    pub payment: PaymentMethod,
    /// Used only if the shopper is not yet logged in.
    pub phone: String,
    /// Used only if the shopper is not yet logged in.
    pub otp: String,
    pub personal: PersonalInfoForm,
    pub contract: ContractForm,
}

/// Result of a completed purchase.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PurchaseOutcome {
    /// The line added by this purchase.
    pub item: CartItem,
    pub user: User,
    pub personal: PersonalInfo,
    pub receipt: ContractReceipt,
}

/// Drives a [`PurchaseRequest`] through the store and services.
pub struct PurchaseFlow<A, C> {
    store: Store,
    auth: A,
    contract: C,
}

impl<A: AuthService, C: ContractService> PurchaseFlow<A, C> {
    #[must_use]
    pub const fn new(store: Store, auth: A, contract: C) -> Self {
        Self {
            store,
            auth,
            contract,
        }
    }

    /// Run every step in order.
    ///
    /// # Errors
    ///
    /// Returns the first step's error as an [`AppError`](crate::AppError).
    #[instrument(skip_all, fields(product = %request.product))]
    pub async fn run(self, request: &PurchaseRequest) -> Result<PurchaseOutcome> {
        let item = self.store.add_product_to_cart(
            request.product,
            request.plan,
            request.coupon.as_deref(),
        )?;

        let user = match checkout::proceed(&self.store, request.payment)? {
            CheckoutStep::Login => {
                let mut login = LoginFlow::new(self.store.clone(), self.auth);
                login.send_otp(&request.phone).await?;
                login.verify_otp(&request.otp).await?
            }
            CheckoutStep::PersonalInfo => self.store.user(),
        };

        let personal = request.personal.submit(&self.store)?;

        let signed = request.contract.sign(&self.store.cart())?;
        let receipt = self.contract.submit(&signed).await?;

        info!(
            user = %user.display_name(),
            total = %receipt.total,
            "purchase completed"
        );

        Ok(PurchaseOutcome {
            item,
            user: self.store.user(),
            personal,
            receipt,
        })
    }
}
