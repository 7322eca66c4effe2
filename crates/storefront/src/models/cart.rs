//! Cart line items.

use serde::{Deserialize, Serialize};

use shiba_core::Price;

use super::product::{InstallmentPlan, Product};

/// One selection in the cart.
///
/// The cart has no quantities: adding the same phone twice gives two items.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CartItem {
    pub product: Product,
    /// Chosen financing option. Expected to be one of `product`'s plans.
    pub plan: Option<InstallmentPlan>,
    /// Coupon text as entered. Not checked against any rule set.
    pub coupon: Option<String>,
}

impl CartItem {
    /// Cash purchase with no coupon.
    #[must_use]
    pub const fn new(product: Product) -> Self {
        Self {
            product,
            plan: None,
            coupon: None,
        }
    }

    /// Attach a financing plan.
    #[must_use]
    pub fn with_plan(mut self, plan: InstallmentPlan) -> Self {
        self.plan = Some(plan);
        self
    }

    /// Attach a coupon code.
    #[must_use]
    pub fn with_coupon(mut self, coupon: impl Into<String>) -> Self {
        self.coupon = Some(coupon.into());
        self
    }

    /// What this line costs: the plan total if financed, else the cash price.
    #[must_use]
    pub fn line_price(&self) -> Price {
        self.plan
            .as_ref()
            .map_or(self.product.price, |plan| plan.total_amount)
    }
}

/// Sum of [`CartItem::line_price`] over `items`.
#[must_use]
pub fn cart_total(items: &[CartItem]) -> Price {
    items.iter().map(CartItem::line_price).sum()
}
