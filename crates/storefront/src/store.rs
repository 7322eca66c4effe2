//! Catalog & cart store.
//!
//! The single source of truth for the session, the cart and the catalog
//! criteria. Every page of the flow holds a [`Store`] handle and changes state
//! only through the methods here.

use std::sync::{Arc, PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};

use thiserror::Error;
use tracing::debug;

use shiba_core::{CategoryFilter, PhoneNumber, PlanId, Price, ProductId, SortKey};

use crate::catalog::{self, CatalogCriteria, CatalogView};
use crate::models::{CartItem, Product, User, UserPatch, cart_total};

/// Errors from the validated store entry points.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum StoreError {
    /// No product has this ID.
    #[error("product {0} not found")]
    ProductNotFound(ProductId),

    /// The plan is not one of the product's installment plans.
    #[error("installment plan {plan} not found for product {product}")]
    PlanNotFound {
        /// Product the plan was requested for.
        product: ProductId,
        /// Requested plan.
        plan: PlanId,
    },
}

/// Shared handle to the storefront state.
///
/// Cheap to clone; all clones see the same state. The product list is fixed
/// at construction and lives outside the lock.
#[derive(Clone)]
pub struct Store {
    inner: Arc<StoreInner>,
}

struct StoreInner {
    products: Vec<Product>,
    state: RwLock<MutableState>,
}

#[derive(Default)]
struct MutableState {
    user: User,
    cart: Vec<CartItem>,
    criteria: CatalogCriteria,
}

impl Default for Store {
    fn default() -> Self {
        Self::new()
    }
}

impl Store {
    /// Create a store over the seed catalog, logged out with an empty cart.
    #[must_use]
    pub fn new() -> Self {
        Self::with_products(catalog::seed_products())
    }

    /// Create a store over a custom catalog.
    #[must_use]
    pub fn with_products(products: Vec<Product>) -> Self {
        Self {
            inner: Arc::new(StoreInner {
                products,
                state: RwLock::new(MutableState::default()),
            }),
        }
    }

    // Every write leaves the state whole, so a poisoned lock is still usable.
    fn read(&self) -> RwLockReadGuard<'_, MutableState> {
        self.inner.state.read().unwrap_or_else(PoisonError::into_inner)
    }

    fn write(&self) -> RwLockWriteGuard<'_, MutableState> {
        self.inner
            .state
            .write()
            .unwrap_or_else(PoisonError::into_inner)
    }

    // =========================================================================
    // Catalog
    // =========================================================================

    /// The immutable catalog, in catalog order.
    #[must_use]
    pub fn products(&self) -> &[Product] {
        &self.inner.products
    }

    /// Look up a product by ID.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::ProductNotFound`] if no product has this ID.
    pub fn find_product(&self, id: ProductId) -> Result<&Product, StoreError> {
        self.inner
            .products
            .iter()
            .find(|product| product.id == id)
            .ok_or(StoreError::ProductNotFound(id))
    }

    /// Current catalog criteria.
    #[must_use]
    pub fn criteria(&self) -> CatalogCriteria {
        self.read().criteria.clone()
    }

    /// Set the free-text search.
    pub fn set_search_query(&self, text: impl Into<String>) {
        let text = text.into();
        debug!(search_query = %text, "search query updated");
        self.write().criteria.search_query = text;
    }

    /// Set the category filter. Unknown ids are accepted and match nothing.
    pub fn set_selected_category(&self, category: impl Into<CategoryFilter>) {
        let category = category.into();
        debug!(category = category.as_str(), "category updated");
        self.write().criteria.category = category;
    }

    /// Set the sort order.
    pub fn set_sort_key(&self, sort: SortKey) {
        debug!(sort = sort.as_str(), "sort key updated");
        self.write().criteria.sort = sort;
    }

    /// Run the catalog query against the current criteria.
    #[must_use]
    pub fn filtered_products(&self) -> CatalogView<'_> {
        let criteria = self.criteria();
        catalog::query(self.products(), &criteria)
    }

    // =========================================================================
    // Session
    // =========================================================================

    /// Snapshot of the session.
    #[must_use]
    pub fn user(&self) -> User {
        self.read().user.clone()
    }

    /// Replace the session.
    pub fn set_user(&self, user: User) {
        debug!(is_logged_in = user.is_logged_in, "session replaced");
        self.write().user = user;
    }

    /// Merge `patch` over the session.
    pub fn update_user(&self, patch: UserPatch) {
        debug!(?patch, "session updated");
        self.write().user.apply(patch);
    }

    /// Mark the shopper as logged in with `phone`.
    pub fn login(&self, phone: PhoneNumber) {
        debug!(phone = %phone, "logged in");
        self.set_user(User::logged_in(phone));
    }

    /// Reset the session to logged out. The cart is left as it is.
    pub fn logout(&self) {
        debug!("logged out");
        self.write().user = User::default();
    }

    // =========================================================================
    // Cart
    // =========================================================================

    /// Snapshot of the cart, in the order items were added.
    #[must_use]
    pub fn cart(&self) -> Vec<CartItem> {
        self.read().cart.clone()
    }

    /// Append an item. No merging with existing items and no validation.
    pub fn add_to_cart(&self, item: CartItem) {
        let mut state = self.write();
        state.cart.push(item);
        debug!(items = state.cart.len(), "item added to cart");
    }

    /// Replace the whole cart. No validation.
    pub fn set_cart(&self, items: Vec<CartItem>) {
        debug!(items = items.len(), "cart replaced");
        self.write().cart = items;
    }

    /// Add a product by ID, optionally financed and with a coupon.
    ///
    /// A blank coupon is treated as no coupon.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::ProductNotFound`] for an unknown product and
    /// [`StoreError::PlanNotFound`] if `plan` is not one of its plans.
    pub fn add_product_to_cart(
        &self,
        product_id: ProductId,
        plan: Option<PlanId>,
        coupon: Option<&str>,
    ) -> Result<CartItem, StoreError> {
        let product = self.find_product(product_id)?;

        let mut item = CartItem::new(product.clone());
        if let Some(plan_id) = plan {
            let plan = product.plan(plan_id).ok_or(StoreError::PlanNotFound {
                product: product_id,
                plan: plan_id,
            })?;
            item = item.with_plan(plan.clone());
        }
        if let Some(code) = coupon.map(str::trim).filter(|code| !code.is_empty()) {
            item = item.with_coupon(code);
        }

        self.add_to_cart(item.clone());
        Ok(item)
    }

    /// Sum of line prices.
    #[must_use]
    pub fn cart_total(&self) -> Price {
        cart_total(&self.read().cart)
    }

    /// Number of line items (the header badge).
    #[must_use]
    pub fn cart_count(&self) -> usize {
        self.read().cart.len()
    }
}
