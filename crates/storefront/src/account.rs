//! Account overview.
//!
//! What the dashboard shows about the current session, and signing out.

use serde::Serialize;
use tracing::info;

use crate::store::Store;

/// Snapshot of the shopper's account.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AccountSummary {
    /// Profile name, `+91` phone, or a generic placeholder.
    pub display_name: String,
    /// Phone with country code, if known.
    pub phone: Option<String>,
    pub email: Option<String>,
    pub is_logged_in: bool,
    /// Items still in the cart.
    pub cart_items: usize,
}

impl AccountSummary {
    /// Read the summary from the store.
    #[must_use]
    pub fn from_store(store: &Store) -> Self {
        let user = store.user();
        Self {
            display_name: user.display_name(),
            phone: user.phone.as_ref().map(|phone| phone.international()),
            email: user.email.as_ref().map(ToString::to_string),
            is_logged_in: user.is_logged_in,
            cart_items: store.cart_count(),
        }
    }
}

/// Log the shopper out and return the resulting summary.
///
/// The cart is kept.
#[must_use = "the summary reflects the signed-out session"]
pub fn sign_out(store: &Store) -> AccountSummary {
    let was_logged_in = store.user().is_logged_in;
    store.logout();
    info!(was_logged_in, "signed out");
    AccountSummary::from_store(store)
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use shiba_core::{Email, PhoneNumber, ProductId};

    use super::*;
    use crate::models::UserPatch;

    #[test]
    fn test_guest_summary() {
        let summary = AccountSummary::from_store(&Store::new());
        assert_eq!(summary.display_name, "Shiba Phone User");
        assert_eq!(summary.phone, None);
        assert!(!summary.is_logged_in);
        assert_eq!(summary.cart_items, 0);
    }

    #[test]
    fn test_logged_in_summary_uses_phone_then_name() {
        let store = Store::new();
        store.login(PhoneNumber::parse("9876543210").unwrap());

        let summary = AccountSummary::from_store(&store);
        assert_eq!(summary.display_name, "+91 9876543210");
        assert_eq!(summary.phone.as_deref(), Some("+91 9876543210"));

        store.update_user(UserPatch::profile(
            "Asha Rao",
            Email::parse("asha@example.com").unwrap(),
        ));
        let summary = AccountSummary::from_store(&store);
        assert_eq!(summary.display_name, "Asha Rao");
        assert_eq!(summary.email.as_deref(), Some("asha@example.com"));
    }

    #[test]
    fn test_sign_out_keeps_cart() {
        let store = Store::new();
        store.login(PhoneNumber::parse("9876543210").unwrap());
        store
            .add_product_to_cart(ProductId::new(2), None, None)
            .unwrap();

        let summary = sign_out(&store);
        assert!(!summary.is_logged_in);
        assert_eq!(summary.display_name, "Shiba Phone User");
        assert_eq!(summary.cart_items, 1);
    }
}
