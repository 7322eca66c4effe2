//! Session user.
//!
//! The session lives in memory only. It starts logged out, is filled in by
//! the OTP login and the personal-information step, and is reset on logout.

use serde::{Deserialize, Serialize};

use shiba_core::{Email, PhoneNumber, UserId};

/// The current shopper.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    /// Set once the shopper has logged in.
    pub id: Option<UserId>,
    pub phone: Option<PhoneNumber>,
    pub email: Option<Email>,
    /// Full name from the personal-information form.
    pub name: Option<String>,
    pub is_logged_in: bool,
}

impl User {
    /// ID assigned to the shopper on a successful OTP login.
    pub const SIGNED_IN_ID: UserId = UserId::new(1);

    /// A freshly logged-in session for `phone`.
    #[must_use]
    pub const fn logged_in(phone: PhoneNumber) -> Self {
        Self {
            id: Some(Self::SIGNED_IN_ID),
            phone: Some(phone),
            email: None,
            name: None,
            is_logged_in: true,
        }
    }

    /// Name shown in the account header.
    #[must_use]
    pub fn display_name(&self) -> String {
        if let Some(name) = self.name.as_deref().filter(|n| !n.is_empty()) {
            return name.to_owned();
        }
        self.phone
            .as_ref()
            .map_or_else(|| "Shiba Phone User".to_string(), PhoneNumber::international)
    }

    /// Apply the `Some` fields of `patch`, leaving the rest untouched.
    pub fn apply(&mut self, patch: UserPatch) {
        if let Some(id) = patch.id {
            self.id = Some(id);
        }
        if let Some(phone) = patch.phone {
            self.phone = Some(phone);
        }
        if let Some(email) = patch.email {
            self.email = Some(email);
        }
        if let Some(name) = patch.name {
            self.name = Some(name);
        }
        if let Some(is_logged_in) = patch.is_logged_in {
            self.is_logged_in = is_logged_in;
        }
    }
}

/// A partial update to the session.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UserPatch {
    pub id: Option<UserId>,
    pub phone: Option<PhoneNumber>,
    pub email: Option<Email>,
    pub name: Option<String>,
    pub is_logged_in: Option<bool>,
}

impl UserPatch {
    /// Patch setting the profile fields collected on the personal-information step.
    #[must_use]
    pub fn profile(name: impl Into<String>, email: Email) -> Self {
        Self {
            name: Some(name.into()),
            email: Some(email),
            ..Self::default()
        }
    }
}
