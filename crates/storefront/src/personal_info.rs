//! Personal-information step.
//!
//! Collects the shopper's details before the contract. Only the name and
//! email are kept on the session; the rest is validated and handed back to
//! the caller.

use chrono::NaiveDate;
use serde::Serialize;
use thiserror::Error;
use tracing::info;

use shiba_core::{DigitCodeError, Email, EmailError, Pincode};

use crate::models::{User, UserPatch};
use crate::store::Store;

/// Errors from validating the personal-information form.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum FormError {
    /// A required field is blank.
    #[error("{0} is required")]
    MissingField(&'static str),

    /// Email is malformed.
    #[error("invalid email: {0}")]
    InvalidEmail(#[from] EmailError),

    /// Pincode is not 6 digits.
    #[error("invalid pincode: {0}")]
    InvalidPincode(DigitCodeError),

    /// Date of birth is not `YYYY-MM-DD`.
    #[error("invalid date of birth: {0}")]
    InvalidDate(String),

    /// A select box holds a value outside its options.
    #[error("invalid {field}: {value}")]
    InvalidChoice {
        /// Field name.
        field: &'static str,
        /// Value supplied.
        value: String,
    },
}

/// Occupation options.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Occupation {
    Student,
    Employee,
    Business,
    Freelancer,
    Other,
}

impl Occupation {
    fn parse(s: &str) -> Option<Self> {
        match s {
            "student" => Some(Self::Student),
            "employee" => Some(Self::Employee),
            "business" => Some(Self::Business),
            "freelancer" => Some(Self::Freelancer),
            "other" => Some(Self::Other),
            _ => None,
        }
    }
}

/// Monthly income brackets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum IncomeRange {
    #[serde(rename = "below-25k")]
    Below25k,
    #[serde(rename = "25k-50k")]
    From25kTo50k,
    #[serde(rename = "50k-100k")]
    From50kTo100k,
    #[serde(rename = "above-100k")]
    Above100k,
}

impl IncomeRange {
    fn parse(s: &str) -> Option<Self> {
        match s {
            "below-25k" => Some(Self::Below25k),
            "25k-50k" => Some(Self::From25kTo50k),
            "50k-100k" => Some(Self::From50kTo100k),
            "above-100k" => Some(Self::Above100k),
            _ => None,
        }
    }

    /// Human-readable label.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Below25k => "Below ₹25,000",
            Self::From25kTo50k => "₹25,000 - ₹50,000",
            Self::From50kTo100k => "₹50,000 - ₹1,00,000",
            Self::Above100k => "Above ₹1,00,000",
        }
    }
}

/// Raw form input, as typed.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PersonalInfoForm {
    pub full_name: String,
    pub email: String,
    /// `YYYY-MM-DD`, optional.
    pub date_of_birth: String,
    pub address: String,
    pub city: String,
    pub pincode: String,
    /// Select value, optional.
    pub occupation: String,
    /// Select value, optional.
    pub monthly_income: String,
}

/// Validated personal details.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PersonalInfo {
    pub full_name: String,
    pub email: Email,
    pub date_of_birth: Option<NaiveDate>,
    pub address: String,
    pub city: String,
    pub pincode: Pincode,
    pub occupation: Option<Occupation>,
    pub monthly_income: Option<IncomeRange>,
}

impl PersonalInfoForm {
    /// A form pre-filled with whatever the session already knows.
    #[must_use]
    pub fn prefill(user: &User) -> Self {
        Self {
            full_name: user.name.clone().unwrap_or_default(),
            email: user
                .email
                .as_ref()
                .map(ToString::to_string)
                .unwrap_or_default(),
            ..Self::default()
        }
    }

    /// Whether every required field has something in it.
    #[must_use]
    pub fn is_filled(&self) -> bool {
        [
            &self.full_name,
            &self.email,
            &self.address,
            &self.city,
            &self.pincode,
        ]
        .iter()
        .all(|field| !field.trim().is_empty())
    }

    /// Validate the form.
    ///
    /// # Errors
    ///
    /// Returns a [`FormError`] for the first field that fails.
    pub fn validate(&self) -> Result<PersonalInfo, FormError> {
        let full_name = required("full name", &self.full_name)?;
        let email = Email::parse(required("email", &self.email)?)?;
        let address = required("address", &self.address)?;
        let city = required("city", &self.city)?;
        let pincode =
            Pincode::parse(required("pincode", &self.pincode)?).map_err(FormError::InvalidPincode)?;

        let date_of_birth = optional(&self.date_of_birth)
            .map(|raw| {
                NaiveDate::parse_from_str(raw, "%Y-%m-%d")
                    .map_err(|_| FormError::InvalidDate(raw.to_owned()))
            })
            .transpose()?;
        let occupation = optional(&self.occupation)
            .map(|raw| {
                Occupation::parse(raw).ok_or_else(|| FormError::InvalidChoice {
                    field: "occupation",
                    value: raw.to_owned(),
                })
            })
            .transpose()?;
        let monthly_income = optional(&self.monthly_income)
            .map(|raw| {
                IncomeRange::parse(raw).ok_or_else(|| FormError::InvalidChoice {
                    field: "monthly income",
                    value: raw.to_owned(),
                })
            })
            .transpose()?;

        Ok(PersonalInfo {
            full_name: full_name.to_owned(),
            email,
            date_of_birth,
            address: address.to_owned(),
            city: city.to_owned(),
            pincode,
            occupation,
            monthly_income,
        })
    }

    /// Validate and store the name and email on the session.
    ///
    /// # Errors
    ///
    /// Returns a [`FormError`] if validation fails; the session is unchanged.
    pub fn submit(&self, store: &Store) -> Result<PersonalInfo, FormError> {
        let info = self.validate()?;
        store.update_user(UserPatch::profile(
            info.full_name.clone(),
            info.email.clone(),
        ));
        info!(city = %info.city, "personal information saved");
        Ok(info)
    }
}

fn required<'a>(field: &'static str, value: &'a str) -> Result<&'a str, FormError> {
    let value = value.trim();
    if value.is_empty() {
        return Err(FormError::MissingField(field));
    }
    Ok(value)
}

fn optional(value: &str) -> Option<&str> {
    Some(value.trim()).filter(|v| !v.is_empty())
}
