//! Fixed-length numeric codes: phone numbers, OTPs and pincodes.
//!
//! All three are strings of ASCII digits with an exact length. They share one
//! error type; callers add the field context when wrapping it.

use core::fmt;

use serde::{Deserialize, Serialize};

/// Errors that can occur when parsing a fixed-length digit code.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum DigitCodeError {
    /// The input string is empty.
    #[error("value cannot be empty")]
    Empty,
    /// The input contains something other than ASCII digits.
    #[error("value must contain only digits")]
    NonDigit,
    /// The input has the wrong number of digits.
    #[error("value must be exactly {expected} digits (got {actual})")]
    WrongLength {
        /// Required number of digits.
        expected: usize,
        /// Number of characters supplied.
        actual: usize,
    },
}

fn check_digits(s: &str, expected: usize) -> Result<(), DigitCodeError> {
    if s.is_empty() {
        return Err(DigitCodeError::Empty);
    }
    if !s.bytes().all(|b| b.is_ascii_digit()) {
        return Err(DigitCodeError::NonDigit);
    }
    let actual = s.chars().count();
    if actual != expected {
        return Err(DigitCodeError::WrongLength { expected, actual });
    }
    Ok(())
}

macro_rules! define_digit_code {
    ($(#[$meta:meta])* $name:ident, $len:expr) => {
        $(#[$meta])*
        #[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
        #[serde(try_from = "String", into = "String")]
        pub struct $name(String);

        impl $name {
            /// Number of digits required.
            pub const LENGTH: usize = $len;

            /// Parse from a string of exactly [`Self::LENGTH`] ASCII digits.
            ///
            /// # Errors
            ///
            /// Returns an error if the input is empty, contains non-digits,
            /// or has the wrong length.
            pub fn parse(s: &str) -> Result<Self, DigitCodeError> {
                check_digits(s, Self::LENGTH)?;
                Ok(Self(s.to_owned()))
            }

            /// Parse from free-form input, discarding every non-digit first.
            ///
            /// # Errors
            ///
            /// Returns an error if the remaining digits are not exactly
            /// [`Self::LENGTH`] long.
            pub fn from_input(s: &str) -> Result<Self, DigitCodeError> {
                let digits: String = s.chars().filter(char::is_ascii_digit).collect();
                Self::parse(&digits)
            }

            /// Returns the digits as a string slice.
            #[must_use]
            pub fn as_str(&self) -> &str {
                &self.0
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(&self.0)
            }
        }

        impl core::str::FromStr for $name {
            type Err = DigitCodeError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                Self::parse(s)
            }
        }

        impl TryFrom<String> for $name {
            type Error = DigitCodeError;

            fn try_from(s: String) -> Result<Self, Self::Error> {
                check_digits(&s, Self::LENGTH)?;
                Ok(Self(s))
            }
        }

        impl From<$name> for String {
            fn from(code: $name) -> Self {
                code.0
            }
        }

        impl AsRef<str> for $name {
            fn as_ref(&self) -> &str {
                &self.0
            }
        }
    };
}

define_digit_code!(
    /// A 10-digit Indian mobile number, stored without the `+91` prefix.
    PhoneNumber,
    10
);

define_digit_code!(
    /// A 6-digit one-time password.
    OtpCode,
    6
);

define_digit_code!(
    /// A 6-digit Indian postal code.
    Pincode,
    6
);

impl PhoneNumber {
    /// Dialling code prepended for display.
    pub const COUNTRY_CODE: &'static str = "+91";

    /// Format with the country code, e.g. `+91 9876543210`.
    #[must_use]
    pub fn international(&self) -> String {
        format!("{} {}", Self::COUNTRY_CODE, self.0)
    }
}
