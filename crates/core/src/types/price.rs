//! Rupee prices using decimal arithmetic.
//!
//! The storefront sells in a single currency, Indian Rupees, and displays
//! whole rupees only (no paise). Amounts are kept as `Decimal` so plan
//! interest figures and sums stay exact, and rounding happens once, at
//! display time.

use core::fmt;
use core::iter::Sum;
use core::ops::Add;

use rust_decimal::prelude::ToPrimitive;
use rust_decimal::{Decimal, RoundingStrategy};
use serde::{Deserialize, Serialize};

/// A price in Indian Rupees.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Price {
    /// Amount in rupees.
    amount: Decimal,
}

impl Price {
    /// Zero rupees.
    pub const ZERO: Self = Self {
        amount: Decimal::ZERO,
    };

    /// Currency symbol used by [`Price::display`].
    pub const SYMBOL: &'static str = "₹";

    /// Create a price from a decimal rupee amount.
    #[must_use]
    pub const fn new(amount: Decimal) -> Self {
        Self { amount }
    }

    /// Create a price from a whole number of rupees.
    #[must_use]
    pub fn rupees(amount: i64) -> Self {
        Self {
            amount: Decimal::from(amount),
        }
    }

    /// The amount in rupees.
    #[must_use]
    pub const fn amount(&self) -> Decimal {
        self.amount
    }

    /// The amount rounded to whole rupees, half away from zero.
    #[must_use]
    pub fn whole_rupees(&self) -> i128 {
        self.amount
            .round_dp_with_strategy(0, RoundingStrategy::MidpointAwayFromZero)
            .to_i128()
            .unwrap_or_default()
    }

    /// Format for display with Indian digit grouping (e.g. `₹1,23,456`).
    ///
    /// The last three digits form one group and every two digits above that
    /// form another. No decimal places are shown.
    #[must_use]
    pub fn display(&self) -> String {
        let rupees = self.whole_rupees();
        let sign = if rupees < 0 { "-" } else { "" };
        format!(
            "{sign}{}{}",
            Self::SYMBOL,
            group_indian(&rupees.unsigned_abs().to_string())
        )
    }
}

/// Insert Indian-style group separators into a string of ASCII digits.
fn group_indian(digits: &str) -> String {
    if digits.len() <= 3 {
        return digits.to_owned();
    }

    let (head, last_three) = digits.split_at(digits.len() - 3);
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 2);

    // Leading group is one or two digits so that the rest splits into pairs.
    let lead = head.len() % 2;
    let (first, pairs) = head.split_at(lead);
    grouped.push_str(first);
    for pair in pairs.as_bytes().chunks(2) {
        if !grouped.is_empty() {
            grouped.push(',');
        }
        grouped.extend(pair.iter().map(|&b| char::from(b)));
    }

    grouped.push(',');
    grouped.push_str(last_three);
    grouped
}

impl fmt::Display for Price {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(&self.display())
    }
}

impl Add for Price {
    type Output = Self;

    fn add(self, rhs: Self) -> Self::Output {
        Self::new(self.amount + rhs.amount)
    }
}

impl Sum for Price {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Self::ZERO, Add::add)
    }
}

impl<'a> Sum<&'a Self> for Price {
    fn sum<I: Iterator<Item = &'a Self>>(iter: I) -> Self {
        iter.copied().sum()
    }
}

impl From<Decimal> for Price {
    fn from(amount: Decimal) -> Self {
        Self::new(amount)
    }
}
