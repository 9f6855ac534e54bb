//! Tier Pricing
//!
//! The payable amount is always derived from the fixed base price and
//! the selected tier's percentage. Free-text amount input never feeds
//! the charge.

use serde::{Deserialize, Serialize};

/// Fixed base price in rupees that tier percentages apply to
pub const BASE_PRICE: f64 = 5500.0;

/// Settlement currency for every order
pub const CURRENCY: &str = "INR";

/// Converts a major-unit amount to paise for the gateway
pub fn to_paise(amount: f64) -> i64 {
    (amount * 100.0).round() as i64
}

/// Pricing tier selected on the form
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Tier {
    /// Entry tier, 20% of base
    TierA,
    /// Full tier, 50% of base
    TierB,
}

impl Tier {
    /// Percentage of the base price this tier charges
    pub fn percent(&self) -> f64 {
        match self {
            Tier::TierA => 20.0,
            Tier::TierB => 50.0,
        }
    }

    /// Amount due in rupees for this tier
    pub fn payable_amount(&self) -> f64 {
        BASE_PRICE * self.percent() / 100.0
    }

    /// Amount due in paise for this tier
    pub fn amount_in_paise(&self) -> i64 {
        to_paise(self.payable_amount())
    }
}

impl Default for Tier {
    fn default() -> Self {
        Tier::TierA
    }
}

/// Fixed denomination options offered next to the tier picker.
/// The selector is currently locked to its default but the chosen
/// value still rides along on verification.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Denomination {
    Rs5500,
    Rs10000,
    Rs20000,
}

impl Denomination {
    /// Face value in rupees
    pub fn value(&self) -> i64 {
        match self {
            Denomination::Rs5500 => 5500,
            Denomination::Rs10000 => 10000,
            Denomination::Rs20000 => 20000,
        }
    }
}

impl Default for Denomination {
    fn default() -> Self {
        Denomination::Rs5500
    }
}
