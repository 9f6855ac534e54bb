//! Checkout Form
//!
//! Field storage plus the per-field validity rules that gate the pay
//! button. Validation never mutates state and runs on every render,
//! so each predicate stays allocation-free.

use serde::{Deserialize, Serialize};

/// Buyer details collected before payment
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct CheckoutForm {
    pub name: String,
    pub email: String,
    pub contact: String,
    pub address: String,
    pub amount: String,
}

impl CheckoutForm {
    /// Stores a contact number, keeping only ASCII digits and
    /// truncating to ten. Input like "98-76a5432109" lands as
    /// "9876543210".
    pub fn set_contact(&mut self, raw: &str) {
        self.contact = raw
            .chars()
            .filter(char::is_ascii_digit)
            .take(10)
            .collect();
    }

    /// Name must have at least two non-whitespace-trimmed characters
    pub fn name_ok(&self) -> bool {
        self.name.trim().chars().count() > 1
    }

    /// Single `@` with a non-empty local part and a dotted domain.
    /// The domain dot must be interior, so "a@b." and "a@.b" fail.
    pub fn email_ok(&self) -> bool {
        if self.email.chars().any(char::is_whitespace) {
            return false;
        }
        let Some((local, domain)) = self.email.split_once('@') else {
            return false;
        };
        if local.is_empty() || domain.contains('@') {
            return false;
        }
        domain
            .rfind('.')
            .is_some_and(|dot| dot > 0 && dot + 1 < domain.len())
    }

    /// Exactly ten digits after sanitization
    pub fn contact_ok(&self) -> bool {
        self.contact.len() == 10 && self.contact.chars().all(|c| c.is_ascii_digit())
    }

    /// Address must have at least five trimmed characters
    pub fn address_ok(&self) -> bool {
        self.address.trim().chars().count() > 4
    }

    /// Amount field just has to be non-blank. It is display-only and
    /// never reaches the gateway.
    pub fn amount_ok(&self) -> bool {
        !self.amount.trim().is_empty()
    }

    /// All five fields pass
    pub fn is_valid(&self) -> bool {
        self.name_ok()
            && self.email_ok()
            && self.contact_ok()
            && self.address_ok()
            && self.amount_ok()
    }
}
