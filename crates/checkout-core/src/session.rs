//! Payment Session State
//!
//! A checkout moves through exactly three phases:
//!
//! ```text
//! Idle ──submit──> Paying ──verified──> Done
//!   ^                 │
//!   └────any failure──┘
//! ```
//!
//! Paying never survives a failed attempt and Done is terminal.

use serde::{Deserialize, Serialize};

/// Where the current payment attempt stands
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PaymentPhase {
    /// No attempt in flight, submit is allowed
    Idle,
    /// An attempt is running, submit is blocked
    Paying,
    /// A payment was verified, submit stays blocked
    Done,
}

impl PaymentPhase {
    pub fn is_paying(&self) -> bool {
        matches!(self, PaymentPhase::Paying)
    }

    pub fn is_done(&self) -> bool {
        matches!(self, PaymentPhase::Done)
    }

    /// Only an idle session takes a new submit
    pub fn accepts_submit(&self) -> bool {
        matches!(self, PaymentPhase::Idle)
    }
}

impl Default for PaymentPhase {
    fn default() -> Self {
        PaymentPhase::Idle
    }
}

/// Identifiers carried over from the surrounding app session, if any
#[derive(Clone, Debug, Default)]
pub struct SessionContext {
    /// Draft identifier forwarded on order creation and verification
    pub draft_id: Option<String>,
    /// Signed-in user identifier forwarded on verification
    pub user_id: Option<String>,
}

impl SessionContext {
    pub fn new(draft_id: Option<String>, user_id: Option<String>) -> Self {
        Self { draft_id, user_id }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_phase_predicates() {
        assert!(PaymentPhase::Idle.accepts_submit());
        assert!(!PaymentPhase::Paying.accepts_submit());
        assert!(!PaymentPhase::Done.accepts_submit());
        assert!(PaymentPhase::Paying.is_paying());
        assert!(PaymentPhase::Done.is_done());
        assert_eq!(PaymentPhase::default(), PaymentPhase::Idle);
    }

    #[test]
    fn test_session_context() {
        let session = SessionContext::new(Some("draft_42".into()), None);
        assert_eq!(session.draft_id.as_deref(), Some("draft_42"));
        assert!(session.user_id.is_none());
        assert!(SessionContext::default().draft_id.is_none());
    }
}
