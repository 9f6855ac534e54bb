//! User Notices
//!
//! Failures and cancellations surface to the payer through whatever
//! the host app uses for alerts. The controller only ever talks to
//! this trait.

use std::sync::Mutex;

/// Sink for user-facing one-line notices
pub trait Notifier: Send + Sync {
    fn notify(&self, message: &str);
}

/// In-memory notifier that records messages for assertions
#[derive(Default)]
pub struct MemoryNotifier {
    messages: Mutex<Vec<String>>,
}

impl MemoryNotifier {
    pub fn new() -> Self {
        Self::default()
    }

    /// Everything notified so far, oldest first
    pub fn messages(&self) -> Vec<String> {
        self.messages.lock().unwrap().clone()
    }
}

impl Notifier for MemoryNotifier {
    fn notify(&self, message: &str) {
        self.messages.lock().unwrap().push(message.to_string());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_memory_notifier_records_in_order() {
        let notifier = MemoryNotifier::new();
        notifier.notify("first");
        notifier.notify("second");
        assert_eq!(notifier.messages(), vec!["first", "second"]);
    }
}
