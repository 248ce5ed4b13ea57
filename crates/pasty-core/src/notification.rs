//! Single-slot toast notifications with last-write-wins replacement.
//!
//! At most one message is visible at any instant. Each `show` gets a fresh
//! sequence number; expiry is guarded by that number, so a timer scheduled
//! for an older message silently loses to a newer one — no timer
//! cancellation needed on the caller's side.

use std::time::Duration;

/// How long a notification stays visible without being superseded.
pub const NOTIFICATION_DURATION: Duration = Duration::from_secs(3);

/// A visible notification message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notification {
    pub message: String,
    /// Sequence number identifying this particular showing.
    pub seq: u64,
}

/// The one notification slot of the landing session.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NotificationSlot {
    current: Option<Notification>,
    next_seq: u64,
}

impl NotificationSlot {
    pub fn new() -> Self {
        Self::default()
    }

    /// Makes `message` the visible notification, replacing any current one.
    /// Returns the sequence number to pass to [`expire`](Self::expire)
    /// after [`NOTIFICATION_DURATION`].
    pub fn show(&mut self, message: impl Into<String>) -> u64 {
        let seq = self.next_seq;
        self.next_seq += 1;
        self.current = Some(Notification {
            message: message.into(),
            seq,
        });
        seq
    }

    /// Clears the slot, but only if `seq` is still the visible showing.
    /// An expiry racing a newer `show` is a no-op.
    pub fn expire(&mut self, seq: u64) {
        if self.current.as_ref().is_some_and(|n| n.seq == seq) {
            self.current = None;
        }
    }

    /// Unconditionally empties the slot. The sequence counter keeps
    /// counting, so a timer scheduled for an earlier showing can never
    /// expire a message shown after the clear.
    pub fn clear(&mut self) {
        self.current = None;
    }

    pub fn current(&self) -> Option<&Notification> {
        self.current.as_ref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn show_is_immediately_visible() {
        let mut slot = NotificationSlot::new();
        let seq = slot.show("Added Runner Up Hat to cart");

        let current = slot.current().unwrap();
        assert_eq!(current.message, "Added Runner Up Hat to cart");
        assert_eq!(current.seq, seq);
    }

    #[test]
    fn expire_clears_matching_showing() {
        let mut slot = NotificationSlot::new();
        let seq = slot.show("first");
        slot.expire(seq);
        assert!(slot.current().is_none());
    }

    #[test]
    fn newer_show_defeats_stale_expiry() {
        let mut slot = NotificationSlot::new();
        let old = slot.show("first");
        let newer = slot.show("second");

        // The timer for the first showing fires late.
        slot.expire(old);
        assert_eq!(slot.current().unwrap().message, "second");

        slot.expire(newer);
        assert!(slot.current().is_none());
    }

    #[test]
    fn clear_empties_slot_without_reusing_sequences() {
        let mut slot = NotificationSlot::new();
        let old = slot.show("stale");
        slot.clear();
        assert!(slot.current().is_none());

        // A showing after the clear is not expirable by the old timer.
        let newer = slot.show("fresh");
        assert_ne!(newer, old);
        slot.expire(old);
        assert_eq!(slot.current().unwrap().message, "fresh");
    }

    #[test]
    fn sequence_numbers_increase() {
        let mut slot = NotificationSlot::new();
        let a = slot.show("a");
        let b = slot.show("b");
        assert!(b > a);
    }
}
