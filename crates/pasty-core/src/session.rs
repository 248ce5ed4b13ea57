//! Landing-view session state: cart, notification slot, and panel flags.
//!
//! One explicit state-holder with named transitions instead of a pile of
//! ad-hoc globals. The UI shell puts a `Session` behind a signal and hands
//! it to the view tree via context; the press kit view never touches it.

use crate::cart::Cart;
use crate::catalog::Product;
use crate::notification::{Notification, NotificationSlot};

/// Transient, in-memory UI session for the landing view.
///
/// Nothing here survives a process restart; panel flags additionally reset
/// to closed whenever the landing view (re)mounts.
#[derive(Debug, Clone, Default)]
pub struct Session {
    cart: Cart,
    notifications: NotificationSlot,
    cart_open: bool,
    menu_open: bool,
}

impl Session {
    /// A fresh session: empty cart, no notification, all panels closed.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds `product` to the cart, opens the cart panel, and shows an
    /// "Added ... to cart" notification. Returns the notification sequence
    /// number so the caller can schedule its expiry.
    pub fn add_to_cart(&mut self, product: Product) -> u64 {
        let message = format!("Added {} to cart", product.name);
        self.cart.add(product);
        self.cart_open = true;
        self.notifications.show(message)
    }

    /// Removes the cart entry at `index`.
    ///
    /// # Panics
    ///
    /// Panics if `index` is out of bounds; see [`Cart::remove`].
    pub fn remove_from_cart(&mut self, index: usize) {
        self.cart.remove(index);
    }

    pub fn cart(&self) -> &Cart {
        &self.cart
    }

    /// Shows a transient message; see [`NotificationSlot::show`].
    pub fn notify(&mut self, message: impl Into<String>) -> u64 {
        self.notifications.show(message)
    }

    /// Expires the notification with sequence `seq` if still visible.
    pub fn expire_notification(&mut self, seq: u64) {
        self.notifications.expire(seq);
    }

    pub fn notification(&self) -> Option<&Notification> {
        self.notifications.current()
    }

    pub fn cart_open(&self) -> bool {
        self.cart_open
    }

    pub fn open_cart(&mut self) {
        self.cart_open = true;
    }

    pub fn close_cart(&mut self) {
        self.cart_open = false;
    }

    pub fn menu_open(&self) -> bool {
        self.menu_open
    }

    pub fn open_menu(&mut self) {
        self.menu_open = true;
    }

    pub fn close_menu(&mut self) {
        self.menu_open = false;
    }

    /// Closes menu and cart panels and drops any visible notification,
    /// without touching the cart contents. Called when the landing view
    /// mounts: the expiry timer for a notification dies with the view
    /// that scheduled it, so a message still visible at remount would
    /// otherwise never leave the slot.
    pub fn reset_panels(&mut self) {
        self.cart_open = false;
        self.menu_open = false;
        self.notifications.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::PRODUCTS;

    #[test]
    fn new_session_is_closed_and_empty() {
        let session = Session::new();
        assert!(session.cart().is_empty());
        assert!(session.notification().is_none());
        assert!(!session.cart_open());
        assert!(!session.menu_open());
    }

    #[test]
    fn add_to_cart_opens_panel_and_notifies() {
        let mut session = Session::new();
        session.add_to_cart(PRODUCTS[0]);

        assert!(session.cart_open());
        assert_eq!(session.cart().len(), 1);
        assert_eq!(session.cart().total(), 35);
        assert!(session
            .notification()
            .unwrap()
            .message
            .contains("Pa$ty Classic Tee"));
    }

    #[test]
    fn remove_scenario_tee_then_hat() {
        let mut session = Session::new();
        session.add_to_cart(PRODUCTS[0]); // Tee, $35
        session.add_to_cart(PRODUCTS[2]); // Hat, $20

        session.remove_from_cart(0);

        assert_eq!(session.cart().len(), 1);
        assert_eq!(session.cart().items()[0].product.name, "Runner Up Hat");
        assert_eq!(session.cart().total(), 20);
    }

    #[test]
    fn expiry_clears_the_add_notification() {
        let mut session = Session::new();
        let seq = session.add_to_cart(PRODUCTS[1]);
        session.expire_notification(seq);
        assert!(session.notification().is_none());
    }

    #[test]
    fn reset_panels_keeps_cart_contents() {
        let mut session = Session::new();
        session.add_to_cart(PRODUCTS[0]);
        session.open_menu();

        session.reset_panels();

        assert!(!session.cart_open());
        assert!(!session.menu_open());
        assert_eq!(session.cart().len(), 1);
    }

    #[test]
    fn reset_panels_drops_orphaned_notification() {
        let mut session = Session::new();
        // Add, then navigate away before the 3s expiry fires: the timer
        // is gone, the message is not.
        let seq = session.add_to_cart(PRODUCTS[0]);
        assert!(session.notification().is_some());

        session.reset_panels();
        assert!(session.notification().is_none());

        // A message shown after the remount is immune to the dead
        // timer's sequence number.
        session.notify("fresh");
        session.expire_notification(seq);
        assert_eq!(session.notification().unwrap().message, "fresh");
    }
}
