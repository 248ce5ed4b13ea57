//! Session context for the PA$TY site.
//!
//! Provides the landing session state to all components via use_context.
//!
//! ## Usage
//!
//! ```ignore
//! // In an event handler
//! let mut session = use_session();
//! let seq = session.write().add_to_cart(product);
//! ```

use dioxus::prelude::*;
use pasty_core::Session;

/// Hook to access the landing [`Session`] from context.
///
/// The session holds the cart, the notification slot, and the menu/cart
/// panel flags. Only the landing view tree writes it; the press kit view
/// does not read it at all.
pub fn use_session() -> Signal<Session> {
    use_context::<Signal<Session>>()
}
