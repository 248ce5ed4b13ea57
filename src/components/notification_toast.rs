//! Notification Toast Component
//!
//! Renders the session's single notification slot, if occupied. Expiry is
//! handled by whoever showed the message; this component only displays.

use dioxus::prelude::*;

use crate::context::use_session;

#[component]
pub fn NotificationToast() -> Element {
    let session = use_session();
    let Some(message) = session.read().notification().map(|n| n.message.clone()) else {
        return rsx! {};
    };

    rsx! {
        div { class: "notification-toast", "✓ {message}" }
    }
}
