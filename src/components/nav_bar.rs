//! Navigation Bar Component
//!
//! Fixed top bar in difference blend mode: wordmark on the left; glitch
//! links, the cart button with its badge, and the overlay-menu trigger on
//! the right. Music and Shop smooth-scroll to their sections; EPK
//! navigates to the press kit route.

use dioxus::document;
use dioxus::prelude::*;

use crate::app::Route;
use crate::components::GlitchLink;
use crate::context::use_session;

/// Smooth-scrolls the page to the element with `id`.
pub fn scroll_to_section(id: &str) {
    let _ = document::eval(&format!(
        "const el = document.getElementById('{id}'); if (el) el.scrollIntoView({{ behavior: 'smooth' }});"
    ));
}

#[component]
pub fn NavBar() -> Element {
    let mut session = use_session();
    let navigator = use_navigator();

    let cart_len = session.read().cart().len();

    rsx! {
        nav { class: "site-nav",
            div { class: "wordmark", "PA$TY" }
            div { class: "nav-links",
                GlitchLink { text: "Music", onclick: move |_| scroll_to_section("music") }
                GlitchLink { text: "Shop", onclick: move |_| scroll_to_section("store") }
                GlitchLink {
                    text: "EPK",
                    onclick: move |_| {
                        navigator.push(Route::PressKit {});
                    },
                }

                button {
                    class: "cart-button",
                    onclick: move |_| session.write().open_cart(),
                    "🛍"
                    if cart_len > 0 {
                        span { class: "cart-badge", "{cart_len}" }
                    }
                }

                button {
                    class: "menu-button",
                    onclick: move |_| session.write().open_menu(),
                    "☰"
                }
            }
        }
    }
}
