//! Overlay Menu Component
//!
//! Full-screen menu. Music and Shop close the overlay and scroll to their
//! sections; EPK closes it and navigates to the press kit.

use dioxus::prelude::*;

use crate::app::Route;
use crate::components::scroll_to_section;
use crate::context::use_session;

#[component]
pub fn MenuOverlay() -> Element {
    let mut session = use_session();
    let navigator = use_navigator();

    rsx! {
        div { class: "menu-overlay",
            button {
                class: "close-button",
                onclick: move |_| session.write().close_menu(),
                "✕"
            }
            button {
                class: "menu-entry",
                onclick: move |_| {
                    session.write().close_menu();
                    scroll_to_section("music");
                },
                "Music"
            }
            button {
                class: "menu-entry",
                onclick: move |_| {
                    session.write().close_menu();
                    scroll_to_section("store");
                },
                "Shop"
            }
            button {
                class: "menu-entry",
                onclick: move |_| {
                    session.write().close_menu();
                    navigator.push(Route::PressKit {});
                },
                "EPK"
            }
        }
    }
}
