//! Marquee Component
//!
//! The scrolling "/////" strip between the hero and the content. Two
//! identical halves and a -50% translate keyframe make the loop seamless.

use dioxus::prelude::*;

#[component]
pub fn Marquee() -> Element {
    rsx! {
        div { class: "marquee",
            div { class: "marquee-track",
                for i in 0..40 {
                    span { key: "{i}", "/////" }
                }
            }
        }
    }
}
