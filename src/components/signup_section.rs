//! Signup Section Component
//!
//! "Stay connected" band with a phone-number input and a Join button.
//! There is no list backend; joining is an inert affordance and the input
//! is never read.

use dioxus::prelude::*;

#[component]
pub fn SignupSection() -> Element {
    rsx! {
        section { class: "signup-band",
            div { class: "signup-inner",
                h3 { class: "signup-title", "Stay Connected" }
                p { class: "section-sub", "Sign up." }
                div { class: "signup-row",
                    input {
                        class: "signup-input",
                        r#type: "text",
                        placeholder: "ENTER YOUR NUMBER",
                    }
                    button { class: "join-button", "Join →" }
                }
                p { class: "signup-smallprint",
                    "By joining you agree to receive automated marketing texts. Rate may apply."
                }
            }
        }
    }
}
