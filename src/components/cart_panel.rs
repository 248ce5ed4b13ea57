//! Cart Panel Component
//!
//! Slide-in panel over a blurred scrim. Entries are rendered from a
//! snapshot of the cart, so every remove button carries an index valid
//! for the sequence it was rendered from. Checkout is an inert
//! affordance: there is no backend to submit an order to.

use dioxus::prelude::*;

use pasty_core::CartItem;

use crate::context::use_session;

#[component]
pub fn CartPanel() -> Element {
    let mut session = use_session();

    let items: Vec<CartItem> = session.read().cart().items().to_vec();
    let total = session.read().cart().total();
    let count = items.len();

    rsx! {
        div {
            class: "cart-scrim",
            onclick: move |_| session.write().close_cart(),
        }
        div { class: "cart-panel",
            div { class: "cart-header",
                h2 { "Your Cart ({count})" }
                button { onclick: move |_| session.write().close_cart(), "✕" }
            }
            div { class: "cart-items",
                if items.is_empty() {
                    div { class: "cart-empty",
                        p { "Your bag is empty." }
                        button {
                            onclick: move |_| session.write().close_cart(),
                            "Start Shopping"
                        }
                    }
                } else {
                    for (index, item) in items.iter().enumerate() {
                        div { key: "{index}", class: "cart-row",
                            img { src: item.product.image, alt: item.product.name }
                            div { class: "cart-row-info",
                                h4 { class: "cart-row-name", "{item.product.name}" }
                                p { class: "cart-row-price", "${item.product.price}" }
                            }
                            button {
                                class: "cart-row-remove",
                                onclick: move |_| session.write().remove_from_cart(index),
                                "✕"
                            }
                        }
                    }
                }
            }
            if !items.is_empty() {
                div { class: "cart-footer",
                    div { class: "cart-total",
                        span { "Total" }
                        span { "${total}" }
                    }
                    button {
                        class: "checkout-button",
                        // No order flow exists yet; the button is part of
                        // the demo surface only.
                        onclick: move |_| {
                            tracing::debug!("checkout pressed (no backend wired)");
                        },
                        "Checkout ›"
                    }
                }
            }
        }
    }
}
