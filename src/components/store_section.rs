//! Store Section Component
//!
//! The merch grid. "Add to Cart" captures the product by value into the
//! session cart, which opens the cart panel and raises the toast; the
//! expiry timer for that toast is scheduled here, guarded by the sequence
//! number so a later add simply outlives it.

use dioxus::prelude::*;

use pasty_core::{NOTIFICATION_DURATION, PRODUCTS};

use crate::context::use_session;

#[component]
pub fn StoreSection() -> Element {
    let mut session = use_session();

    rsx! {
        section { id: "store", class: "store-band",
            div { class: "section",
                div { style: "text-align: center; margin-bottom: 4rem;",
                    span { class: "eyebrow", "Shop The Drop" }
                    h2 { class: "section-title", "2026 Collection" }
                }
                div { class: "product-grid",
                    for product in PRODUCTS.iter().copied() {
                        div { key: "{product.id}", class: "product-card",
                            div { class: "product-media",
                                img { src: product.image, alt: product.name }
                                div { class: "product-overlay",
                                    button {
                                        class: "add-to-cart",
                                        onclick: move |_| {
                                            let seq = session.write().add_to_cart(product);
                                            tracing::debug!(
                                                "added product {} to cart",
                                                product.id
                                            );
                                            spawn(async move {
                                                tokio::time::sleep(NOTIFICATION_DURATION).await;
                                                session.write().expire_notification(seq);
                                            });
                                        },
                                        "Add to Cart"
                                    }
                                }
                            }
                            div { class: "product-meta",
                                div {
                                    h3 { class: "product-name", "{product.name}" }
                                    p { class: "product-desc", "{product.desc}" }
                                }
                                span { class: "product-price", "${product.price}" }
                            }
                        }
                    }
                }
            }
        }
    }
}
