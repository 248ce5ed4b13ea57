//! Site Footer Component

use dioxus::prelude::*;

use pasty_core::{INSTAGRAM_URL, LINKTREE_URL, SOUNDCLOUD_URL, YOUTUBE_CHANNEL_URL};

#[component]
pub fn SiteFooter() -> Element {
    rsx! {
        footer { class: "site-footer",
            h2 { class: "footer-wordmark", "PA$TY" }
            div { class: "footer-links",
                a {
                    href: INSTAGRAM_URL,
                    target: "_blank",
                    rel: "noopener noreferrer",
                    "Instagram"
                }
                a {
                    href: YOUTUBE_CHANNEL_URL,
                    target: "_blank",
                    rel: "noopener noreferrer",
                    "YouTube"
                }
                a {
                    href: SOUNDCLOUD_URL,
                    target: "_blank",
                    rel: "noopener noreferrer",
                    "SoundCloud"
                }
                a {
                    href: LINKTREE_URL,
                    target: "_blank",
                    rel: "noopener noreferrer",
                    "Contact"
                }
            }
            p { class: "footer-copyright", "© 2026 PA$TY. All Rights Reserved." }
        }
    }
}
