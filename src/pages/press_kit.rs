//! Press kit (EPK) page - a printable, document-style view.
//!
//! Independent of the landing session: no cart, no notifications, no
//! shared state. "Download Bio" hands the whole page to the host's print
//! facility; a webview without a print dialog simply ignores the call.

use dioxus::document;
use dioxus::prelude::*;

use pasty_core::{
    youtube_embed_url, ARTIST_IMAGE_URL, INSTAGRAM_URL, LINKTREE_URL, MANAGEMENT_EMAIL,
    PHOTO_ARCHIVE_URL, TRACKS, YOUTUBE_CHANNEL_URL,
};

use crate::components::CustomCursor;

#[component]
pub fn PressKit() -> Element {
    let embed_url = youtube_embed_url();

    let download_bio = move |_| {
        tracing::debug!("invoking host print dialog for EPK");
        let _ = document::eval("window.print();");
    };

    rsx! {
        div { class: "epk-page",
            // Print styles hide the cursor along with the rest of the
            // interactive chrome.
            CustomCursor {}

            div { class: "epk-header",
                div {
                    h1 { class: "epk-title", "PA$TY" }
                    span { class: "epk-tag", "Electronic Press Kit" }
                }
                div { class: "epk-contact",
                    p { style: "font-weight: 700;", "MANAGEMENT" }
                    a { href: "mailto:{MANAGEMENT_EMAIL}", "{MANAGEMENT_EMAIL}" }
                }
            }

            div { class: "epk-body",
                div { class: "epk-bio-grid",
                    div { class: "epk-photo",
                        img { src: ARTIST_IMAGE_URL, alt: "Press shot" }
                    }
                    div { class: "epk-bio",
                        h2 { "The Artist" }
                        p {
                            "Pa$ty is an alternative rap artist who seamlessly blends rock, "
                            "hip-hop, and emo influences into a unique sound that reflects his "
                            "raw, emotional journey. Growing up surrounded by a wide range of "
                            "music, he developed a versatile style that mixes introspective "
                            "lyrics with powerful instrumentals."
                        }
                        p {
                            "Inspired by icons like 3 Doors Down, LUCKI, Billy Idol, and "
                            "Juice WRLD, Pa$ty's music explores themes of mental health, "
                            "addiction, and self-discovery, combining the emotional depth of "
                            "rock with the lyrical flow of hip-hop."
                        }
                        p {
                            "Now dropping the \"Yung\" from his name and rebranding simply as "
                            "\"Pa$ty,\" he's focused on creating music that reflects his "
                            "growth, resilience, and renewed sense of purpose."
                        }
                        p { class: "epk-pull-quote",
                            "\"His 2026 release plan exceeds expectations with unparalleled "
                            "depth, striking visuals, and a sonic evolution that redefines "
                            "the genre.\""
                        }
                        div { class: "epk-actions",
                            button { class: "epk-button", onclick: download_bio, "Download Bio ⇩" }
                            a {
                                class: "epk-button filled",
                                href: PHOTO_ARCHIVE_URL,
                                target: "_blank",
                                rel: "noopener noreferrer",
                                "Download Photos ⇩"
                            }
                        }
                    }
                }

                div { class: "epk-stats",
                    div {
                        h3 { class: "epk-stat-value", "80k+" }
                        p { class: "epk-stat-label", "Total Streams" }
                    }
                    div {
                        h3 { class: "epk-stat-value", "5k+" }
                        p { class: "epk-stat-label", "Followers" }
                    }
                    div {
                        h3 { class: "epk-stat-value", "10+" }
                        p { class: "epk-stat-label", "Shows" }
                    }
                    div {
                        h3 { class: "epk-stat-value", "2026" }
                        p { class: "epk-stat-label", "Next Drop" }
                    }
                }

                div { class: "epk-media-grid",
                    div {
                        h3 { "Latest Release" }
                        for track in TRACKS.iter() {
                            div { key: "{track.title}", class: "epk-track-row",
                                span { style: "font-weight: 700;", "{track.title}" }
                                span { "♪" }
                            }
                        }
                    }
                    div {
                        h3 { "Visuals" }
                        div { class: "epk-video",
                            iframe {
                                src: "{embed_url}",
                                title: "Featured video",
                                allowfullscreen: true,
                            }
                        }
                    }
                }

                div { class: "epk-footer-links",
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
                        href: LINKTREE_URL,
                        target: "_blank",
                        rel: "noopener noreferrer",
                        "Links"
                    }
                    a { href: "mailto:{MANAGEMENT_EMAIL}", "Email" }
                }
            }
        }
    }
}
