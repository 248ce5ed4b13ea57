//! Music Section Component
//!
//! Featured video embed on the left, latest releases on the right, with a
//! "Listen Now" CTA out to the link hub. All destinations are external;
//! nothing here touches session state.

use dioxus::prelude::*;

use pasty_core::{youtube_embed_url, LINKTREE_URL, TRACKS};

#[component]
pub fn MusicSection() -> Element {
    let embed_url = youtube_embed_url();
    let rows: Vec<(String, &'static str, &'static str, &'static str)> = TRACKS
        .iter()
        .enumerate()
        .map(|(i, t)| (format!("{:02}", i + 1), t.title, t.url, t.length))
        .collect();

    rsx! {
        section { id: "music", class: "section",
            div { class: "section-header",
                div {
                    h2 { class: "section-title", "The Sound" }
                    p { class: "section-sub", "Latest visuals & releases." }
                }
            }
            div { class: "music-grid",
                div { class: "video-frame",
                    iframe {
                        src: "{embed_url}",
                        title: "Featured video",
                        allow: "accelerometer; autoplay; clipboard-write; encrypted-media; gyroscope; picture-in-picture",
                        allowfullscreen: true,
                    }
                }
                div { class: "track-list",
                    for (index, title, url, length) in rows {
                        a {
                            key: "{title}",
                            class: "track-row",
                            href: url,
                            target: "_blank",
                            rel: "noopener noreferrer",
                            div {
                                span { class: "track-index", "{index} " }
                                span { class: "track-title", "{title}" }
                                p { class: "track-platform", "Apple Music" }
                            }
                            span { class: "track-length", "{length} ↗" }
                        }
                    }
                    a {
                        class: "listen-cta",
                        href: LINKTREE_URL,
                        target: "_blank",
                        rel: "noopener noreferrer",
                        "Listen Now ↗"
                    }
                }
            }
        }
    }
}
