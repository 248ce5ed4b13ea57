//! Landing page - the main PA$TY storefront view.
//!
//! Owns the transient visuals (scroll offset, lightning flash) and wires
//! the session-owned cart, menu, and notification state into the section
//! components. Both background tasks here are scope-owned futures, so
//! navigating away from the page drops them and no timer ever fires
//! against an unmounted view.

use std::time::Duration;

use dioxus::document;
use dioxus::prelude::*;
use rand::Rng;

use crate::components::{
    CartPanel, CustomCursor, Hero, Marquee, MenuOverlay, MusicSection, NavBar, NotificationToast,
    SignupSection, SiteFooter, StoreSection,
};
use crate::context::use_session;

/// How long the lightning overlay stays lit once triggered.
const FLASH_ON: Duration = Duration::from_millis(150);

/// Bounds for the randomized pause between flashes, in milliseconds.
const FLASH_GAP_MS: std::ops::Range<u64> = 3_000..7_000;

#[component]
pub fn Landing() -> Element {
    let mut session = use_session();
    let mut scroll_y = use_signal(|| 0.0_f64);
    let mut flash = use_signal(|| false);

    // Panel flags never survive a (re)mount of this view; the cart
    // contents do.
    use_effect(move || {
        session.write().reset_panels();
    });

    // Stream the webview scroll offset into a signal for the hero
    // transforms. The webview document outlives this view across route
    // changes, so the handler is named and removed on unmount.
    use_future(move || async move {
        let mut eval = document::eval(
            r#"
            if (window.__onLandingScroll) {
                window.removeEventListener('scroll', window.__onLandingScroll);
            }
            window.__onLandingScroll = () => { dioxus.send(window.scrollY); };
            window.addEventListener('scroll', window.__onLandingScroll, { passive: true });
            "#,
        );
        while let Ok(y) = eval.recv::<f64>().await {
            scroll_y.set(y);
        }
    });
    use_drop(|| {
        let _ = document::eval(
            r#"
            if (window.__onLandingScroll) {
                window.removeEventListener('scroll', window.__onLandingScroll);
                delete window.__onLandingScroll;
            }
            "#,
        );
    });

    // Lightning: first strike after 3s, then at randomized 3-7s intervals
    // for as long as this page is mounted.
    use_future(move || async move {
        tokio::time::sleep(Duration::from_secs(3)).await;
        loop {
            flash.set(true);
            tokio::time::sleep(FLASH_ON).await;
            flash.set(false);
            let gap = rand::rng().random_range(FLASH_GAP_MS);
            tokio::time::sleep(Duration::from_millis(gap)).await;
        }
    });

    rsx! {
        div { class: "landing-page",
            CustomCursor {}
            NavBar {}
            Hero { scroll_y: scroll_y(), flash: flash() }

            div { class: "content-sheet",
                div { style: "padding-top: 3rem; padding-bottom: 1.5rem;", Marquee {} }
                MusicSection {}
                StoreSection {}
                SignupSection {}
                SiteFooter {}
            }

            if session.read().menu_open() {
                MenuOverlay {}
            }
            if session.read().cart_open() {
                CartPanel {}
            }
            NotificationToast {}
        }
    }
}
