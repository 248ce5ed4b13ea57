use dioxus::prelude::*;

use pasty_core::Session;

use crate::pages::{Landing, PressKit};
use crate::theme::GLOBAL_STYLES;

/// Application routes.
///
/// - `/` - Landing page: hero, music, store, signup
/// - `/epk` - Electronic press kit (printable)
#[derive(Clone, Routable, PartialEq)]
pub enum Route {
    #[route("/")]
    Landing {},
    #[route("/epk")]
    PressKit {},
}

/// Root application component.
///
/// Provides global styles, the landing session context, and routing.
#[component]
pub fn App() -> Element {
    // One session per process. Kept at the root so in-app navigation
    // preserves the cart; a restart starts from empty.
    let session: Signal<Session> = use_signal(Session::new);
    use_context_provider(|| session);

    rsx! {
        style { {GLOBAL_STYLES} }
        Router::<Route> {}
    }
}
