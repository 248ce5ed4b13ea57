//! Custom Cursor Component
//!
//! Replaces the pointer with the "$" glyph, scaled up while hovering
//! anything clickable. Pointer positions stream in from a webview
//! mouse-move listener.

use dioxus::document;
use dioxus::prelude::*;

#[component]
pub fn CustomCursor() -> Element {
    let mut position = use_signal(|| (0.0_f64, 0.0_f64));
    let mut hovering = use_signal(|| false);

    // The webview document outlives this component across route changes,
    // so the handler is named and removed on unmount along with the
    // listener future.
    use_future(move || async move {
        let mut eval = document::eval(
            r#"
            if (window.__onCursorMove) {
                window.removeEventListener('mousemove', window.__onCursorMove);
            }
            window.__onCursorMove = (e) => {
                const t = e.target;
                const hot = !!(t.closest && (t.closest('button') || t.closest('a')));
                dioxus.send([e.clientX, e.clientY, hot]);
            };
            window.addEventListener('mousemove', window.__onCursorMove, { passive: true });
            "#,
        );
        while let Ok((x, y, hot)) = eval.recv::<(f64, f64, bool)>().await {
            position.set((x, y));
            hovering.set(hot);
        }
    });
    use_drop(|| {
        let _ = document::eval(
            r#"
            if (window.__onCursorMove) {
                window.removeEventListener('mousemove', window.__onCursorMove);
                delete window.__onCursorMove;
            }
            "#,
        );
    });

    let (x, y) = position();
    let left = x - 12.0;
    let top = y - 20.0;
    let hover_class = if hovering() { "hovering" } else { "" };

    rsx! {
        div {
            class: "custom-cursor {hover_class}",
            style: "transform: translate({left}px, {top}px);",
            span { class: "cursor-glyph", "$" }
        }
    }
}
