//! Glitch Link Component
//!
//! Navigation text that scrambles on hover, revealing the true label
//! character-by-character from a fixed glitch character set. The reveal
//! advances a third of a character per tick, matching a quick "decode"
//! feel without being unreadable.

use std::time::Duration;

use dioxus::prelude::*;
use rand::Rng;

const GLITCH_CHARSET: &[u8] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZ!@#$%^&*()_+-=";

/// Interval between scramble frames.
const TICK: Duration = Duration::from_millis(30);

/// Fraction of a character revealed per frame.
const REVEAL_PER_TICK: f32 = 1.0 / 3.0;

#[derive(Props, Clone, PartialEq)]
pub struct GlitchLinkProps {
    /// The true label.
    pub text: String,
    pub onclick: EventHandler<MouseEvent>,
}

/// A nav link with the hover scramble effect.
///
/// The ticking task is owned by this component: it is cancelled on
/// mouse-leave, replaced on re-enter, and dropped with the component, so
/// no frame ever fires against an unmounted link.
#[component]
pub fn GlitchLink(props: GlitchLinkProps) -> Element {
    let mut display = use_signal(|| props.text.clone());
    let mut scramble: Signal<Option<Task>> = use_signal(|| None);
    let handler = props.onclick;

    let enter_text = props.text.clone();
    let on_enter = move |_| {
        if let Some(task) = scramble.take() {
            task.cancel();
        }
        let target: Vec<char> = enter_text.chars().collect();
        let task = spawn(async move {
            let mut revealed = 0.0_f32;
            while revealed < target.len() as f32 {
                let frame: String = {
                    let mut rng = rand::rng();
                    target
                        .iter()
                        .enumerate()
                        .map(|(i, c)| {
                            if (i as f32) < revealed {
                                *c
                            } else {
                                GLITCH_CHARSET[rng.random_range(0..GLITCH_CHARSET.len())] as char
                            }
                        })
                        .collect()
                };
                display.set(frame);
                revealed += REVEAL_PER_TICK;
                tokio::time::sleep(TICK).await;
            }
            display.set(target.into_iter().collect());
        });
        scramble.set(Some(task));
    };

    let leave_text = props.text.clone();
    let on_leave = move |_| {
        if let Some(task) = scramble.take() {
            task.cancel();
        }
        display.set(leave_text.clone());
    };

    use_drop(move || {
        if let Some(task) = scramble.take() {
            task.cancel();
        }
    });

    rsx! {
        button {
            class: "glitch-link",
            onclick: move |evt| handler.call(evt),
            onmouseenter: on_enter,
            onmouseleave: on_leave,
            "{display}"
        }
    }
}
