//! Hero Section Component
//!
//! Full-bleed artist photo with the logo overlaid, driven by the page
//! scroll offset: the photo fades and shrinks away, a darken layer closes
//! over it, and the logo drifts upward. A lightning overlay flashes when
//! the landing page's flash timer fires. All of it is cosmetic; none of
//! it feeds back into application state.

use dioxus::prelude::*;

use pasty_core::{ARTIST_IMAGE_URL, LOGO_URL};

/// Normalized scroll progress over `0..range` pixels, clamped to `0..=1`.
fn ramp(scroll_y: f64, range: f64) -> f64 {
    (scroll_y / range).clamp(0.0, 1.0)
}

/// Photo opacity: 1 at the top, 0 by 600px of scroll.
pub fn hero_opacity(scroll_y: f64) -> f64 {
    1.0 - ramp(scroll_y, 600.0)
}

/// Photo scale: 1 at the top, 0.8 by 600px of scroll.
pub fn hero_scale(scroll_y: f64) -> f64 {
    1.0 - 0.2 * ramp(scroll_y, 600.0)
}

/// Logo vertical offset: 0 at the top, -150px by 400px of scroll.
pub fn logo_offset(scroll_y: f64) -> f64 {
    -150.0 * ramp(scroll_y, 400.0)
}

/// Darken overlay alpha: 0 at the top, 0.9 by 500px of scroll.
pub fn darken_alpha(scroll_y: f64) -> f64 {
    0.9 * ramp(scroll_y, 500.0)
}

#[derive(Props, Clone, PartialEq)]
pub struct HeroProps {
    /// Current page scroll offset in pixels.
    pub scroll_y: f64,
    /// Whether the lightning flash is currently lit.
    pub flash: bool,
}

#[component]
pub fn Hero(props: HeroProps) -> Element {
    let opacity = hero_opacity(props.scroll_y);
    let scale = hero_scale(props.scroll_y);
    let logo_y = logo_offset(props.scroll_y);
    let darken = darken_alpha(props.scroll_y);
    let flash_opacity = if props.flash { 0.6 } else { 0.0 };

    rsx! {
        section { class: "hero-section",
            div { class: "hero-backdrop",
                img {
                    src: ARTIST_IMAGE_URL,
                    alt: "Pa$ty",
                    style: "opacity: {opacity}; transform: scale({scale});",
                }
                div {
                    class: "lightning-overlay",
                    style: "opacity: {flash_opacity};",
                }
            }
            div {
                class: "darken-overlay",
                style: "background: rgba(0, 0, 0, {darken});",
            }
            div { class: "hero-foreground",
                img {
                    class: "hero-logo",
                    src: LOGO_URL,
                    alt: "PA$TY logo",
                    style: "transform: translateY({logo_y}px);",
                }
                div { class: "scroll-hint" }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ramps_hit_their_endpoints() {
        assert_eq!(hero_opacity(0.0), 1.0);
        assert_eq!(hero_opacity(600.0), 0.0);
        assert_eq!(hero_scale(0.0), 1.0);
        assert_eq!(hero_scale(600.0), 0.8);
        assert_eq!(logo_offset(0.0), 0.0);
        assert_eq!(logo_offset(400.0), -150.0);
        assert_eq!(darken_alpha(0.0), 0.0);
        assert_eq!(darken_alpha(500.0), 0.9);
    }

    #[test]
    fn ramps_clamp_past_their_range() {
        assert_eq!(hero_opacity(5000.0), 0.0);
        assert_eq!(hero_scale(5000.0), 0.8);
        assert_eq!(logo_offset(5000.0), -150.0);
        assert_eq!(darken_alpha(5000.0), 0.9);
        // Negative offsets (overscroll bounce) stay at the resting pose.
        assert_eq!(hero_opacity(-50.0), 1.0);
        assert_eq!(darken_alpha(-50.0), 0.0);
    }

    #[test]
    fn midpoints_interpolate_linearly() {
        assert!((hero_opacity(300.0) - 0.5).abs() < 1e-9);
        assert!((hero_scale(300.0) - 0.9).abs() < 1e-9);
        assert!((logo_offset(200.0) - (-75.0)).abs() < 1e-9);
        assert!((darken_alpha(250.0) - 0.45).abs() < 1e-9);
    }
}
