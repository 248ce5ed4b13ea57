//! Color constants for the PA$TY aesthetic.
//!
//! Black stage, acid-green accent, newsprint white for the press kit.

#![allow(dead_code)]

// === STAGE (Backgrounds) ===
pub const STAGE_BLACK: &str = "#000000";
pub const STAGE_PANEL: &str = "#111827";
pub const STAGE_BORDER: &str = "#1f2937";

// === ACID GREEN (Accent, CTAs, prices) ===
pub const ACID: &str = "#22c55e";
pub const ACID_BRIGHT: &str = "#4ade80";
pub const ACID_GLOW: &str = "rgba(34, 197, 94, 0.3)";

// === TEXT ===
pub const TEXT_PRIMARY: &str = "#ffffff";
pub const TEXT_SECONDARY: &str = "#9ca3af";
pub const TEXT_MUTED: &str = "#4b5563";

// === PRESS KIT (print-friendly inversion) ===
pub const PAPER_WHITE: &str = "#ffffff";
pub const INK_BLACK: &str = "#000000";

// === SEMANTIC ===
pub const DANGER: &str = "#ef4444";
