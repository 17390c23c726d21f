//! Color constants for the Anchetas Bendición palette.
//!
//! Warm gift-shop aesthetic: rose and pink over cream gradients.

#![allow(dead_code)]

// === BACKGROUNDS ===
pub const CREAM_AMBER: &str = "#fffbeb";
pub const CREAM_ROSE: &str = "#fff1f2";
pub const CREAM_PINK: &str = "#fdf2f8";

// === ROSE (Primary, Actions, Accents) ===
pub const ROSE: &str = "#fb7185";
pub const ROSE_DEEP: &str = "#f43f5e";
pub const ROSE_BORDER: &str = "#ffe4e6";
pub const PINK: &str = "#f472b6";

// === GREEN (WhatsApp) ===
pub const GREEN: &str = "#4ade80";
pub const EMERALD: &str = "#10b981";

// === TEXT ===
pub const TEXT_PRIMARY: &str = "#1f2937";
pub const TEXT_SECONDARY: &str = "#4b5563";
pub const TEXT_MUTED: &str = "#9ca3af";
