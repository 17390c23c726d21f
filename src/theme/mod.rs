//! Theme for Anchetas Bendición.
//!
//! Warm rose/amber palette injected as one global stylesheet.

mod colors;
mod styles;

pub use styles::GLOBAL_STYLES;
