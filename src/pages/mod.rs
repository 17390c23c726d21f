//! Page components for Anchetas Bendición.

mod catalog;

pub use catalog::Catalog;
