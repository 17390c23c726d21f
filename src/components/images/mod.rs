//! Image handling components
//!
//! Display Drive-hosted photos through the fallback resolver.

mod resilient_image;

pub use resilient_image::ResilientImage;
