//! Product Card System
//!
//! The catalog card and its detail modal.

mod ancheta_card;
mod detail_modal;

pub use ancheta_card::AnchetaCard;
pub use detail_modal::DetailModal;
