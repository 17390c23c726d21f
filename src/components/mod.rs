//! UI Components for Anchetas Bendición.

pub mod cards;
mod category_pills;
pub mod images;
mod whatsapp_button;

pub use category_pills::CategoryPills;
pub use whatsapp_button::WhatsAppButton;
