//! WhatsApp deep links for order conversations.
//!
//! Pure string construction: a fixed `wa.me` base, the shop's phone
//! number, and the item's outreach message URL-encoded verbatim.

/// The shop's WhatsApp number, international format without `+`.
pub const ORDER_PHONE: &str = "573104418272";

const WA_BASE: &str = "https://wa.me";

/// Build a `wa.me` link that opens a chat with `phone` pre-filled with
/// `message`.
pub fn order_link(phone: &str, message: &str) -> String {
    format!("{WA_BASE}/{phone}?text={}", urlencoding::encode(message))
}
