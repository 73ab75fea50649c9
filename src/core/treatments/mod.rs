//! Treatment collection engine
//!
//! Manages the ordered treatment list (method + target area) and derives
//! the numbered preview text from it. List operations are pure and
//! forgiving: an absent method is always a no-op, never a fault, and
//! unchanged inputs come back by identity (`Cow::Borrowed`).

pub mod engine;
pub mod preview;

pub use engine::{set_area, toggle_method};
pub use preview::compute_preview;
