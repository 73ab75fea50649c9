//! Input event adapters
//!
//! Everything between a raw UI change event and the store: debounced
//! delivery, shape-agnostic field mutators, and date display formatting.

pub mod dates;
pub mod debounce;
pub mod mutators;

pub use dates::format_display_date;
pub use debounce::{Debouncer, DEFAULT_DEBOUNCE};
pub use mutators::{select_handler, text_handler, toggle_handler, TextChange};
