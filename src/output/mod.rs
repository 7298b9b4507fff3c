//! Terminal output formatting
//!
//! Pure display tokens in `formatters`, ANSI rendering in `display`.

pub mod display;
pub mod formatters;

pub use display::{print_game, print_histogram, print_message};
pub use formatters::{Cell, Highlight};
