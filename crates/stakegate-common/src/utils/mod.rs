//! Utility functions and helpers

pub mod decimal;
mod time;

pub use decimal::{parse_decimal, to_plain_string};
pub use time::{add_seconds, seconds_to_millis};
