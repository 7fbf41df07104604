//! Utility functions and helpers

pub mod logging;
mod time;

pub use logging::{env_filter, init_tracing};
pub use time::{format_micros, to_micros, MICROS_PER_SECOND};
