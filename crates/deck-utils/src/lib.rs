//! Shared utilities: tracing setup and display formatting

pub mod format;
pub mod logging;

pub use format::{
    currency_symbol, format_change, format_compact, format_number, format_price, format_time_ago,
    format_volume,
};
pub use logging::init_tracing;
