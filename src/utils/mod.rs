//! Utility functions for formatting and process introspection.

mod formatting;

pub use formatting::{
    format_day_header, format_memory_mb, format_time_label, get_current_memory_mb,
};
