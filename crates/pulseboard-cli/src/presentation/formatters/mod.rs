pub mod number;
pub mod time;

pub use number::{format_change, format_compact, format_optional_count, format_percent};
pub use time::{format_date, format_relative_time, format_timestamp};
