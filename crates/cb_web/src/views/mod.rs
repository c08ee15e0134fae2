//! HTML rendering. Every function here is pure: records in, markup out.
//!
//! maud escapes all interpolated text and attribute values, so stored
//! fields are passed through as-is.

pub mod detail;
pub mod layout;
pub mod list;

use chrono::NaiveDateTime;

pub const SITE_NAME: &str = "Coffee and Bytes";
const SITE_BANNER: &str = "Coffee <and> Bytes";

pub(crate) fn timestamp(at: &NaiveDateTime) -> String {
    at.format("%Y-%m-%d %H:%M:%S").to_string()
}
