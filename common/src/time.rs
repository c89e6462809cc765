//! Delivery times are naive wall-clock timestamps with minute precision.
//! Two deliveries conflict only when their times are exactly equal.

use chrono::NaiveDateTime;

use crate::error::TimeParseError;

/// Format used by order requests, e.g. `01-10-2021 15:00`.
pub const DELIVERY_TIME_FORMAT: &str = "%d-%m-%Y %H:%M";

const ISO_MINUTE_FORMAT: &str = "%Y-%m-%dT%H:%M";

/// Parses a delivery time in request format or ISO-8601 minute format.
pub fn parse_delivery_time(s: &str) -> Result<NaiveDateTime, TimeParseError> {
    let trimmed = s.trim();

    [DELIVERY_TIME_FORMAT, ISO_MINUTE_FORMAT]
        .iter()
        .find_map(|fmt| NaiveDateTime::parse_from_str(trimmed, fmt).ok())
        .ok_or_else(|| TimeParseError {
            input: s.to_string(),
        })
}

pub fn format_delivery_time(time: &NaiveDateTime) -> String {
    time.format(DELIVERY_TIME_FORMAT).to_string()
}
