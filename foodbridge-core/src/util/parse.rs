use crate::entities::{parse_date, Timestamp};

/// The interpretation of a boolean status query parameter.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusParam {
    /// No constraint
    Any,
    Is(bool),
    /// An unrecognized value that no record can ever match
    Unmatchable,
}

pub fn parse_status_param(param: Option<&str>) -> StatusParam {
    let Some(param) = param.map(str::trim).filter(|p| !p.is_empty()) else {
        return StatusParam::Any;
    };
    match param.to_lowercase().as_str() {
        "true" | "1" => StatusParam::Is(true),
        "false" | "0" => StatusParam::Is(false),
        _ => StatusParam::Unmatchable,
    }
}

/// Parses an inclusive lower time bound.
///
/// A plain calendar date (`YYYY-MM-DD`) starts at the first
/// millisecond of that day, RFC 3339 date-times are taken
/// as they are.
pub fn parse_lower_time_bound(s: &str) -> Option<Timestamp> {
    parse_date(s)
        .ok()
        .map(Timestamp::start_of_day)
        .or_else(|| Timestamp::parse_rfc3339(s).ok())
}

/// Parses an inclusive upper time bound.
///
/// A plain calendar date (`YYYY-MM-DD`) includes the whole day.
pub fn parse_upper_time_bound(s: &str) -> Option<Timestamp> {
    parse_date(s)
        .ok()
        .map(Timestamp::end_of_day)
        .or_else(|| Timestamp::parse_rfc3339(s).ok())
}
