use chrono::{DateTime, NaiveDate, NaiveTime, Utc};

use crate::server::error::AppError;

/// Parses an RFC 3339 timestamp or a plain `YYYY-MM-DD` date, taken as midnight UTC.
///
/// Returns `BadRequest` naming the parameter for anything else.
pub fn parse_datetime(name: &str, value: Option<&str>) -> Result<Option<DateTime<Utc>>, AppError> {
    let Some(value) = value.map(str::trim).filter(|v| !v.is_empty()) else {
        return Ok(None);
    };

    if let Ok(at) = DateTime::parse_from_rfc3339(value) {
        return Ok(Some(at.with_timezone(&Utc)));
    }

    NaiveDate::parse_from_str(value, "%Y-%m-%d")
        .map(|date| Some(date.and_time(NaiveTime::MIN).and_utc()))
        .map_err(|_| AppError::BadRequest(format!("Invalid date '{}' in parameter '{}'", value, name)))
}

/// Splits a comma separated query value into ids, ignoring blanks.
///
/// Returns `BadRequest` naming the parameter when an entry is not a number.
pub fn parse_id_list(name: &str, value: Option<&str>) -> Result<Vec<i32>, AppError> {
    parse_str_list(value)
        .into_iter()
        .map(|item| {
            item.parse::<i32>().map_err(|_| {
                AppError::BadRequest(format!("Invalid id '{}' in parameter '{}'", item, name))
            })
        })
        .collect()
}

/// Splits a comma separated query value into trimmed, non-empty entries.
pub fn parse_str_list(value: Option<&str>) -> Vec<String> {
    value
        .map(|v| {
            v.split(',')
                .map(str::trim)
                .filter(|s| !s.is_empty())
                .map(str::to_string)
                .collect()
        })
        .unwrap_or_default()
}
