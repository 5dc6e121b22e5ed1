//! Derived columns from the Start Time timestamp
//!
//! Month ordinal, full day name and hour of day, always recomputed from the
//! raw Start Time strings. Derivation is deterministic and idempotent.

use chrono::{Datelike, NaiveDateTime, Timelike, Weekday};
use polars::prelude::*;

use crate::constants::columns;
use crate::error::{ExploreError, Result};

/// Timestamp layouts accepted in the Start Time column. The city exports use
/// the first; the others cover hand-built fixtures.
const START_TIME_FORMATS: [&str; 2] = ["%Y-%m-%d %H:%M:%S", "%Y-%m-%d %H:%M"];

/// Parse every Start Time cell. A missing column or a malformed cell is
/// fatal and propagates to the caller.
pub fn start_times(df: &DataFrame) -> Result<Vec<NaiveDateTime>> {
    let series = df
        .column(columns::START_TIME)
        .map_err(|_| ExploreError::ColumnNotFound {
            column: columns::START_TIME.to_string(),
        })?
        .as_materialized_series()
        .clone();

    let strings = series.str()?;
    strings
        .into_iter()
        .map(|cell| parse_timestamp(cell.unwrap_or("")))
        .collect()
}

fn parse_timestamp(raw: &str) -> Result<NaiveDateTime> {
    let trimmed = raw.trim();
    for format in START_TIME_FORMATS {
        if let Ok(parsed) = NaiveDateTime::parse_from_str(trimmed, format) {
            return Ok(parsed);
        }
    }
    // Date-only layout has no time component and needs its own parser
    if let Ok(date) = chrono::NaiveDate::parse_from_str(trimmed, "%Y-%m-%d") {
        return Ok(date.and_time(chrono::NaiveTime::MIN));
    }
    Err(ExploreError::InvalidTimestamp {
        value: raw.to_string(),
    })
}

/// Calendar month ordinal (January = 1) per row.
pub fn start_months(df: &DataFrame) -> Result<Vec<u32>> {
    Ok(start_times(df)?.iter().map(|ts| ts.month()).collect())
}

/// Full English day name per row, e.g. "Monday".
pub fn start_day_names(df: &DataFrame) -> Result<Vec<&'static str>> {
    Ok(start_times(df)?
        .iter()
        .map(|ts| day_name(ts.weekday()))
        .collect())
}

/// Hour of day (0..=23) per row.
pub fn start_hours(df: &DataFrame) -> Result<Vec<u32>> {
    Ok(start_times(df)?.iter().map(|ts| ts.hour()).collect())
}

fn day_name(weekday: Weekday) -> &'static str {
    match weekday {
        Weekday::Mon => "Monday",
        Weekday::Tue => "Tuesday",
        Weekday::Wed => "Wednesday",
        Weekday::Thu => "Thursday",
        Weekday::Fri => "Friday",
        Weekday::Sat => "Saturday",
        Weekday::Sun => "Sunday",
    }
}
