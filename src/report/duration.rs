//! Total and average trip duration

use std::io::Write;
use std::time::Instant;

use polars::prelude::*;

use crate::constants::columns;
use crate::data::stats;
use crate::error::Result;
use crate::report::write_section_footer;

/// Durations are stored in seconds; totals are reported in hours and the
/// average in minutes, unrounded. An empty dataset gives a zero total and a
/// NaN average, matching the underlying aggregations.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DurationStats {
    pub total_hours: f64,
    pub mean_minutes: f64,
}

pub fn compute(df: &DataFrame) -> Result<DurationStats> {
    let durations = stats::float_column(df, columns::TRIP_DURATION)?;
    Ok(DurationStats {
        total_hours: durations.sum().unwrap_or(0.0) / 3600.0,
        mean_minutes: durations.mean().map_or(f64::NAN, |mean| mean / 60.0),
    })
}

pub fn print<W: Write>(df: &DataFrame, out: &mut W) -> Result<()> {
    writeln!(out, "\nCalculating Trip Duration...\n")?;
    let started = Instant::now();

    let summary = compute(df)?;
    writeln!(
        out,
        "The total number of hours travelled during this time period is: {}",
        summary.total_hours
    )?;
    writeln!(
        out,
        "The average number of minutes spent traveling is: {}",
        summary.mean_minutes
    )?;

    write_section_footer(out, started)?;
    Ok(())
}
