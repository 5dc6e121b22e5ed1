//! Most frequent times of travel

use std::io::Write;
use std::time::Instant;

use polars::prelude::DataFrame;

use crate::data::{derive, stats};
use crate::error::Result;
use crate::report::{fmt_or_na, write_section_footer};

/// Modes of the three columns derived from Start Time. All `None` when the
/// filtered dataset has no rows.
#[derive(Debug, PartialEq, Eq)]
pub struct TravelTimeStats {
    pub month: Option<u32>,
    pub day: Option<&'static str>,
    pub hour: Option<u32>,
}

/// Re-derives month, day name and hour from Start Time on every call, even
/// when the loader already appended filter columns.
pub fn compute(df: &DataFrame) -> Result<TravelTimeStats> {
    Ok(TravelTimeStats {
        month: stats::mode(derive::start_months(df)?),
        day: stats::mode(derive::start_day_names(df)?),
        hour: stats::mode(derive::start_hours(df)?),
    })
}

pub fn print<W: Write>(df: &DataFrame, out: &mut W) -> Result<()> {
    writeln!(out, "\nCalculating The Most Frequent Times of Travel...\n")?;
    let started = Instant::now();

    let summary = compute(df)?;
    writeln!(out, "The most popular month is: {}", fmt_or_na(summary.month))?;
    writeln!(
        out,
        "The most popular day of the week is: {}",
        fmt_or_na(summary.day)
    )?;
    writeln!(
        out,
        "The most popular hour (in 24hr time) is: {}",
        fmt_or_na(summary.hour)
    )?;

    write_section_footer(out, started)?;
    Ok(())
}
