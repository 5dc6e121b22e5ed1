//! Most popular stations and trip

use std::io::Write;
use std::time::Instant;

use polars::prelude::DataFrame;

use crate::constants::columns;
use crate::data::stats;
use crate::error::Result;
use crate::report::{fmt_or_na, write_section_footer};

#[derive(Debug, PartialEq, Eq)]
pub struct StationStats {
    pub start: Option<String>,
    pub end: Option<String>,
    /// Most frequent (start, end) pair
    pub trip: Option<(String, String)>,
}

pub fn compute(df: &DataFrame) -> Result<StationStats> {
    let start = stats::mode(stats::string_values(df, columns::START_STATION)?);
    let end = stats::mode(stats::string_values(df, columns::END_STATION)?);

    // Group pairs row by row; rows with a null at either end don't count
    let starts = stats::string_cells(df, columns::START_STATION)?;
    let ends = stats::string_cells(df, columns::END_STATION)?;
    let pairs = starts
        .into_iter()
        .zip(ends)
        .filter_map(|(s, e)| Some((s?, e?)));
    let trip = stats::mode(pairs);

    Ok(StationStats { start, end, trip })
}

pub fn print<W: Write>(df: &DataFrame, out: &mut W) -> Result<()> {
    writeln!(out, "\nCalculating The Most Popular Stations and Trips...\n")?;
    let started = Instant::now();

    let summary = compute(df)?;
    writeln!(
        out,
        "The most popular starting station is: {}",
        fmt_or_na(summary.start)
    )?;
    writeln!(
        out,
        "The most popular ending station is: {}",
        fmt_or_na(summary.end)
    )?;
    match summary.trip {
        Some((from, to)) => writeln!(out, "The most frequent trip taken is: {from} -> {to}")?,
        None => writeln!(out, "The most frequent trip taken is: n/a")?,
    }

    write_section_footer(out, started)?;
    Ok(())
}
