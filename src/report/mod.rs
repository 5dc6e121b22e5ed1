//! Statistics reporters
//!
//! Four stateless sections printed in a fixed order over the filtered
//! dataset. Each module exposes a `compute` returning a plain summary value
//! (so tests never scrape stdout) and a `print` that frames the section the
//! same way: heading, statistics, elapsed time, dashed rule.

pub mod duration;
pub mod station;
pub mod time;
pub mod users;

use std::fmt::Display;
use std::io::Write;
use std::time::Instant;

use crate::constants::report::SEPARATOR_WIDTH;

/// Undefined statistics (empty dataset) render as "n/a".
pub(crate) fn fmt_or_na<T: Display>(value: Option<T>) -> String {
    match value {
        Some(v) => v.to_string(),
        None => "n/a".to_string(),
    }
}

pub(crate) fn write_section_footer<W: Write>(
    out: &mut W,
    started: Instant,
) -> std::io::Result<()> {
    writeln!(out, "\nThis took {} seconds.", started.elapsed().as_secs_f64())?;
    writeln!(out, "{}", "-".repeat(SEPARATOR_WIDTH))
}
