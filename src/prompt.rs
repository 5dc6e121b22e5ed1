//! Interactive filter prompting
//!
//! A synchronous read-evaluate-reprompt loop: each question repeats until
//! the answer matches its whitelist. There is no retry bound; the loop only
//! ends on a valid answer or on end-of-input, which the session treats as a
//! normal quit rather than an error.

use std::io::{BufRead, Write};

use crate::error::Result;
use crate::filters::{City, DayFilter, FilterSelection, MonthFilter};

/// Ask for city, month and day. `Ok(None)` means the input stream closed.
pub fn filter_selection<R: BufRead, W: Write>(
    input: &mut R,
    out: &mut W,
) -> Result<Option<FilterSelection>> {
    writeln!(out, "\nHello! Let's explore some US bikeshare data!")?;

    let Some(city) = prompt_until(
        input,
        out,
        "\nPlease choose which city (Chicago, New York City, or Washington) you would like data on.",
        "I'm sorry, that is not a valid city. Please enter Chicago, New York City, or Washington.",
        City::from_input,
    )?
    else {
        return Ok(None);
    };

    let Some(month) = prompt_until(
        input,
        out,
        "\nPlease enter a month January through June, or \"all\" for every month.",
        "I'm sorry, that is not a valid month selection.",
        MonthFilter::from_input,
    )?
    else {
        return Ok(None);
    };

    let Some(day) = prompt_until(
        input,
        out,
        "\nPlease enter a day of the week, or \"all\" for every day.",
        "I'm sorry, that is not a valid day.",
        DayFilter::from_input,
    )?
    else {
        return Ok(None);
    };

    writeln!(out, "{}", "-".repeat(crate::constants::report::SEPARATOR_WIDTH))?;
    Ok(Some(FilterSelection { city, month, day }))
}

/// Repeat `question` until `parse` accepts the answer. `Ok(None)` on
/// end-of-input.
fn prompt_until<R, W, T>(
    input: &mut R,
    out: &mut W,
    question: &str,
    error_message: &str,
    parse: impl Fn(&str) -> Option<T>,
) -> Result<Option<T>>
where
    R: BufRead,
    W: Write,
{
    writeln!(out, "{question}")?;
    out.flush()?;

    loop {
        let mut line = String::new();
        if input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        if let Some(value) = parse(&line) {
            return Ok(Some(value));
        }
        writeln!(out, "{error_message}")?;
        writeln!(out, "{question}")?;
        out.flush()?;
    }
}

/// One yes/no question. Anything but a case-insensitive "yes" is a no, and
/// so is end-of-input.
pub fn confirm<R: BufRead, W: Write>(input: &mut R, out: &mut W, question: &str) -> Result<bool> {
    writeln!(out, "{question}")?;
    out.flush()?;

    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Ok(false);
    }
    Ok(line.trim().eq_ignore_ascii_case("yes"))
}
