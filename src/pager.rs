//! Raw data pager
//!
//! Shows the filtered dataset five rows at a time. Anything other than a
//! case-insensitive "yes" (including a closed input stream) stops paging;
//! running past the last row stops without a further prompt.

use std::io::{BufRead, Write};

use polars::prelude::DataFrame;

use crate::constants::pager::PAGE_SIZE;
use crate::error::Result;
use crate::prompt::confirm;

pub fn page_raw_data<R: BufRead, W: Write>(df: &DataFrame, input: &mut R, out: &mut W) -> Result<()> {
    if !confirm(
        input,
        out,
        "\nWould you like to view 5 rows of trip data? Enter \"yes\" or \"no\".",
    )? {
        return Ok(());
    }

    let mut offset = 0;
    while offset < df.height() {
        writeln!(out, "\n5 rows of the requested data:")?;
        writeln!(out, "{}", df.slice(offset as i64, PAGE_SIZE))?;
        offset += PAGE_SIZE;

        if offset >= df.height() {
            break;
        }
        if !confirm(
            input,
            out,
            "\nDo you wish to view the next 5 rows? Enter \"yes\" or \"no\".",
        )? {
            break;
        }
    }
    Ok(())
}
