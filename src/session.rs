//! Session controller
//!
//! Drives one prompt → load → report → page round per iteration and loops
//! until the user declines to restart. The dataset is re-read from disk on
//! every iteration; nothing carries over between rounds.

use std::io::{BufRead, Write};
use std::path::PathBuf;

use crate::data::TripData;
use crate::error::Result;
use crate::{pager, prompt, report};

pub struct Session<R, W> {
    input: R,
    output: W,
    data_dir: PathBuf,
}

impl<R: BufRead, W: Write> Session<R, W> {
    /// Session over the given handles, reading city CSVs from the working
    /// directory.
    pub fn new(input: R, output: W) -> Self {
        Self::with_data_dir(input, output, PathBuf::from("."))
    }

    pub fn with_data_dir(input: R, output: W, data_dir: PathBuf) -> Self {
        Self {
            input,
            output,
            data_dir,
        }
    }

    pub fn run(&mut self) -> Result<()> {
        loop {
            let Some(selection) = prompt::filter_selection(&mut self.input, &mut self.output)?
            else {
                // Input stream closed mid-prompt: quit normally
                return Ok(());
            };

            let data = TripData::load(&selection, &self.data_dir)?;

            report::time::print(data.frame(), &mut self.output)?;
            report::station::print(data.frame(), &mut self.output)?;
            report::duration::print(data.frame(), &mut self.output)?;
            report::users::print(&data, &mut self.output)?;

            pager::page_raw_data(data.frame(), &mut self.input, &mut self.output)?;

            if !prompt::confirm(
                &mut self.input,
                &mut self.output,
                "\nWould you like to restart? Enter \"yes\" if you wish to continue.",
            )? {
                return Ok(());
            }
        }
    }
}
