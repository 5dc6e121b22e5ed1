//! Dataset loading and filtering
//!
//! Each session iteration reads the selected city's CSV from scratch into a
//! polars DataFrame, then narrows it to the requested month and day of week.
//! Nothing is cached across iterations and nothing is written back.

use std::path::Path;

use polars::prelude::*;

use crate::constants::{columns, load};
use crate::data::derive;
use crate::error::{ExploreError, Result};
use crate::filters::{City, DayFilter, FilterSelection, MonthFilter};

/// One city's trip records, already narrowed to the requested filters.
#[derive(Debug)]
pub struct TripData {
    df: DataFrame,
    city: City,
}

impl TripData {
    /// Read the city's CSV from `data_dir` and apply the month/day filters.
    pub fn load(selection: &FilterSelection, data_dir: &Path) -> Result<Self> {
        let path = data_dir.join(selection.city.file_name());
        if !path.is_file() {
            return Err(ExploreError::MissingDataFile {
                city: selection.city.to_string(),
                path: path.display().to_string(),
            });
        }

        let df = LazyCsvReader::new(&path)
            .with_has_header(true)
            .with_infer_schema_length(Some(load::INFER_SCHEMA_ROWS))
            .finish()?
            .collect()?;
        log::info!(
            "loaded {} rows for {} from {}",
            df.height(),
            selection.city,
            path.display()
        );

        let df = apply_filters(df, selection)?;
        log::info!("{} rows after month/day filters", df.height());

        Ok(Self {
            df,
            city: selection.city,
        })
    }

    /// Build directly from a frame; the statistics tests skip the CSV step.
    #[cfg(test)]
    pub fn from_frame(df: DataFrame, city: City) -> Self {
        Self { df, city }
    }

    pub fn frame(&self) -> &DataFrame {
        &self.df
    }

    pub fn city(&self) -> City {
        self.city
    }
}

/// Narrow `df` to the requested month and day. Each active filter appends
/// its derived column before masking, so the pager shows what was matched.
fn apply_filters(mut df: DataFrame, selection: &FilterSelection) -> Result<DataFrame> {
    if let MonthFilter::Only(month) = selection.month {
        let months = derive::start_months(&df)?;
        df.with_column(Series::new(columns::MONTH.into(), &months))?;

        let wanted = month.ordinal();
        let mask: Vec<bool> = months.iter().map(|&m| m == wanted).collect();
        df = df.filter(&BooleanChunked::from_slice("mask".into(), &mask))?;
    }

    if let DayFilter::Only(day) = selection.day {
        let names = derive::start_day_names(&df)?;
        df.with_column(Series::new(columns::DAY_OF_WEEK.into(), &names))?;

        let mask: Vec<bool> = names.iter().map(|&n| n == day.name()).collect();
        df = df.filter(&BooleanChunked::from_slice("mask".into(), &mask))?;
    }

    Ok(df)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::filters::{Day, Month};
    use std::io::Write;
    use tempfile::TempDir;

    /// Three June trips (a Monday and two Thursdays) and one January trip.
    const CHICAGO_CSV: &str = "\
Start Time,End Station,Start Station,Trip Duration,User Type,Gender,Birth Year
2017-06-05 08:15:00,Clark St,State St,300,Subscriber,Male,1989
2017-06-01 17:30:00,State St,Clark St,540,Customer,Female,1992
2017-06-08 09:00:00,Clark St,State St,420,Subscriber,Male,1989
2017-01-02 12:00:00,Wabash Ave,State St,660,Subscriber,Female,1975
";

    fn chicago_dir() -> TempDir {
        let dir = TempDir::new().unwrap();
        let mut file = std::fs::File::create(dir.path().join("chicago.csv")).unwrap();
        file.write_all(CHICAGO_CSV.as_bytes()).unwrap();
        dir
    }

    fn selection(month: MonthFilter, day: DayFilter) -> FilterSelection {
        FilterSelection {
            city: City::Chicago,
            month,
            day,
        }
    }

    #[test]
    fn test_unfiltered_load_keeps_everything() {
        let dir = chicago_dir();
        let data =
            TripData::load(&selection(MonthFilter::All, DayFilter::All), dir.path()).unwrap();
        assert_eq!(data.frame().height(), 4);
        assert_eq!(data.city(), City::Chicago);
        // No filter, no derived columns
        assert!(data.frame().column(columns::MONTH).is_err());
        assert!(data.frame().column(columns::DAY_OF_WEEK).is_err());
    }

    #[test]
    fn test_month_filter_keeps_only_requested_month() {
        let dir = chicago_dir();
        let data = TripData::load(
            &selection(MonthFilter::Only(Month::June), DayFilter::All),
            dir.path(),
        )
        .unwrap();
        assert_eq!(data.frame().height(), 3);
        let months = derive::start_months(data.frame()).unwrap();
        assert!(months.iter().all(|&m| m == 6));
        // Derived column persists on the filtered frame
        assert!(data.frame().column(columns::MONTH).is_ok());
    }

    #[test]
    fn test_day_filter_keeps_only_requested_day() {
        let dir = chicago_dir();
        let data = TripData::load(
            &selection(MonthFilter::All, DayFilter::Only(Day::Thursday)),
            dir.path(),
        )
        .unwrap();
        assert_eq!(data.frame().height(), 2);
        let names = derive::start_day_names(data.frame()).unwrap();
        assert!(names.iter().all(|&n| n == "Thursday"));
    }

    #[test]
    fn test_combined_filters() {
        let dir = chicago_dir();
        let data = TripData::load(
            &selection(MonthFilter::Only(Month::June), DayFilter::Only(Day::Monday)),
            dir.path(),
        )
        .unwrap();
        assert_eq!(data.frame().height(), 1);
    }

    #[test]
    fn test_filter_to_empty_is_not_an_error() {
        let dir = chicago_dir();
        let data = TripData::load(
            &selection(MonthFilter::Only(Month::February), DayFilter::All),
            dir.path(),
        )
        .unwrap();
        assert_eq!(data.frame().height(), 0);
    }

    #[test]
    fn test_missing_file_is_fatal() {
        let dir = TempDir::new().unwrap();
        let err =
            TripData::load(&selection(MonthFilter::All, DayFilter::All), dir.path()).unwrap_err();
        assert!(matches!(err, ExploreError::MissingDataFile { .. }));
    }
}
