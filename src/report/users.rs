//! User type, gender and birth year breakdowns

use std::io::Write;
use std::time::Instant;

use polars::prelude::*;

use crate::constants::columns;
use crate::data::{TripData, stats};
use crate::error::Result;
use crate::report::{fmt_or_na, write_section_footer};

/// Gender and birth-year statistics; only chicago and new york city carry
/// the underlying columns.
#[derive(Debug, PartialEq)]
pub struct Demographics {
    pub genders: Vec<(String, usize)>,
    pub earliest_birth_year: f64,
    pub most_recent_birth_year: f64,
    pub most_common_birth_year: Option<i64>,
}

#[derive(Debug, PartialEq)]
pub struct UserStats {
    /// (user type, count), descending frequency
    pub user_types: Vec<(String, usize)>,
    pub demographics: Option<Demographics>,
}

pub fn compute(data: &TripData) -> Result<UserStats> {
    let df = data.frame();
    let user_types = stats::value_counts(stats::string_values(df, columns::USER_TYPE)?);

    let demographics = if data.city().has_demographics() {
        let genders = stats::value_counts(stats::string_values(df, columns::GENDER)?);
        let years = stats::float_column(df, columns::BIRTH_YEAR)?;
        Some(Demographics {
            earliest_birth_year: years.min().unwrap_or(f64::NAN),
            most_recent_birth_year: years.max().unwrap_or(f64::NAN),
            // Birth years are integral; hash them as such for the mode
            most_common_birth_year: stats::mode(years.into_iter().flatten().map(|y| y as i64)),
            genders,
        })
    } else {
        None
    };

    Ok(UserStats {
        user_types,
        demographics,
    })
}

pub fn print<W: Write>(data: &TripData, out: &mut W) -> Result<()> {
    writeln!(out, "\nCalculating User Stats...\n")?;
    let started = Instant::now();

    let summary = compute(data)?;
    writeln!(out, "The type and number of users are:")?;
    for (label, count) in &summary.user_types {
        writeln!(out, "  {label}  {count}")?;
    }

    match summary.demographics {
        Some(demographics) => {
            writeln!(out, "\nThe user gender and number of each gender is:")?;
            for (label, count) in &demographics.genders {
                writeln!(out, "  {label}  {count}")?;
            }
            writeln!(
                out,
                "\nThe earliest birth year is {}.",
                demographics.earliest_birth_year
            )?;
            writeln!(
                out,
                "The most recent birth year is {}.",
                demographics.most_recent_birth_year
            )?;
            writeln!(
                out,
                "The most common birth year is {}.",
                fmt_or_na(demographics.most_common_birth_year)
            )?;
        }
        None => {
            writeln!(
                out,
                "\nSorry, there is no gender or birth year data for Washington users."
            )?;
        }
    }

    write_section_footer(out, started)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::filters::City;
    use polars::prelude::*;

    fn chicago_frame() -> DataFrame {
        df!(
            columns::USER_TYPE => ["Subscriber", "Customer", "Subscriber"],
            columns::GENDER => [Some("Male"), None, Some("Female")],
            columns::BIRTH_YEAR => [Some(1989i64), None, Some(1992)],
        )
        .unwrap()
    }

    #[test]
    fn test_chicago_demographics() {
        let data = TripData::from_frame(chicago_frame(), City::Chicago);
        let summary = compute(&data).unwrap();

        assert_eq!(
            summary.user_types,
            vec![("Subscriber".to_string(), 2), ("Customer".to_string(), 1)]
        );
        let demographics = summary.demographics.unwrap();
        assert_eq!(
            demographics.genders,
            vec![("Male".to_string(), 1), ("Female".to_string(), 1)]
        );
        assert_eq!(demographics.earliest_birth_year, 1989.0);
        assert_eq!(demographics.most_recent_birth_year, 1992.0);
        assert_eq!(demographics.most_common_birth_year, Some(1989));
    }

    #[test]
    fn test_washington_skips_demographics() {
        // Washington files carry no Gender/Birth Year columns at all
        let df = df!(columns::USER_TYPE => ["Subscriber", "Subscriber"]).unwrap();
        let data = TripData::from_frame(df, City::Washington);

        let summary = compute(&data).unwrap();
        assert_eq!(summary.demographics, None);

        let mut out = Vec::new();
        print(&data, &mut out).unwrap();
        let text = String::from_utf8(out).unwrap();
        assert!(text.contains("no gender or birth year data for Washington"));
        assert!(!text.contains("birth year is"));
    }

    #[test]
    fn test_empty_dataset_degenerates() {
        let df = df!(
            columns::USER_TYPE => Vec::<&str>::new(),
            columns::GENDER => Vec::<&str>::new(),
            columns::BIRTH_YEAR => Vec::<i64>::new(),
        )
        .unwrap();
        let data = TripData::from_frame(df, City::Chicago);

        let summary = compute(&data).unwrap();
        assert!(summary.user_types.is_empty());
        let demographics = summary.demographics.unwrap();
        assert!(demographics.earliest_birth_year.is_nan());
        assert!(demographics.most_recent_birth_year.is_nan());
        assert_eq!(demographics.most_common_birth_year, None);
    }
}
