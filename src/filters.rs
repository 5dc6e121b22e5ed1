//! Filter selection types
//!
//! The (city, month, day) triple chosen at the prompt. The city→file,
//! month-name→ordinal and day-name tables are fixed `match` arms on these
//! enums rather than mutable global state.

use std::fmt;

/// One of the three supported cities. Always concrete in a selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum City {
    Chicago,
    NewYorkCity,
    Washington,
}

impl City {
    /// Parse user input, case-insensitively, against the city whitelist.
    pub fn from_input(input: &str) -> Option<Self> {
        match input.trim().to_lowercase().as_str() {
            "chicago" => Some(City::Chicago),
            "new york city" => Some(City::NewYorkCity),
            "washington" => Some(City::Washington),
            _ => None,
        }
    }

    /// Backing CSV file name for this city.
    pub fn file_name(self) -> &'static str {
        match self {
            City::Chicago => "chicago.csv",
            City::NewYorkCity => "new_york_city.csv",
            City::Washington => "washington.csv",
        }
    }

    /// Whether the city's file carries the Gender and Birth Year columns.
    /// Washington's does not.
    pub fn has_demographics(self) -> bool {
        !matches!(self, City::Washington)
    }
}

impl fmt::Display for City {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            City::Chicago => "chicago",
            City::NewYorkCity => "new york city",
            City::Washington => "washington",
        };
        write!(f, "{name}")
    }
}

/// Months covered by the datasets (the files span January through June).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Month {
    January,
    February,
    March,
    April,
    May,
    June,
}

impl Month {
    pub fn from_input(input: &str) -> Option<Self> {
        match input.trim().to_lowercase().as_str() {
            "january" => Some(Month::January),
            "february" => Some(Month::February),
            "march" => Some(Month::March),
            "april" => Some(Month::April),
            "may" => Some(Month::May),
            "june" => Some(Month::June),
            _ => None,
        }
    }

    /// Calendar ordinal, January = 1.
    pub fn ordinal(self) -> u32 {
        match self {
            Month::January => 1,
            Month::February => 2,
            Month::March => 3,
            Month::April => 4,
            Month::May => 5,
            Month::June => 6,
        }
    }
}

/// Days of the week, title-cased to match derived day names.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Day {
    Monday,
    Tuesday,
    Wednesday,
    Thursday,
    Friday,
    Saturday,
    Sunday,
}

impl Day {
    pub fn from_input(input: &str) -> Option<Self> {
        match input.trim().to_lowercase().as_str() {
            "monday" => Some(Day::Monday),
            "tuesday" => Some(Day::Tuesday),
            "wednesday" => Some(Day::Wednesday),
            "thursday" => Some(Day::Thursday),
            "friday" => Some(Day::Friday),
            "saturday" => Some(Day::Saturday),
            "sunday" => Some(Day::Sunday),
            _ => None,
        }
    }

    /// Full English name, e.g. "Monday".
    pub fn name(self) -> &'static str {
        match self {
            Day::Monday => "Monday",
            Day::Tuesday => "Tuesday",
            Day::Wednesday => "Wednesday",
            Day::Thursday => "Thursday",
            Day::Friday => "Friday",
            Day::Saturday => "Saturday",
            Day::Sunday => "Sunday",
        }
    }
}

/// Month restriction: a concrete month or no restriction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MonthFilter {
    All,
    Only(Month),
}

impl MonthFilter {
    pub fn from_input(input: &str) -> Option<Self> {
        if input.trim().eq_ignore_ascii_case("all") {
            return Some(MonthFilter::All);
        }
        Month::from_input(input).map(MonthFilter::Only)
    }
}

/// Day-of-week restriction: a concrete day or no restriction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DayFilter {
    All,
    Only(Day),
}

impl DayFilter {
    pub fn from_input(input: &str) -> Option<Self> {
        if input.trim().eq_ignore_ascii_case("all") {
            return Some(DayFilter::All);
        }
        Day::from_input(input).map(DayFilter::Only)
    }
}

/// The complete selection produced by one round of prompting.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FilterSelection {
    pub city: City,
    pub month: MonthFilter,
    pub day: DayFilter,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_city_parsing_is_case_insensitive() {
        assert_eq!(City::from_input("Chicago"), Some(City::Chicago));
        assert_eq!(City::from_input("CHICAGO"), Some(City::Chicago));
        assert_eq!(City::from_input("  new York City "), Some(City::NewYorkCity));
        assert_eq!(City::from_input("washington"), Some(City::Washington));
        assert_eq!(City::from_input("boston"), None);
        assert_eq!(City::from_input(""), None);
    }

    #[test]
    fn test_month_whitelist() {
        assert_eq!(MonthFilter::from_input("ALL"), Some(MonthFilter::All));
        assert_eq!(
            MonthFilter::from_input("February"),
            Some(MonthFilter::Only(Month::February))
        );
        // Months outside the dataset range are rejected
        assert_eq!(MonthFilter::from_input("july"), None);
        assert_eq!(MonthFilter::from_input("jan"), None);
    }

    #[test]
    fn test_day_whitelist() {
        assert_eq!(DayFilter::from_input("all"), Some(DayFilter::All));
        assert_eq!(
            DayFilter::from_input("SUNDAY"),
            Some(DayFilter::Only(Day::Sunday))
        );
        assert_eq!(DayFilter::from_input("mon"), None);
        assert_eq!(DayFilter::from_input("someday"), None);
    }

    #[test]
    fn test_month_ordinals() {
        assert_eq!(Month::January.ordinal(), 1);
        assert_eq!(Month::June.ordinal(), 6);
    }

    #[test]
    fn test_city_file_mapping() {
        assert_eq!(City::Chicago.file_name(), "chicago.csv");
        assert_eq!(City::NewYorkCity.file_name(), "new_york_city.csv");
        assert_eq!(City::Washington.file_name(), "washington.csv");
        assert!(City::Chicago.has_demographics());
        assert!(City::NewYorkCity.has_demographics());
        assert!(!City::Washington.has_demographics());
    }
}
