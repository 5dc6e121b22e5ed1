//! Frequency and aggregation helpers over dataset columns
//!
//! All "most frequent" computations share one tie-break rule: ties go to the
//! value seen first in the column's natural order.

use std::collections::HashMap;
use std::hash::Hash;

use polars::prelude::*;

use crate::error::{ExploreError, Result};

/// (value, count) pairs ordered by descending count, ties by first
/// appearance. Drives both the mode lookups and the printed distributions.
pub fn value_counts<T, I>(values: I) -> Vec<(T, usize)>
where
    T: Eq + Hash + Clone,
    I: IntoIterator<Item = T>,
{
    let mut counts: HashMap<T, (usize, usize)> = HashMap::new();
    for (index, value) in values.into_iter().enumerate() {
        let entry = counts.entry(value).or_insert((0, index));
        entry.0 += 1;
    }

    let mut pairs: Vec<(T, usize, usize)> = counts
        .into_iter()
        .map(|(value, (count, first_seen))| (value, count, first_seen))
        .collect();
    pairs.sort_by(|(_, count_a, seen_a), (_, count_b, seen_b)| {
        count_b.cmp(count_a).then(seen_a.cmp(seen_b))
    });
    pairs.into_iter().map(|(value, count, _)| (value, count)).collect()
}

/// Statistical mode. `None` on an empty column.
pub fn mode<T, I>(values: I) -> Option<T>
where
    T: Eq + Hash + Clone,
    I: IntoIterator<Item = T>,
{
    value_counts(values).into_iter().next().map(|(v, _)| v)
}

/// Non-null values of a string column, in row order.
pub fn string_values(df: &DataFrame, column: &str) -> Result<Vec<String>> {
    let series = column_series(df, column)?;
    let strings = series.str()?;
    Ok(strings
        .into_iter()
        .flatten()
        .map(|s| s.to_string())
        .collect())
}

/// Row-aligned optional values of a string column, nulls preserved.
pub fn string_cells(df: &DataFrame, column: &str) -> Result<Vec<Option<String>>> {
    let series = column_series(df, column)?;
    let strings = series.str()?;
    Ok(strings
        .into_iter()
        .map(|cell| cell.map(|s| s.to_string()))
        .collect())
}

/// A column cast to f64 for numeric aggregation, nulls intact.
pub fn float_column(df: &DataFrame, column: &str) -> Result<Float64Chunked> {
    let series = column_series(df, column)?;
    let floats = series.cast(&DataType::Float64)?;
    Ok(floats.f64()?.clone())
}

fn column_series(df: &DataFrame, column: &str) -> Result<Series> {
    df.column(column)
        .map(|c| c.as_materialized_series().clone())
        .map_err(|_| ExploreError::ColumnNotFound {
            column: column.to_string(),
        })
}
