//! Date parsing and range expansion for the aggregation window.

use chrono::NaiveDate;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum DateError {
    #[error("invalid date '{input}': expected YYYY-MM-DD")]
    Invalid {
        input: String,
        #[source]
        source: chrono::ParseError,
    },
}

/// Parses a calendar date in ISO `YYYY-MM-DD` form.
pub fn parse_date(input: &str) -> Result<NaiveDate, DateError> {
    NaiveDate::parse_from_str(input, "%Y-%m-%d").map_err(|source| DateError::Invalid {
        input: input.to_string(),
        source,
    })
}

/// Expands `(start, end)` into every calendar day, inclusive, ascending.
///
/// A reversed range yields an empty sequence rather than an error.
pub fn expand_range(start: NaiveDate, end: NaiveDate) -> Vec<NaiveDate> {
    let mut dates = Vec::new();
    let mut current = start;
    while current <= end {
        dates.push(current);
        match current.succ_opt() {
            Some(next) => current = next,
            None => break,
        }
    }
    dates
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(s: &str) -> NaiveDate {
        parse_date(s).unwrap()
    }

    #[test]
    fn test_expand_range_inclusive() {
        let dates = expand_range(date("2024-03-01"), date("2024-03-05"));
        assert_eq!(dates.len(), 5);
        assert_eq!(dates.first().unwrap().to_string(), "2024-03-01");
        assert_eq!(dates.last().unwrap().to_string(), "2024-03-05");

        let mut sorted = dates.clone();
        sorted.sort();
        sorted.dedup();
        assert_eq!(sorted, dates);
    }

    #[test]
    fn test_expand_range_crosses_month_boundary() {
        let dates = expand_range(date("2024-02-28"), date("2024-03-01"));
        // 2024 is a leap year
        assert_eq!(
            dates.iter().map(|d| d.to_string()).collect::<Vec<_>>(),
            vec!["2024-02-28", "2024-02-29", "2024-03-01"]
        );
    }

    #[test]
    fn test_expand_range_single_day() {
        let dates = expand_range(date("2024-03-01"), date("2024-03-01"));
        assert_eq!(dates.len(), 1);
    }

    #[test]
    fn test_expand_range_reversed_is_empty() {
        let dates = expand_range(date("2024-03-05"), date("2024-03-01"));
        assert!(dates.is_empty());
    }

    #[test]
    fn test_expand_range_idempotent() {
        let first = expand_range(date("2024-01-01"), date("2024-01-31"));
        let second = expand_range(date("2024-01-01"), date("2024-01-31"));
        assert_eq!(first, second);
    }

    #[test]
    fn test_parse_date_rejects_garbage() {
        let result = parse_date("not-a-date");
        assert!(result.is_err());
        assert!(
            result
                .unwrap_err()
                .to_string()
                .contains("invalid date 'not-a-date'")
        );
    }

    #[test]
    fn test_parse_date_rejects_impossible_day() {
        assert!(parse_date("2024-02-30").is_err());
    }
}
