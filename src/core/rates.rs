//! Rate table abstractions and core types

use async_trait::async_trait;
use chrono::NaiveDate;
use std::collections::BTreeMap;
use thiserror::Error;

/// Field name the remote source uses for the decree citation; it shares the
/// per-date record with the currency codes and must never be selectable as
/// one.
pub const LEGAL_BASIS_FIELD: &str = "DasarHukum";

#[derive(Debug, Error)]
pub enum FetchError {
    #[error("request failed: {0}")]
    Request(#[from] reqwest::Error),
    #[error("server returned {0}")]
    Status(reqwest::StatusCode),
    #[error("malformed payload: {0}")]
    Payload(String),
}

/// One day's published rate table: source-ordered currency values plus the
/// decree that set them.
#[derive(Debug, Clone, Default)]
pub struct DailyRates {
    entries: Vec<(String, String)>,
    pub legal_basis: String,
}

impl DailyRates {
    pub fn new(legal_basis: impl Into<String>) -> Self {
        DailyRates {
            entries: Vec::new(),
            legal_basis: legal_basis.into(),
        }
    }

    /// Inserts one currency value. A duplicate code overwrites the earlier
    /// value but keeps its original position (last entry wins).
    pub fn insert(&mut self, code: impl Into<String>, value: impl Into<String>) {
        let code = code.into();
        let value = value.into();
        match self.entries.iter_mut().find(|(c, _)| *c == code) {
            Some(entry) => entry.1 = value,
            None => self.entries.push((code, value)),
        }
    }

    pub fn value(&self, code: &str) -> Option<&str> {
        self.entries
            .iter()
            .find(|(c, _)| c == code)
            .map(|(_, v)| v.as_str())
    }

    /// Currency codes in source order.
    pub fn currencies(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(c, _)| c.as_str())
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Date-keyed dataset produced by one aggregation run.
///
/// Only successfully fetched dates are present; iteration follows ascending
/// calendar order regardless of fetch arrival order. Failures are kept per
/// date so callers can surface them, while the default rendering leaves
/// failed dates silently absent.
#[derive(Debug, Default)]
pub struct RateSet {
    by_date: BTreeMap<NaiveDate, DailyRates>,
    failures: BTreeMap<NaiveDate, String>,
}

impl RateSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, date: NaiveDate, rates: DailyRates) {
        self.by_date.insert(date, rates);
    }

    pub fn insert_failure(&mut self, date: NaiveDate, reason: String) {
        self.failures.insert(date, reason);
    }

    pub fn get(&self, date: NaiveDate) -> Option<&DailyRates> {
        self.by_date.get(&date)
    }

    /// Dates with data, ascending.
    pub fn dates(&self) -> impl Iterator<Item = NaiveDate> + '_ {
        self.by_date.keys().copied()
    }

    pub fn iter(&self) -> impl Iterator<Item = (NaiveDate, &DailyRates)> {
        self.by_date.iter().map(|(date, rates)| (*date, rates))
    }

    pub fn len(&self) -> usize {
        self.by_date.len()
    }

    pub fn is_empty(&self) -> bool {
        self.by_date.is_empty()
    }

    pub fn failures(&self) -> &BTreeMap<NaiveDate, String> {
        &self.failures
    }

    /// Currency codes offered for selection, taken from the earliest date's
    /// record. All dates of one aggregation are assumed to share one code
    /// set.
    pub fn available_currencies(&self) -> Vec<String> {
        self.by_date
            .values()
            .next()
            .map(|rates| rates.currencies().map(String::from).collect())
            .unwrap_or_default()
    }
}

#[async_trait]
pub trait RateProvider: Send + Sync {
    async fn fetch_daily(&self, date: NaiveDate) -> Result<DailyRates, FetchError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(s: &str) -> NaiveDate {
        s.parse().unwrap()
    }

    #[test]
    fn test_daily_rates_last_entry_wins_keeps_position() {
        let mut rates = DailyRates::new("KEP-1");
        rates.insert("USD", "15.000,00");
        rates.insert("JPY", "100,00");
        rates.insert("USD", "15.300,00");

        assert_eq!(rates.len(), 2);
        assert_eq!(rates.value("USD"), Some("15.300,00"));
        assert_eq!(rates.currencies().collect::<Vec<_>>(), vec!["USD", "JPY"]);
    }

    #[test]
    fn test_rate_set_iterates_in_calendar_order() {
        let mut set = RateSet::new();
        set.insert(date("2024-01-03"), DailyRates::new("KEP-3"));
        set.insert(date("2024-01-01"), DailyRates::new("KEP-1"));
        set.insert(date("2024-01-02"), DailyRates::new("KEP-2"));

        let dates: Vec<String> = set.dates().map(|d| d.to_string()).collect();
        assert_eq!(dates, vec!["2024-01-01", "2024-01-02", "2024-01-03"]);
    }

    #[test]
    fn test_available_currencies_from_earliest_date() {
        let mut set = RateSet::new();
        let mut later = DailyRates::new("KEP-2");
        later.insert("EUR", "17.000,00");
        set.insert(date("2024-01-02"), later);

        let mut earlier = DailyRates::new("KEP-1");
        earlier.insert("USD", "15.300,00");
        earlier.insert("JPY", "100,00");
        set.insert(date("2024-01-01"), earlier);

        assert_eq!(set.available_currencies(), vec!["USD", "JPY"]);
    }

    #[test]
    fn test_available_currencies_empty_dataset() {
        assert!(RateSet::new().available_currencies().is_empty());
    }
}
