//! Concurrent fan-out over the requested date range.

use crate::core::rates::{RateProvider, RateSet};
use chrono::NaiveDate;
use futures::future::join_all;
use tracing::debug;

/// Fetches every date concurrently and merges the settled results.
///
/// All fetches launch at once and the join waits for every one to settle;
/// there is no concurrency cap, timeout, or cancellation. A failed date
/// lands in the failure map instead of the dataset. `on_settle` runs as each
/// fetch completes, in arrival order.
pub async fn aggregate(
    provider: &(dyn RateProvider + Send + Sync),
    dates: &[NaiveDate],
    on_settle: &(dyn Fn() + Sync),
) -> RateSet {
    let fetches = dates.iter().map(|date| async move {
        let result = provider.fetch_daily(*date).await;
        on_settle();
        (*date, result)
    });

    let mut set = RateSet::new();
    for (date, result) in join_all(fetches).await {
        match result {
            Ok(rates) => set.insert(date, rates),
            Err(e) => {
                debug!("Fetch failed for {date}: {e}");
                set.insert_failure(date, e.to_string());
            }
        }
    }
    set
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::rates::{DailyRates, FetchError};
    use async_trait::async_trait;
    use std::collections::{HashMap, HashSet};
    use std::time::Duration;

    /// Mock provider with per-date settle delays to force an arrival order
    /// different from the requested order.
    struct DelayedProvider {
        delays_ms: HashMap<NaiveDate, u64>,
        failing: HashSet<NaiveDate>,
    }

    impl DelayedProvider {
        fn new() -> Self {
            DelayedProvider {
                delays_ms: HashMap::new(),
                failing: HashSet::new(),
            }
        }

        fn delay(&mut self, date: NaiveDate, ms: u64) {
            self.delays_ms.insert(date, ms);
        }

        fn fail(&mut self, date: NaiveDate) {
            self.failing.insert(date);
        }
    }

    #[async_trait]
    impl RateProvider for DelayedProvider {
        async fn fetch_daily(&self, date: NaiveDate) -> Result<DailyRates, FetchError> {
            if let Some(ms) = self.delays_ms.get(&date) {
                tokio::time::sleep(Duration::from_millis(*ms)).await;
            }
            if self.failing.contains(&date) {
                return Err(FetchError::Payload("missing rate list".to_string()));
            }
            let mut rates = DailyRates::new(format!("KEP-{date}"));
            rates.insert("USD", "15.300,00");
            Ok(rates)
        }
    }

    fn date(s: &str) -> NaiveDate {
        s.parse().unwrap()
    }

    #[tokio::test]
    async fn test_merge_order_is_calendar_not_arrival() {
        let dates = [date("2024-01-01"), date("2024-01-02"), date("2024-01-03")];

        // Arrival order: 2024-01-03, 2024-01-01, 2024-01-02
        let mut provider = DelayedProvider::new();
        provider.delay(dates[0], 30);
        provider.delay(dates[1], 60);
        provider.delay(dates[2], 5);

        let set = aggregate(&provider, &dates, &|| {}).await;

        let merged: Vec<String> = set.dates().map(|d| d.to_string()).collect();
        assert_eq!(merged, vec!["2024-01-01", "2024-01-02", "2024-01-03"]);
    }

    #[tokio::test]
    async fn test_failed_date_absent_from_dataset() {
        let dates = [date("2024-03-01"), date("2024-03-02")];

        let mut provider = DelayedProvider::new();
        provider.fail(dates[1]);

        let set = aggregate(&provider, &dates, &|| {}).await;

        assert_eq!(set.len(), 1);
        assert!(set.get(dates[0]).is_some());
        assert!(set.get(dates[1]).is_none());
        assert_eq!(set.failures().len(), 1);
        assert!(
            set.failures()
                .get(&dates[1])
                .unwrap()
                .contains("missing rate list")
        );
    }

    #[tokio::test]
    async fn test_settle_callback_runs_per_date() {
        let dates = [date("2024-03-01"), date("2024-03-02"), date("2024-03-03")];
        let provider = DelayedProvider::new();

        let settled = std::sync::atomic::AtomicUsize::new(0);
        aggregate(&provider, &dates, &|| {
            settled.fetch_add(1, std::sync::atomic::Ordering::SeqCst);
        })
        .await;

        assert_eq!(settled.load(std::sync::atomic::Ordering::SeqCst), 3);
    }

    #[tokio::test]
    async fn test_empty_range_yields_empty_dataset() {
        let provider = DelayedProvider::new();
        let set = aggregate(&provider, &[], &|| {}).await;
        assert!(set.is_empty());
        assert!(set.failures().is_empty());
    }
}
