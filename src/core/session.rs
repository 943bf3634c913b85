//! Per-run session state: the requested range, the aggregated dataset and
//! the user's currency selection.

use crate::core::aggregate;
use crate::core::rates::{RateProvider, RateSet};
use crate::core::selection::Selection;
use chrono::NaiveDate;

/// Exclusive owner of one run's dataset and selection. Created per
/// invocation; a reload replaces the dataset wholesale.
#[derive(Default)]
pub struct Session {
    requested: Vec<NaiveDate>,
    pub rates: RateSet,
    pub selection: Selection,
}

impl Session {
    pub fn new() -> Self {
        Self::default()
    }

    /// Aggregates `requested` and replaces the previous dataset and range.
    /// The selection is untouched; it has its own lifecycle.
    pub async fn load(
        &mut self,
        provider: &(dyn RateProvider + Send + Sync),
        requested: Vec<NaiveDate>,
        on_settle: &(dyn Fn() + Sync),
    ) {
        self.rates = aggregate::aggregate(provider, &requested, on_settle).await;
        self.requested = requested;
    }

    /// The full requested date sequence, including dates whose fetch failed.
    pub fn requested(&self) -> &[NaiveDate] {
        &self.requested
    }
}
