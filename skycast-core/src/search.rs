//! One search = current conditions, then the forecast window.

use std::sync::atomic::{AtomicU64, Ordering};

use crate::{
    model::{CurrentConditions, ForecastDay},
    provider::{FetchError, WeatherSource},
};

/// Both output slots of one resolved search.
///
/// `current` and `forecast` are independent values; a renderer replaces each
/// as a whole, never field by field.
#[derive(Debug, Clone)]
pub struct SearchOutcome {
    /// Token drawn when the search started; see [`Searcher::is_stale`].
    pub generation: u64,
    pub current: CurrentConditions,
    pub forecast: Vec<ForecastDay>,
}

/// Runs searches against a [`WeatherSource`], tagging each with a
/// monotonically increasing generation so that overlapping searches cannot
/// clobber newer results with stale ones: whoever holds an outcome can ask
/// whether a newer search has started since and drop it.
#[derive(Debug)]
pub struct Searcher {
    source: Box<dyn WeatherSource>,
    generation: AtomicU64,
}

impl Searcher {
    pub fn new(source: Box<dyn WeatherSource>) -> Self {
        Self { source, generation: AtomicU64::new(0) }
    }

    /// Resolve one search. The current-conditions fetch must succeed before
    /// the forecast fetch is attempted; a current-conditions failure is the
    /// failure of the whole search and leaves the forecast untouched.
    pub async fn search(&self, city: &str) -> Result<SearchOutcome, FetchError> {
        let generation = self.generation.fetch_add(1, Ordering::SeqCst) + 1;

        let current = self.source.current(city).await?;
        let forecast = self.source.forecast(city).await;

        Ok(SearchOutcome { generation, current, forecast })
    }

    /// True when a newer search has started since this outcome was drawn.
    pub fn is_stale(&self, outcome: &SearchOutcome) -> bool {
        outcome.generation < self.generation.load(Ordering::SeqCst)
    }
}
