//! Application context tying the feed client, aggregator and store together.

use std::sync::Arc;

use crate::aggregate::{DaySource, ProgressSink, WindowAggregator};
use crate::dates::{self, FeedDate};
use crate::error::LoadError;
use crate::store::WindowStore;
use crate::summary::Summary;
use crate::view::View;
use crate::{AsteroidRecord, AsteroidWindow, FeedConfig, NeoFeedClient};

/// Owns everything one consumer needs to load and inspect a window.
#[derive(Clone)]
pub struct NeoWatch {
    aggregator: WindowAggregator,
    store: WindowStore,
}

impl NeoWatch {
    /// Context backed by the real feed.
    pub fn new(config: FeedConfig) -> Self {
        Self::with_source(Arc::new(NeoFeedClient::new(config)))
    }

    pub fn with_source(source: Arc<dyn DaySource>) -> Self {
        Self {
            aggregator: WindowAggregator::new(source),
            store: WindowStore::new(),
        }
    }

    pub fn store(&self) -> &WindowStore {
        &self.store
    }

    /// Loads the seven days starting today (UTC).
    pub async fn load(&self, progress: &dyn ProgressSink) -> Result<Arc<AsteroidWindow>, LoadError> {
        self.load_from(FeedDate::today(), progress).await
    }

    /// Loads the seven days starting at `start` and publishes the result.
    ///
    /// The store is written once, after every day has settled. When no day
    /// loads at all the (empty) window is still published and
    /// [`LoadError::TotalLoadFailure`] is returned. A window whose days loaded
    /// but held no asteroids is a success.
    pub async fn load_from(
        &self,
        start: FeedDate,
        progress: &dyn ProgressSink,
    ) -> Result<Arc<AsteroidWindow>, LoadError> {
        let dates = dates::window_from(start);
        let window = self.aggregator.aggregate(&dates, progress).await;
        let window = self.store.replace(window).await;

        if window.days_loaded == 0 {
            return Err(LoadError::TotalLoadFailure {
                days: window.days_requested(),
            });
        }
        Ok(window)
    }

    pub async fn view(&self, view: View) -> Vec<AsteroidRecord> {
        self.store.view(view).await
    }

    pub async fn summary(&self) -> Option<Summary> {
        self.store.summary().await
    }
}
