//! Concurrent seven-day aggregation.

use std::future::Future;
use std::pin::Pin;
use std::sync::Arc;

use futures::stream::{FuturesUnordered, StreamExt};

use crate::error::FetchError;
use crate::feed::FeedPayload;
use crate::{AsteroidWindow, FeedDate, NeoFeedClient};

/// Receives one notification per settled day.
pub trait ProgressSink: Send + Sync {
    fn on_progress(&self, completed: usize, total: usize);
}

impl<F> ProgressSink for F
where
    F: Fn(usize, usize) + Send + Sync,
{
    fn on_progress(&self, completed: usize, total: usize) {
        self(completed, total)
    }
}

/// Source of one day's payload, retries included.
pub trait DaySource: Send + Sync {
    fn load_day<'a>(
        &'a self,
        date: FeedDate,
    ) -> Pin<Box<dyn Future<Output = Result<FeedPayload, FetchError>> + Send + 'a>>;
}

impl DaySource for NeoFeedClient {
    fn load_day<'a>(
        &'a self,
        date: FeedDate,
    ) -> Pin<Box<dyn Future<Output = Result<FeedPayload, FetchError>> + Send + 'a>> {
        Box::pin(self.fetch_day_with_retry(date))
    }
}

/// Fans a window of dates out to a [`DaySource`] and flattens the results.
#[derive(Clone)]
pub struct WindowAggregator {
    source: Arc<dyn DaySource>,
}

impl WindowAggregator {
    pub fn new(source: Arc<dyn DaySource>) -> Self {
        Self { source }
    }

    /// Fetches every date concurrently and waits for all of them to settle.
    ///
    /// All fetches are polled from the calling task. A failed day never
    /// cancels the others; it only contributes no records. `progress` is
    /// called once per settled day with a running count. Records appear in
    /// the order their days completed.
    pub async fn aggregate(&self, dates: &[FeedDate], progress: &dyn ProgressSink) -> AsteroidWindow {
        let total = dates.len();
        let mut pending: FuturesUnordered<_> = dates
            .iter()
            .copied()
            .map(|date| async move { (date, self.source.load_day(date).await) })
            .collect();

        let mut outcomes = Vec::with_capacity(total);
        while let Some(outcome) = pending.next().await {
            outcomes.push(outcome);
            progress.on_progress(outcomes.len(), total);
        }

        let mut days_loaded = 0;
        let mut records = Vec::new();
        for (date, outcome) in outcomes {
            match outcome {
                Ok(payload) => {
                    days_loaded += 1;
                    records.extend(payload.into_records());
                }
                Err(error) => {
                    tracing::debug!(%date, code = error.code(), %error, "day contributed no records");
                }
            }
        }

        tracing::info!(
            days_loaded,
            days_requested = total,
            records = records.len(),
            "window settled"
        );
        AsteroidWindow::new(dates.to_vec(), days_loaded, records)
    }
}
