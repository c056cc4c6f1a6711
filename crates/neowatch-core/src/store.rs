//! Holder for the most recent window load.

use std::sync::Arc;

use crate::summary::Summary;
use crate::view::View;
use crate::{AsteroidRecord, AsteroidWindow};

/// Replace-only cell holding the last loaded window.
///
/// Readers get a shared snapshot; a load swaps the whole window in one
/// write, so a reader sees either the previous window or the new one.
#[derive(Debug, Clone, Default)]
pub struct WindowStore {
    inner: Arc<tokio::sync::RwLock<Option<Arc<AsteroidWindow>>>>,
}

impl WindowStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Publishes `window`, dropping the previous one, and returns the snapshot.
    pub async fn replace(&self, window: AsteroidWindow) -> Arc<AsteroidWindow> {
        let window = Arc::new(window);
        let mut slot = self.inner.write().await;
        *slot = Some(Arc::clone(&window));
        window
    }

    /// Current snapshot, if any load has completed.
    pub async fn current(&self) -> Option<Arc<AsteroidWindow>> {
        let slot = self.inner.read().await;
        slot.clone()
    }

    /// `view` applied to the current snapshot; empty before the first load.
    pub async fn view(&self, view: View) -> Vec<AsteroidRecord> {
        match self.current().await {
            Some(window) => view.apply(&window.records),
            None => Vec::new(),
        }
    }

    /// Summary of the current snapshot; `None` when it is missing or empty.
    pub async fn summary(&self) -> Option<Summary> {
        let window = self.current().await?;
        Summary::compute(&window.records)
    }
}
