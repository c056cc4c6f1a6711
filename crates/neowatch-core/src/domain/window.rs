use serde::{Deserialize, Serialize};

use crate::{AsteroidRecord, FeedDate};

/// Result of one window load.
///
/// `records` are in the order the per-day fetches completed, which is not
/// calendar order. Use a [`View`](crate::View) when order matters.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AsteroidWindow {
    pub dates: Vec<FeedDate>,
    pub days_loaded: usize,
    pub records: Vec<AsteroidRecord>,
}

impl AsteroidWindow {
    pub fn new(dates: Vec<FeedDate>, days_loaded: usize, records: Vec<AsteroidRecord>) -> Self {
        Self {
            dates,
            days_loaded,
            records,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn days_requested(&self) -> usize {
        self.dates.len()
    }
}
