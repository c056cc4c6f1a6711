//! Named presentation views over a window.
//!
//! | View | Result |
//! |------|--------|
//! | `all` | Every record, original order |
//! | `hazardous` | Potentially hazardous records only, original order |
//! | `distance` | Every record, closest first |
//! | `size` | Every record, largest `diameter_max` first |
//!
//! Sorting is stable, so equal keys keep their original relative order.

use std::fmt::{Display, Formatter};
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::ViewParseError;
use crate::AsteroidRecord;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum View {
    #[default]
    All,
    Hazardous,
    Distance,
    Size,
}

impl View {
    pub const ALL: [View; 4] = [Self::All, Self::Hazardous, Self::Distance, Self::Size];

    pub const fn as_str(self) -> &'static str {
        match self {
            Self::All => "all",
            Self::Hazardous => "hazardous",
            Self::Distance => "distance",
            Self::Size => "size",
        }
    }

    /// Derives a new sequence; `records` is left untouched.
    pub fn apply(self, records: &[AsteroidRecord]) -> Vec<AsteroidRecord> {
        match self {
            Self::All => records.to_vec(),
            Self::Hazardous => records
                .iter()
                .filter(|record| record.hazardous)
                .cloned()
                .collect(),
            Self::Distance => {
                let mut sorted = records.to_vec();
                sorted.sort_by(|a, b| a.distance.total_cmp(&b.distance));
                sorted
            }
            Self::Size => {
                let mut sorted = records.to_vec();
                sorted.sort_by(|a, b| b.diameter_max.total_cmp(&a.diameter_max));
                sorted
            }
        }
    }
}

impl Display for View {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for View {
    type Err = ViewParseError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|view| view.as_str().eq_ignore_ascii_case(value.trim()))
            .ok_or_else(|| ViewParseError {
                value: value.to_owned(),
            })
    }
}
