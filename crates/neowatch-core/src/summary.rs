use serde::Serialize;

use crate::AsteroidRecord;

/// Aggregate statistics over a non-empty set of records.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Summary {
    pub total: usize,
    pub hazardous: usize,
    pub largest: AsteroidRecord,
    pub closest: AsteroidRecord,
}

impl Summary {
    /// Returns `None` for an empty slice.
    ///
    /// Ties on size or distance resolve to the record that appears first.
    pub fn compute(records: &[AsteroidRecord]) -> Option<Self> {
        let (first, rest) = records.split_first()?;

        let mut largest = first;
        let mut closest = first;
        for record in rest {
            if record.diameter_max > largest.diameter_max {
                largest = record;
            }
            if record.distance < closest.distance {
                closest = record;
            }
        }

        Some(Self {
            total: records.len(),
            hazardous: records.iter().filter(|record| record.hazardous).count(),
            largest: largest.clone(),
            closest: closest.clone(),
        })
    }
}
