//! Typed model of the NeoWs feed body and the mapping to [`AsteroidRecord`].

use std::fmt::Formatter;

use serde::de::{Error as DeError, MapAccess, Visitor};
use serde::{Deserialize, Deserializer};

use crate::error::FetchError;
use crate::AsteroidRecord;

/// Decoded feed body for one request.
///
/// Asteroids are grouped by date key; a single-date request normally holds
/// one group, but any number is accepted. Groups keep the order the feed
/// sent them in.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct FeedPayload {
    #[serde(deserialize_with = "date_groups")]
    pub near_earth_objects: Vec<(String, Vec<RawAsteroid>)>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct RawAsteroid {
    pub name: String,
    pub estimated_diameter: RawEstimatedDiameter,
    #[serde(default)]
    pub close_approach_data: Vec<RawCloseApproach>,
    pub is_potentially_hazardous_asteroid: bool,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct RawEstimatedDiameter {
    pub meters: RawDiameterRange,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct RawDiameterRange {
    #[serde(deserialize_with = "feed_number")]
    pub estimated_diameter_min: f64,
    #[serde(deserialize_with = "feed_number")]
    pub estimated_diameter_max: f64,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct RawCloseApproach {
    pub relative_velocity: RawVelocity,
    pub miss_distance: RawMissDistance,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct RawVelocity {
    #[serde(deserialize_with = "feed_number")]
    pub kilometers_per_hour: f64,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct RawMissDistance {
    #[serde(deserialize_with = "feed_number")]
    pub kilometers: f64,
}

impl FeedPayload {
    pub fn parse(body: &str) -> Result<Self, FetchError> {
        serde_json::from_str(body).map_err(|e| FetchError::Decode(e.to_string()))
    }

    pub fn entry_count(&self) -> usize {
        self.near_earth_objects
            .iter()
            .map(|(_, entries)| entries.len())
            .sum()
    }

    pub fn into_records(self) -> Vec<AsteroidRecord> {
        self.near_earth_objects
            .into_iter()
            .flat_map(|(_, entries)| entries)
            .filter_map(RawAsteroid::into_record)
            .collect()
    }
}

impl RawAsteroid {
    /// Maps the entry using its first close approach.
    ///
    /// Returns `None` when the feed lists no approach for the object.
    pub fn into_record(self) -> Option<AsteroidRecord> {
        let Some(approach) = self.close_approach_data.into_iter().next() else {
            tracing::warn!(name = %self.name, "skipping asteroid without close-approach data");
            return None;
        };

        Some(AsteroidRecord::new(
            self.name,
            self.estimated_diameter.meters.estimated_diameter_min,
            self.estimated_diameter.meters.estimated_diameter_max,
            approach.relative_velocity.kilometers_per_hour,
            approach.miss_distance.kilometers,
            self.is_potentially_hazardous_asteroid,
        ))
    }
}

fn date_groups<'de, D>(deserializer: D) -> Result<Vec<(String, Vec<RawAsteroid>)>, D::Error>
where
    D: Deserializer<'de>,
{
    struct DateGroups;

    impl<'de> Visitor<'de> for DateGroups {
        type Value = Vec<(String, Vec<RawAsteroid>)>;

        fn expecting(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
            f.write_str("an object of asteroid lists keyed by date")
        }

        fn visit_map<A>(self, mut map: A) -> Result<Self::Value, A::Error>
        where
            A: MapAccess<'de>,
        {
            let mut groups = Vec::with_capacity(map.size_hint().unwrap_or(1));
            while let Some(group) = map.next_entry::<String, Vec<RawAsteroid>>()? {
                groups.push(group);
            }
            Ok(groups)
        }
    }

    deserializer.deserialize_map(DateGroups)
}

/// The feed sends most measurements as decimal strings; plain numbers are
/// accepted too.
fn feed_number<'de, D>(deserializer: D) -> Result<f64, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum NumberOrText {
        Number(f64),
        Text(String),
    }

    match NumberOrText::deserialize(deserializer)? {
        NumberOrText::Number(value) => Ok(value),
        NumberOrText::Text(text) => text
            .trim()
            .parse::<f64>()
            .map_err(|_| D::Error::custom(format!("expected a numeric value, got '{text}'"))),
    }
}
