use serde::{Deserialize, Serialize};

/// Canonical asteroid record.
///
/// Velocity and distance describe a single close approach: the first one the
/// feed lists for the object. Diameters are trusted as delivered.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AsteroidRecord {
    pub name: String,
    /// Meters.
    pub diameter_min: f64,
    /// Meters.
    pub diameter_max: f64,
    /// Kilometers per hour relative to Earth.
    pub velocity: f64,
    /// Miss distance in kilometers.
    pub distance: f64,
    pub hazardous: bool,
}

impl AsteroidRecord {
    pub fn new(
        name: impl Into<String>,
        diameter_min: f64,
        diameter_max: f64,
        velocity: f64,
        distance: f64,
        hazardous: bool,
    ) -> Self {
        Self {
            name: name.into(),
            diameter_min,
            diameter_max,
            velocity,
            distance,
            hazardous,
        }
    }
}
