//! # Domain Models
//!
//! | Type | Description |
//! |------|-------------|
//! | [`AsteroidRecord`] | One asteroid at its first listed close approach |
//! | [`AsteroidWindow`] | Records aggregated from one seven-day load |

mod asteroid;
mod window;

pub use asteroid::AsteroidRecord;
pub use window::AsteroidWindow;
