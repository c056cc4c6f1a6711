//! # Neowatch Core
//!
//! Acquisition and aggregation of near-Earth-object data from the NASA NeoWs
//! feed over a rolling seven-day window.
//!
//! ## Overview
//!
//! - **Date window**: today (UTC) plus the six following calendar days
//! - **Per-day fetch** raced against a timeout, with HTTP and decode failures
//!   surfaced as [`FetchError`]
//! - **Immediate bounded retry** around each day
//! - **Concurrent aggregation** that tolerates failed days
//! - **Summary statistics** and **named views** over the loaded records
//!
//! ## Modules
//!
//! | Module | Description |
//! |--------|-------------|
//! | [`aggregate`] | Concurrent window aggregation and progress reporting |
//! | [`config`] | Feed configuration and environment lookup |
//! | [`dates`] | Seven-day date window |
//! | [`domain`] | Asteroid record and window models |
//! | [`error`] | Error types |
//! | [`feed`] | Feed payload model and record mapping |
//! | [`fetcher`] | Per-day feed client |
//! | [`http_client`] | HTTP transport abstraction |
//! | [`retry`] | Bounded immediate retry |
//! | [`session`] | Application context |
//! | [`store`] | Replace-only holder of the last load |
//! | [`summary`] | Aggregate statistics |
//! | [`view`] | Filter and sort views |
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use neowatch_core::{FeedConfig, NeoWatch, View};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let app = NeoWatch::new(FeedConfig::from_env()?);
//!
//!     app.load(&|done: usize, total: usize| eprintln!("{done}/{total} days loaded"))
//!         .await?;
//!
//!     for asteroid in app.view(View::Distance).await.iter().take(5) {
//!         println!("{}: {:.0} km", asteroid.name, asteroid.distance);
//!     }
//!     Ok(())
//! }
//! ```
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────────┐
//! │  dates window   │
//! └────────┬────────┘
//!          │ 7 dates
//!          ▼
//! ┌─────────────────┐     ┌──────────────────┐
//! │ WindowAggregator│────▶│ ProgressSink     │
//! └────────┬────────┘     └──────────────────┘
//!          │ per date, concurrently
//!          ▼
//! ┌─────────────────┐     ┌──────────────────┐
//! │ NeoFeedClient   │────▶│ HttpClient       │
//! │ (retry+timeout) │     │ (reqwest/test)   │
//! └────────┬────────┘     └──────────────────┘
//!          │ AsteroidWindow
//!          ▼
//! ┌─────────────────┐
//! │  WindowStore    │──▶ Summary, View
//! └─────────────────┘
//! ```
//!
//! ## Error Handling
//!
//! A day that still fails after its retries contributes no records and
//! never aborts the other days. Only a load in which no day succeeds is an
//! error:
//!
//! ```rust,ignore
//! match app.load(&progress).await {
//!     Ok(window) => println!("{} asteroids", window.len()),
//!     Err(LoadError::TotalLoadFailure { .. }) => eprintln!("try again later"),
//! }
//! ```

pub mod aggregate;
pub mod config;
pub mod dates;
pub mod domain;
pub mod error;
pub mod feed;
pub mod fetcher;
pub mod http_client;
pub mod retry;
pub mod session;
pub mod store;
pub mod summary;
pub mod view;

pub use aggregate::{DaySource, ProgressSink, WindowAggregator};
pub use config::FeedConfig;
pub use dates::{current_window, window_from, FeedDate, WINDOW_DAYS};
pub use domain::{AsteroidRecord, AsteroidWindow};
pub use error::{ConfigError, FetchError, LoadError, ViewParseError};
pub use feed::FeedPayload;
pub use fetcher::NeoFeedClient;
pub use http_client::{HttpClient, HttpError, HttpRequest, HttpResponse, ReqwestHttpClient};
pub use retry::RetryConfig;
pub use session::NeoWatch;
pub use store::WindowStore;
pub use summary::Summary;
pub use view::View;
