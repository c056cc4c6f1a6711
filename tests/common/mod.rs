//! Shared scripted transport for the behavior tests.

#![allow(dead_code)]

use std::collections::{HashMap, VecDeque};
use std::future::Future;
use std::pin::Pin;
use std::sync::Mutex;
use std::time::Duration;

use neowatch_core::{FeedDate, HttpClient, HttpError, HttpRequest, HttpResponse};
use serde_json::json;

/// One scripted reaction to a request.
#[derive(Debug, Clone)]
pub struct Reply {
    pub delay: Duration,
    pub result: Result<HttpResponse, HttpError>,
}

impl Reply {
    pub fn ok(body: impl Into<String>) -> Self {
        Self {
            delay: Duration::ZERO,
            result: Ok(HttpResponse::ok_json(body)),
        }
    }

    pub fn status(status: u16) -> Self {
        Self {
            delay: Duration::ZERO,
            result: Ok(HttpResponse::with_status(status, "")),
        }
    }

    pub fn transport(message: &str) -> Self {
        Self {
            delay: Duration::ZERO,
            result: Err(HttpError::new(message)),
        }
    }

    /// Never answers within any realistic timeout.
    pub fn stall() -> Self {
        Self::ok("{}").after(Duration::from_secs(3_600))
    }

    pub fn after(mut self, delay: Duration) -> Self {
        self.delay = delay;
        self
    }
}

/// Transport that answers per `start_date` from a script.
///
/// Replies for a date are consumed in order; the last one repeats. Dates
/// without a script get a 404.
#[derive(Debug, Default)]
pub struct ScriptedHttpClient {
    scripts: Mutex<HashMap<String, VecDeque<Reply>>>,
    requests: Mutex<Vec<HttpRequest>>,
}

impl ScriptedHttpClient {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn on(self, date: FeedDate, replies: Vec<Reply>) -> Self {
        self.scripts
            .lock()
            .expect("script lock")
            .insert(date.to_string(), replies.into());
        self
    }

    pub fn requests(&self) -> Vec<HttpRequest> {
        self.requests.lock().expect("request lock").clone()
    }

    pub fn calls_for(&self, date: FeedDate) -> usize {
        let day = date.to_string();
        self.requests()
            .iter()
            .filter(|request| request.query_value("start_date") == Some(day.as_str()))
            .count()
    }

    fn next_reply(&self, day: &str) -> Reply {
        let mut scripts = self.scripts.lock().expect("script lock");
        match scripts.get_mut(day) {
            Some(queue) if queue.len() > 1 => queue.pop_front().expect("non-empty queue"),
            Some(queue) => queue.front().cloned().unwrap_or_else(|| Reply::status(404)),
            None => Reply::status(404),
        }
    }
}

impl HttpClient for ScriptedHttpClient {
    fn execute<'a>(
        &'a self,
        request: HttpRequest,
    ) -> Pin<Box<dyn Future<Output = Result<HttpResponse, HttpError>> + Send + 'a>> {
        let day = request.query_value("start_date").unwrap_or_default().to_owned();
        self.requests.lock().expect("request lock").push(request);
        let reply = self.next_reply(&day);

        Box::pin(async move {
            if !reply.delay.is_zero() {
                tokio::time::sleep(reply.delay).await;
            }
            reply.result
        })
    }
}

/// Test asteroid: name, max diameter (m), miss distance (km), hazardous.
pub type Neo<'a> = (&'a str, f64, f64, bool);

/// Feed body for `date` holding `asteroids`, numbers encoded as strings the
/// way the live feed sends them.
pub fn day_body(date: FeedDate, asteroids: &[Neo<'_>]) -> String {
    let entries: Vec<_> = asteroids
        .iter()
        .map(|(name, diameter_max, distance, hazardous)| {
            json!({
                "name": name,
                "estimated_diameter": {
                    "meters": {
                        "estimated_diameter_min": diameter_max / 2.0,
                        "estimated_diameter_max": diameter_max,
                    }
                },
                "is_potentially_hazardous_asteroid": hazardous,
                "close_approach_data": [{
                    "close_approach_date": date.to_string(),
                    "relative_velocity": { "kilometers_per_hour": "45000.5" },
                    "miss_distance": { "kilometers": distance.to_string() },
                }],
            })
        })
        .collect();
    let count = entries.len();

    json!({
        "element_count": count,
        "near_earth_objects": { date.to_string(): entries },
    })
    .to_string()
}

pub fn start() -> FeedDate {
    FeedDate::parse("2024-12-29").expect("valid date")
}
