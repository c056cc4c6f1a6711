//! Behavior-driven tests for single-day fetches and their retry budget.

mod common;

use std::sync::Arc;
use std::time::Duration;

use common::{day_body, start, Reply, ScriptedHttpClient};
use neowatch_core::{FeedConfig, FetchError, NeoFeedClient, RetryConfig};

fn client(http: Arc<ScriptedHttpClient>, config: FeedConfig) -> NeoFeedClient {
    NeoFeedClient::with_http_client(http, config)
}

// =============================================================================
// Fetch: Request Shape
// =============================================================================

#[tokio::test]
async fn request_scopes_the_feed_window_to_one_day_and_encodes_the_key() {
    // Given: A client with a key that needs escaping
    let http = Arc::new(
        ScriptedHttpClient::new().on(start(), vec![Reply::ok(day_body(start(), &[]))]),
    );
    let config = FeedConfig::default()
        .with_api_key("key with/slash")
        .with_base_url("https://feed.example.test/v1/feed");

    // When: One day is fetched
    client(http.clone(), config)
        .fetch_day(start())
        .await
        .expect("scripted day succeeds");

    // Then: The request names the day twice and carries the credential
    let requests = http.requests();
    assert_eq!(requests.len(), 1);
    assert_eq!(
        requests[0].url(),
        "https://feed.example.test/v1/feed?start_date=2024-12-29&end_date=2024-12-29&api_key=key%20with%2Fslash"
    );
}

// =============================================================================
// Fetch: Timeout
// =============================================================================

#[tokio::test(start_paused = true)]
async fn when_the_feed_stalls_fetch_times_out_after_five_seconds() {
    // Given: A transport that never answers in time
    let http = Arc::new(ScriptedHttpClient::new().on(start(), vec![Reply::stall()]));
    let began = tokio::time::Instant::now();

    // When: One day is fetched with the default configuration
    let err = client(http, FeedConfig::default())
        .fetch_day(start())
        .await
        .expect_err("must time out");

    // Then: The timeout error fires at the configured deadline
    assert_eq!(err, FetchError::Timeout { after_ms: 5_000 });
    let elapsed = began.elapsed();
    assert!(elapsed >= Duration::from_millis(5_000), "elapsed {elapsed:?}");
    assert!(elapsed < Duration::from_millis(6_000), "elapsed {elapsed:?}");
}

#[tokio::test(start_paused = true)]
async fn a_response_just_inside_the_deadline_is_accepted() {
    // Given: A slow but timely answer
    let http = Arc::new(ScriptedHttpClient::new().on(
        start(),
        vec![Reply::ok(day_body(start(), &[("slow", 1.0, 1.0, false)]))
            .after(Duration::from_millis(4_999))],
    ));

    // When: One day is fetched
    let payload = client(http, FeedConfig::default())
        .fetch_day(start())
        .await
        .expect("answer arrives before the deadline");

    // Then: It decodes normally
    assert_eq!(payload.entry_count(), 1);
}

#[tokio::test(start_paused = true)]
async fn configured_timeout_overrides_the_default() {
    // Given: A 100 ms budget and a 150 ms answer
    let http = Arc::new(ScriptedHttpClient::new().on(
        start(),
        vec![Reply::ok(day_body(start(), &[])).after(Duration::from_millis(150))],
    ));

    // When: One day is fetched
    let err = client(http, FeedConfig::default().with_timeout_ms(100))
        .fetch_day(start())
        .await
        .expect_err("must time out");

    // Then: The error reports the configured budget
    assert_eq!(err, FetchError::Timeout { after_ms: 100 });
}

#[tokio::test(start_paused = true)]
async fn a_timeout_is_retried_like_any_other_failure() {
    // Given: A stall followed by a prompt answer
    let http = Arc::new(ScriptedHttpClient::new().on(
        start(),
        vec![Reply::stall(), Reply::ok(day_body(start(), &[("second", 2.0, 2.0, true)]))],
    ));

    // When: The day is fetched with retry
    let payload = client(http.clone(), FeedConfig::default())
        .fetch_day_with_retry(start())
        .await
        .expect("second attempt succeeds");

    // Then: Exactly two attempts were made
    assert_eq!(payload.entry_count(), 1);
    assert_eq!(http.calls_for(start()), 2);
}

// =============================================================================
// Fetch: HTTP and Decode Failures
// =============================================================================

#[tokio::test]
async fn non_success_status_is_reported_with_its_code() {
    let http = Arc::new(ScriptedHttpClient::new().on(start(), vec![Reply::status(403)]));

    let err = client(http, FeedConfig::default())
        .fetch_day(start())
        .await
        .expect_err("must fail");

    assert_eq!(err, FetchError::Http { status: 403 });
    assert_eq!(err.code(), "fetch.http");
}

#[tokio::test]
async fn malformed_body_on_success_status_is_a_decode_error() {
    let http = Arc::new(ScriptedHttpClient::new().on(start(), vec![Reply::ok("<html>")]));

    let err = client(http, FeedConfig::default())
        .fetch_day(start())
        .await
        .expect_err("must fail");

    assert!(matches!(err, FetchError::Decode(_)), "got {err:?}");
}

// =============================================================================
// Fetch: Retry Budget
// =============================================================================

#[tokio::test]
async fn exhausted_retries_surface_the_final_error_unchanged() {
    // Given: Two different failures in a row
    let http = Arc::new(ScriptedHttpClient::new().on(
        start(),
        vec![Reply::transport("dns failure"), Reply::status(502)],
    ));

    // When: The day is fetched with the default budget of two attempts
    let err = client(http.clone(), FeedConfig::default())
        .fetch_day_with_retry(start())
        .await
        .expect_err("both attempts fail");

    // Then: The second error is the one returned
    assert_eq!(err, FetchError::Http { status: 502 });
    assert_eq!(http.calls_for(start()), 2);
}

#[tokio::test]
async fn first_success_is_returned_without_a_further_attempt() {
    let http = Arc::new(ScriptedHttpClient::new().on(
        start(),
        vec![
            Reply::ok(day_body(start(), &[])),
            Reply::status(500),
        ],
    ));

    client(http.clone(), FeedConfig::default())
        .fetch_day_with_retry(start())
        .await
        .expect("first attempt succeeds");

    assert_eq!(http.calls_for(start()), 1);
}

#[tokio::test]
async fn explicit_retry_config_bounds_the_attempt_count() {
    let http = Arc::new(ScriptedHttpClient::new().on(start(), vec![Reply::status(500)]));
    let client = client(http.clone(), FeedConfig::default());

    client
        .fetch_day_with(start(), &RetryConfig::new(3))
        .await
        .expect_err("always fails");
    assert_eq!(http.calls_for(start()), 3);

    client
        .fetch_day_with(start(), &RetryConfig::no_retry())
        .await
        .expect_err("always fails");
    assert_eq!(http.calls_for(start()), 4);
}
