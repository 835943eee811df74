//! The Fetcher: one HTTP round trip per invocation.
//!
//! `load_posts` drives a full fetch cycle against the store it is given.
//! The request, status validation, and body decoding run on a spawned
//! worker task; the terminal outcome is applied to the store on the calling
//! task, so all state mutation stays on the task that owns the store. No
//! retry, no timeout beyond reqwest's defaults, no cancellation: once the
//! request is issued the cycle runs to one terminal outcome.

use postfeed_core::{decode_posts, validate_status, FetchError, FetchOutcome};

use super::store::FeedStore;
use crate::prelude::f;

/// Fixed production endpoint. Tests point `load_posts` at a local server.
pub const POSTS_ENDPOINT: &str = "https://jsonplaceholder.typicode.com/posts";

/// Run one fetch cycle: Idle -> Loading -> {Success | Failed} -> Idle.
///
/// Fire-and-forget from the caller's perspective; the result is observed
/// through the store. Never returns an error — every failure is recovered
/// into the store's error message.
pub async fn load_posts(store: &mut FeedStore, endpoint: &str) {
    // Fail-fast configuration check: no network activity, no Loading phase.
    let url = match reqwest::Url::parse(endpoint) {
        Ok(url) => url,
        Err(e) => {
            store.finish(Err(FetchError::InvalidEndpoint(e.to_string())));
            return;
        }
    };

    store.begin_load();

    let worker = tokio::spawn(fetch_round_trip(url));
    let outcome = match worker.await {
        Ok(outcome) => outcome,
        Err(e) => Err(FetchError::BadServerResponse(f!("worker task failed: {e}"))),
    };

    store.finish(outcome);
}

/// The off-task half of the cycle: GET, validate, decode.
async fn fetch_round_trip(url: reqwest::Url) -> FetchOutcome {
    let client = reqwest::Client::new();
    let response = client
        .get(url)
        .send()
        .await
        .map_err(|e| FetchError::BadServerResponse(e.to_string()))?;

    validate_status(response.status().as_u16())?;

    let body = response
        .text()
        .await
        .map_err(|e| FetchError::BadServerResponse(e.to_string()))?;

    decode_posts(&body)
}
