//! Core library for postfeed
//!
//! This crate implements the **Functional Core** of the postfeed application,
//! following the Functional Core - Imperative Shell architectural pattern.
//!
//! - **`postfeed_core`** (this crate): Pure transformation functions with zero I/O
//! - **`postfeed`**: I/O operations and orchestration (the Imperative Shell)
//!
//! Everything the fetch pipeline does that can be expressed without touching
//! the network lives here: decoding the remote JSON array into [`feed::Post`]
//! records, validating HTTP status codes, the [`error::FetchError`] taxonomy,
//! and the [`state::FeedState`] transitions that turn a fetch outcome into
//! presentation state. The shell crate executes the HTTP round trip and
//! forwards its results into these functions, so the entire contract is
//! testable with fixture data and no mocking.

pub mod error;
pub mod feed;
pub mod state;

pub use error::FetchError;
pub use feed::{decode_posts, validate_status, FetchOutcome, Post};
pub use state::FeedState;
