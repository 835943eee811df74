//! Error taxonomy for the fetch pipeline.
//!
//! Every failure a fetch cycle can produce maps to one of three kinds.
//! Transport-level failures (connection refused, DNS, etc.) are folded into
//! `BadServerResponse` together with non-2xx statuses: from the presentation
//! layer's point of view both mean "the server did not give us a usable
//! response". Display strings double as the human-readable messages shown to
//! the user, so they stay short and free of internal jargon.

/// Errors produced by a single fetch cycle.
///
/// None of these are fatal; the shell recovers every variant into the
/// presentation state's error message.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum FetchError {
    /// The configured endpoint string does not parse as a URL. Defensive:
    /// with the fixed production constant this cannot occur.
    #[error("invalid posts endpoint: {0}")]
    InvalidEndpoint(String),

    /// Non-2xx HTTP status or a transport-level failure.
    #[error("bad server response: {0}")]
    BadServerResponse(String),

    /// The response body is not a well-formed JSON array of posts.
    #[error("could not decode posts: {0}")]
    DecodeError(String),
}
