//! Presentation state and its fetch-cycle transitions.
//!
//! `FeedState` is the single source of truth the rendering layer reads:
//! the current posts, whether a fetch is outstanding, and an optional
//! unacknowledged error message. One instance exists per application
//! session. The transitions here are pure; observer notification lives in
//! the shell's store, which wraps this type.
//!
//! A fetch cycle runs `Idle -> Loading -> {Success | Failed} -> Idle`.
//! `finish` always clears the loading flag first, then applies exactly one
//! terminal outcome: success replaces the posts (and clears any stale,
//! unacknowledged error — a fresh success supersedes it), failure records
//! the message and leaves earlier posts visible.

use crate::feed::{FetchOutcome, Post};

/// Current presentation state of the post feed.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FeedState {
    posts: Vec<Post>,
    is_loading: bool,
    error_message: Option<String>,
}

impl FeedState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Posts from the most recent successful fetch, in server order.
    pub fn posts(&self) -> &[Post] {
        &self.posts
    }

    /// True only while a fetch is outstanding.
    pub fn is_loading(&self) -> bool {
        self.is_loading
    }

    /// Message from the most recent failed fetch, until acknowledged.
    pub fn error_message(&self) -> Option<&str> {
        self.error_message.as_deref()
    }

    /// Enter the Loading phase of a fetch cycle.
    pub fn begin_load(&mut self) {
        self.is_loading = true;
    }

    /// Apply the terminal outcome of a fetch cycle.
    pub fn finish(&mut self, outcome: FetchOutcome) {
        self.is_loading = false;
        match outcome {
            Ok(posts) => {
                self.posts = posts;
                self.error_message = None;
            }
            Err(err) => {
                self.error_message = Some(format!("Error fetching posts: {err}"));
            }
        }
    }

    /// Acknowledge the current error, leaving posts and the loading flag
    /// untouched.
    pub fn dismiss_error(&mut self) {
        self.error_message = None;
    }
}
