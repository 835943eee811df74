//! Imperative shell for the postfeed application.
//!
//! The pure fetch/decode/state logic lives in `postfeed_core`; this crate
//! executes the HTTP round trips and owns the observable state store and
//! the terminal presentation.

pub mod feed;
pub mod prelude;
