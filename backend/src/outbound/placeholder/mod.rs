//! Upstream posts/users/comments API adapter.
//!
//! This module provides a reqwest implementation of the `PlaceholderSource`
//! port.

mod dto;
mod http_source;

pub use http_source::{DEFAULT_USER_AGENT, PlaceholderHttpSource};
