//! Outbound adapters implementing domain ports for external infrastructure.
//!
//! - **placeholder**: reqwest-backed client for the upstream posts, users and
//!   comments API.
//!
//! Adapters are thin translators between domain types and wire formats. They
//! contain no aggregation logic.

pub mod placeholder;
