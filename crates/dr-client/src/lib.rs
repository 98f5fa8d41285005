//! dr-client - AllSpice Hub API client for post-dr-comment
//!
//! Implements the `dr-core` [`ReviewApi`](dr_core::review::ReviewApi) trait
//! over the Hub's Gitea-style REST API using blocking HTTP.

mod hub;

pub use hub::HubClient;
