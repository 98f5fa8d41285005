//! dr-core - Core library for post-dr-comment
//!
//! This crate provides the core logic for posting status comments to an
//! AllSpice Hub Design Review: front-matter extraction, idempotent comment
//! upsert via a hidden marker, and full-replace attachment synchronization.
//! The remote service is reached through the [`review::ReviewApi`] trait so
//! the engines stay independent of any HTTP transport.

pub mod attachments;
pub mod error;
pub mod front_matter;
pub mod review;
pub mod types;
pub mod upsert;

pub use error::{Error, Result};
pub use types::*;
