//! Testing infrastructure for voxpop integration tests.
//!
//! This crate provides utilities for writing scenario tests:
//! - `MemoryApi`: in-memory record store with scriptable failures
//! - `fixtures`: deterministic feedback record builders

pub mod api;
pub mod fixtures;

pub use api::MemoryApi;
