//! Integration tests for the usm crates.
//!
//! End-to-end pipelines that cross crate boundaries: decode, split into
//! planes, filter, merge, and encode again.
