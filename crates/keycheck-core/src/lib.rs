//! keycheck-core — Answer-key parsing, response-sheet parsing, and scoring.
//!
//! This crate defines the fundamental data model and the pure
//! text-to-verdict pipeline that the entire keycheck system builds on:
//! raw document text goes in, an ordered list of per-question verdicts
//! and an aggregate score come out.

pub mod extract;
pub mod key;
pub mod model;
pub mod pipeline;
pub mod report;
pub mod resolve;
pub mod score;
pub mod sheet;
