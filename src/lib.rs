//! Deterministic in-memory analytics over product review corpora.
//!
//! `review-core` provides review ingestion, immutable corpus snapshots with
//! fingerprint identity, and ranked aggregate queries: per-product score
//! averages, top-K lists, percentile cuts, review-count leaders, word
//! frequencies, and reviewer helpfulness rankings. All operations are
//! deterministic — identical inputs always produce identical outputs.
//!
//! See <https://github.com/reviewlenshq/review-core> for the full project.

pub mod aggregate;
pub mod corpus;
pub mod review;
pub mod source;
pub mod types;
