//! Boundary detection internals.
//!
//! The domain layer owns the segmentation pipeline: [`lexis`] recognizes
//! word shapes, [`abbreviations`] holds the exception dictionary,
//! [`classifier`] turns each word into a boundary verdict, and [`merge`]
//! folds the verdicts into sentence spans. Nothing here touches input
//! handling or configuration; the api layer wires those in.

pub(crate) mod abbreviations;
pub(crate) mod classifier;
pub(crate) mod lexis;
pub(crate) mod merge;
