//! Public segmentation interface
//!
//! Thin layer over the domain pipeline: input conversion, configuration
//! and the [`Segmenter`] entry point.

mod config;
mod input;
mod segmenter;

pub use config::SegmenterConfig;
pub use input::Input;
pub use segmenter::{Segmenter, SegmenterBuilder};
