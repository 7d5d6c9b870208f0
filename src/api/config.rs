//! Segmenter configuration

/// Tuning knobs for [`Segmenter`](crate::Segmenter).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SegmenterConfig {
    /// Treat every bare line feed as a hard sentence boundary.
    ///
    /// Enabled by default. The newline itself belongs to no sentence: the
    /// span before it ends at the last word and the next span starts after
    /// the line feed. When disabled, line feeds are ordinary words and the
    /// punctuation rules alone decide where sentences end.
    pub newline_boundary: bool,
}

impl Default for SegmenterConfig {
    fn default() -> Self {
        Self {
            newline_boundary: true,
        }
    }
}
