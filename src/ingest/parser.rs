//! Run parsing: segmentation composed with field extraction

use crate::ingest::extract::Extractor;
use crate::ingest::record::RunRecord;
use crate::ingest::segment::Segmenter;
use tracing::debug;

/// Turns a full log text into an ordered sequence of validated records.
///
/// A parser is the reusable unit of configuration: it owns a
/// [`Segmenter`] and an [`Extractor`] and can be shared across threads
/// when summarizing many sources.
#[derive(Debug, Clone, Default)]
pub struct LogParser {
    segmenter: Segmenter,
    extractor: Extractor,
}

impl LogParser {
    /// Create a parser with the default marker and pattern table.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the segmenter.
    #[must_use]
    pub fn segmenter(mut self, segmenter: Segmenter) -> Self {
        self.segmenter = segmenter;
        self
    }

    /// Replace the extractor.
    #[must_use]
    pub fn extractor(mut self, extractor: Extractor) -> Self {
        self.extractor = extractor;
        self
    }

    /// Parse `text` into records, preserving appearance order.
    ///
    /// Incomplete blocks are dropped silently; empty or marker-free input
    /// yields an empty sequence. This never fails.
    #[must_use]
    pub fn parse(&self, text: &str) -> Vec<RunRecord> {
        let blocks = self.segmenter.segment(text.lines());
        let total = blocks.len();

        let records: Vec<RunRecord> = blocks
            .iter()
            .filter_map(|block| self.extractor.extract(block))
            .collect();

        debug!(
            blocks = total,
            records = records.len(),
            dropped = total - records.len(),
            "parsed log"
        );

        records
    }
}
