//! Log source catalog: label → source mapping and per-condition
//! summarization
//!
//! File I/O lives here and only here; the ingest and stats layers operate
//! on text already read into memory. I/O failures propagate untranslated.
//! Independent sources share no mutable state, so with the `parallel`
//! feature the catalog fans them out across the rayon thread pool; order
//! within each source is always preserved.

use crate::error::Result;
use crate::ingest::LogParser;
use crate::stats::{aggregate, SummaryBundle};
#[cfg(feature = "parallel")]
use rayon::prelude::*;
use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::debug;

#[derive(Debug, Clone)]
enum SourceKind {
    File(PathBuf),
    Text(String),
}

/// Caller-supplied mapping from condition labels to log sources.
///
/// Registration order is kept for deterministic processing; registering
/// the same label twice keeps the later source.
#[derive(Debug, Clone, Default)]
pub struct SourceCatalog {
    sources: Vec<(String, SourceKind)>,
}

impl SourceCatalog {
    /// Create an empty catalog.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Check if the catalog has no sources.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.sources.is_empty()
    }

    /// Get the number of registered sources.
    #[must_use]
    pub fn len(&self) -> usize {
        self.sources.len()
    }

    /// Get the registered labels in registration order.
    #[must_use]
    pub fn labels(&self) -> Vec<&str> {
        self.sources.iter().map(|(label, _)| label.as_str()).collect()
    }

    /// Register a file-backed source under `label`.
    pub fn add_file(&mut self, label: impl Into<String>, path: impl AsRef<Path>) {
        self.sources.push((
            label.into(),
            SourceKind::File(path.as_ref().to_path_buf()),
        ));
    }

    /// Register an in-memory text source under `label`.
    pub fn add_text(&mut self, label: impl Into<String>, text: impl Into<String>) {
        self.sources.push((label.into(), SourceKind::Text(text.into())));
    }

    /// Parse and aggregate every source into a label → bundle mapping.
    ///
    /// Each source is processed independently; with the `parallel`
    /// feature the sources run on the rayon thread pool. A source with
    /// zero valid records yields the all-zero bundle, not an error.
    ///
    /// # Errors
    ///
    /// Returns [`crate::Error::Io`] if a file-backed source cannot be
    /// read.
    pub fn summarize(&self, parser: &LogParser) -> Result<HashMap<String, SummaryBundle>> {
        #[cfg(feature = "parallel")]
        let iter = self.sources.par_iter();
        #[cfg(not(feature = "parallel"))]
        let iter = self.sources.iter();

        let summaries: Result<Vec<(String, SummaryBundle)>> = iter
            .map(|(label, kind)| Ok((label.clone(), Self::summarize_one(parser, label, kind)?)))
            .collect();

        Ok(summaries?.into_iter().collect())
    }

    fn summarize_one(
        parser: &LogParser,
        label: &str,
        kind: &SourceKind,
    ) -> Result<SummaryBundle> {
        let text = match kind {
            SourceKind::File(path) => fs::read_to_string(path)?,
            SourceKind::Text(text) => text.clone(),
        };

        let records = parser.parse(&text);
        debug!(label, records = records.len(), "summarized source");
        Ok(aggregate(&records))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = "Running : r1\nCycle : 100\nAvg Power : 2.0\nIdle FU Cycles : 5\nNum of Registers : 20\n";

    #[test]
    fn test_catalog_starts_empty() {
        let catalog = SourceCatalog::new();
        assert!(catalog.is_empty());
        assert_eq!(catalog.len(), 0);
    }

    #[test]
    fn test_summarize_text_sources() {
        let mut catalog = SourceCatalog::new();
        catalog.add_text("cond-a", SAMPLE);
        catalog.add_text("cond-b", "");

        let bundles = catalog.summarize(&LogParser::new()).unwrap();
        assert_eq!(bundles.len(), 2);
        assert!((bundles["cond-a"].total_cycles() - 100.0).abs() < f64::EPSILON);
        assert_eq!(bundles["cond-b"], SummaryBundle::default());
    }

    #[test]
    fn test_duplicate_label_keeps_later_source() {
        let mut catalog = SourceCatalog::new();
        catalog.add_text("cond", SAMPLE);
        catalog.add_text("cond", "");

        let bundles = catalog.summarize(&LogParser::new()).unwrap();
        assert_eq!(bundles.len(), 1);
        assert_eq!(bundles["cond"], SummaryBundle::default());
    }

    #[test]
    fn test_missing_file_is_io_error() {
        let mut catalog = SourceCatalog::new();
        catalog.add_file("gone", "/nonexistent/runstat-test.log");
        let err = catalog.summarize(&LogParser::new()).unwrap_err();
        assert!(matches!(err, crate::error::Error::Io(_)));
    }

    #[test]
    fn test_labels_keep_registration_order() {
        let mut catalog = SourceCatalog::new();
        catalog.add_text("b", "");
        catalog.add_text("a", "");
        assert_eq!(catalog.labels(), vec!["b", "a"]);
    }
}
