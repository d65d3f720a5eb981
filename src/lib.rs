//! # Runstat: Run-Summary Log Analytics
//!
//! Runstat ingests semi-structured simulation/benchmark log output,
//! segments it into discrete run blocks, extracts a fixed set of numeric
//! fields per block via tolerant pattern matching, aggregates the
//! resulting records into per-condition summary statistics, and compares
//! treatment conditions against baselines as normalized ratios.
//!
//! ## Pipeline
//!
//! ```text
//! raw text ─> Segmenter ─> Block ─> Extractor ─> RunRecord
//!                                                    │
//!        SummaryBundle (per condition) <─ aggregate ─┘
//!                   │
//!        ComparisonTable <─ compare <─ ExperimentPair
//! ```
//!
//! The core is side-effect free and tolerant: malformed blocks are
//! dropped, empty sources aggregate to zero, and a zero baseline yields a
//! sentinel ratio instead of a fault.
//!
//! ## Example
//!
//! ```rust
//! use runstat::source::SourceCatalog;
//! use runstat::stats::ExperimentPair;
//! use runstat::Analyzer;
//!
//! let mut catalog = SourceCatalog::new();
//! catalog.add_text(
//!     "noatt",
//!     "Running : r1\nCycle : 100\nAvg Power : 2.0\n\
//!      Idle FU Cycles : 5\nNum of Registers : 20\n",
//! );
//! catalog.add_text(
//!     "att",
//!     "Running : r1\nCycle : 200\nAvg Power : 3.0\n\
//!      Idle FU Cycles : 10\nNum of Registers : 40\n",
//! );
//!
//! let analyzer = Analyzer::builder()
//!     .pair(ExperimentPair::new("lenet", "noatt", "att"))
//!     .build();
//!
//! let report = analyzer.analyze(&catalog)?;
//! let rows = report.table().normalized_rows();
//! assert!((rows[0].ratios()[0] - 2.0).abs() < f64::EPSILON);
//! # Ok::<(), runstat::Error>(())
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]

pub mod error;
pub mod ingest;
pub mod source;
pub mod stats;

pub use error::{Error, Result};

use ingest::LogParser;
use serde::Serialize;
use source::SourceCatalog;
use stats::{compare, ComparisonTable, ExperimentPair, SummaryBundle};
use std::collections::HashMap;

/// One-call pipeline facade: a configured parser plus the experiment
/// pairs to compare.
#[derive(Debug, Clone, Default)]
pub struct Analyzer {
    parser: LogParser,
    pairs: Vec<ExperimentPair>,
}

impl Analyzer {
    /// Create an analyzer builder.
    #[must_use]
    pub fn builder() -> AnalyzerBuilder {
        AnalyzerBuilder::default()
    }

    /// Get the configured parser.
    #[must_use]
    pub const fn parser(&self) -> &LogParser {
        &self.parser
    }

    /// Get the experiment pairs.
    #[must_use]
    pub fn pairs(&self) -> &[ExperimentPair] {
        &self.pairs
    }

    /// Summarize every catalog source, then compare the experiment pairs.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Io`] if a file-backed source cannot be read, or
    /// [`Error::UnknownLabel`] if a pair references a label the catalog
    /// does not define.
    pub fn analyze(&self, catalog: &SourceCatalog) -> Result<AnalysisReport> {
        let bundles = catalog.summarize(&self.parser)?;
        let table = compare(&self.pairs, &bundles)?;
        Ok(AnalysisReport { bundles, table })
    }
}

/// Analyzer builder
#[derive(Debug, Default)]
pub struct AnalyzerBuilder {
    parser: LogParser,
    pairs: Vec<ExperimentPair>,
}

impl AnalyzerBuilder {
    /// Set a custom parser (marker and pattern table).
    #[must_use]
    pub fn parser(mut self, parser: LogParser) -> Self {
        self.parser = parser;
        self
    }

    /// Add one experiment pair.
    #[must_use]
    pub fn pair(mut self, pair: ExperimentPair) -> Self {
        self.pairs.push(pair);
        self
    }

    /// Add several experiment pairs, preserving order.
    #[must_use]
    pub fn pairs(mut self, pairs: impl IntoIterator<Item = ExperimentPair>) -> Self {
        self.pairs.extend(pairs);
        self
    }

    /// Build the analyzer.
    #[must_use]
    pub fn build(self) -> Analyzer {
        Analyzer {
            parser: self.parser,
            pairs: self.pairs,
        }
    }
}

/// Output of a full pipeline run: per-condition bundles and the derived
/// comparison table.
#[derive(Debug, Clone, Serialize)]
pub struct AnalysisReport {
    bundles: HashMap<String, SummaryBundle>,
    table: ComparisonTable,
}

impl AnalysisReport {
    /// Get the label → bundle mapping.
    #[must_use]
    pub const fn bundles(&self) -> &HashMap<String, SummaryBundle> {
        &self.bundles
    }

    /// Get the comparison table.
    #[must_use]
    pub const fn table(&self) -> &ComparisonTable {
        &self.table
    }
}

/// Install an env-filtered fmt subscriber for dropped-block diagnostics.
///
/// Logging is opt-in: the core only emits `tracing` events, and nothing
/// is printed unless a subscriber is installed. Respects `RUST_LOG`; does
/// nothing if a global subscriber is already set.
pub fn init_tracing() {
    use tracing_subscriber::EnvFilter;

    let _ = tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .try_init();
}
