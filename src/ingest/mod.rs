//! Log ingestion: segmentation, field extraction, and run parsing
//!
//! ## Pipeline
//!
//! ```text
//! raw text ──> Segmenter ──> Block ──> Extractor ──> RunRecord
//! ```
//!
//! Every stage is tolerant: input that does not fit the expected shape
//! yields fewer blocks or fewer records, never an error.
//!
//! ## Usage
//!
//! ```rust
//! use runstat::ingest::LogParser;
//!
//! let text = "Running : conv0\nCycle : 100\nAvg Power : 2.0\n\
//!             Idle FU Cycles : 5\nNum of Registers : 20\n";
//! let records = LogParser::new().parse(text);
//! assert_eq!(records.len(), 1);
//! assert_eq!(records[0].run(), "conv0");
//! ```

mod extract;
mod parser;
mod record;
mod segment;

pub use extract::{default_patterns, Extractor, FieldPattern};
pub use parser::LogParser;
pub use record::{Metric, RunRecord};
pub use segment::{Block, Segmenter, DEFAULT_MARKER};
