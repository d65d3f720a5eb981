//! Summary statistics and baseline/treatment comparison
//!
//! ```text
//! Vec<RunRecord> ──> aggregate ──> SummaryBundle (one per condition)
//!                                        │
//!                  ExperimentPair ──> compare ──> ComparisonTable
//! ```

mod aggregate;
mod compare;

pub use aggregate::{aggregate, SummaryBundle};
pub use compare::{
    compare, ComparisonEntry, ComparisonTable, ExperimentPair, NormalizedRow, PairComparison,
};
