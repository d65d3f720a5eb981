//! Baseline/treatment comparison of summary bundles
//!
//! For each experiment pair and each metric, the comparator emits the
//! baseline value, the treatment value, and the normalized ratio
//! treatment/baseline. A zero baseline yields the sentinel ratio 0.0
//! rather than infinity or a fault. Row order is the fixed metric order;
//! pair order is whatever the caller supplied. Downstream rendering
//! depends on both orders being stable.

use crate::error::{Error, Result};
use crate::ingest::Metric;
use crate::stats::aggregate::SummaryBundle;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// A named association of a baseline condition and a treatment condition.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExperimentPair {
    name: String,
    baseline: String,
    treatment: String,
}

impl ExperimentPair {
    /// Create a pair from its name and the two condition labels.
    #[must_use]
    pub fn new(
        name: impl Into<String>,
        baseline: impl Into<String>,
        treatment: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            baseline: baseline.into(),
            treatment: treatment.into(),
        }
    }

    /// Get the pair name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Get the baseline condition label.
    #[must_use]
    pub fn baseline(&self) -> &str {
        &self.baseline
    }

    /// Get the treatment condition label.
    #[must_use]
    pub fn treatment(&self) -> &str {
        &self.treatment
    }
}

/// One metric's baseline value, treatment value, and normalized ratio.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ComparisonEntry {
    metric: Metric,
    baseline: f64,
    treatment: f64,
    ratio: f64,
}

impl ComparisonEntry {
    /// Get the metric this entry compares.
    #[must_use]
    pub const fn metric(&self) -> Metric {
        self.metric
    }

    /// Get the baseline value.
    #[must_use]
    pub const fn baseline(&self) -> f64 {
        self.baseline
    }

    /// Get the treatment value.
    #[must_use]
    pub const fn treatment(&self) -> f64 {
        self.treatment
    }

    /// Get treatment/baseline, or 0.0 when the baseline is zero.
    #[must_use]
    pub const fn ratio(&self) -> f64 {
        self.ratio
    }
}

/// The four metric entries for one experiment pair, in metric order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PairComparison {
    pair: ExperimentPair,
    entries: Vec<ComparisonEntry>,
}

impl PairComparison {
    /// Get the pair this comparison belongs to.
    #[must_use]
    pub const fn pair(&self) -> &ExperimentPair {
        &self.pair
    }

    /// Get the entries in canonical metric order.
    #[must_use]
    pub fn entries(&self) -> &[ComparisonEntry] {
        &self.entries
    }

    /// Get the entry for `metric`.
    #[must_use]
    pub fn entry(&self, metric: Metric) -> &ComparisonEntry {
        // entries are always built in Metric::ALL order
        &self.entries[metric as usize]
    }
}

/// One presentation row: a metric with the reference column fixed at 1.0
/// followed by each treatment's ratio in pair order.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NormalizedRow {
    metric: Metric,
    reference: f64,
    ratios: Vec<f64>,
}

impl NormalizedRow {
    /// Get the metric for this row.
    #[must_use]
    pub const fn metric(&self) -> Metric {
        self.metric
    }

    /// Get the reference column value (always 1.0).
    #[must_use]
    pub const fn reference(&self) -> f64 {
        self.reference
    }

    /// Get the treatment ratios in pair order.
    #[must_use]
    pub fn ratios(&self) -> &[f64] {
        &self.ratios
    }
}

/// The full comparison output, grouped by pair and by metric.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ComparisonTable {
    pairs: Vec<PairComparison>,
}

impl ComparisonTable {
    /// Get the per-pair comparisons in caller-supplied order.
    #[must_use]
    pub fn pairs(&self) -> &[PairComparison] {
        &self.pairs
    }

    /// Get the presentation rows: one per metric in canonical order,
    /// reference column fixed at 1.0, then each pair's ratio in pair
    /// order.
    #[must_use]
    pub fn normalized_rows(&self) -> Vec<NormalizedRow> {
        Metric::ALL
            .iter()
            .map(|metric| NormalizedRow {
                metric: *metric,
                reference: 1.0,
                ratios: self
                    .pairs
                    .iter()
                    .map(|p| p.entry(*metric).ratio())
                    .collect(),
            })
            .collect()
    }
}

/// Compare every pair's baseline and treatment bundles.
///
/// # Errors
///
/// Returns [`Error::UnknownLabel`] if a pair references a label absent
/// from `bundles`. That is the comparator's only fault path; a zero
/// baseline is data, not an error, and yields the sentinel ratio 0.0.
pub fn compare(
    pairs: &[ExperimentPair],
    bundles: &HashMap<String, SummaryBundle>,
) -> Result<ComparisonTable> {
    let mut out = Vec::with_capacity(pairs.len());

    for pair in pairs {
        let baseline = bundles
            .get(pair.baseline())
            .ok_or_else(|| Error::UnknownLabel(pair.baseline().to_string()))?;
        let treatment = bundles
            .get(pair.treatment())
            .ok_or_else(|| Error::UnknownLabel(pair.treatment().to_string()))?;

        let entries = Metric::ALL
            .iter()
            .map(|metric| {
                let b = baseline.metric(*metric);
                let t = treatment.metric(*metric);
                #[allow(clippy::float_cmp)]
                let ratio = if b == 0.0 { 0.0 } else { t / b };
                ComparisonEntry {
                    metric: *metric,
                    baseline: b,
                    treatment: t,
                    ratio,
                }
            })
            .collect();

        out.push(PairComparison {
            pair: pair.clone(),
            entries,
        });
    }

    Ok(ComparisonTable { pairs: out })
}
