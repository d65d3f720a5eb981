//! Field extraction from run blocks
//!
//! Field definitions are data, not control flow: the extractor holds a
//! declarative table of (metric, pattern) entries and applies each one to
//! the full block text. A block that fails any pattern, or whose matched
//! substring does not parse as a float, is dropped whole. Real logs carry
//! header-only and truncated blocks plus unrelated diagnostic text, and
//! the drop policy is what skips them.

use crate::error::Result;
use crate::ingest::record::{Metric, RunRecord};
use crate::ingest::segment::Block;
use regex::Regex;
use tracing::debug;

const CYCLE_PATTERN: &str = r"Cycle\s*:\s*([\d.]+)";
const AVG_POWER_PATTERN: &str = r"Avg Power\s*:\s*([\d.]+)";
const IDLE_FU_CYCLES_PATTERN: &str = r"Idle FU Cycles\s*:\s*([\d.]+)";
// Upstream formatting inserts a varying suffix between this label and the
// colon, so the pattern stays permissive up to the first colon.
const NUM_REGISTERS_PATTERN: &str = r"Num of Registers[^:]*:\s*([\d.]+)";

/// One entry of the extraction table: a metric and the compiled pattern
/// that captures its value.
///
/// The first capture group must be the numeric value.
#[derive(Debug, Clone)]
pub struct FieldPattern {
    metric: Metric,
    regex: Regex,
}

impl FieldPattern {
    /// Compile a pattern for `metric`.
    ///
    /// # Errors
    ///
    /// Returns [`crate::Error::Pattern`] if the pattern does not compile.
    pub fn new(metric: Metric, pattern: &str) -> Result<Self> {
        Ok(Self {
            metric,
            regex: Regex::new(pattern)?,
        })
    }

    /// Get the metric this pattern captures.
    #[must_use]
    pub const fn metric(&self) -> Metric {
        self.metric
    }

    /// Get the pattern source text.
    #[must_use]
    pub fn pattern(&self) -> &str {
        self.regex.as_str()
    }

    fn capture(&self, text: &str) -> Option<f64> {
        self.regex
            .captures(text)?
            .get(1)?
            .as_str()
            .parse::<f64>()
            .ok()
    }
}

/// Applies a field pattern table to blocks, producing validated records.
#[derive(Debug, Clone)]
pub struct Extractor {
    patterns: Vec<FieldPattern>,
}

impl Default for Extractor {
    fn default() -> Self {
        Self::new()
    }
}

impl Extractor {
    /// Create an extractor with the default pattern table.
    #[must_use]
    pub fn new() -> Self {
        Self::with_patterns(default_patterns())
    }

    /// Create an extractor from a caller-supplied pattern table.
    ///
    /// The metric set is fixed: a table that does not cover all four
    /// metrics never produces a record, since every block then extracts
    /// as incomplete.
    #[must_use]
    pub fn with_patterns(patterns: Vec<FieldPattern>) -> Self {
        Self { patterns }
    }

    /// Get the pattern table.
    #[must_use]
    pub fn patterns(&self) -> &[FieldPattern] {
        &self.patterns
    }

    /// Extract a record from `block`, or `None` if the block is
    /// incomplete.
    ///
    /// Each pattern may match anywhere within the block text. A missing
    /// match or unparsable value drops the whole block; partial records
    /// are never emitted.
    #[must_use]
    pub fn extract(&self, block: &Block) -> Option<RunRecord> {
        let text = block.text();
        let mut values = [0.0_f64; 4];

        for (slot, metric) in Metric::ALL.iter().enumerate() {
            let value = self
                .patterns
                .iter()
                .find(|p| p.metric() == *metric)
                .and_then(|p| p.capture(&text));

            match value {
                Some(v) => values[slot] = v,
                None => {
                    debug!(
                        run = block.label(),
                        field = metric.label(),
                        "dropping incomplete block"
                    );
                    return None;
                }
            }
        }

        Some(RunRecord::new(
            block.label(),
            values[0],
            values[1],
            values[2],
            values[3],
        ))
    }
}

/// The default extraction table for run-summary logs.
///
/// # Panics
///
/// Never panics; the default patterns are compile-checked constants.
#[must_use]
pub fn default_patterns() -> Vec<FieldPattern> {
    [
        (Metric::Cycle, CYCLE_PATTERN),
        (Metric::AvgPower, AVG_POWER_PATTERN),
        (Metric::IdleFuCycles, IDLE_FU_CYCLES_PATTERN),
        (Metric::NumRegisters, NUM_REGISTERS_PATTERN),
    ]
    .into_iter()
    .map(|(metric, pattern)| {
        FieldPattern::new(metric, pattern).expect("default field patterns are valid")
    })
    .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ingest::segment::Segmenter;

    fn block_from(text: &str) -> Block {
        let blocks = Segmenter::new().segment(text.lines());
        assert_eq!(blocks.len(), 1);
        blocks.into_iter().next().unwrap()
    }

    #[test]
    fn test_extract_complete_block() {
        let block = block_from(
            "Running : conv0\nCycle : 100\nAvg Power : 2.5\nIdle FU Cycles : 5\nNum of Registers : 20\n",
        );
        let record = Extractor::new().extract(&block).expect("complete block");
        assert_eq!(record.run(), "conv0");
        assert!((record.cycle() - 100.0).abs() < f64::EPSILON);
        assert!((record.avg_power() - 2.5).abs() < f64::EPSILON);
        assert!((record.idle_fu_cycles() - 5.0).abs() < f64::EPSILON);
        assert!((record.num_registers() - 20.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_extract_drops_block_missing_any_field() {
        let extractor = Extractor::new();
        for missing in Metric::ALL {
            let lines: Vec<String> = Metric::ALL
                .iter()
                .filter(|m| **m != missing)
                .map(|m| format!("{} : 1.0", m.label()))
                .collect();
            let text = format!("Running : r\n{}\n", lines.join("\n"));
            let block = block_from(&text);
            assert!(
                extractor.extract(&block).is_none(),
                "block missing {} should drop",
                missing.label()
            );
        }
    }

    #[test]
    fn test_extract_register_label_suffix_tolerated() {
        let block = block_from(
            "Running : r\nCycle : 1\nAvg Power : 1\nIdle FU Cycles : 1\nNum of Registers v2-wide : 42\n",
        );
        let record = Extractor::new().extract(&block).expect("suffix tolerated");
        assert!((record.num_registers() - 42.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_extract_drops_unparsable_value() {
        // "..." matches the character class but is not a float
        let block = block_from(
            "Running : r\nCycle : ...\nAvg Power : 1\nIdle FU Cycles : 1\nNum of Registers : 1\n",
        );
        assert!(Extractor::new().extract(&block).is_none());
    }

    #[test]
    fn test_extract_matches_anywhere_in_block() {
        let block = block_from(
            "Running : r\nnoise line\nCycle : 7\ndiagnostic: ignored\nAvg Power : 3\nIdle FU Cycles : 2\nNum of Registers : 9\ntrailing noise\n",
        );
        let record = Extractor::new().extract(&block).expect("fields found");
        assert!((record.cycle() - 7.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_idle_cycles_does_not_satisfy_cycle_pattern() {
        // "Idle FU Cycles" must not double as the Cycle field
        let block = block_from(
            "Running : r\nAvg Power : 1\nIdle FU Cycles : 5\nNum of Registers : 1\n",
        );
        assert!(Extractor::new().extract(&block).is_none());
    }

    #[test]
    fn test_custom_pattern_table() {
        let patterns = vec![
            FieldPattern::new(Metric::Cycle, r"cycles=(\d+)").unwrap(),
            FieldPattern::new(Metric::AvgPower, r"power=([\d.]+)").unwrap(),
            FieldPattern::new(Metric::IdleFuCycles, r"idle=(\d+)").unwrap(),
            FieldPattern::new(Metric::NumRegisters, r"regs=(\d+)").unwrap(),
        ];
        let block = block_from("Running : r\ncycles=10 power=1.5 idle=2 regs=8\n");
        let record = Extractor::with_patterns(patterns)
            .extract(&block)
            .expect("custom table");
        assert!((record.avg_power() - 1.5).abs() < f64::EPSILON);
    }

    #[test]
    fn test_invalid_pattern_is_a_construction_error() {
        assert!(FieldPattern::new(Metric::Cycle, r"([").is_err());
    }
}
