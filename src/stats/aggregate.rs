//! Summary aggregation over run records
//!
//! One fold per condition: totals for cycles and idle FU cycles, a
//! cycle-weighted mean for power, and a running maximum for registers.
//! Running f64 sums are sufficient at the expected scale (hundreds to low
//! thousands of records per source).

use crate::ingest::{Metric, RunRecord};
use serde::{Deserialize, Serialize};

/// Aggregated statistics for one experiment condition.
///
/// The empty input is well defined: all four fields are zero and no
/// division is ever performed.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct SummaryBundle {
    total_cycles: f64,
    weighted_avg_power: f64,
    total_idle_fu_cycles: f64,
    max_registers: f64,
}

impl SummaryBundle {
    /// Get the sum of cycle counts.
    #[must_use]
    pub const fn total_cycles(&self) -> f64 {
        self.total_cycles
    }

    /// Get the cycle-weighted mean power.
    ///
    /// Defined as Σ(cycle·power)/Σcycle over valid records, and exactly
    /// 0.0 when Σcycle is 0, including the empty case. Never NaN.
    #[must_use]
    pub const fn weighted_avg_power(&self) -> f64 {
        self.weighted_avg_power
    }

    /// Get the sum of idle functional-unit cycles.
    #[must_use]
    pub const fn total_idle_fu_cycles(&self) -> f64 {
        self.total_idle_fu_cycles
    }

    /// Get the maximum register count, 0.0 over an empty sequence.
    #[must_use]
    pub const fn max_registers(&self) -> f64 {
        self.max_registers
    }

    /// Get the aggregated value for `metric`.
    #[must_use]
    pub const fn metric(&self, metric: Metric) -> f64 {
        match metric {
            Metric::Cycle => self.total_cycles,
            Metric::AvgPower => self.weighted_avg_power,
            Metric::IdleFuCycles => self.total_idle_fu_cycles,
            Metric::NumRegisters => self.max_registers,
        }
    }
}

/// Fold `records` into a summary bundle.
#[must_use]
pub fn aggregate(records: &[RunRecord]) -> SummaryBundle {
    let mut total_cycles = 0.0_f64;
    let mut weighted_power_sum = 0.0_f64;
    let mut total_idle_fu_cycles = 0.0_f64;
    let mut max_registers = 0.0_f64;

    for record in records {
        total_cycles += record.cycle();
        weighted_power_sum += record.cycle() * record.avg_power();
        total_idle_fu_cycles += record.idle_fu_cycles();
        max_registers = max_registers.max(record.num_registers());
    }

    let weighted_avg_power = if total_cycles > 0.0 {
        weighted_power_sum / total_cycles
    } else {
        0.0
    };

    SummaryBundle {
        total_cycles,
        weighted_avg_power,
        total_idle_fu_cycles,
        max_registers,
    }
}
