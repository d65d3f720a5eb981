//! Run records - the four extracted metrics for one simulated execution

use serde::{Deserialize, Serialize};

/// Metric extracted from every run block.
///
/// The variant order is the canonical presentation order: every table,
/// row listing, and comparison output iterates metrics in this order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Metric {
    /// Total simulated cycles for the run
    Cycle,
    /// Average power over the run
    AvgPower,
    /// Cycles functional units spent idle
    IdleFuCycles,
    /// Registers allocated by the run
    NumRegisters,
}

impl Metric {
    /// All metrics in canonical presentation order.
    pub const ALL: [Self; 4] = [
        Self::Cycle,
        Self::AvgPower,
        Self::IdleFuCycles,
        Self::NumRegisters,
    ];

    /// Label as it appears in run-summary logs.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Cycle => "Cycle",
            Self::AvgPower => "Avg Power",
            Self::IdleFuCycles => "Idle FU Cycles",
            Self::NumRegisters => "Num of Registers",
        }
    }
}

/// The validated metric values extracted from exactly one block.
///
/// A record only exists when all four metrics matched within its
/// originating block; partial records are never constructed. The run
/// label is carried for diagnostics and reproducibility and plays no
/// part in aggregation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RunRecord {
    run: String,
    cycle: f64,
    avg_power: f64,
    idle_fu_cycles: f64,
    num_registers: f64,
}

impl RunRecord {
    /// Create a record from the four extracted values.
    #[must_use]
    pub fn new(
        run: impl Into<String>,
        cycle: f64,
        avg_power: f64,
        idle_fu_cycles: f64,
        num_registers: f64,
    ) -> Self {
        Self {
            run: run.into(),
            cycle,
            avg_power,
            idle_fu_cycles,
            num_registers,
        }
    }

    /// Get the run label from the block's start-marker line.
    #[must_use]
    pub fn run(&self) -> &str {
        &self.run
    }

    /// Get the cycle count.
    #[must_use]
    pub const fn cycle(&self) -> f64 {
        self.cycle
    }

    /// Get the average power.
    #[must_use]
    pub const fn avg_power(&self) -> f64 {
        self.avg_power
    }

    /// Get the idle functional-unit cycles.
    #[must_use]
    pub const fn idle_fu_cycles(&self) -> f64 {
        self.idle_fu_cycles
    }

    /// Get the register count.
    #[must_use]
    pub const fn num_registers(&self) -> f64 {
        self.num_registers
    }

    /// Get a metric value by name.
    #[must_use]
    pub const fn metric(&self, metric: Metric) -> f64 {
        match metric {
            Metric::Cycle => self.cycle,
            Metric::AvgPower => self.avg_power,
            Metric::IdleFuCycles => self.idle_fu_cycles,
            Metric::NumRegisters => self.num_registers,
        }
    }
}
