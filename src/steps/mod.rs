//! Extraction of the two repeating per-step signals from a results log.

pub mod parse;

pub use parse::parse_step_data;

/// Per-step values in order of appearance in the log.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StepSeries {
    /// Solver problem size, one entry per step.
    pub var_counts: Vec<u64>,
    /// Solver wall time in microseconds, one entry per step.
    pub solver_times_us: Vec<u64>,
}
