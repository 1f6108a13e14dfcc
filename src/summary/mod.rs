//! Per-run summarization: drive the two extractors and fold the series.

use crate::config::{self, RunConfig};
use crate::error::RunError;
use crate::steps;

/// Final per-run record, rendered straight into the aggregate tables.
#[derive(Debug, Clone, PartialEq)]
pub struct RunSummary {
    pub config: RunConfig,
    /// One variable count per step, duplicates already dropped.
    pub var_counts: Vec<u64>,
    pub var_avg: f64,
    /// One solve time per step, in microseconds.
    pub solver_times_us: Vec<u64>,
    pub solver_avg: f64,
}

/// Summarize one results log: decode and cross-check the configuration,
/// extract the per-step series, and average them.
///
/// There is no best-effort mode: the first failure aborts the summary.
pub fn summarize(file_name: &str, contents: &str) -> Result<RunSummary, RunError> {
    let config = config::parse_config(file_name, contents)?;
    let series = steps::parse_step_data(contents, config.steps)?;

    let var_avg = mean(&series.var_counts);
    let solver_avg = mean(&series.solver_times_us);

    Ok(RunSummary {
        config,
        var_counts: series.var_counts,
        var_avg,
        solver_times_us: series.solver_times_us,
        solver_avg,
    })
}

impl RunSummary {
    /// Variable-count table row.
    pub fn variable_row(&self) -> String {
        self.row(&self.var_counts, self.var_avg)
    }

    /// Solver-time table row.
    pub fn solver_row(&self) -> String {
        self.row(&self.solver_times_us, self.solver_avg)
    }

    /// `nodes, cores, memslices, apps, cap_func, allocs, steps` followed by
    /// one column per step value and the rounded average.
    fn row(&self, values: &[u64], avg: f64) -> String {
        let c = &self.config;
        let mut cols = vec![
            c.nodes.to_string(),
            c.cores_per_node.to_string(),
            c.memslices_per_node.to_string(),
            c.num_applications.to_string(),
            c.cap_function.to_string(),
            c.allocations.to_string(),
            c.steps.to_string(),
        ];
        cols.extend(values.iter().map(|v| v.to_string()));
        cols.push(format!("{avg:.2}"));
        cols.join(", ")
    }
}

/// Arithmetic mean rounded to two decimals, half away from zero.
fn mean(values: &[u64]) -> f64 {
    let sum: u64 = values.iter().sum();
    let avg = sum as f64 / values.len() as f64;
    (avg * 100.0).round() / 100.0
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    const FILE_NAME: &str = "results_2_4_8_3_1_100_2.log";

    fn contents() -> String {
        let mut lines = vec![
            "simulation starting".to_string(),
            "Creating a simulation with parameters: sim nodes=2, cores=4, memslices=8 \
             apps=3, allocations=100, fill=random cap=1 seed=42"
                .to_string(),
        ];
        for step in 0..2u64 {
            lines.push(format!("#Variables: {}", 1500 + step));
            lines.push(format!("#Variables: {}", 1500 + step));
            lines.push(format!(
                "Solver has run successfully in {}us Fetching result",
                500 + step
            ));
        }
        lines.join("\n")
    }

    #[test]
    fn summarizes_a_two_step_run() {
        let summary = summarize(FILE_NAME, &contents()).unwrap();
        assert_eq!(summary.config.steps, 2);
        assert_eq!(summary.var_counts, vec![1500, 1501]);
        assert_eq!(summary.solver_times_us, vec![500, 501]);
        assert_eq!(summary.var_avg, 1500.5);
        assert_eq!(summary.solver_avg, 500.5);
    }

    #[test]
    fn mean_is_rounded_to_two_decimals() {
        assert_eq!(mean(&[2, 4, 6]), 4.0);
        assert_eq!(mean(&[1, 2]), 1.5);
        assert_eq!(mean(&[10, 10, 11]), 10.33);
        assert_eq!(mean(&[10, 11, 11]), 10.67);
    }

    #[test]
    fn rows_list_config_series_and_average() {
        let summary = summarize(FILE_NAME, &contents()).unwrap();
        assert_eq!(
            summary.solver_row(),
            "2, 4, 8, 3, true, 100, 2, 500, 501, 500.50"
        );
        assert_eq!(
            summary.variable_row(),
            "2, 4, 8, 3, true, 100, 2, 1500, 1501, 1500.50"
        );
    }

    #[test]
    fn averages_format_with_two_decimals() {
        let summary = summarize(FILE_NAME, &contents()).unwrap();
        assert!(summary.solver_row().ends_with("500.50"));
    }

    #[test]
    fn config_failures_propagate_unchanged() {
        let broken = contents().replace("nodes=2,", "nodes=9,");
        match summarize(FILE_NAME, &broken) {
            Err(RunError::ConfigMismatch { field, .. }) => assert_eq!(field, "nodes"),
            other => panic!("expected config mismatch, got {other:?}"),
        }
    }

    #[test]
    fn step_count_failures_propagate_unchanged() {
        let truncated = contents()
            .lines()
            .filter(|l| !l.contains("successfully in 501us"))
            .collect::<Vec<_>>()
            .join("\n");
        match summarize(FILE_NAME, &truncated) {
            Err(RunError::StepCount {
                expected, actual, ..
            }) => {
                assert_eq!(expected, 2);
                assert_eq!(actual, 1);
            }
            other => panic!("expected step count error, got {other:?}"),
        }
    }
}
