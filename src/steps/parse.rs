//! Scanning for the variable-count and solver-time announcement lines.

use crate::error::RunError;
use crate::steps::StepSeries;

/// Lines reporting the solver problem size start with this token.
///
/// Example: `#Variables: 1500`
const VAR_COUNT_PREFIX: &str = "#Variables:";

/// Lines reporting the per-step solve time contain this phrase.
///
/// Example: `Solver has run successfully in 523411µs Fetching result`
const SOLVER_TIME_PHRASE: &str = "Solver has run successfully in";

/// Scan a results log for the two announcement categories and extract one
/// integer per announcement.
///
/// The simulator prints the variable-count announcement twice per step, so
/// the scan must see exactly `2 * expected_steps` of them; only the second
/// copy of each pair is kept. Solver-time announcements must number exactly
/// `expected_steps`.
pub fn parse_step_data(contents: &str, expected_steps: usize) -> Result<StepSeries, RunError> {
    let mut var_lines = Vec::new();
    let mut solver_lines = Vec::new();
    for line in contents.lines() {
        if line.starts_with(VAR_COUNT_PREFIX) {
            var_lines.push(line);
        } else if line.contains(SOLVER_TIME_PHRASE) {
            solver_lines.push(line);
        }
    }

    if var_lines.len() != 2 * expected_steps {
        return Err(RunError::StepCount {
            kind: "variable-count",
            expected: 2 * expected_steps,
            actual: var_lines.len(),
        });
    }
    if solver_lines.len() != expected_steps {
        return Err(RunError::StepCount {
            kind: "solver-time",
            expected: expected_steps,
            actual: solver_lines.len(),
        });
    }

    let var_counts = var_lines
        .iter()
        .enumerate()
        .filter(|(i, _)| i % 2 == 1)
        .map(|(_, line)| var_count(line))
        .collect::<Result<_, _>>()?;
    let solver_times_us = solver_lines
        .iter()
        .map(|line| solver_time_us(line))
        .collect::<Result<_, _>>()?;

    Ok(StepSeries {
        var_counts,
        solver_times_us,
    })
}

/// The count is the second whitespace token of the line.
fn var_count(line: &str) -> Result<u64, RunError> {
    let token = line
        .split_whitespace()
        .nth(1)
        .ok_or_else(|| malformed("variable-count announcement", line, "missing value token"))?;
    token
        .parse()
        .map_err(|_| malformed("variable-count announcement", line, "value is not an integer"))
}

/// The time is the third-from-last whitespace token, its 2-character unit
/// suffix attached directly to the digits.
fn solver_time_us(line: &str) -> Result<u64, RunError> {
    let tokens: Vec<&str> = line.split_whitespace().collect();
    let token = tokens
        .len()
        .checked_sub(3)
        .and_then(|i| tokens.get(i))
        .ok_or_else(|| malformed("solver-time announcement", line, "missing time token"))?;
    // Drop the unit character-wise so a "µs" suffix works.
    let digits = token
        .char_indices()
        .nth_back(1)
        .map(|(i, _)| &token[..i])
        .ok_or_else(|| malformed("solver-time announcement", line, "time token too short"))?;
    digits
        .parse()
        .map_err(|_| malformed("solver-time announcement", line, "time is not an integer"))
}

fn malformed(context: &'static str, line: &str, detail: &str) -> RunError {
    RunError::ConfigFormat {
        context,
        detail: format!("{detail} in {line:?}"),
    }
}
