//! Batch driver: summarize a directory of results logs into two CSV tables.

use crate::Result;
use crate::summary::{self, RunSummary};
use anyhow::Context;
use chrono::Local;
use std::fs::{self, File};
use std::io::Write;
use std::path::{Path, PathBuf};

/// Only directory entries with this name prefix are treated as results logs.
const RESULTS_PREFIX: &str = "results_";

/// Column labels shared by both tables. The ten step columns are fixed
/// labels; a run with a different step count carries that many value
/// columns in its row regardless.
const TABLE_HEADER: &str =
    "nodes, cores, memslices, apps, cap_func, allocs, steps, 1, 2, 3, 4, 5, 6, 7, 8, 9, 10, avg";

/// Paths of the two tables written by a batch run.
#[derive(Debug)]
pub struct BatchOutput {
    pub timing_table: PathBuf,
    pub variable_table: PathBuf,
}

/// Summarize every `results_*` file in `dir`, appending one row per run to
/// a solver-time table and a variable-count table created inside `dir`.
/// Table names embed the batch start time so reruns never collide.
///
/// The first file that fails to summarize aborts the whole batch; rows
/// already written stay in the tables.
pub fn run_batch(dir: &Path) -> Result<BatchOutput> {
    let stamp = Local::now().format("%Y%m%d-%H%M%S");
    let timing_table = dir.join(format!("solver_times_{stamp}.csv"));
    let variable_table = dir.join(format!("variable_counts_{stamp}.csv"));

    let mut timing = File::create(&timing_table)
        .with_context(|| format!("create {}", timing_table.display()))?;
    let mut variables = File::create(&variable_table)
        .with_context(|| format!("create {}", variable_table.display()))?;
    writeln!(timing, "{TABLE_HEADER}")?;
    writeln!(variables, "{TABLE_HEADER}")?;

    for entry in fs::read_dir(dir).with_context(|| format!("list {}", dir.display()))? {
        let entry = entry?;
        let name = entry.file_name();
        let Some(name) = name.to_str() else {
            continue;
        };
        if !name.starts_with(RESULTS_PREFIX) || !entry.file_type()?.is_file() {
            continue;
        }

        println!("Parsing {name}");
        let summary = summarize_file(&entry.path(), name)?;
        println!("Results config: {}", summary.config);

        writeln!(timing, "{}", summary.solver_row())?;
        writeln!(variables, "{}", summary.variable_row())?;
    }

    Ok(BatchOutput {
        timing_table,
        variable_table,
    })
}

fn summarize_file(path: &Path, name: &str) -> Result<RunSummary> {
    let contents = fs::read_to_string(path).with_context(|| format!("read {}", path.display()))?;
    let summary = summary::summarize(name, &contents)
        .with_context(|| format!("summarize {}", path.display()))?;
    Ok(summary)
}
