use anyhow::{Context, anyhow};
use clap::{Parser, Subcommand};
use std::path::Path;

mod batch;
mod config;
mod error;
mod steps;
mod summary;

pub type Result<T> = anyhow::Result<T>;

#[derive(Parser)]
#[command(name = "schedsim-results")]
#[command(about = "Scheduler simulation results summarizer", long_about = None)]
struct Cli {
    #[command(subcommand)]
    cmd: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Summarize a single results log and print its two summary rows.
    Parse {
        /// Path to a results log named `results_<config>.<ext>`.
        file: String,
    },
    /// Summarize every results log in a directory into two CSV tables.
    Batch {
        /// Directory containing `results_*` log files.
        dir: String,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.cmd {
        Commands::Parse { file } => {
            let path = Path::new(&file);
            let name = path
                .file_name()
                .and_then(|n| n.to_str())
                .ok_or_else(|| anyhow!("not a file path: {}", file))?;
            let contents = std::fs::read_to_string(path)
                .with_context(|| format!("read results log {}", file))?;

            let summary = summary::summarize(name, &contents)
                .with_context(|| format!("summarize {}", file))?;

            println!("Results config: {}", summary.config);
            println!("{}", summary.variable_row());
            println!("{}", summary.solver_row());
        }
        Commands::Batch { dir } => {
            let out = batch::run_batch(Path::new(&dir))?;
            println!("Wrote {}", out.timing_table.display());
            println!("Wrote {}", out.variable_table.display());
        }
    }

    Ok(())
}
