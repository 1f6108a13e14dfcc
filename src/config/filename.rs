//! Decoding of the `results_*` file-name configuration encoding.

use crate::config::RunConfig;
use crate::error::RunError;
use regex::Regex;
use std::str::FromStr;

/// File names follow
/// `results_<nodes>_<cores>_<memslices>_<apps>_<capFlag>_<allocations>_<steps>.<ext>`.
/// Everything from the first dot of the final field (the extension) is
/// dropped before parsing.
const FILE_NAME_RE: &str = r"^results_(\d+)_(\d+)_(\d+)_(\d+)_([^_]*)_(\d+)_(\d+)(?:\..*)?$";

/// Decode a run configuration from a results file name.
pub fn decode(file_name: &str) -> Result<RunConfig, RunError> {
    let re = Regex::new(FILE_NAME_RE).unwrap();
    let caps = re.captures(file_name).ok_or_else(|| RunError::ConfigFormat {
        context: "results file name",
        detail: format!("{file_name:?} does not match the results_* naming convention"),
    })?;

    let config = RunConfig {
        nodes: field(&caps[1], "nodes")?,
        cores_per_node: field(&caps[2], "cores")?,
        memslices_per_node: field(&caps[3], "memslices")?,
        num_applications: field(&caps[4], "apps")?,
        // The flag is encoded by presence: any non-empty token, including
        // the literal "false", reads as true.
        cap_function: !caps[5].is_empty(),
        allocations: field(&caps[6], "allocations")?,
        steps: field(&caps[7], "steps")?,
    };

    for (value, name) in [
        (config.nodes as usize, "nodes"),
        (config.cores_per_node as usize, "cores"),
        (config.memslices_per_node as usize, "memslices"),
        (config.num_applications as usize, "apps"),
        (config.steps, "steps"),
    ] {
        if value == 0 {
            return Err(RunError::ConfigFormat {
                context: "results file name",
                detail: format!("{name} must be at least 1"),
            });
        }
    }

    Ok(config)
}

fn field<T: FromStr>(digits: &str, name: &'static str) -> Result<T, RunError> {
    digits.parse().map_err(|_| RunError::ConfigFormat {
        context: "results file name",
        detail: format!("{name} is not a valid integer: {digits:?}"),
    })
}
