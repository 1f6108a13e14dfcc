//! Run configuration: filename decoding, in-body decoding, cross-validation.

pub mod body;
pub mod filename;

pub use body::BodyConfig;

use crate::error::RunError;
use std::fmt;

/// Configuration of one simulation run, decoded from its results file name.
///
/// Every field except `steps` is re-encoded by the simulator inside the log
/// body and must match it exactly; `steps` has no in-body counterpart and is
/// trusted from the filename alone.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunConfig {
    pub nodes: u32,
    pub cores_per_node: u32,
    pub memslices_per_node: u32,
    pub num_applications: u32,
    pub cap_function: bool,
    pub allocations: u32,
    pub steps: usize,
}

impl fmt::Display for RunConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "nodes={}, cores_per_node={}, memslices_per_node={}, num_applications={}, \
             cap_function={}, allocations={}, steps={}",
            self.nodes,
            self.cores_per_node,
            self.memslices_per_node,
            self.num_applications,
            self.cap_function,
            self.allocations,
            self.steps,
        )
    }
}

/// Decode the run configuration from the file name, then check it against
/// the parameter line the simulator wrote into the log body.
pub fn parse_config(file_name: &str, contents: &str) -> Result<RunConfig, RunError> {
    let config = filename::decode(file_name)?;
    let actual = body::decode(contents)?;

    check("nodes", config.nodes, actual.nodes)?;
    check("cores_per_node", config.cores_per_node, actual.cores_per_node)?;
    check(
        "memslices_per_node",
        config.memslices_per_node,
        actual.memslices_per_node,
    )?;
    check(
        "num_applications",
        config.num_applications,
        actual.num_applications,
    )?;
    check("allocations", config.allocations, actual.allocations)?;
    check("cap_function", config.cap_function, actual.cap_function)?;

    Ok(config)
}

fn check<T: PartialEq + fmt::Display>(
    field: &'static str,
    filename: T,
    body: T,
) -> Result<(), RunError> {
    if filename == body {
        Ok(())
    } else {
        Err(RunError::ConfigMismatch {
            field,
            filename: filename.to_string(),
            body: body.to_string(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn body_line(nodes: u32, cores: u32, memslices: u32, apps: u32, allocs: u32, cap: &str) -> String {
        format!(
            "Creating a simulation with parameters: sim nodes={nodes}, cores={cores}, \
             memslices={memslices} apps={apps}, allocations={allocs}, fill=random cap={cap} seed=42"
        )
    }

    #[test]
    fn accepts_matching_filename_and_body() {
        let contents = body_line(2, 4, 8, 3, 100, "true");
        let config = parse_config("results_2_4_8_3_1_100_2.log", &contents).unwrap();
        assert_eq!(
            config,
            RunConfig {
                nodes: 2,
                cores_per_node: 4,
                memslices_per_node: 8,
                num_applications: 3,
                cap_function: true,
                allocations: 100,
                steps: 2,
            }
        );
    }

    #[test]
    fn steps_has_no_in_body_counterpart() {
        let contents = body_line(2, 4, 8, 3, 100, "true");
        // Same body, different step counts: both accepted.
        assert_eq!(parse_config("results_2_4_8_3_1_100_2.log", &contents).unwrap().steps, 2);
        assert_eq!(parse_config("results_2_4_8_3_1_100_9.log", &contents).unwrap().steps, 9);
    }

    #[test]
    fn each_mismatched_field_is_named() {
        let cases = [
            (body_line(3, 4, 8, 3, 100, "true"), "nodes"),
            (body_line(2, 5, 8, 3, 100, "true"), "cores_per_node"),
            (body_line(2, 4, 9, 3, 100, "true"), "memslices_per_node"),
            (body_line(2, 4, 8, 4, 100, "true"), "num_applications"),
            (body_line(2, 4, 8, 3, 101, "true"), "allocations"),
            (body_line(2, 4, 8, 3, 100, ""), "cap_function"),
        ];
        for (contents, field) in cases {
            match parse_config("results_2_4_8_3_1_100_2.log", &contents) {
                Err(RunError::ConfigMismatch { field: got, .. }) => assert_eq!(got, field),
                other => panic!("expected mismatch on {field}, got {other:?}"),
            }
        }
    }

    #[test]
    fn truthy_flags_agree_even_when_spelled_differently() {
        // Both sides decode any non-empty token as true.
        let contents = body_line(2, 4, 8, 3, 100, "false");
        assert!(parse_config("results_2_4_8_3_1_100_2.log", &contents)
            .unwrap()
            .cap_function);
    }

    #[test]
    fn display_lists_every_field() {
        let contents = body_line(2, 4, 8, 3, 100, "true");
        let config = parse_config("results_2_4_8_3_1_100_2.log", &contents).unwrap();
        assert_eq!(
            config.to_string(),
            "nodes=2, cores_per_node=4, memslices_per_node=8, num_applications=3, \
             cap_function=true, allocations=100, steps=2"
        );
    }
}
