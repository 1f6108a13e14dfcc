//! Decoding of the parameter line the simulator writes into the log body.
//!
//! The line looks like
//!
//! `Creating a simulation with parameters: sim nodes=2, cores=4, memslices=8 apps=3, allocations=100, fill=random cap=true seed=42`
//!
//! and is decoded positionally: the text after the last colon is split on
//! whitespace and each field is read from a fixed token index.

use crate::error::RunError;

/// The unique line announcing the simulation parameters.
pub const CONFIG_PHRASE: &str = "Creating a simulation with parameters";

/// Positional schema of the parameter list. Most values carry exactly one
/// trailing punctuation character (a comma) that is dropped before integer
/// parsing; `memslices` is the one numeric field that does not.
const NODES: Field = Field {
    index: 1,
    name: "nodes",
    trailing_punctuation: true,
};
const CORES: Field = Field {
    index: 2,
    name: "cores_per_node",
    trailing_punctuation: true,
};
const MEMSLICES: Field = Field {
    index: 3,
    name: "memslices_per_node",
    trailing_punctuation: false,
};
const APPS: Field = Field {
    index: 4,
    name: "num_applications",
    trailing_punctuation: true,
};
const ALLOCATIONS: Field = Field {
    index: 5,
    name: "allocations",
    trailing_punctuation: true,
};
const CAP_FUNCTION_INDEX: usize = 7;

struct Field {
    index: usize,
    name: &'static str,
    trailing_punctuation: bool,
}

/// Configuration as re-encoded inside the log body. `steps` has no in-body
/// counterpart.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BodyConfig {
    pub nodes: u32,
    pub cores_per_node: u32,
    pub memslices_per_node: u32,
    pub num_applications: u32,
    pub cap_function: bool,
    pub allocations: u32,
}

/// Find the parameter line and decode it through the positional schema.
///
/// The simulator writes the line once; if it somehow appears more than once
/// the first occurrence wins.
pub fn decode(contents: &str) -> Result<BodyConfig, RunError> {
    let line = contents
        .lines()
        .find(|l| l.contains(CONFIG_PHRASE))
        .ok_or_else(|| RunError::ConfigFormat {
            context: "configuration line",
            detail: format!("no line containing {CONFIG_PHRASE:?}"),
        })?;

    let (_, params) = line.rsplit_once(':').ok_or_else(|| RunError::ConfigFormat {
        context: "configuration line",
        detail: format!("no colon before the parameter list: {line:?}"),
    })?;
    let tokens: Vec<&str> = params.split_whitespace().collect();

    Ok(BodyConfig {
        nodes: numeric(&tokens, NODES)?,
        cores_per_node: numeric(&tokens, CORES)?,
        memslices_per_node: numeric(&tokens, MEMSLICES)?,
        num_applications: numeric(&tokens, APPS)?,
        cap_function: !value_at(&tokens, CAP_FUNCTION_INDEX, "cap_function")?.is_empty(),
        allocations: numeric(&tokens, ALLOCATIONS)?,
    })
}

/// Value part of the token at `index`: the text after its last `=`, or the
/// whole token when it has none.
fn value_at<'a>(
    tokens: &[&'a str],
    index: usize,
    name: &'static str,
) -> Result<&'a str, RunError> {
    let token = tokens.get(index).ok_or_else(|| RunError::ConfigFormat {
        context: "configuration line",
        detail: format!("missing token {index} ({name})"),
    })?;
    Ok(match token.rsplit_once('=') {
        Some((_, value)) => value,
        None => token,
    })
}

fn numeric(tokens: &[&str], spec: Field) -> Result<u32, RunError> {
    let value = value_at(tokens, spec.index, spec.name)?;
    let digits = if spec.trailing_punctuation {
        let mut chars = value.chars();
        chars.next_back().ok_or_else(|| RunError::ConfigFormat {
            context: "configuration line",
            detail: format!("empty value for {}", spec.name),
        })?;
        chars.as_str()
    } else {
        value
    };
    digits.parse().map_err(|_| RunError::ConfigFormat {
        context: "configuration line",
        detail: format!("{} is not a valid integer: {digits:?}", spec.name),
    })
}
