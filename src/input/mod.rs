use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use thiserror::Error;

pub mod cases;
pub mod profile;

pub use cases::{CaseRecord, parse_cases};
pub use profile::load_profile;

#[derive(Debug, Error)]
pub enum InputError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("missing input: {0}")]
    MissingInput(String),
    #[error("parse error at line {line}: {msg}")]
    Parse { line: usize, msg: String },
    #[error("invalid profile: {0}")]
    Profile(#[from] serde_json::Error),
}

pub fn load_cases(path: &Path) -> Result<Vec<CaseRecord>, InputError> {
    if !path.exists() {
        return Err(InputError::MissingInput(path.display().to_string()));
    }
    let reader = BufReader::new(File::open(path)?);
    let cases = parse_cases(reader)?;
    tracing::info!(path = %path.display(), n_cases = cases.len(), "loaded case file");
    Ok(cases)
}

#[cfg(test)]
#[path = "../../tests/src_inline/input/tests.rs"]
mod tests;
