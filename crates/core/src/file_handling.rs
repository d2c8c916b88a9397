//! Reading policy documents from disk.

use std::fs::File;

use log::debug;

use crate::error::{Error, Result};
use crate::model::policy::Policy;

fn get_reader(file_description: &str, path: &str) -> Result<File> {
    File::open(path)
        .map_err(|e| Error::io_error(file_description.to_string(), path.to_string(), e))
}

/// Reads and validates a policy from a YAML document.
///
/// The document holds the four raw fields as strings:
///
/// ```yaml
/// insurer: "AIA"
/// number: "123"
/// name: "Term Life"
/// commission: "12.5"
/// ```
///
/// # Errors
///
/// Returns an error if:
/// - The file cannot be opened
/// - The file contains invalid YAML
/// - A field is missing or breaks its constraint
pub fn read_policy_file(path: &str) -> Result<Policy> {
    let reader = get_reader("policy", path)?;
    debug!("Reading policy from `{path}`");

    serde_yaml::from_reader(reader).map_err(|e| {
        Error::yaml_error(
            "reading".to_string(),
            "policy".to_string(),
            path.to_string(),
            e,
        )
    })
}
