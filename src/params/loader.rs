//! Load scenario parameters from JSON files
//!
//! Missing fields fall back to `ParameterSet::default()`, so a scenario file
//! only needs to list what differs from the standard case.

use super::ParameterSet;
use crate::Error;
use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

/// Default scenario file looked up by the binaries
pub const DEFAULT_SCENARIO_PATH: &str = "data/scenario.json";

/// Read and validate a scenario from any reader
pub fn load_parameters_from_reader<R: Read>(reader: R) -> Result<ParameterSet, Error> {
    let params: ParameterSet = serde_json::from_reader(reader)?;
    params.validate()?;
    Ok(params)
}

/// Read and validate a scenario file
pub fn load_parameters(path: &Path) -> Result<ParameterSet, Error> {
    let file = File::open(path)?;
    let params = load_parameters_from_reader(BufReader::new(file))?;
    log::info!("Loaded scenario from {}", path.display());
    Ok(params)
}
