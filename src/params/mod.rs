//! Scenario parameters and scenario file loading

mod data;
pub mod loader;

pub use data::{ParameterError, ParameterSet, MAX_TERM_MONTHS};
pub use loader::{load_parameters, load_parameters_from_reader};
