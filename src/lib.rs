//! Acquisition Compare - monthly projection of buying a home with a mortgage
//! versus a group-buy (consortium) plan
//!
//! This library provides:
//! - A validated, immutable scenario parameter set
//! - The mortgage projection (constant amortization, monetary correction)
//! - The consortium projection (subsidized installments, rent and reserve until award)
//! - End-of-horizon comparison and award-month sweeps
//! - CSV/JSON export of the monthly records

pub mod params;
pub mod projection;
pub mod comparison;
pub mod scenario;
pub mod export;
mod error;

// Re-export commonly used types
pub use error::{Error, Result};
pub use params::{ParameterError, ParameterSet};
pub use projection::{MonthlyRecord, Projection, ProjectionConfig, ProjectionEngine, ProjectionPair};
pub use comparison::{compare, Comparison, ComparisonError, Verdict};
pub use scenario::ScenarioRunner;
