//! Monthly projections for the mortgage and group-buy tracks

pub mod rates;
mod records;
mod mortgage;
mod consortium;
mod engine;

pub use records::{MonthlyRecord, Projection, ProjectionSummary, Track};
pub use mortgage::{MortgageProjector, MortgageState};
pub use consortium::{AwardPhase, AwardPolicy, ConsortiumProjector, ConsortiumState, RentStop};
pub use engine::{ProjectionConfig, ProjectionEngine, ProjectionPair};
