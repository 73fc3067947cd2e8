//! Runs both acquisition tracks for one parameter set

use crate::comparison::{compare, Comparison};
use crate::params::{ParameterError, ParameterSet};
use super::consortium::{AwardPolicy, ConsortiumProjector};
use super::mortgage::MortgageProjector;
use super::records::Projection;

/// Configuration for a projection run
#[derive(Debug, Clone)]
pub struct ProjectionConfig {
    /// Rent and indexation timing around the award month
    pub award_policy: AwardPolicy,

    /// Compute the two tracks on separate threads
    pub parallel: bool,
}

impl Default for ProjectionConfig {
    fn default() -> Self {
        Self {
            award_policy: AwardPolicy::default(),
            parallel: true,
        }
    }
}

/// Both projections over the same horizon
#[derive(Debug, Clone, PartialEq)]
pub struct ProjectionPair {
    pub mortgage: Projection,
    pub consortium: Projection,
}

/// Main projection engine
pub struct ProjectionEngine {
    params: ParameterSet,
    config: ProjectionConfig,
}

impl ProjectionEngine {
    /// Create a new projection engine with given parameters and config
    pub fn new(params: ParameterSet, config: ProjectionConfig) -> Self {
        Self { params, config }
    }

    pub fn params(&self) -> &ParameterSet {
        &self.params
    }

    pub fn project_mortgage(&self) -> Result<Projection, ParameterError> {
        Ok(MortgageProjector::new(&self.params)?.project())
    }

    pub fn project_consortium(&self) -> Result<Projection, ParameterError> {
        Ok(ConsortiumProjector::with_policy(&self.params, self.config.award_policy)?.project())
    }

    /// Validate once, then project both tracks.
    ///
    /// The tracks share no state, so running them in parallel gives the same result.
    pub fn run(&self) -> Result<ProjectionPair, ParameterError> {
        let mortgage = MortgageProjector::new(&self.params)?;
        let consortium = ConsortiumProjector::with_policy(&self.params, self.config.award_policy)?;

        let (mortgage, consortium) = if self.config.parallel {
            rayon::join(|| mortgage.project(), || consortium.project())
        } else {
            (mortgage.project(), consortium.project())
        };

        log::info!(
            "Projected {} months (plan term {}, award month {})",
            self.params.horizon_months(),
            self.params.plan_term_months,
            self.params.award_month
        );

        Ok(ProjectionPair { mortgage, consortium })
    }

    /// Project both tracks and compare them at the end of the horizon
    pub fn compare(&self) -> crate::Result<(ProjectionPair, Comparison)> {
        let pair = self.run()?;
        let comparison = compare(&self.params, &pair.mortgage, &pair.consortium)?;
        Ok((pair, comparison))
    }
}
