//! Scenario runner for repeated comparisons
//!
//! Holds a base parameter set and reruns the engine with variations of it,
//! most usefully across candidate award months since the award date is the
//! one input the buyer cannot control.

use crate::comparison::Comparison;
use crate::params::ParameterSet;
use crate::projection::{ProjectionConfig, ProjectionEngine, ProjectionPair};
use rayon::prelude::*;

/// One row of an award-month sweep
#[derive(Debug)]
pub struct SweepResult {
    pub award_month: u32,
    pub outcome: crate::Result<Comparison>,
}

/// Runner that reuses one base scenario
///
/// # Example
/// ```ignore
/// let runner = ScenarioRunner::new(ParameterSet::default());
///
/// for row in runner.sweep_award_months(&[12, 60, 120]) {
///     let comparison = row.outcome?;
///     println!("{}: {:?}", row.award_month, comparison.verdict);
/// }
/// ```
#[derive(Debug, Clone)]
pub struct ScenarioRunner {
    base_params: ParameterSet,
    config: ProjectionConfig,
}

impl ScenarioRunner {
    pub fn new(base_params: ParameterSet) -> Self {
        Self::with_config(base_params, ProjectionConfig::default())
    }

    pub fn with_config(base_params: ParameterSet, config: ProjectionConfig) -> Self {
        Self { base_params, config }
    }

    /// Project and compare the base scenario
    pub fn run(&self) -> crate::Result<(ProjectionPair, Comparison)> {
        self.run_with(self.base_params.clone())
    }

    /// Project and compare a variation of the base scenario
    pub fn run_with(&self, params: ParameterSet) -> crate::Result<(ProjectionPair, Comparison)> {
        ProjectionEngine::new(params, self.config.clone()).compare()
    }

    /// Compare the tracks once per candidate award month, in parallel.
    ///
    /// Rows come back in the order requested; an invalid month yields its
    /// validation error without stopping the sweep.
    pub fn sweep_award_months(&self, award_months: &[u32]) -> Vec<SweepResult> {
        log::info!("Sweeping {} award months", award_months.len());

        // Each run is already split across the sweep's threads
        let config = ProjectionConfig {
            parallel: false,
            ..self.config.clone()
        };

        award_months
            .par_iter()
            .map(|&award_month| {
                let params = ParameterSet {
                    award_month,
                    ..self.base_params.clone()
                };
                let outcome = ProjectionEngine::new(params, config.clone())
                    .compare()
                    .map(|(_, comparison)| comparison);
                SweepResult { award_month, outcome }
            })
            .collect()
    }

    /// Every award month the plan allows
    pub fn sweep_full_plan(&self) -> Vec<SweepResult> {
        let months: Vec<u32> = (1..=self.base_params.plan_term_months).collect();
        self.sweep_award_months(&months)
    }

    /// Get reference to base parameters for inspection
    pub fn params(&self) -> &ParameterSet {
        &self.base_params
    }

    /// Get mutable reference to base parameters for customization
    pub fn params_mut(&mut self) -> &mut ParameterSet {
        &mut self.base_params
    }
}

impl Default for ScenarioRunner {
    fn default() -> Self {
        Self::new(ParameterSet::default())
    }
}
