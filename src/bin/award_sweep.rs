//! Compare both tracks for every possible award month
//!
//! Reads the scenario from the path given as the first argument (or the
//! defaults) and writes award_sweep.csv with one row per award month.

use acquisition_compare::{params::load_parameters, ParameterSet, ScenarioRunner, Verdict};
use anyhow::Context;
use serde::Serialize;
use std::env;
use std::path::Path;
use std::time::Instant;

/// One output line per award month
#[derive(Serialize)]
struct SweepRow {
    #[serde(rename = "AwardMonth")]
    award_month: u32,
    #[serde(rename = "MortgageNetWorth")]
    mortgage_net_worth: f64,
    #[serde(rename = "ConsortiumNetWorth")]
    consortium_net_worth: f64,
    #[serde(rename = "NetWorthGap")]
    net_worth_gap: f64,
    #[serde(rename = "Verdict")]
    verdict: Verdict,
    #[serde(rename = "ConsortiumOutflow")]
    consortium_outflow: f64,
    #[serde(rename = "RentPaid")]
    rent_paid: f64,
}

fn main() -> anyhow::Result<()> {
    env_logger::init();

    let params = match env::args().nth(1) {
        Some(path) => load_parameters(Path::new(&path))
            .with_context(|| format!("loading scenario {}", path))?,
        None => ParameterSet::default(),
    };

    let start = Instant::now();
    let runner = ScenarioRunner::new(params);
    let rows = runner.sweep_full_plan();
    println!("Swept {} award months in {:?}", rows.len(), start.elapsed());

    let output_path = "award_sweep.csv";
    let mut writer = csv::Writer::from_path(output_path).context("creating award_sweep.csv")?;

    let mut consortium_wins = 0;
    for row in &rows {
        let comparison = match &row.outcome {
            Ok(comparison) => comparison,
            Err(e) => {
                log::warn!("Award month {} skipped: {}", row.award_month, e);
                continue;
            }
        };
        if comparison.consortium_wins() {
            consortium_wins += 1;
        }
        writer.serialize(SweepRow {
            award_month: row.award_month,
            mortgage_net_worth: comparison.mortgage_final.net_worth,
            consortium_net_worth: comparison.consortium_final.net_worth,
            net_worth_gap: comparison.net_worth_gap,
            verdict: comparison.verdict,
            consortium_outflow: comparison.consortium_final.cumulative_outflow,
            rent_paid: comparison.consortium_summary.total_rent,
        })?;
    }
    writer.flush()?;

    println!("Group-buy plan ahead in {} of {} award months", consortium_wins, rows.len());
    println!("Output written to {}", output_path);
    Ok(())
}
