//! Acquisition Compare CLI
//!
//! Runs both projections for one scenario, prints the final comparison and
//! optionally writes the monthly records to CSV.

use acquisition_compare::{
    export::{write_comparison_json, write_records_csv},
    params::{load_parameters, loader::DEFAULT_SCENARIO_PATH},
    projection::{AwardPolicy, RentStop},
    ParameterSet, ProjectionConfig, ProjectionEngine, Verdict,
};
use anyhow::Context;
use clap::Parser;
use std::fs::File;
use std::path::{Path, PathBuf};

#[derive(Parser, Debug)]
#[command(name = "acquisition_compare", about = "Mortgage vs. group-buy plan projection")]
struct Cli {
    /// Scenario JSON file (defaults to data/scenario.json when present)
    #[arg(short, long)]
    scenario: Option<PathBuf>,

    /// Override the award month
    #[arg(long)]
    award_month: Option<u32>,

    /// Override the mortgage term (comparison horizon) in months
    #[arg(long)]
    mortgage_term: Option<u32>,

    /// Override the plan term in months
    #[arg(long)]
    plan_term: Option<u32>,

    /// Override the initial monthly rent
    #[arg(long)]
    rent: Option<f64>,

    /// Keep paying rent during the award month
    #[arg(long)]
    rent_through_award: bool,

    /// Do not apply the construction index to accrued plan debt
    #[arg(long)]
    no_debt_indexation: bool,

    /// Directory for mortgage.csv and consortium.csv
    #[arg(long)]
    csv_dir: Option<PathBuf>,

    /// Print the comparison as JSON instead of text
    #[arg(long)]
    json: bool,
}

impl Cli {
    fn parameters(&self) -> anyhow::Result<ParameterSet> {
        let default_path = Path::new(DEFAULT_SCENARIO_PATH);
        let mut params = match &self.scenario {
            Some(path) => load_parameters(path)
                .with_context(|| format!("loading scenario {}", path.display()))?,
            None if default_path.exists() => load_parameters(default_path)?,
            None => ParameterSet::default(),
        };

        if let Some(month) = self.award_month {
            params.award_month = month;
        }
        if let Some(term) = self.mortgage_term {
            params.mortgage_term_months = term;
        }
        if let Some(term) = self.plan_term {
            params.plan_term_months = term;
        }
        if let Some(rent) = self.rent {
            params.initial_rent = rent;
        }
        Ok(params)
    }

    fn config(&self) -> ProjectionConfig {
        ProjectionConfig {
            award_policy: AwardPolicy {
                rent_stop: if self.rent_through_award {
                    RentStop::AfterAward
                } else {
                    RentStop::AtAward
                },
                index_plan_debt: !self.no_debt_indexation,
            },
            ..Default::default()
        }
    }
}

fn main() -> anyhow::Result<()> {
    env_logger::init();

    let cli = Cli::parse();
    let params = cli.parameters()?;
    let engine = ProjectionEngine::new(params.clone(), cli.config());
    let (pair, comparison) = engine.compare().context("running projections")?;

    if let Some(dir) = &cli.csv_dir {
        std::fs::create_dir_all(dir)?;
        let mortgage_path = dir.join("mortgage.csv");
        let consortium_path = dir.join("consortium.csv");
        write_records_csv(&pair.mortgage, File::create(&mortgage_path)?)?;
        write_records_csv(&pair.consortium, File::create(&consortium_path)?)?;
        log::info!(
            "Records written to {} and {}",
            mortgage_path.display(),
            consortium_path.display()
        );
    }

    if cli.json {
        write_comparison_json(&comparison, std::io::stdout())?;
        println!();
        return Ok(());
    }

    println!("Acquisition Compare v0.1.0");
    println!("==========================\n");
    println!(
        "Horizon: {} months (plan term {}, award month {})\n",
        comparison.horizon_months, params.plan_term_months, params.award_month
    );

    println!("{:<12} {:>16} {:>18} {:>14}", "Track", "Net worth", "Total outflow", "Reserve");
    println!("{}", "-".repeat(63));
    for (label, row) in [
        ("Mortgage", &comparison.mortgage_final),
        ("Consortium", &comparison.consortium_final),
    ] {
        println!(
            "{:<12} {:>16.2} {:>18.2} {:>14.2}",
            label, row.net_worth, row.cumulative_outflow, row.reserve
        );
    }

    println!();
    match comparison.verdict {
        Verdict::Consortium => println!(
            "Group-buy plan ends ahead by {:.2}, clearing its debt {:.1} years sooner.",
            comparison.net_worth_gap, comparison.years_saved
        ),
        Verdict::Mortgage => println!("Mortgage ends ahead by {:.2}.", comparison.net_worth_gap),
    }
    println!(
        "Rent paid while waiting for award: {:.2}",
        comparison.consortium_summary.total_rent
    );

    Ok(())
}
