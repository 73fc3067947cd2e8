//! End-of-horizon comparison of the two acquisition tracks

use crate::params::ParameterSet;
use crate::projection::{MonthlyRecord, Projection, ProjectionSummary, Track};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors from reducing projections to a comparison
#[derive(Debug, Error, PartialEq)]
pub enum ComparisonError {
    #[error("{track} projection has no record for month {month}")]
    MissingFinalMonth { track: &'static str, month: u32 },

    #[error("expected a {expected} projection, got {actual}")]
    WrongTrack {
        expected: &'static str,
        actual: &'static str,
    },
}

/// Which path ends with the higher net worth
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Verdict {
    Mortgage,
    Consortium,
}

/// Final-month figures of both tracks
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Comparison {
    /// Month at which both tracks are compared
    pub horizon_months: u32,

    pub mortgage_final: MonthlyRecord,
    pub consortium_final: MonthlyRecord,

    /// Absolute net worth difference at the horizon
    pub net_worth_gap: f64,

    pub verdict: Verdict,

    /// Years of debt avoided by the shorter plan term (negative if the plan is longer)
    pub years_saved: f64,

    pub mortgage_summary: ProjectionSummary,
    pub consortium_summary: ProjectionSummary,
}

impl Comparison {
    /// Ties go to the mortgage
    pub fn consortium_wins(&self) -> bool {
        self.verdict == Verdict::Consortium
    }
}

/// Reduce both projections to their records at the comparison horizon
pub fn compare(
    params: &ParameterSet,
    mortgage: &Projection,
    consortium: &Projection,
) -> Result<Comparison, ComparisonError> {
    check_track(mortgage, Track::Mortgage)?;
    check_track(consortium, Track::Consortium)?;

    let horizon = params.horizon_months();
    let mortgage_final = final_record(mortgage, horizon)?;
    let consortium_final = final_record(consortium, horizon)?;

    let verdict = if consortium_final.net_worth > mortgage_final.net_worth {
        Verdict::Consortium
    } else {
        Verdict::Mortgage
    };
    let net_worth_gap = (consortium_final.net_worth - mortgage_final.net_worth).abs();
    let years_saved =
        (params.mortgage_term_months as f64 - params.plan_term_months as f64) / 12.0;

    log::info!(
        "Month {}: mortgage net worth {:.2}, consortium net worth {:.2} ({:?} ahead by {:.2})",
        horizon,
        mortgage_final.net_worth,
        consortium_final.net_worth,
        verdict,
        net_worth_gap
    );

    Ok(Comparison {
        horizon_months: horizon,
        mortgage_final: mortgage_final.clone(),
        consortium_final: consortium_final.clone(),
        net_worth_gap,
        verdict,
        years_saved,
        mortgage_summary: mortgage.summary(),
        consortium_summary: consortium.summary(),
    })
}

fn check_track(projection: &Projection, expected: Track) -> Result<(), ComparisonError> {
    if projection.track == expected {
        Ok(())
    } else {
        Err(ComparisonError::WrongTrack {
            expected: expected.label(),
            actual: projection.track.label(),
        })
    }
}

fn final_record(projection: &Projection, month: u32) -> Result<&MonthlyRecord, ComparisonError> {
    projection
        .record(month)
        .ok_or(ComparisonError::MissingFinalMonth {
            track: projection.track.label(),
            month,
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn projection(track: Track, months: u32, final_net_worth: f64) -> Projection {
        let mut projection = Projection::new(track);
        for month in 1..=months {
            let mut row = MonthlyRecord::new(month);
            if month == months {
                row.net_worth = final_net_worth;
            }
            projection.add_record(row);
        }
        projection
    }

    fn params() -> ParameterSet {
        ParameterSet {
            mortgage_term_months: 24,
            plan_term_months: 12,
            award_month: 6,
            ..Default::default()
        }
    }

    #[test]
    fn test_consortium_wins_with_higher_net_worth() {
        let mortgage = projection(Track::Mortgage, 24, 100.0);
        let consortium = projection(Track::Consortium, 24, 150.0);

        let result = compare(&params(), &mortgage, &consortium).unwrap();
        assert!(result.consortium_wins());
        assert_eq!(result.net_worth_gap, 50.0);
        assert_eq!(result.years_saved, 1.0);
        assert_eq!(result.consortium_final.month, 24);
    }

    #[test]
    fn test_tie_favors_mortgage() {
        let mortgage = projection(Track::Mortgage, 24, 100.0);
        let consortium = projection(Track::Consortium, 24, 100.0);

        let result = compare(&params(), &mortgage, &consortium).unwrap();
        assert_eq!(result.verdict, Verdict::Mortgage);
        assert_eq!(result.net_worth_gap, 0.0);
    }

    #[test]
    fn test_gap_is_absolute() {
        let mortgage = projection(Track::Mortgage, 24, 300.0);
        let consortium = projection(Track::Consortium, 24, 100.0);

        let result = compare(&params(), &mortgage, &consortium).unwrap();
        assert_eq!(result.verdict, Verdict::Mortgage);
        assert_eq!(result.net_worth_gap, 200.0);
    }

    #[test]
    fn test_missing_final_month() {
        let mortgage = projection(Track::Mortgage, 24, 100.0);
        let consortium = projection(Track::Consortium, 20, 100.0);

        assert_eq!(
            compare(&params(), &mortgage, &consortium).unwrap_err(),
            ComparisonError::MissingFinalMonth { track: "consortium", month: 24 }
        );
    }

    #[test]
    fn test_swapped_tracks_rejected() {
        let mortgage = projection(Track::Mortgage, 24, 100.0);
        let consortium = projection(Track::Consortium, 24, 100.0);

        assert!(matches!(
            compare(&params(), &consortium, &mortgage),
            Err(ComparisonError::WrongTrack { .. })
        ));
    }
}
