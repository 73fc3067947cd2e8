//! Bank loan track: constant amortization with monetary correction

use crate::params::{ParameterError, ParameterSet};
use super::rates::monthly_rate;
use super::records::{MonthlyRecord, Projection, Track};

/// Loan state carried from one month to the next
#[derive(Debug, Clone, PartialEq)]
pub struct MortgageState {
    /// Last simulated month (0 before the first step)
    pub month: u32,

    /// Outstanding balance after amortization
    pub balance: f64,

    /// Market value of the property
    pub property_value: f64,

    /// Down payment plus all installments so far
    pub cumulative_outflow: f64,
}

/// Produces the mortgage projection for one parameter set
#[derive(Debug, Clone)]
pub struct MortgageProjector {
    term: u32,
    monthly_interest: f64,
    monthly_appreciation: f64,
    monthly_correction: f64,
    amortization_slice: f64,
    initial: MortgageState,
}

impl MortgageProjector {
    /// Validate the parameters and derive the monthly rates
    pub fn new(params: &ParameterSet) -> Result<Self, ParameterError> {
        params.validate()?;

        let principal = params.principal();
        Ok(Self {
            term: params.mortgage_term_months,
            monthly_interest: monthly_rate(params.annual_interest_rate),
            monthly_appreciation: monthly_rate(params.annual_appreciation_rate),
            monthly_correction: params.monthly_correction_rate,
            amortization_slice: principal / params.mortgage_term_months as f64,
            initial: MortgageState {
                month: 0,
                balance: principal,
                property_value: params.property_value,
                cumulative_outflow: params.down_payment,
            },
        })
    }

    /// Constant principal repaid each month
    pub fn amortization_slice(&self) -> f64 {
        self.amortization_slice
    }

    pub fn initial_state(&self) -> MortgageState {
        self.initial.clone()
    }

    /// Advance the loan by one month.
    ///
    /// Correction is applied to the balance before interest accrues, and the
    /// amortization slice comes off after.
    pub fn step(&self, state: &mut MortgageState) -> MonthlyRecord {
        state.month += 1;
        let mut row = MonthlyRecord::new(state.month);

        state.balance *= 1.0 + self.monthly_correction;
        let interest = state.balance * self.monthly_interest;
        let installment = self.amortization_slice + interest;

        state.property_value *= 1.0 + self.monthly_appreciation;

        let before = state.balance;
        state.balance = (state.balance - self.amortization_slice).max(0.0);
        state.cumulative_outflow += installment;

        row.installment = installment;
        row.disbursement = installment;
        row.amortization = before - state.balance;
        row.balance = state.balance;
        row.property_value = state.property_value;
        row.net_worth = state.property_value - state.balance;
        row.cumulative_outflow = state.cumulative_outflow;
        row
    }

    /// Run every month of the loan term
    pub fn project(&self) -> Projection {
        let mut projection = Projection::with_capacity(Track::Mortgage, self.term);
        let mut state = self.initial_state();

        for _ in 1..=self.term {
            let row = self.step(&mut state);
            projection.add_record(row);
        }

        log::debug!(
            "Mortgage projected over {} months, final balance {:.2}",
            self.term,
            state.balance
        );
        projection
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn test_params() -> ParameterSet {
        ParameterSet {
            property_value: 500_000.0,
            down_payment: 100_000.0,
            mortgage_term_months: 360,
            annual_interest_rate: 0.105,
            monthly_correction_rate: 0.0008,
            annual_appreciation_rate: 0.06,
            ..Default::default()
        }
    }

    #[test]
    fn test_first_installment() {
        let projector = MortgageProjector::new(&test_params()).unwrap();
        let projection = projector.project();

        let monthly_interest = 1.105_f64.powf(1.0 / 12.0) - 1.0;
        let expected = 400_000.0 / 360.0 + 400_000.0 * 1.0008 * monthly_interest;
        assert_relative_eq!(projection.records[0].installment, expected, epsilon = 1e-9);
        assert_relative_eq!(
            projection.records[0].cumulative_outflow,
            100_000.0 + expected,
            epsilon = 1e-9
        );
    }

    #[test]
    fn test_length_and_ordering() {
        let projection = MortgageProjector::new(&test_params()).unwrap().project();
        assert_eq!(projection.len(), 360);
        for (i, row) in projection.records.iter().enumerate() {
            assert_eq!(row.month, i as u32 + 1);
        }
    }

    #[test]
    fn test_amortization_sums_to_principal() {
        let projection = MortgageProjector::new(&test_params()).unwrap().project();
        let total: f64 = projection.records.iter().map(|r| r.amortization).sum();
        assert_relative_eq!(total, 400_000.0, max_relative = 1e-9);
    }

    #[test]
    fn test_balance_reaches_zero_without_correction() {
        let params = ParameterSet {
            monthly_correction_rate: 0.0,
            ..test_params()
        };
        let projection = MortgageProjector::new(&params).unwrap().project();

        let last = projection.final_record().unwrap();
        assert!(last.balance.abs() < 1e-6, "balance left: {}", last.balance);

        for pair in projection.records.windows(2) {
            assert!(pair[1].balance <= pair[0].balance);
        }
    }

    #[test]
    fn test_net_worth_is_value_minus_balance() {
        let projection = MortgageProjector::new(&test_params()).unwrap().project();
        let row = &projection.records[11];
        assert_relative_eq!(row.net_worth, row.property_value - row.balance);
        assert_relative_eq!(row.property_value, 500_000.0 * 1.06, max_relative = 1e-12);
        assert_eq!(row.reserve, 0.0);
        assert_eq!(row.rent, 0.0);
    }

    #[test]
    fn test_invalid_parameters_fail_fast() {
        let params = ParameterSet {
            down_payment: 600_000.0,
            ..test_params()
        };
        assert!(matches!(
            MortgageProjector::new(&params),
            Err(ParameterError::DownPaymentTooLarge { .. })
        ));

        let params = ParameterSet {
            mortgage_term_months: 0,
            ..test_params()
        };
        assert!(MortgageProjector::new(&params).is_err());

        let params = ParameterSet {
            mortgage_term_months: u32::MAX,
            ..test_params()
        };
        assert!(matches!(
            MortgageProjector::new(&params),
            Err(ParameterError::TermTooLong { field: "mortgage_term_months", .. })
        ));
    }
}
