//! Scenario parameter bundle shared by both acquisition tracks

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Longest loan or plan term accepted (100 years)
pub const MAX_TERM_MONTHS: u32 = 1200;

/// Errors raised when a parameter set cannot be simulated
#[derive(Debug, Error, PartialEq)]
pub enum ParameterError {
    #[error("{field} must be a finite number, got {value}")]
    NotFinite { field: &'static str, value: f64 },

    #[error("{field} must be greater than zero, got {value}")]
    NotPositive { field: &'static str, value: f64 },

    #[error("{field} must be within [{min}, {max}], got {value}")]
    OutOfRange {
        field: &'static str,
        value: f64,
        min: f64,
        max: f64,
    },

    #[error("{field} must be at least one month")]
    ZeroTerm { field: &'static str },

    #[error("{field} of {months} months exceeds the {max}-month limit")]
    TermTooLong { field: &'static str, months: u32, max: u32 },

    #[error("down_payment ({down_payment}) must be below property_value ({property_value})")]
    DownPaymentTooLarge { down_payment: f64, property_value: f64 },

    #[error("own_bid ({own_bid}) cannot exceed down_payment ({down_payment})")]
    OwnBidTooLarge { own_bid: f64, down_payment: f64 },

    #[error("award_month {award_month} must fall within the plan term [1, {plan_term}]")]
    AwardMonthOutsidePlan { award_month: u32, plan_term: u32 },
}

/// Inputs for one simulation run
///
/// All rates are fractions (0.06 = 6%). Annual rates are converted to
/// effective monthly rates by the projectors; `monthly_correction_rate`
/// is already monthly.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ParameterSet {
    // Property
    pub property_value: f64,
    pub annual_appreciation_rate: f64,
    pub annual_reserve_yield: f64,

    // Mortgage
    pub down_payment: f64,
    pub annual_interest_rate: f64,
    pub mortgage_term_months: u32,
    pub monthly_correction_rate: f64,

    // Consortium
    pub credit_amount: f64,
    pub admin_fee_rate: f64,
    pub reserve_fund_rate: f64,
    pub plan_term_months: u32,
    pub own_bid: f64,
    pub embedded_bid_fraction: f64,
    pub reduced_installment_fraction: f64,
    pub award_month: u32,
    pub initial_rent: f64,
    pub annual_construction_index: f64,
    pub annual_rent_index: f64,
}

impl Default for ParameterSet {
    fn default() -> Self {
        Self {
            property_value: 500_000.0,
            annual_appreciation_rate: 0.06,
            annual_reserve_yield: 0.105,
            down_payment: 100_000.0,
            annual_interest_rate: 0.123,
            mortgage_term_months: 420,
            monthly_correction_rate: 0.0012,
            credit_amount: 500_000.0,
            admin_fee_rate: 0.20,
            reserve_fund_rate: 0.02,
            plan_term_months: 240,
            own_bid: 0.0,
            embedded_bid_fraction: 0.25,
            reduced_installment_fraction: 0.50,
            award_month: 120,
            initial_rent: 2_500.0,
            annual_construction_index: 0.06,
            annual_rent_index: 0.08,
        }
    }
}

impl ParameterSet {
    /// Comparison horizon in months (the mortgage term)
    pub fn horizon_months(&self) -> u32 {
        self.mortgage_term_months
    }

    /// Amount financed by the mortgage
    pub fn principal(&self) -> f64 {
        self.property_value - self.down_payment
    }

    /// Combined administration fee and reserve fund loading
    pub fn plan_loading(&self) -> f64 {
        self.admin_fee_rate + self.reserve_fund_rate
    }

    /// Check every field before any month is simulated.
    ///
    /// Nothing is clamped: the first offending field is reported.
    pub fn validate(&self) -> Result<(), ParameterError> {
        positive("property_value", self.property_value)?;
        positive("down_payment", self.down_payment)?;
        positive("credit_amount", self.credit_amount)?;

        non_negative("annual_appreciation_rate", self.annual_appreciation_rate)?;
        non_negative("annual_reserve_yield", self.annual_reserve_yield)?;
        non_negative("annual_interest_rate", self.annual_interest_rate)?;
        non_negative("monthly_correction_rate", self.monthly_correction_rate)?;
        non_negative("annual_construction_index", self.annual_construction_index)?;
        non_negative("annual_rent_index", self.annual_rent_index)?;
        non_negative("initial_rent", self.initial_rent)?;
        non_negative("own_bid", self.own_bid)?;

        fraction("admin_fee_rate", self.admin_fee_rate)?;
        fraction("reserve_fund_rate", self.reserve_fund_rate)?;
        fraction("embedded_bid_fraction", self.embedded_bid_fraction)?;
        fraction("reduced_installment_fraction", self.reduced_installment_fraction)?;

        term("mortgage_term_months", self.mortgage_term_months)?;
        term("plan_term_months", self.plan_term_months)?;

        if self.down_payment >= self.property_value {
            return Err(ParameterError::DownPaymentTooLarge {
                down_payment: self.down_payment,
                property_value: self.property_value,
            });
        }
        if self.own_bid > self.down_payment {
            return Err(ParameterError::OwnBidTooLarge {
                own_bid: self.own_bid,
                down_payment: self.down_payment,
            });
        }
        if self.award_month == 0 || self.award_month > self.plan_term_months {
            return Err(ParameterError::AwardMonthOutsidePlan {
                award_month: self.award_month,
                plan_term: self.plan_term_months,
            });
        }

        Ok(())
    }
}

fn term(field: &'static str, months: u32) -> Result<(), ParameterError> {
    if months == 0 {
        Err(ParameterError::ZeroTerm { field })
    } else if months > MAX_TERM_MONTHS {
        Err(ParameterError::TermTooLong { field, months, max: MAX_TERM_MONTHS })
    } else {
        Ok(())
    }
}

fn finite(field: &'static str, value: f64) -> Result<(), ParameterError> {
    if value.is_finite() {
        Ok(())
    } else {
        Err(ParameterError::NotFinite { field, value })
    }
}

fn positive(field: &'static str, value: f64) -> Result<(), ParameterError> {
    finite(field, value)?;
    if value > 0.0 {
        Ok(())
    } else {
        Err(ParameterError::NotPositive { field, value })
    }
}

fn non_negative(field: &'static str, value: f64) -> Result<(), ParameterError> {
    finite(field, value)?;
    if value >= 0.0 {
        Ok(())
    } else {
        Err(ParameterError::OutOfRange { field, value, min: 0.0, max: f64::INFINITY })
    }
}

fn fraction(field: &'static str, value: f64) -> Result<(), ParameterError> {
    finite(field, value)?;
    if (0.0..=1.0).contains(&value) {
        Ok(())
    } else {
        Err(ParameterError::OutOfRange { field, value, min: 0.0, max: 1.0 })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_are_valid() {
        assert_eq!(ParameterSet::default().validate(), Ok(()));
    }

    #[test]
    fn test_zero_mortgage_term_rejected() {
        let params = ParameterSet { mortgage_term_months: 0, ..Default::default() };
        assert_eq!(
            params.validate(),
            Err(ParameterError::ZeroTerm { field: "mortgage_term_months" })
        );
    }

    #[test]
    fn test_oversized_terms_rejected() {
        let params = ParameterSet { mortgage_term_months: u32::MAX, ..Default::default() };
        assert_eq!(
            params.validate(),
            Err(ParameterError::TermTooLong {
                field: "mortgage_term_months",
                months: u32::MAX,
                max: MAX_TERM_MONTHS,
            })
        );

        let params = ParameterSet { plan_term_months: MAX_TERM_MONTHS + 1, ..Default::default() };
        assert!(matches!(
            params.validate(),
            Err(ParameterError::TermTooLong { field: "plan_term_months", .. })
        ));

        let params = ParameterSet { mortgage_term_months: MAX_TERM_MONTHS, ..Default::default() };
        assert_eq!(params.validate(), Ok(()));
    }

    #[test]
    fn test_down_payment_at_property_value_rejected() {
        let params = ParameterSet {
            down_payment: 500_000.0,
            ..Default::default()
        };
        assert!(matches!(
            params.validate(),
            Err(ParameterError::DownPaymentTooLarge { .. })
        ));
    }

    #[test]
    fn test_award_month_bounds() {
        let zero = ParameterSet { award_month: 0, ..Default::default() };
        assert!(matches!(
            zero.validate(),
            Err(ParameterError::AwardMonthOutsidePlan { award_month: 0, plan_term: 240 })
        ));

        let past_plan = ParameterSet { award_month: 241, ..Default::default() };
        assert!(past_plan.validate().is_err());

        let last = ParameterSet { award_month: 240, ..Default::default() };
        assert!(last.validate().is_ok());
    }

    #[test]
    fn test_error_names_field() {
        let params = ParameterSet { embedded_bid_fraction: 1.5, ..Default::default() };
        let err = params.validate().unwrap_err();
        assert!(err.to_string().contains("embedded_bid_fraction"));

        let params = ParameterSet { annual_rent_index: f64::NAN, ..Default::default() };
        let err = params.validate().unwrap_err();
        assert!(err.to_string().contains("annual_rent_index"));
    }

    #[test]
    fn test_own_bid_cannot_exceed_down_payment() {
        let params = ParameterSet { own_bid: 150_000.0, ..Default::default() };
        assert!(matches!(params.validate(), Err(ParameterError::OwnBidTooLarge { .. })));
    }

    #[test]
    fn test_partial_json_fills_defaults() {
        let params: ParameterSet =
            serde_json::from_str(r#"{"award_month": 12, "initial_rent": 3000.0}"#).unwrap();
        assert_eq!(params.award_month, 12);
        assert_eq!(params.initial_rent, 3000.0);
        assert_eq!(params.property_value, 500_000.0);
    }
}
