//! Group-buy plan track: subsidized installments and rent until the award,
//! then full installments on a declining balance.

use crate::params::{ParameterError, ParameterSet};
use super::rates::{growth_factor, is_anniversary, monthly_rate};
use super::records::{MonthlyRecord, Projection, Track};

/// Position of a month relative to the award event
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AwardPhase {
    /// Reduced installment, rent payable, nothing owned
    PreAward,
    /// One-time settlement and purchase
    Award,
    /// Full installments until the plan term, no rent
    PostAward,
}

impl AwardPhase {
    pub fn at(month: u32, award_month: u32) -> Self {
        match month.cmp(&award_month) {
            std::cmp::Ordering::Less => AwardPhase::PreAward,
            std::cmp::Ordering::Equal => AwardPhase::Award,
            std::cmp::Ordering::Greater => AwardPhase::PostAward,
        }
    }
}

/// Last month in which rent is still paid
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RentStop {
    /// Rent stops in the award month itself
    #[default]
    AtAward,
    /// Rent is paid through the award month and stops the month after
    AfterAward,
}

/// Timing choices around the award event
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AwardPolicy {
    pub rent_stop: RentStop,

    /// Apply the construction index to the accrued plan debt as well as the credit
    pub index_plan_debt: bool,
}

impl Default for AwardPolicy {
    fn default() -> Self {
        Self {
            rent_stop: RentStop::AtAward,
            index_plan_debt: true,
        }
    }
}

impl AwardPolicy {
    fn pays_rent(&self, phase: AwardPhase) -> bool {
        match (self.rent_stop, phase) {
            (_, AwardPhase::PreAward) => true,
            (RentStop::AfterAward, AwardPhase::Award) => true,
            _ => false,
        }
    }
}

/// Plan state carried from one month to the next
#[derive(Debug, Clone, PartialEq)]
pub struct ConsortiumState {
    /// Last simulated month (0 before the first step)
    pub month: u32,

    /// Credit letter value, indexed annually until the award
    pub nominal_credit: f64,

    /// Outstanding plan debt
    pub plan_debt: f64,

    /// Liquid reserve earning the reserve yield
    pub reserve: f64,

    /// Current monthly rent
    pub rent: f64,

    /// Share of the market property bought at award (0 before)
    pub owned_fraction: f64,

    /// Value of the owned share
    pub owned_value: f64,

    /// Subsidy accrued before the award and not yet owed
    pub deferred_gap: f64,

    /// Amount of deferred gap moved onto the plan debt at award
    pub settled_gap: f64,

    /// Own bid plus all installments and rent so far
    pub cumulative_outflow: f64,
}

/// Produces the group-buy projection for one parameter set
#[derive(Debug, Clone)]
pub struct ConsortiumProjector {
    params: ParameterSet,
    policy: AwardPolicy,
    monthly_appreciation: f64,
    monthly_yield: f64,
}

impl ConsortiumProjector {
    /// Validate the parameters with the default award policy
    pub fn new(params: &ParameterSet) -> Result<Self, ParameterError> {
        Self::with_policy(params, AwardPolicy::default())
    }

    pub fn with_policy(params: &ParameterSet, policy: AwardPolicy) -> Result<Self, ParameterError> {
        params.validate()?;
        Ok(Self {
            params: params.clone(),
            policy,
            monthly_appreciation: monthly_rate(params.annual_appreciation_rate),
            monthly_yield: monthly_rate(params.annual_reserve_yield),
        })
    }

    pub fn policy(&self) -> AwardPolicy {
        self.policy
    }

    pub fn initial_state(&self) -> ConsortiumState {
        let p = &self.params;
        let loading = p.plan_loading();
        let plan_debt = p.credit_amount * (1.0 + loading)
            - p.own_bid * (1.0 + loading / p.plan_term_months as f64);

        ConsortiumState {
            month: 0,
            nominal_credit: p.credit_amount,
            plan_debt: plan_debt.max(0.0),
            reserve: p.down_payment - p.own_bid,
            rent: p.initial_rent,
            owned_fraction: 0.0,
            owned_value: 0.0,
            deferred_gap: 0.0,
            settled_gap: 0.0,
            cumulative_outflow: p.own_bid,
        }
    }

    /// Installment without subsidy: credit plus fees spread over the plan term
    pub fn full_installment(&self, credit: f64) -> f64 {
        credit * (1.0 + self.params.plan_loading()) / self.params.plan_term_months as f64
    }

    /// Subsidized installment: the fund portion is cut, the admin fee is not
    pub fn reduced_installment(&self, credit: f64) -> f64 {
        let p = &self.params;
        let fund_portion = credit * (1.0 + p.reserve_fund_rate) * (1.0 - p.reduced_installment_fraction);
        let fee_portion = credit * p.admin_fee_rate;
        (fund_portion + fee_portion) / p.plan_term_months as f64
    }

    /// Market value of the whole property at the end of `month`
    pub fn market_value(&self, month: u32) -> f64 {
        self.params.property_value * growth_factor(self.monthly_appreciation, month)
    }

    /// Compute the next month from the current state without touching it
    pub fn step(&self, state: &ConsortiumState) -> (ConsortiumState, MonthlyRecord) {
        let p = &self.params;
        let mut next = state.clone();
        next.month = state.month + 1;
        let month = next.month;
        let phase = AwardPhase::at(month, p.award_month);

        if is_anniversary(month) {
            next.rent *= 1.0 + p.annual_rent_index;
            if month <= p.award_month {
                next.nominal_credit *= 1.0 + p.annual_construction_index;
                if self.policy.index_plan_debt {
                    next.plan_debt *= 1.0 + p.annual_construction_index;
                }
            }
        }

        let market = self.market_value(month);

        let installment = match phase {
            AwardPhase::PreAward => {
                let full = self.full_installment(next.nominal_credit);
                let reduced = self.reduced_installment(next.nominal_credit);
                next.deferred_gap += full - reduced;
                next.plan_debt = (next.plan_debt - full).max(0.0);
                reduced
            }
            AwardPhase::Award => {
                self.settle_award(&mut next, market);
                self.declining_installment(&mut next)
            }
            AwardPhase::PostAward => self.declining_installment(&mut next),
        };

        next.owned_value = next.owned_fraction * market;
        next.reserve *= 1.0 + self.monthly_yield;

        let rent = if self.policy.pays_rent(phase) { next.rent } else { 0.0 };
        let disbursement = installment + rent;
        next.cumulative_outflow += disbursement;

        let mut row = MonthlyRecord::new(month);
        row.installment = installment;
        row.rent = rent;
        row.disbursement = disbursement;
        row.net_worth = match phase {
            AwardPhase::PreAward => next.reserve,
            _ => next.owned_value - next.plan_debt + next.reserve,
        };
        row.cumulative_outflow = next.cumulative_outflow;
        row.reserve = next.reserve;
        row.balance = next.plan_debt;
        row.property_value = next.owned_value;

        (next, row)
    }

    /// Regime change at the award month: the deferred subsidy becomes due,
    /// the embedded bid pays down debt, and the purchase fixes the owned share.
    fn settle_award(&self, state: &mut ConsortiumState, market: f64) {
        let p = &self.params;

        state.settled_gap = state.deferred_gap;
        state.plan_debt += state.deferred_gap;
        state.deferred_gap = 0.0;

        let embedded_bid = state.nominal_credit * p.embedded_bid_fraction;
        state.plan_debt = (state.plan_debt - embedded_bid).max(0.0);

        let purchasing_power = state.nominal_credit - embedded_bid + p.own_bid;
        let shortfall = (market - purchasing_power).max(0.0);

        state.owned_fraction = ((purchasing_power + state.reserve) / market).min(1.0);
        let drawn = shortfall.min(state.reserve);
        state.reserve = (state.reserve - shortfall).max(0.0);

        log::debug!(
            "Award at month {}: purchasing power {:.2}, market {:.2}, owned fraction {:.4}, reserve drawn {:.2}",
            state.month,
            purchasing_power,
            market,
            state.owned_fraction,
            drawn
        );
    }

    /// Remaining debt spread evenly over the remaining plan months
    fn declining_installment(&self, state: &mut ConsortiumState) -> f64 {
        let plan_term = self.params.plan_term_months;
        if state.month > plan_term {
            return 0.0;
        }
        let remaining = (plan_term - state.month + 1) as f64;
        let installment = state.plan_debt / remaining;
        state.plan_debt = (state.plan_debt - installment).max(0.0);
        installment
    }

    /// Run every month of the comparison horizon, including months past the plan term
    pub fn project(&self) -> Projection {
        let horizon = self.params.horizon_months();
        let mut projection = Projection::with_capacity(Track::Consortium, horizon);
        let mut state = self.initial_state();

        for _ in 1..=horizon {
            let (next, row) = self.step(&state);
            projection.add_record(row);
            state = next;
        }

        log::debug!(
            "Consortium projected over {} months, final debt {:.2}, owned fraction {:.4}",
            horizon,
            state.plan_debt,
            state.owned_fraction
        );
        projection
    }
}
