//! Monthly output rows and per-track projections

use serde::{Deserialize, Serialize};

/// Which acquisition path a projection describes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Track {
    /// Amortizing bank loan
    Mortgage,
    /// Group-buy plan with rent until award
    Consortium,
}

impl Track {
    pub fn label(&self) -> &'static str {
        match self {
            Track::Mortgage => "mortgage",
            Track::Consortium => "consortium",
        }
    }
}

/// One month of a projection. Appended once, never mutated.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MonthlyRecord {
    /// Projection month (1-indexed)
    pub month: u32,

    /// Loan or plan installment paid this month
    pub installment: f64,

    /// Rent paid this month (always 0 on the mortgage track)
    pub rent: f64,

    /// Installment plus rent
    pub disbursement: f64,

    /// Owned property value minus debt plus liquid reserve
    pub net_worth: f64,

    /// Everything paid out since the start, including the upfront cash
    pub cumulative_outflow: f64,

    /// Liquid reserve balance at end of month
    pub reserve: f64,

    /// Outstanding mortgage balance or plan debt at end of month
    pub balance: f64,

    /// Market value (mortgage) or owned value (consortium) at end of month
    pub property_value: f64,

    /// Principal repaid this month (mortgage only)
    pub amortization: f64,
}

impl MonthlyRecord {
    pub fn new(month: u32) -> Self {
        Self {
            month,
            installment: 0.0,
            rent: 0.0,
            disbursement: 0.0,
            net_worth: 0.0,
            cumulative_outflow: 0.0,
            reserve: 0.0,
            balance: 0.0,
            property_value: 0.0,
            amortization: 0.0,
        }
    }
}

/// Ordered monthly records for one track
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Projection {
    pub track: Track,
    pub records: Vec<MonthlyRecord>,
}

impl Projection {
    pub fn new(track: Track) -> Self {
        Self { track, records: Vec::new() }
    }

    pub fn with_capacity(track: Track, months: u32) -> Self {
        Self {
            track,
            records: Vec::with_capacity(months as usize),
        }
    }

    /// Append the next month's record
    pub fn add_record(&mut self, record: MonthlyRecord) {
        debug_assert_eq!(record.month as usize, self.records.len() + 1);
        self.records.push(record);
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Record for a 1-indexed month
    pub fn record(&self, month: u32) -> Option<&MonthlyRecord> {
        if month == 0 {
            return None;
        }
        self.records.get(month as usize - 1)
    }

    pub fn final_record(&self) -> Option<&MonthlyRecord> {
        self.records.last()
    }

    /// Get summary statistics
    pub fn summary(&self) -> ProjectionSummary {
        let total_installments: f64 = self.records.iter().map(|r| r.installment).sum();
        let total_rent: f64 = self.records.iter().map(|r| r.rent).sum();
        let min_reserve = self
            .records
            .iter()
            .map(|r| r.reserve)
            .fold(f64::INFINITY, f64::min);

        let last = self.records.last();

        ProjectionSummary {
            track: self.track,
            total_months: self.records.len() as u32,
            total_installments,
            total_rent,
            final_net_worth: last.map(|r| r.net_worth).unwrap_or(0.0),
            final_cumulative_outflow: last.map(|r| r.cumulative_outflow).unwrap_or(0.0),
            final_reserve: last.map(|r| r.reserve).unwrap_or(0.0),
            min_reserve: if min_reserve.is_finite() { min_reserve } else { 0.0 },
        }
    }
}

/// Summary statistics for a projection
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProjectionSummary {
    pub track: Track,
    pub total_months: u32,
    pub total_installments: f64,
    pub total_rent: f64,
    pub final_net_worth: f64,
    pub final_cumulative_outflow: f64,
    pub final_reserve: f64,
    pub min_reserve: f64,
}
