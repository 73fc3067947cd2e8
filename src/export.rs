//! Plain-row exports of projections and comparisons

use crate::comparison::Comparison;
use crate::projection::Projection;
use std::io::Write;

/// Write every monthly record of a projection as CSV, one row per month
pub fn write_records_csv<W: Write>(projection: &Projection, writer: W) -> crate::Result<()> {
    let mut csv_writer = csv::Writer::from_writer(writer);
    for record in &projection.records {
        csv_writer.serialize(record)?;
    }
    csv_writer.flush()?;
    Ok(())
}

/// Write a comparison as pretty-printed JSON
pub fn write_comparison_json<W: Write>(comparison: &Comparison, writer: W) -> crate::Result<()> {
    serde_json::to_writer_pretty(writer, comparison)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::params::ParameterSet;
    use crate::projection::{ProjectionConfig, ProjectionEngine};

    fn short_params() -> ParameterSet {
        ParameterSet {
            mortgage_term_months: 24,
            plan_term_months: 18,
            award_month: 6,
            ..Default::default()
        }
    }

    #[test]
    fn test_csv_has_header_and_one_row_per_month() {
        let engine = ProjectionEngine::new(short_params(), ProjectionConfig::default());
        let pair = engine.run().unwrap();

        let mut buffer = Vec::new();
        write_records_csv(&pair.consortium, &mut buffer).unwrap();
        let text = String::from_utf8(buffer).unwrap();

        let mut lines = text.lines();
        assert_eq!(
            lines.next().unwrap(),
            "month,installment,rent,disbursement,net_worth,cumulative_outflow,reserve,balance,property_value,amortization"
        );
        assert_eq!(lines.count(), 24);
    }

    #[test]
    fn test_csv_reads_back_months() {
        let engine = ProjectionEngine::new(short_params(), ProjectionConfig::default());
        let pair = engine.run().unwrap();

        let mut buffer = Vec::new();
        write_records_csv(&pair.mortgage, &mut buffer).unwrap();

        let mut reader = csv::Reader::from_reader(buffer.as_slice());
        let months: Vec<u32> = reader
            .records()
            .map(|r| r.unwrap()[0].parse().unwrap())
            .collect();
        assert_eq!(months, (1..=24).collect::<Vec<_>>());
    }

    #[test]
    fn test_comparison_json_fields() {
        let engine = ProjectionEngine::new(short_params(), ProjectionConfig::default());
        let (_, comparison) = engine.compare().unwrap();

        let mut buffer = Vec::new();
        write_comparison_json(&comparison, &mut buffer).unwrap();
        let value: serde_json::Value = serde_json::from_slice(&buffer).unwrap();

        assert_eq!(value["horizon_months"], 24);
        assert!(value["verdict"].is_string());
        assert_eq!(value["mortgage_final"]["month"], 24);
    }
}
