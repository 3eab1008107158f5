use serde::Serialize;

use super::FieldParser;
use crate::record::{BrandMetric, BrandPulseRecord};

const TABLE: &str = "brand_pulse";

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BrandPulseRow {
    #[serde(flatten)]
    pub record: BrandPulseRecord,
    /// Percentage points.
    pub score: f64,
    /// Percentage points.
    pub comp_avg: f64,
    /// `score - comp_avg`, in percentage points. Negative means behind the
    /// competitor average.
    pub gap: f64,
}

/// Parses survey score and competitor average and computes their gap.
#[must_use]
pub fn derive_brand_pulse(records: &[BrandPulseRecord]) -> Vec<BrandPulseRow> {
    brand_pulse_rows(records, &mut FieldParser::default())
}

pub(crate) fn brand_pulse_rows(
    records: &[BrandPulseRecord],
    parser: &mut FieldParser,
) -> Vec<BrandPulseRow> {
    let rows: Vec<BrandPulseRow> = records
        .iter()
        .enumerate()
        .map(|(idx, record)| {
            let score = parser.percentage(&record.score_raw, TABLE, idx, "score");
            let comp_avg = parser.percentage(&record.comp_avg_raw, TABLE, idx, "comp_avg");

            BrandPulseRow {
                record: record.clone(),
                score,
                comp_avg,
                gap: score - comp_avg,
            }
        })
        .collect();

    tracing::debug!(table = TABLE, rows = rows.len(), "derived table");
    rows
}

/// Keeps the rows for one survey metric, preserving order.
#[must_use]
pub fn filter_metric(rows: &[BrandPulseRow], metric: BrandMetric) -> Vec<BrandPulseRow> {
    rows.iter()
        .filter(|row| row.record.metric == metric)
        .cloned()
        .collect()
}
