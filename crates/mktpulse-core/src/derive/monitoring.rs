use serde::Serialize;

use super::FieldParser;
use crate::record::{MonitoringRecord, Platform};

const TABLE: &str = "monitoring";

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MonitoringRow {
    #[serde(flatten)]
    pub record: MonitoringRecord,
    /// Percentage points.
    pub engagement_rate: f64,
    /// Percentage points.
    pub share_of_voice: f64,
}

/// Parses engagement rate and share of voice into numeric percentages.
#[must_use]
pub fn derive_monitoring(records: &[MonitoringRecord]) -> Vec<MonitoringRow> {
    monitoring_rows(records, &mut FieldParser::default())
}

pub(crate) fn monitoring_rows(
    records: &[MonitoringRecord],
    parser: &mut FieldParser,
) -> Vec<MonitoringRow> {
    let rows: Vec<MonitoringRow> = records
        .iter()
        .enumerate()
        .map(|(idx, record)| MonitoringRow {
            record: record.clone(),
            engagement_rate: parser.percentage(
                &record.engagement_rate_raw,
                TABLE,
                idx,
                "engagement_rate",
            ),
            share_of_voice: parser.percentage(
                &record.share_of_voice_raw,
                TABLE,
                idx,
                "share_of_voice",
            ),
        })
        .collect();

    tracing::debug!(table = TABLE, rows = rows.len(), "derived table");
    rows
}

/// Keeps the rows whose platform is in `platforms`, preserving order.
///
/// An empty selection yields an empty table.
#[must_use]
pub fn filter_platforms(rows: &[MonitoringRow], platforms: &[Platform]) -> Vec<MonitoringRow> {
    rows.iter()
        .filter(|row| platforms.contains(&row.record.platform))
        .cloned()
        .collect()
}
