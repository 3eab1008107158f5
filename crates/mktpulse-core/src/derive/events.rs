use serde::Serialize;

use super::FieldParser;
use crate::ratio::{count, safe_ratio, PERCENT, RATIO};
use crate::record::EventRecord;

const TABLE: &str = "events";

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EventRow {
    #[serde(flatten)]
    pub record: EventRecord,
    pub spend: f64,
    pub cost_per_demo: f64,
    pub cost_per_lead: f64,
    /// Leads per demo, percent.
    pub demo_to_lead_rate: f64,
}

/// Derives event spend, cost per demo, cost per lead and demo-to-lead rate.
#[must_use]
pub fn derive_events(records: &[EventRecord]) -> Vec<EventRow> {
    event_rows(records, &mut FieldParser::default())
}

pub(crate) fn event_rows(records: &[EventRecord], parser: &mut FieldParser) -> Vec<EventRow> {
    let rows: Vec<EventRow> = records
        .iter()
        .enumerate()
        .map(|(idx, record)| {
            let spend = parser.currency(&record.spend_raw, TABLE, idx, "spend");
            let demos = count(record.demos_conducted);
            let leads = count(record.leads_generated);

            EventRow {
                record: record.clone(),
                spend,
                cost_per_demo: safe_ratio(spend, demos, RATIO),
                cost_per_lead: safe_ratio(spend, leads, RATIO),
                demo_to_lead_rate: safe_ratio(leads, demos, PERCENT),
            }
        })
        .collect();

    tracing::debug!(table = TABLE, rows = rows.len(), "derived table");
    rows
}
