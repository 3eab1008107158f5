use serde::Serialize;

use crate::ratio::{count, safe_ratio, PERCENT};
use crate::record::WebsiteRecord;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct WebsiteRow {
    #[serde(flatten)]
    pub record: WebsiteRecord,
    /// Demos completed per unique visitor, percent.
    pub unique_to_demo_rate: f64,
    /// Sign-ups per completed demo, percent.
    pub demo_to_signup_rate: f64,
}

/// Derives the unique-to-demo and demo-to-signup conversion rates.
///
/// Website records carry no string-encoded fields, so this table never
/// contributes parse defaults.
#[must_use]
pub fn derive_website(records: &[WebsiteRecord]) -> Vec<WebsiteRow> {
    let rows: Vec<WebsiteRow> = records
        .iter()
        .map(|record| {
            let uniques = count(record.uniques);
            let demos = count(record.demos_completed);
            let signups = count(record.total_signups);

            WebsiteRow {
                record: record.clone(),
                unique_to_demo_rate: safe_ratio(demos, uniques, PERCENT),
                demo_to_signup_rate: safe_ratio(signups, demos, PERCENT),
            }
        })
        .collect();

    tracing::debug!(table = "website", rows = rows.len(), "derived table");
    rows
}
