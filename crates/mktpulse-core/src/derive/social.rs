use serde::Serialize;

use super::FieldParser;
use crate::ratio::{count, safe_ratio, PERCENT, PER_MILLE, RATIO};
use crate::record::SocialRecord;

const TABLE: &str = "social";

/// A [`SocialRecord`] with its spend normalized and funnel costs derived.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SocialRow {
    #[serde(flatten)]
    pub record: SocialRecord,
    /// Spend in USD.
    pub spend: f64,
    /// Click-through rate, percent.
    pub ctr: f64,
    /// Sign-ups per click, percent.
    pub click_to_signup_rate: f64,
    /// Cost per thousand impressions.
    pub cpm: f64,
    /// Cost per click.
    pub cpc: f64,
    pub cost_per_signup: f64,
}

/// Derives spend, CTR, click-to-signup rate, CPM, CPC and cost per sign-up.
#[must_use]
pub fn derive_social(records: &[SocialRecord]) -> Vec<SocialRow> {
    social_rows(records, &mut FieldParser::default())
}

pub(crate) fn social_rows(records: &[SocialRecord], parser: &mut FieldParser) -> Vec<SocialRow> {
    let rows: Vec<SocialRow> = records
        .iter()
        .enumerate()
        .map(|(idx, record)| {
            let spend = parser.currency(&record.spend_raw, TABLE, idx, "spend");
            let impressions = count(record.impressions);
            let clicks = count(record.clicks);
            let signups = count(record.signups);

            SocialRow {
                record: record.clone(),
                spend,
                ctr: safe_ratio(clicks, impressions, PERCENT),
                click_to_signup_rate: safe_ratio(signups, clicks, PERCENT),
                cpm: safe_ratio(spend, impressions, PER_MILLE),
                cpc: safe_ratio(spend, clicks, RATIO),
                cost_per_signup: safe_ratio(spend, signups, RATIO),
            }
        })
        .collect();

    tracing::debug!(table = TABLE, rows = rows.len(), "derived table");
    rows
}
