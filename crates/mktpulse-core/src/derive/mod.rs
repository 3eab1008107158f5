//! Per-domain metric derivation.
//!
//! Each `derive_*` function takes a raw table and returns a new table of rows,
//! one per input record and in the same order, with the source record kept
//! as-is and the derived columns added beside it. Nothing is mutated in place.
//!
//! Because every row keeps its source record, re-deriving from
//! `rows.iter().map(|r| r.record.clone())` reproduces the same rows.

mod brand_pulse;
mod events;
mod monitoring;
mod social;
mod website;

use serde::Serialize;

use crate::error::ParseError;
use crate::normalize::{parse_currency_strict, parse_percentage_strict};
use crate::record::{RawField, RawTables};

pub use brand_pulse::{derive_brand_pulse, filter_metric, BrandPulseRow};
pub use events::{derive_events, EventRow};
pub use monitoring::{derive_monitoring, filter_platforms, MonitoringRow};
pub use social::{derive_social, SocialRow};
pub use website::{derive_website, WebsiteRow};

/// The five enriched tables handed to the presentation layer.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DerivedTables {
    pub social: Vec<SocialRow>,
    pub website: Vec<WebsiteRow>,
    pub events: Vec<EventRow>,
    pub monitoring: Vec<MonitoringRow>,
    pub brand_pulse: Vec<BrandPulseRow>,
    /// Fields that failed to parse and were defaulted to `0.0`, in table order.
    /// Empty for clean data.
    pub parse_defaults: Vec<ParseError>,
}

impl DerivedTables {
    /// Returns `true` when every currency/percentage field parsed cleanly.
    #[must_use]
    pub fn is_clean(&self) -> bool {
        self.parse_defaults.is_empty()
    }
}

/// Derives all five tables, defaulting unparseable fields to `0.0`.
///
/// Every default is logged at `warn` and listed in
/// [`DerivedTables::parse_defaults`].
#[must_use]
pub fn derive_all(raw: &RawTables) -> DerivedTables {
    let mut parser = FieldParser::default();
    let derived = derive_with(raw, &mut parser);
    if !derived.is_clean() {
        tracing::warn!(
            defaults = derived.parse_defaults.len(),
            "derived tables contain defaulted fields"
        );
    }
    derived
}

/// Derives all five tables, failing on the first unparseable field.
///
/// # Errors
///
/// Returns the first [`ParseError`] in table order (social, website, events,
/// monitoring, brand pulse).
pub fn derive_all_strict(raw: &RawTables) -> Result<DerivedTables, ParseError> {
    let mut parser = FieldParser::strict();
    let mut derived = derive_with(raw, &mut parser);
    if derived.parse_defaults.is_empty() {
        Ok(derived)
    } else {
        Err(derived.parse_defaults.swap_remove(0))
    }
}

fn derive_with(raw: &RawTables, parser: &mut FieldParser) -> DerivedTables {
    let social = social::social_rows(&raw.social, parser);
    let website = derive_website(&raw.website);
    let events = events::event_rows(&raw.events, parser);
    let monitoring = monitoring::monitoring_rows(&raw.monitoring, parser);
    let brand_pulse = brand_pulse::brand_pulse_rows(&raw.brand_pulse, parser);

    DerivedTables {
        social,
        website,
        events,
        monitoring,
        brand_pulse,
        parse_defaults: parser.take_issues(),
    }
}

/// Runs the strict normalizers and records every failure.
///
/// A failure always yields `0.0` so the row can still be built; the lenient
/// mode additionally logs it.
#[derive(Debug, Default)]
pub(crate) struct FieldParser {
    strict: bool,
    issues: Vec<ParseError>,
}

impl FieldParser {
    fn strict() -> Self {
        Self {
            strict: true,
            issues: Vec::new(),
        }
    }

    pub(crate) fn currency(
        &mut self,
        value: &RawField,
        table: &str,
        row: usize,
        column: &str,
    ) -> f64 {
        let result = parse_currency_strict(column, value);
        self.settle(result, table, row)
    }

    pub(crate) fn percentage(
        &mut self,
        value: &RawField,
        table: &str,
        row: usize,
        column: &str,
    ) -> f64 {
        let result = parse_percentage_strict(column, value);
        self.settle(result, table, row)
    }

    fn settle(&mut self, result: Result<f64, ParseError>, table: &str, row: usize) -> f64 {
        result.unwrap_or_else(|mut err| {
            err.field = format!("{table}[{row}].{}", err.field);
            if !self.strict {
                tracing::warn!(
                    field = %err.field,
                    raw = %err.raw_value,
                    "unparseable value defaulted to 0.0"
                );
            }
            self.issues.push(err);
            0.0
        })
    }

    fn take_issues(&mut self) -> Vec<ParseError> {
        std::mem::take(&mut self.issues)
    }
}

#[cfg(test)]
#[path = "derive_test.rs"]
mod tests;
