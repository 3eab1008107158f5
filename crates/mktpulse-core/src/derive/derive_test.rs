use super::*;
use crate::record::{
    AgeGroup, BrandMetric, BrandPulseRecord, EventRecord, Gender, MonitoringRecord, Platform,
    SocialRecord, WebsiteRecord,
};

fn assert_close(actual: f64, expected: f64, tolerance: f64) {
    assert!(
        (actual - expected).abs() < tolerance,
        "expected {expected} (+/- {tolerance}), got {actual}"
    );
}

fn social(month: &str, spend: &str, impressions: u64, clicks: u64, signups: u64) -> SocialRecord {
    SocialRecord {
        month: month.to_string(),
        spend_raw: RawField::from(spend),
        impressions,
        clicks,
        signups,
    }
}

fn website(uniques: u64, demos: u64, signups: u64) -> WebsiteRecord {
    WebsiteRecord {
        month: "2025-01".to_string(),
        visits: uniques * 2,
        uniques,
        avg_session_minutes: 2.5,
        demos_completed: demos,
        total_signups: signups,
    }
}

fn event(name: &str, spend: &str, demos: u64, leads: u64) -> EventRecord {
    EventRecord {
        month: "2025-03".to_string(),
        event_name: name.to_string(),
        spend_raw: RawField::from(spend),
        demos_conducted: demos,
        leads_generated: leads,
    }
}

fn monitoring(platform: Platform, engagement: &str, sov: &str) -> MonitoringRecord {
    MonitoringRecord {
        month: "2025-01".to_string(),
        platform,
        followers: 1000,
        engagement_rate_raw: RawField::from(engagement),
        mentions: 10,
        sentiment_score: 0.7,
        share_of_voice_raw: RawField::from(sov),
    }
}

fn pulse(metric: BrandMetric, score: &str, comp_avg: &str) -> BrandPulseRecord {
    BrandPulseRecord {
        quarter: "2024 Q4".to_string(),
        metric,
        age_group: AgeGroup::Age18To34,
        gender: Gender::Female,
        score_raw: RawField::from(score),
        comp_avg_raw: RawField::from(comp_avg),
    }
}

fn tables() -> RawTables {
    RawTables {
        social: vec![social("2025-01", "$125,441", 12_464_777, 90_818, 4025)],
        website: vec![website(1_680_842, 42_509, 10_827)],
        events: vec![event("SXSW", "$250,000", 60, 3)],
        monitoring: vec![monitoring(Platform::Instagram, "3.60%", "15.70%")],
        brand_pulse: vec![pulse(BrandMetric::AidedAwareness, "52.80%", "54.70%")],
    }
}

// -----------------------------------------------------------------------
// social
// -----------------------------------------------------------------------

#[test]
fn social_january_scenario() {
    let rows = derive_social(&[social("2025-01", "$125,441", 12_464_777, 90_818, 4025)]);
    let row = &rows[0];
    assert_close(row.spend, 125_441.0, 1e-9);
    assert_close(row.ctr, 0.7286, 1e-3);
    assert_close(row.cpc, 1.3812, 1e-3);
    assert_close(row.cost_per_signup, 31.17, 1e-2);
    assert_close(row.cpm, 10.0636, 1e-3);
    assert_close(row.click_to_signup_rate, 4.4319, 1e-3);
}

#[test]
fn social_zero_denominators_yield_zero() {
    let rows = derive_social(&[social("2025-01", "$1,000", 0, 0, 0)]);
    let row = &rows[0];
    assert_eq!(row.ctr, 0.0);
    assert_eq!(row.click_to_signup_rate, 0.0);
    assert_eq!(row.cpm, 0.0);
    assert_eq!(row.cpc, 0.0);
    assert_eq!(row.cost_per_signup, 0.0);
}

#[test]
fn social_malformed_spend_zeroes_costs_but_keeps_rates() {
    let rows = derive_social(&[social("2025-01", "TBD", 1000, 10, 1)]);
    let row = &rows[0];
    assert_eq!(row.spend, 0.0);
    assert_eq!(row.cpc, 0.0);
    assert_close(row.ctr, 1.0, 1e-12);
    assert_close(row.click_to_signup_rate, 10.0, 1e-12);
}

#[test]
fn social_preserves_order_and_raw_fields() {
    let records = vec![
        social("2025-03", "$3", 3, 3, 3),
        social("2025-01", "$1", 1, 1, 1),
        social("2025-01", "$1", 1, 1, 1),
    ];
    let rows = derive_social(&records);
    assert_eq!(rows.len(), 3);
    let back: Vec<SocialRecord> = rows.iter().map(|r| r.record.clone()).collect();
    assert_eq!(back, records);
}

// -----------------------------------------------------------------------
// website
// -----------------------------------------------------------------------

#[test]
fn website_conversion_rates() {
    let rows = derive_website(&[website(1000, 50, 10)]);
    assert_close(rows[0].unique_to_demo_rate, 5.0, 1e-12);
    assert_close(rows[0].demo_to_signup_rate, 20.0, 1e-12);
}

#[test]
fn website_zero_demos_yield_zero_signup_rate() {
    let rows = derive_website(&[website(1000, 0, 10)]);
    assert_eq!(rows[0].unique_to_demo_rate, 0.0);
    assert_eq!(rows[0].demo_to_signup_rate, 0.0);
}

// -----------------------------------------------------------------------
// events
// -----------------------------------------------------------------------

#[test]
fn events_sxsw_scenario() {
    let rows = derive_events(&[event("SXSW", "$250,000", 60, 3)]);
    let row = &rows[0];
    assert_close(row.cost_per_demo, 4166.67, 1e-2);
    assert_close(row.cost_per_lead, 83_333.33, 1e-2);
    assert_close(row.demo_to_lead_rate, 5.0, 1e-12);
}

#[test]
fn events_without_leads_yield_zero_cost_per_lead() {
    let rows = derive_events(&[event("Booth", "$10,000", 20, 0)]);
    assert_eq!(rows[0].cost_per_lead, 0.0);
    assert_eq!(rows[0].demo_to_lead_rate, 0.0);
    assert_close(rows[0].cost_per_demo, 500.0, 1e-12);
}

#[test]
fn events_negative_spend_passes_through() {
    let rows = derive_events(&[event("Refund", "-$1,000", 10, 5)]);
    assert_close(rows[0].spend, -1000.0, 1e-12);
    assert_close(rows[0].cost_per_lead, -200.0, 1e-12);
}

// -----------------------------------------------------------------------
// monitoring / brand pulse
// -----------------------------------------------------------------------

#[test]
fn monitoring_parses_percentages() {
    let rows = derive_monitoring(&[monitoring(Platform::TikTok, "4.20%", "8.90%")]);
    assert_close(rows[0].engagement_rate, 4.2, 1e-12);
    assert_close(rows[0].share_of_voice, 8.9, 1e-12);
}

#[test]
fn filter_platforms_keeps_selected_in_order() {
    let rows = derive_monitoring(&[
        monitoring(Platform::Instagram, "1%", "1%"),
        monitoring(Platform::LinkedIn, "2%", "2%"),
        monitoring(Platform::TikTok, "3%", "3%"),
    ]);
    let kept = filter_platforms(&rows, &[Platform::TikTok, Platform::Instagram]);
    let platforms: Vec<Platform> = kept.iter().map(|r| r.record.platform).collect();
    assert_eq!(platforms, vec![Platform::Instagram, Platform::TikTok]);
    assert!(filter_platforms(&rows, &[]).is_empty());
}

#[test]
fn brand_pulse_gap_scenario() {
    let rows = derive_brand_pulse(&[pulse(BrandMetric::AidedAwareness, "52.80%", "54.70%")]);
    assert_close(rows[0].gap, -1.90, 1e-9);
}

#[test]
fn filter_metric_selects_one_metric() {
    let rows = derive_brand_pulse(&[
        pulse(BrandMetric::AidedAwareness, "50%", "40%"),
        pulse(BrandMetric::UnaidedAwareness, "20%", "25%"),
    ]);
    let kept = filter_metric(&rows, BrandMetric::UnaidedAwareness);
    assert_eq!(kept.len(), 1);
    assert_close(kept[0].gap, -5.0, 1e-12);
}

// -----------------------------------------------------------------------
// derive_all / derive_all_strict
// -----------------------------------------------------------------------

#[test]
fn derive_all_clean_tables() {
    let derived = derive_all(&tables());
    assert!(derived.is_clean());
    assert_eq!(derived.social.len(), 1);
    assert_eq!(derived.website.len(), 1);
    assert_eq!(derived.events.len(), 1);
    assert_eq!(derived.monitoring.len(), 1);
    assert_eq!(derived.brand_pulse.len(), 1);
}

#[test]
fn derive_all_collects_parse_defaults_with_location() {
    let mut raw = tables();
    raw.events[0].spend_raw = RawField::from("$2.5M");
    raw.brand_pulse[0].comp_avg_raw = RawField::from("n/a");

    let derived = derive_all(&raw);
    assert_eq!(derived.parse_defaults.len(), 2);
    assert_eq!(derived.parse_defaults[0].field, "events[0].spend");
    assert_eq!(derived.parse_defaults[0].raw_value, "$2.5M");
    assert_eq!(derived.parse_defaults[1].field, "brand_pulse[0].comp_avg");
    assert_eq!(derived.events[0].spend, 0.0);
    assert_close(derived.brand_pulse[0].gap, 52.8, 1e-9);
}

#[test]
fn derive_all_strict_returns_first_error_in_table_order() {
    let mut raw = tables();
    raw.monitoring[0].share_of_voice_raw = RawField::from("high");
    raw.social[0].spend_raw = RawField::from("unknown");

    let err = derive_all_strict(&raw).unwrap_err();
    assert_eq!(err.field, "social[0].spend");
    assert_eq!(err.raw_value, "unknown");
}

#[test]
fn derive_all_strict_matches_lenient_on_clean_data() {
    let raw = tables();
    assert_eq!(derive_all_strict(&raw).unwrap(), derive_all(&raw));
}

#[test]
fn derive_all_is_idempotent_over_its_own_output() {
    let first = derive_all(&tables());
    let again = RawTables {
        social: first.social.iter().map(|r| r.record.clone()).collect(),
        website: first.website.iter().map(|r| r.record.clone()).collect(),
        events: first.events.iter().map(|r| r.record.clone()).collect(),
        monitoring: first.monitoring.iter().map(|r| r.record.clone()).collect(),
        brand_pulse: first.brand_pulse.iter().map(|r| r.record.clone()).collect(),
    };
    assert_eq!(derive_all(&again), first);
}

#[test]
fn derived_rows_serialize_flat() {
    let rows = derive_events(&[event("SXSW", "$250,000", 60, 3)]);
    let value = serde_json::to_value(&rows[0]).unwrap();
    assert_eq!(value["event_name"], "SXSW");
    assert_eq!(value["spend_raw"], "$250,000");
    assert_eq!(value["spend"], 250_000.0);
    assert_eq!(value["demo_to_lead_rate"], 5.0);
}
