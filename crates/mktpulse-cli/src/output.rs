//! Fixed-width and JSON printers for derived tables and KPIs.

use mktpulse_core::{
    filter_metric, filter_platforms, BrandMetric, BrandPulseRow, DerivedTables, EventRow, Kpis,
    MonitoringRow, Platform, SocialRow, WebsiteRow,
};
use serde_json::json;

use crate::Domain;

/// What the `tables` command was asked to show.
#[derive(Debug, Default)]
pub(crate) struct Selection {
    pub domain: Option<Domain>,
    /// Empty means every platform.
    pub platforms: Vec<Platform>,
    pub metric: Option<BrandMetric>,
}

impl Selection {
    fn includes(&self, domain: Domain) -> bool {
        self.domain.is_none_or(|d| d == domain)
    }
}

/// Applies the platform and metric filters to the monitoring and brand pulse
/// tables; other tables pass through.
pub(crate) fn select(derived: &DerivedTables, selection: &Selection) -> DerivedTables {
    let monitoring = if selection.platforms.is_empty() {
        derived.monitoring.clone()
    } else {
        filter_platforms(&derived.monitoring, &selection.platforms)
    };
    let brand_pulse = match selection.metric {
        Some(metric) => filter_metric(&derived.brand_pulse, metric),
        None => derived.brand_pulse.clone(),
    };
    DerivedTables {
        monitoring,
        brand_pulse,
        ..derived.clone()
    }
}

/// Prints the selected derived tables.
///
/// # Errors
///
/// Returns an error if JSON serialization fails.
pub(crate) fn print_tables(
    derived: &DerivedTables,
    selection: &Selection,
    as_json: bool,
) -> anyhow::Result<()> {
    let tables = select(derived, selection);

    if as_json {
        let value = match selection.domain {
            None => serde_json::to_value(&tables)?,
            Some(Domain::Social) => json!({ "social": tables.social }),
            Some(Domain::Website) => json!({ "website": tables.website }),
            Some(Domain::Events) => json!({ "events": tables.events }),
            Some(Domain::Monitoring) => json!({ "monitoring": tables.monitoring }),
            Some(Domain::BrandPulse) => json!({ "brand_pulse": tables.brand_pulse }),
        };
        println!("{}", serde_json::to_string_pretty(&value)?);
        return Ok(());
    }

    if selection.includes(Domain::Social) {
        print_social(&tables.social);
    }
    if selection.includes(Domain::Website) {
        print_website(&tables.website);
    }
    if selection.includes(Domain::Events) {
        print_events(&tables.events);
    }
    if selection.includes(Domain::Monitoring) {
        print_monitoring(&tables.monitoring);
    }
    if selection.includes(Domain::BrandPulse) {
        print_brand_pulse(&tables.brand_pulse);
    }

    if !tables.is_clean() {
        eprintln!(
            "note: {} field(s) could not be parsed and were shown as 0; run `validate` for details",
            tables.parse_defaults.len()
        );
    }
    Ok(())
}

/// Prints a notice instead of a header-only table. Returns `true` when empty.
fn empty_notice(name: &str, len: usize) -> bool {
    if len == 0 {
        println!("no {name} rows match the current selection");
        println!();
    }
    len == 0
}

fn print_social(rows: &[SocialRow]) {
    println!("== social ==");
    if empty_notice("social", rows.len()) {
        return;
    }
    println!(
        "{:<10}{:>14}{:>14}{:>10}{:>10}{:>10}{:>10}{:>12}",
        "MONTH", "SPEND", "IMPRESSIONS", "CTR %", "CLK>SU %", "CPM", "CPC", "COST/SU"
    );
    for r in rows {
        println!(
            "{:<10}{:>14.2}{:>14}{:>10.4}{:>10.2}{:>10.2}{:>10.4}{:>12.2}",
            r.record.month,
            r.spend,
            r.record.impressions,
            r.ctr,
            r.click_to_signup_rate,
            r.cpm,
            r.cpc,
            r.cost_per_signup
        );
    }
    println!();
}

fn print_website(rows: &[WebsiteRow]) {
    println!("== website ==");
    if empty_notice("website", rows.len()) {
        return;
    }
    println!(
        "{:<10}{:>12}{:>12}{:>10}{:>10}{:>12}{:>12}",
        "MONTH", "VISITS", "UNIQUES", "SESSION", "DEMOS", "U>DEMO %", "DEMO>SU %"
    );
    for r in rows {
        println!(
            "{:<10}{:>12}{:>12}{:>10.1}{:>10}{:>12.2}{:>12.2}",
            r.record.month,
            r.record.visits,
            r.record.uniques,
            r.record.avg_session_minutes,
            r.record.demos_completed,
            r.unique_to_demo_rate,
            r.demo_to_signup_rate
        );
    }
    println!();
}

fn print_events(rows: &[EventRow]) {
    println!("== events ==");
    if empty_notice("events", rows.len()) {
        return;
    }
    println!(
        "{:<10}{:<25}{:>12}{:>12}{:>12}{:>12}",
        "MONTH", "EVENT", "SPEND", "COST/DEMO", "COST/LEAD", "D>LEAD %"
    );
    for r in rows {
        println!(
            "{:<10}{:<25}{:>12.2}{:>12.2}{:>12.2}{:>12.2}",
            r.record.month,
            r.record.event_name,
            r.spend,
            r.cost_per_demo,
            r.cost_per_lead,
            r.demo_to_lead_rate
        );
    }
    println!();
}

fn print_monitoring(rows: &[MonitoringRow]) {
    println!("== monitoring ==");
    if empty_notice("monitoring", rows.len()) {
        return;
    }
    println!(
        "{:<10}{:<12}{:>12}{:>10}{:>10}{:>11}{:>8}",
        "MONTH", "PLATFORM", "FOLLOWERS", "ENGAGE %", "MENTIONS", "SENTIMENT", "SOV %"
    );
    for r in rows {
        println!(
            "{:<10}{:<12}{:>12}{:>10.2}{:>10}{:>11.2}{:>8.2}",
            r.record.month,
            r.record.platform.to_string(),
            r.record.followers,
            r.engagement_rate,
            r.record.mentions,
            r.record.sentiment_score,
            r.share_of_voice
        );
    }
    println!();
}

fn print_brand_pulse(rows: &[BrandPulseRow]) {
    println!("== brand pulse ==");
    if empty_notice("brand pulse", rows.len()) {
        return;
    }
    println!(
        "{:<10}{:<25}{:<8}{:<8}{:>8}{:>10}{:>8}",
        "QUARTER", "METRIC", "AGE", "GENDER", "SCORE", "COMP AVG", "GAP"
    );
    for r in rows {
        println!(
            "{:<10}{:<25}{:<8}{:<8}{:>8.2}{:>10.2}{:>+8.2}",
            r.record.quarter,
            r.record.metric.to_string(),
            r.record.age_group.to_string(),
            r.record.gender.to_string(),
            r.score,
            r.comp_avg,
            r.gap
        );
    }
    println!();
}

/// Formats an optional KPI value, showing `-` when there is no data.
pub(crate) fn opt(value: Option<f64>, precision: usize) -> String {
    value.map_or_else(|| "-".to_string(), |v| format!("{v:.precision$}"))
}

/// Prints the KPI summary.
///
/// # Errors
///
/// Returns an error if JSON serialization fails.
pub(crate) fn print_kpis(kpis: &Kpis, as_json: bool) -> anyhow::Result<()> {
    if as_json {
        println!("{}", serde_json::to_string_pretty(kpis)?);
        return Ok(());
    }

    let s = &kpis.social;
    println!("== social ==");
    println!("total spend           {:.2}", s.total_spend);
    println!("total signups         {}", s.total_signups);
    println!("avg CTR %             {}", opt(s.avg_ctr, 4));
    println!("avg CPC               {}", opt(s.avg_cpc, 4));
    println!("avg cost per signup   {}", opt(s.avg_cost_per_signup, 2));
    println!(
        "best CTR month        {}",
        s.best_ctr_month.as_deref().unwrap_or("-")
    );
    println!();

    let w = &kpis.website;
    println!("== website ==");
    println!("total visits          {}", w.total_visits);
    println!("total demos           {}", w.total_demos);
    println!("avg session minutes   {}", opt(w.avg_session_minutes, 2));
    println!("avg unique>demo %     {}", opt(w.avg_unique_to_demo_rate, 2));
    println!("avg demo>signup %     {}", opt(w.avg_demo_to_signup_rate, 2));
    println!(
        "peak visits month     {}",
        w.peak_visits_month.as_deref().unwrap_or("-")
    );
    println!();

    let e = &kpis.events;
    println!("== events ==");
    println!("total spend           {:.2}", e.total_spend);
    println!("total leads           {}", e.total_leads);
    println!("cost per lead         {:.2}", e.overall_cost_per_lead);
    println!(
        "best event            {}",
        e.best_event.as_deref().unwrap_or("-")
    );
    println!();

    println!("== monitoring ==");
    println!(
        "{:<12}{:>12}{:>10}{:>10}{:>11}{:>8}",
        "PLATFORM", "FOLLOWERS", "GROWTH %", "ENGAGE %", "SENTIMENT", "SOV %"
    );
    for p in &kpis.monitoring {
        println!(
            "{:<12}{:>12}{:>10.2}{:>10.2}{:>11.2}{:>8.2}",
            p.platform.to_string(),
            p.latest_followers,
            p.follower_growth,
            p.avg_engagement_rate,
            p.avg_sentiment,
            p.avg_share_of_voice
        );
    }
    println!();

    println!("== brand pulse ==");
    println!(
        "{:<25}{:>8}{:>10}{:>8}  BEST SEGMENT",
        "METRIC", "SCORE", "COMP AVG", "GAP"
    );
    for m in &kpis.brand_pulse {
        let best = m.best_segment.as_ref().map_or_else(
            || "-".to_string(),
            |b| format!("{} {} {} ({:+.2})", b.quarter, b.age_group, b.gender, b.gap),
        );
        println!(
            "{:<25}{:>8.2}{:>10.2}{:>+8.2}  {best}",
            m.metric.to_string(),
            m.avg_score,
            m.avg_comp_avg,
            m.avg_gap
        );
    }

    Ok(())
}
