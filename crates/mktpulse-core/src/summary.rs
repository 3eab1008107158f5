//! Descriptive statistics behind the dashboard's KPI cards.
//!
//! Everything here reads derived tables and never fails: empty tables give
//! zero totals and `None` averages or "best" entries. Count totals saturate
//! at `u64::MAX`.

use serde::Serialize;

use crate::derive::{BrandPulseRow, DerivedTables, EventRow, MonitoringRow, SocialRow, WebsiteRow};
use crate::ratio::{count, safe_ratio, PERCENT, RATIO};
use crate::record::{AgeGroup, BrandMetric, Gender, Platform};

/// Arithmetic mean, or `None` for an empty input.
#[must_use]
pub fn mean<I: IntoIterator<Item = f64>>(values: I) -> Option<f64> {
    let (sum, n) = values
        .into_iter()
        .fold((0.0_f64, 0_usize), |(sum, n), v| (sum + v, n + 1));
    if n == 0 {
        return None;
    }
    #[allow(clippy::cast_precision_loss)]
    let denom = n as f64;
    Some(sum / denom)
}

/// Sum of counts, saturating at `u64::MAX`.
#[must_use]
pub fn total<I: IntoIterator<Item = u64>>(values: I) -> u64 {
    values.into_iter().fold(0, u64::saturating_add)
}

/// Index of the first maximum, skipping NaN. `None` when nothing qualifies.
#[must_use]
pub fn idxmax(values: &[f64]) -> Option<usize> {
    values
        .iter()
        .enumerate()
        .filter(|(_, v)| !v.is_nan())
        .fold(None, |best: Option<(usize, f64)>, (idx, &v)| match best {
            Some((_, current)) if current >= v => best,
            _ => Some((idx, v)),
        })
        .map(|(idx, _)| idx)
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SocialKpis {
    pub total_spend: f64,
    pub total_impressions: u64,
    pub total_clicks: u64,
    pub total_signups: u64,
    pub avg_ctr: Option<f64>,
    pub avg_cpc: Option<f64>,
    pub avg_cost_per_signup: Option<f64>,
    pub best_ctr_month: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct WebsiteKpis {
    pub total_visits: u64,
    pub total_demos: u64,
    pub total_signups: u64,
    pub avg_session_minutes: Option<f64>,
    pub avg_unique_to_demo_rate: Option<f64>,
    pub avg_demo_to_signup_rate: Option<f64>,
    pub peak_visits_month: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EventKpis {
    pub total_spend: f64,
    pub total_demos: u64,
    pub total_leads: u64,
    /// Total spend over total leads; `0.0` without leads.
    pub overall_cost_per_lead: f64,
    /// Event with the highest demo-to-lead rate.
    pub best_event: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PlatformKpis {
    pub platform: Platform,
    /// Followers in the platform's last row.
    pub latest_followers: u64,
    /// Percent change from the first to the last row.
    pub follower_growth: f64,
    pub avg_engagement_rate: f64,
    pub avg_sentiment: f64,
    pub avg_share_of_voice: f64,
}

/// Survey cell with the widest lead over the competitor average.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Segment {
    pub quarter: String,
    pub age_group: AgeGroup,
    pub gender: Gender,
    pub gap: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MetricKpis {
    pub metric: BrandMetric,
    pub avg_score: f64,
    pub avg_comp_avg: f64,
    pub avg_gap: f64,
    pub best_segment: Option<Segment>,
}

/// All KPI cards for one set of derived tables.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Kpis {
    pub social: SocialKpis,
    pub website: WebsiteKpis,
    pub events: EventKpis,
    /// One entry per platform, in order of first appearance.
    pub monitoring: Vec<PlatformKpis>,
    /// One entry per survey metric, in order of first appearance.
    pub brand_pulse: Vec<MetricKpis>,
}

#[must_use]
pub fn summarize(tables: &DerivedTables) -> Kpis {
    Kpis {
        social: social_kpis(&tables.social),
        website: website_kpis(&tables.website),
        events: event_kpis(&tables.events),
        monitoring: monitoring_kpis(&tables.monitoring),
        brand_pulse: brand_pulse_kpis(&tables.brand_pulse),
    }
}

#[must_use]
pub fn social_kpis(rows: &[SocialRow]) -> SocialKpis {
    let ctrs: Vec<f64> = rows.iter().map(|r| r.ctr).collect();
    SocialKpis {
        total_spend: rows.iter().map(|r| r.spend).sum(),
        total_impressions: total(rows.iter().map(|r| r.record.impressions)),
        total_clicks: total(rows.iter().map(|r| r.record.clicks)),
        total_signups: total(rows.iter().map(|r| r.record.signups)),
        avg_ctr: mean(ctrs.iter().copied()),
        avg_cpc: mean(rows.iter().map(|r| r.cpc)),
        avg_cost_per_signup: mean(rows.iter().map(|r| r.cost_per_signup)),
        best_ctr_month: idxmax(&ctrs).map(|idx| rows[idx].record.month.clone()),
    }
}

#[must_use]
pub fn website_kpis(rows: &[WebsiteRow]) -> WebsiteKpis {
    let visits: Vec<f64> = rows.iter().map(|r| count(r.record.visits)).collect();
    WebsiteKpis {
        total_visits: total(rows.iter().map(|r| r.record.visits)),
        total_demos: total(rows.iter().map(|r| r.record.demos_completed)),
        total_signups: total(rows.iter().map(|r| r.record.total_signups)),
        avg_session_minutes: mean(rows.iter().map(|r| r.record.avg_session_minutes)),
        avg_unique_to_demo_rate: mean(rows.iter().map(|r| r.unique_to_demo_rate)),
        avg_demo_to_signup_rate: mean(rows.iter().map(|r| r.demo_to_signup_rate)),
        peak_visits_month: idxmax(&visits).map(|idx| rows[idx].record.month.clone()),
    }
}

#[must_use]
pub fn event_kpis(rows: &[EventRow]) -> EventKpis {
    let total_spend: f64 = rows.iter().map(|r| r.spend).sum();
    let total_leads: u64 = total(rows.iter().map(|r| r.record.leads_generated));
    let rates: Vec<f64> = rows.iter().map(|r| r.demo_to_lead_rate).collect();
    EventKpis {
        total_spend,
        total_demos: total(rows.iter().map(|r| r.record.demos_conducted)),
        total_leads,
        overall_cost_per_lead: safe_ratio(total_spend, count(total_leads), RATIO),
        best_event: idxmax(&rates).map(|idx| rows[idx].record.event_name.clone()),
    }
}

#[must_use]
pub fn monitoring_kpis(rows: &[MonitoringRow]) -> Vec<PlatformKpis> {
    group_in_order(rows, |r| r.record.platform)
        .into_iter()
        .map(|(platform, group)| {
            let first = group.first().map_or(0, |r| r.record.followers);
            let latest = group.last().map_or(0, |r| r.record.followers);
            PlatformKpis {
                platform,
                latest_followers: latest,
                follower_growth: safe_ratio(count(latest) - count(first), count(first), PERCENT),
                avg_engagement_rate: mean(group.iter().map(|r| r.engagement_rate))
                    .unwrap_or_default(),
                avg_sentiment: mean(group.iter().map(|r| r.record.sentiment_score))
                    .unwrap_or_default(),
                avg_share_of_voice: mean(group.iter().map(|r| r.share_of_voice))
                    .unwrap_or_default(),
            }
        })
        .collect()
}

#[must_use]
pub fn brand_pulse_kpis(rows: &[BrandPulseRow]) -> Vec<MetricKpis> {
    group_in_order(rows, |r| r.record.metric)
        .into_iter()
        .map(|(metric, group)| {
            let gaps: Vec<f64> = group.iter().map(|r| r.gap).collect();
            let best_segment = idxmax(&gaps).map(|idx| {
                let row = group[idx];
                Segment {
                    quarter: row.record.quarter.clone(),
                    age_group: row.record.age_group,
                    gender: row.record.gender,
                    gap: row.gap,
                }
            });
            MetricKpis {
                metric,
                avg_score: mean(group.iter().map(|r| r.score)).unwrap_or_default(),
                avg_comp_avg: mean(group.iter().map(|r| r.comp_avg)).unwrap_or_default(),
                avg_gap: mean(gaps.iter().copied()).unwrap_or_default(),
                best_segment,
            }
        })
        .collect()
}

/// Groups rows by key, keeping groups in order of first appearance and rows
/// in table order within each group.
fn group_in_order<T, K, F>(rows: &[T], key: F) -> Vec<(K, Vec<&T>)>
where
    K: PartialEq,
    F: Fn(&T) -> K,
{
    let mut groups: Vec<(K, Vec<&T>)> = Vec::new();
    for row in rows {
        let k = key(row);
        match groups.iter_mut().find(|(existing, _)| *existing == k) {
            Some((_, members)) => members.push(row),
            None => groups.push((k, vec![row])),
        }
    }
    groups
}

#[cfg(test)]
#[path = "summary_test.rs"]
mod tests;
