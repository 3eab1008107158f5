//! Markdown report over the derived tables.

use chrono::Utc;
use mktpulse_core::{summarize, DerivedTables};

use crate::output::opt;

/// Prints a markdown report: KPI highlights followed by one table per domain.
pub(crate) fn print_report(derived: &DerivedTables, source: &str) {
    let kpis = summarize(derived);
    let now = Utc::now().format("%Y-%m-%d %H:%M UTC");

    println!("# Marketing Performance Report");
    println!();
    println!("**Generated**: {now}");
    println!("**Source**: {source}");
    if !derived.is_clean() {
        println!(
            "**Data quality**: {} field(s) could not be parsed and count as 0",
            derived.parse_defaults.len()
        );
    }
    println!();
    println!("---");
    println!();

    println!("## Highlights");
    println!();
    println!(
        "- Paid social: {:.2} USD spend, {} signups, avg CTR {}%, best month {}",
        kpis.social.total_spend,
        kpis.social.total_signups,
        opt(kpis.social.avg_ctr, 4),
        kpis.social.best_ctr_month.as_deref().unwrap_or("-")
    );
    println!(
        "- Website: {} visits, {} demos, avg demo-to-signup {}%",
        kpis.website.total_visits,
        kpis.website.total_demos,
        opt(kpis.website.avg_demo_to_signup_rate, 2)
    );
    println!(
        "- Events: {:.2} USD spend, {} leads, {:.2} USD per lead, best event {}",
        kpis.events.total_spend,
        kpis.events.total_leads,
        kpis.events.overall_cost_per_lead,
        kpis.events.best_event.as_deref().unwrap_or("-")
    );
    for p in &kpis.monitoring {
        println!(
            "- {}: {} followers ({:+.2}%), engagement {:.2}%, sentiment {:.2}",
            p.platform, p.latest_followers, p.follower_growth, p.avg_engagement_rate, p.avg_sentiment
        );
    }
    for m in &kpis.brand_pulse {
        println!(
            "- {}: avg score {:.2}% vs competitors {:.2}% (gap {:+.2} pts)",
            m.metric, m.avg_score, m.avg_comp_avg, m.avg_gap
        );
    }
    println!();

    println!("## Social Media Performance");
    println!();
    println!("| Month | Spend | CTR % | CPM | CPC | Cost/Signup |");
    println!("|-------|-------|-------|-----|-----|-------------|");
    for r in &derived.social {
        println!(
            "| {} | {:.2} | {:.4} | {:.2} | {:.4} | {:.2} |",
            r.record.month, r.spend, r.ctr, r.cpm, r.cpc, r.cost_per_signup
        );
    }
    println!();

    println!("## Website Engagement");
    println!();
    println!("| Month | Visits | Uniques | Unique>Demo % | Demo>Signup % |");
    println!("|-------|--------|---------|---------------|---------------|");
    for r in &derived.website {
        println!(
            "| {} | {} | {} | {:.2} | {:.2} |",
            r.record.month,
            r.record.visits,
            r.record.uniques,
            r.unique_to_demo_rate,
            r.demo_to_signup_rate
        );
    }
    println!();

    println!("## B2B Events");
    println!();
    println!("| Month | Event | Spend | Cost/Demo | Cost/Lead | Demo>Lead % |");
    println!("|-------|-------|-------|-----------|-----------|-------------|");
    for r in &derived.events {
        println!(
            "| {} | {} | {:.2} | {:.2} | {:.2} | {:.2} |",
            r.record.month,
            r.record.event_name,
            r.spend,
            r.cost_per_demo,
            r.cost_per_lead,
            r.demo_to_lead_rate
        );
    }
    println!();

    println!("## Social Monitoring");
    println!();
    println!("| Month | Platform | Followers | Engagement % | Sentiment | Share of Voice % |");
    println!("|-------|----------|-----------|--------------|-----------|------------------|");
    for r in &derived.monitoring {
        println!(
            "| {} | {} | {} | {:.2} | {:.2} | {:.2} |",
            r.record.month,
            r.record.platform,
            r.record.followers,
            r.engagement_rate,
            r.record.sentiment_score,
            r.share_of_voice
        );
    }
    println!();

    println!("## Brand Pulse Survey");
    println!();
    println!("| Quarter | Metric | Age | Gender | Score % | Comp. Avg % | Gap |");
    println!("|---------|--------|-----|--------|---------|-------------|-----|");
    for r in &derived.brand_pulse {
        println!(
            "| {} | {} | {} | {} | {:.2} | {:.2} | {:+.2} |",
            r.record.quarter,
            r.record.metric,
            r.record.age_group,
            r.record.gender,
            r.score,
            r.comp_avg,
            r.gap
        );
    }
}
