//! Built-in sample dataset.
//!
//! Half a year of marketing performance figures used when no dataset file is
//! configured. Currency and percentage cells keep their display formatting so
//! the normalizers see the same shapes a spreadsheet export would produce.

use crate::error::LoadError;
use crate::loader::Loader;
use crate::record::{
    AgeGroup, BrandMetric, BrandPulseRecord, EventRecord, Gender, MonitoringRecord, Platform,
    RawField, RawTables, SocialRecord, WebsiteRecord,
};

/// Serves the built-in sample tables. Never fails.
#[derive(Debug, Clone, Copy, Default)]
pub struct SampleLoader;

impl Loader for SampleLoader {
    fn load(&self) -> Result<RawTables, LoadError> {
        Ok(sample_tables())
    }
}

/// Returns a fresh copy of the sample tables.
#[must_use]
pub fn sample_tables() -> RawTables {
    RawTables {
        social: social(),
        website: website(),
        events: events(),
        monitoring: monitoring(),
        brand_pulse: brand_pulse(),
    }
}

// (month, spend, impressions, clicks, signups)
const SOCIAL: &[(&str, &str, u64, u64, u64)] = &[
    ("2025-01", "$125,441", 12_464_777, 90_818, 4025),
    ("2025-02", "$126,198", 12_975_553, 101_975, 4560),
    ("2025-03", "$120,458", 12_962_575, 102_106, 4757),
    ("2025-04", "$125,973", 12_401_415, 101_072, 4862),
    ("2025-05", "$125,412", 13_055_242, 107_627, 5186),
    ("2025-06", "$120,042", 13_234_155, 114_475, 5480),
];

// (month, visits, uniques, avg session minutes, demos completed, total signups)
const WEBSITE: &[(&str, u64, u64, f64, u64, u64)] = &[
    ("2025-01", 2_450_685, 1_680_842, 2.5, 42_509, 10_827),
    ("2025-02", 2_680_483, 1_820_119, 2.6, 42_007, 11_745),
    ("2025-03", 2_920_086, 1_980_005, 2.5, 46_105, 12_767),
    ("2025-04", 3_180_870, 2_150_509, 2.8, 48_304, 13_183),
    ("2025-05", 3_460_175, 2_340_491, 2.9, 60_802, 13_860),
    ("2025-06", 3_780_668, 2_550_671, 2.6, 63_608, 14_862),
];

// (month, event, spend, demos conducted, leads generated)
const EVENTS: &[(&str, &str, &str, u64, u64)] = &[
    ("2025-01", "CES", "$750,000", 75, 15),
    ("2025-02", "Mobile World Congress", "$250,000", 55, 5),
    ("2025-03", "SXSW", "$250,000", 60, 3),
    ("2025-05", "Game Asia", "$650,000", 60, 5),
];

// (month, platform, followers, engagement rate, mentions, sentiment, share of voice)
const MONITORING: &[(&str, Platform, u64, &str, u64, f64, &str)] = &[
    ("2025-01", Platform::Instagram, 420_068, "3.60%", 5884, 0.68, "15.70%"),
    ("2025-02", Platform::Instagram, 432_010, "3.70%", 6440, 0.71, "16.80%"),
    ("2025-03", Platform::Instagram, 435_100, "3.70%", 6537, 0.73, "16.30%"),
    ("2025-04", Platform::Instagram, 440_089, "4.10%", 6345, 0.72, "15.60%"),
    ("2025-05", Platform::Instagram, 445_035, "4.00%", 6893, 0.69, "17.30%"),
    ("2025-06", Platform::Instagram, 450_047, "4.30%", 6749, 0.72, "17.40%"),
    ("2025-01", Platform::LinkedIn, 95_019, "2.20%", 1960, 0.81, "10.20%"),
    ("2025-02", Platform::LinkedIn, 96_057, "1.90%", 1398, 0.76, "6.80%"),
    ("2025-03", Platform::LinkedIn, 96_027, "1.80%", 1442, 0.77, "7.50%"),
    ("2025-04", Platform::LinkedIn, 97_054, "1.80%", 1223, 0.75, "6.00%"),
    ("2025-05", Platform::LinkedIn, 97_083, "1.90%", 1870, 0.8, "9.10%"),
    ("2025-06", Platform::LinkedIn, 97_079, "2.00%", 1154, 0.77, "6.60%"),
    ("2025-01", Platform::TikTok, 80_084, "4.20%", 3214, 0.72, "8.90%"),
    ("2025-02", Platform::TikTok, 83_046, "4.50%", 3680, 0.74, "9.80%"),
    ("2025-03", Platform::TikTok, 85_010, "4.80%", 4165, 0.76, "10.90%"),
    ("2025-04", Platform::TikTok, 87_003, "5.10%", 4333, 0.78, "12.10%"),
    ("2025-05", Platform::TikTok, 93_050, "5.40%", 4699, 0.8, "13.50%"),
    ("2025-06", Platform::TikTok, 96_063, "5.70%", 4713, 0.82, "15.00%"),
];

// (quarter, metric, age group, gender, score, competitor average)
const BRAND_PULSE: &[(&str, BrandMetric, AgeGroup, Gender, &str, &str)] = &[
    ("2024 Q4", BrandMetric::AidedAwareness, AgeGroup::Age18To34, Gender::Female, "52.80%", "54.70%"),
    ("2025 Q1", BrandMetric::AidedAwareness, AgeGroup::Age18To34, Gender::Female, "57.20%", "56.80%"),
    ("2025 Q2", BrandMetric::AidedAwareness, AgeGroup::Age18To34, Gender::Female, "60.10%", "58.90%"),
    ("2024 Q4", BrandMetric::AidedAwareness, AgeGroup::Age35To54, Gender::Female, "59.60%", "60.10%"),
    ("2025 Q1", BrandMetric::AidedAwareness, AgeGroup::Age35To54, Gender::Female, "63.60%", "62.90%"),
    ("2025 Q2", BrandMetric::AidedAwareness, AgeGroup::Age35To54, Gender::Female, "69.30%", "65.20%"),
    ("2024 Q4", BrandMetric::AidedAwareness, AgeGroup::Age18To34, Gender::Male, "67.20%", "58.30%"),
    ("2025 Q1", BrandMetric::AidedAwareness, AgeGroup::Age18To34, Gender::Male, "67.40%", "60.10%"),
    ("2025 Q2", BrandMetric::AidedAwareness, AgeGroup::Age18To34, Gender::Male, "68.10%", "62.10%"),
    ("2024 Q4", BrandMetric::AidedAwareness, AgeGroup::Age35To54, Gender::Male, "72.40%", "63.20%"),
    ("2025 Q1", BrandMetric::AidedAwareness, AgeGroup::Age35To54, Gender::Male, "71.30%", "65.40%"),
    ("2025 Q2", BrandMetric::AidedAwareness, AgeGroup::Age35To54, Gender::Male, "73.10%", "67.80%"),
    ("2024 Q4", BrandMetric::PurchaseConsideration, AgeGroup::Age18To34, Gender::Female, "23.40%", "25.60%"),
    ("2025 Q1", BrandMetric::PurchaseConsideration, AgeGroup::Age18To34, Gender::Female, "25.50%", "27.10%"),
    ("2025 Q2", BrandMetric::PurchaseConsideration, AgeGroup::Age18To34, Gender::Female, "28.30%", "28.90%"),
    ("2024 Q4", BrandMetric::PurchaseConsideration, AgeGroup::Age35To54, Gender::Female, "27.40%", "31.80%"),
    ("2025 Q1", BrandMetric::PurchaseConsideration, AgeGroup::Age35To54, Gender::Female, "32.90%", "34.50%"),
    ("2025 Q2", BrandMetric::PurchaseConsideration, AgeGroup::Age35To54, Gender::Female, "37.30%", "36.80%"),
    ("2024 Q4", BrandMetric::PurchaseConsideration, AgeGroup::Age18To34, Gender::Male, "34.80%", "28.90%"),
    ("2025 Q1", BrandMetric::PurchaseConsideration, AgeGroup::Age18To34, Gender::Male, "34.30%", "30.20%"),
    ("2025 Q2", BrandMetric::PurchaseConsideration, AgeGroup::Age18To34, Gender::Male, "37.00%", "32.10%"),
    ("2024 Q4", BrandMetric::PurchaseConsideration, AgeGroup::Age35To54, Gender::Male, "36.00%", "35.20%"),
    ("2025 Q1", BrandMetric::PurchaseConsideration, AgeGroup::Age35To54, Gender::Male, "39.20%", "37.80%"),
    ("2025 Q2", BrandMetric::PurchaseConsideration, AgeGroup::Age35To54, Gender::Male, "41.10%", "40.20%"),
    ("2024 Q4", BrandMetric::UnaidedAwareness, AgeGroup::Age18To34, Gender::Female, "19.60%", "16.20%"),
    ("2025 Q1", BrandMetric::UnaidedAwareness, AgeGroup::Age18To34, Gender::Female, "21.20%", "17.10%"),
    ("2025 Q2", BrandMetric::UnaidedAwareness, AgeGroup::Age18To34, Gender::Female, "23.80%", "18.30%"),
    ("2024 Q4", BrandMetric::UnaidedAwareness, AgeGroup::Age35To54, Gender::Female, "19.50%", "19.80%"),
    ("2025 Q1", BrandMetric::UnaidedAwareness, AgeGroup::Age35To54, Gender::Female, "23.30%", "21.20%"),
    ("2025 Q2", BrandMetric::UnaidedAwareness, AgeGroup::Age35To54, Gender::Female, "25.50%", "22.70%"),
    ("2024 Q4", BrandMetric::UnaidedAwareness, AgeGroup::Age18To34, Gender::Male, "23.20%", "18.50%"),
    ("2025 Q1", BrandMetric::UnaidedAwareness, AgeGroup::Age18To34, Gender::Male, "24.50%", "19.20%"),
    ("2025 Q2", BrandMetric::UnaidedAwareness, AgeGroup::Age18To34, Gender::Male, "24.90%", "20.10%"),
    ("2024 Q4", BrandMetric::UnaidedAwareness, AgeGroup::Age35To54, Gender::Male, "28.40%", "22.10%"),
    ("2025 Q1", BrandMetric::UnaidedAwareness, AgeGroup::Age35To54, Gender::Male, "29.30%", "23.50%"),
    ("2025 Q2", BrandMetric::UnaidedAwareness, AgeGroup::Age35To54, Gender::Male, "29.20%", "24.80%"),
];

fn social() -> Vec<SocialRecord> {
    SOCIAL
        .iter()
        .map(|&(month, spend, impressions, clicks, signups)| SocialRecord {
            month: month.to_string(),
            spend_raw: RawField::from(spend),
            impressions,
            clicks,
            signups,
        })
        .collect()
}

fn website() -> Vec<WebsiteRecord> {
    WEBSITE
        .iter()
        .map(
            |&(month, visits, uniques, avg_session_minutes, demos_completed, total_signups)| {
                WebsiteRecord {
                    month: month.to_string(),
                    visits,
                    uniques,
                    avg_session_minutes,
                    demos_completed,
                    total_signups,
                }
            },
        )
        .collect()
}

fn events() -> Vec<EventRecord> {
    EVENTS
        .iter()
        .map(
            |&(month, event_name, spend, demos_conducted, leads_generated)| EventRecord {
                month: month.to_string(),
                event_name: event_name.to_string(),
                spend_raw: RawField::from(spend),
                demos_conducted,
                leads_generated,
            },
        )
        .collect()
}

fn monitoring() -> Vec<MonitoringRecord> {
    MONITORING
        .iter()
        .map(
            |&(month, platform, followers, engagement, mentions, sentiment_score, sov)| {
                MonitoringRecord {
                    month: month.to_string(),
                    platform,
                    followers,
                    engagement_rate_raw: RawField::from(engagement),
                    mentions,
                    sentiment_score,
                    share_of_voice_raw: RawField::from(sov),
                }
            },
        )
        .collect()
}

fn brand_pulse() -> Vec<BrandPulseRecord> {
    BRAND_PULSE
        .iter()
        .map(
            |&(quarter, metric, age_group, gender, score, comp_avg)| BrandPulseRecord {
                quarter: quarter.to_string(),
                metric,
                age_group,
                gender,
                score_raw: RawField::from(score),
                comp_avg_raw: RawField::from(comp_avg),
            },
        )
        .collect()
}
