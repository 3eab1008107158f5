//! Raw record types for the five dashboard domains.
//!
//! Counts are typed integers. Currency and percentage columns are kept as
//! [`RawField`] because upstream sources deliver them either as numbers or as
//! display strings like `"$125,441"` and `"3.60%"`.

use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::CoreError;

/// A numeric column as delivered by the source: already a number, or text
/// that still carries currency/percent formatting.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum RawField {
    Number(f64),
    Text(String),
}

impl From<&str> for RawField {
    fn from(value: &str) -> Self {
        RawField::Text(value.to_string())
    }
}

impl From<String> for RawField {
    fn from(value: String) -> Self {
        RawField::Text(value)
    }
}

impl From<f64> for RawField {
    fn from(value: f64) -> Self {
        RawField::Number(value)
    }
}

impl std::fmt::Display for RawField {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            RawField::Number(n) => write!(f, "{n}"),
            RawField::Text(s) => write!(f, "{s}"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Platform {
    Instagram,
    LinkedIn,
    TikTok,
}

impl Platform {
    pub const ALL: [Platform; 3] = [Platform::Instagram, Platform::LinkedIn, Platform::TikTok];
}

impl std::fmt::Display for Platform {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Platform::Instagram => write!(f, "Instagram"),
            Platform::LinkedIn => write!(f, "LinkedIn"),
            Platform::TikTok => write!(f, "TikTok"),
        }
    }
}

impl FromStr for Platform {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "instagram" => Ok(Platform::Instagram),
            "linkedin" => Ok(Platform::LinkedIn),
            "tiktok" => Ok(Platform::TikTok),
            _ => Err(CoreError::UnknownPlatform(s.to_string())),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum BrandMetric {
    #[serde(rename = "Aided Awareness")]
    AidedAwareness,
    #[serde(rename = "Purchase Consideration")]
    PurchaseConsideration,
    #[serde(rename = "Unaided Awareness")]
    UnaidedAwareness,
}

impl std::fmt::Display for BrandMetric {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            BrandMetric::AidedAwareness => write!(f, "Aided Awareness"),
            BrandMetric::PurchaseConsideration => write!(f, "Purchase Consideration"),
            BrandMetric::UnaidedAwareness => write!(f, "Unaided Awareness"),
        }
    }
}

impl FromStr for BrandMetric {
    type Err = CoreError;

    /// Accepts the display name or a kebab/snake-case slug, case-insensitively.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let key: String = s
            .trim()
            .to_ascii_lowercase()
            .chars()
            .filter(char::is_ascii_alphabetic)
            .collect();
        match key.as_str() {
            "aidedawareness" => Ok(BrandMetric::AidedAwareness),
            "purchaseconsideration" => Ok(BrandMetric::PurchaseConsideration),
            "unaidedawareness" => Ok(BrandMetric::UnaidedAwareness),
            _ => Err(CoreError::UnknownMetric(s.to_string())),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AgeGroup {
    #[serde(rename = "18-34")]
    Age18To34,
    #[serde(rename = "35-54")]
    Age35To54,
}

impl std::fmt::Display for AgeGroup {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            AgeGroup::Age18To34 => write!(f, "18-34"),
            AgeGroup::Age35To54 => write!(f, "35-54"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Gender {
    Female,
    Male,
}

impl std::fmt::Display for Gender {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Gender::Female => write!(f, "Female"),
            Gender::Male => write!(f, "Male"),
        }
    }
}

/// Monthly paid-social performance.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SocialRecord {
    /// `YYYY-MM`.
    pub month: String,
    /// Spend in USD, e.g. `"$125,441"`.
    #[serde(alias = "spend")]
    pub spend_raw: RawField,
    pub impressions: u64,
    /// Clicks through to the landing page.
    pub clicks: u64,
    /// Sign-ups attributed to paid social.
    pub signups: u64,
}

/// Monthly website engagement.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WebsiteRecord {
    pub month: String,
    pub visits: u64,
    pub uniques: u64,
    pub avg_session_minutes: f64,
    pub demos_completed: u64,
    pub total_signups: u64,
}

/// One industry event and what it produced.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EventRecord {
    pub month: String,
    pub event_name: String,
    #[serde(alias = "spend")]
    pub spend_raw: RawField,
    /// Product demos given to partner contacts at the event.
    pub demos_conducted: u64,
    /// New partner leads generated.
    pub leads_generated: u64,
}

/// Social-listening snapshot for one platform in one month.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MonitoringRecord {
    pub month: String,
    pub platform: Platform,
    pub followers: u64,
    /// e.g. `"3.60%"`.
    #[serde(alias = "engagement_rate")]
    pub engagement_rate_raw: RawField,
    pub mentions: u64,
    /// In `[0, 1]`.
    pub sentiment_score: f64,
    #[serde(alias = "share_of_voice")]
    pub share_of_voice_raw: RawField,
}

/// One brand survey cell: a metric for one demographic segment in one quarter.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BrandPulseRecord {
    /// e.g. `"2025 Q1"`.
    pub quarter: String,
    pub metric: BrandMetric,
    pub age_group: AgeGroup,
    pub gender: Gender,
    #[serde(alias = "score")]
    pub score_raw: RawField,
    /// Competitor average for the same cell.
    #[serde(alias = "comp_avg")]
    pub comp_avg_raw: RawField,
}

/// The five raw tables a [`crate::Loader`] supplies.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RawTables {
    pub social: Vec<SocialRecord>,
    pub website: Vec<WebsiteRecord>,
    pub events: Vec<EventRecord>,
    pub monitoring: Vec<MonitoringRecord>,
    pub brand_pulse: Vec<BrandPulseRecord>,
}

impl RawTables {
    /// Total number of records across all five tables.
    #[must_use]
    pub fn row_count(&self) -> usize {
        self.social.len()
            + self.website.len()
            + self.events.len()
            + self.monitoring.len()
            + self.brand_pulse.len()
    }
}
