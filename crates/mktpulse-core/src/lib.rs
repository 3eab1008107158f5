//! Metric derivation pipeline for the marketing performance dashboard.
//!
//! Raw per-domain tables (social spend, website engagement, B2B events,
//! social listening, brand pulse survey) come from a [`Loader`], have their
//! string-encoded currency and percentage fields normalized, and gain derived
//! rate/cost columns. The resulting [`DerivedTables`] are plain serializable
//! data for whatever renders them.

pub mod app_config;
pub mod config;
pub mod derive;
pub mod error;
pub mod loader;
pub mod normalize;
pub mod ratio;
pub mod record;
pub mod sample;
pub mod summary;

pub use app_config::{AppConfig, Environment};
pub use config::{load_app_config, load_app_config_from_env};
pub use derive::{
    derive_all, derive_all_strict, derive_brand_pulse, derive_events, derive_monitoring,
    derive_social, derive_website, filter_metric, filter_platforms, BrandPulseRow,
    DerivedTables, EventRow, MonitoringRow, SocialRow, WebsiteRow,
};
pub use error::{ConfigError, CoreError, LoadError, ParseError};
pub use loader::{CachedLoader, FileLoader, Loader};
pub use normalize::{
    parse_currency, parse_currency_strict, parse_percentage, parse_percentage_strict,
};
pub use ratio::safe_ratio;
pub use record::{
    AgeGroup, BrandMetric, BrandPulseRecord, EventRecord, Gender, MonitoringRecord, Platform,
    RawField, RawTables, SocialRecord, WebsiteRecord,
};
pub use sample::SampleLoader;
pub use summary::{summarize, Kpis};
