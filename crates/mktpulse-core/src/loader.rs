//! Sources of raw tables.
//!
//! The pipeline does not care where records come from; anything that can
//! produce a [`RawTables`] implements [`Loader`]. [`crate::SampleLoader`]
//! serves the built-in figures, [`FileLoader`] reads a YAML or JSON export.

use std::path::{Path, PathBuf};
use std::sync::{Mutex, PoisonError};

use chrono::NaiveDate;

use crate::error::LoadError;
use crate::record::RawTables;

/// Supplies the five raw tables.
pub trait Loader {
    /// # Errors
    ///
    /// Returns [`LoadError`] if the source cannot be read, parsed, or fails
    /// validation.
    fn load(&self) -> Result<RawTables, LoadError>;
}

/// Reads a dataset file with one top-level key per table.
///
/// Files ending in `.json` are parsed as JSON; everything else as YAML.
#[derive(Debug, Clone)]
pub struct FileLoader {
    path: PathBuf,
}

impl FileLoader {
    #[must_use]
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    fn is_json(&self) -> bool {
        self.path
            .extension()
            .is_some_and(|ext| ext.eq_ignore_ascii_case("json"))
    }
}

impl Loader for FileLoader {
    fn load(&self) -> Result<RawTables, LoadError> {
        let content = std::fs::read_to_string(&self.path).map_err(|e| LoadError::Io {
            path: self.path.display().to_string(),
            source: e,
        })?;

        let tables: RawTables = if self.is_json() {
            serde_json::from_str(&content)?
        } else {
            serde_yaml::from_str(&content)?
        };

        validate_tables(&tables)?;

        tracing::info!(
            path = %self.path.display(),
            rows = tables.row_count(),
            "loaded dataset file"
        );
        Ok(tables)
    }
}

/// Memoizes the first successful load of the wrapped loader.
///
/// Failed loads are not cached; the next call retries the inner loader.
#[derive(Debug)]
pub struct CachedLoader<L> {
    inner: L,
    cache: Mutex<Option<RawTables>>,
}

impl<L: Loader> CachedLoader<L> {
    #[must_use]
    pub fn new(inner: L) -> Self {
        Self {
            inner,
            cache: Mutex::new(None),
        }
    }
}

impl<L: Loader> Loader for CachedLoader<L> {
    fn load(&self) -> Result<RawTables, LoadError> {
        let mut cache = self.cache.lock().unwrap_or_else(PoisonError::into_inner);
        if let Some(tables) = cache.as_ref() {
            tracing::debug!("serving raw tables from cache");
            return Ok(tables.clone());
        }
        let tables = self.inner.load()?;
        *cache = Some(tables.clone());
        Ok(tables)
    }
}

/// Checks the fields a file can get wrong that the type system cannot:
/// month and quarter labels, and the sentiment score range.
pub(crate) fn validate_tables(tables: &RawTables) -> Result<(), LoadError> {
    let months = tables
        .social
        .iter()
        .map(|r| ("social", r.month.as_str()))
        .chain(tables.website.iter().map(|r| ("website", r.month.as_str())))
        .chain(tables.events.iter().map(|r| ("events", r.month.as_str())))
        .chain(
            tables
                .monitoring
                .iter()
                .map(|r| ("monitoring", r.month.as_str())),
        );
    for (table, month) in months {
        if !is_valid_month(month) {
            return Err(LoadError::Validation(format!(
                "{table} has invalid month '{month}'; expected YYYY-MM"
            )));
        }
    }

    for record in &tables.events {
        if record.event_name.trim().is_empty() {
            return Err(LoadError::Validation(format!(
                "events row for {} has an empty event name",
                record.month
            )));
        }
    }

    for record in &tables.monitoring {
        if !(0.0..=1.0).contains(&record.sentiment_score) {
            return Err(LoadError::Validation(format!(
                "monitoring row {} {} has sentiment score {} outside [0, 1]",
                record.month, record.platform, record.sentiment_score
            )));
        }
    }

    for record in &tables.brand_pulse {
        if !is_valid_quarter(&record.quarter) {
            return Err(LoadError::Validation(format!(
                "brand_pulse has invalid quarter '{}'; expected e.g. '2025 Q1'",
                record.quarter
            )));
        }
    }

    Ok(())
}

fn is_valid_month(month: &str) -> bool {
    month.len() == 7
        && month.as_bytes()[4] == b'-'
        && NaiveDate::parse_from_str(&format!("{month}-01"), "%Y-%m-%d").is_ok()
}

fn is_valid_quarter(quarter: &str) -> bool {
    let Some((year, q)) = quarter.split_once(" Q") else {
        return false;
    };
    year.len() == 4
        && year.bytes().all(|b| b.is_ascii_digit())
        && matches!(q, "1" | "2" | "3" | "4")
}

#[cfg(test)]
mod tests {
    use std::sync::atomic::{AtomicUsize, Ordering};

    use super::*;
    use crate::sample::sample_tables;

    struct CountingLoader {
        calls: AtomicUsize,
        fail_first: bool,
    }

    impl Loader for CountingLoader {
        fn load(&self) -> Result<RawTables, LoadError> {
            let n = self.calls.fetch_add(1, Ordering::SeqCst);
            if self.fail_first && n == 0 {
                return Err(LoadError::Validation("transient".to_string()));
            }
            Ok(sample_tables())
        }
    }

    #[test]
    fn valid_months() {
        assert!(is_valid_month("2025-01"));
        assert!(is_valid_month("1999-12"));
    }

    #[test]
    fn invalid_months() {
        assert!(!is_valid_month("2025-13"));
        assert!(!is_valid_month("2025-1"));
        assert!(!is_valid_month("2025/01"));
        assert!(!is_valid_month("Jan 2025"));
        assert!(!is_valid_month(""));
    }

    #[test]
    fn valid_and_invalid_quarters() {
        assert!(is_valid_quarter("2024 Q4"));
        assert!(is_valid_quarter("2025 Q1"));
        assert!(!is_valid_quarter("2025 Q5"));
        assert!(!is_valid_quarter("2025-Q1"));
        assert!(!is_valid_quarter("25 Q1"));
    }

    #[test]
    fn validate_rejects_bad_month() {
        let mut tables = sample_tables();
        tables.website[2].month = "March".to_string();
        let err = validate_tables(&tables).unwrap_err();
        assert!(
            matches!(err, LoadError::Validation(ref msg) if msg.contains("website") && msg.contains("March"))
        );
    }

    #[test]
    fn validate_rejects_sentiment_out_of_range() {
        let mut tables = sample_tables();
        tables.monitoring[0].sentiment_score = 1.5;
        let err = validate_tables(&tables).unwrap_err();
        assert!(matches!(err, LoadError::Validation(ref msg) if msg.contains("sentiment")));
    }

    #[test]
    fn validate_rejects_empty_event_name() {
        let mut tables = sample_tables();
        tables.events[0].event_name = "  ".to_string();
        assert!(validate_tables(&tables).is_err());
    }

    #[test]
    fn file_loader_missing_file_is_io_error() {
        let loader = FileLoader::new("/nonexistent/mktpulse/dataset.yaml");
        let err = loader.load().unwrap_err();
        assert!(
            matches!(err, LoadError::Io { ref path, .. } if path.contains("dataset.yaml"))
        );
    }

    #[test]
    fn file_loader_detects_json_extension() {
        assert!(FileLoader::new("data/export.JSON").is_json());
        assert!(!FileLoader::new("data/export.yaml").is_json());
        assert!(!FileLoader::new("data/export").is_json());
    }

    #[test]
    fn cached_loader_loads_once() {
        let cached = CachedLoader::new(CountingLoader {
            calls: AtomicUsize::new(0),
            fail_first: false,
        });
        let first = cached.load().unwrap();
        let second = cached.load().unwrap();
        assert_eq!(first, second);
        assert_eq!(cached.inner.calls.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn cached_loader_does_not_cache_failures() {
        let cached = CachedLoader::new(CountingLoader {
            calls: AtomicUsize::new(0),
            fail_first: true,
        });
        assert!(cached.load().is_err());
        assert!(cached.load().is_ok());
        assert!(cached.load().is_ok());
        assert_eq!(cached.inner.calls.load(Ordering::SeqCst), 2);
    }
}
