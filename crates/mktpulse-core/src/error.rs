use serde::Serialize;
use thiserror::Error;

/// A currency or percentage field whose text could not be read as a number.
///
/// `field` names the location, e.g. `"social[2].spend"`; `raw_value` is the
/// original text as it appeared in the source table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Error)]
#[error("could not parse {field} value \"{raw_value}\" as a number")]
pub struct ParseError {
    pub field: String,
    pub raw_value: String,
}

impl ParseError {
    pub(crate) fn new(field: impl Into<String>, raw_value: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            raw_value: raw_value.into(),
        }
    }
}

#[derive(Debug, Error)]
pub enum LoadError {
    #[error("failed to read dataset file {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse dataset YAML: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("failed to parse dataset JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("dataset validation error: {0}")]
    Validation(String),
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid value for {var}: {reason}")]
    InvalidEnvVar { var: String, reason: String },
}

#[derive(Debug, Error)]
pub enum CoreError {
    #[error("unknown platform: {0}")]
    UnknownPlatform(String),

    #[error("unknown brand metric: {0}")]
    UnknownMetric(String),
}
