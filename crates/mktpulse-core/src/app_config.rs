use std::path::PathBuf;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Environment {
    Development,
    Test,
    Production,
}

impl std::fmt::Display for Environment {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Environment::Development => write!(f, "development"),
            Environment::Test => write!(f, "test"),
            Environment::Production => write!(f, "production"),
        }
    }
}

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub env: Environment,
    /// Fallback tracing filter directive, used when `RUST_LOG` is unset.
    pub log_level: String,
    /// Dataset file for [`crate::FileLoader`]. `None` selects the built-in sample.
    pub dataset_path: Option<PathBuf>,
    /// Fail on the first unparseable currency/percentage field instead of
    /// defaulting it to `0.0`.
    pub strict_parsing: bool,
}
