//! Generator configuration.
//!
//! Settings come from an optional YAML file and are overridden by command-line
//! flags (or their environment variables):
//!
//! ```yaml
//! dataset_root: ./datasets
//! country: ua
//! language: en
//! seed: 42
//! ```

use crate::GeneratorOpts;
use datagen_core::{Country, Language, Locale, LocaleError};
use datagen_generator::{DataGenerator, RandomService, DEFAULT_DATASET_ROOT};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Error type for configuration loading.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// Error reading config file
    #[error("Failed to read config file: {0}")]
    IoError(#[from] std::io::Error),

    /// Error parsing YAML
    #[error("Failed to parse YAML: {0}")]
    YamlError(#[from] serde_yaml::Error),

    /// Country/language combination is not usable
    #[error("Invalid locale: {0}")]
    Locale(#[from] LocaleError),
}

/// Generator settings. Unset fields fall back to defaults at build time.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DatagenConfig {
    /// Root directory of the locale datasets
    #[serde(default)]
    pub dataset_root: Option<PathBuf>,

    /// Country code (e.g. `us`)
    #[serde(default)]
    pub country: Option<Country>,

    /// Language code (e.g. `en`)
    #[serde(default)]
    pub language: Option<Language>,

    /// Seed for reproducible output; entropy when absent
    #[serde(default)]
    pub seed: Option<u64>,
}

impl DatagenConfig {
    /// Load config from a YAML file.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let content = fs::read_to_string(path)?;
        Self::from_yaml(&content)
    }

    /// Parse config from a YAML string.
    pub fn from_yaml(yaml: &str) -> Result<Self, ConfigError> {
        Ok(serde_yaml::from_str(yaml)?)
    }

    /// Build the effective config: file (if any), then command-line overrides.
    pub fn load(opts: &GeneratorOpts) -> Result<Self, ConfigError> {
        let base = match &opts.config {
            Some(path) => Self::from_file(path)?,
            None => Self::default(),
        };
        Ok(base.with_overrides(opts))
    }

    /// Replace fields that are set in `opts`.
    pub fn with_overrides(self, opts: &GeneratorOpts) -> Self {
        Self {
            dataset_root: opts.dataset_root.clone().or(self.dataset_root),
            country: opts.country.or(self.country),
            language: opts.language.or(self.language),
            seed: opts.seed.or(self.seed),
        }
    }

    /// Dataset root, defaulting to `datasets`.
    pub fn dataset_root(&self) -> PathBuf {
        self.dataset_root
            .clone()
            .unwrap_or_else(|| PathBuf::from(DEFAULT_DATASET_ROOT))
    }

    /// Locale from the configured parts, inferring a missing half.
    pub fn locale(&self) -> Result<Locale, LocaleError> {
        Locale::resolve(self.country, self.language)
    }

    /// Build a generator for these settings.
    pub fn build_generator(&self) -> Result<DataGenerator, ConfigError> {
        let random = match self.seed {
            Some(seed) => RandomService::seeded(seed),
            None => RandomService::new(),
        };
        let locale = self.locale()?;
        tracing::debug!(
            "Building generator for locale {} with datasets at {}",
            locale,
            self.dataset_root().display()
        );
        Ok(DataGenerator::new(self.dataset_root(), locale, random))
    }
}
