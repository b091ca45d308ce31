//! datagen library
//!
//! Command-line options and configuration for the `datagen` binary. The
//! generation engine itself lives in `datagen-generator`; locale types live in
//! `datagen-core`.
//!
//! # CLI Usage
//!
//! ```bash
//! # Full name for the default locale (us_en)
//! datagen full-name
//!
//! # Five reproducible Ukrainian first names
//! datagen --country ua --seed 42 --count 5 first-name
//!
//! # Email built from a person's name
//! datagen email --person-name --separator . --domain @example.com
//!
//! # Password with every character class
//! datagen password --length 16 --uppercase --digits --special
//!
//! # Raw request
//! datagen resolve "name(/generator/first_name|/generator/last_name)" --correlated
//! ```

use clap::Args;
use datagen_core::{Country, Language};
use std::path::PathBuf;

pub mod config;

pub use config::{ConfigError, DatagenConfig};

/// Options shared by every subcommand.
#[derive(Args, Clone, Debug, Default)]
pub struct GeneratorOpts {
    /// Path to a YAML config file
    #[arg(long, env = "DATAGEN_CONFIG")]
    pub config: Option<PathBuf>,

    /// Root directory of the locale datasets
    #[arg(long, env = "DATAGEN_DATASET_ROOT")]
    pub dataset_root: Option<PathBuf>,

    /// Country code (us, ua, ca)
    #[arg(long, env = "DATAGEN_COUNTRY")]
    pub country: Option<Country>,

    /// Language code (en, ukr, fr)
    #[arg(long, env = "DATAGEN_LANGUAGE")]
    pub language: Option<Language>,

    /// Random seed for deterministic generation (same seed = same data)
    #[arg(long, env = "DATAGEN_SEED")]
    pub seed: Option<u64>,
}
