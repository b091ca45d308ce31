//! Core types for the datagen fake-data generator.
//!
//! This crate provides the locale model shared by the generator and the CLI:
//!
//! - [`Country`] / [`Language`] - Supported ISO codes
//! - [`Locale`] - Immutable (country, language) pair selecting a dataset variant
//! - [`LocaleRegistry`] - Cache handing out one shared handle per locale value
//!
//! # Architecture
//!
//! ```text
//! datagen-core (this crate)
//!    │
//!    ├─── datagen-generator  (resolves requests against locale datasets)
//!    │
//!    └─── datagen            (CLI, configuration)
//! ```
//!
//! # Example
//!
//! ```rust
//! use datagen_core::{Country, Locale, LocaleRegistry};
//!
//! let registry = LocaleRegistry::new();
//! let locale = Locale::infer_from_country(Country::Ukraine).unwrap();
//!
//! let a = registry.get(locale);
//! let b = registry.get(locale);
//! assert!(std::sync::Arc::ptr_eq(&a, &b));
//! ```

pub mod locale;
pub mod registry;

// Re-exports for convenience
pub use locale::{Country, Language, Locale, LocaleError};
pub use registry::{LocaleHandle, LocaleRegistry};
