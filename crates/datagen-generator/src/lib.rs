//! Locale-aware fake-data generator.
//!
//! This crate resolves compact request strings against JSON datasets chosen
//! by locale, and synthesizes random strings for passwords and email parts.
//! All randomness goes through a [`RandomSource`], so a seeded
//! [`RandomService`] reproduces the same values across runs.
//!
//! # Architecture
//!
//! ```text
//! "name(/generator/first_name|/generator/last_name)"
//!        │
//!        ▼
//!   Request::parse ──► DatasetStore::locate ──► Dataset::load / extract
//!                       <root>/en/name/us_name.json        │
//!                                                          ▼
//!                                             select_values (Independent | Correlated)
//!                                                          │
//!                                                          ▼
//!                                                    "Mary Johnson"
//! ```
//!
//! # Example
//!
//! ```no_run
//! use datagen_core::{Country, Locale};
//! use datagen_generator::{CharClasses, DataGenerator};
//!
//! let locale = Locale::infer_from_country(Country::Usa).unwrap();
//! let mut generator = DataGenerator::seeded("datasets", locale, 42);
//!
//! let full_name = generator.name().full_name().unwrap();
//! let email = generator.email().email_with_person_name(Some("."), None).unwrap();
//! let password = generator.credentials().password(12, CharClasses::ALL);
//! println!("{full_name} <{email}> {password}");
//! ```
//!
//! # Dataset layout
//!
//! `<root>/<language>/<context>/<country>_<context>.json`, where each request
//! path points at an object of `attribute -> [candidates...]`.

pub mod dataset;
pub mod error;
pub mod generator;
pub mod generators;
pub mod providers;
pub mod random;
pub mod request;

// Re-exports for convenience
pub use dataset::{Dataset, DatasetStore, ValueMap, DEFAULT_DATASET_ROOT};
pub use error::GeneratorError;
pub use generator::{resolve, DataGenerator};
pub use generators::{select_values, synthesize, CharClasses, Selection};
pub use providers::{CredentialsProvider, EmailProvider, NameProvider};
pub use random::{RandomService, RandomSource};
pub use request::Request;
