//! Request resolution entry point and the `DataGenerator` facade.

use crate::dataset::DatasetStore;
use crate::error::GeneratorError;
use crate::generators::{select_values, Selection};
use crate::providers::{CredentialsProvider, EmailProvider, NameProvider};
use crate::random::{RandomService, RandomSource};
use crate::request::Request;
use datagen_core::{Locale, LocaleHandle, LocaleRegistry};
use std::path::PathBuf;
use std::sync::Arc;

/// Resolve one request string to a fake value.
///
/// Parses the request, loads the locale's dataset, extracts one map per path
/// and selects a candidate from each. Failures are returned, never logged.
pub fn resolve<R: RandomSource + ?Sized>(
    store: &DatasetStore,
    locale: &Locale,
    request: &str,
    random: &mut R,
    selection: Selection,
) -> Result<String, GeneratorError> {
    let request = Request::parse(request)?;
    let maps = store.value_maps(locale, &request)?;
    select_values(&maps, random, selection)
}

/// Locale-aware fake data generator.
///
/// Owns the dataset store, the random source and a locale registry. Providers
/// borrow the generator mutably, so one instance serves one thread at a time.
pub struct DataGenerator<R: RandomSource = RandomService> {
    /// Dataset lookup under a root directory
    store: DatasetStore,
    /// Registered locale for every request
    locale: LocaleHandle,
    /// Random source shared by all providers
    random: R,
    /// Cache of locale handles
    registry: Arc<LocaleRegistry>,
}

impl DataGenerator<RandomService> {
    /// Create a generator with a seeded random service.
    pub fn seeded(dataset_root: impl Into<PathBuf>, locale: Locale, seed: u64) -> Self {
        Self::new(dataset_root, locale, RandomService::seeded(seed))
    }
}

impl<R: RandomSource> DataGenerator<R> {
    /// Create a generator with its own locale registry.
    pub fn new(dataset_root: impl Into<PathBuf>, locale: Locale, random: R) -> Self {
        let registry = Arc::new(LocaleRegistry::new());
        Self {
            store: DatasetStore::new(dataset_root),
            locale: registry.get(locale),
            random,
            registry,
        }
    }

    /// Use a shared registry, re-registering the current locale in it.
    pub fn with_registry(mut self, registry: Arc<LocaleRegistry>) -> Self {
        self.locale = registry.get(*self.locale);
        self.registry = registry;
        self
    }

    /// Switch to another locale.
    pub fn with_locale(mut self, locale: Locale) -> Self {
        self.locale = self.registry.get(locale);
        self
    }

    pub fn locale(&self) -> &LocaleHandle {
        &self.locale
    }

    pub fn registry(&self) -> &Arc<LocaleRegistry> {
        &self.registry
    }

    pub fn store(&self) -> &DatasetStore {
        &self.store
    }

    pub fn random(&mut self) -> &mut R {
        &mut self.random
    }

    /// Resolve a request string against the generator's locale.
    pub fn resolve(
        &mut self,
        request: &str,
        selection: Selection,
    ) -> Result<String, GeneratorError> {
        resolve(&self.store, &self.locale, request, &mut self.random, selection)
    }

    pub fn name(&mut self) -> NameProvider<'_, R> {
        NameProvider::new(self)
    }

    pub fn email(&mut self) -> EmailProvider<'_, R> {
        EmailProvider::new(self)
    }

    pub fn credentials(&mut self) -> CredentialsProvider<'_, R> {
        CredentialsProvider::new(self)
    }
}
