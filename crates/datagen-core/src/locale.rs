//! Locale definitions for data generation.
//!
//! A [`Locale`] pairs a [`Country`] with a [`Language`] and selects which
//! dataset variant the generator reads from. (e.g. `us` + `en` gives US names
//! written in English, `us` + `ukr` gives US names transliterated to Ukrainian.)

use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::PathBuf;
use std::str::FromStr;

// ============================================================================
// Error Types
// ============================================================================

/// Error type for locale construction.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum LocaleError {
    /// No native pairing is registered for the given country or language.
    #[error("{kind} '{code}' has no native {missing} pairing registered")]
    UndefinedPairing {
        kind: &'static str,
        code: &'static str,
        missing: &'static str,
    },

    /// One or more required constructor arguments were absent.
    #[error("Missing locale arguments: {}", .0.join(", "))]
    MissingArguments(Vec<&'static str>),

    /// Country code not in the supported set.
    #[error("Unknown country code: {0}")]
    UnknownCountry(String),

    /// Language code not in the supported set.
    #[error("Unknown language code: {0}")]
    UnknownLanguage(String),
}

// ============================================================================
// Country / Language
// ============================================================================

/// Countries supported by the generator, identified by ISO 3166 codes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Country {
    #[serde(rename = "us")]
    Usa,
    #[serde(rename = "ua")]
    Ukraine,
    #[serde(rename = "ca")]
    Canada,
}

impl Country {
    /// All supported countries.
    pub const ALL: [Country; 3] = [Country::Usa, Country::Ukraine, Country::Canada];

    /// ISO 3166 country code.
    pub fn code(self) -> &'static str {
        match self {
            Country::Usa => "us",
            Country::Ukraine => "ua",
            Country::Canada => "ca",
        }
    }

    /// Native language of the country, if one is registered.
    ///
    /// Canada is deliberately unpaired since it has two official languages.
    pub fn native_language(self) -> Option<Language> {
        match self {
            Country::Usa => Some(Language::English),
            Country::Ukraine => Some(Language::Ukrainian),
            Country::Canada => None,
        }
    }
}

impl fmt::Display for Country {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

impl FromStr for Country {
    type Err = LocaleError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let code = s.trim().to_lowercase();
        Country::ALL
            .into_iter()
            .find(|c| c.code() == code)
            .ok_or_else(|| LocaleError::UnknownCountry(s.to_string()))
    }
}

/// Languages supported by the generator, identified by ISO 639 codes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Language {
    #[serde(rename = "en")]
    English,
    #[serde(rename = "ukr")]
    Ukrainian,
    #[serde(rename = "fr")]
    French,
}

impl Language {
    /// All supported languages.
    pub const ALL: [Language; 3] = [Language::English, Language::Ukrainian, Language::French];

    /// ISO 639 language code.
    pub fn code(self) -> &'static str {
        match self {
            Language::English => "en",
            Language::Ukrainian => "ukr",
            Language::French => "fr",
        }
    }

    /// Native country of the language, if one is registered.
    pub fn native_country(self) -> Option<Country> {
        match self {
            Language::English => Some(Country::Usa),
            Language::Ukrainian => Some(Country::Ukraine),
            Language::French => None,
        }
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

impl FromStr for Language {
    type Err = LocaleError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let code = s.trim().to_lowercase();
        Language::ALL
            .into_iter()
            .find(|l| l.code() == code)
            .ok_or_else(|| LocaleError::UnknownLanguage(s.to_string()))
    }
}

// ============================================================================
// Locale
// ============================================================================

/// Immutable (country, language) pair.
///
/// Equality and hashing follow the pair of codes, so a `Locale` is safe to
/// use as a cache key. Changing either half means building a new value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Locale {
    country: Country,
    language: Language,
}

impl Default for Locale {
    fn default() -> Self {
        Self {
            country: Country::Usa,
            language: Language::English,
        }
    }
}

impl Locale {
    /// Create a locale from an explicit pair.
    pub fn new(country: Country, language: Language) -> Self {
        Self { country, language }
    }

    /// Create a locale for `country` using its native language.
    pub fn infer_from_country(country: Country) -> Result<Self, LocaleError> {
        let language = country
            .native_language()
            .ok_or(LocaleError::UndefinedPairing {
                kind: "Country",
                code: country.code(),
                missing: "language",
            })?;
        Ok(Self::new(country, language))
    }

    /// Create a locale for `language` using its native country.
    pub fn infer_from_language(language: Language) -> Result<Self, LocaleError> {
        let country = language
            .native_country()
            .ok_or(LocaleError::UndefinedPairing {
                kind: "Language",
                code: language.code(),
                missing: "country",
            })?;
        Ok(Self::new(country, language))
    }

    /// Create a locale from optional parts, requiring both.
    ///
    /// The error lists every absent argument.
    pub fn try_from_parts(
        country: Option<Country>,
        language: Option<Language>,
    ) -> Result<Self, LocaleError> {
        match (country, language) {
            (Some(country), Some(language)) => Ok(Self::new(country, language)),
            (country, language) => {
                let mut missing = Vec::new();
                if country.is_none() {
                    missing.push("country");
                }
                if language.is_none() {
                    missing.push("language");
                }
                Err(LocaleError::MissingArguments(missing))
            }
        }
    }

    /// Build a locale from whatever parts are known.
    ///
    /// Both parts give an explicit pair, a single part is completed through
    /// the native pairing table, and no parts give the default locale.
    pub fn resolve(
        country: Option<Country>,
        language: Option<Language>,
    ) -> Result<Self, LocaleError> {
        match (country, language) {
            (Some(country), Some(language)) => Ok(Self::new(country, language)),
            (Some(country), None) => Self::infer_from_country(country),
            (None, Some(language)) => Self::infer_from_language(language),
            (None, None) => Ok(Self::default()),
        }
    }

    pub fn country(&self) -> Country {
        self.country
    }

    pub fn language(&self) -> Language {
        self.language
    }

    pub fn country_code(&self) -> &'static str {
        self.country.code()
    }

    pub fn language_code(&self) -> &'static str {
        self.language.code()
    }

    /// Relative path of the dataset file for `context` under a dataset root.
    ///
    /// Layout: `<language>/<context>/<country>_<context>.json`.
    pub fn dataset_file(&self, context: &str) -> PathBuf {
        let mut path = PathBuf::from(self.language_code());
        path.push(context);
        path.push(format!("{}_{context}.json", self.country_code()));
        path
    }
}

impl fmt::Display for Locale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}_{}", self.country_code(), self.language_code())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::hash_map::DefaultHasher;
    use std::hash::{Hash, Hasher};

    fn hash_of(locale: &Locale) -> u64 {
        let mut hasher = DefaultHasher::new();
        locale.hash(&mut hasher);
        hasher.finish()
    }

    #[test]
    fn test_default_locale() {
        let locale = Locale::default();
        assert_eq!(locale.country(), Country::Usa);
        assert_eq!(locale.language(), Language::English);
        assert_eq!(locale.to_string(), "us_en");
    }

    #[test]
    fn test_infer_from_country() {
        let locale = Locale::infer_from_country(Country::Usa).unwrap();
        assert_eq!(locale.language(), Language::English);

        let locale = Locale::infer_from_country(Country::Ukraine).unwrap();
        assert_eq!(locale.language(), Language::Ukrainian);
    }

    #[test]
    fn test_infer_from_language() {
        let locale = Locale::infer_from_language(Language::Ukrainian).unwrap();
        assert_eq!(locale.country(), Country::Ukraine);
    }

    #[test]
    fn test_infer_undefined_pairing() {
        let err = Locale::infer_from_country(Country::Canada).unwrap_err();
        assert!(matches!(
            err,
            LocaleError::UndefinedPairing { code: "ca", .. }
        ));

        let err = Locale::infer_from_language(Language::French).unwrap_err();
        assert!(matches!(
            err,
            LocaleError::UndefinedPairing { code: "fr", .. }
        ));
    }

    #[test]
    fn test_missing_arguments_are_enumerated() {
        let err = Locale::try_from_parts(None, None).unwrap_err();
        assert_eq!(err, LocaleError::MissingArguments(vec!["country", "language"]));
        assert_eq!(err.to_string(), "Missing locale arguments: country, language");

        let err = Locale::try_from_parts(Some(Country::Usa), None).unwrap_err();
        assert_eq!(err, LocaleError::MissingArguments(vec!["language"]));

        let locale = Locale::try_from_parts(Some(Country::Usa), Some(Language::Ukrainian)).unwrap();
        assert_eq!(locale.to_string(), "us_ukr");
    }

    #[test]
    fn test_resolve_partial() {
        assert_eq!(Locale::resolve(None, None).unwrap(), Locale::default());
        assert_eq!(
            Locale::resolve(Some(Country::Ukraine), None).unwrap(),
            Locale::new(Country::Ukraine, Language::Ukrainian)
        );
        assert_eq!(
            Locale::resolve(None, Some(Language::English)).unwrap(),
            Locale::new(Country::Usa, Language::English)
        );
        assert!(Locale::resolve(Some(Country::Canada), None).is_err());
        assert_eq!(
            Locale::resolve(Some(Country::Canada), Some(Language::French)).unwrap(),
            Locale::new(Country::Canada, Language::French)
        );
    }

    #[test]
    fn test_equality_and_hash_by_codes() {
        let a = Locale::new(Country::Usa, Language::Ukrainian);
        let b = Locale::try_from_parts(Some(Country::Usa), Some(Language::Ukrainian)).unwrap();
        let c = Locale::new(Country::Usa, Language::English);

        assert_eq!(a, b);
        assert_eq!(hash_of(&a), hash_of(&b));
        assert_ne!(a, c);
    }

    #[test]
    fn test_dataset_file() {
        let locale = Locale::new(Country::Usa, Language::Ukrainian);
        let expected: PathBuf = ["ukr", "name", "us_name.json"].iter().collect();
        assert_eq!(locale.dataset_file("name"), expected);
    }

    #[test]
    fn test_codes_parse() {
        assert_eq!("US".parse::<Country>().unwrap(), Country::Usa);
        assert_eq!(" ua ".parse::<Country>().unwrap(), Country::Ukraine);
        assert_eq!("ukr".parse::<Language>().unwrap(), Language::Ukrainian);
        assert!(matches!(
            "xx".parse::<Country>(),
            Err(LocaleError::UnknownCountry(_))
        ));
        assert!(matches!(
            "de".parse::<Language>(),
            Err(LocaleError::UnknownLanguage(_))
        ));
    }

    #[test]
    fn test_locale_serde() {
        let locale = Locale::new(Country::Ukraine, Language::English);
        let yaml = serde_yaml::to_string(&locale).unwrap();
        assert!(yaml.contains("country: ua"));
        assert!(yaml.contains("language: en"));

        let parsed: Locale = serde_yaml::from_str(&yaml).unwrap();
        assert_eq!(parsed, locale);
    }
}
