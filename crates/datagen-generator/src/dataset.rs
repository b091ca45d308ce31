//! Dataset location and extraction.
//!
//! Datasets are JSON files laid out by locale under a root directory:
//!
//! ```text
//! <root>/<language>/<context>/<country>_<context>.json
//! ```
//!
//! Each request path is a JSON pointer to an object whose members are lists
//! of candidate strings. Member order is kept as written in the file.

use crate::error::GeneratorError;
use crate::request::Request;
use datagen_core::Locale;
use indexmap::IndexMap;
use serde::de::{Error as _, MapAccess, SeqAccess, Visitor};
use serde::{Deserialize, Deserializer};
use serde_json::{Map, Number, Value};
use std::fmt;
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use tracing::debug;

/// Default dataset root, relative to the working directory.
pub const DEFAULT_DATASET_ROOT: &str = "datasets";

/// Candidate lists keyed by attribute name, in document order.
pub type ValueMap = IndexMap<String, Vec<String>>;

/// Locates and opens locale datasets under a root directory.
#[derive(Debug, Clone)]
pub struct DatasetStore {
    root: PathBuf,
}

impl Default for DatasetStore {
    fn default() -> Self {
        Self::new(DEFAULT_DATASET_ROOT)
    }
}

impl DatasetStore {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Path of the dataset file serving `request` for `locale`.
    ///
    /// Pure path computation; existence is checked when the file is loaded.
    pub fn locate(&self, locale: &Locale, request: &Request) -> PathBuf {
        self.root.join(locale.dataset_file(&request.context))
    }

    /// Load the dataset serving `request` for `locale`.
    pub fn open(&self, locale: &Locale, request: &Request) -> Result<Dataset, GeneratorError> {
        Dataset::load(self.locate(locale, request))
    }

    /// Load the dataset and extract one map per request path.
    pub fn value_maps(
        &self,
        locale: &Locale,
        request: &Request,
    ) -> Result<Vec<ValueMap>, GeneratorError> {
        self.open(locale, request)?.extract_all(&request.paths)
    }
}

/// A loaded dataset document.
#[derive(Debug, Clone)]
pub struct Dataset {
    path: PathBuf,
    root: Value,
}

impl Dataset {
    /// Read and parse a dataset file.
    pub fn load(path: impl Into<PathBuf>) -> Result<Self, GeneratorError> {
        let path = path.into();

        let content = fs::read_to_string(&path).map_err(|source| match source.kind() {
            ErrorKind::NotFound => GeneratorError::DatasetNotFound { path: path.clone() },
            _ => GeneratorError::Io {
                path: path.clone(),
                source,
            },
        })?;

        let root = parse_document(&content).map_err(|e| GeneratorError::Io {
            path: path.clone(),
            source: e.into(),
        })?;

        debug!("Loaded dataset: {}", path.display());

        Ok(Self { path, root })
    }

    /// Build a dataset from an in-memory document.
    pub fn from_value(path: impl Into<PathBuf>, root: Value) -> Self {
        Self {
            path: path.into(),
            root,
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Extract the candidate map addressed by `pointer`.
    ///
    /// Members next to the addressed node are ignored. The node itself must
    /// be a non-empty object whose members are non-empty string lists.
    pub fn extract(&self, pointer: &str) -> Result<ValueMap, GeneratorError> {
        let node = self
            .root
            .pointer(pointer)
            .filter(|node| !node.is_null())
            .ok_or_else(|| GeneratorError::MissingAttribute {
                pointer: pointer.to_string(),
            })?;

        let map = ValueMap::deserialize(node)
            .map_err(|e| GeneratorError::mismatch(pointer, e.to_string()))?;

        if map.is_empty() {
            return Err(GeneratorError::mismatch(pointer, "no attributes"));
        }
        if let Some((key, _)) = map.iter().find(|(_, candidates)| candidates.is_empty()) {
            return Err(GeneratorError::mismatch(
                pointer,
                format!("attribute '{key}' has no candidates"),
            ));
        }

        Ok(map)
    }

    /// Extract one map per pointer, in order. The first failure aborts.
    pub fn extract_all<S: AsRef<str>>(
        &self,
        pointers: &[S],
    ) -> Result<Vec<ValueMap>, GeneratorError> {
        pointers.iter().map(|p| self.extract(p.as_ref())).collect()
    }
}

/// Parse a dataset document, rejecting objects that repeat a key.
fn parse_document(content: &str) -> serde_json::Result<Value> {
    let mut deserializer = serde_json::Deserializer::from_str(content);
    let UniqueKeys(value) = UniqueKeys::deserialize(&mut deserializer)?;
    deserializer.end()?;
    Ok(value)
}

/// JSON value whose objects carry each key at most once.
struct UniqueKeys(Value);

impl<'de> Deserialize<'de> for UniqueKeys {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        deserializer.deserialize_any(UniqueKeysVisitor).map(UniqueKeys)
    }
}

struct UniqueKeysVisitor;

impl<'de> Visitor<'de> for UniqueKeysVisitor {
    type Value = Value;

    fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
        formatter.write_str("a JSON value")
    }

    fn visit_bool<E>(self, value: bool) -> Result<Value, E> {
        Ok(Value::Bool(value))
    }

    fn visit_i64<E>(self, value: i64) -> Result<Value, E> {
        Ok(Value::from(value))
    }

    fn visit_u64<E>(self, value: u64) -> Result<Value, E> {
        Ok(Value::from(value))
    }

    fn visit_f64<E>(self, value: f64) -> Result<Value, E> {
        Ok(Number::from_f64(value).map_or(Value::Null, Value::Number))
    }

    fn visit_str<E>(self, value: &str) -> Result<Value, E> {
        Ok(Value::String(value.to_string()))
    }

    fn visit_string<E>(self, value: String) -> Result<Value, E> {
        Ok(Value::String(value))
    }

    fn visit_unit<E>(self) -> Result<Value, E> {
        Ok(Value::Null)
    }

    fn visit_seq<A>(self, mut seq: A) -> Result<Value, A::Error>
    where
        A: SeqAccess<'de>,
    {
        let mut items = Vec::new();
        while let Some(UniqueKeys(item)) = seq.next_element()? {
            items.push(item);
        }
        Ok(Value::Array(items))
    }

    fn visit_map<A>(self, mut map: A) -> Result<Value, A::Error>
    where
        A: MapAccess<'de>,
    {
        let mut object = Map::new();
        while let Some(key) = map.next_key::<String>()? {
            let UniqueKeys(value) = map.next_value()?;
            if object.contains_key(&key) {
                return Err(A::Error::custom(format!("duplicate key '{key}'")));
            }
            object.insert(key, value);
        }
        Ok(Value::Object(object))
    }
}
