//! The message catalog: a nested JSON document of message templates.

use std::{fs, path::Path};

use serde_json::Value;
use tracing::{debug, info};

use crate::{
    error::CatalogError,
    interpolate::{FieldSource, interpolate},
    key::{LookupKey, ROOT_NAMESPACE},
};

const BUNDLED_CATALOG: &str = include_str!("../resources/en_US.json");
const BUNDLED_ORIGIN: &str = "bundled en_US.json";
const FALLBACK_KEY: &str = "fallback";

/// Immutable message tree. Build it once and share it, typically through
/// [`crate::Messages`].
#[derive(Clone, Debug)]
pub struct Catalog {
    root: Value,
    fallback: String,
}

impl Catalog {
    /// The catalog compiled into the binary.
    pub fn bundled() -> Result<Self, CatalogError> {
        Self::parse(BUNDLED_CATALOG, BUNDLED_ORIGIN)
    }

    /// Read a catalog from a JSON file.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, CatalogError> {
        let path = path.as_ref();
        let raw = fs::read_to_string(path)
            .map_err(|source| CatalogError::Read { path: path.to_path_buf(), source })?;
        Self::parse(&raw, &path.display().to_string())
    }

    pub fn from_json_str(raw: &str) -> Result<Self, CatalogError> {
        Self::parse(raw, "<inline>")
    }

    fn parse(raw: &str, origin: &str) -> Result<Self, CatalogError> {
        let root: Value = serde_json::from_str(raw)
            .map_err(|source| CatalogError::Parse { origin: origin.to_string(), source })?;
        Self::from_value(root, origin)
    }

    fn from_value(root: Value, origin: &str) -> Result<Self, CatalogError> {
        if !root.is_object() {
            return Err(CatalogError::NotAnObject { origin: origin.to_string() });
        }

        let namespaced = root.get(ROOT_NAMESPACE).and_then(|ns| ns.get(FALLBACK_KEY));
        let fallback = namespaced
            .and_then(Value::as_str)
            .or_else(|| root.get(FALLBACK_KEY).and_then(Value::as_str))
            .ok_or_else(|| CatalogError::MissingFallback {
                origin: origin.to_string(),
                key: format!("{ROOT_NAMESPACE}.{FALLBACK_KEY}"),
            })?
            .to_string();

        Ok(Self { root, fallback })
    }

    /// The message used whenever a key has no string value.
    pub fn fallback(&self) -> &str {
        &self.fallback
    }

    /// String stored at `key`, if any.
    pub fn message(&self, key: &LookupKey) -> Option<&str> {
        match self.lookup(key) {
            Some(Value::String(message)) => {
                debug!("Message for key [{key}] : [{message}]");
                Some(message.as_str())
            }
            other => {
                info!("Message for key [{key}] : [{}]", describe(other));
                debug!("Message is not configured for key [{key}]");
                None
            }
        }
    }

    /// Message stored at `key`, or the fallback when the key is absent or
    /// does not hold a string.
    pub fn resolve(&self, key: &LookupKey) -> &str {
        self.message(key).unwrap_or(self.fallback.as_str())
    }

    /// Resolve `key` and fill its placeholders from `source`. The fallback is
    /// returned verbatim.
    pub fn render<S>(&self, key: &LookupKey, source: &S) -> String
    where
        S: FieldSource + ?Sized,
    {
        match self.message(key) {
            Some(template) => interpolate(template, source),
            None => self.fallback.clone(),
        }
    }

    /// Whether `key` reaches any value, string or not.
    pub fn exists(&self, key: &LookupKey) -> bool {
        let found = self.lookup(key).is_some();
        debug!("Key [{key}] exists: {found}");
        found
    }

    fn lookup(&self, key: &LookupKey) -> Option<&Value> {
        key.segments().try_fold(&self.root, |node, segment| match node {
            Value::Object(map) => map.get(segment),
            Value::Array(items) => segment.parse::<usize>().ok().and_then(|idx| items.get(idx)),
            _ => None,
        })
    }
}

fn describe(value: Option<&Value>) -> String {
    match value {
        None => String::new(),
        Some(value) => value.to_string(),
    }
}
