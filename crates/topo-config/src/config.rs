//! Hierarchical configuration tree
//!
//! [`Config`] wraps a JSON object tree and provides dotted-path access
//! (`"topology.factory.topologyNames"`). The tree is immutable; clones share
//! it.

use std::collections::BTreeMap;
use std::sync::Arc;

use serde_json::{Map, Value as JsonValue};

use crate::error::{ConfigError, ConfigResult};

/// Path separator for nested keys
pub const PATH_SEPARATOR: char = '.';

/// Read-only configuration tree
#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    root: Arc<JsonValue>,
}

impl Config {
    /// Create an empty configuration
    #[inline]
    #[must_use]
    pub fn empty() -> Self {
        Self {
            root: Arc::new(JsonValue::Object(Map::new())),
        }
    }

    /// Create from a JSON value
    ///
    /// Keys containing `.` are expanded into nested objects, so
    /// `{"a.b": 1}` and `{"a": {"b": 1}}` describe the same tree. A `null`
    /// document is treated as empty.
    ///
    /// # Errors
    /// Returns [`ConfigError::WrongType`] if the root is not an object
    pub fn from_value(value: JsonValue) -> ConfigResult<Self> {
        match value {
            JsonValue::Null => Ok(Self::empty()),
            JsonValue::Object(map) => Ok(Self {
                root: Arc::new(JsonValue::Object(expand_object(map))),
            }),
            _ => Err(ConfigError::wrong_type("", "object")),
        }
    }

    /// Create from flat `key = value` pairs with dotted keys
    ///
    /// Later pairs win over earlier ones for the same key.
    pub fn from_pairs<I, K, V>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: Into<String>,
    {
        let mut root = Map::new();
        for (key, value) in pairs {
            insert_dotted(&mut root, key.as_ref(), JsonValue::String(value.into()));
        }
        Self {
            root: Arc::new(JsonValue::Object(root)),
        }
    }

    /// Check if the tree has no entries
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.root.as_object().map_or(true, Map::is_empty)
    }

    /// Check if a dotted path exists
    ///
    /// A path holding `null` is reported as absent.
    #[inline]
    #[must_use]
    pub fn has_path(&self, path: &str) -> bool {
        self.lookup(path).is_some()
    }

    /// Read a scalar as a string
    ///
    /// Numbers and booleans are rendered in their textual form. JSON numbers
    /// keep their source text (`1.10` stays `1.10`). YAML and TOML parse
    /// floats before they reach the tree, so values such as versions that
    /// must keep trailing zeros have to be quoted there.
    ///
    /// # Errors
    /// [`ConfigError::Missing`] if absent, [`ConfigError::WrongType`] for
    /// objects and arrays
    pub fn get_string(&self, path: &str) -> ConfigResult<String> {
        let value = self.lookup(path).ok_or_else(|| ConfigError::missing(path))?;
        scalar_to_string(value).ok_or_else(|| ConfigError::wrong_type(path, "string"))
    }

    /// Read a scalar as a string, falling back to `default` when absent
    ///
    /// # Errors
    /// [`ConfigError::WrongType`] if the path holds an object or array
    pub fn get_string_or(&self, path: &str, default: &str) -> ConfigResult<String> {
        match self.get_string(path) {
            Err(ConfigError::Missing { .. }) => Ok(default.to_string()),
            other => other,
        }
    }

    /// Read an unsigned integer
    ///
    /// Accepts JSON numbers and numeric strings.
    ///
    /// # Errors
    /// [`ConfigError::Missing`] if absent, [`ConfigError::WrongType`] otherwise
    pub fn get_u64(&self, path: &str) -> ConfigResult<u64> {
        let value = self.lookup(path).ok_or_else(|| ConfigError::missing(path))?;
        match value {
            JsonValue::Number(n) => n.as_u64(),
            JsonValue::String(s) => s.trim().parse().ok(),
            _ => None,
        }
        .ok_or_else(|| ConfigError::wrong_type(path, "unsigned integer"))
    }

    /// Read a list of scalars
    ///
    /// A string value is split on `,` into trimmed tokens with empty tokens
    /// dropped. Duplicates are kept.
    ///
    /// # Errors
    /// [`ConfigError::Missing`] if absent, [`ConfigError::WrongType`] for
    /// objects or lists holding non-scalars
    pub fn get_string_list(&self, path: &str) -> ConfigResult<Vec<String>> {
        let value = self.lookup(path).ok_or_else(|| ConfigError::missing(path))?;
        match value {
            JsonValue::Array(items) => items
                .iter()
                .map(|item| {
                    scalar_to_string(item).ok_or_else(|| ConfigError::wrong_type(path, "list of scalars"))
                })
                .collect(),
            JsonValue::String(s) => Ok(split_list(s)),
            _ => Err(ConfigError::wrong_type(path, "list of scalars")),
        }
    }

    /// Get the subtree at `path`
    ///
    /// # Errors
    /// [`ConfigError::Missing`] if absent, [`ConfigError::WrongType`] if the
    /// value is not an object
    pub fn get_config(&self, path: &str) -> ConfigResult<Config> {
        match self.lookup(path) {
            None => Err(ConfigError::missing(path)),
            Some(JsonValue::Object(map)) => Ok(Self {
                root: Arc::new(JsonValue::Object(map.clone())),
            }),
            Some(_) => Err(ConfigError::wrong_type(path, "object")),
        }
    }

    /// Flatten into dotted `key -> value` pairs
    ///
    /// Lists are joined with `,`; `null` leaves are skipped.
    #[must_use]
    pub fn to_properties(&self) -> BTreeMap<String, String> {
        let mut out = BTreeMap::new();
        flatten_into(&self.root, String::new(), &mut out);
        out
    }

    fn lookup(&self, path: &str) -> Option<&JsonValue> {
        let mut current = self.root.as_ref();
        if path.is_empty() {
            return Some(current);
        }
        for segment in path.split(PATH_SEPARATOR) {
            current = current.as_object()?.get(segment)?;
        }
        if current.is_null() {
            None
        } else {
            Some(current)
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::empty()
    }
}

impl serde::Serialize for Config {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serde::Serialize::serialize(self.root.as_ref(), serializer)
    }
}

impl<'de> serde::Deserialize<'de> for Config {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let value = <JsonValue as serde::Deserialize>::deserialize(deserializer)?;
        Self::from_value(value).map_err(serde::de::Error::custom)
    }
}

impl TryFrom<JsonValue> for Config {
    type Error = ConfigError;

    fn try_from(value: JsonValue) -> Result<Self, Self::Error> {
        Self::from_value(value)
    }
}

/// Split a comma separated list into trimmed, non-empty tokens
#[must_use]
pub fn split_list(value: &str) -> Vec<String> {
    value
        .split(',')
        .map(str::trim)
        .filter(|token| !token.is_empty())
        .map(str::to_string)
        .collect()
}

fn scalar_to_string(value: &JsonValue) -> Option<String> {
    match value {
        JsonValue::String(s) => Some(s.clone()),
        JsonValue::Number(n) => Some(n.to_string()),
        JsonValue::Bool(b) => Some(b.to_string()),
        _ => None,
    }
}

/// Expand dotted keys of an object into nested objects, recursively
fn expand_object(map: Map<String, JsonValue>) -> Map<String, JsonValue> {
    let mut out = Map::new();
    for (key, value) in map {
        let value = match value {
            JsonValue::Object(inner) => JsonValue::Object(expand_object(inner)),
            other => other,
        };
        insert_dotted(&mut out, &key, value);
    }
    out
}

fn insert_dotted(map: &mut Map<String, JsonValue>, key: &str, value: JsonValue) {
    match key.split_once(PATH_SEPARATOR) {
        None => {
            let merged = match map.get(key) {
                Some(existing) => merge_json(existing, &value),
                None => value,
            };
            map.insert(key.to_string(), merged);
        }
        Some((head, rest)) => {
            let entry = map
                .entry(head.to_string())
                .or_insert_with(|| JsonValue::Object(Map::new()));
            if !entry.is_object() {
                *entry = JsonValue::Object(Map::new());
            }
            if let JsonValue::Object(child) = entry {
                insert_dotted(child, rest, value);
            }
        }
    }
}

/// Deep merge for objects, `b` wins everywhere else
fn merge_json(a: &JsonValue, b: &JsonValue) -> JsonValue {
    match (a, b) {
        (JsonValue::Object(a_map), JsonValue::Object(b_map)) => {
            let mut result = a_map.clone();
            for (key, b_val) in b_map {
                let merged = match result.get(key) {
                    Some(a_val) => merge_json(a_val, b_val),
                    None => b_val.clone(),
                };
                result.insert(key.clone(), merged);
            }
            JsonValue::Object(result)
        }
        (_, b_val) => b_val.clone(),
    }
}

fn flatten_into(value: &JsonValue, prefix: String, out: &mut BTreeMap<String, String>) {
    match value {
        JsonValue::Object(map) => {
            for (key, child) in map {
                let path = if prefix.is_empty() {
                    key.clone()
                } else {
                    format!("{prefix}{PATH_SEPARATOR}{key}")
                };
                flatten_into(child, path, out);
            }
        }
        JsonValue::Array(items) => {
            let joined: Vec<String> = items.iter().filter_map(scalar_to_string).collect();
            out.insert(prefix, joined.join(","));
        }
        JsonValue::Null => {}
        scalar => {
            if let Some(s) = scalar_to_string(scalar) {
                out.insert(prefix, s);
            }
        }
    }
}
