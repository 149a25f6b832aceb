//! FieldMap - named values carried by a data-driven test case.

use std::collections::BTreeMap;

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

use crate::error::EnvelopeError;

/// Ordered `{name: value}` map.
///
/// Values are stored as JSON so any serde type can travel through it; the map
/// itself serializes as a plain JSON object.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FieldMap {
    fields: BTreeMap<String, serde_json::Value>,
}

impl FieldMap {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store `value` under `name`, replacing any previous value.
    pub fn add_value<T: Serialize>(&mut self, name: &str, value: &T) -> Result<(), EnvelopeError> {
        let encoded = serde_json::to_value(value).map_err(|source| EnvelopeError::Encode {
            field: name.to_string(),
            source,
        })?;
        self.fields.insert(name.to_string(), encoded);
        Ok(())
    }

    /// Read the value under `name` back as `T`.
    pub fn get_value<T: DeserializeOwned>(&self, name: &str) -> Result<T, EnvelopeError> {
        let raw = self
            .fields
            .get(name)
            .ok_or_else(|| EnvelopeError::MissingField(name.to_string()))?;
        serde_json::from_value(raw.clone()).map_err(|source| EnvelopeError::TypeMismatch {
            field: name.to_string(),
            source,
        })
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.fields.keys().map(String::as_str)
    }
}
