//! ParameterEnvelope - Param と FieldMap の相互変換
//!
//! # ライフサイクル
//! 1. テーブル作成時: `ParameterEnvelope::new(value)`
//! 2. 転送時: `serialize()` で FieldMap に詰める
//! 3. 受信側: `ParameterEnvelope::default()` で空を作り、`deserialize()` で埋める

use std::fmt;

use super::field_map::FieldMap;
use super::param::Param;
use crate::error::EnvelopeError;

/// Wraps exactly one `Param` so it can travel as a `FieldMap`.
#[derive(Debug, Clone, PartialEq)]
pub struct ParameterEnvelope<T: Param> {
    value: Option<T>,
}

impl<T: Param> ParameterEnvelope<T> {
    pub fn new(value: T) -> Self {
        Self { value: Some(value) }
    }

    /// Rebuild an envelope from a field map.
    pub fn from_fields(fields: &FieldMap) -> Result<Self, EnvelopeError> {
        let mut envelope = Self::default();
        envelope.deserialize(fields)?;
        Ok(envelope)
    }

    pub fn value(&self) -> Result<&T, EnvelopeError> {
        self.value.as_ref().ok_or(EnvelopeError::Empty(T::FIELD))
    }

    pub fn into_inner(self) -> Result<T, EnvelopeError> {
        self.value.ok_or(EnvelopeError::Empty(T::FIELD))
    }

    pub fn is_empty(&self) -> bool {
        self.value.is_none()
    }

    /// Write the value into `fields` under `T::FIELD`.
    pub fn serialize_into(&self, fields: &mut FieldMap) -> Result<(), EnvelopeError> {
        fields.add_value(T::FIELD, self.value()?)
    }

    pub fn serialize(&self) -> Result<FieldMap, EnvelopeError> {
        let mut fields = FieldMap::new();
        self.serialize_into(&mut fields)?;
        Ok(fields)
    }

    /// Replace the held value with the one stored under `T::FIELD`.
    ///
    /// On error the envelope is left unchanged.
    pub fn deserialize(&mut self, fields: &FieldMap) -> Result<(), EnvelopeError> {
        self.value = Some(fields.get_value(T::FIELD)?);
        Ok(())
    }
}

impl<T: Param> Default for ParameterEnvelope<T> {
    fn default() -> Self {
        Self { value: None }
    }
}

impl<T: Param> fmt::Display for ParameterEnvelope<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.value {
            Some(value) => f.write_str(&value.label()),
            None => write!(f, "{} = <empty>", T::FIELD),
        }
    }
}

/// Pack a value into a single-entry field map.
pub fn pack<T: Param>(value: &T) -> Result<FieldMap, EnvelopeError> {
    let mut fields = FieldMap::new();
    fields.add_value(T::FIELD, value)?;
    Ok(fields)
}

/// Reconstruct a value packed with [`pack`].
pub fn unpack<T: Param>(fields: &FieldMap) -> Result<T, EnvelopeError> {
    fields.get_value(T::FIELD)
}
