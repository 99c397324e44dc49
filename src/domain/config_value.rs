// SPDX-License-Identifier: MIT OR Apache-2.0

//! Configuration value type with type-safe access.
//!
//! This module provides `ConfigValue`, a tagged variant holding exactly one typed
//! datum for one key. The type tag is fixed when the value is constructed; reading
//! or decoding through any other type fails instead of converting.

use crate::domain::config_key::ConfigKey;
use crate::domain::errors::{ConfigError, Result};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Number, Value as JsonValue};
use std::fmt;

/// The type tag of a configuration value.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ValueKind {
    /// A boolean flag.
    Bool,
    /// A signed 64-bit integer.
    Integer,
    /// A double-precision floating-point number.
    Double,
    /// A UTF-8 string.
    String,
}

impl ValueKind {
    /// Returns the short lowercase name of the kind.
    pub fn as_str(&self) -> &'static str {
        match self {
            ValueKind::Bool => "bool",
            ValueKind::Integer => "integer",
            ValueKind::Double => "double",
            ValueKind::String => "string",
        }
    }

    /// Returns the JSON value kind this type is written as.
    ///
    /// # Examples
    ///
    /// ```
    /// use propcfg::domain::config_value::ValueKind;
    ///
    /// assert_eq!(ValueKind::Bool.json_kind(), "boolean");
    /// assert_eq!(ValueKind::Double.json_kind(), "floating-point number");
    /// ```
    pub fn json_kind(&self) -> &'static str {
        match self {
            ValueKind::Bool => "boolean",
            ValueKind::Integer => "integral number",
            ValueKind::Double => "floating-point number",
            ValueKind::String => "string",
        }
    }
}

impl fmt::Display for ValueKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// The payload of a configuration value.
#[derive(Clone, Debug, PartialEq)]
pub enum ValueData {
    /// A boolean payload.
    Bool(bool),
    /// An integer payload.
    Integer(i64),
    /// A floating-point payload.
    Double(f64),
    /// A string payload.
    String(String),
}

impl ValueData {
    /// Returns the type tag matching this payload.
    pub fn kind(&self) -> ValueKind {
        match self {
            ValueData::Bool(_) => ValueKind::Bool,
            ValueData::Integer(_) => ValueKind::Integer,
            ValueData::Double(_) => ValueKind::Double,
            ValueData::String(_) => ValueKind::String,
        }
    }
}

impl From<bool> for ValueData {
    fn from(v: bool) -> Self {
        ValueData::Bool(v)
    }
}

impl From<i64> for ValueData {
    fn from(v: i64) -> Self {
        ValueData::Integer(v)
    }
}

impl From<i32> for ValueData {
    fn from(v: i32) -> Self {
        ValueData::Integer(i64::from(v))
    }
}

impl From<f64> for ValueData {
    fn from(v: f64) -> Self {
        ValueData::Double(v)
    }
}

impl From<String> for ValueData {
    fn from(v: String) -> Self {
        ValueData::String(v)
    }
}

impl From<&str> for ValueData {
    fn from(v: &str) -> Self {
        ValueData::String(v.to_string())
    }
}

impl fmt::Display for ValueData {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ValueData::Bool(v) => write!(f, "{}", v),
            ValueData::Integer(v) => write!(f, "{}", v),
            ValueData::Double(v) => write!(f, "{}", v),
            ValueData::String(v) => write!(f, "{}", v),
        }
    }
}

/// One configuration entry: a key and a typed payload.
///
/// # Examples
///
/// ```
/// use propcfg::domain::{ConfigKey, ConfigValue, ValueKind};
///
/// let value = ConfigValue::bool(ConfigKey::CriticalSplinesEnabled, false);
/// assert_eq!(value.kind(), ValueKind::Bool);
/// assert_eq!(value.as_bool().unwrap(), false);
/// assert!(value.as_double().is_err());
/// ```
#[derive(Clone, Debug, PartialEq)]
pub struct ConfigValue {
    key: ConfigKey,
    data: ValueData,
}

impl ConfigValue {
    /// Creates a value for `key` from any supported payload.
    ///
    /// # Examples
    ///
    /// ```
    /// use propcfg::domain::{ConfigKey, ConfigValue, ValueKind};
    ///
    /// let value = ConfigValue::new(ConfigKey::RUniversalCodata, 8.314462618);
    /// assert_eq!(value.kind(), ValueKind::Double);
    /// ```
    pub fn new(key: ConfigKey, data: impl Into<ValueData>) -> Self {
        Self {
            key,
            data: data.into(),
        }
    }

    /// Creates a boolean value.
    pub fn bool(key: ConfigKey, value: bool) -> Self {
        Self::new(key, ValueData::Bool(value))
    }

    /// Creates an integer value.
    pub fn integer(key: ConfigKey, value: i64) -> Self {
        Self::new(key, ValueData::Integer(value))
    }

    /// Creates a floating-point value.
    pub fn double(key: ConfigKey, value: f64) -> Self {
        Self::new(key, ValueData::Double(value))
    }

    /// Creates a string value.
    pub fn string(key: ConfigKey, value: impl Into<String>) -> Self {
        Self::new(key, ValueData::String(value.into()))
    }

    /// Returns the key this value belongs to.
    pub fn key(&self) -> ConfigKey {
        self.key
    }

    /// Returns the type tag of this value.
    pub fn kind(&self) -> ValueKind {
        self.data.kind()
    }

    /// Returns the raw payload.
    pub fn data(&self) -> &ValueData {
        &self.data
    }

    fn mismatch(&self, expected: ValueKind) -> ConfigError {
        ConfigError::TypeMismatch {
            key: self.key,
            expected,
            actual: self.kind(),
        }
    }

    /// Returns the payload as a boolean.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::TypeMismatch`] if the value is not a boolean.
    pub fn as_bool(&self) -> Result<bool> {
        match self.data {
            ValueData::Bool(v) => Ok(v),
            _ => Err(self.mismatch(ValueKind::Bool)),
        }
    }

    /// Returns the payload as an integer.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::TypeMismatch`] if the value is not an integer.
    pub fn as_integer(&self) -> Result<i64> {
        match self.data {
            ValueData::Integer(v) => Ok(v),
            _ => Err(self.mismatch(ValueKind::Integer)),
        }
    }

    /// Returns the payload as a double.
    ///
    /// Integers are not widened; the stored type must be `double`.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::TypeMismatch`] if the value is not a double.
    pub fn as_double(&self) -> Result<f64> {
        match self.data {
            ValueData::Double(v) => Ok(v),
            _ => Err(self.mismatch(ValueKind::Double)),
        }
    }

    /// Returns the payload as a string slice.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::TypeMismatch`] if the value is not a string.
    pub fn as_string(&self) -> Result<&str> {
        match &self.data {
            ValueData::String(v) => Ok(v),
            _ => Err(self.mismatch(ValueKind::String)),
        }
    }

    /// Converts the payload to a JSON value of the matching kind.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidState`] for a NaN or infinite double, which
    /// JSON cannot represent.
    pub fn to_json(&self) -> Result<JsonValue> {
        match &self.data {
            ValueData::Bool(v) => Ok(JsonValue::Bool(*v)),
            ValueData::Integer(v) => Ok(JsonValue::Number(Number::from(*v))),
            ValueData::Double(v) => Number::from_f64(*v).map(JsonValue::Number).ok_or_else(|| {
                ConfigError::InvalidState {
                    key: self.key,
                    message: format!("double {} has no JSON representation", v),
                }
            }),
            ValueData::String(v) => Ok(JsonValue::String(v.clone())),
        }
    }

    /// Adds this value to a JSON object under its canonical key name.
    ///
    /// An existing member with the same name is replaced.
    ///
    /// # Examples
    ///
    /// ```
    /// use propcfg::domain::{ConfigKey, ConfigValue};
    /// use serde_json::{json, Map};
    ///
    /// let mut object = Map::new();
    /// ConfigValue::bool(ConfigKey::NormalizeGasConstants, true)
    ///     .encode_into(&mut object)
    ///     .unwrap();
    /// assert_eq!(object["NORMALIZE_GAS_CONSTANTS"], json!(true));
    /// ```
    pub fn encode_into(&self, object: &mut Map<String, JsonValue>) -> Result<()> {
        let json = self.to_json()?;
        tracing::trace!("Encoding '{}' = {}", self.key, json);
        object.insert(self.key.as_str().to_string(), json);
        Ok(())
    }

    /// Replaces the payload from a JSON value of the matching kind.
    ///
    /// The key and type are never changed. Booleans require a JSON boolean,
    /// integers an integral JSON number that fits in `i64`, doubles a JSON number
    /// written in floating-point form (`1.0`, `2e3`), and strings a JSON string.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::ValidationError`] if the JSON kind does not match;
    /// the payload is left untouched in that case.
    ///
    /// # Examples
    ///
    /// ```
    /// use propcfg::domain::{ConfigKey, ConfigValue};
    /// use serde_json::json;
    ///
    /// let mut value = ConfigValue::double(ConfigKey::SpinodalMinimumDelta, 0.5);
    /// value.decode_from(&json!(0.25)).unwrap();
    /// assert_eq!(value.as_double().unwrap(), 0.25);
    /// assert!(value.decode_from(&json!("0.25")).is_err());
    /// ```
    pub fn decode_from(&mut self, json: &JsonValue) -> Result<()> {
        let decoded = match (&self.data, json) {
            (ValueData::Bool(_), JsonValue::Bool(v)) => Some(ValueData::Bool(*v)),
            (ValueData::Integer(_), JsonValue::Number(n)) => n.as_i64().map(ValueData::Integer),
            (ValueData::Double(_), JsonValue::Number(n)) if n.is_f64() => {
                n.as_f64().map(ValueData::Double)
            }
            (ValueData::String(_), JsonValue::String(v)) => Some(ValueData::String(v.clone())),
            _ => None,
        };

        match decoded {
            Some(data) => {
                self.data = data;
                Ok(())
            }
            None => Err(ConfigError::ValidationError {
                key: self.key,
                expected: self.kind(),
            }),
        }
    }
}

impl fmt::Display for ConfigValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.data)
    }
}
