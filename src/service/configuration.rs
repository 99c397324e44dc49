// SPDX-License-Identifier: MIT OR Apache-2.0

//! The lock-guarded configuration owner.
//!
//! This module provides `Configuration`, which owns one `Store` behind a single
//! `RwLock` and exposes typed getters and setters plus JSON import and export.
//! Library code that prefers explicit ownership can create and pass around its
//! own `Configuration`; the process-wide accessors in [`crate::service::global`]
//! delegate to one shared instance.

use crate::adapters::JsonCodec;
use crate::domain::{ConfigError, ConfigKey, ConfigValue, Result, Store, ValueData};
use crate::ports::StoreCodec;
use serde_json::Value as JsonValue;
use std::sync::{PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};

/// A configuration store guarded by a single read-write lock.
///
/// Getters and encoding take the read lock; setters, decoding and resets take
/// the write lock. Every operation completes or fails immediately.
///
/// # Examples
///
/// ```rust
/// use propcfg::domain::ConfigKey;
/// use propcfg::service::Configuration;
///
/// # fn main() -> propcfg::domain::Result<()> {
/// let config = Configuration::new();
/// assert!(config.get_bool(ConfigKey::NormalizeGasConstants)?);
///
/// config.set_double(ConfigKey::SpinodalMinimumDelta, 0.4)?;
/// assert_eq!(config.get_double(ConfigKey::SpinodalMinimumDelta)?, 0.4);
///
/// // The type of a key is fixed once it has an entry
/// assert!(config.set_string(ConfigKey::SpinodalMinimumDelta, "0.4").is_err());
/// # Ok(())
/// # }
/// ```
#[derive(Debug)]
pub struct Configuration {
    store: RwLock<Store>,
    codec: JsonCodec,
}

impl Configuration {
    /// Creates a configuration seeded with every built-in default.
    pub fn new() -> Self {
        Self::from_store(Store::with_defaults())
    }

    /// Creates a configuration that owns the given store.
    pub fn from_store(store: Store) -> Self {
        Self {
            store: RwLock::new(store),
            codec: JsonCodec::new(),
        }
    }

    /// Sets the JSON codec used for import and export.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use propcfg::adapters::JsonCodec;
    /// use propcfg::service::Configuration;
    ///
    /// let config = Configuration::new().with_codec(JsonCodec::new().pretty(true));
    /// assert!(config.as_json_text().unwrap().contains('\n'));
    /// ```
    pub fn with_codec(mut self, codec: JsonCodec) -> Self {
        self.codec = codec;
        self
    }

    // Every mutation is a single insert or an all-or-nothing commit, so the
    // store behind a poisoned lock is still consistent.
    fn read(&self) -> RwLockReadGuard<'_, Store> {
        self.store.read().unwrap_or_else(PoisonError::into_inner)
    }

    fn write(&self) -> RwLockWriteGuard<'_, Store> {
        self.store.write().unwrap_or_else(PoisonError::into_inner)
    }

    /// Inserts a freshly typed value, refusing to change the type of an
    /// existing entry.
    fn set(&self, key: ConfigKey, data: ValueData) -> Result<()> {
        let mut store = self.write();
        if let Ok(existing) = store.get(key) {
            if existing.kind() != data.kind() {
                return Err(ConfigError::TypeMismatch {
                    key,
                    expected: data.kind(),
                    actual: existing.kind(),
                });
            }
        }
        tracing::debug!("Setting configuration '{}' to {}", key, data);
        store.insert(ConfigValue::new(key, data));
        Ok(())
    }

    /// Returns the boolean value of `key`.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::KeyNotFound`] if the key has no entry, or
    /// [`ConfigError::TypeMismatch`] if the entry is not a boolean.
    pub fn get_bool(&self, key: ConfigKey) -> Result<bool> {
        self.read().get(key)?.as_bool()
    }

    /// Returns the integer value of `key`.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::KeyNotFound`] or [`ConfigError::TypeMismatch`].
    pub fn get_integer(&self, key: ConfigKey) -> Result<i64> {
        self.read().get(key)?.as_integer()
    }

    /// Returns the floating-point value of `key`.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::KeyNotFound`] or [`ConfigError::TypeMismatch`].
    pub fn get_double(&self, key: ConfigKey) -> Result<f64> {
        self.read().get(key)?.as_double()
    }

    /// Returns a copy of the string value of `key`.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::KeyNotFound`] or [`ConfigError::TypeMismatch`].
    pub fn get_string(&self, key: ConfigKey) -> Result<String> {
        self.read().get(key)?.as_string().map(str::to_string)
    }

    /// Sets a boolean value.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::TypeMismatch`] if `key` already holds a value of
    /// another type; the store is left unchanged.
    pub fn set_bool(&self, key: ConfigKey, value: bool) -> Result<()> {
        self.set(key, ValueData::Bool(value))
    }

    /// Sets an integer value.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::TypeMismatch`] if `key` already holds a value of
    /// another type.
    pub fn set_integer(&self, key: ConfigKey, value: i64) -> Result<()> {
        self.set(key, ValueData::Integer(value))
    }

    /// Sets a floating-point value.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::TypeMismatch`] if `key` already holds a value of
    /// another type.
    pub fn set_double(&self, key: ConfigKey, value: f64) -> Result<()> {
        self.set(key, ValueData::Double(value))
    }

    /// Sets a string value.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::TypeMismatch`] if `key` already holds a value of
    /// another type.
    pub fn set_string(&self, key: ConfigKey, value: impl Into<String>) -> Result<()> {
        self.set(key, ValueData::String(value.into()))
    }

    /// Encodes the whole store as a JSON document.
    pub fn as_json(&self) -> Result<JsonValue> {
        self.codec.encode(&self.read())
    }

    /// Encodes the whole store as JSON text.
    pub fn as_json_text(&self) -> Result<String> {
        self.codec.to_text(&self.read())
    }

    /// Updates existing entries from a JSON document.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::UnknownKey`], [`ConfigError::KeyNotFound`] or
    /// [`ConfigError::ValidationError`]; no entry is changed on error.
    pub fn load_json(&self, document: &JsonValue) -> Result<()> {
        self.codec.decode(&mut self.write(), document)
    }

    /// Parses JSON text and updates existing entries from it.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::ParseError`] for malformed text, or any error of
    /// [`Configuration::load_json`]; no entry is changed on error.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use propcfg::domain::{ConfigError, ConfigKey};
    /// use propcfg::service::Configuration;
    ///
    /// let config = Configuration::new();
    /// config.load_json_text(r#"{"SAVE_RAW_TABLES": true}"#).unwrap();
    /// assert!(config.get_bool(ConfigKey::SaveRawTables).unwrap());
    ///
    /// let err = config.load_json_text("{not json").unwrap_err();
    /// assert!(matches!(err, ConfigError::ParseError { .. }));
    /// ```
    pub fn load_json_text(&self, text: &str) -> Result<()> {
        self.codec.from_text(&mut self.write(), text)
    }

    /// Restores every built-in default, discarding all changes.
    pub fn reset(&self) {
        *self.write() = Store::with_defaults();
        tracing::debug!("Configuration reset to defaults");
    }

    /// Returns a copy of the current store.
    pub fn snapshot(&self) -> Store {
        self.read().clone()
    }
}

impl Default for Configuration {
    fn default() -> Self {
        Self::new()
    }
}
