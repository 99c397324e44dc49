// SPDX-License-Identifier: MIT OR Apache-2.0

//! The in-memory configuration store.
//!
//! A `Store` maps each `ConfigKey` to at most one `ConfigValue`. Entries are kept
//! in key declaration order so that enumeration and serialization are stable.

use crate::domain::config_key::ConfigKey;
use crate::domain::config_value::ConfigValue;
use crate::domain::errors::{ConfigError, Result};
use std::collections::BTreeMap;

/// A mapping from configuration key to configuration value.
///
/// # Examples
///
/// ```
/// use propcfg::domain::{ConfigKey, ConfigValue, Store};
///
/// let mut store = Store::with_defaults();
/// assert!(store.get(ConfigKey::CriticalSplinesEnabled).unwrap().as_bool().unwrap());
///
/// store.insert(ConfigValue::bool(ConfigKey::CriticalSplinesEnabled, false));
/// assert!(!store.get(ConfigKey::CriticalSplinesEnabled).unwrap().as_bool().unwrap());
/// ```
#[derive(Clone, Debug, PartialEq)]
pub struct Store {
    entries: BTreeMap<ConfigKey, ConfigValue>,
}

impl Store {
    /// Creates an empty store.
    ///
    /// Library code expects every registry key to be present, so this is only
    /// useful for explicitly managed stores; see [`Store::with_defaults`].
    pub fn new() -> Self {
        Self {
            entries: BTreeMap::new(),
        }
    }

    /// Creates a store seeded with the built-in default of every key.
    ///
    /// # Examples
    ///
    /// ```
    /// use propcfg::domain::{ConfigKey, Store};
    ///
    /// let store = Store::with_defaults();
    /// assert_eq!(store.len(), ConfigKey::ALL.len());
    /// ```
    pub fn with_defaults() -> Self {
        let mut store = Self::new();
        for key in ConfigKey::ALL {
            store.insert(ConfigValue::new(key, key.default_value()));
        }
        store
    }

    /// Inserts a value, replacing any existing entry for the same key.
    ///
    /// The replacement is unconditional, including a change of type. Returns the
    /// previous entry, if there was one.
    pub fn insert(&mut self, value: ConfigValue) -> Option<ConfigValue> {
        tracing::debug!(
            "Inserting configuration '{}' ({}) = {}",
            value.key(),
            value.kind(),
            value
        );
        self.entries.insert(value.key(), value)
    }

    /// Returns the entry for `key`.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::KeyNotFound`] if the key has no entry. Nothing is
    /// created on a miss.
    pub fn get(&self, key: ConfigKey) -> Result<&ConfigValue> {
        self.entries
            .get(&key)
            .ok_or(ConfigError::KeyNotFound { key })
    }

    /// Returns a mutable reference to the entry for `key`.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::KeyNotFound`] if the key has no entry.
    pub fn get_mut(&mut self, key: ConfigKey) -> Result<&mut ConfigValue> {
        self.entries
            .get_mut(&key)
            .ok_or(ConfigError::KeyNotFound { key })
    }

    /// Returns `true` if the store has an entry for `key`.
    pub fn contains(&self, key: ConfigKey) -> bool {
        self.entries.contains_key(&key)
    }

    /// Iterates over every entry in key declaration order.
    pub fn all(&self) -> impl Iterator<Item = (&ConfigKey, &ConfigValue)> {
        self.entries.iter()
    }

    /// Iterates mutably over every entry in key declaration order.
    pub fn all_mut(&mut self) -> impl Iterator<Item = (&ConfigKey, &mut ConfigValue)> {
        self.entries.iter_mut()
    }

    /// Returns the number of entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns `true` if the store has no entries.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl Default for Store {
    /// Same as [`Store::with_defaults`].
    fn default() -> Self {
        Self::with_defaults()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::config_value::ValueKind;

    #[test]
    fn test_new_store_is_empty() {
        let store = Store::new();
        assert!(store.is_empty());
        assert_eq!(store.len(), 0);
    }

    #[test]
    fn test_with_defaults_has_every_key() {
        let store = Store::with_defaults();
        for key in ConfigKey::ALL {
            let value = store.get(key).unwrap();
            assert_eq!(value.key(), key);
            assert_eq!(value.data(), &key.default_value());
        }
    }

    #[test]
    fn test_documented_defaults() {
        let store = Store::with_defaults();
        assert!(store
            .get(ConfigKey::CriticalSplinesEnabled)
            .unwrap()
            .as_bool()
            .unwrap());
        assert!(store
            .get(ConfigKey::NormalizeGasConstants)
            .unwrap()
            .as_bool()
            .unwrap());
    }

    #[test]
    fn test_default_trait_matches_with_defaults() {
        assert_eq!(Store::default(), Store::with_defaults());
    }

    #[test]
    fn test_get_missing_key() {
        let store = Store::new();
        let result = store.get(ConfigKey::SaveRawTables);
        assert!(matches!(
            result,
            Err(ConfigError::KeyNotFound {
                key: ConfigKey::SaveRawTables
            })
        ));
        // A miss must not create an entry
        assert!(!store.contains(ConfigKey::SaveRawTables));
    }

    #[test]
    fn test_insert_replaces() {
        let mut store = Store::new();
        assert!(store
            .insert(ConfigValue::bool(ConfigKey::SaveRawTables, false))
            .is_none());
        let previous = store
            .insert(ConfigValue::bool(ConfigKey::SaveRawTables, true))
            .unwrap();
        assert!(!previous.as_bool().unwrap());
        assert_eq!(store.len(), 1);
        assert!(store.get(ConfigKey::SaveRawTables).unwrap().as_bool().unwrap());
    }

    #[test]
    fn test_insert_may_change_type() {
        let mut store = Store::with_defaults();
        store.insert(ConfigValue::double(ConfigKey::SaveRawTables, 2.0));
        assert_eq!(
            store.get(ConfigKey::SaveRawTables).unwrap().kind(),
            ValueKind::Double
        );
    }

    #[test]
    fn test_idempotent_reinsert() {
        let mut once = Store::with_defaults();
        once.insert(ConfigValue::string(ConfigKey::FloatPunctuation, ","));

        let mut twice = Store::with_defaults();
        twice.insert(ConfigValue::string(ConfigKey::FloatPunctuation, ","));
        twice.insert(ConfigValue::string(ConfigKey::FloatPunctuation, ","));

        assert_eq!(once, twice);
    }

    #[test]
    fn test_get_mut() {
        let mut store = Store::with_defaults();
        store
            .get_mut(ConfigKey::SpinodalMinimumDelta)
            .unwrap()
            .decode_from(&serde_json::json!(0.75))
            .unwrap();
        assert_eq!(
            store
                .get(ConfigKey::SpinodalMinimumDelta)
                .unwrap()
                .as_double()
                .unwrap(),
            0.75
        );
        assert!(Store::new().get_mut(ConfigKey::SpinodalMinimumDelta).is_err());
    }

    #[test]
    fn test_all_is_in_declaration_order() {
        let store = Store::with_defaults();
        let keys: Vec<ConfigKey> = store.all().map(|(k, _)| *k).collect();
        assert_eq!(keys, ConfigKey::ALL.to_vec());
    }

    #[test]
    fn test_all_mut() {
        let mut store = Store::with_defaults();
        for (_, value) in store.all_mut() {
            if value.kind() == ValueKind::Bool {
                value.decode_from(&serde_json::json!(false)).unwrap();
            }
        }
        assert!(!store
            .get(ConfigKey::NormalizeGasConstants)
            .unwrap()
            .as_bool()
            .unwrap());
    }
}
