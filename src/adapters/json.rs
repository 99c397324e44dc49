// SPDX-License-Identifier: MIT OR Apache-2.0

//! JSON codec adapter.
//!
//! This module provides an adapter that translates a `Store` to and from a flat
//! JSON object whose member names are the canonical key names.

use crate::domain::{ConfigError, ConfigKey, ConfigValue, Result, Store};
use crate::ports::StoreCodec;
use serde_json::{Map, Value as JsonValue};

/// JSON implementation of [`StoreCodec`].
///
/// Members are emitted in name order (the ordering of `serde_json::Map`), so the
/// output for a given store is the same on every run.
///
/// # Examples
///
/// ```rust
/// use propcfg::adapters::JsonCodec;
/// use propcfg::domain::{ConfigKey, Store};
/// use propcfg::ports::StoreCodec;
///
/// let codec = JsonCodec::new();
/// let mut store = Store::with_defaults();
///
/// codec
///     .from_text(&mut store, r#"{"CRITICAL_SPLINES_ENABLED": false}"#)
///     .unwrap();
/// assert!(!store.get(ConfigKey::CriticalSplinesEnabled).unwrap().as_bool().unwrap());
///
/// let document = codec.encode(&store).unwrap();
/// assert_eq!(document["CRITICAL_SPLINES_ENABLED"], false);
/// ```
#[derive(Debug, Clone, Default)]
pub struct JsonCodec {
    /// Whether `to_text` produces indented output
    pretty: bool,
}

impl JsonCodec {
    /// Creates a codec that writes compact JSON text.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets whether `to_text` indents its output.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use propcfg::adapters::JsonCodec;
    /// use propcfg::domain::Store;
    /// use propcfg::ports::StoreCodec;
    ///
    /// let text = JsonCodec::new().pretty(true).to_text(&Store::with_defaults()).unwrap();
    /// assert!(text.contains('\n'));
    /// ```
    pub fn pretty(mut self, pretty: bool) -> Self {
        self.pretty = pretty;
        self
    }

    /// Resolves and decodes every member into staged copies of the store entries.
    ///
    /// Nothing in the store is modified here; the caller commits the staged
    /// values only if every member succeeded.
    fn stage(store: &Store, object: &Map<String, JsonValue>) -> Result<Vec<ConfigValue>> {
        let mut staged = Vec::with_capacity(object.len());
        for (name, json) in object {
            let key = ConfigKey::from_name(name)?;
            let mut value = store.get(key)?.clone();
            value.decode_from(json)?;
            staged.push(value);
        }
        Ok(staged)
    }
}

impl StoreCodec for JsonCodec {
    type Document = JsonValue;

    fn format_name(&self) -> &str {
        "json"
    }

    fn encode(&self, store: &Store) -> Result<JsonValue> {
        let mut object = Map::new();
        for (_, value) in store.all() {
            value.encode_into(&mut object)?;
        }
        Ok(JsonValue::Object(object))
    }

    fn decode(&self, store: &mut Store, document: &JsonValue) -> Result<()> {
        let object = document.as_object().ok_or_else(|| ConfigError::ParseError {
            message: "Expected a JSON object at the top level".to_string(),
            source: None,
        })?;

        let staged = match Self::stage(store, object) {
            Ok(staged) => staged,
            Err(e) => {
                tracing::warn!("Rejected {} configuration document: {}", self.format_name(), e);
                return Err(e);
            }
        };

        let count = staged.len();
        for value in staged {
            store.insert(value);
        }
        tracing::debug!(
            "Applied {} entries from {} configuration document",
            count,
            self.format_name()
        );
        Ok(())
    }

    fn to_text(&self, store: &Store) -> Result<String> {
        let document = self.encode(store)?;
        let text = if self.pretty {
            serde_json::to_string_pretty(&document)
        } else {
            serde_json::to_string(&document)
        };
        text.map_err(ConfigError::from_json_error)
    }

    fn from_text(&self, store: &mut Store, text: &str) -> Result<()> {
        let document: JsonValue =
            serde_json::from_str(text).map_err(ConfigError::from_json_error)?;
        self.decode(store, &document)
    }
}
