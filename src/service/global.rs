// SPDX-License-Identifier: MIT OR Apache-2.0

//! Process-wide configuration accessors.
//!
//! These functions operate on one shared [`Configuration`], created with the
//! built-in defaults the first time any of them is called and kept for the life
//! of the process. Access is serialized by the configuration's lock, so the
//! functions may be called from any thread.
//!
//! # Examples
//!
//! ```rust
//! use propcfg::domain::ConfigKey;
//! use propcfg::service::global;
//!
//! # fn main() -> propcfg::domain::Result<()> {
//! global::set_bool(ConfigKey::DontCheckPropertyLimits, true)?;
//! assert!(global::get_bool(ConfigKey::DontCheckPropertyLimits)?);
//! # Ok(())
//! # }
//! ```

use crate::domain::{ConfigKey, Result};
use crate::service::Configuration;
use once_cell::sync::Lazy;
use serde_json::Value as JsonValue;

static CONFIGURATION: Lazy<Configuration> = Lazy::new(|| {
    tracing::debug!("Initializing process-wide configuration with defaults");
    Configuration::new()
});

/// Returns the shared configuration instance.
pub fn global() -> &'static Configuration {
    &CONFIGURATION
}

/// Returns the boolean value of `key` from the shared configuration.
pub fn get_bool(key: ConfigKey) -> Result<bool> {
    global().get_bool(key)
}

/// Returns the integer value of `key` from the shared configuration.
pub fn get_integer(key: ConfigKey) -> Result<i64> {
    global().get_integer(key)
}

/// Returns the floating-point value of `key` from the shared configuration.
pub fn get_double(key: ConfigKey) -> Result<f64> {
    global().get_double(key)
}

/// Returns the string value of `key` from the shared configuration.
pub fn get_string(key: ConfigKey) -> Result<String> {
    global().get_string(key)
}

/// Sets a boolean value in the shared configuration.
pub fn set_bool(key: ConfigKey, value: bool) -> Result<()> {
    global().set_bool(key, value)
}

/// Sets an integer value in the shared configuration.
pub fn set_integer(key: ConfigKey, value: i64) -> Result<()> {
    global().set_integer(key, value)
}

/// Sets a floating-point value in the shared configuration.
pub fn set_double(key: ConfigKey, value: f64) -> Result<()> {
    global().set_double(key, value)
}

/// Sets a string value in the shared configuration.
pub fn set_string(key: ConfigKey, value: impl Into<String>) -> Result<()> {
    global().set_string(key, value)
}

/// Encodes the shared configuration as a JSON document.
pub fn as_json() -> Result<JsonValue> {
    global().as_json()
}

/// Encodes the shared configuration as JSON text.
pub fn as_json_text() -> Result<String> {
    global().as_json_text()
}

/// Updates the shared configuration from a JSON document.
pub fn load_json(document: &JsonValue) -> Result<()> {
    global().load_json(document)
}

/// Updates the shared configuration from JSON text.
pub fn load_json_text(text: &str) -> Result<()> {
    global().load_json_text(text)
}

/// Restores every built-in default in the shared configuration.
pub fn reset() {
    global().reset()
}
