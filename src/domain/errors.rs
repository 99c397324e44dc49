// SPDX-License-Identifier: MIT OR Apache-2.0

//! Error types for the configuration store.
//!
//! Every fallible operation in this crate returns [`ConfigError`] through the
//! [`Result`] alias. Nothing is coerced or silently defaulted: a failed lookup,
//! a mismatched type or a malformed document always surfaces as an error value.

use crate::domain::config_key::ConfigKey;
use crate::domain::config_value::ValueKind;
use thiserror::Error;

/// The main error type for configuration operations.
///
/// It is marked as `#[non_exhaustive]` to allow for future additions without
/// breaking backwards compatibility.
///
/// # Examples
///
/// ```
/// use propcfg::domain::errors::ConfigError;
/// use propcfg::domain::ConfigKey;
///
/// let error = ConfigError::KeyNotFound {
///     key: ConfigKey::CriticalSplinesEnabled,
/// };
/// assert_eq!(
///     error.to_string(),
///     "Configuration key not found: CRITICAL_SPLINES_ENABLED"
/// );
/// ```
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum ConfigError {
    /// The requested key has no entry in the store.
    #[error("Configuration key not found: {key}")]
    KeyNotFound {
        /// The key that was not found
        key: ConfigKey,
    },

    /// A value was accessed or overwritten through the wrong type.
    #[error("Type mismatch for configuration key '{key}': requested {expected}, stored {actual}")]
    TypeMismatch {
        /// The key being accessed
        key: ConfigKey,
        /// The type the caller asked for
        expected: ValueKind,
        /// The type actually held by the entry
        actual: ValueKind,
    },

    /// A JSON value did not match the type of the entry it was decoded into.
    #[error("Invalid JSON value for configuration key '{key}': expected {expected} value")]
    ValidationError {
        /// The key being decoded
        key: ConfigKey,
        /// The type of the target entry
        expected: ValueKind,
    },

    /// A JSON member name does not correspond to any known key.
    #[error("Unknown configuration key: {name}")]
    UnknownKey {
        /// The member name as it appeared in the document
        name: String,
    },

    /// Failed to parse configuration text.
    #[error("Failed to parse configuration: {message}")]
    ParseError {
        /// The error message
        message: String,
        /// The underlying parsing error
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    /// An entry is in a state that cannot be serialized.
    #[error("Invalid state for configuration key '{key}': {message}")]
    InvalidState {
        /// The offending key
        key: ConfigKey,
        /// What is wrong with it
        message: String,
    },
}

impl ConfigError {
    /// Creates a ParseError from a `serde_json` error.
    pub fn from_json_error(err: serde_json::Error) -> Self {
        ConfigError::ParseError {
            message: format!("Failed to parse JSON: {}", err),
            source: Some(Box::new(err)),
        }
    }
}

/// A specialized Result type for configuration operations.
pub type Result<T> = std::result::Result<T, ConfigError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_key_not_found_error() {
        let error = ConfigError::KeyNotFound {
            key: ConfigKey::NormalizeGasConstants,
        };
        assert_eq!(
            error.to_string(),
            "Configuration key not found: NORMALIZE_GAS_CONSTANTS"
        );
    }

    #[test]
    fn test_type_mismatch_error() {
        let error = ConfigError::TypeMismatch {
            key: ConfigKey::RUniversalCodata,
            expected: ValueKind::Bool,
            actual: ValueKind::Double,
        };
        assert_eq!(
            error.to_string(),
            "Type mismatch for configuration key 'R_U_CODATA': requested bool, stored double"
        );
    }

    #[test]
    fn test_validation_error() {
        let error = ConfigError::ValidationError {
            key: ConfigKey::CriticalSplinesEnabled,
            expected: ValueKind::Bool,
        };
        assert_eq!(
            error.to_string(),
            "Invalid JSON value for configuration key 'CRITICAL_SPLINES_ENABLED': expected bool value"
        );
    }

    #[test]
    fn test_unknown_key_error() {
        let error = ConfigError::UnknownKey {
            name: "NOT_A_KEY".to_string(),
        };
        assert_eq!(error.to_string(), "Unknown configuration key: NOT_A_KEY");
    }

    #[test]
    fn test_parse_error() {
        let error = ConfigError::ParseError {
            message: "Invalid JSON".to_string(),
            source: None,
        };
        assert_eq!(
            error.to_string(),
            "Failed to parse configuration: Invalid JSON"
        );
    }

    #[test]
    fn test_from_json_error() {
        let json_err = serde_json::from_str::<serde_json::Value>("{not json").unwrap_err();
        let error = ConfigError::from_json_error(json_err);
        assert!(matches!(error, ConfigError::ParseError { source: Some(_), .. }));
        assert!(error.to_string().contains("Failed to parse JSON"));
    }

    #[test]
    fn test_invalid_state_error() {
        let error = ConfigError::InvalidState {
            key: ConfigKey::SpinodalMinimumDelta,
            message: "non-finite double".to_string(),
        };
        assert!(error.to_string().contains("SPINODAL_MINIMUM_DELTA"));
        assert!(error.to_string().contains("non-finite double"));
    }
}
