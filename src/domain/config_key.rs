// SPDX-License-Identifier: MIT OR Apache-2.0

//! The closed registry of configuration keys.
//!
//! This module provides the `ConfigKey` enum. Every key has exactly one canonical
//! name (used as the JSON member name), a short description, and a typed built-in
//! default. Name lookup is a bijection: no two keys share a name.

use crate::domain::config_value::ValueData;
use crate::domain::errors::{ConfigError, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// A configuration key known to the library.
///
/// Keys are ordered by declaration, which is also the order used when a store is
/// enumerated. They serialize through serde as their canonical name.
///
/// # Examples
///
/// ```
/// use propcfg::domain::config_key::ConfigKey;
///
/// let key = ConfigKey::CriticalSplinesEnabled;
/// assert_eq!(key.as_str(), "CRITICAL_SPLINES_ENABLED");
/// assert_eq!(ConfigKey::from_name("CRITICAL_SPLINES_ENABLED").unwrap(), key);
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum ConfigKey {
    /// Normalize the gas constant of each fluid to the common value.
    #[serde(rename = "NORMALIZE_GAS_CONSTANTS")]
    NormalizeGasConstants,
    /// Treat states within 1 µK of the critical temperature as critical.
    #[serde(rename = "CRITICAL_WITHIN_1UK")]
    CriticalWithin1Uk,
    /// Use spline interpolation near the critical point.
    #[serde(rename = "CRITICAL_SPLINES_ENABLED")]
    CriticalSplinesEnabled,
    /// Keep the raw tabular data alongside compressed tables.
    #[serde(rename = "SAVE_RAW_TABLES")]
    SaveRawTables,
    /// Directory used instead of the default table cache location.
    #[serde(rename = "ALTERNATIVE_TABLES_DIRECTORY")]
    AlternativeTablesDirectory,
    /// Upper bound on the size of the table cache directory.
    #[serde(rename = "MAXIMUM_TABLE_DIRECTORY_SIZE_IN_GB")]
    MaximumTableDirectorySizeInGb,
    /// Skip the validity-range check on property inputs.
    #[serde(rename = "DONT_CHECK_PROPERTY_LIMITS")]
    DontCheckPropertyLimits,
    /// Pressure at which phase envelope tracing begins.
    #[serde(rename = "PHASE_ENVELOPE_STARTING_PRESSURE_PA")]
    PhaseEnvelopeStartingPressurePa,
    /// Molar gas constant used when normalizing gas constants.
    #[serde(rename = "R_U_CODATA")]
    RUniversalCodata,
    /// Smallest reduced density used when searching for spinodals.
    #[serde(rename = "SPINODAL_MINIMUM_DELTA")]
    SpinodalMinimumDelta,
    /// Reuse guesses between successive high-level property calls.
    #[serde(rename = "USE_GUESSES_IN_PROPSSI")]
    UseGuessesInPropssi,
    /// Decimal separator used when formatting numbers.
    #[serde(rename = "FLOAT_PUNCTUATION")]
    FloatPunctuation,
    /// Delimiter used for list-valued string output.
    #[serde(rename = "LIST_STRING_DELIMITER")]
    ListStringDelimiter,
}

impl ConfigKey {
    /// Every key, in declaration order.
    pub const ALL: [ConfigKey; 13] = [
        ConfigKey::NormalizeGasConstants,
        ConfigKey::CriticalWithin1Uk,
        ConfigKey::CriticalSplinesEnabled,
        ConfigKey::SaveRawTables,
        ConfigKey::AlternativeTablesDirectory,
        ConfigKey::MaximumTableDirectorySizeInGb,
        ConfigKey::DontCheckPropertyLimits,
        ConfigKey::PhaseEnvelopeStartingPressurePa,
        ConfigKey::RUniversalCodata,
        ConfigKey::SpinodalMinimumDelta,
        ConfigKey::UseGuessesInPropssi,
        ConfigKey::FloatPunctuation,
        ConfigKey::ListStringDelimiter,
    ];

    /// Returns the canonical name of the key.
    ///
    /// # Examples
    ///
    /// ```
    /// use propcfg::domain::config_key::ConfigKey;
    ///
    /// assert_eq!(ConfigKey::NormalizeGasConstants.as_str(), "NORMALIZE_GAS_CONSTANTS");
    /// ```
    pub fn as_str(&self) -> &'static str {
        match self {
            ConfigKey::NormalizeGasConstants => "NORMALIZE_GAS_CONSTANTS",
            ConfigKey::CriticalWithin1Uk => "CRITICAL_WITHIN_1UK",
            ConfigKey::CriticalSplinesEnabled => "CRITICAL_SPLINES_ENABLED",
            ConfigKey::SaveRawTables => "SAVE_RAW_TABLES",
            ConfigKey::AlternativeTablesDirectory => "ALTERNATIVE_TABLES_DIRECTORY",
            ConfigKey::MaximumTableDirectorySizeInGb => "MAXIMUM_TABLE_DIRECTORY_SIZE_IN_GB",
            ConfigKey::DontCheckPropertyLimits => "DONT_CHECK_PROPERTY_LIMITS",
            ConfigKey::PhaseEnvelopeStartingPressurePa => "PHASE_ENVELOPE_STARTING_PRESSURE_PA",
            ConfigKey::RUniversalCodata => "R_U_CODATA",
            ConfigKey::SpinodalMinimumDelta => "SPINODAL_MINIMUM_DELTA",
            ConfigKey::UseGuessesInPropssi => "USE_GUESSES_IN_PROPSSI",
            ConfigKey::FloatPunctuation => "FLOAT_PUNCTUATION",
            ConfigKey::ListStringDelimiter => "LIST_STRING_DELIMITER",
        }
    }

    /// Resolves a canonical name back to its key.
    ///
    /// Matching is exact and case-sensitive.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::UnknownKey`] if no key has this name.
    ///
    /// # Examples
    ///
    /// ```
    /// use propcfg::domain::config_key::ConfigKey;
    ///
    /// assert_eq!(ConfigKey::from_name("R_U_CODATA").unwrap(), ConfigKey::RUniversalCodata);
    /// assert!(ConfigKey::from_name("r_u_codata").is_err());
    /// ```
    pub fn from_name(name: &str) -> Result<Self> {
        ConfigKey::ALL
            .iter()
            .copied()
            .find(|key| key.as_str() == name)
            .ok_or_else(|| ConfigError::UnknownKey {
                name: name.to_string(),
            })
    }

    /// Returns a one-line description of what the key controls.
    pub fn description(&self) -> &'static str {
        match self {
            ConfigKey::NormalizeGasConstants => {
                "Normalize the gas constant of each fluid to the common value"
            }
            ConfigKey::CriticalWithin1Uk => {
                "Treat states within 1 uK of the critical temperature as critical"
            }
            ConfigKey::CriticalSplinesEnabled => "Use spline interpolation near the critical point",
            ConfigKey::SaveRawTables => "Keep the raw tabular data alongside compressed tables",
            ConfigKey::AlternativeTablesDirectory => {
                "Directory used instead of the default table cache location"
            }
            ConfigKey::MaximumTableDirectorySizeInGb => {
                "Upper bound on the size of the table cache directory, in GB"
            }
            ConfigKey::DontCheckPropertyLimits => "Skip the validity-range check on property inputs",
            ConfigKey::PhaseEnvelopeStartingPressurePa => {
                "Pressure at which phase envelope tracing begins, in Pa"
            }
            ConfigKey::RUniversalCodata => "Molar gas constant, in J/mol/K",
            ConfigKey::SpinodalMinimumDelta => {
                "Smallest reduced density used when searching for spinodals"
            }
            ConfigKey::UseGuessesInPropssi => {
                "Reuse guesses between successive high-level property calls"
            }
            ConfigKey::FloatPunctuation => "Decimal separator used when formatting numbers",
            ConfigKey::ListStringDelimiter => "Delimiter used for list-valued string output",
        }
    }

    /// Returns the built-in default for this key.
    ///
    /// The variant of the returned data fixes the type of the key for the
    /// lifetime of any store seeded from these defaults.
    pub fn default_value(&self) -> ValueData {
        match self {
            ConfigKey::NormalizeGasConstants => ValueData::Bool(true),
            ConfigKey::CriticalWithin1Uk => ValueData::Bool(true),
            ConfigKey::CriticalSplinesEnabled => ValueData::Bool(true),
            ConfigKey::SaveRawTables => ValueData::Bool(false),
            ConfigKey::AlternativeTablesDirectory => ValueData::String(String::new()),
            ConfigKey::MaximumTableDirectorySizeInGb => ValueData::Double(1.0),
            ConfigKey::DontCheckPropertyLimits => ValueData::Bool(false),
            ConfigKey::PhaseEnvelopeStartingPressurePa => ValueData::Double(100.0),
            ConfigKey::RUniversalCodata => ValueData::Double(8.3144598),
            ConfigKey::SpinodalMinimumDelta => ValueData::Double(0.5),
            ConfigKey::UseGuessesInPropssi => ValueData::Bool(false),
            ConfigKey::FloatPunctuation => ValueData::String(".".to_string()),
            ConfigKey::ListStringDelimiter => ValueData::String(",".to_string()),
        }
    }
}

impl FromStr for ConfigKey {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self> {
        ConfigKey::from_name(s)
    }
}

impl AsRef<str> for ConfigKey {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

impl fmt::Display for ConfigKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::config_value::ValueKind;
    use std::collections::HashSet;

    #[test]
    fn test_canonical_names_are_unique() {
        let names: HashSet<&str> = ConfigKey::ALL.iter().map(|k| k.as_str()).collect();
        assert_eq!(names.len(), ConfigKey::ALL.len());
    }

    #[test]
    fn test_name_round_trip_for_every_key() {
        for key in ConfigKey::ALL {
            assert_eq!(ConfigKey::from_name(key.as_str()).unwrap(), key);
        }
    }

    #[test]
    fn test_from_name_unknown() {
        let err = ConfigKey::from_name("NOT_A_REAL_KEY").unwrap_err();
        match err {
            ConfigError::UnknownKey { name } => assert_eq!(name, "NOT_A_REAL_KEY"),
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_from_name_is_case_sensitive() {
        assert!(ConfigKey::from_name("normalize_gas_constants").is_err());
        assert!(ConfigKey::from_name(" NORMALIZE_GAS_CONSTANTS").is_err());
        assert!(ConfigKey::from_name("").is_err());
    }

    #[test]
    fn test_from_str() {
        let key: ConfigKey = "SAVE_RAW_TABLES".parse().unwrap();
        assert_eq!(key, ConfigKey::SaveRawTables);
        assert!("SAVE_RAW".parse::<ConfigKey>().is_err());
    }

    #[test]
    fn test_display() {
        assert_eq!(format!("{}", ConfigKey::FloatPunctuation), "FLOAT_PUNCTUATION");
    }

    #[test]
    fn test_as_ref() {
        let s: &str = ConfigKey::ListStringDelimiter.as_ref();
        assert_eq!(s, "LIST_STRING_DELIMITER");
    }

    #[test]
    fn test_ordering_follows_declaration() {
        let mut sorted = ConfigKey::ALL;
        sorted.sort();
        assert_eq!(sorted, ConfigKey::ALL);
    }

    #[test]
    fn test_serde_uses_canonical_name() {
        for key in ConfigKey::ALL {
            let json = serde_json::to_string(&key).unwrap();
            assert_eq!(json, format!("\"{}\"", key.as_str()));
            let back: ConfigKey = serde_json::from_str(&json).unwrap();
            assert_eq!(back, key);
        }
    }

    #[test]
    fn test_documented_defaults() {
        assert_eq!(
            ConfigKey::NormalizeGasConstants.default_value(),
            ValueData::Bool(true)
        );
        assert_eq!(
            ConfigKey::CriticalSplinesEnabled.default_value(),
            ValueData::Bool(true)
        );
        assert_eq!(
            ConfigKey::RUniversalCodata.default_value(),
            ValueData::Double(8.3144598)
        );
        assert_eq!(
            ConfigKey::FloatPunctuation.default_value(),
            ValueData::String(".".to_string())
        );
    }

    #[test]
    fn test_every_key_has_description() {
        for key in ConfigKey::ALL {
            assert!(!key.description().is_empty(), "{key} has no description");
        }
    }

    #[test]
    fn test_default_kinds() {
        assert_eq!(ConfigKey::SaveRawTables.default_value().kind(), ValueKind::Bool);
        assert_eq!(
            ConfigKey::MaximumTableDirectorySizeInGb.default_value().kind(),
            ValueKind::Double
        );
        assert_eq!(
            ConfigKey::AlternativeTablesDirectory.default_value().kind(),
            ValueKind::String
        );
    }
}
