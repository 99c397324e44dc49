// SPDX-License-Identifier: MIT OR Apache-2.0

//! Domain layer containing core types.
//!
//! This module contains the key registry, the typed value, the store and the error
//! type. It has no knowledge of how the store is shared or which codec is used.

pub mod config_key;
pub mod config_value;
pub mod errors;
pub mod store;

// Re-export commonly used types
pub use config_key::ConfigKey;
pub use config_value::{ConfigValue, ValueData, ValueKind};
pub use errors::{ConfigError, Result};
pub use store::Store;
