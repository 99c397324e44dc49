// SPDX-License-Identifier: MIT OR Apache-2.0

//! A typed runtime configuration store for a thermophysical property library.
//!
//! This crate provides a registry of named, typed settings (boolean flags,
//! numeric tolerances, strings) that library code consults to alter behavior at
//! run time, plus an exact JSON round trip of the whole store.
//!
//! # Architecture
//!
//! The crate follows hexagonal architecture principles:
//!
//! - **Domain Layer**: Core types (`ConfigKey`, `ConfigValue`, `Store`, errors)
//! - **Ports**: Trait definitions for serialized forms (`StoreCodec`)
//! - **Adapters**: Codec implementations (`JsonCodec`)
//! - **Service**: The lock-guarded `Configuration` and the process-wide accessors
//!
//! # Guarantees
//!
//! - **Closed key set**: every key has one canonical name and one typed default
//! - **Type Safety**: reads and writes through the wrong type fail, never coerce
//! - **No silent defaults**: looking up a key without an entry is an error
//! - **Atomic import**: a JSON document is applied completely or not at all
//!
//! # Quick Start
//!
//! ```rust
//! use propcfg::prelude::*;
//!
//! # fn main() -> propcfg::domain::Result<()> {
//! assert!(propcfg::get_bool(ConfigKey::CriticalSplinesEnabled)?);
//!
//! propcfg::load_json_text(r#"{"SPINODAL_MINIMUM_DELTA": 0.25}"#)?;
//! assert_eq!(propcfg::get_double(ConfigKey::SpinodalMinimumDelta)?, 0.25);
//!
//! // Unknown keys and mismatched kinds are rejected
//! assert!(propcfg::load_json_text(r#"{"SPINODAL_MINIMUM_DELTA": "0.25"}"#).is_err());
//! # Ok(())
//! # }
//! ```

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![warn(clippy::all)]

pub mod adapters;
pub mod domain;
pub mod ports;
pub mod service;

pub use service::global::{
    as_json, as_json_text, get_bool, get_double, get_integer, get_string, global, load_json,
    load_json_text, reset, set_bool, set_double, set_integer, set_string,
};

/// Commonly used types and traits.
///
/// This module re-exports the most commonly used types and traits for convenient access.
pub mod prelude {
    pub use crate::adapters::JsonCodec;
    pub use crate::domain::{
        ConfigError, ConfigKey, ConfigValue, Result, Store, ValueData, ValueKind,
    };
    pub use crate::ports::StoreCodec;
    pub use crate::service::Configuration;
}
