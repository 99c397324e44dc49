// SPDX-License-Identifier: MIT OR Apache-2.0

//! Service layer containing the configuration owner and its accessors.
//!
//! [`Configuration`] is the explicitly constructible owner of a store; the
//! [`global`] module exposes the same operations on one process-wide instance.

pub mod configuration;
pub mod global;

// Re-export commonly used types
pub use configuration::Configuration;
