// SPDX-License-Identifier: MIT OR Apache-2.0

//! Ports layer containing trait definitions.
//!
//! This module contains the trait definitions (ports) that define the interfaces
//! between the store and its serialized forms. These traits are implemented by
//! adapters in the adapters layer.

pub mod codec;

// Re-export commonly used types
pub use codec::StoreCodec;
