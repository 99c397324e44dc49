// SPDX-License-Identifier: MIT OR Apache-2.0

//! Store codec trait definition.
//!
//! This module defines the `StoreCodec` trait, which provides an interface for
//! translating a whole `Store` to and from a serialized document.

use crate::domain::{Result, Store};

/// A trait for translating a store to and from a document format.
///
/// Decoding only updates entries that already exist in the store; it never adds
/// keys and never changes the type of an entry. Implementations must make
/// [`decode`](StoreCodec::decode) all-or-nothing: if any member of a document is
/// rejected, the store is left exactly as it was.
///
/// # Examples
///
/// ```rust
/// use propcfg::domain::{Result, Store};
/// use propcfg::ports::StoreCodec;
///
/// struct CountingCodec;
///
/// impl StoreCodec for CountingCodec {
///     type Document = usize;
///
///     fn format_name(&self) -> &str {
///         "count"
///     }
///
///     fn encode(&self, store: &Store) -> Result<usize> {
///         Ok(store.len())
///     }
///
///     fn decode(&self, _store: &mut Store, _document: &usize) -> Result<()> {
///         Ok(())
///     }
///
///     fn to_text(&self, store: &Store) -> Result<String> {
///         Ok(store.len().to_string())
///     }
///
///     fn from_text(&self, _store: &mut Store, _text: &str) -> Result<()> {
///         Ok(())
///     }
/// }
///
/// let codec = CountingCodec;
/// assert_eq!(codec.encode(&Store::new()).unwrap(), 0);
/// ```
pub trait StoreCodec {
    /// The in-memory document type produced and consumed by this codec.
    type Document;

    /// Returns a short name for the format, used in log messages.
    fn format_name(&self) -> &str;

    /// Encodes every entry of the store into a document.
    ///
    /// # Errors
    ///
    /// Returns an error if an entry cannot be represented in the format.
    fn encode(&self, store: &Store) -> Result<Self::Document>;

    /// Updates existing entries of the store from a document.
    ///
    /// # Errors
    ///
    /// Returns an error if the document names an unknown key, a key the store
    /// has no entry for, or carries a value of the wrong kind. The store is
    /// unchanged on error.
    fn decode(&self, store: &mut Store, document: &Self::Document) -> Result<()>;

    /// Encodes the store as text.
    fn to_text(&self, store: &Store) -> Result<String>;

    /// Parses text and decodes it into the store.
    ///
    /// # Errors
    ///
    /// Returns a parse error if the text is malformed, before any entry is
    /// touched, or any error [`decode`](StoreCodec::decode) may return.
    fn from_text(&self, store: &mut Store, text: &str) -> Result<()>;
}
