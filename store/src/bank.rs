//! Attribute storage and name resolution for one replicated entity
//!
//! A bank holds two independent domains (numeric and textual), each stored
//! as a pair of index-aligned sequences. The pairing is a wire contract:
//! observers zip `keys[i]` with `values[i]` and have no access to resolver
//! semantics, so alignment must hold at every point the bank is serialized,
//! not just between batches of local mutations.

use crate::view::{NumericView, TextView};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;

/// The value-type partition of a bank
///
/// Domains are independent namespaces: the same key name may exist in both
/// domains simultaneously as two unrelated slots.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Domain {
    Numeric,
    Textual,
}

impl fmt::Display for Domain {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Domain::Numeric => write!(f, "numeric"),
            Domain::Textual => write!(f, "textual"),
        }
    }
}

/// Errors surfaced by attribute resolution and checked insertion
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AttributeError {
    /// The key does not exist in the named domain
    NotFound { domain: Domain, key: String },
    /// The key already resolves in the named domain (checked insertion only)
    Duplicate { domain: Domain, key: String },
}

impl fmt::Display for AttributeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AttributeError::NotFound { domain, key } => {
                write!(f, "attribute \"{}\" not found in {} domain", key, domain)
            }
            AttributeError::Duplicate { domain, key } => {
                write!(f, "attribute \"{}\" already exists in {} domain", key, domain)
            }
        }
    }
}

impl std::error::Error for AttributeError {}

/// One entity's attribute storage: two domains of index-aligned
/// key/value sequences
///
/// The four sequences are the replicated shape. The lookup maps are a
/// process-local acceleration structure: they are never serialized, only
/// record the earliest index per key (so duplicate appends keep their
/// earliest-wins lookup order), and are rebuilt lazily after the bank
/// comes back from the wire.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AttributeBank {
    numeric_keys: Vec<String>,
    numeric_values: Vec<f64>,
    text_keys: Vec<String>,
    text_values: Vec<String>,

    #[serde(skip)]
    numeric_lookup: HashMap<String, usize>,
    #[serde(skip)]
    text_lookup: HashMap<String, usize>,
    // How many key entries each lookup map has folded in. Deserialization
    // resets these to zero, which marks the maps stale.
    #[serde(skip)]
    numeric_folded: usize,
    #[serde(skip)]
    text_folded: usize,
}

impl AttributeBank {
    /// Creates a bank with empty domains
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of attributes in the numeric domain
    pub fn numeric_len(&self) -> usize {
        self.numeric_keys.len()
    }

    /// Number of attributes in the textual domain
    pub fn text_len(&self) -> usize {
        self.text_keys.len()
    }

    /// Ordered key sequence of the numeric domain
    pub fn numeric_keys(&self) -> &[String] {
        &self.numeric_keys
    }

    /// Ordered value sequence of the numeric domain
    pub fn numeric_values(&self) -> &[f64] {
        &self.numeric_values
    }

    /// Ordered key sequence of the textual domain
    pub fn text_keys(&self) -> &[String] {
        &self.text_keys
    }

    /// Ordered value sequence of the textual domain
    pub fn text_values(&self) -> &[String] {
        &self.text_values
    }

    /// Reports whether both domains satisfy the key/value alignment
    /// contract
    ///
    /// A desynced pair corrupts every downstream positional reader, so this
    /// is asserted after every mutation and before snapshots are encoded.
    pub fn is_aligned(&self) -> bool {
        self.numeric_keys.len() == self.numeric_values.len()
            && self.text_keys.len() == self.text_values.len()
    }

    /// Maps an attribute name to its positional index within a domain
    ///
    /// The earliest-inserted match wins: if duplicate keys exist, later
    /// duplicates are unreachable by name. Fails with
    /// [`AttributeError::NotFound`] if the key is absent from the domain.
    ///
    /// Resolution is O(1) while the lookup map is fresh and falls back to a
    /// front-to-back scan (same result, O(n)) when the bank has just been
    /// deserialized and no mutation has rebuilt the map yet.
    pub fn resolve(&self, domain: Domain, key: &str) -> Result<usize, AttributeError> {
        let (keys, lookup, folded) = match domain {
            Domain::Numeric => (&self.numeric_keys, &self.numeric_lookup, self.numeric_folded),
            Domain::Textual => (&self.text_keys, &self.text_lookup, self.text_folded),
        };

        let found = if folded == keys.len() {
            lookup.get(key).copied()
        } else {
            keys.iter().position(|k| k == key)
        };

        found.ok_or_else(|| AttributeError::NotFound {
            domain,
            key: key.to_string(),
        })
    }

    /// Appends a numeric attribute and returns a view bound to it
    ///
    /// Value and key are pushed as one unit; no fallible step can separate
    /// them, so alignment holds at every return. No duplicate check is
    /// performed: appending an existing key creates a second slot that is
    /// shadowed in lookups by the earlier one, while the returned view is
    /// bound to the index that was actually appended.
    pub fn add_numeric(&mut self, key: &str, value: f64) -> NumericView<'_> {
        self.refresh_lookups();

        let index = self.numeric_keys.len();
        self.numeric_values.push(value);
        self.numeric_keys.push(key.to_string());
        self.numeric_lookup.entry(key.to_string()).or_insert(index);
        self.numeric_folded += 1;

        debug_assert!(self.is_aligned());
        NumericView { bank: self, index }
    }

    /// Appends a textual attribute and returns a view bound to it
    ///
    /// Same contract as [`add_numeric`](Self::add_numeric): atomic append,
    /// no duplicate check, view bound to the appended slot.
    pub fn add_text(&mut self, key: &str, value: &str) -> TextView<'_> {
        self.refresh_lookups();

        let index = self.text_keys.len();
        self.text_values.push(value.to_string());
        self.text_keys.push(key.to_string());
        self.text_lookup.entry(key.to_string()).or_insert(index);
        self.text_folded += 1;

        debug_assert!(self.is_aligned());
        TextView { bank: self, index }
    }

    /// Checked append: fails with [`AttributeError::Duplicate`] if the key
    /// already resolves in the numeric domain, leaving the bank untouched
    pub fn try_add_numeric(&mut self, key: &str, value: f64) -> Result<NumericView<'_>, AttributeError> {
        if self.resolve(Domain::Numeric, key).is_ok() {
            return Err(AttributeError::Duplicate {
                domain: Domain::Numeric,
                key: key.to_string(),
            });
        }
        Ok(self.add_numeric(key, value))
    }

    /// Checked append: fails with [`AttributeError::Duplicate`] if the key
    /// already resolves in the textual domain, leaving the bank untouched
    pub fn try_add_text(&mut self, key: &str, value: &str) -> Result<TextView<'_>, AttributeError> {
        if self.resolve(Domain::Textual, key).is_ok() {
            return Err(AttributeError::Duplicate {
                domain: Domain::Textual,
                key: key.to_string(),
            });
        }
        Ok(self.add_text(key, value))
    }

    /// Insert-or-overwrite for the numeric domain
    ///
    /// Overwrites the earliest slot's value if the key resolves, appends a
    /// new slot otherwise. This is the recommended entry point for handler
    /// code that treats keys as unique; it never creates shadowed slots.
    pub fn set_numeric(&mut self, key: &str, value: f64) -> NumericView<'_> {
        self.refresh_lookups();
        match self.resolve(Domain::Numeric, key) {
            Ok(index) => {
                self.numeric_values[index] = value;
                NumericView { bank: self, index }
            }
            Err(_) => self.add_numeric(key, value),
        }
    }

    /// Insert-or-overwrite for the textual domain
    ///
    /// Same contract as [`set_numeric`](Self::set_numeric).
    pub fn set_text(&mut self, key: &str, value: &str) -> TextView<'_> {
        self.refresh_lookups();
        match self.resolve(Domain::Textual, key) {
            Ok(index) => {
                self.text_values[index] = value.to_string();
                TextView { bank: self, index }
            }
            Err(_) => self.add_text(key, value),
        }
    }

    /// Resolves a numeric attribute by name and returns a view bound to it
    pub fn numeric_view(&mut self, key: &str) -> Result<NumericView<'_>, AttributeError> {
        self.refresh_lookups();
        let index = self.resolve(Domain::Numeric, key)?;
        Ok(NumericView { bank: self, index })
    }

    /// Resolves a textual attribute by name and returns a view bound to it
    pub fn text_view(&mut self, key: &str) -> Result<TextView<'_>, AttributeError> {
        self.refresh_lookups();
        let index = self.resolve(Domain::Textual, key)?;
        Ok(TextView { bank: self, index })
    }

    /// Rebuilds any lookup map that has fallen behind its key sequence
    ///
    /// Folding keeps the earliest index per key. Called from every `&mut`
    /// entry point so a bank decoded from a snapshot regains O(1)
    /// resolution on first mutation without an explicit fixup call.
    fn refresh_lookups(&mut self) {
        if self.numeric_folded != self.numeric_keys.len() {
            self.numeric_lookup.clear();
            for (i, key) in self.numeric_keys.iter().enumerate() {
                self.numeric_lookup.entry(key.clone()).or_insert(i);
            }
            self.numeric_folded = self.numeric_keys.len();
        }
        if self.text_folded != self.text_keys.len() {
            self.text_lookup.clear();
            for (i, key) in self.text_keys.iter().enumerate() {
                self.text_lookup.entry(key.clone()).or_insert(i);
            }
            self.text_folded = self.text_keys.len();
        }
    }

    pub(crate) fn numeric_value(&self, index: usize) -> f64 {
        self.numeric_values[index]
    }

    pub(crate) fn set_numeric_value(&mut self, index: usize, value: f64) {
        self.numeric_values[index] = value;
    }

    pub(crate) fn text_value(&self, index: usize) -> &str {
        &self.text_values[index]
    }

    pub(crate) fn set_text_value(&mut self, index: usize, value: String) {
        self.text_values[index] = value;
    }
}
