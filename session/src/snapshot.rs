//! Snapshot codec and the observer-side positional read path
//!
//! Snapshots carry the whole state tree. Observers do not get resolver
//! semantics: they zip each domain's key sequence with its value sequence
//! and read attributes by position, which is why key/value alignment must
//! hold at every encode, not just after a full batch of local mutations.

use crate::state::SessionState;
use log::debug;
use store::AttributeBank;

/// Encodes the state tree for transmission to observers
pub fn encode(state: &SessionState) -> bincode::Result<Vec<u8>> {
    debug_assert!(state.entities.iter().all(|e| e.attributes.is_aligned()));
    let bytes = bincode::serialize(state)?;
    debug!("Encoded snapshot: {} entities, {} bytes", state.entities.len(), bytes.len());
    Ok(bytes)
}

/// Decodes a received snapshot into a state tree
///
/// Lookup maps inside the banks come back empty; resolution on a decoded
/// bank scans until the bank's first mutation rebuilds them.
pub fn decode(bytes: &[u8]) -> bincode::Result<SessionState> {
    bincode::deserialize(bytes)
}

/// Positional listing of a bank's numeric domain, as observers see it
pub fn numeric_pairs(bank: &AttributeBank) -> Vec<(&str, f64)> {
    bank.numeric_keys()
        .iter()
        .map(String::as_str)
        .zip(bank.numeric_values().iter().copied())
        .collect()
}

/// Positional listing of a bank's textual domain, as observers see it
pub fn text_pairs(bank: &AttributeBank) -> Vec<(&str, &str)> {
    bank.text_keys()
        .iter()
        .map(String::as_str)
        .zip(bank.text_values().iter().map(String::as_str))
        .collect()
}
