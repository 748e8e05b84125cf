//! # Entity Attribute Store
//!
//! Storage for the open-ended attribute sets carried by replicated game
//! entities. Remote observers decode entity state positionally, so the
//! replicated shape of a bank is kept flat: per value domain, one ordered
//! key sequence and one ordered value sequence, index-aligned at all times.
//!
//! Access follows a two-phase protocol:
//! - resolution maps an attribute name to its positional index in a domain
//! - a view bound to that index then reads and writes the slot in O(1)
//!
//! ## Module Organization
//!
//! - [`bank`]: the [`AttributeBank`] container, resolution, and the append
//!   and update operations that preserve key/value alignment
//! - [`view`]: the per-domain slot handles returned by resolution
//! - [`entity`]: the replicated entity owning one bank
//!
//! The crate performs no I/O and emits no logs; it is embedded in a larger
//! replicated state tree that is serialized by its host session.

pub mod bank;
pub mod entity;
pub mod view;

pub use bank::{AttributeBank, AttributeError, Domain};
pub use entity::Entity;
pub use view::{NumericView, TextView};
