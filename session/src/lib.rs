//! # Session State Library
//!
//! The replicated state tree that embeds entity attribute banks, plus the
//! handlers a session server calls across a client's lifecycle and the
//! snapshot codec that carries the tree to observers.
//!
//! ## Module Organization
//!
//! ### State Module (`state`)
//! The entity list replicated to every observer of a session:
//! - join/leave handlers that spawn and retire tagged entities
//! - lookup of a live entity by its externally assigned id
//! - disposal when the session shuts down
//!
//! ### Snapshot Module (`snapshot`)
//! Encoding of the state tree for transmission and the positional read
//! path observers use on the other end:
//! - bincode encode/decode of the full tree
//! - per-domain key/value zipping for generic consumers that have no
//!   resolver, only the four replicated sequences
//!
//! All mutation is synchronous and single-threaded: the owning session
//! serializes every handler call through its own processing loop, and
//! nothing here blocks or suspends.

pub mod snapshot;
pub mod state;

pub use snapshot::{decode, encode, numeric_pairs, text_pairs};
pub use state::{SessionError, SessionState, GLOBAL_ID_KEY};
