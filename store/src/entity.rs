//! Replicated game entity owning one attribute bank

use crate::bank::AttributeBank;
use serde::{Deserialize, Serialize};

/// A networked game object carrying a dynamically extensible set of
/// attributes
///
/// The id is assigned externally (by the session handshake) and is opaque
/// to the store. The bank is created empty at construction and populated
/// during or after entity creation; it lives and dies with the entity.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Entity {
    pub id: String,
    pub attributes: AttributeBank,
}

impl Entity {
    /// Creates an entity with the given id and an empty attribute bank
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            attributes: AttributeBank::new(),
        }
    }
}
