//! Replicated session state and client lifecycle handlers
//!
//! This module owns the entity list that is replicated to observers and
//! applies the session server's lifecycle callbacks to it:
//! - a joining client spawns an entity tagged with the client's global id
//! - a leaving client retires its entity
//! - session disposal clears the whole tree
//!
//! The handlers reject a join without a global id; the transport layer is
//! expected to kick such clients.

use log::info;
use serde::{Deserialize, Serialize};
use std::fmt;
use store::Entity;

/// Textual attribute every spawned entity is tagged with at join time
pub const GLOBAL_ID_KEY: &str = "global_client_id";

/// Errors surfaced by session lifecycle handlers
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionError {
    /// The joining client presented no global id
    MissingGlobalId,
    /// A client with this global id already owns an entity in the session
    AlreadyJoined { global_id: String },
}

impl fmt::Display for SessionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SessionError::MissingGlobalId => {
                write!(f, "join rejected: no global id supplied")
            }
            SessionError::AlreadyJoined { global_id } => {
                write!(f, "join rejected: \"{}\" already owns an entity", global_id)
            }
        }
    }
}

impl std::error::Error for SessionError {}

/// The state tree replicated to every observer of one session
///
/// Only the entity list is wire-visible. All mutation goes through the
/// lifecycle handlers and the banks of the entities themselves.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SessionState {
    pub entities: Vec<Entity>,
}

impl SessionState {
    /// Creates a session with no entities
    pub fn new() -> Self {
        Self::default()
    }

    /// Spawns an entity for a joining client
    ///
    /// The entity is tagged with a `global_client_id` textual attribute so
    /// observers can associate it with the client that owns it. Fails if
    /// the id is empty or already present in the session.
    pub fn handle_join(&mut self, global_id: &str) -> Result<&mut Entity, SessionError> {
        if global_id.is_empty() {
            return Err(SessionError::MissingGlobalId);
        }
        if self.entity_mut(global_id).is_some() {
            return Err(SessionError::AlreadyJoined {
                global_id: global_id.to_string(),
            });
        }

        let mut entity = Entity::new(global_id);
        entity.attributes.add_text(GLOBAL_ID_KEY, global_id);

        info!("Client {} joined, entity spawned", global_id);
        self.entities.push(entity);
        Ok(self.entities.last_mut().unwrap())
    }

    /// Retires the leaving client's entity
    ///
    /// Returns true if an entity with the given id tag was found and
    /// removed, false if it was already gone.
    pub fn handle_leave(&mut self, global_id: &str) -> bool {
        let before = self.entities.len();
        self.entities.retain(|e| e.id != global_id);
        let removed = self.entities.len() < before;
        if removed {
            info!("Client {} left, entity retired", global_id);
        }
        removed
    }

    /// Finds the live entity owned by a client
    pub fn entity_mut(&mut self, global_id: &str) -> Option<&mut Entity> {
        self.entities.iter_mut().find(|e| e.id == global_id)
    }

    /// Clears the whole tree when the session shuts down
    pub fn dispose(&mut self) {
        info!("Session disposing, clearing {} entities", self.entities.len());
        self.entities.clear();
    }
}
