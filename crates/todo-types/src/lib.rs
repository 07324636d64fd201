//! Shared task record types.
//!
//! [`Todo`] is the single record kind stored by the server and rendered into
//! HTML fragments. Both the store backends and the renderer depend on this
//! crate so the field names seen by templates stay in one place.

use serde::{Deserialize, Serialize};

/// Store-assigned task identifier.
///
/// Ids are handed out in increasing order and never reused, even after the
/// task holding one is deleted.
pub type TodoId = i64;

/// A single task in the to-do list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Todo {
    pub id: TodoId,
    /// Task description. Never empty once stored.
    pub content: String,
    pub completed: bool,
}

impl Todo {
    /// A freshly created task: not completed.
    pub fn new(id: TodoId, content: impl Into<String>) -> Self {
        Self {
            id,
            content: content.into(),
            completed: false,
        }
    }

    /// Flip the `completed` flag in place.
    pub fn toggle(&mut self) {
        self.completed = !self.completed;
    }
}
