//! Todo record and its in-place mutations.

use super::{Priority, TodoId, TodoTitle};
use chrono::{DateTime, Utc};
use mockable::Clock;
use serde::{Deserialize, Serialize};

/// A single todo record.
///
/// `id` and `created_at` are assigned at creation and never change; title,
/// priority, and completion state are overwritten in place with no history
/// retained.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Todo {
    id: TodoId,
    title: TodoTitle,
    completed: bool,
    priority: Priority,
    created_at: DateTime<Utc>,
}

/// Parameter object for reconstructing a persisted todo record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PersistedTodoData {
    /// Persisted identifier token.
    pub id: TodoId,
    /// Persisted title.
    pub title: TodoTitle,
    /// Persisted completion state.
    pub completed: bool,
    /// Persisted priority level.
    pub priority: Priority,
    /// Persisted creation timestamp.
    pub created_at: DateTime<Utc>,
}

impl Todo {
    /// Creates a new todo with a locally generated id and timestamp.
    ///
    /// Used when the store does not assign ids and timestamps itself.
    #[must_use]
    pub fn new(title: TodoTitle, priority: Priority, completed: bool, clock: &impl Clock) -> Self {
        Self {
            id: TodoId::generate(),
            title,
            completed,
            priority,
            created_at: clock.utc(),
        }
    }

    /// Reconstructs a todo from persisted storage.
    #[must_use]
    pub fn from_persisted(data: PersistedTodoData) -> Self {
        Self {
            id: data.id,
            title: data.title,
            completed: data.completed,
            priority: data.priority,
            created_at: data.created_at,
        }
    }

    /// Returns the todo identifier.
    #[must_use]
    pub const fn id(&self) -> &TodoId {
        &self.id
    }

    /// Returns the todo title.
    #[must_use]
    pub const fn title(&self) -> &TodoTitle {
        &self.title
    }

    /// Returns whether the todo has been completed.
    #[must_use]
    pub const fn completed(&self) -> bool {
        self.completed
    }

    /// Returns the todo priority.
    #[must_use]
    pub const fn priority(&self) -> Priority {
        self.priority
    }

    /// Returns the creation timestamp.
    #[must_use]
    pub const fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    /// Replaces the title.
    pub fn rename(&mut self, title: TodoTitle) {
        self.title = title;
    }

    /// Replaces the priority level.
    pub const fn set_priority(&mut self, priority: Priority) {
        self.priority = priority;
    }

    /// Sets the completion state.
    pub const fn set_completed(&mut self, completed: bool) {
        self.completed = completed;
    }
}
