//! Wire row models for the remote `todos` resource.

use crate::todo::domain::{
    ParsePriorityError, PersistedTodoData, Priority, Todo, TodoDomainError, TodoId, TodoTitle,
};
use chrono::{DateTime, Utc};
use mockable::Clock;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Failures converting a wire row into a domain todo.
///
/// A row that decodes as JSON can still violate the store contract; these
/// are surfaced as transport-level errors by the repository.
#[derive(Debug, Clone, Error)]
pub enum RowDecodeError {
    /// The row carries a blank title.
    #[error(transparent)]
    Title(#[from] TodoDomainError),

    /// The row carries an unknown priority value.
    #[error(transparent)]
    Priority(#[from] ParsePriorityError),
}

/// Query result row for todo records.
///
/// The id and timestamp are optional because a store configured for minimal
/// representations may omit them; the repository then generates both locally.
/// The priority travels as its canonical storage string and is parsed on
/// conversion.
#[derive(Debug, Clone, Deserialize)]
pub struct TodoRow {
    /// Identifier token, when the store echoes it.
    #[serde(default)]
    pub id: Option<String>,
    /// Stored title.
    pub title: String,
    /// Completion state.
    pub completed: bool,
    /// Priority level in canonical storage form.
    pub priority: String,
    /// Creation timestamp, when the store echoes it.
    #[serde(default, rename = "createdAt")]
    pub created_at: Option<DateTime<Utc>>,
}

impl TodoRow {
    /// Converts the row into a domain todo, filling in a locally generated
    /// id and timestamp where the store assigned none.
    ///
    /// # Errors
    ///
    /// Returns [`RowDecodeError`] when the row carries a blank title or an
    /// unknown priority value, either of which violates the store contract.
    pub fn into_todo(self, clock: &impl Clock) -> Result<Todo, RowDecodeError> {
        Ok(Todo::from_persisted(PersistedTodoData {
            id: self.id.map_or_else(TodoId::generate, TodoId::from_token),
            title: TodoTitle::new(&self.title)?,
            completed: self.completed,
            priority: Priority::try_from(self.priority.as_str())?,
            created_at: self.created_at.unwrap_or_else(|| clock.utc()),
        }))
    }
}

/// Insert payload for new todo records.
#[derive(Debug, Clone, Serialize)]
pub struct NewTodoRow {
    /// Title to store.
    pub title: String,
    /// Initial completion state.
    pub completed: bool,
    /// Priority level in canonical storage form.
    pub priority: String,
}

/// Patch payload applying the mutable fields of an existing record.
#[derive(Debug, Clone, Serialize)]
pub struct TodoPatch {
    /// Replacement title, when editing.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    /// Replacement priority in canonical storage form, when editing.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub priority: Option<String>,
    /// Replacement completion state.
    pub completed: bool,
}
