//! Repository port for todo persistence against a remote table-like store.

use crate::todo::domain::{Priority, Todo, TodoId, TodoTitle};
use async_trait::async_trait;
use std::sync::Arc;
use thiserror::Error;

/// Result type for todo repository operations.
pub type TodoRepositoryResult<T> = Result<T, TodoRepositoryError>;

/// Todo persistence contract.
///
/// Every operation issues exactly one remote attempt: no retry, no backoff,
/// no timeout beyond the transport's own defaults. Failures are returned as
/// values and never propagate as unhandled faults.
#[async_trait]
pub trait TodoRepository: Send + Sync {
    /// Returns all todos ordered by creation time descending.
    ///
    /// # Errors
    ///
    /// Returns [`TodoRepositoryError::ConfigurationMissing`] when remote
    /// credentials are absent or [`TodoRepositoryError::Transport`] on
    /// network/remote failure. An `Ok` empty list always means "no todos",
    /// never a swallowed failure.
    async fn load_all(&self) -> TodoRepositoryResult<Vec<Todo>>;

    /// Stores a new todo and returns the record as persisted.
    ///
    /// The id and creation timestamp are assigned by the store where it
    /// supports that, with local generation as a fallback.
    ///
    /// # Errors
    ///
    /// Returns [`TodoRepositoryError::ConfigurationMissing`] or
    /// [`TodoRepositoryError::Transport`] as for [`Self::load_all`].
    async fn create(
        &self,
        title: TodoTitle,
        priority: Priority,
        completed: bool,
    ) -> TodoRepositoryResult<Todo>;

    /// Applies the todo's title, priority, and completion state by id and
    /// returns the record as persisted.
    ///
    /// # Errors
    ///
    /// Returns [`TodoRepositoryError::NotFound`] when the id is absent
    /// remotely, in addition to the failures documented on
    /// [`Self::load_all`].
    async fn update(&self, todo: &Todo) -> TodoRepositoryResult<Todo>;

    /// Sets only the completion state of the todo with the given id.
    ///
    /// # Errors
    ///
    /// Same failure semantics as [`Self::update`].
    async fn toggle_completed(&self, id: &TodoId, completed: bool) -> TodoRepositoryResult<Todo>;

    /// Removes the todo with the given id.
    ///
    /// # Errors
    ///
    /// Same failure semantics as [`Self::update`].
    async fn delete(&self, id: &TodoId) -> TodoRepositoryResult<()>;
}

/// Errors returned by todo repository implementations.
#[derive(Debug, Clone, Error)]
pub enum TodoRepositoryError {
    /// Remote credentials or endpoint configuration are absent; no network
    /// attempt was made.
    #[error("remote store is not configured")]
    ConfigurationMissing,

    /// The todo was not found at the remote side.
    #[error("todo not found: {0}")]
    NotFound(TodoId),

    /// Network or remote-store failure.
    #[error("transport error: {0}")]
    Transport(Arc<dyn std::error::Error + Send + Sync>),
}

impl TodoRepositoryError {
    /// Wraps a transport-level error.
    pub fn transport(err: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self::Transport(Arc::new(err))
    }
}
