//! Application state controller holding the in-memory todo mirror.

use crate::todo::{
    domain::{Priority, Todo, TodoDomainError, TodoId, TodoTitle, partition, sorted_for_display},
    ports::{SummaryGateway, SummaryOutcome, TodoRepository, TodoRepositoryError},
};
use std::sync::Arc;
use thiserror::Error;
use tracing::debug;

/// Service-level errors for todo session operations.
#[derive(Debug, Clone, Error)]
pub enum TodoSessionError {
    /// Input validation failed.
    #[error(transparent)]
    Domain(#[from] TodoDomainError),

    /// Repository operation failed.
    #[error(transparent)]
    Repository(#[from] TodoRepositoryError),

    /// The id is not present in the local mirror.
    #[error("unknown todo: {0}")]
    UnknownTodo(TodoId),
}

/// Result type for todo session operations.
pub type TodoSessionResult<T> = Result<T, TodoSessionError>;

/// Application state controller for a todo session.
///
/// Holds a transient mirror of the remote collection for rendering. The
/// remote store stays the sole source of truth: the mirror only changes
/// after a gateway call resolves successfully, so it never diverges from a
/// confirmed server state. There are no optimistic updates, and two
/// operations issued back-to-back on the same todo are not mutually
/// excluded; the last resolution wins.
pub struct TodoSessionService<R, G> {
    repository: Arc<R>,
    summary_gateway: Arc<G>,
    todos: Vec<Todo>,
    last_summary: Option<String>,
    load_failed: bool,
}

impl<R, G> TodoSessionService<R, G>
where
    R: TodoRepository,
    G: SummaryGateway,
{
    /// Creates a session with an empty mirror.
    #[must_use]
    pub const fn new(repository: Arc<R>, summary_gateway: Arc<G>) -> Self {
        Self {
            repository,
            summary_gateway,
            todos: Vec::new(),
            last_summary: None,
            load_failed: false,
        }
    }

    /// Replaces the mirror with the remote collection.
    ///
    /// On failure the mirror is left unchanged and [`Self::load_failed`] is
    /// set, so callers can tell a failed load from an empty collection
    /// without inspecting list length.
    ///
    /// # Errors
    ///
    /// Returns [`TodoSessionError::Repository`] when the load fails.
    pub async fn load(&mut self) -> TodoSessionResult<()> {
        match self.repository.load_all().await {
            Ok(todos) => {
                debug!(count = todos.len(), "todo mirror refreshed");
                self.todos = todos;
                self.load_failed = false;
                Ok(())
            }
            Err(err) => {
                self.load_failed = true;
                Err(err.into())
            }
        }
    }

    /// Creates a todo from raw form input and inserts it at the front of
    /// the mirror.
    ///
    /// # Errors
    ///
    /// Returns [`TodoSessionError::Domain`] when the title is blank after
    /// trimming (rejected before any remote call) or
    /// [`TodoSessionError::Repository`] when persistence fails; the mirror
    /// is unchanged on failure.
    pub async fn add(&mut self, title: &str, priority: Priority) -> TodoSessionResult<Todo> {
        let validated = TodoTitle::new(title)?;
        let created = self.repository.create(validated, priority, false).await?;
        self.todos.insert(0, created.clone());
        Ok(created)
    }

    /// Applies a new title and priority to an existing todo.
    ///
    /// Completion state is preserved. The mirror entry is replaced with the
    /// record as persisted.
    ///
    /// # Errors
    ///
    /// Returns [`TodoSessionError::UnknownTodo`] when the id is not
    /// mirrored, [`TodoSessionError::Domain`] for a blank title, or
    /// [`TodoSessionError::Repository`] when persistence fails; the mirror
    /// is unchanged on failure.
    pub async fn edit(
        &mut self,
        id: &TodoId,
        title: &str,
        priority: Priority,
    ) -> TodoSessionResult<Todo> {
        let validated = TodoTitle::new(title)?;
        let mut edited = self
            .find(id)
            .ok_or_else(|| TodoSessionError::UnknownTodo(id.clone()))?
            .clone();
        edited.rename(validated);
        edited.set_priority(priority);

        let persisted = self.repository.update(&edited).await?;
        self.replace(persisted)
    }

    /// Sets the completion state of an existing todo.
    ///
    /// # Errors
    ///
    /// Same failure semantics as [`Self::edit`], without title validation.
    pub async fn toggle(&mut self, id: &TodoId, completed: bool) -> TodoSessionResult<Todo> {
        if self.find(id).is_none() {
            return Err(TodoSessionError::UnknownTodo(id.clone()));
        }
        let persisted = self.repository.toggle_completed(id, completed).await?;
        self.replace(persisted)
    }

    /// Deletes a todo remotely and removes it from the mirror.
    ///
    /// # Errors
    ///
    /// Returns [`TodoSessionError::UnknownTodo`] when the id is not
    /// mirrored or [`TodoSessionError::Repository`] when the remote delete
    /// fails; the mirror is unchanged on failure.
    pub async fn remove(&mut self, id: &TodoId) -> TodoSessionResult<()> {
        if self.find(id).is_none() {
            return Err(TodoSessionError::UnknownTodo(id.clone()));
        }
        self.repository.delete(id).await?;
        self.todos.retain(|todo| todo.id() != id);
        Ok(())
    }

    /// Requests a pending-work summary from the gateway.
    ///
    /// The message is recorded as the last summary when the request
    /// succeeds. The outcome is returned either way; summary failures never
    /// affect the mirror.
    pub async fn request_summary(&mut self) -> SummaryOutcome {
        let outcome = self.summary_gateway.generate_and_send().await;
        if outcome.success {
            self.last_summary = Some(outcome.message.clone());
        }
        outcome
    }

    /// Returns the mirrored todos in load/insertion order.
    #[must_use]
    pub fn todos(&self) -> &[Todo] {
        &self.todos
    }

    /// Returns the pending todos ordered for display.
    #[must_use]
    pub fn pending_view(&self) -> Vec<Todo> {
        let (pending, _) = partition(&self.todos);
        sorted_for_display(&pending)
    }

    /// Returns the completed todos ordered for display.
    #[must_use]
    pub fn completed_view(&self) -> Vec<Todo> {
        let (_, completed) = partition(&self.todos);
        sorted_for_display(&completed)
    }

    /// Returns the number of pending todos.
    #[must_use]
    pub fn pending_count(&self) -> usize {
        self.todos.iter().filter(|todo| !todo.completed()).count()
    }

    /// Returns the number of completed todos.
    #[must_use]
    pub fn completed_count(&self) -> usize {
        self.todos.iter().filter(|todo| todo.completed()).count()
    }

    /// Returns the last successfully generated summary, if any.
    #[must_use]
    pub fn last_summary(&self) -> Option<&str> {
        self.last_summary.as_deref()
    }

    /// Returns whether the most recent load attempt failed.
    #[must_use]
    pub const fn load_failed(&self) -> bool {
        self.load_failed
    }

    fn find(&self, id: &TodoId) -> Option<&Todo> {
        self.todos.iter().find(|todo| todo.id() == id)
    }

    fn replace(&mut self, persisted: Todo) -> TodoSessionResult<Todo> {
        let id = persisted.id().clone();
        let slot = self
            .todos
            .iter_mut()
            .find(|todo| *todo.id() == id)
            .ok_or(TodoSessionError::UnknownTodo(id))?;
        *slot = persisted;
        Ok(slot.clone())
    }
}
