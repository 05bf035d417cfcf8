//! Thread-safe in-memory todo repository.

use async_trait::async_trait;
use mockable::{Clock, DefaultClock};
use std::sync::{Arc, RwLock};

use crate::todo::{
    domain::{Priority, Todo, TodoId, TodoTitle},
    ports::{TodoRepository, TodoRepositoryError, TodoRepositoryResult},
};

/// In-memory todo repository.
///
/// Assigns ids and creation timestamps itself, mirroring the remote store's
/// responsibility, and honours the same ordering and `NotFound` contract as
/// the REST adapter. Records are held in insertion order; [`load_all`]
/// returns them newest first.
///
/// [`load_all`]: TodoRepository::load_all
#[derive(Debug, Clone)]
pub struct InMemoryTodoRepository<C = DefaultClock> {
    todos: Arc<RwLock<Vec<Todo>>>,
    clock: Arc<C>,
}

impl InMemoryTodoRepository<DefaultClock> {
    /// Creates an empty repository using the system clock.
    #[must_use]
    pub fn new() -> Self {
        Self::with_clock(Arc::new(DefaultClock))
    }
}

impl Default for InMemoryTodoRepository<DefaultClock> {
    fn default() -> Self {
        Self::new()
    }
}

impl<C> InMemoryTodoRepository<C>
where
    C: Clock + Send + Sync,
{
    /// Creates an empty repository with an injected clock.
    #[must_use]
    pub fn with_clock(clock: Arc<C>) -> Self {
        Self {
            todos: Arc::new(RwLock::new(Vec::new())),
            clock,
        }
    }

    fn read(&self) -> TodoRepositoryResult<Vec<Todo>> {
        let todos = self
            .todos
            .read()
            .map_err(|err| TodoRepositoryError::transport(std::io::Error::other(err.to_string())))?;
        Ok(todos.clone())
    }

    fn with_write<T>(
        &self,
        f: impl FnOnce(&mut Vec<Todo>) -> TodoRepositoryResult<T>,
    ) -> TodoRepositoryResult<T> {
        let mut todos = self
            .todos
            .write()
            .map_err(|err| TodoRepositoryError::transport(std::io::Error::other(err.to_string())))?;
        f(&mut todos)
    }
}

#[async_trait]
impl<C> TodoRepository for InMemoryTodoRepository<C>
where
    C: Clock + Send + Sync,
{
    async fn load_all(&self) -> TodoRepositoryResult<Vec<Todo>> {
        let mut todos = self.read()?;
        todos.sort_by(|a, b| b.created_at().cmp(&a.created_at()));
        Ok(todos)
    }

    async fn create(
        &self,
        title: TodoTitle,
        priority: Priority,
        completed: bool,
    ) -> TodoRepositoryResult<Todo> {
        let todo = Todo::new(title, priority, completed, self.clock.as_ref());
        self.with_write(|todos| {
            todos.push(todo.clone());
            Ok(todo)
        })
    }

    async fn update(&self, todo: &Todo) -> TodoRepositoryResult<Todo> {
        self.with_write(|todos| {
            let slot = todos
                .iter_mut()
                .find(|stored| stored.id() == todo.id())
                .ok_or_else(|| TodoRepositoryError::NotFound(todo.id().clone()))?;
            // Only the mutable fields are applied; the stored creation
            // timestamp stays authoritative.
            slot.rename(todo.title().clone());
            slot.set_priority(todo.priority());
            slot.set_completed(todo.completed());
            Ok(slot.clone())
        })
    }

    async fn toggle_completed(&self, id: &TodoId, completed: bool) -> TodoRepositoryResult<Todo> {
        self.with_write(|todos| {
            let slot = todos
                .iter_mut()
                .find(|stored| stored.id() == id)
                .ok_or_else(|| TodoRepositoryError::NotFound(id.clone()))?;
            slot.set_completed(completed);
            Ok(slot.clone())
        })
    }

    async fn delete(&self, id: &TodoId) -> TodoRepositoryResult<()> {
        self.with_write(|todos| {
            let before = todos.len();
            todos.retain(|stored| stored.id() != id);
            if todos.len() == before {
                return Err(TodoRepositoryError::NotFound(id.clone()));
            }
            Ok(())
        })
    }
}
