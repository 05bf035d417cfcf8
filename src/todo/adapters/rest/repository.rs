//! REST repository implementation for the remote `todos` resource.

use super::{
    config::RemoteConfig,
    models::{NewTodoRow, TodoPatch, TodoRow},
};
use crate::todo::{
    domain::{Priority, Todo, TodoId, TodoTitle},
    ports::{TodoRepository, TodoRepositoryError, TodoRepositoryResult},
};
use async_trait::async_trait;
use mockable::{Clock, DefaultClock};
use reqwest::{Client, RequestBuilder, Response};
use std::sync::Arc;
use thiserror::Error;
use tracing::{error, warn};

/// Failures raised while talking to the remote store, wrapped into
/// [`TodoRepositoryError::Transport`].
#[derive(Debug, Error)]
enum RestTransportError {
    /// The request never produced a response.
    #[error("request failed: {0}")]
    Request(String),

    /// The store answered with a non-success status.
    #[error("remote store returned status {status}: {body}")]
    Status {
        status: u16,
        body: String,
    },

    /// The response body could not be decoded.
    #[error("response decode failed: {0}")]
    Decode(String),
}

/// REST-backed todo repository.
///
/// Speaks a PostgREST-style protocol: rows live under `/rest/v1/todos` with
/// columns `id, title, completed, priority, createdAt`, filtered with
/// `id=eq.{id}` and ordered with `order=createdAt.desc`. Writes ask for
/// `Prefer: return=representation` so the persisted row comes back in the
/// same round trip.
///
/// A repository constructed without configuration short-circuits every
/// operation with [`TodoRepositoryError::ConfigurationMissing`] and makes no
/// network attempt.
#[derive(Debug, Clone)]
pub struct RestTodoRepository<C = DefaultClock> {
    remote: Option<Remote>,
    clock: Arc<C>,
}

#[derive(Debug, Clone)]
struct Remote {
    client: Client,
    config: RemoteConfig,
}

impl RestTodoRepository<DefaultClock> {
    /// Creates a repository for the given remote endpoint.
    #[must_use]
    pub fn new(config: RemoteConfig) -> Self {
        Self::with_clock(config, Arc::new(DefaultClock))
    }

    /// Creates a repository with no remote endpoint.
    ///
    /// Every operation fails gracefully with
    /// [`TodoRepositoryError::ConfigurationMissing`].
    #[must_use]
    pub fn disabled() -> Self {
        Self {
            remote: None,
            clock: Arc::new(DefaultClock),
        }
    }

    /// Creates a repository from the process environment.
    ///
    /// Falls back to a disabled repository when the connection parameters
    /// are absent, logging the condition once.
    #[must_use]
    pub fn from_env() -> Self {
        RemoteConfig::from_env().map_or_else(
            || {
                warn!("remote store configuration absent; todo operations are disabled");
                Self::disabled()
            },
            Self::new,
        )
    }
}

impl<C> RestTodoRepository<C>
where
    C: Clock + Send + Sync,
{
    /// Creates a repository with an injected clock for fallback timestamps.
    #[must_use]
    pub fn with_clock(config: RemoteConfig, clock: Arc<C>) -> Self {
        Self {
            remote: Some(Remote {
                client: Client::new(),
                config,
            }),
            clock,
        }
    }

    fn remote(&self) -> TodoRepositoryResult<&Remote> {
        self.remote.as_ref().ok_or_else(|| {
            warn!("todo operation rejected: remote store is not configured");
            TodoRepositoryError::ConfigurationMissing
        })
    }

    async fn send(&self, operation: &str, request: RequestBuilder) -> TodoRepositoryResult<Response> {
        let response = request.send().await.map_err(|err| {
            error!(%operation, error = %err, "remote store request failed");
            TodoRepositoryError::transport(RestTransportError::Request(err.to_string()))
        })?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            error!(%operation, status = status.as_u16(), "remote store rejected request");
            return Err(TodoRepositoryError::transport(RestTransportError::Status {
                status: status.as_u16(),
                body,
            }));
        }
        Ok(response)
    }

    async fn read_rows(&self, operation: &str, response: Response) -> TodoRepositoryResult<Vec<Todo>> {
        let rows = response.json::<Vec<TodoRow>>().await.map_err(|err| {
            error!(%operation, error = %err, "remote store response could not be decoded");
            TodoRepositoryError::transport(RestTransportError::Decode(err.to_string()))
        })?;
        rows.into_iter()
            .map(|row| {
                row.into_todo(self.clock.as_ref())
                    .map_err(TodoRepositoryError::transport)
            })
            .collect()
    }

    /// Issues a PATCH against the row with the given id and returns the
    /// persisted record, or `NotFound` when no row matched.
    async fn patch_by_id(
        &self,
        operation: &str,
        id: &TodoId,
        patch: &TodoPatch,
    ) -> TodoRepositoryResult<Todo> {
        let remote = self.remote()?;
        let request = remote
            .request(reqwest::Method::PATCH)
            .query(&[("id", format!("eq.{id}"))])
            .header("Prefer", "return=representation")
            .json(patch);
        let response = self.send(operation, request).await?;
        let mut todos = self.read_rows(operation, response).await?;
        todos
            .pop()
            .ok_or_else(|| TodoRepositoryError::NotFound(id.clone()))
    }
}

impl Remote {
    fn rows_url(&self) -> String {
        format!("{}/rest/v1/todos", self.config.base_url())
    }

    fn request(&self, method: reqwest::Method) -> RequestBuilder {
        self.client
            .request(method, self.rows_url())
            .header("apikey", self.config.api_key())
            .bearer_auth(self.config.api_key())
    }
}

#[async_trait]
impl<C> TodoRepository for RestTodoRepository<C>
where
    C: Clock + Send + Sync,
{
    async fn load_all(&self) -> TodoRepositoryResult<Vec<Todo>> {
        let remote = self.remote()?;
        let request = remote
            .request(reqwest::Method::GET)
            .query(&[("select", "*"), ("order", "createdAt.desc")]);
        let response = self.send("load_all", request).await?;
        self.read_rows("load_all", response).await
    }

    async fn create(
        &self,
        title: TodoTitle,
        priority: Priority,
        completed: bool,
    ) -> TodoRepositoryResult<Todo> {
        let remote = self.remote()?;
        let row = NewTodoRow {
            title: title.as_str().to_owned(),
            completed,
            priority: priority.as_str().to_owned(),
        };
        let request = remote
            .request(reqwest::Method::POST)
            .header("Prefer", "return=representation")
            .json(&row);
        let response = self.send("create", request).await?;
        let mut todos = self.read_rows("create", response).await?;
        // A store configured for minimal representations returns no rows;
        // the id and timestamp are then assigned locally.
        Ok(todos
            .pop()
            .unwrap_or_else(|| Todo::new(title, priority, completed, self.clock.as_ref())))
    }

    async fn update(&self, todo: &Todo) -> TodoRepositoryResult<Todo> {
        let patch = TodoPatch {
            title: Some(todo.title().as_str().to_owned()),
            priority: Some(todo.priority().as_str().to_owned()),
            completed: todo.completed(),
        };
        self.patch_by_id("update", todo.id(), &patch).await
    }

    async fn toggle_completed(&self, id: &TodoId, completed: bool) -> TodoRepositoryResult<Todo> {
        let patch = TodoPatch {
            title: None,
            priority: None,
            completed,
        };
        self.patch_by_id("toggle_completed", id, &patch).await
    }

    async fn delete(&self, id: &TodoId) -> TodoRepositoryResult<()> {
        let remote = self.remote()?;
        let request = remote
            .request(reqwest::Method::DELETE)
            .query(&[("id", format!("eq.{id}"))])
            .header("Prefer", "return=representation");
        let response = self.send("delete", request).await?;
        let deleted = self.read_rows("delete", response).await?;
        if deleted.is_empty() {
            return Err(TodoRepositoryError::NotFound(id.clone()));
        }
        Ok(())
    }
}
