//! REST adapters speaking a PostgREST-style row protocol.

mod config;
mod models;
mod repository;
mod summary;

pub use config::RemoteConfig;
pub use repository::RestTodoRepository;
pub use summary::RestSummaryGateway;
