//! In-memory adapters for tests and offline use.

mod repository;
mod summary;

pub use repository::InMemoryTodoRepository;
pub use summary::LocalSummaryGateway;
