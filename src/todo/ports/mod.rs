//! Port contracts for todo management.
//!
//! Ports define infrastructure-agnostic interfaces used by the application
//! state controller.

pub mod repository;
pub mod summary;

pub use repository::{TodoRepository, TodoRepositoryError, TodoRepositoryResult};
pub use summary::{SummaryGateway, SummaryOutcome};
