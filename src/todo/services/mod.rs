//! Application services for todo session orchestration.

mod session;

pub use session::{TodoSessionError, TodoSessionResult, TodoSessionService};
