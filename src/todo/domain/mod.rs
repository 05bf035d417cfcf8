//! Domain model for todo management.
//!
//! The todo domain models validated record construction, in-place mutation
//! of title, priority, and completion state, and pure list organisation,
//! while keeping all infrastructure concerns outside of the domain boundary.

mod error;
mod ids;
mod ordering;
mod priority;
mod todo;

pub use error::{ParsePriorityError, TodoDomainError};
pub use ids::{TodoId, TodoTitle};
pub use ordering::{partition, sorted_for_display};
pub use priority::Priority;
pub use todo::{PersistedTodoData, Todo};
