//! Pure list organisation: partitioning and display ordering.

use super::Todo;
use std::cmp::Ordering;

/// Splits todos into `(pending, completed)`.
///
/// The split is disjoint and exhaustive: every input appears in exactly one
/// side, and relative input order is preserved within each side.
#[must_use]
pub fn partition(todos: &[Todo]) -> (Vec<Todo>, Vec<Todo>) {
    todos
        .iter()
        .cloned()
        .partition(|todo| !todo.completed())
}

/// Returns todos ordered for display.
///
/// Primary key is priority descending (`High` first), secondary key is
/// creation time descending (newest first). The sort is stable, so todos
/// with equal priority and timestamp keep their relative input order.
#[must_use]
pub fn sorted_for_display(todos: &[Todo]) -> Vec<Todo> {
    let mut ordered: Vec<Todo> = todos.to_vec();
    ordered.sort_by(display_order);
    ordered
}

fn display_order(a: &Todo, b: &Todo) -> Ordering {
    b.priority()
        .cmp(&a.priority())
        .then_with(|| b.created_at().cmp(&a.created_at()))
}
