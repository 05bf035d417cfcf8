//! Domain-focused tests for todo record construction and validation.

use crate::todo::domain::{ParsePriorityError, Priority, Todo, TodoDomainError, TodoId, TodoTitle};
use mockable::DefaultClock;
use rstest::{fixture, rstest};

#[fixture]
fn clock() -> DefaultClock {
    DefaultClock
}

#[rstest]
fn title_trims_surrounding_whitespace() {
    let title = TodoTitle::new("  water the plants  ").expect("valid title");
    assert_eq!(title.as_str(), "water the plants");
}

#[rstest]
#[case("")]
#[case("   ")]
#[case("\t\n")]
fn title_rejects_blank_input(#[case] raw: &str) {
    assert_eq!(TodoTitle::new(raw), Err(TodoDomainError::EmptyTitle));
}

#[rstest]
fn priority_defaults_to_medium() {
    assert_eq!(Priority::default(), Priority::Medium);
}

#[rstest]
fn priority_orders_low_below_medium_below_high() {
    assert!(Priority::Low < Priority::Medium);
    assert!(Priority::Medium < Priority::High);
}

#[rstest]
#[case("low", Priority::Low)]
#[case("Medium", Priority::Medium)]
#[case(" HIGH ", Priority::High)]
fn priority_parses_canonical_and_padded_forms(#[case] raw: &str, #[case] expected: Priority) {
    assert_eq!(Priority::try_from(raw), Ok(expected));
}

#[rstest]
fn priority_rejects_unknown_value() {
    assert_eq!(
        Priority::try_from("urgent"),
        Err(ParsePriorityError("urgent".to_owned()))
    );
}

#[rstest]
fn new_todo_starts_pending_with_fresh_id(clock: DefaultClock) {
    let title = TodoTitle::new("ship the release").expect("valid title");
    let todo = Todo::new(title, Priority::High, false, &clock);

    assert!(!todo.completed());
    assert_eq!(todo.priority(), Priority::High);
    assert_eq!(todo.title().as_str(), "ship the release");
    assert!(!todo.id().as_str().is_empty());
}

#[rstest]
fn generated_ids_are_unique() {
    let a = TodoId::generate();
    let b = TodoId::generate();
    assert_ne!(a, b);
}

#[rstest]
fn mutators_leave_id_and_timestamp_untouched(clock: DefaultClock) {
    let title = TodoTitle::new("archive inbox").expect("valid title");
    let mut todo = Todo::new(title, Priority::Medium, false, &clock);
    let id = todo.id().clone();
    let created_at = todo.created_at();

    todo.rename(TodoTitle::new("archive old inbox").expect("valid title"));
    todo.set_priority(Priority::Low);
    todo.set_completed(true);

    assert_eq!(todo.id(), &id);
    assert_eq!(todo.created_at(), created_at);
    assert_eq!(todo.title().as_str(), "archive old inbox");
    assert_eq!(todo.priority(), Priority::Low);
    assert!(todo.completed());
}
