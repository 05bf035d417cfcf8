//! Local summary gateway composing the summary from repository contents.

use async_trait::async_trait;
use std::sync::Arc;
use tracing::warn;

use crate::todo::{
    domain::{Priority, Todo, partition},
    ports::{SummaryGateway, SummaryOutcome, TodoRepository},
};

/// Summary gateway that composes the summary text locally.
///
/// Stands in for the remote summarization procedure: it fetches the current
/// todos from the repository, counts pending work, and produces the same
/// wording the remote side would relay. Nothing is dispatched anywhere; the
/// outcome simply carries the text.
#[derive(Debug, Clone)]
pub struct LocalSummaryGateway<R> {
    repository: Arc<R>,
}

impl<R> LocalSummaryGateway<R>
where
    R: TodoRepository,
{
    /// Creates a gateway reading from the given repository.
    #[must_use]
    pub const fn new(repository: Arc<R>) -> Self {
        Self { repository }
    }
}

#[async_trait]
impl<R> SummaryGateway for LocalSummaryGateway<R>
where
    R: TodoRepository,
{
    async fn generate_and_send(&self) -> SummaryOutcome {
        match self.repository.load_all().await {
            Ok(todos) => SummaryOutcome::sent(compose_summary(&todos)),
            Err(err) => {
                warn!(error = %err, "summary generation failed: could not load todos");
                SummaryOutcome::failed(format!("could not load todos for summary: {err}"))
            }
        }
    }
}

/// Composes the pending-work summary text.
fn compose_summary(todos: &[Todo]) -> String {
    let (pending, _completed) = partition(todos);
    if pending.is_empty() {
        return "Congratulations! You have completed all your tasks. Time to set new goals."
            .to_owned();
    }

    let high_priority = pending
        .iter()
        .filter(|todo| todo.priority() == Priority::High)
        .count();
    let tail = if high_priority > 0 {
        format!("{high_priority} of these are high priority and should be addressed first.")
    } else {
        "None of them are high priority, but try to complete them soon.".to_owned()
    };
    format!("You have {} pending tasks. {tail}", pending.len())
}

#[cfg(test)]
mod tests {
    use super::compose_summary;
    use crate::todo::domain::{Priority, Todo, TodoTitle};
    use mockable::DefaultClock;

    fn todo(title: &str, priority: Priority, completed: bool) -> Todo {
        let title = TodoTitle::new(title).expect("valid title");
        Todo::new(title, priority, completed, &DefaultClock)
    }

    #[test]
    fn compose_summary_congratulates_when_nothing_pending() {
        let todos = vec![todo("ship release", Priority::High, true)];
        assert_eq!(
            compose_summary(&todos),
            "Congratulations! You have completed all your tasks. Time to set new goals."
        );
    }

    #[test]
    fn compose_summary_counts_high_priority_pending() {
        let todos = vec![
            todo("ship release", Priority::High, false),
            todo("water plants", Priority::Low, false),
            todo("archive inbox", Priority::Medium, true),
        ];
        assert_eq!(
            compose_summary(&todos),
            "You have 2 pending tasks. 1 of these are high priority and should be addressed first."
        );
    }

    #[test]
    fn compose_summary_notes_absence_of_high_priority() {
        let todos = vec![todo("water plants", Priority::Low, false)];
        assert_eq!(
            compose_summary(&todos),
            "You have 1 pending tasks. None of them are high priority, but try to complete them soon."
        );
    }
}
