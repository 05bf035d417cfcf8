//! Summary gateway port for remote summary generation and relay.

use async_trait::async_trait;
use serde::Deserialize;

/// Structured result of a summary request.
///
/// The gateway contract never raises: every failure shape is mapped into
/// `success: false` plus a diagnostic message. The shape matches the remote
/// procedure's response body, which decodes directly into this type.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct SummaryOutcome {
    /// Whether the summary was generated and relayed.
    pub success: bool,
    /// The summary text on success, a diagnostic otherwise.
    pub message: String,
}

impl SummaryOutcome {
    /// Builds a successful outcome carrying the summary text.
    #[must_use]
    pub fn sent(message: impl Into<String>) -> Self {
        Self {
            success: true,
            message: message.into(),
        }
    }

    /// Builds a failed outcome carrying a diagnostic.
    #[must_use]
    pub fn failed(message: impl Into<String>) -> Self {
        Self {
            success: false,
            message: message.into(),
        }
    }
}

/// Contract for generating a pending-work summary and relaying it to the
/// configured chat channel.
#[async_trait]
pub trait SummaryGateway: Send + Sync {
    /// Invokes the summary procedure.
    ///
    /// Takes no input: the remote side fetches the current pending todos,
    /// composes the summary, and dispatches it itself. Always returns a
    /// structured outcome, even when configuration is missing or the remote
    /// call fails.
    async fn generate_and_send(&self) -> SummaryOutcome;
}
