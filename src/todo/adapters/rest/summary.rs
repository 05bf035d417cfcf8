//! REST summary gateway invoking the remote summarization procedure.

use super::config::RemoteConfig;
use crate::todo::ports::{SummaryGateway, SummaryOutcome};
use async_trait::async_trait;
use reqwest::Client;
use serde_json::json;
use tracing::{error, warn};

/// Summary gateway backed by a remote function endpoint.
///
/// Invokes `/functions/v1/generate_summary` with an empty payload; the
/// remote side fetches the pending todos, composes the summary, and relays
/// it to the chat channel. Every failure shape — missing configuration,
/// transport errors, non-success statuses, malformed bodies — is mapped to a
/// failed [`SummaryOutcome`]; nothing escapes this boundary.
#[derive(Debug, Clone)]
pub struct RestSummaryGateway {
    remote: Option<(Client, RemoteConfig)>,
}

impl RestSummaryGateway {
    /// Creates a gateway for the given remote endpoint.
    #[must_use]
    pub fn new(config: RemoteConfig) -> Self {
        Self {
            remote: Some((Client::new(), config)),
        }
    }

    /// Creates a gateway with no remote endpoint; every request fails
    /// gracefully.
    #[must_use]
    pub const fn disabled() -> Self {
        Self { remote: None }
    }

    /// Creates a gateway from the process environment, disabled when the
    /// connection parameters are absent.
    #[must_use]
    pub fn from_env() -> Self {
        RemoteConfig::from_env().map_or_else(Self::disabled, Self::new)
    }

    async fn invoke(&self, client: &Client, config: &RemoteConfig) -> SummaryOutcome {
        let url = format!("{}/functions/v1/generate_summary", config.base_url());
        let response = match client
            .post(url)
            .header("apikey", config.api_key())
            .bearer_auth(config.api_key())
            .json(&json!({}))
            .send()
            .await
        {
            Ok(response) => response,
            Err(err) => {
                error!(error = %err, "summary request failed");
                return SummaryOutcome::failed(format!("summary request failed: {err}"));
            }
        };

        let status = response.status();
        if !status.is_success() {
            error!(status = status.as_u16(), "summary endpoint rejected request");
            return SummaryOutcome::failed(format!(
                "summary endpoint returned status {}",
                status.as_u16()
            ));
        }

        match response.json::<SummaryOutcome>().await {
            Ok(outcome) => outcome,
            Err(err) => {
                error!(error = %err, "summary response could not be decoded");
                SummaryOutcome::failed(format!("summary response could not be decoded: {err}"))
            }
        }
    }
}

#[async_trait]
impl SummaryGateway for RestSummaryGateway {
    async fn generate_and_send(&self) -> SummaryOutcome {
        match &self.remote {
            Some((client, config)) => self.invoke(client, config).await,
            None => {
                warn!("summary request rejected: remote endpoint is not configured");
                SummaryOutcome::failed("summary endpoint is not configured")
            }
        }
    }
}
