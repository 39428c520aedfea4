//! HTTP notifier implementation.

use super::{Notifier, NotifyError, TodoPayload};
use crate::config::NotifyConfig;
use anyhow::{Context, Result};
use async_trait::async_trait;
use reqwest::{header, Client, Url};
use std::time::Duration;

/// Sends a `PUT` with `{"todo": ...}` to a fixed endpoint for each added todo.
#[derive(Debug, Clone)]
pub struct HttpNotifier {
    endpoint: Url,
    http: Client,
}

impl HttpNotifier {
    /// Create a notifier for `endpoint` with a per-request timeout.
    pub fn new(endpoint: &str, timeout: Duration) -> Result<Self> {
        let endpoint = Url::parse(endpoint).with_context(|| format!("Invalid notify endpoint '{}'", endpoint))?;
        let http = Client::builder()
            .timeout(timeout)
            .user_agent(concat!("todolist/", env!("CARGO_PKG_VERSION")))
            .build()
            .context("Failed to build HTTP client")?;

        Ok(Self { endpoint, http })
    }

    pub fn from_config(config: &NotifyConfig) -> Result<Self> {
        Self::new(&config.endpoint, config.timeout())
    }

    pub fn endpoint(&self) -> &Url {
        &self.endpoint
    }
}

#[async_trait]
impl Notifier for HttpNotifier {
    async fn notify_added(&self, todo: &str) -> Result<(), NotifyError> {
        let body = TodoPayload::new(todo).to_json()?;

        let response = self
            .http
            .put(self.endpoint.clone())
            .header(header::CONTENT_TYPE, "application/json")
            .body(body)
            .send()
            .await
            .map_err(|e| NotifyError::Transport(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            return Err(NotifyError::Status(status.as_u16()));
        }

        Ok(())
    }
}
