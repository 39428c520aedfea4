//! Outbound notification layer.
//!
//! Every added todo is announced to a collaborator service. The widget only
//! cares whether that announcement succeeded, so notifiers expose a single
//! fire-and-forget style call and a uniform error type.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

pub mod http;

pub use http::HttpNotifier;

/// Common error types for notification delivery.
#[derive(Debug, thiserror::Error)]
pub enum NotifyError {
    #[error("Transport error: {0}")]
    Transport(String),

    #[error("Endpoint rejected notification with status {0}")]
    Status(u16),

    #[error("Failed to encode notification: {0}")]
    Serialize(String),
}

/// Body sent for each added todo.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TodoPayload {
    pub todo: String,
}

impl TodoPayload {
    pub fn new(todo: impl Into<String>) -> Self {
        Self { todo: todo.into() }
    }

    /// Encode the payload as the JSON text put on the wire
    pub fn to_json(&self) -> Result<String, NotifyError> {
        serde_json::to_string(self).map_err(|e| NotifyError::Serialize(e.to_string()))
    }
}

/// Notifier trait that all notification transports must implement.
#[async_trait]
pub trait Notifier: Send + Sync {
    /// Announce that `todo` was added to the list.
    async fn notify_added(&self, todo: &str) -> Result<(), NotifyError>;
}
