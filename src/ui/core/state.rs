//! Widget state for the todo entry screen.
//!
//! All mutation goes through the methods below and happens on the UI loop.
//! Notifications run elsewhere and only come back as
//! [`TodoState::record_notification_outcome`] calls.

use crate::constants::ERROR_NOTIFICATION_FAILED;

/// Monotonic identifier handed out to every accepted submission, starting at 1
pub type SubmissionId = u64;

/// A value that was appended and now needs to be announced
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Submission {
    pub id: SubmissionId,
    pub value: String,
}

/// How a notification resolved
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NotificationOutcome {
    Succeeded,
    Failed(String),
}

#[derive(Debug, Clone)]
pub struct TodoState {
    current_value: String,
    entries: Vec<String>,
    /// Empty means no error
    error_message: String,
    next_submission_id: SubmissionId,
    last_succeeded_id: Option<SubmissionId>,
    ignore_stale_failures: bool,
}

impl Default for TodoState {
    fn default() -> Self {
        Self::new(true)
    }
}

impl TodoState {
    pub fn new(ignore_stale_failures: bool) -> Self {
        Self {
            current_value: String::new(),
            entries: Vec::new(),
            error_message: String::new(),
            next_submission_id: 1,
            last_succeeded_id: None,
            ignore_stale_failures,
        }
    }

    pub fn current_value(&self) -> &str {
        &self.current_value
    }

    pub fn entries(&self) -> &[String] {
        &self.entries
    }

    pub fn error_message(&self) -> &str {
        &self.error_message
    }

    pub fn has_error(&self) -> bool {
        !self.error_message.is_empty()
    }

    /// Replace the input text verbatim
    pub fn update_current_value(&mut self, new_text: impl Into<String>) {
        self.current_value = new_text.into();
    }

    /// Whether the Add action is currently enabled
    pub fn can_submit(&self) -> bool {
        !self.current_value.trim().is_empty()
    }

    /// Append the untrimmed input, clear it, and return what must be announced.
    ///
    /// Returns `None` without touching anything while the input is blank.
    pub fn submit(&mut self) -> Option<Submission> {
        if !self.can_submit() {
            return None;
        }

        let value = std::mem::take(&mut self.current_value);
        self.entries.push(value.clone());

        let id = self.next_submission_id;
        self.next_submission_id += 1;

        Some(Submission { id, value })
    }

    /// Apply the resolution of the notification for submission `id`.
    ///
    /// Success never clears an existing error. Returns whether the state changed.
    pub fn record_notification_outcome(&mut self, id: SubmissionId, outcome: NotificationOutcome) -> bool {
        match outcome {
            NotificationOutcome::Succeeded => {
                if self.last_succeeded_id.map_or(true, |last| id > last) {
                    self.last_succeeded_id = Some(id);
                }
                false
            }
            NotificationOutcome::Failed(reason) => {
                if self.ignore_stale_failures && self.last_succeeded_id.is_some_and(|last| id < last) {
                    log::debug!("Ignoring stale failure for notification #{}: {}", id, reason);
                    return false;
                }
                self.error_message = ERROR_NOTIFICATION_FAILED.to_string();
                true
            }
        }
    }
}
