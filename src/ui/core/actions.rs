use super::state::SubmissionId;

#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    // Input editing
    InputChanged(String),

    // Submit workflow
    Submit,
    NotificationSucceeded(SubmissionId),
    NotificationFailed { id: SubmissionId, reason: String },

    // App control
    Quit,
    None,
}
