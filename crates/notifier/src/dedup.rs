//! Dedup/notifier: suppresses repeats of the last delivered message.
//!
//! State is in-memory only. A restart forgets the last message, so the first
//! verdict after a restart is delivered again.

use herald_common::Result;

use crate::telegram::Messenger;

/// Result of a [`Notifier::notify`] call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotifyOutcome {
    /// The message was new and has been delivered.
    Delivered,
    /// The message equals the last delivered one; nothing was sent.
    Suppressed,
    /// Best-effort delivery failed and was swallowed.
    Failed,
}

/// Delivers verdicts and error reports to a single chat.
pub struct Notifier<M> {
    messenger: M,
    chat_id: String,
    /// Last verdict that reached the chat.
    last_notified: Option<String>,
    /// Last error report that reached the chat.
    last_failure: Option<String>,
}

impl<M: Messenger> Notifier<M> {
    pub fn new(messenger: M, chat_id: impl Into<String>) -> Self {
        Self {
            messenger,
            chat_id: chat_id.into(),
            last_notified: None,
            last_failure: None,
        }
    }

    /// Deliver `message` unless it equals the last delivered verdict.
    ///
    /// State is updated only after a successful send, so a failed delivery
    /// leaves `last_notified` untouched and the same message counts as new on
    /// the next cycle.
    pub async fn notify(&mut self, message: &str) -> Result<NotifyOutcome> {
        if self.last_notified.as_deref() == Some(message) {
            tracing::debug!("No new homework statuses");
            return Ok(NotifyOutcome::Suppressed);
        }

        if let Err(e) = self.messenger.send_message(&self.chat_id, message).await {
            tracing::error!(error = %e, text = message, "Failed to deliver notification");
            return Err(e);
        }

        tracing::info!(text = message, "Notification delivered");
        self.last_notified = Some(message.to_string());
        Ok(NotifyOutcome::Delivered)
    }

    /// Best-effort delivery of an error report. Never fails.
    ///
    /// Repeats of the last delivered report are suppressed until
    /// [`Notifier::clear_failure`] is called.
    pub async fn report_failure(&mut self, report: &str) -> NotifyOutcome {
        if self.last_failure.as_deref() == Some(report) {
            tracing::debug!("Error report already delivered, skipping");
            return NotifyOutcome::Suppressed;
        }

        match self.messenger.send_message(&self.chat_id, report).await {
            Ok(()) => {
                tracing::info!(report, "Error report delivered");
                self.last_failure = Some(report.to_string());
                NotifyOutcome::Delivered
            }
            Err(e) => {
                tracing::error!(error = %e, report, "Failed to deliver error report");
                NotifyOutcome::Failed
            }
        }
    }

    /// Forget the last error report after a healthy cycle.
    pub fn clear_failure(&mut self) {
        self.last_failure = None;
    }

    pub fn last_notified(&self) -> Option<&str> {
        self.last_notified.as_deref()
    }

    pub fn messenger(&self) -> &M {
        &self.messenger
    }
}
