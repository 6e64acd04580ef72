use std::time::Duration;

use chrono::Utc;

use herald_common::types::RecordSelection;
use herald_common::{HeraldError, Result};
use herald_engine::{format_status, select_records, validate_response};
use herald_notifier::{Messenger, Notifier, NotifyOutcome};

use crate::client::PracticumClient;

/// What a single poll cycle ended with.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CycleOutcome {
    /// Every stage succeeded; `delivered` new verdicts reached the chat.
    Completed { delivered: usize },
    /// A recoverable error ended the cycle; the cursor was not moved.
    Failed,
}

/// Polls the homework API on a fixed interval and relays new verdicts.
pub struct StatusPoller<M> {
    client: PracticumClient,
    notifier: Notifier<M>,
    poll_interval: Duration,
    selection: RecordSelection,
    /// `from_date` for the next request. Pinned at construction and moved
    /// only by a successful cycle.
    cursor: i64,
}

impl<M: Messenger> StatusPoller<M> {
    pub fn new(client: PracticumClient, notifier: Notifier<M>, poll_interval: Duration) -> Self {
        Self {
            client,
            notifier,
            poll_interval,
            selection: RecordSelection::default(),
            cursor: Utc::now().timestamp(),
        }
    }

    pub fn with_selection(mut self, selection: RecordSelection) -> Self {
        self.selection = selection;
        self
    }

    /// Start polling from a fixed timestamp instead of the construction time.
    pub fn with_cursor(mut self, cursor: Option<i64>) -> Self {
        if let Some(cursor) = cursor {
            self.cursor = cursor;
        }
        self
    }

    pub fn cursor(&self) -> i64 {
        self.cursor
    }

    pub fn notifier(&self) -> &Notifier<M> {
        &self.notifier
    }

    /// Run the polling loop. Only returns on a fatal error.
    pub async fn run(&mut self) -> Result<()> {
        tracing::info!(
            cursor = self.cursor,
            poll_interval_secs = self.poll_interval.as_secs(),
            selection = ?self.selection,
            "Homework status poller started"
        );

        loop {
            self.run_cycle().await?;
            tokio::time::sleep(self.poll_interval).await;
        }
    }

    /// Run one fetch → validate → format → notify cycle.
    ///
    /// Recoverable errors are logged, reported to the chat on a best-effort
    /// basis and turned into [`CycleOutcome::Failed`]. Fatal errors propagate.
    pub async fn run_cycle(&mut self) -> Result<CycleOutcome> {
        match self.poll_once().await {
            Ok((delivered, current_date)) => {
                match current_date {
                    Some(next) => {
                        tracing::debug!(from = self.cursor, to = next, "Cursor advanced");
                        self.cursor = next;
                    }
                    None => {
                        tracing::warn!(
                            cursor = self.cursor,
                            "API response has no current_date, cursor kept"
                        );
                    }
                }
                self.notifier.clear_failure();
                Ok(CycleOutcome::Completed { delivered })
            }
            Err(e) if e.is_fatal() => Err(e),
            Err(e) => {
                tracing::error!(
                    error = %e,
                    kind = e.kind(),
                    cursor = self.cursor,
                    "Poll cycle failed"
                );
                let report = failure_report(&e);
                self.notifier.report_failure(&report).await;
                Ok(CycleOutcome::Failed)
            }
        }
    }

    async fn poll_once(&mut self) -> Result<(usize, Option<i64>)> {
        let payload = self.client.fetch(self.cursor).await?;
        let response = validate_response(&payload)?;

        let messages = select_records(self.selection, &response.homeworks)
            .into_iter()
            .map(format_status)
            .collect::<Result<Vec<_>>>()?;

        let mut delivered = 0;
        for message in &messages {
            if self.notifier.notify(message).await? == NotifyOutcome::Delivered {
                delivered += 1;
            }
        }

        Ok((delivered, response.current_date))
    }
}

/// Text sent to the chat when a cycle fails.
pub fn failure_report(error: &HeraldError) -> String {
    format!("Сбой в работе телеграмм-бота: {error}")
}
