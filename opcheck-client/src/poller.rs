//! Operation poller
//!
//! Waits for an operation to leave its initial status. The poller fetches the
//! status up to `max_retries` times, sleeping `retry_delay` between attempts,
//! and returns the first snapshot whose status differs from the initial one.
//!
//! A `FAILED` snapshot is a normal result here. Only an exhausted budget is
//! reported as `PollError::Timeout`, and fetch errors are never retried.

use async_trait::async_trait;
use opcheck_core::domain::operation::{OperationStatus, TaskStatus};
use std::time::Duration;
use thiserror::Error;
use tokio::time;
use tracing::{debug, info, warn};

use crate::OperationsClient;
use crate::error::ClientError;

/// Source of operation status snapshots
#[async_trait]
pub trait StatusSource: Send + Sync {
    /// Fetches the current status of `task_id`
    async fn fetch_status(&self, task_id: &str) -> Result<OperationStatus, ClientError>;
}

#[async_trait]
impl StatusSource for OperationsClient {
    async fn fetch_status(&self, task_id: &str) -> Result<OperationStatus, ClientError> {
        self.get_operation(task_id).await
    }
}

/// Retry budget for a poll
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PollConfig {
    /// Total number of fetches, including the first
    pub max_retries: u32,
    /// Pause between two consecutive fetches
    pub retry_delay: Duration,
}

impl PollConfig {
    pub fn new(max_retries: u32, retry_delay: Duration) -> Self {
        Self {
            max_retries,
            retry_delay,
        }
    }
}

impl Default for PollConfig {
    fn default() -> Self {
        Self::new(10, Duration::from_secs(3))
    }
}

/// Errors that end a poll without a settled status
#[derive(Debug, Error)]
pub enum PollError {
    /// Every attempt returned the initial status
    #[error("operation still {initial_status} after {attempts} attempt(s)")]
    Timeout {
        initial_status: TaskStatus,
        attempts: u32,
    },

    /// Fetching the status failed; the poll was aborted on that attempt
    #[error(transparent)]
    Client(#[from] ClientError),

    /// The poll was asked to do something it cannot
    #[error("invalid poll input: {0}")]
    InvalidInput(String),
}

/// Polls a status source until an operation settles
///
/// The source is borrowed; the poller holds no state between calls.
pub struct OperationPoller<'a, S: ?Sized> {
    source: &'a S,
    config: PollConfig,
}

impl<'a, S: StatusSource + ?Sized> OperationPoller<'a, S> {
    /// Creates a new poller over `source`
    pub fn new(source: &'a S, config: PollConfig) -> Self {
        Self { source, config }
    }

    /// Polls `task_id` until its status differs from `initial_status`
    ///
    /// Returns the first differing snapshot. Sleeps between attempts but not
    /// after the last one, so the worst case costs
    /// `(max_retries - 1) * retry_delay`.
    pub async fn poll(
        &self,
        task_id: &str,
        initial_status: &TaskStatus,
    ) -> Result<OperationStatus, PollError> {
        if task_id.is_empty() {
            return Err(PollError::InvalidInput("task_id cannot be empty".to_string()));
        }
        if self.config.max_retries == 0 {
            return Err(PollError::InvalidInput(
                "max_retries must be greater than 0".to_string(),
            ));
        }

        let max_retries = self.config.max_retries;

        for attempt in 1..=max_retries {
            let snapshot = self.source.fetch_status(task_id).await?;

            if snapshot.has_settled_from(initial_status) {
                info!(
                    "Operation {} settled as {} on attempt {}/{}",
                    task_id, snapshot.status, attempt, max_retries
                );
                return Ok(snapshot);
            }

            debug!(
                "Operation {} still {} (attempt {}/{})",
                task_id, initial_status, attempt, max_retries
            );

            if attempt < max_retries {
                time::sleep(self.config.retry_delay).await;
            }
        }

        warn!(
            "Operation {} did not leave {} after {} attempt(s)",
            task_id, initial_status, max_retries
        );

        Err(PollError::Timeout {
            initial_status: initial_status.clone(),
            attempts: max_retries,
        })
    }
}
