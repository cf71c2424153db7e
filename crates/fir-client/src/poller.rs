//! Submit-then-poll driver for asynchronous analysis jobs.
//!
//! A job is submitted once, then its status is checked on a fixed interval
//! until it reaches a terminal state or the wall-clock ceiling (measured from
//! submission) elapses:
//!
//! ```text
//!            ┌──────── tick ────────┐
//!            ▼                      │
//! submit → Pending ─────────────────┘
//!            ├── done + result ──→ Done
//!            ├── error ──────────→ Failed
//!            └── ceiling ────────→ TimedOut
//! ```
//!
//! `done` without a result is treated as still pending. Cancellation through
//! the caller's [`CancellationToken`] stops polling immediately; the remote
//! job is left running.

use std::future::Future;
use std::time::Duration;

use fir_config::PollConfig;
use fir_core::entities::JobReport;
use fir_core::enums::JobStatus;
use serde_json::Value;
use tokio::time::{Instant, MissedTickBehavior, interval, sleep_until};
use tokio_util::sync::CancellationToken;

use crate::{ApiClient, error::ApiError};

/// The two calls the poller needs from the analysis service.
pub trait AnalysisJobs {
    /// Start an analysis of a staged file, returning the job id.
    fn submit(&self, file_path: &str) -> impl Future<Output = Result<String, ApiError>> + Send;

    /// Non-blocking status check.
    fn status(&self, job_id: &str) -> impl Future<Output = Result<JobReport, ApiError>> + Send;
}

impl AnalysisJobs for ApiClient {
    async fn submit(&self, file_path: &str) -> Result<String, ApiError> {
        Ok(self.submit_analysis(file_path).await?.job_id)
    }

    async fn status(&self, job_id: &str) -> Result<JobReport, ApiError> {
        self.analysis_status(job_id).await
    }
}

/// Poller state after one observation.
#[derive(Debug, Clone, PartialEq)]
pub enum PollState {
    Pending,
    Done(Value),
    Failed(String),
    TimedOut,
}

impl PollState {
    /// Interpret one status report.
    #[must_use]
    pub fn from_report(report: JobReport) -> Self {
        match report.status {
            JobStatus::Pending => Self::Pending,
            JobStatus::Done => match report.result {
                Some(result) => Self::Done(result),
                None => {
                    tracing::debug!("job reported done without a result; still waiting");
                    Self::Pending
                }
            },
            JobStatus::Error => Self::Failed(report.error_message()),
        }
    }

    #[must_use]
    pub const fn is_terminal(&self) -> bool {
        !matches!(self, Self::Pending)
    }
}

/// A job that finished with a result.
#[derive(Debug, Clone, PartialEq)]
pub struct CompletedJob {
    pub job_id: String,
    pub result: Value,
    /// Status checks issued, including the final one.
    pub polls: u32,
    /// Time from submission to the final status check.
    pub elapsed: Duration,
}

/// Polling policy for analysis jobs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct JobPoller {
    interval: Duration,
    timeout: Duration,
    max_transient_errors: u32,
}

impl Default for JobPoller {
    fn default() -> Self {
        Self::from_config(&PollConfig::default())
    }
}

impl JobPoller {
    #[must_use]
    pub const fn new(interval: Duration, timeout: Duration) -> Self {
        Self {
            interval,
            timeout,
            max_transient_errors: 0,
        }
    }

    #[must_use]
    pub const fn from_config(config: &PollConfig) -> Self {
        Self {
            interval: config.interval(),
            timeout: config.timeout(),
            max_transient_errors: config.max_transient_errors,
        }
    }

    /// Tolerate up to `max` consecutive transport failures while polling.
    #[must_use]
    pub const fn with_max_transient_errors(mut self, max: u32) -> Self {
        self.max_transient_errors = max;
        self
    }

    #[must_use]
    pub const fn interval(&self) -> Duration {
        self.interval
    }

    #[must_use]
    pub const fn timeout(&self) -> Duration {
        self.timeout
    }

    /// Submit `file_path` for analysis and poll until the job completes.
    ///
    /// # Errors
    ///
    /// - [`ApiError::JobFailed`] with the server's message when the job errors
    /// - [`ApiError::JobTimedOut`] when the ceiling elapses first
    /// - [`ApiError::Cancelled`] when `cancel` fires
    /// - any submission or non-transient status error
    pub async fn run<J: AnalysisJobs>(
        &self,
        jobs: &J,
        file_path: &str,
        cancel: &CancellationToken,
    ) -> Result<CompletedJob, ApiError> {
        let started = Instant::now();
        let job_id = tokio::select! {
            biased;
            () = cancel.cancelled() => {
                return Err(ApiError::Cancelled { job_id: String::new() });
            }
            submitted = jobs.submit(file_path) => submitted?,
        };
        tracing::info!(job_id, file_path, "analysis job submitted");
        self.wait(jobs, &job_id, started, cancel).await
    }

    /// Poll an already-submitted job. `started` is the submission instant the
    /// ceiling is measured from.
    ///
    /// # Errors
    ///
    /// Same as [`Self::run`], minus submission errors.
    pub async fn wait<J: AnalysisJobs>(
        &self,
        jobs: &J,
        job_id: &str,
        started: Instant,
        cancel: &CancellationToken,
    ) -> Result<CompletedJob, ApiError> {
        let deadline = started + self.timeout;
        let mut ticker = interval(self.interval);
        ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);

        let mut polls = 0_u32;
        let mut transient_errors = 0_u32;

        loop {
            // The deadline is checked ahead of the tick, so a check due at the
            // ceiling never runs.
            tokio::select! {
                biased;
                () = cancel.cancelled() => return Err(cancelled(job_id)),
                () = sleep_until(deadline) => {
                    return self.settle(job_id, PollState::TimedOut, polls, started);
                }
                _ = ticker.tick() => {}
            }

            polls += 1;
            let report = tokio::select! {
                biased;
                () = cancel.cancelled() => return Err(cancelled(job_id)),
                () = sleep_until(deadline) => {
                    return self.settle(job_id, PollState::TimedOut, polls, started);
                }
                report = jobs.status(job_id) => report,
            };

            let state = match report {
                Ok(report) => {
                    transient_errors = 0;
                    PollState::from_report(report)
                }
                Err(error)
                    if error.is_transient() && transient_errors < self.max_transient_errors =>
                {
                    transient_errors += 1;
                    tracing::warn!(
                        job_id,
                        attempt = transient_errors,
                        %error,
                        "status check failed; retrying on next tick"
                    );
                    PollState::Pending
                }
                Err(error) => return Err(error),
            };

            tracing::debug!(job_id, polls, ?state, "analysis job status");
            if state.is_terminal() {
                return self.settle(job_id, state, polls, started);
            }
        }
    }

    fn settle(
        &self,
        job_id: &str,
        state: PollState,
        polls: u32,
        started: Instant,
    ) -> Result<CompletedJob, ApiError> {
        let elapsed = started.elapsed();
        match state {
            PollState::Done(result) => {
                tracing::info!(job_id, polls, ?elapsed, "analysis job done");
                Ok(CompletedJob {
                    job_id: job_id.to_string(),
                    result,
                    polls,
                    elapsed,
                })
            }
            PollState::Failed(message) => {
                tracing::warn!(job_id, %message, "analysis job failed");
                Err(ApiError::JobFailed {
                    job_id: job_id.to_string(),
                    message,
                })
            }
            PollState::TimedOut | PollState::Pending => {
                tracing::warn!(
                    job_id,
                    polls,
                    timeout_secs = self.timeout.as_secs(),
                    "analysis job timed out"
                );
                Err(ApiError::JobTimedOut {
                    job_id: job_id.to_string(),
                    elapsed_secs: elapsed.as_secs(),
                })
            }
        }
    }
}

fn cancelled(job_id: &str) -> ApiError {
    tracing::info!(job_id, "analysis polling cancelled");
    ApiError::Cancelled {
        job_id: job_id.to_string(),
    }
}
