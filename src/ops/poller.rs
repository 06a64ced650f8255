//! Fixed-interval waiting on asynchronous operations
//!
//! Operations run for minutes to hours, so a constant interval is enough.
//! Every poll is a fresh query; a failed poll ends the wait.

use std::time::Duration;

use log::debug;
use tokio::time::Instant;

use crate::client::OperationApi;
use crate::client::models::{OperationHandle, OperationState, OperationStatus};
use crate::error::{ApiError, PollError, Result};

/// Default interval between status queries
pub const DEFAULT_POLL_INTERVAL: Duration = Duration::from_secs(10);

/// Wait parameters
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PollOptions {
    pub interval: Duration,
    pub timeout: Option<Duration>,
}

impl Default for PollOptions {
    fn default() -> Self {
        Self {
            interval: DEFAULT_POLL_INTERVAL,
            timeout: None,
        }
    }
}

impl PollOptions {
    pub fn new(interval: Duration, timeout: Option<Duration>) -> Self {
        Self { interval, timeout }
    }
}

/// Polls an operation until it reaches a terminal state.
pub struct Poller<'a, C: OperationApi + ?Sized> {
    client: &'a C,
    options: PollOptions,
}

impl<'a, C: OperationApi + ?Sized> Poller<'a, C> {
    pub fn new(client: &'a C, options: PollOptions) -> Self {
        Self { client, options }
    }

    /// Wait for `handle` to finish.
    pub async fn await_completion(&self, handle: &OperationHandle) -> Result<OperationStatus> {
        self.await_completion_with(handle, |_, _| {}).await
    }

    /// Wait for `handle` to finish, reporting every observed status.
    ///
    /// `observe` receives the status and the 1-based poll number.
    ///
    /// - `Ready` returns the status
    /// - `Failed` returns `PollError::Failed` (no retry)
    /// - `Unknown` returns `ApiError::Protocol`
    /// - once the timeout passes, returns `PollError::Timeout` without polling again;
    ///   the remote operation keeps running. A poll due exactly at the deadline still runs.
    pub async fn await_completion_with<F>(
        &self,
        handle: &OperationHandle,
        mut observe: F,
    ) -> Result<OperationStatus>
    where
        F: FnMut(&OperationStatus, u32),
    {
        let started = Instant::now();
        // A timeout too large to represent never expires
        let deadline = self.options.timeout.and_then(|t| started.checked_add(t));
        let mut polls: u32 = 0;

        loop {
            let status = self.client.operation_status(handle).await?;
            polls += 1;
            debug!(
                "{} {} poll #{}: {} ({})",
                handle.kind,
                handle.id,
                polls,
                status.state,
                status.raw_or_missing()
            );
            observe(&status, polls);

            match status.state {
                OperationState::Ready => return Ok(status),
                OperationState::Failed => {
                    return Err(PollError::Failed {
                        kind: handle.kind,
                        id: handle.id.clone(),
                        status: status.raw_or_missing().to_string(),
                    }
                    .into());
                }
                OperationState::Unknown => {
                    return Err(ApiError::Protocol(format!(
                        "{} {} reported unrecognized status '{}'",
                        handle.kind,
                        handle.id,
                        status.raw_or_missing()
                    ))
                    .into());
                }
                OperationState::Pending | OperationState::Running => {}
            }

            let next_poll = Instant::now().checked_add(self.options.interval);
            match deadline {
                Some(deadline) if next_poll.is_none_or(|next| next > deadline) => {
                    tokio::time::sleep_until(deadline).await;
                    return Err(PollError::Timeout {
                        kind: handle.kind,
                        id: handle.id.clone(),
                        elapsed: started.elapsed(),
                    }
                    .into());
                }
                _ => tokio::time::sleep(self.options.interval).await,
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::client::MockZnClient;
    use crate::client::models::OperationKind;
    use crate::error::Error;

    const INTERVAL: Duration = Duration::from_secs(10);

    fn statuses(states: &[OperationState]) -> Vec<OperationStatus> {
        states.iter().map(|s| OperationStatus::from(*s)).collect()
    }

    #[tokio::test(start_paused = true)]
    async fn test_pending_running_ready_takes_four_polls_three_sleeps() {
        use OperationState::*;
        let mock = MockZnClient::new()
            .with_statuses(statuses(&[Pending, Running, Running, Ready]))
            .await;
        let poller = Poller::new(&mock, PollOptions::new(INTERVAL, None));

        let started = Instant::now();
        let mut seen = Vec::new();
        let status = poller
            .await_completion_with(&OperationHandle::job("j-1"), |s, n| seen.push((s.state, n)))
            .await
            .unwrap();

        assert_eq!(status.state, Ready);
        assert_eq!(mock.call_counts().await.operation_status, 4);
        assert_eq!(started.elapsed(), INTERVAL * 3);
        assert_eq!(
            seen,
            vec![(Pending, 1), (Running, 2), (Running, 3), (Ready, 4)]
        );
    }

    #[tokio::test(start_paused = true)]
    async fn test_timeout_stops_polling() {
        let mock = MockZnClient::new()
            .with_status_fallback(OperationState::Running.into())
            .await;
        let poller = Poller::new(&mock, PollOptions::new(INTERVAL, Some(Duration::from_secs(25))));

        let started = Instant::now();
        let err = poller
            .await_completion(&OperationHandle::job("j-2"))
            .await
            .unwrap_err();

        match err {
            Error::Poll(PollError::Timeout { id, elapsed, .. }) => {
                assert_eq!(id, "j-2");
                assert_eq!(elapsed, Duration::from_secs(25));
            }
            other => panic!("Expected timeout, got {:?}", other),
        }
        // Polls at t=0, 10, 20; the next one would land past the deadline
        assert_eq!(mock.call_counts().await.operation_status, 3);
        assert_eq!(started.elapsed(), Duration::from_secs(25));

        tokio::time::advance(Duration::from_secs(60)).await;
        assert_eq!(mock.call_counts().await.operation_status, 3);
    }

    #[tokio::test(start_paused = true)]
    async fn test_poll_due_at_deadline_still_runs() {
        use OperationState::*;
        let mock = MockZnClient::new()
            .with_statuses(statuses(&[Running, Running, Ready]))
            .await;
        let poller = Poller::new(&mock, PollOptions::new(INTERVAL, Some(INTERVAL * 2)));

        let status = poller
            .await_completion(&OperationHandle::job("j-7"))
            .await
            .unwrap();

        assert_eq!(status.state, Ready);
        assert_eq!(mock.call_counts().await.operation_status, 3);
    }

    #[tokio::test(start_paused = true)]
    async fn test_huge_timeout_waits_without_deadline() {
        use OperationState::*;
        let mock = MockZnClient::new()
            .with_statuses(statuses(&[Running, Running, Ready]))
            .await;
        let poller = Poller::new(
            &mock,
            PollOptions::new(INTERVAL, Some(Duration::from_secs(u64::MAX))),
        );

        let started = Instant::now();
        let status = poller
            .await_completion(&OperationHandle::job("j-8"))
            .await
            .unwrap();

        assert_eq!(status.state, Ready);
        assert_eq!(started.elapsed(), INTERVAL * 2);
    }

    #[tokio::test(start_paused = true)]
    async fn test_huge_interval_times_out_at_deadline() {
        let mock = MockZnClient::new()
            .with_status_fallback(OperationState::Running.into())
            .await;
        let poller = Poller::new(
            &mock,
            PollOptions::new(Duration::from_secs(u64::MAX), Some(Duration::from_secs(30))),
        );

        let started = Instant::now();
        let err = poller
            .await_completion(&OperationHandle::job("j-9"))
            .await
            .unwrap_err();

        assert!(matches!(err, Error::Poll(PollError::Timeout { .. })));
        assert_eq!(mock.call_counts().await.operation_status, 1);
        assert_eq!(started.elapsed(), Duration::from_secs(30));
    }

    #[tokio::test(start_paused = true)]
    async fn test_failed_is_returned_without_retry() {
        use OperationState::*;
        let mock = MockZnClient::new()
            .with_statuses(vec![
                Pending.into(),
                OperationStatus::from_raw(Some("FAILED".to_string())),
                Ready.into(),
            ])
            .await;
        let poller = Poller::new(&mock, PollOptions::new(INTERVAL, None));

        let err = poller
            .await_completion(&OperationHandle::job("j-3"))
            .await
            .unwrap_err();

        match err {
            Error::Poll(PollError::Failed { status, kind, .. }) => {
                assert_eq!(status, "FAILED");
                assert_eq!(kind, OperationKind::Job);
            }
            other => panic!("Expected failure, got {:?}", other),
        }
        assert_eq!(mock.call_counts().await.operation_status, 2);
    }

    #[tokio::test(start_paused = true)]
    async fn test_missing_status_is_protocol_error() {
        let mock = MockZnClient::new()
            .with_statuses(vec![OperationStatus::from_raw(None)])
            .await
            .with_status_fallback(OperationState::Running.into())
            .await;
        let poller = Poller::new(&mock, PollOptions::default());

        let err = poller
            .await_completion(&OperationHandle::new("r-1", OperationKind::ReportExport))
            .await
            .unwrap_err();

        assert!(matches!(err, Error::Api(ApiError::Protocol(_))));
        assert_eq!(mock.call_counts().await.operation_status, 1);
    }

    #[tokio::test(start_paused = true)]
    async fn test_unrecognized_status_is_protocol_error() {
        let mock = MockZnClient::new()
            .with_statuses(vec![OperationStatus::from_raw(Some("HALF_DONE".to_string()))])
            .await;
        let poller = Poller::new(&mock, PollOptions::default());

        let err = poller
            .await_completion(&OperationHandle::job("j-4"))
            .await
            .unwrap_err();
        assert!(err.to_string().contains("HALF_DONE"));
    }

    #[tokio::test(start_paused = true)]
    async fn test_failed_poll_is_fatal() {
        let mock = MockZnClient::new()
            .with_statuses(statuses(&[OperationState::Running]))
            .await
            .with_status_error(ApiError::Transport {
                status: 503,
                body: "unavailable".to_string(),
            })
            .await
            .with_status_fallback(OperationState::Ready.into())
            .await;
        let poller = Poller::new(&mock, PollOptions::new(INTERVAL, None));

        let err = poller
            .await_completion(&OperationHandle::job("j-5"))
            .await
            .unwrap_err();

        assert!(matches!(err, Error::Api(ApiError::Transport { status: 503, .. })));
        assert_eq!(mock.call_counts().await.operation_status, 2);
    }

    #[tokio::test(start_paused = true)]
    async fn test_immediately_ready_does_not_sleep() {
        let mock = MockZnClient::new()
            .with_statuses(statuses(&[OperationState::Ready]))
            .await;
        let poller = Poller::new(&mock, PollOptions::new(INTERVAL, Some(Duration::from_secs(1))));

        let started = Instant::now();
        poller
            .await_completion(&OperationHandle::job("j-6"))
            .await
            .unwrap();
        assert_eq!(started.elapsed(), Duration::ZERO);
    }
}
