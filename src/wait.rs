//! Bounded polling of resource states.
//!
//! CloudStack reports long running operations on the resources themselves
//! (template download status, volume state...), so waiting for them means
//! listing the resource until it reaches the expected state. Every wait
//! here has a fixed number of attempts.
use std::future::Future;
use std::time::Duration;

use tokio::time::sleep;
use tracing::{debug, warn};

use crate::config::Timeouts;
use crate::{MarvinError, Result};

/// How many times to check and how long to sleep in between
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PollPolicy {
    pub attempts: u32,
    pub interval: Duration,
}

impl PollPolicy {
    pub fn new(attempts: u32, interval: Duration) -> PollPolicy {
        PollPolicy { attempts, interval }
    }

    /// Enough attempts to cover `timeout`, at least one
    pub fn from_timeout(timeout: Duration, interval: Duration) -> PollPolicy {
        let attempts = if interval.is_zero() {
            1
        } else {
            let ratio = timeout.as_secs_f64() / interval.as_secs_f64();
            ratio.ceil().max(1.0) as u32
        };
        PollPolicy { attempts, interval }
    }

    /// Resource state policy of a client configuration
    pub fn from_timeouts(timeouts: &Timeouts) -> PollPolicy {
        PollPolicy::from_timeout(timeouts.state, timeouts.state_poll_interval)
    }
}

impl Default for PollPolicy {
    fn default() -> Self {
        PollPolicy::from_timeouts(&Timeouts::default())
    }
}

/// Outcome of one check
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Poll<T> {
    Ready(T),
    Pending,
}

/// Checks until it is ready. A check error aborts the wait, running out of
/// attempts is a [`MarvinError::StateTimeout`].
pub async fn poll_until<T, F, Fut>(
    policy: PollPolicy,
    resource: &str,
    expected: &str,
    mut check: F,
) -> Result<T>
where
    F: FnMut() -> Fut,
    Fut: Future<Output = Result<Poll<T>>>,
{
    for attempt in 1..=policy.attempts.max(1) {
        if let Poll::Ready(value) = check().await? {
            debug!("{} reached {} after {} attempt(s)", resource, expected, attempt);
            return Ok(value);
        }
        if attempt < policy.attempts {
            sleep(policy.interval).await;
        }
    }

    warn!(
        "{} did not reach {} after {} attempt(s)",
        resource, expected, policy.attempts
    );
    Err(MarvinError::StateTimeout {
        resource: resource.to_string(),
        expected: expected.to_string(),
    })
}

/// Where a download or an upload stands
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Progress {
    Ready,
    InProgress,
    Failed,
}

/// `Download Complete` when ready, `x% Downloaded` or `Installing` while in
/// progress, anything else is an error message.
pub fn template_download(status: &str) -> Progress {
    if status == "Download Complete" {
        Progress::Ready
    } else if status.contains("Downloaded") || status.contains("Installing") {
        Progress::InProgress
    } else {
        Progress::Failed
    }
}

pub fn iso_download(status: &str) -> Progress {
    if status == "Successfully Installed" {
        Progress::Ready
    } else if status.contains("Downloaded") || status.contains("Installing") {
        Progress::InProgress
    } else {
        Progress::Failed
    }
}

/// Classifies the volume *state* of an uploaded volume
pub fn volume_upload(state: &str) -> Progress {
    if state == "Uploaded" {
        Progress::Ready
    } else if state.contains("Uploading") || state.contains("Installing") {
        Progress::InProgress
    } else {
        Progress::Failed
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use std::sync::atomic::{AtomicU32, Ordering};

    #[test]
    fn policy_from_timeout() {
        let policy = PollPolicy::from_timeout(Duration::from_secs(600), Duration::from_secs(60));
        assert_eq!(policy.attempts, 10);
        let policy = PollPolicy::from_timeout(Duration::from_secs(90), Duration::from_secs(60));
        assert_eq!(policy.attempts, 2);
        let policy = PollPolicy::from_timeout(Duration::ZERO, Duration::from_secs(60));
        assert_eq!(policy.attempts, 1);
        assert_eq!(PollPolicy::default().attempts, 10);
    }

    #[tokio::test]
    async fn ready_on_third_attempt() {
        let calls = AtomicU32::new(0);
        let value = poll_until(PollPolicy::new(5, Duration::ZERO), "vm", "Running", || {
            let n = calls.fetch_add(1, Ordering::SeqCst) + 1;
            async move {
                Ok(if n == 3 {
                    Poll::Ready(n)
                } else {
                    Poll::Pending
                })
            }
        })
        .await
        .unwrap();
        assert_eq!(value, 3);
        assert_eq!(calls.load(Ordering::SeqCst), 3);
    }

    #[tokio::test]
    async fn exhausted_attempts() {
        let calls = AtomicU32::new(0);
        let err = poll_until(PollPolicy::new(3, Duration::ZERO), "vm", "Stopped", || {
            calls.fetch_add(1, Ordering::SeqCst);
            async { Ok(Poll::<()>::Pending) }
        })
        .await
        .unwrap_err();
        assert_eq!(calls.load(Ordering::SeqCst), 3);
        assert!(matches!(
            err,
            MarvinError::StateTimeout { ref expected, .. } if expected == "Stopped"
        ));
    }

    #[tokio::test]
    async fn check_error_aborts() {
        let calls = AtomicU32::new(0);
        let err = poll_until(PollPolicy::new(3, Duration::ZERO), "zone", "listed", || {
            calls.fetch_add(1, Ordering::SeqCst);
            async { Err::<Poll<()>, _>(MarvinError::NotFound("zone".to_string())) }
        })
        .await
        .unwrap_err();
        assert_eq!(calls.load(Ordering::SeqCst), 1);
        assert!(matches!(err, MarvinError::NotFound(_)));
    }

    #[test]
    fn classifiers() {
        assert_eq!(template_download("Download Complete"), Progress::Ready);
        assert_eq!(template_download("35% Downloaded"), Progress::InProgress);
        assert_eq!(template_download("Installing Template"), Progress::InProgress);
        assert_eq!(template_download("Failed to download"), Progress::Failed);

        assert_eq!(iso_download("Successfully Installed"), Progress::Ready);
        assert_eq!(iso_download("80% Downloaded"), Progress::InProgress);
        assert_eq!(iso_download("Download Complete"), Progress::Failed);

        assert_eq!(volume_upload("Uploaded"), Progress::Ready);
        assert_eq!(volume_upload("Uploading"), Progress::InProgress);
        assert_eq!(volume_upload("UploadError"), Progress::Failed);
    }
}
