//! Deadlines and cancellation for in-flight requests.

use std::future::Future;
use std::time::Duration;

use tokio::time::Instant;
use tokio_util::sync::CancellationToken;

use crate::error::{Result, SdkError};

/// Carries an optional deadline and a cancellation token into an operation.
///
/// The deadline bounds the whole call, retries and backoff sleeps included.
/// Cloning shares the cancellation token.
#[derive(Debug, Clone, Default)]
pub struct RequestContext {
    deadline: Option<Instant>,
    cancel: CancellationToken,
}

impl RequestContext {
    /// A context that never expires and is never cancelled.
    pub fn background() -> Self {
        Self::default()
    }

    /// A context whose deadline is `timeout` from now.
    pub fn with_timeout(timeout: Duration) -> Self {
        Self::with_deadline(Instant::now() + timeout)
    }

    pub fn with_deadline(deadline: Instant) -> Self {
        Self {
            deadline: Some(deadline),
            cancel: CancellationToken::new(),
        }
    }

    /// Attach an externally owned cancellation token.
    #[must_use]
    pub fn with_cancellation(mut self, token: CancellationToken) -> Self {
        self.cancel = token;
        self
    }

    pub fn deadline(&self) -> Option<Instant> {
        self.deadline
    }

    pub fn cancellation_token(&self) -> &CancellationToken {
        &self.cancel
    }

    pub fn cancel(&self) {
        self.cancel.cancel();
    }

    /// Time left before the deadline, `None` when there is no deadline.
    pub fn remaining(&self) -> Option<Duration> {
        self.deadline
            .map(|d| d.saturating_duration_since(Instant::now()))
    }

    /// Drive `fut` to completion unless the context expires or is cancelled
    /// first, in which case `fut` is dropped (aborting any in-flight request).
    pub async fn run<F, T>(&self, fut: F) -> Result<T>
    where
        F: Future<Output = Result<T>>,
    {
        if self.cancel.is_cancelled() {
            return Err(SdkError::Cancelled);
        }
        if self.remaining() == Some(Duration::ZERO) {
            return Err(SdkError::DeadlineExceeded);
        }

        let bounded = async {
            match self.deadline {
                Some(deadline) => tokio::time::timeout_at(deadline, fut)
                    .await
                    .map_err(|_| SdkError::DeadlineExceeded)?,
                None => fut.await,
            }
        };

        tokio::select! {
            () = self.cancel.cancelled() => Err(SdkError::Cancelled),
            result = bounded => result,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn background_runs_to_completion() {
        let result = RequestContext::background().run(async { Ok(7) }).await;
        assert!(matches!(result, Ok(7)));
    }

    #[tokio::test]
    async fn deadline_exceeded_while_waiting() {
        let ctx = RequestContext::with_timeout(Duration::from_millis(20));
        let result: Result<()> = ctx
            .run(async {
                tokio::time::sleep(Duration::from_millis(200)).await;
                Ok(())
            })
            .await;
        assert!(matches!(result, Err(SdkError::DeadlineExceeded)));
        if let Err(e) = result {
            assert!(e.to_string().contains("deadline exceeded"));
        }
    }

    #[tokio::test]
    async fn expired_deadline_short_circuits() {
        let ctx = RequestContext::with_deadline(Instant::now());
        let result = ctx.run(async { Ok(()) }).await;
        assert!(matches!(result, Err(SdkError::DeadlineExceeded)));
    }

    #[tokio::test]
    async fn cancellation_aborts() {
        let token = CancellationToken::new();
        let ctx = RequestContext::background().with_cancellation(token.clone());
        let canceller = tokio::spawn(async move {
            tokio::time::sleep(Duration::from_millis(10)).await;
            token.cancel();
        });
        let result: Result<()> = ctx
            .run(async {
                tokio::time::sleep(Duration::from_secs(5)).await;
                Ok(())
            })
            .await;
        let _ = canceller.await;
        assert!(matches!(result, Err(SdkError::Cancelled)));
    }

    #[tokio::test]
    async fn already_cancelled_short_circuits() {
        let ctx = RequestContext::background();
        ctx.cancel();
        let result = ctx.run(async { Ok(()) }).await;
        assert!(matches!(result, Err(SdkError::Cancelled)));
    }
}
