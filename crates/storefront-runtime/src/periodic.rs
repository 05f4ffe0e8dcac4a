//! Repeating timer owned by a mounted section.

use std::time::Duration;

use tokio::task::JoinHandle;
use tokio::time::{interval_at, Instant, MissedTickBehavior};
use tokio_util::sync::CancellationToken;

/// Calls a closure once per period until stopped.
///
/// The first call happens one full period after start. Dropping the task
/// stops it; no call starts once the stop has been observed. A call already
/// running on another worker may finish after `stop` returns, so `tick`
/// writes shared state through `ViewCell::update_if_live`.
#[derive(Debug)]
pub struct PeriodicTask {
    token: CancellationToken,
    handle: Option<JoinHandle<()>>,
}

impl PeriodicTask {
    /// Start ticking every `period`. Cancelling `parent` also stops the task.
    pub fn start<F>(period: Duration, parent: &CancellationToken, mut tick: F) -> Self
    where
        F: FnMut() + Send + 'static,
    {
        let period = period.max(Duration::from_millis(1));
        let token = parent.child_token();
        let task_token = token.clone();

        let handle = tokio::spawn(async move {
            let mut ticker = interval_at(Instant::now() + period, period);
            ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);
            loop {
                tokio::select! {
                    biased;
                    _ = task_token.cancelled() => break,
                    _ = ticker.tick() => {
                        if task_token.is_cancelled() {
                            break;
                        }
                        tick();
                    }
                }
            }
            tracing::debug!("periodic task stopped");
        });

        Self {
            token,
            handle: Some(handle),
        }
    }

    pub fn stop(&self) {
        self.token.cancel();
    }

    pub fn is_stopped(&self) -> bool {
        self.token.is_cancelled()
    }

    /// Stop and wait for the task to exit.
    pub async fn shutdown(mut self) {
        self.token.cancel();
        if let Some(handle) = self.handle.take() {
            let _ = handle.await;
        }
    }
}

impl Drop for PeriodicTask {
    fn drop(&mut self) {
        self.token.cancel();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Arc;

    fn counter() -> (Arc<AtomicUsize>, impl FnMut() + Send + 'static) {
        let count = Arc::new(AtomicUsize::new(0));
        let inner = count.clone();
        (count, move || {
            inner.fetch_add(1, Ordering::SeqCst);
        })
    }

    #[tokio::test(start_paused = true)]
    async fn test_fires_once_per_period() {
        let root = CancellationToken::new();
        let (count, tick) = counter();
        let task = PeriodicTask::start(Duration::from_secs(5), &root, tick);

        tokio::time::sleep(Duration::from_millis(4_999)).await;
        assert_eq!(count.load(Ordering::SeqCst), 0);

        tokio::time::sleep(Duration::from_millis(2)).await;
        assert_eq!(count.load(Ordering::SeqCst), 1);

        tokio::time::sleep(Duration::from_millis(7_500)).await;
        assert_eq!(count.load(Ordering::SeqCst), 2);

        task.shutdown().await;
    }

    #[tokio::test(start_paused = true)]
    async fn test_no_ticks_after_drop() {
        let root = CancellationToken::new();
        let (count, tick) = counter();
        let task = PeriodicTask::start(Duration::from_secs(5), &root, tick);

        tokio::time::sleep(Duration::from_millis(5_001)).await;
        assert_eq!(count.load(Ordering::SeqCst), 1);

        drop(task);
        tokio::time::sleep(Duration::from_secs(60)).await;
        assert_eq!(count.load(Ordering::SeqCst), 1);
    }

    #[tokio::test(start_paused = true)]
    async fn test_parent_cancel_stops_task() {
        let root = CancellationToken::new();
        let (count, tick) = counter();
        let task = PeriodicTask::start(Duration::from_secs(1), &root, tick);

        root.cancel();
        assert!(task.is_stopped());
        tokio::time::sleep(Duration::from_secs(10)).await;
        assert_eq!(count.load(Ordering::SeqCst), 0);
    }
}
