//! Mount lifecycle of a section.

use std::future::Future;
use std::time::Duration;

use tokio::task::JoinHandle;
use tokio_util::sync::CancellationToken;

use crate::guard::{run_guarded, Commit};
use crate::periodic::PeriodicTask;

/// The mounted lifetime of one section.
///
/// Cancelled by `unmount` or on drop. Everything started through it observes
/// the same token.
#[derive(Debug, Default)]
pub struct Lifecycle {
    token: CancellationToken,
}

impl Lifecycle {
    pub fn new() -> Self {
        Self::default()
    }

    /// A lifecycle nested under `parent`: unmounting the parent unmounts it.
    pub fn child_of(parent: &Lifecycle) -> Self {
        Self {
            token: parent.token.child_token(),
        }
    }

    pub fn token(&self) -> &CancellationToken {
        &self.token
    }

    pub fn is_mounted(&self) -> bool {
        !self.token.is_cancelled()
    }

    pub fn unmount(&self) {
        self.token.cancel();
    }

    /// Spawn a one-shot fetch whose result is committed only while mounted.
    pub fn spawn_guarded<F, C>(&self, fetch: F, commit: C) -> JoinHandle<Commit>
    where
        F: Future + Send + 'static,
        F::Output: Send + 'static,
        C: FnOnce(F::Output) -> bool + Send + 'static,
    {
        let token = self.token.clone();
        tokio::spawn(async move { run_guarded(&token, fetch, commit).await })
    }

    /// Start a repeating task tied to this lifecycle.
    pub fn every<F>(&self, period: Duration, tick: F) -> PeriodicTask
    where
        F: FnMut() + Send + 'static,
    {
        PeriodicTask::start(period, &self.token, tick)
    }
}

impl Drop for Lifecycle {
    fn drop(&mut self) {
        self.token.cancel();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicBool, Ordering};
    use std::sync::Arc;

    #[tokio::test]
    async fn test_unmount_before_fetch_resolves() {
        let lifecycle = Lifecycle::new();
        let (tx, rx) = tokio::sync::oneshot::channel::<Vec<u32>>();
        let committed = Arc::new(AtomicBool::new(false));

        let flag = committed.clone();
        let handle = lifecycle.spawn_guarded(async move { rx.await.unwrap_or_default() }, move |_| {
            flag.store(true, Ordering::SeqCst);
            true
        });

        lifecycle.unmount();
        assert!(!lifecycle.is_mounted());
        tx.send(vec![1, 2, 3]).unwrap();

        assert_eq!(handle.await.unwrap(), Commit::Discarded);
        assert!(!committed.load(Ordering::SeqCst));
    }

    #[tokio::test]
    async fn test_mounted_fetch_commits() {
        let lifecycle = Lifecycle::new();
        let committed = Arc::new(AtomicBool::new(false));
        let flag = committed.clone();

        let handle = lifecycle.spawn_guarded(async { 1 }, move |_| {
            flag.store(true, Ordering::SeqCst);
            true
        });

        assert_eq!(handle.await.unwrap(), Commit::Applied);
        assert!(committed.load(Ordering::SeqCst));
    }

    #[test]
    fn test_child_follows_parent() {
        let parent = Lifecycle::new();
        let child = Lifecycle::child_of(&parent);
        let token = parent.token().clone();
        drop(parent);
        assert!(token.is_cancelled());
        assert!(!child.is_mounted());
    }
}
