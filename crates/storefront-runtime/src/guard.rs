//! Cancellation-guarded commits.

use std::future::Future;

use tokio_util::sync::CancellationToken;

/// Outcome of a guarded fetch.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Commit {
    /// The result was handed to the commit closure.
    Applied,
    /// The owner unmounted first; the result was dropped.
    Discarded,
}

/// Await `fetch`, then hand its output to `commit` unless `token` has been
/// cancelled in the meantime.
///
/// The fetch itself is never aborted. Only its effect is suppressed.
/// `commit` returns whether it applied the value; on a multi-thread runtime
/// it should re-check the token under its own lock (`ViewCell::update_if_live`)
/// since a cancel can land between the check here and the write.
pub async fn run_guarded<F, C>(token: &CancellationToken, fetch: F, commit: C) -> Commit
where
    F: Future,
    C: FnOnce(F::Output) -> bool,
{
    let value = fetch.await;
    if token.is_cancelled() || !commit(value) {
        tracing::debug!("fetch resolved after unmount, result discarded");
        return Commit::Discarded;
    }
    Commit::Applied
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_commit_when_active() {
        let token = CancellationToken::new();
        let mut seen = None;
        let outcome = run_guarded(&token, async { 7 }, |v| {
            seen = Some(v);
            true
        })
        .await;
        assert_eq!(outcome, Commit::Applied);
        assert_eq!(seen, Some(7));
    }

    #[tokio::test]
    async fn test_discard_after_cancel() {
        let token = CancellationToken::new();
        let (tx, rx) = tokio::sync::oneshot::channel::<u32>();
        let fetch = async move { rx.await.unwrap_or_default() };

        let guard_token = token.clone();
        let task = tokio::spawn(async move {
            let mut committed = false;
            let outcome = run_guarded(&guard_token, fetch, |_| {
                committed = true;
                true
            })
            .await;
            (outcome, committed)
        });

        token.cancel();
        tx.send(3).unwrap();

        let (outcome, committed) = task.await.unwrap();
        assert_eq!(outcome, Commit::Discarded);
        assert!(!committed);
    }

    #[tokio::test]
    async fn test_commit_declining_is_discarded() {
        let token = CancellationToken::new();
        let cell = crate::ViewCell::new(0u32);
        let writer = cell.clone();
        let gate = token.clone();

        let outcome = run_guarded(&token, async { 9 }, move |v| {
            gate.cancel();
            writer.update_if_live(&gate, |slot| *slot = v)
        })
        .await;

        assert_eq!(outcome, Commit::Discarded);
        assert_eq!(cell.get(), 0);
    }
}
