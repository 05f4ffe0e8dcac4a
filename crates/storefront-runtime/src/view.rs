//! Observable per-section state.

use std::sync::Arc;

use tokio::sync::watch;
use tokio_util::sync::CancellationToken;

/// State owned by one mounted section.
///
/// Clones share the same value. Writers go through `update`/`set`; readers
/// take a snapshot or wait for a condition.
#[derive(Debug)]
pub struct ViewCell<T> {
    tx: Arc<watch::Sender<T>>,
}

impl<T> Clone for ViewCell<T> {
    fn clone(&self) -> Self {
        Self {
            tx: self.tx.clone(),
        }
    }
}

impl<T> ViewCell<T> {
    pub fn new(initial: T) -> Self {
        let (tx, _rx) = watch::channel(initial);
        Self { tx: Arc::new(tx) }
    }

    pub fn set(&self, value: T) {
        self.tx.send_replace(value);
    }

    pub fn update(&self, f: impl FnOnce(&mut T)) {
        self.tx.send_modify(f);
    }

    /// Apply `f` unless `token` is cancelled. The check runs under the
    /// write lock, so once `fence` returns after a cancel no further write
    /// through this method can land.
    pub fn update_if_live(&self, token: &CancellationToken, f: impl FnOnce(&mut T)) -> bool {
        self.tx.send_if_modified(|value| {
            if token.is_cancelled() {
                return false;
            }
            f(value);
            true
        })
    }

    /// Wait out any write in progress on another thread.
    pub fn fence(&self) {
        self.tx.send_if_modified(|_| false);
    }

    /// Read the current value without cloning it.
    pub fn read<R>(&self, f: impl FnOnce(&T) -> R) -> R {
        f(&self.tx.borrow())
    }

    pub fn subscribe(&self) -> watch::Receiver<T> {
        self.tx.subscribe()
    }
}

impl<T: Clone> ViewCell<T> {
    pub fn get(&self) -> T {
        self.tx.borrow().clone()
    }

    /// Wait until the value satisfies `ready`, then return a copy of it.
    pub async fn wait_for(&self, mut ready: impl FnMut(&T) -> bool) -> T {
        let mut rx = self.tx.subscribe();
        let value = match rx.wait_for(|value| ready(value)).await {
            Ok(value) => value.clone(),
            Err(_) => self.get(),
        };
        value
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clones_share_state() {
        let cell = ViewCell::new(0usize);
        let other = cell.clone();
        other.update(|v| *v += 2);
        cell.set(cell.get() + 1);
        assert_eq!(other.get(), 3);
        assert_eq!(cell.read(|v| *v * 10), 30);
    }

    #[test]
    fn test_update_if_live_stops_after_cancel() {
        let token = CancellationToken::new();
        let cell = ViewCell::new(0usize);
        let mut rx = cell.subscribe();

        assert!(cell.update_if_live(&token, |v| *v += 1));
        assert!(rx.has_changed().unwrap());
        rx.borrow_and_update();

        token.cancel();
        cell.fence();
        assert!(!cell.update_if_live(&token, |v| *v += 1));
        assert_eq!(cell.get(), 1);
        assert!(!rx.has_changed().unwrap());
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 2)]
    async fn test_wait_for_across_threads() {
        let cell = ViewCell::new(0u32);
        let writer = cell.clone();
        tokio::spawn(async move {
            for _ in 0..3 {
                writer.update(|v| *v += 1);
                tokio::task::yield_now().await;
            }
        });
        assert_eq!(cell.wait_for(|v| *v == 3).await, 3);
    }

    #[tokio::test]
    async fn test_wait_for_value() {
        let cell = ViewCell::new(None::<&str>);
        let writer = cell.clone();
        tokio::spawn(async move {
            tokio::task::yield_now().await;
            writer.set(Some("ready"));
        });
        assert_eq!(cell.wait_for(Option::is_some).await, Some("ready"));
    }
}
