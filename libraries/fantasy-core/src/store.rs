//! Observable state holder
//!
//! A `Store<T>` keeps the latest value and publishes every write to its
//! subscribers. Writes replace the value wholesale: last write wins, nothing
//! is merged.

use std::fmt;
use tokio::sync::watch;

/// Publish-on-change state holder.
pub struct Store<T> {
    tx: watch::Sender<T>,
}

impl<T> Store<T> {
    /// Create a store holding `initial`.
    pub fn new(initial: T) -> Self {
        let (tx, _rx) = watch::channel(initial);
        Self { tx }
    }

    /// Replace the value and notify subscribers.
    pub fn set(&self, value: T) {
        self.tx.send_replace(value);
    }

    /// Mutate the value in place and notify subscribers.
    pub fn update(&self, f: impl FnOnce(&mut T)) {
        self.tx.send_modify(f);
    }

    /// Read through a borrow without cloning.
    pub fn with<R>(&self, f: impl FnOnce(&T) -> R) -> R {
        f(&self.tx.borrow())
    }

    /// Register a listener. The receiver sees the current value immediately
    /// and is woken on every later write.
    pub fn subscribe(&self) -> watch::Receiver<T> {
        self.tx.subscribe()
    }
}

impl<T: Clone> Store<T> {
    /// Snapshot of the current value.
    pub fn get(&self) -> T {
        self.tx.borrow().clone()
    }
}

impl<T: Default> Default for Store<T> {
    fn default() -> Self {
        Self::new(T::default())
    }
}

impl<T: fmt::Debug> fmt::Debug for Store<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Store").field(&*self.tx.borrow()).finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_set_replaces_value() {
        let store = Store::new(vec![1, 2, 3]);
        store.set(vec![9]);
        assert_eq!(store.get(), vec![9]);
    }

    #[test]
    fn test_update_in_place() {
        let store = Store::new(vec![1, 2, 3]);
        store.update(|items| items.retain(|n| *n != 2));
        assert_eq!(store.get(), vec![1, 3]);
        assert_eq!(store.with(|items| items.len()), 2);
    }

    #[test]
    fn test_writes_without_subscribers_are_kept() {
        let store: Store<Option<&str>> = Store::default();
        store.set(Some("kept"));
        assert_eq!(store.get(), Some("kept"));
    }

    #[tokio::test]
    async fn test_subscriber_sees_latest_write() {
        let store = Store::new(false);
        let mut rx = store.subscribe();
        assert!(!*rx.borrow());

        store.set(true);
        rx.changed().await.unwrap();
        assert!(*rx.borrow_and_update());

        store.set(false);
        store.set(true);
        rx.changed().await.unwrap();
        assert!(*rx.borrow_and_update());
    }
}
