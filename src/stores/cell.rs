//! StoreCell - a generic observable mutable cell.
//!
//! The building block shared by all three stores: a single shared value
//! that any holder may overwrite and any subscriber may watch. Built on
//! `tokio::sync::watch` so it works with or without live subscribers.

use tokio::sync::watch;

/// An observable container holding one value of type `T`.
///
/// Every `set` is a full snapshot replace and wakes all subscribers, even
/// when the new value equals the old one. Reads clone the current snapshot;
/// there is no partial update or merging.
pub struct StoreCell<T> {
    tx: watch::Sender<T>,
}

impl<T: Clone> StoreCell<T> {
    /// Create a cell holding `initial`.
    pub fn new(initial: T) -> Self {
        let (tx, _rx) = watch::channel(initial);
        Self { tx }
    }

    /// Clone the current snapshot.
    pub fn get(&self) -> T {
        self.tx.borrow().clone()
    }

    /// Replace the snapshot and notify all subscribers.
    pub fn set(&self, value: T) {
        // send_replace never fails, even with zero receivers
        self.tx.send_replace(value);
    }

    /// Subscribe to future changes.
    ///
    /// The receiver starts at the current snapshot; `changed().await` then
    /// resolves once per subsequent `set`.
    pub fn subscribe(&self) -> watch::Receiver<T> {
        self.tx.subscribe()
    }
}

impl<T: Clone + Default> Default for StoreCell<T> {
    fn default() -> Self {
        Self::new(T::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_get_returns_initial_value() {
        let cell = StoreCell::new(vec![1, 2, 3]);
        assert_eq!(cell.get(), vec![1, 2, 3]);
    }

    #[test]
    fn test_set_replaces_snapshot() {
        let cell = StoreCell::new(vec![1]);
        cell.set(vec![4, 5]);
        assert_eq!(cell.get(), vec![4, 5]);
    }

    #[tokio::test]
    async fn test_subscriber_observes_change() {
        let cell = StoreCell::new(0u32);
        let mut rx = cell.subscribe();

        cell.set(7);

        rx.changed().await.unwrap();
        assert_eq!(*rx.borrow_and_update(), 7);
    }

    #[tokio::test]
    async fn test_set_notifies_even_when_value_is_equal() {
        let cell = StoreCell::new(1u32);
        let mut rx = cell.subscribe();

        cell.set(1);

        assert!(rx.has_changed().unwrap());
    }

    #[test]
    fn test_instances_are_independent() {
        let a = StoreCell::new(1u32);
        let b = StoreCell::new(1u32);
        a.set(2);
        assert_eq!(a.get(), 2);
        assert_eq!(b.get(), 1);
    }
}
