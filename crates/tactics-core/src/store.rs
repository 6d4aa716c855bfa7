//! Observable state containers
//!
//! A [`Store`] owns a value and notifies its subscribers after every
//! mutation. Stores are mutated from a single thread; subscribers are only
//! required to be `Send` so the owning state can live behind a mutex.

use std::fmt;

/// Handle returned by [`Store::subscribe`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubscriptionId(u64);

type Subscriber<T> = Box<dyn FnMut(&T) + Send>;

/// Entities addressable by a stable id
pub trait Keyed {
    type Id: Copy + Eq + fmt::Debug;

    fn id(&self) -> Self::Id;
}

/// A partial update merged into an existing value.
///
/// Fields the patch leaves unset keep their current value.
pub trait Patch<T> {
    fn apply(self, target: &mut T);
}

/// Observable container with get/set/subscribe semantics
pub struct Store<T> {
    value: T,
    subscribers: Vec<(SubscriptionId, Subscriber<T>)>,
    next_subscription: u64,
    revision: u64,
}

impl<T> Store<T> {
    pub fn new(value: T) -> Self {
        Self {
            value,
            subscribers: Vec::new(),
            next_subscription: 0,
            revision: 0,
        }
    }

    /// Current snapshot
    pub fn get(&self) -> &T {
        &self.value
    }

    /// Number of mutations applied so far
    pub fn revision(&self) -> u64 {
        self.revision
    }

    /// Replace the value
    pub fn set(&mut self, value: T) {
        self.value = value;
        self.notify();
    }

    /// Mutate the value in place and notify subscribers
    pub fn update<R>(&mut self, f: impl FnOnce(&mut T) -> R) -> R {
        let result = f(&mut self.value);
        self.notify();
        result
    }

    /// Register a callback invoked with the new value after each change
    pub fn subscribe(&mut self, callback: impl FnMut(&T) + Send + 'static) -> SubscriptionId {
        let id = SubscriptionId(self.next_subscription);
        self.next_subscription += 1;
        self.subscribers.push((id, Box::new(callback)));
        id
    }

    /// Remove a subscriber. Returns false if it was already gone.
    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        let before = self.subscribers.len();
        self.subscribers.retain(|(sid, _)| *sid != id);
        self.subscribers.len() != before
    }

    fn notify(&mut self) {
        self.revision += 1;
        let value = &self.value;
        for (_, subscriber) in self.subscribers.iter_mut() {
            subscriber(value);
        }
    }
}

impl<T: PartialEq> Store<T> {
    /// Replace the value, notifying only if it actually changed
    pub fn set_if_changed(&mut self, value: T) -> bool {
        if self.value == value {
            return false;
        }
        self.set(value);
        true
    }
}

impl<T: Default> Default for Store<T> {
    fn default() -> Self {
        Self::new(T::default())
    }
}

impl<T: fmt::Debug> fmt::Debug for Store<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Store")
            .field("value", &self.value)
            .field("subscribers", &self.subscribers.len())
            .field("revision", &self.revision)
            .finish()
    }
}

impl<T: Keyed> Store<Vec<T>> {
    pub fn find(&self, id: T::Id) -> Option<&T> {
        self.value.iter().find(|item| item.id() == id)
    }

    pub fn contains(&self, id: T::Id) -> bool {
        self.find(id).is_some()
    }

    /// Merge a patch into the item with `id`. Missing ids are a no-op.
    pub fn patch_by_id<P: Patch<T>>(&mut self, id: T::Id, patch: P) -> bool {
        self.modify_by_id(id, |item| patch.apply(item)).is_some()
    }

    /// Run `f` on the item with `id`, notifying only if it exists
    pub fn modify_by_id<R>(&mut self, id: T::Id, f: impl FnOnce(&mut T) -> R) -> Option<R> {
        let index = self.value.iter().position(|item| item.id() == id)?;
        let result = f(&mut self.value[index]);
        self.notify();
        Some(result)
    }

    pub fn push(&mut self, item: T) {
        self.value.push(item);
        self.notify();
    }

    pub fn remove_by_id(&mut self, id: T::Id) -> Option<T> {
        let index = self.value.iter().position(|item| item.id() == id)?;
        let removed = self.value.remove(index);
        self.notify();
        Some(removed)
    }

    pub fn clear(&mut self) {
        self.value.clear();
        self.notify();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;
    use std::sync::atomic::{AtomicUsize, Ordering};

    #[derive(Debug, Clone, PartialEq)]
    struct Item {
        id: u32,
        label: &'static str,
    }

    impl Keyed for Item {
        type Id = u32;

        fn id(&self) -> u32 {
            self.id
        }
    }

    struct Relabel(&'static str);

    impl Patch<Item> for Relabel {
        fn apply(self, item: &mut Item) {
            item.label = self.0;
        }
    }

    fn counting_store() -> (Store<Vec<Item>>, Arc<AtomicUsize>) {
        let mut store = Store::new(vec![
            Item { id: 1, label: "one" },
            Item { id: 2, label: "two" },
        ]);
        let calls = Arc::new(AtomicUsize::new(0));
        let counter = calls.clone();
        store.subscribe(move |_| {
            counter.fetch_add(1, Ordering::SeqCst);
        });
        (store, calls)
    }

    #[test]
    fn test_subscribers_see_every_mutation() {
        let (mut store, calls) = counting_store();
        store.push(Item { id: 3, label: "three" });
        store.patch_by_id(1, Relabel("uno"));
        store.remove_by_id(2);

        assert_eq!(calls.load(Ordering::SeqCst), 3);
        assert_eq!(store.revision(), 3);
        assert_eq!(store.find(1).map(|i| i.label), Some("uno"));
        assert!(!store.contains(2));
    }

    #[test]
    fn test_missing_id_is_silent_noop() {
        let (mut store, calls) = counting_store();
        assert!(!store.patch_by_id(42, Relabel("ghost")));
        assert!(store.remove_by_id(42).is_none());
        assert_eq!(calls.load(Ordering::SeqCst), 0);
    }

    #[test]
    fn test_unsubscribe_stops_notifications() {
        let mut store = Store::new(0_i32);
        let seen = Arc::new(AtomicUsize::new(0));
        let counter = seen.clone();
        let id = store.subscribe(move |value| {
            counter.store(*value as usize, Ordering::SeqCst);
        });

        store.set(5);
        assert_eq!(seen.load(Ordering::SeqCst), 5);

        assert!(store.unsubscribe(id));
        assert!(!store.unsubscribe(id));
        store.set(9);
        assert_eq!(seen.load(Ordering::SeqCst), 5);
    }

    #[test]
    fn test_set_if_changed_skips_equal_values() {
        let mut store = Store::new(false);
        assert!(!store.set_if_changed(false));
        assert!(store.set_if_changed(true));
        assert_eq!(store.revision(), 1);
    }
}
