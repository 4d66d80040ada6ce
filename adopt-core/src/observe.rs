//! Value holder with explicit subscriptions.
//!
//! The state holders publish through [`ValueCell`] and the rendering layer
//! either reads the current value each frame or registers a callback. Single
//! UI thread only: there is one writer and no locking.

/// Identifier returned by [`ValueCell::subscribe`], used to unsubscribe.
pub type SubscriptionId = usize;

pub struct ValueCell<T> {
    value: T,
    next_id: SubscriptionId,
    subscribers: Vec<(SubscriptionId, Box<dyn FnMut(&T)>)>,
}

impl<T> ValueCell<T> {
    pub fn new(initial: T) -> Self {
        Self {
            value: initial,
            next_id: 0,
            subscribers: Vec::new(),
        }
    }

    /// Borrow the current value.
    pub fn get(&self) -> &T {
        &self.value
    }

    /// Publish a new value, notifying every subscriber exactly once.
    pub fn set(&mut self, value: T) {
        self.value = value;
        for (_, callback) in &mut self.subscribers {
            callback(&self.value);
        }
    }

    /// Register a callback invoked on every publication after this call.
    pub fn subscribe(&mut self, callback: impl FnMut(&T) + 'static) -> SubscriptionId {
        let id = self.next_id;
        self.next_id += 1;
        self.subscribers.push((id, Box::new(callback)));
        id
    }

    /// Remove a subscription. Returns whether it existed.
    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        let before = self.subscribers.len();
        self.subscribers.retain(|(sub_id, _)| *sub_id != id);
        self.subscribers.len() != before
    }

    pub fn subscriber_count(&self) -> usize {
        self.subscribers.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::rc::Rc;

    #[test]
    fn test_get_returns_current_value() {
        let mut cell = ValueCell::new(1);
        assert_eq!(*cell.get(), 1);
        cell.set(2);
        assert_eq!(*cell.get(), 2);
    }

    #[test]
    fn test_subscribers_notified_once_per_set() {
        let seen = Rc::new(RefCell::new(Vec::new()));
        let sink = Rc::clone(&seen);

        let mut cell = ValueCell::new(0);
        cell.subscribe(move |value| sink.borrow_mut().push(*value));

        cell.set(10);
        cell.set(20);

        assert_eq!(*seen.borrow(), vec![10, 20]);
    }

    #[test]
    fn test_unsubscribe_stops_notifications() {
        let seen = Rc::new(RefCell::new(Vec::new()));
        let sink = Rc::clone(&seen);

        let mut cell = ValueCell::new(0);
        let id = cell.subscribe(move |value| sink.borrow_mut().push(*value));

        cell.set(1);
        assert!(cell.unsubscribe(id));
        cell.set(2);

        assert_eq!(*seen.borrow(), vec![1]);
        assert_eq!(cell.subscriber_count(), 0);
        assert!(!cell.unsubscribe(id));
    }

    #[test]
    fn test_subscription_only_sees_later_publications() {
        let mut cell = ValueCell::new(5);
        let seen = Rc::new(RefCell::new(Vec::new()));
        let sink = Rc::clone(&seen);

        cell.subscribe(move |value| sink.borrow_mut().push(*value));
        assert!(seen.borrow().is_empty());

        cell.set(6);
        assert_eq!(*seen.borrow(), vec![6]);
    }
}
