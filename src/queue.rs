//! FIFO queue over contiguous storage.

use std::collections::VecDeque;
use std::iter::FromIterator;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Queue<T> {
    items: VecDeque<T>,
}

impl<T> Queue<T> {
    pub fn new() -> Self {
        Self {
            items: VecDeque::new(),
        }
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            items: VecDeque::with_capacity(capacity),
        }
    }

    pub fn enqueue(&mut self, item: T) {
        self.items.push_back(item);
        tracing::trace!(len = self.items.len(), "enqueued item");
    }

    /// Removes the oldest item, or returns `None` when the queue is empty.
    pub fn dequeue(&mut self) -> Option<T> {
        let item = self.items.pop_front();
        if item.is_none() {
            tracing::debug!("dequeue on empty queue");
        }
        item
    }

    pub fn front(&self) -> Option<&T> {
        self.items.front()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Front to back.
    pub fn iter(&self) -> impl Iterator<Item = &T> {
        self.items.iter()
    }
}

impl<T> Default for Queue<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> FromIterator<T> for Queue<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self {
            items: iter.into_iter().collect(),
        }
    }
}

impl<T> Extend<T> for Queue<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for item in iter {
            self.enqueue(item);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn enqueue_one_two_dequeues_one() {
        let mut queue = Queue::new();
        queue.enqueue(1);
        queue.enqueue(2);
        assert_eq!(queue.dequeue(), Some(1));
        assert_eq!(queue.front(), Some(&2));
        assert_eq!(queue.len(), 1);
    }

    #[test]
    fn empty_queue() {
        let mut queue = Queue::<String>::new();
        assert!(queue.is_empty());
        assert_eq!(queue.front(), None);
        assert_eq!(queue.dequeue(), None);
    }

    #[test]
    fn iter_runs_front_to_back() {
        let queue: Queue<char> = "abc".chars().collect();
        assert_eq!(queue.iter().collect::<String>(), "abc");
    }

    #[test]
    fn extend_appends_at_back() {
        let mut queue = Queue::with_capacity(4);
        queue.enqueue(1);
        queue.extend(vec![2, 3]);
        assert_eq!(queue.iter().copied().collect::<Vec<_>>(), vec![1, 2, 3]);
    }

    proptest! {
        #[test]
        fn dequeue_order_matches_enqueue_order(values: Vec<i32>) {
            let mut queue = Queue::new();
            for v in &values {
                queue.enqueue(*v);
            }

            let mut drained = Vec::new();
            while let Some(front) = queue.front().copied() {
                prop_assert_eq!(queue.dequeue(), Some(front));
                drained.push(front);
            }

            prop_assert_eq!(drained, values);
            prop_assert!(queue.is_empty());
        }
    }
}
