//! Singly linked list built from a chain of uniquely owned nodes.
//!
//! Each node owns its successor through a `Box`, so the chain can never share
//! a node or form a cycle. Values are only ever inserted at the head, which
//! makes enumeration yield them newest-first.

use std::fmt;
use std::iter::FromIterator;

type Link<T> = Option<Box<Node<T>>>;

struct Node<T> {
    value: T,
    next: Link<T>,
}

// =============================================================================
// Milestone 1: Owning chain with head insertion
// =============================================================================

pub struct LinkedList<T> {
    head: Link<T>,
    len: usize,
}

impl<T> LinkedList<T> {
    pub fn new() -> Self {
        Self { head: None, len: 0 }
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.head.is_none()
    }

    /// Inserts `value` in front of the current head in O(1).
    ///
    /// head -> next -> ... turns into new_head -> prev_head -> next -> ...
    pub fn insert_at_head(&mut self, value: T) {
        let new_node = Box::new(Node {
            value,
            next: self.head.take(),
        });

        self.head = Some(new_node);
        self.len += 1;
        tracing::trace!(len = self.len, "inserted value at head");
    }

    pub fn peek(&self) -> Option<&T> {
        self.head.as_ref().map(|node| &node.value)
    }

    /// Releases every node and returns the list to the empty state.
    pub fn clear(&mut self) {
        let released = self.len;
        self.release_nodes();
        self.len = 0;
        tracing::debug!(released, "cleared linked list");
    }

    // Unlinks one node per step so long chains don't recurse in Box's drop.
    fn release_nodes(&mut self) {
        let mut current = self.head.take();
        while let Some(mut boxed_node) = current {
            current = boxed_node.next.take();
        }
    }

    fn pop_head(&mut self) -> Option<T> {
        self.head.take().map(|old_head| {
            let old_head = *old_head;
            self.head = old_head.next;
            self.len -= 1;
            old_head.value
        })
    }

    // =========================================================================
    // Milestone 2: Lazy traversal instead of printing
    // =========================================================================

    /// Visits the stored values from head to tail.
    ///
    /// The iterator borrows the list, so it can be created any number of times
    /// and always restarts from the current head.
    pub fn iter(&self) -> Iter<'_, T> {
        Iter {
            next: self.head.as_deref(),
            remaining: self.len,
        }
    }
}

impl<T> Default for LinkedList<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Drop for LinkedList<T> {
    fn drop(&mut self) {
        self.release_nodes();
    }
}

pub struct Iter<'a, T> {
    next: Option<&'a Node<T>>,
    remaining: usize,
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        self.next.map(|node| {
            self.next = node.next.as_deref();
            self.remaining -= 1;
            &node.value
        })
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<T> ExactSizeIterator for Iter<'_, T> {}

impl<'a, T> IntoIterator for &'a LinkedList<T> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Owning iterator; yields values head to tail, consuming the list.
pub struct IntoIter<T>(LinkedList<T>);

impl<T> Iterator for IntoIter<T> {
    type Item = T;

    fn next(&mut self) -> Option<Self::Item> {
        self.0.pop_head()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.0.len, Some(self.0.len))
    }
}

impl<T> ExactSizeIterator for IntoIter<T> {}

impl<T> IntoIterator for LinkedList<T> {
    type Item = T;
    type IntoIter = IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        IntoIter(self)
    }
}

// =============================================================================
// Milestone 3: Standard trait integration
// =============================================================================

/// Every item is inserted at the head, so the list enumerates items in the
/// reverse of the source order.
impl<T> FromIterator<T> for LinkedList<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut list = LinkedList::new();
        list.extend(iter);
        list
    }
}

impl<T> Extend<T> for LinkedList<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for value in iter {
            self.insert_at_head(value);
        }
    }
}

impl<T: Clone> Clone for LinkedList<T> {
    fn clone(&self) -> Self {
        let values: Vec<&T> = self.iter().collect();
        let mut cloned = LinkedList::new();
        for value in values.into_iter().rev() {
            cloned.insert_at_head(value.clone());
        }
        cloned
    }
}

impl<T: PartialEq> PartialEq for LinkedList<T> {
    fn eq(&self, other: &Self) -> bool {
        self.len == other.len && self.iter().eq(other.iter())
    }
}

impl<T: Eq> Eq for LinkedList<T> {}

impl<T: fmt::Debug> fmt::Debug for LinkedList<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

/// One value per line, head first.
impl<T: fmt::Display> fmt::Display for LinkedList<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for value in self.iter() {
            writeln!(f, "{value}")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn empty_list() {
        let list = LinkedList::<i32>::new();
        assert!(list.is_empty());
        assert_eq!(list.len(), 0);
        assert_eq!(list.iter().next(), None);
        assert_eq!(list.peek(), None);
    }

    #[test]
    fn single_insert_yields_single_value() {
        let mut list = LinkedList::new();
        list.insert_at_head("only");
        assert_eq!(list.iter().collect::<Vec<_>>(), vec![&"only"]);
        assert!(!list.is_empty());
    }

    #[test]
    fn insert_ten_then_twenty() {
        let mut list = LinkedList::new();
        list.insert_at_head(10);
        list.insert_at_head(20);
        assert_eq!(list.iter().copied().collect::<Vec<_>>(), vec![20, 10]);
        assert_eq!(list.peek(), Some(&20));
        assert_eq!(list.len(), 2);
    }

    #[test]
    fn enumeration_restarts_from_head() {
        let list: LinkedList<i32> = (1..=5).collect();
        let first: Vec<_> = list.iter().collect();
        let second: Vec<_> = list.iter().collect();
        assert_eq!(first, second);
        assert_eq!(first, vec![&5, &4, &3, &2, &1]);
    }

    #[test]
    fn iterator_reports_exact_size() {
        let list: LinkedList<u8> = (0..4).collect();
        let mut iter = list.iter();
        assert_eq!(iter.len(), 4);
        iter.next();
        assert_eq!(iter.len(), 3);
    }

    #[test]
    fn clear_returns_to_empty() {
        let mut list: LinkedList<i32> = (0..10).collect();
        list.clear();
        assert!(list.is_empty());
        assert_eq!(list.len(), 0);

        list.insert_at_head(7);
        assert_eq!(list.iter().collect::<Vec<_>>(), vec![&7]);
    }

    #[test]
    fn owning_iterator_yields_head_first() {
        let mut list = LinkedList::new();
        list.insert_at_head(String::from("a"));
        list.insert_at_head(String::from("b"));
        let values: Vec<String> = list.into_iter().collect();
        assert_eq!(values, vec!["b".to_string(), "a".to_string()]);
    }

    #[test]
    fn display_writes_one_value_per_line() {
        let mut list = LinkedList::new();
        list.insert_at_head(10);
        list.insert_at_head(20);
        assert_eq!(list.to_string(), "20\n10\n");
        assert_eq!(LinkedList::<i32>::new().to_string(), "");
    }

    #[test]
    fn debug_renders_as_list() {
        let list: LinkedList<i32> = vec![1, 2].into_iter().collect();
        assert_eq!(format!("{list:?}"), "[2, 1]");
    }

    #[test]
    fn clone_preserves_order_and_is_independent() {
        let original: LinkedList<i32> = (1..=3).collect();
        let mut copy = original.clone();
        assert_eq!(copy, original);

        copy.insert_at_head(99);
        assert_ne!(copy, original);
        assert_eq!(original.len(), 3);
    }

    #[test]
    fn dropping_long_list_does_not_overflow() {
        let mut list = LinkedList::new();
        for i in 0..1_000_000u32 {
            list.insert_at_head(i);
        }
        assert_eq!(list.len(), 1_000_000);
        drop(list);
    }

    proptest! {
        #[test]
        fn enumeration_reverses_insertion_order(values: Vec<i64>) {
            let mut list = LinkedList::new();
            for v in &values {
                list.insert_at_head(*v);
            }

            let enumerated: Vec<i64> = list.iter().copied().collect();
            let mut expected = values.clone();
            expected.reverse();

            prop_assert_eq!(enumerated, expected);
            prop_assert_eq!(list.len(), values.len());
            prop_assert_eq!(list.iter().count(), values.len());
        }

        #[test]
        fn node_count_matches_insertions(k in 0usize..500) {
            let list: LinkedList<usize> = (0..k).collect();
            prop_assert_eq!(list.len(), k);
            prop_assert_eq!(list.into_iter().count(), k);
        }
    }
}
