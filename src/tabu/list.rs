//! Bounded FIFO history of visited solutions.

use std::collections::VecDeque;

/// A tabu list holding at most `capacity` solutions.
///
/// Pushing onto a full list evicts the oldest entry. Duplicates are kept:
/// pushing the same solution twice occupies two slots.
///
/// ```
/// use u_tabu::tabu::TabuList;
///
/// let mut list = TabuList::new(2);
/// list.push(1);
/// list.push(2);
/// list.push(3);
/// assert_eq!(list.len(), 2);
/// assert!(!list.contains(&1));
/// assert!(list.contains(&3));
/// ```
#[derive(Debug, Clone)]
pub struct TabuList<S> {
    entries: VecDeque<S>,
    capacity: usize,
}

impl<S> TabuList<S> {
    /// Creates an empty list bounded by `capacity`.
    pub fn new(capacity: usize) -> Self {
        Self {
            entries: VecDeque::with_capacity(capacity.saturating_add(1)),
            capacity,
        }
    }

    /// Appends a solution, evicting the oldest one if over capacity.
    pub fn push(&mut self, solution: S) {
        self.entries.push_back(solution);
        while self.entries.len() > self.capacity {
            self.entries.pop_front();
        }
    }

    /// Returns `true` if any entry satisfies `same`.
    pub fn contains_by<F>(&self, mut same: F) -> bool
    where
        F: FnMut(&S) -> bool,
    {
        self.entries.iter().any(|entry| same(entry))
    }

    /// Number of entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the list is empty.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Maximum number of entries.
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Entries from oldest to newest.
    pub fn iter(&self) -> impl Iterator<Item = &S> {
        self.entries.iter()
    }
}

impl<S: PartialEq> TabuList<S> {
    /// Returns `true` if an equal solution is in the list.
    pub fn contains(&self, solution: &S) -> bool {
        self.contains_by(|entry| entry == solution)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_fifo_eviction_order() {
        let mut list = TabuList::new(3);
        for x in 1..=5 {
            list.push(x);
        }
        let kept: Vec<i32> = list.iter().copied().collect();
        assert_eq!(kept, vec![3, 4, 5]);
    }

    #[test]
    fn test_duplicates_kept() {
        let mut list = TabuList::new(4);
        list.push(vec![true, false]);
        list.push(vec![true, false]);
        assert_eq!(list.len(), 2);
        assert!(list.contains(&vec![true, false]));
        assert!(!list.contains(&vec![false, false]));
    }

    #[test]
    fn test_contains_by_custom_equality() {
        let mut list = TabuList::new(2);
        list.push((1, "a"));
        assert!(list.contains_by(|&(id, _)| id == 1));
        assert!(!list.contains_by(|&(id, _)| id == 2));
    }

    #[test]
    fn test_exact_float_membership() {
        let mut list = TabuList::new(2);
        list.push(0.1_f64 + 0.2);
        assert!(list.contains(&(0.1 + 0.2)));
        assert!(!list.contains(&0.3));
    }

    proptest! {
        #[test]
        fn prop_len_never_exceeds_capacity(
            capacity in 1usize..20,
            pushes in proptest::collection::vec(0u8..8, 0..100),
        ) {
            let mut list = TabuList::new(capacity);
            for p in pushes {
                list.push(p);
                prop_assert!(list.len() <= capacity);
            }
        }

        #[test]
        fn prop_keeps_most_recent(
            capacity in 1usize..10,
            pushes in proptest::collection::vec(any::<u16>(), 1..50),
        ) {
            let mut list = TabuList::new(capacity);
            for &p in &pushes {
                list.push(p);
            }
            let start = pushes.len().saturating_sub(capacity);
            let kept: Vec<u16> = list.iter().copied().collect();
            prop_assert_eq!(kept, pushes[start..].to_vec());
        }
    }
}
