use std::cmp::Reverse;
use std::collections::BinaryHeap;
use std::fmt::Debug;

/// Min-priority queue of discovered vertices for label-setting searches.
///
/// There is no decrease-key: a vertex whose priority drops is pushed again
/// and the caller skips the stale entry when it surfaces. Equal priorities
/// come out in insertion order.
#[derive(Debug)]
pub struct Frontier<V, P>
where
    V: Copy + Eq + Debug + Ord,
    P: Copy + Debug + Ord,
{
    /// The underlying binary heap, keyed by (priority, insertion sequence)
    heap: BinaryHeap<Reverse<(P, u64, V)>>,

    /// Sequence number handed to the next pushed entry
    next_seq: u64,
}

impl<V, P> Frontier<V, P>
where
    V: Copy + Eq + Debug + Ord,
    P: Copy + Debug + Ord,
{
    /// Creates a new empty frontier
    pub fn new() -> Self {
        Frontier {
            heap: BinaryHeap::new(),
            next_seq: 0,
        }
    }

    /// Creates an empty frontier with room for `capacity` entries
    pub fn with_capacity(capacity: usize) -> Self {
        Frontier {
            heap: BinaryHeap::with_capacity(capacity),
            next_seq: 0,
        }
    }

    /// Returns true if the frontier is empty
    pub fn is_empty(&self) -> bool {
        self.heap.is_empty()
    }

    /// Number of entries, stale ones included
    pub fn len(&self) -> usize {
        self.heap.len()
    }

    /// Pushes a vertex with the given priority
    pub fn push(&mut self, vertex: V, priority: P) {
        self.heap.push(Reverse((priority, self.next_seq, vertex)));
        self.next_seq += 1;
    }

    /// Removes the entry with the smallest priority
    pub fn pop(&mut self) -> Option<(V, P)> {
        self.heap.pop().map(|Reverse((priority, _, vertex))| (vertex, priority))
    }

    /// Returns the entry with the smallest priority without removing it
    pub fn peek(&self) -> Option<(V, P)> {
        self.heap.peek().map(|Reverse((priority, _, vertex))| (*vertex, *priority))
    }

    pub fn clear(&mut self) {
        self.heap.clear();
    }
}

impl<V, P> Default for Frontier<V, P>
where
    V: Copy + Eq + Debug + Ord,
    P: Copy + Debug + Ord,
{
    fn default() -> Self {
        Frontier::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pops_smallest_first() {
        let mut frontier: Frontier<usize, u32> = Frontier::new();
        frontier.push(1, 30);
        frontier.push(2, 10);
        frontier.push(3, 20);

        assert_eq!(frontier.peek(), Some((2, 10)));
        assert_eq!(frontier.pop(), Some((2, 10)));
        assert_eq!(frontier.pop(), Some((3, 20)));
        assert_eq!(frontier.pop(), Some((1, 30)));
        assert!(frontier.pop().is_none());
    }

    #[test]
    fn test_ties_keep_insertion_order() {
        let mut frontier: Frontier<usize, u32> = Frontier::new();
        frontier.push(9, 5);
        frontier.push(1, 5);
        frontier.push(4, 5);

        let order: Vec<usize> = std::iter::from_fn(|| frontier.pop().map(|(v, _)| v)).collect();
        assert_eq!(order, vec![9, 1, 4]);
    }

    #[test]
    fn test_reinsertion_keeps_stale_entry() {
        let mut frontier: Frontier<usize, u32> = Frontier::with_capacity(4);
        frontier.push(7, 50);
        frontier.push(7, 20);
        assert_eq!(frontier.len(), 2);

        assert_eq!(frontier.pop(), Some((7, 20)));
        assert_eq!(frontier.pop(), Some((7, 50)));
        assert!(frontier.is_empty());
    }
}
