use std::{cmp::Ordering, collections::BinaryHeap};


/// Element on the heap
/// - ordered by priority, lowest first
/// - ties broken by insertion order
#[derive(Debug)]
struct Scored<T, P> {
    element: T,
    priority: P,
    sequence: u64,
}

impl<T, P: PartialOrd> Ord for Scored<T, P> {
    fn cmp(&self, other: &Self) -> Ordering {
        // BinaryHeap pops the largest, so both comparisons are reversed
        other.priority
            .partial_cmp(&self.priority)
            .unwrap_or(Ordering::Equal)
            .then_with(|| other.sequence.cmp(&self.sequence))
    }
}
impl<T, P: PartialOrd> PartialOrd for Scored<T, P> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}
impl<T, P: PartialOrd> PartialEq for Scored<T, P> {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}
impl<T, P: PartialOrd> Eq for Scored<T, P> {}


/// Min-priority queue backed by a binary heap
/// Several entries for the same element may coexist; stale ones are not purged.
/// Membership is not tracked on enqueue, `contains` scans the heap instead
#[derive(Debug)]
pub struct PriorityQueue<T, P> {
    heap: BinaryHeap<Scored<T, P>>,
    sequence: u64,
}

impl<T, P> PriorityQueue<T, P>
where
    T: PartialEq,
    P: PartialOrd + Copy,
{

    pub fn new() -> Self {
        Self {
            heap: BinaryHeap::new(),
            sequence: 0,
        }
    }

    pub fn enqueue(&mut self, element: T, priority: P) {
        self.heap.push(Scored { element, priority, sequence: self.sequence });
        self.sequence += 1;
    }

    /// Remove the element with the lowest priority
    pub fn dequeue(&mut self) -> Option<T> {
        self.pop().map(|(element, _)| element)
    }

    /// Remove the element with the lowest priority, along with that priority
    pub fn pop(&mut self) -> Option<(T, P)> {
        let Scored { element, priority, .. } = self.heap.pop()?;
        Some((element, priority))
    }

    /// Lowest priority currently queued
    pub fn peek_priority(&self) -> Option<P> {
        self.heap.peek().map(|s| s.priority)
    }

    pub fn is_empty(&self) -> bool {
        self.heap.is_empty()
    }

    pub fn len(&self) -> usize {
        self.heap.len()
    }

    /// Membership test ignoring priority, linear in the queue length
    pub fn contains(&self, element: &T) -> bool {
        self.heap.iter().any(|s| &s.element == element)
    }
}

impl<T, P> Default for PriorityQueue<T, P>
where
    T: PartialEq,
    P: PartialOrd + Copy,
{
    fn default() -> Self {
        Self::new()
    }
}
