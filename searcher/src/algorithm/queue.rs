//! Frontier data structures.
//!
//! Each search strategy is mostly defined by the order in
//! which it pulls candidates back off of its frontier.

use std::cmp::{Ord, Ordering, PartialOrd};
use std::collections::{BinaryHeap, VecDeque};
use std::default::Default;
use std::fmt::Debug;

/// Trait used to implement queues of search candidates
/// which should be checked for completion.
pub trait SearchQueue {
    type Candidate;

    fn pop(&mut self) -> Option<Self::Candidate>;

    fn push(&mut self, item: Self::Candidate);

    /// The candidate which the next call to `pop` will return.
    fn peek(&self) -> Option<&Self::Candidate>;

    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Last-in, first-out queue for depth first searches.
#[derive(Debug)]
pub struct Stack<S> {
    queue: Vec<S>,
}

impl<S> Default for Stack<S> {
    fn default() -> Self {
        Stack { queue: Vec::new() }
    }
}

impl<S> SearchQueue for Stack<S> {
    type Candidate = S;

    fn pop(&mut self) -> Option<Self::Candidate> {
        self.queue.pop()
    }

    fn push(&mut self, item: Self::Candidate) {
        self.queue.push(item);
    }

    fn peek(&self) -> Option<&Self::Candidate> {
        self.queue.last()
    }

    fn len(&self) -> usize {
        self.queue.len()
    }
}

/// First-in, first-out queue for breadth first searches.
#[derive(Debug)]
pub struct Queue<S> {
    queue: VecDeque<S>,
}

impl<S> Default for Queue<S> {
    fn default() -> Self {
        Queue {
            queue: VecDeque::new(),
        }
    }
}

impl<S> SearchQueue for Queue<S> {
    type Candidate = S;

    fn pop(&mut self) -> Option<Self::Candidate> {
        self.queue.pop_front()
    }

    fn push(&mut self, item: Self::Candidate) {
        self.queue.push_back(item);
    }

    fn peek(&self) -> Option<&Self::Candidate> {
        self.queue.front()
    }

    fn len(&self) -> usize {
        self.queue.len()
    }
}

/// Items which know their own priority in a [PriorityQueue].
///
/// Lower priorities are popped first. Priorities which do not
/// compare with themselves, such as NaN, are popped last.
pub trait Prioritized {
    type Priority: Debug + PartialOrd;

    fn priority(&self) -> Self::Priority;
}

/// Total order over partially ordered priorities.
///
/// Values which are not comparable with themselves (NaN) sort
/// after every other value and equal to each other.
fn rank<P: PartialOrd>(a: &P, b: &P) -> Ordering {
    match a.partial_cmp(b) {
        Some(ordering) => ordering,
        None => {
            let a_unordered = a.partial_cmp(a).is_none();
            let b_unordered = b.partial_cmp(b).is_none();
            a_unordered.cmp(&b_unordered)
        }
    }
}

/// Wrapper for queue items which sorts appropriately
/// for a min-heap, breaking ties in insertion order.
#[derive(Debug)]
struct Ranked<S>
where
    S: Prioritized,
{
    priority: S::Priority,
    sequence: usize,
    item: S,
}

impl<S> PartialEq for Ranked<S>
where
    S: Prioritized,
{
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl<S> Eq for Ranked<S> where S: Prioritized {}

impl<S> Ord for Ranked<S>
where
    S: Prioritized,
{
    fn cmp(&self, other: &Self) -> Ordering {
        // BinaryHeap pops the largest element, so both keys are reversed.
        rank(&self.priority, &other.priority)
            .then(self.sequence.cmp(&other.sequence))
            .reverse()
    }
}

impl<S> PartialOrd for Ranked<S>
where
    S: Prioritized,
{
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// A priority queue which always pops the item with the
/// lowest priority. Items with equal priority come out in
/// the order they went in.
#[derive(Debug)]
pub struct PriorityQueue<S>
where
    S: Prioritized,
{
    queue: BinaryHeap<Ranked<S>>,
    counter: usize,
}

impl<S> Default for PriorityQueue<S>
where
    S: Prioritized,
{
    fn default() -> Self {
        PriorityQueue {
            queue: BinaryHeap::new(),
            counter: 0,
        }
    }
}

impl<S> SearchQueue for PriorityQueue<S>
where
    S: Prioritized,
{
    type Candidate = S;

    fn pop(&mut self) -> Option<Self::Candidate> {
        self.queue.pop().map(|r| r.item)
    }

    fn push(&mut self, item: Self::Candidate) {
        self.counter += 1;
        self.queue.push(Ranked {
            priority: item.priority(),
            sequence: self.counter,
            item,
        });
    }

    fn peek(&self) -> Option<&Self::Candidate> {
        self.queue.peek().map(|r| &r.item)
    }

    fn len(&self) -> usize {
        self.queue.len()
    }
}
