//! Search caching support to eliminate already explored states.

use std::collections::{HashMap, HashSet};
use std::default::Default;
use std::hash::Hash;

use super::Node;

/// Defines the behavior required of a search cache.
///
/// A cache is consulted once for every candidate popped off
/// of the frontier, and decides whether that candidate should
/// be expanded.
pub trait Cache<S, A, C>: Default {
    /// Record this candidate, returning `true` if it should be
    /// expanded and `false` if it should be skipped.
    fn check(&mut self, candidate: &Node<S, A, C>) -> bool;

    /// Should a successor leading to this state be dropped
    /// before it is ever pushed onto the frontier?
    fn prune(&self, _state: &S) -> bool {
        false
    }

    /// Number of distinct states recorded.
    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Marks states as visited forever. Once a state has been
/// expanded it will never be expanded again.
#[derive(Debug)]
pub struct VisitedSet<S> {
    visited: HashSet<S>,
}

impl<S> Default for VisitedSet<S> {
    fn default() -> Self {
        VisitedSet {
            visited: HashSet::new(),
        }
    }
}

impl<S, A, C> Cache<S, A, C> for VisitedSet<S>
where
    S: Clone + Eq + Hash,
{
    fn check(&mut self, candidate: &Node<S, A, C>) -> bool {
        self.visited.insert(candidate.state.clone())
    }

    fn prune(&self, state: &S) -> bool {
        self.visited.contains(state)
    }

    fn len(&self) -> usize {
        self.visited.len()
    }
}

/// Keeps the best value seen for each state.
///
/// (a) States which are not in the cache are added.
/// (b) If the state is already in the cache with a value
///     at least as good, the candidate is ignored.
/// (c) If the candidate improves on the cached value, it
///     becomes the new winner.
fn improve<S, V>(cache: &mut HashMap<S, V>, state: &S, value: V) -> bool
where
    S: Clone + Eq + Hash,
    V: PartialOrd,
{
    match cache.get_mut(state) {
        // (b)
        Some(best) if *best <= value => false,
        // (c)
        Some(best) => {
            *best = value;
            true
        }
        // (a)
        None => {
            cache.insert(state.clone(), value);
            true
        }
    }
}

/// Remembers the lowest path cost used to reach each state.
#[derive(Debug)]
pub struct CostCache<S, C> {
    cache: HashMap<S, C>,
}

impl<S, C> Default for CostCache<S, C> {
    fn default() -> Self {
        CostCache {
            cache: HashMap::new(),
        }
    }
}

impl<S, A, C> Cache<S, A, C> for CostCache<S, C>
where
    S: Clone + Eq + Hash,
    C: Copy + PartialOrd,
{
    fn check(&mut self, candidate: &Node<S, A, C>) -> bool {
        improve(&mut self.cache, &candidate.state, candidate.cost)
    }

    fn len(&self) -> usize {
        self.cache.len()
    }
}

/// Remembers the shallowest depth at which each state was expanded.
#[derive(Debug)]
pub struct DepthCache<S> {
    cache: HashMap<S, usize>,
}

impl<S> Default for DepthCache<S> {
    fn default() -> Self {
        DepthCache {
            cache: HashMap::new(),
        }
    }
}

impl<S, A, C> Cache<S, A, C> for DepthCache<S>
where
    S: Clone + Eq + Hash,
{
    fn check(&mut self, candidate: &Node<S, A, C>) -> bool {
        improve(&mut self.cache, &candidate.state, candidate.depth)
    }

    fn len(&self) -> usize {
        self.cache.len()
    }
}
