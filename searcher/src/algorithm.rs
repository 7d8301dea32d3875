//! Provides the building blocks for search algorithms

use std::default::Default;

use log::{debug, trace};

use self::cache::Cache;
use self::depth::DepthLimit;
use self::queue::{Prioritized, SearchQueue};
use crate::traits::{Cost, Heuristic, SearchProblem, Successor};

pub mod astar;
pub mod basic;
pub mod cache;
pub mod depth;
pub mod dijkstra;
pub mod queue;

#[cfg(test)]
pub(crate) mod helpers;

/// A candidate sitting on the frontier.
///
/// Every node owns its own copy of the actions taken to
/// reach it, so branching never shares a path between nodes.
#[derive(Debug, Clone, PartialEq)]
pub struct Node<S, A, C> {
    pub state: S,
    pub actions: Vec<A>,

    /// Accumulated path cost (g).
    pub cost: C,

    /// Frontier ordering key, g + h for informed searches.
    pub priority: C,
    pub depth: usize,
}

impl<S, A, C> Node<S, A, C>
where
    A: Clone,
    C: Cost,
{
    fn start(state: S, priority: C) -> Self {
        Self {
            state,
            actions: Vec::new(),
            cost: C::zero(),
            priority,
            depth: 0,
        }
    }

    fn step(&self, successor: Successor<S, A, C>, cost: C, priority: C) -> Self {
        let mut actions = Vec::with_capacity(self.actions.len() + 1);
        actions.extend(self.actions.iter().cloned());
        actions.push(successor.action);
        Self {
            state: successor.state,
            actions,
            cost,
            priority,
            depth: self.depth + 1,
        }
    }
}

impl<S, A, C> Prioritized for Node<S, A, C>
where
    C: Cost,
{
    type Priority = C;

    fn priority(&self) -> Self::Priority {
        self.priority
    }
}

/// Frontier node type for a given problem.
pub type ProblemNode<P> = Node<
    <P as SearchProblem>::State,
    <P as SearchProblem>::Action,
    <P as SearchProblem>::Cost,
>;

/// What a completed search run produced.
#[derive(Debug, Clone, PartialEq)]
pub struct Outcome<A> {
    /// Actions leading to a goal, or `None` when the frontier
    /// was exhausted. An empty solution means the start state
    /// is already a goal.
    pub solution: Option<Vec<A>>,

    /// Number of states expanded (successors generated).
    pub expanded: usize,

    /// Whether any candidate was discarded for being too deep.
    pub cutoff: bool,
}

impl<A> Outcome<A> {
    pub fn found(&self) -> bool {
        self.solution.is_some()
    }

    /// The solution actions, or an empty sequence if none was found.
    pub fn into_actions(self) -> Vec<A> {
        self.solution.unwrap_or_default()
    }
}

/// Implementation of search, using generic components.
///
/// Uses a generic queue (Q) and a generic cache (C) to provide
/// a single foundation for multiple search algorithms. The heuristic
/// (H) only affects the frontier order of priority queues.
///
/// Each popped candidate is
/// 1. returned if it is a goal,
/// 2. discarded if it is at the depth limit,
/// 3. discarded if the cache rejects it,
/// 4. otherwise expanded, pushing every successor the cache
///    does not prune.
#[derive(Debug)]
pub struct SearchAlgorithm<'p, P, Q, C, H>
where
    P: SearchProblem,
    Q: SearchQueue<Candidate = ProblemNode<P>> + Default,
    C: Cache<P::State, P::Action, P::Cost>,
    H: Heuristic<P>,
{
    problem: &'p P,
    heuristic: H,
    queue: Q,
    cache: C,
    limit: DepthLimit,
    expanded: usize,
    cutoff: bool,
}

impl<'p, P, Q, C, H> SearchAlgorithm<'p, P, Q, C, H>
where
    P: SearchProblem,
    Q: SearchQueue<Candidate = ProblemNode<P>> + Default,
    C: Cache<P::State, P::Action, P::Cost>,
    H: Heuristic<P>,
{
    pub(crate) fn new(problem: &'p P, heuristic: H) -> Self {
        let start = problem.start_state();
        let priority = heuristic.estimate(&start, problem);
        let mut sr = SearchAlgorithm {
            problem,
            heuristic,
            queue: Q::default(),
            cache: C::default(),
            limit: DepthLimit::Unbounded,
            expanded: 0,
            cutoff: false,
        };
        sr.queue.push(Node::start(start, priority));
        sr
    }

    /// Never expand candidates at or beyond this depth.
    ///
    /// Candidates at the limit are still checked as goals.
    pub fn with_limit(mut self, limit: DepthLimit) -> Self {
        self.limit = limit;
        self
    }

    fn expand(&mut self, candidate: ProblemNode<P>) {
        self.expanded += 1;
        for successor in self.problem.successors(&candidate.state) {
            if self.cache.prune(&successor.state) {
                continue;
            }
            let cost = candidate.cost + successor.cost;
            let priority = cost + self.heuristic.estimate(&successor.state, self.problem);
            self.queue.push(candidate.step(successor, cost, priority));
        }
    }

    fn finish(self, solution: Option<Vec<P::Action>>) -> Outcome<P::Action> {
        debug!(
            "Search {} after {} expansions ({} queued, {} cached)",
            if solution.is_some() { "succeeded" } else { "failed" },
            self.expanded,
            self.queue.len(),
            self.cache.len()
        );
        Outcome {
            solution,
            expanded: self.expanded,
            cutoff: self.cutoff,
        }
    }

    /// Run the search to completion.
    pub fn run(mut self) -> Outcome<P::Action> {
        let mut n = 0;
        while let Some(candidate) = self.queue.pop() {
            n += 1;
            if n % 10_000 == 0 {
                trace!(
                    "Q{} C{} E{} depth {} cost {:?}",
                    self.queue.len(),
                    self.cache.len(),
                    self.expanded,
                    candidate.depth,
                    candidate.cost
                );
            }

            if self.problem.is_goal_state(&candidate.state) {
                return self.finish(Some(candidate.actions));
            }

            if !self.limit.allows(candidate.depth) {
                self.cutoff = true;
                continue;
            }

            if !self.cache.check(&candidate) {
                continue;
            }

            self.expand(candidate);
        }
        self.finish(None)
    }
}
