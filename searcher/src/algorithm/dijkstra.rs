//! Uniform cost search (Dijkstra's Algorithm)

use super::cache::CostCache;
use super::queue::PriorityQueue;
use super::{ProblemNode, SearchAlgorithm};
use crate::traits::{NullHeuristic, SearchProblem};

/// Search algorithm which always expands the cheapest path so far.
pub type DijkstraSearch<'p, P> = SearchAlgorithm<
    'p,
    P,
    PriorityQueue<ProblemNode<P>>,
    CostCache<<P as SearchProblem>::State, <P as SearchProblem>::Cost>,
    NullHeuristic,
>;

/// Build a Dijkstra's Algorithm Searcher
pub fn build<P>(problem: &P) -> DijkstraSearch<'_, P>
where
    P: SearchProblem,
{
    SearchAlgorithm::new(problem, NullHeuristic)
}

/// Perform a search using Dijkstra's algorithm.
///
/// Dijkstra's algorithm behaves like a breadth first search, but always
/// searches the next cheapest path even when steps have varying
/// costs. Paths come off the queue in order of cost, so the first goal
/// popped is the cheapest one, as long as no step cost is negative.
///
/// A state is expanded again only if it is popped with a strictly lower
/// cost than it was expanded with before; stale entries are dropped.
pub fn uniform_cost_search<P>(problem: &P) -> Option<Vec<P::Action>>
where
    P: SearchProblem,
{
    build(problem).run().solution
}
