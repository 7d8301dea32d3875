use super::cache::CostCache;
use super::queue::PriorityQueue;
use super::{ProblemNode, SearchAlgorithm};
use crate::traits::{Heuristic, SearchProblem};

/// A* orders its frontier by cost so far plus the heuristic estimate.
pub type AStarSearcher<'p, P, H> = SearchAlgorithm<
    'p,
    P,
    PriorityQueue<ProblemNode<P>>,
    CostCache<<P as SearchProblem>::State, <P as SearchProblem>::Cost>,
    H,
>;

pub fn build<P, H>(problem: &P, heuristic: H) -> AStarSearcher<'_, P, H>
where
    P: SearchProblem,
    H: Heuristic<P>,
{
    SearchAlgorithm::new(problem, heuristic)
}

/// Search the node with the lowest combined cost and heuristic first.
///
/// The first goal popped is returned. It is the cheapest goal when the
/// heuristic is admissible and consistent; otherwise the answer may
/// be silently suboptimal. Use [crate::NullHeuristic] to get uniform
/// cost search.
pub fn a_star_search<P, H>(problem: &P, heuristic: H) -> Option<Vec<P::Action>>
where
    P: SearchProblem,
    H: Heuristic<P>,
{
    build(problem, heuristic).run().solution
}
