pub use bfs::breadth_first_search;
pub use dfs::depth_first_search;

pub mod bfs {
    use crate::algorithm::cache::VisitedSet;
    use crate::algorithm::queue::Queue;
    use crate::algorithm::{ProblemNode, SearchAlgorithm};
    use crate::traits::{NullHeuristic, SearchProblem};

    pub type BreadthFirstSearcher<'p, P> = SearchAlgorithm<
        'p,
        P,
        Queue<ProblemNode<P>>,
        VisitedSet<<P as SearchProblem>::State>,
        NullHeuristic,
    >;

    pub fn build<P>(problem: &P) -> BreadthFirstSearcher<'_, P>
    where
        P: SearchProblem,
    {
        SearchAlgorithm::new(problem, NullHeuristic)
    }

    /// Breadth-first search, which finds the solution with the fewest
    /// actions regardless of step costs.
    ///
    /// Successors are queued in the order the problem returns them.
    pub fn breadth_first_search<P>(problem: &P) -> Option<Vec<P::Action>>
    where
        P: SearchProblem,
    {
        build(problem).run().solution
    }
}

pub mod dfs {
    use crate::algorithm::cache::VisitedSet;
    use crate::algorithm::queue::Stack;
    use crate::algorithm::{ProblemNode, SearchAlgorithm};
    use crate::traits::{NullHeuristic, SearchProblem};

    pub type DepthFirstSearcher<'p, P> = SearchAlgorithm<
        'p,
        P,
        Stack<ProblemNode<P>>,
        VisitedSet<<P as SearchProblem>::State>,
        NullHeuristic,
    >;

    pub fn build<P>(problem: &P) -> DepthFirstSearcher<'_, P>
    where
        P: SearchProblem,
    {
        SearchAlgorithm::new(problem, NullHeuristic)
    }

    /// Depth-first search. Finds some solution, not necessarily a
    /// short or cheap one.
    ///
    /// States are marked visited when popped, so a state can sit on
    /// the stack several times but is only ever expanded once.
    pub fn depth_first_search<P>(problem: &P) -> Option<Vec<P::Action>>
    where
        P: SearchProblem,
    {
        build(problem).run().solution
    }
}
