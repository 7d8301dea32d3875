//! Generalized search algorithms, especially useful for graph traversal.
//!
//! To use these search algorithms, implement the trait [SearchProblem],
//! which describes a start state, a goal test and a successor function.
//! Every search returns the actions leading from the start to a goal,
//! or `None` when no goal can be reached.

pub mod algorithm;
mod errors;
pub mod report;
mod traits;

pub use errors::Result as SearchResult;
pub use errors::SearchError;
pub use traits::{null_heuristic, Cost, Heuristic, NullHeuristic, SearchProblem, Successor};

pub use algorithm::depth::{DepthLimit, DepthLimited, DEFAULT_MAX_DEPTH};
pub use algorithm::Outcome;
pub use report::{Report, Strategy};

pub use algorithm::astar;
pub use algorithm::basic::{bfs, dfs};
pub use algorithm::depth;
pub use algorithm::dijkstra;

pub use algorithm::astar::a_star_search;
pub use algorithm::basic::breadth_first_search;
pub use algorithm::basic::depth_first_search;
pub use algorithm::depth::{
    depth_limited_dfs, depth_limited_report, depth_limited_search, iterative_deepening_report,
    iterative_deepening_search,
};
pub use algorithm::dijkstra::uniform_cost_search;

/// Short names for the search strategies.
pub mod short {
    pub use crate::a_star_search as astar;
    pub use crate::breadth_first_search as bfs;
    pub use crate::depth_first_search as dfs;
    pub use crate::depth_limited_search as dldfs;
    pub use crate::iterative_deepening_search as iddfs;
    pub use crate::uniform_cost_search as ucs;
}

#[cfg(test)]
mod test {
    use super::short;
    use crate::algorithm::helpers::*;
    use crate::{DepthLimit, NullHeuristic, SearchProblem};

    #[test]
    fn short_names() {
        let graph = diamond();

        let wandering = short::dfs(&graph).unwrap();
        assert!(graph.reaches_goal(&wandering));

        assert_eq!(short::bfs(&graph).map(|p| p.len()), Some(2));

        let cheapest = short::ucs(&graph).unwrap();
        assert_eq!(graph.cost_of_actions(&cheapest), Ok(3));
        assert_eq!(short::astar(&graph, NullHeuristic), Some(cheapest));

        let limited = short::dldfs(&graph, DepthLimit::default()).unwrap();
        assert!(graph.reaches_goal(&limited));
        assert_eq!(short::dldfs(&graph, DepthLimit::Bounded(1)), None);

        assert_eq!(
            short::iddfs(&graph, DepthLimit::default()).map(|p| p.len()),
            Some(2)
        );
    }
}
