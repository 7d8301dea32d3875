//! Depth-bounded searches: depth-limited and iterative deepening.

use std::convert::TryFrom;
use std::fmt;
use std::str::FromStr;
use std::time::Instant;

use log::{debug, info};

use super::cache::DepthCache;
use super::queue::Stack;
use super::{ProblemNode, SearchAlgorithm};
use crate::errors::{Result, SearchError};
use crate::report::{Report, Strategy};
use crate::traits::{NullHeuristic, SearchProblem};

/// Maximum depth used when none is given.
pub const DEFAULT_MAX_DEPTH: usize = 1000;

/// How deep a depth-bounded search may go.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DepthLimit {
    Bounded(usize),
    Unbounded,
}

impl DepthLimit {
    /// May a candidate at this depth be expanded?
    pub fn allows(&self, depth: usize) -> bool {
        match self {
            DepthLimit::Bounded(cap) => depth < *cap,
            DepthLimit::Unbounded => true,
        }
    }

    /// Has an iterative search reached this limit?
    pub fn reached(&self, depth: usize) -> bool {
        match self {
            DepthLimit::Bounded(cap) => depth >= *cap,
            DepthLimit::Unbounded => false,
        }
    }
}

impl Default for DepthLimit {
    fn default() -> Self {
        DepthLimit::Bounded(DEFAULT_MAX_DEPTH)
    }
}

impl fmt::Display for DepthLimit {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            DepthLimit::Bounded(cap) => write!(f, "{}", cap),
            DepthLimit::Unbounded => write!(f, "inf"),
        }
    }
}

impl From<usize> for DepthLimit {
    fn from(cap: usize) -> Self {
        DepthLimit::Bounded(cap)
    }
}

impl From<Option<usize>> for DepthLimit {
    fn from(cap: Option<usize>) -> Self {
        cap.map(DepthLimit::Bounded).unwrap_or(DepthLimit::Unbounded)
    }
}

impl TryFrom<i64> for DepthLimit {
    type Error = SearchError;

    fn try_from(value: i64) -> Result<Self> {
        usize::try_from(value)
            .map(DepthLimit::Bounded)
            .map_err(|_| SearchError::InvalidDepthArgument(value.to_string()))
    }
}

impl FromStr for DepthLimit {
    type Err = SearchError;

    fn from_str(s: &str) -> Result<Self> {
        let s = s.trim();
        match s.to_ascii_lowercase().as_str() {
            "inf" | "infinite" | "infinity" | "none" | "unbounded" => Ok(DepthLimit::Unbounded),
            _ => {
                let value: i64 = s
                    .parse()
                    .map_err(|_| SearchError::InvalidDepthArgument(s.to_string()))?;
                DepthLimit::try_from(value)
            }
        }
    }
}

/// Result of a single depth-limited pass.
#[derive(Debug, Clone, PartialEq)]
pub struct DepthLimited<A> {
    /// Actions to the goal; empty when nothing was found.
    pub path: Vec<A>,

    /// Distinguishes "no solution" from "the start is a goal".
    pub found: bool,
    pub expanded: usize,

    /// Whether the limit stopped any candidate from being expanded.
    pub cutoff: bool,
}

/// Depth first search over a stack of (state, path, depth),
/// remembering the shallowest depth each state was expanded at.
pub type DepthLimitedSearcher<'p, P> = SearchAlgorithm<
    'p,
    P,
    Stack<ProblemNode<P>>,
    DepthCache<<P as SearchProblem>::State>,
    NullHeuristic,
>;

/// Build a depth-limited searcher.
pub fn build<P>(problem: &P, limit: DepthLimit) -> DepthLimitedSearcher<'_, P>
where
    P: SearchProblem,
{
    SearchAlgorithm::new(problem, NullHeuristic).with_limit(limit)
}

/// Depth-limited depth first search shared by both depth-bounded
/// strategies.
///
/// Goals are recognized when popped, before the limit applies, so a
/// goal exactly at the limit is still found.
pub fn depth_limited_dfs<P>(problem: &P, limit: DepthLimit) -> DepthLimited<P::Action>
where
    P: SearchProblem,
{
    let outcome = build(problem, limit).run();
    DepthLimited {
        found: outcome.found(),
        expanded: outcome.expanded,
        cutoff: outcome.cutoff,
        path: outcome.into_actions(),
    }
}

/// Run a single depth-limited search and collect its metrics.
pub fn depth_limited_report<P>(problem: &P, max_depth: DepthLimit) -> Report<P::Action>
where
    P: SearchProblem,
{
    let start = Instant::now();
    let result = depth_limited_dfs(problem, max_depth);
    let elapsed = start.elapsed();

    Report {
        strategy: Strategy::DepthLimited,
        limit: max_depth,
        depth: if result.found {
            Some(result.path.len())
        } else {
            None
        },
        solution: if result.found { Some(result.path) } else { None },
        expanded: result.expanded,
        elapsed,
    }
}

/// Depth-limited search, logging a one line status report.
pub fn depth_limited_search<P>(problem: &P, max_depth: DepthLimit) -> Option<Vec<P::Action>>
where
    P: SearchProblem,
{
    let report = depth_limited_report(problem, max_depth);
    info!("{}", report);
    report.into_solution()
}

/// Run iterative deepening and collect its metrics.
///
/// Each depth starts from scratch, so shallow states are explored
/// again on every iteration. The search stops at the first depth
/// which finds a goal, once `max_depth` is reached, or once an
/// iteration explores the whole reachable space without being cut
/// off by its limit.
pub fn iterative_deepening_report<P>(problem: &P, max_depth: DepthLimit) -> Report<P::Action>
where
    P: SearchProblem,
{
    let start = Instant::now();
    let mut expanded = 0;
    let mut depth = 1;

    let solution = loop {
        let result = depth_limited_dfs(problem, DepthLimit::Bounded(depth));
        expanded += result.expanded;

        if result.found {
            break Some(result.path);
        }
        if !result.cutoff {
            debug!("Search space exhausted at depth {}", depth);
            break None;
        }
        if max_depth.reached(depth) {
            break None;
        }
        depth += 1;
    };

    Report {
        strategy: Strategy::IterativeDeepening,
        limit: max_depth,
        depth: Some(depth),
        solution,
        expanded,
        elapsed: start.elapsed(),
    }
}

/// Iterative deepening search, logging a one line status report.
pub fn iterative_deepening_search<P>(problem: &P, max_depth: DepthLimit) -> Option<Vec<P::Action>>
where
    P: SearchProblem,
{
    let report = iterative_deepening_report(problem, max_depth);
    info!("{}", report);
    report.into_solution()
}

#[cfg(test)]
mod test {
    use super::super::helpers::*;
    use super::*;

    #[test]
    fn parse_limit() {
        assert_eq!("12".parse::<DepthLimit>(), Ok(DepthLimit::Bounded(12)));
        assert_eq!(" 0 ".parse::<DepthLimit>(), Ok(DepthLimit::Bounded(0)));
        assert_eq!("inf".parse::<DepthLimit>(), Ok(DepthLimit::Unbounded));
        assert_eq!("None".parse::<DepthLimit>(), Ok(DepthLimit::Unbounded));
        assert_eq!(
            "deep".parse::<DepthLimit>(),
            Err(SearchError::InvalidDepthArgument("deep".to_string()))
        );
        assert_eq!(
            "-3".parse::<DepthLimit>(),
            Err(SearchError::InvalidDepthArgument("-3".to_string()))
        );
        assert!("2.5".parse::<DepthLimit>().is_err());

        assert_eq!(DepthLimit::default(), DepthLimit::Bounded(DEFAULT_MAX_DEPTH));
        assert_eq!(DepthLimit::from(None), DepthLimit::Unbounded);
        assert_eq!(DepthLimit::try_from(7i64), Ok(DepthLimit::Bounded(7)));
        assert_eq!(DepthLimit::Unbounded.to_string(), "inf");
    }

    #[test]
    fn limit_boundary() {
        // S - a - b - G
        let graph = line(3);

        let shallow = depth_limited_dfs(&graph, DepthLimit::Bounded(2));
        assert!(!shallow.found);
        assert!(shallow.cutoff);
        assert!(shallow.path.is_empty());
        assert_eq!(shallow.expanded, 2);

        // The goal sits exactly at the limit.
        let exact = depth_limited_dfs(&graph, DepthLimit::Bounded(3));
        assert!(exact.found);
        assert_eq!(exact.path, vec!["S->a", "a->b", "b->G"]);
        assert_eq!(exact.expanded, 3);

        let unbounded = depth_limited_dfs(&graph, DepthLimit::Unbounded);
        assert!(unbounded.found);
        assert!(!unbounded.cutoff);
    }

    #[test]
    fn start_is_goal() {
        let graph = diamond().with_goal("S");

        let result = depth_limited_dfs(&graph, DepthLimit::Bounded(0));
        assert!(result.found);
        assert!(result.path.is_empty());
        assert_eq!(result.expanded, 0);

        let report = depth_limited_report(&graph, DepthLimit::default());
        assert_eq!(report.solution, Some(vec![]));
        assert_eq!(report.expanded, 0);

        let report = iterative_deepening_report(&graph, DepthLimit::default());
        assert_eq!(report.solution, Some(vec![]));
        assert_eq!(report.expanded, 0);
        assert_eq!(report.depth, Some(1));
    }

    #[test]
    fn revisits_shallower() {
        // The stack explores S->a->b->c first, expanding c at depth 3
        // where the limit stops x from being expanded. The direct edge
        // S->c then reaches c at depth 1, which must be expanded again.
        let graph = Graph::new("S", &["G"])
            .edge("S", "c", 1)
            .edge("S", "a", 1)
            .edge("a", "b", 1)
            .edge("b", "c", 1)
            .edge("c", "x", 1)
            .edge("x", "G", 1);

        let result = depth_limited_dfs(&graph, DepthLimit::Bounded(4));
        assert!(result.found);
        assert!(result.cutoff);
        assert_eq!(result.path, vec!["S->c", "c->x", "x->G"]);
    }

    #[test]
    fn depth_limited() {
        let graph = line(4);
        assert_eq!(depth_limited_search(&graph, DepthLimit::Bounded(3)), None);
        assert_eq!(
            depth_limited_search(&graph, DepthLimit::Bounded(4)).map(|p| p.len()),
            Some(4)
        );

        let report = depth_limited_report(&graph, DepthLimit::Bounded(10));
        assert!(report.found());
        assert_eq!(report.depth, Some(4));
        assert_eq!(report.strategy, Strategy::DepthLimited);
    }

    #[test]
    fn iterative_deepening_shortest() {
        let graph = diamond();

        let report = iterative_deepening_report(&graph, DepthLimit::default());
        let path = report.solution.clone().unwrap();
        assert_eq!(path.len(), 2);
        assert_eq!(report.depth, Some(2));
        assert!(graph.reaches_goal(&path));

        // Re-exploring shallow depths costs at least as much as a single
        // pass at the winning depth.
        let single = depth_limited_dfs(&graph, DepthLimit::Bounded(2));
        assert!(single.found);
        assert!(report.expanded >= single.expanded);
    }

    #[test]
    fn iterative_deepening_max_depth() {
        let graph = line(5);

        let report = iterative_deepening_report(&graph, DepthLimit::Bounded(3));
        assert!(!report.found());
        assert_eq!(report.depth, Some(3));
        assert_eq!(iterative_deepening_search(&graph, DepthLimit::Bounded(3)), None);

        // A zero maximum still tries depth one, but reports the maximum.
        let report = iterative_deepening_report(&graph, DepthLimit::Bounded(0));
        assert_eq!(report.depth, Some(1));
        assert!(report
            .to_string()
            .starts_with("[IDDFS] no solution within depth 0 |"));

        assert_eq!(
            iterative_deepening_search(&graph, DepthLimit::Bounded(5)).map(|p| p.len()),
            Some(5)
        );
    }

    #[test]
    fn disconnected() {
        let graph = super::super::helpers::disconnected();

        assert_eq!(depth_limited_search(&graph, DepthLimit::default()), None);
        assert_eq!(depth_limited_search(&graph, DepthLimit::Unbounded), None);

        // Once the reachable space has been exhausted, deeper
        // iterations are pointless, even without a maximum.
        let report = iterative_deepening_report(&graph, DepthLimit::Unbounded);
        assert!(!report.found());
        assert!(report.depth.unwrap() < 10);
        assert_eq!(iterative_deepening_search(&graph, DepthLimit::Unbounded), None);
    }
}
