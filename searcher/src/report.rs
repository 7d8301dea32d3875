//! Status reports for depth-bounded searches.

use std::fmt;
use std::time::Duration;

use crate::algorithm::depth::DepthLimit;

/// Which depth-bounded strategy produced a report.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Strategy {
    DepthLimited,
    IterativeDeepening,
}

impl fmt::Display for Strategy {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Strategy::DepthLimited => write!(f, "DLDFS"),
            Strategy::IterativeDeepening => write!(f, "IDDFS"),
        }
    }
}

/// Result and metrics of a depth-bounded search.
///
/// The `Display` form is the one-line status message
/// logged when the search finishes.
#[derive(Debug, Clone, PartialEq)]
pub struct Report<A> {
    pub strategy: Strategy,

    /// The depth limit (or maximum depth) requested.
    pub limit: DepthLimit,

    /// Length of the solution for depth-limited searches, or
    /// the last depth tried for iterative deepening.
    pub depth: Option<usize>,
    pub solution: Option<Vec<A>>,

    /// Expansions, summed over all iterations.
    pub expanded: usize,
    pub elapsed: Duration,
}

impl<A> Report<A> {
    pub fn found(&self) -> bool {
        self.solution.is_some()
    }

    pub fn into_solution(self) -> Option<Vec<A>> {
        self.solution
    }
}

impl<A> fmt::Display for Report<A> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "[{}] ", self.strategy)?;
        match (self.strategy, self.found(), self.depth) {
            (Strategy::IterativeDeepening, true, Some(depth)) => {
                write!(f, "solution at depth {}", depth)?
            }
            (_, true, _) => write!(f, "solution within depth {}", self.limit)?,
            (_, false, _) => write!(f, "no solution within depth {}", self.limit)?,
        };
        write!(
            f,
            " | expanded {} nodes | {:.4}s",
            self.expanded,
            self.elapsed.as_secs_f64()
        )
    }
}
