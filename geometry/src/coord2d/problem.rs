//! Travelling between two points on a map, as a search problem.
use std::str::FromStr;

use thiserror::Error;

use searcher::{Heuristic, SearchError, SearchProblem, SearchResult, Successor};

use super::map::Map;
use super::{Direction, Point};

/// Find a way from an origin to a target on a map.
///
/// States are points, actions are single steps in
/// one of the four directions.
#[derive(Debug)]
pub struct PositionProblem<'m, M> {
    map: &'m M,
    origin: Point,
    target: Point,
}

impl<'m, M> Clone for PositionProblem<'m, M> {
    fn clone(&self) -> Self {
        PositionProblem {
            map: self.map,
            origin: self.origin,
            target: self.target,
        }
    }
}

impl<'m, M> PositionProblem<'m, M>
where
    M: Map,
{
    pub fn new(map: &'m M, origin: Point, target: Point) -> Self {
        Self {
            map,
            origin,
            target,
        }
    }

    pub fn target(&self) -> Point {
        self.target
    }
}

impl<'m, M> SearchProblem for PositionProblem<'m, M>
where
    M: Map,
{
    type State = Point;
    type Action = Direction;
    type Cost = usize;

    fn start_state(&self) -> Point {
        self.origin
    }

    fn is_goal_state(&self, state: &Point) -> bool {
        *state == self.target
    }

    fn successors(&self, state: &Point) -> Vec<Successor<Point, Direction, usize>> {
        Direction::all()
            .filter_map(|direction| {
                let next = state.step(direction);
                if self.map.is_traversable(next) {
                    Some(Successor::new(next, direction, self.map.step_cost(next)))
                } else {
                    None
                }
            })
            .collect()
    }

    fn cost_of_actions(&self, actions: &[Direction]) -> SearchResult<usize> {
        let mut location = self.origin;
        let mut cost = 0;
        for (step, direction) in actions.iter().enumerate() {
            location = location.step(*direction);
            if !self.map.is_traversable(location) {
                return Err(SearchError::IllegalAction { step });
            }
            cost += self.map.step_cost(location);
        }
        Ok(cost)
    }
}

/// Distance along each axis to the target. Admissible whenever
/// every step costs at least one.
pub fn manhattan_heuristic<M: Map>(state: &Point, problem: &PositionProblem<'_, M>) -> usize {
    state.manhattan_distance(problem.target()) as usize
}

/// Straight line distance to the target, rounded down.
pub fn euclidean_heuristic<M: Map>(state: &Point, problem: &PositionProblem<'_, M>) -> usize {
    state.euclidean_distance(problem.target()).floor() as usize
}

/// Heuristics for travelling on a grid, selectable by name.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GridHeuristic {
    /// No information, A* behaves like uniform cost search.
    Null,
    Manhattan,
    Euclidean,
}

impl Default for GridHeuristic {
    fn default() -> Self {
        GridHeuristic::Manhattan
    }
}

impl<'m, M> Heuristic<PositionProblem<'m, M>> for GridHeuristic
where
    M: Map,
{
    fn estimate(&self, state: &Point, problem: &PositionProblem<'m, M>) -> usize {
        match self {
            GridHeuristic::Null => 0,
            GridHeuristic::Manhattan => manhattan_heuristic(state, problem),
            GridHeuristic::Euclidean => euclidean_heuristic(state, problem),
        }
    }
}

/// Error when a heuristic name is not recognized.
#[derive(Debug, Error, PartialEq, Eq)]
#[error("Unknown heuristic: {0}")]
pub struct UnknownHeuristic(String);

impl FromStr for GridHeuristic {
    type Err = UnknownHeuristic;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "null" | "none" | "zero" => Ok(GridHeuristic::Null),
            "manhattan" => Ok(GridHeuristic::Manhattan),
            "euclidean" => Ok(GridHeuristic::Euclidean),
            _ => Err(UnknownHeuristic(s.to_string())),
        }
    }
}
