//! Routes across a grid, one point per step.

use std::fmt;
use std::ops::Deref;

use itertools::Itertools;

use super::{Direction, Point};

/// The points visited by a route, origin first.
///
/// A path always holds at least its origin.
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct Path {
    steps: Vec<Point>,
}

impl From<Vec<Point>> for Path {
    fn from(steps: Vec<Point>) -> Self {
        assert!(!steps.is_empty(), "a path needs an origin");
        Self { steps }
    }
}

impl Path {
    pub fn new(origin: Point) -> Self {
        Path {
            steps: vec![origin],
        }
    }

    /// Replay a sequence of moves starting from the origin.
    pub fn follow<'a>(origin: Point, directions: impl IntoIterator<Item = &'a Direction>) -> Self {
        let mut path = Path::new(origin);
        path.extend(directions.into_iter().copied());
        path
    }

    /// Take one more step.
    pub fn push(&mut self, direction: Direction) {
        let next = self.destination().step(direction);
        self.steps.push(next);
    }

    pub fn destination(&self) -> &Point {
        &self.steps[self.steps.len() - 1]
    }

    /// Number of steps taken.
    pub fn distance(&self) -> usize {
        self.steps.len() - 1
    }

    pub fn is_empty(&self) -> bool {
        self.distance() == 0
    }
}

impl Extend<Direction> for Path {
    fn extend<I: IntoIterator<Item = Direction>>(&mut self, directions: I) {
        for direction in directions {
            self.push(direction);
        }
    }
}

impl Deref for Path {
    type Target = [Point];

    fn deref(&self) -> &Self::Target {
        &self.steps
    }
}

impl fmt::Display for Path {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.steps.iter().join(" -> "))
    }
}
