//! Mazes drawn as text.
//!
//! Each character is one cell:
//!
//! - `#` or `%` is a wall,
//! - `.` or a space is open floor,
//! - `S` or `P` marks the start, `G` marks the goal,
//! - a digit `1`-`9` is open floor which costs that much to step onto.
use std::collections::HashMap;
use std::fmt;
use std::str::FromStr;

use thiserror::Error;

use super::map::Map;
use super::path::Path;
use super::problem::PositionProblem;
use super::{BoundingBox, Point};
use crate::Position;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum LayoutError {
    #[error("Unknown tile '{tile}' at {location}")]
    UnknownTile { tile: char, location: Point },

    #[error("Maze has no start (S)")]
    MissingStart,

    #[error("Maze has no goal (G)")]
    MissingGoal,

    #[error("Second start at {0}")]
    DuplicateStart(Point),

    #[error("Second goal at {0}")]
    DuplicateGoal(Point),

    #[error("{0} is not open floor")]
    Blocked(Point),

    #[error("Maze is empty")]
    Empty,
}

/// A rectangular maze with a start and a goal.
#[derive(Debug, Clone)]
pub struct Maze {
    floor: HashMap<Point, usize>,
    bbox: BoundingBox,
    start: Point,
    goal: Point,
}

impl Maze {
    pub fn start(&self) -> Point {
        self.start
    }

    pub fn goal(&self) -> Point {
        self.goal
    }

    /// Move the start somewhere else on the floor.
    pub fn with_start(mut self, start: Point) -> Result<Self, LayoutError> {
        if !self.is_traversable(start) {
            return Err(LayoutError::Blocked(start));
        }
        self.start = start;
        Ok(self)
    }

    /// Move the goal somewhere else on the floor.
    pub fn with_goal(mut self, goal: Point) -> Result<Self, LayoutError> {
        if !self.is_traversable(goal) {
            return Err(LayoutError::Blocked(goal));
        }
        self.goal = goal;
        Ok(self)
    }

    /// The search problem of getting from start to goal.
    pub fn solve(&self) -> PositionProblem<'_, Self> {
        self.problem(self.start, self.goal)
    }

    /// Draw the maze with a path on top of it.
    pub fn render<'m>(&'m self, path: &'m Path) -> Rendered<'m> {
        Rendered { maze: self, path }
    }

    fn tile(&self, point: Point) -> char {
        if point == self.start {
            return 'S';
        }
        if point == self.goal {
            return 'G';
        }
        match self.floor.get(&point).copied() {
            None => '#',
            Some(1) => '.',
            Some(cost) => std::char::from_digit(cost as u32, 10).unwrap_or('?'),
        }
    }
}

impl Map for Maze {
    fn is_traversable(&self, location: Point) -> bool {
        self.floor.contains_key(&location)
    }

    fn step_cost(&self, location: Point) -> usize {
        self.floor.get(&location).copied().unwrap_or(1)
    }
}

impl FromStr for Maze {
    type Err = LayoutError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut floor = HashMap::new();
        let mut bbox = BoundingBox::empty();
        let mut start = None;
        let mut goal = None;

        // Blank lines around the maze are dropped, blank rows inside it are floor.
        let lines: Vec<&str> = s.lines().map(|line| line.trim_end_matches('\r')).collect();
        let first = lines.iter().position(|line| !line.trim().is_empty());
        let last = lines.iter().rposition(|line| !line.trim().is_empty());
        let rows = match (first, last) {
            (Some(first), Some(last)) => &lines[first..=last],
            _ => return Err(LayoutError::Empty),
        };

        for (y, line) in rows.iter().enumerate() {
            for (x, tile) in line.chars().enumerate() {
                let location = Point::new(x as Position, y as Position);
                bbox.include(location);

                let cost = match tile {
                    '#' | '%' => continue,
                    '.' | ' ' => 1,
                    'S' | 'P' => {
                        if start.replace(location).is_some() {
                            return Err(LayoutError::DuplicateStart(location));
                        }
                        1
                    }
                    'G' => {
                        if goal.replace(location).is_some() {
                            return Err(LayoutError::DuplicateGoal(location));
                        }
                        1
                    }
                    '1'..='9' => tile.to_digit(10).map(|d| d as usize).unwrap_or(1),
                    _ => return Err(LayoutError::UnknownTile { tile, location }),
                };
                floor.insert(location, cost);
            }
        }

        Ok(Maze {
            floor,
            bbox,
            start: start.ok_or(LayoutError::MissingStart)?,
            goal: goal.ok_or(LayoutError::MissingGoal)?,
        })
    }
}

impl fmt::Display for Maze {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        self.bbox
            .printer(f, |f, point| write!(f, "{}", self.tile(*point)))
    }
}

/// A maze drawn with a path overlaid as arrows.
#[derive(Debug)]
pub struct Rendered<'m> {
    maze: &'m Maze,
    path: &'m Path,
}

impl<'m> fmt::Display for Rendered<'m> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let arrows: HashMap<Point, char> = self
            .path
            .windows(2)
            .filter_map(|w| w[0].direction(w[1]).map(|d| (w[0], d.arrow())))
            .collect();

        self.maze.bbox.printer(f, |f, point| {
            let tile = self.maze.tile(*point);
            match arrows.get(point) {
                Some(arrow) if tile != 'S' && tile != 'G' => write!(f, "{}", arrow),
                _ => write!(f, "{}", tile),
            }
        })
    }
}
