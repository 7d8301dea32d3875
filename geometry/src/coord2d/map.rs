//! Trait to define a map suitable for searching
//! on a 2D coordinate grid.
use std::fmt;

use searcher::uniform_cost_search;

use super::path::Path;
use super::problem::PositionProblem;
use super::Point;

/// Defines a map of locations on a coordinate grid.
///
/// The storage of the map is left to the implementing
/// structure, this trait simply requires a map to
/// return whether a given location is traversable.
///
/// Maps assume that traversal happens one square at
/// a time in 2-D space.
pub trait Map: Sized + fmt::Debug {
    /// Can the sprite step on this location on the path?
    fn is_traversable(&self, location: Point) -> bool;

    /// Cost of stepping onto this location.
    fn step_cost(&self, _location: Point) -> usize {
        1
    }

    /// Build a search problem for travelling between two points.
    fn problem(&self, origin: Point, target: Point) -> PositionProblem<'_, Self> {
        PositionProblem::new(self, origin, target)
    }

    /// Build the cheapest path on this map.
    ///
    /// When no path exists and the search is exhausted, return None.
    fn path(&self, origin: Point, destination: Point) -> Option<Path> {
        if !self.is_traversable(origin) {
            return None;
        }
        uniform_cost_search(&self.problem(origin, destination))
            .map(|directions| Path::follow(origin, &directions))
    }
}

#[cfg(test)]
pub(crate) mod helpers {
    use std::collections::HashSet;
    use std::str::FromStr;

    use super::super::Point;
    use super::Map;
    use crate::Position;

    /// Only the listed spaces can be walked on.
    #[derive(Debug, Default, Clone)]
    pub(crate) struct SimpleMap {
        spaces: HashSet<Point>,
    }

    impl From<Vec<Point>> for SimpleMap {
        fn from(points: Vec<Point>) -> Self {
            Self {
                spaces: points.into_iter().collect(),
            }
        }
    }

    impl FromStr for SimpleMap {
        type Err = String;

        fn from_str(s: &str) -> Result<Self, Self::Err> {
            let mut map = SimpleMap::default();
            for (y, line) in s.lines().enumerate() {
                for (x, c) in line.trim().chars().enumerate() {
                    match c {
                        '.' => {
                            map.spaces.insert((x as Position, y as Position).into());
                        }
                        '#' => {}
                        _ => return Err(format!("Unexpected map character: {}", c)),
                    };
                }
            }
            Ok(map)
        }
    }

    impl Map for SimpleMap {
        fn is_traversable(&self, location: Point) -> bool {
            self.spaces.contains(&location)
        }
    }

    /// An infinite plane with a few walls. Useful to check that
    /// searches do not wander off forever.
    #[derive(Debug, Default, Clone)]
    pub(crate) struct OpenMap {
        walls: HashSet<Point>,
    }

    impl FromStr for OpenMap {
        type Err = String;

        fn from_str(s: &str) -> Result<Self, Self::Err> {
            let mut map = OpenMap::default();
            for (y, line) in s.lines().enumerate() {
                for (x, c) in line.trim().chars().enumerate() {
                    match c {
                        '.' => {}
                        '#' => {
                            map.walls.insert((x as Position, y as Position).into());
                        }
                        _ => return Err(format!("Unexpected map character: {}", c)),
                    };
                }
            }
            Ok(map)
        }
    }

    impl Map for OpenMap {
        fn is_traversable(&self, location: Point) -> bool {
            !self.walls.contains(&location)
        }
    }
}

#[cfg(test)]
mod test {
    use super::helpers::*;
    use super::*;

    #[test]
    fn simple() {
        let map: SimpleMap = vec![(0, 0).into()].into();

        assert_eq!(
            map.path((0, 0).into(), (0, 0).into()),
            Some(vec![(0, 0).into()].into())
        );
        assert_eq!(map.path((1, 0).into(), (0, 0).into()), None);
    }

    #[test]
    fn shortest() {
        let map: SimpleMap = "
        #######
        #.....#
        #.###.#
        #.#...#
        #.#.###
        #.....#
        #######"
            .parse()
            .unwrap();

        // Lines are counted from the leading newline.
        let path = map.path((1, 2).into(), (3, 4).into()).unwrap();
        assert_eq!(path.distance(), 8);
        assert_eq!(path.destination(), &Point::new(3, 4));
    }

    #[test]
    fn openmap() {
        let map: OpenMap = "
        .....
        .###.
        .#...
        .#.#.
        ....."
            .parse()
            .unwrap();

        let path = map.path((0, 1).into(), (2, 3).into()).unwrap();
        assert_eq!(path.distance(), 8);
    }
}
