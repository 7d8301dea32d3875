//! Small explicit graphs used to exercise the search algorithms.

use std::cell::Cell;

use crate::errors::{Result, SearchError};
use crate::traits::{SearchProblem, Successor};

const NAMES: [&str; 12] = ["S", "a", "b", "c", "d", "e", "f", "g", "h", "i", "j", "k"];

/// A directed graph with weighted edges, labelled "from->to".
#[derive(Debug, Clone)]
pub(crate) struct Graph {
    start: &'static str,
    goals: Vec<&'static str>,
    edges: Vec<(&'static str, &'static str, u32)>,
    expansions: Cell<usize>,
}

impl Graph {
    pub(crate) fn new(start: &'static str, goals: &[&'static str]) -> Self {
        Self {
            start,
            goals: goals.to_vec(),
            edges: Vec::new(),
            expansions: Cell::new(0),
        }
    }

    pub(crate) fn edge(mut self, from: &'static str, to: &'static str, cost: u32) -> Self {
        self.edges.push((from, to, cost));
        self
    }

    /// An edge in both directions.
    pub(crate) fn both(self, a: &'static str, b: &'static str, cost: u32) -> Self {
        self.edge(a, b, cost).edge(b, a, cost)
    }

    pub(crate) fn with_goal(mut self, goal: &'static str) -> Self {
        self.goals = vec![goal];
        self
    }

    /// How many times `successors` has been called.
    pub(crate) fn expansions(&self) -> usize {
        self.expansions.get()
    }

    fn follow(&self, from: &str, action: &str) -> Option<(&'static str, u32)> {
        self.edges
            .iter()
            .find(|(f, t, _)| *f == from && format!("{}->{}", f, t) == action)
            .map(|(_, t, c)| (*t, *c))
    }

    /// Does this sequence of actions lead from the start to a goal?
    pub(crate) fn reaches_goal(&self, actions: &[String]) -> bool {
        let mut state = self.start;
        for action in actions {
            match self.follow(state, action) {
                Some((next, _)) => state = next,
                None => return false,
            }
        }
        self.is_goal_state(&state)
    }
}

impl SearchProblem for Graph {
    type State = &'static str;
    type Action = String;
    type Cost = u32;

    fn start_state(&self) -> Self::State {
        self.start
    }

    fn is_goal_state(&self, state: &Self::State) -> bool {
        self.goals.contains(state)
    }

    fn successors(&self, state: &Self::State) -> Vec<Successor<Self::State, String, u32>> {
        self.expansions.set(self.expansions.get() + 1);
        self.edges
            .iter()
            .filter(|(from, _, _)| from == state)
            .map(|(from, to, cost)| Successor::new(*to, format!("{}->{}", from, to), *cost))
            .collect()
    }

    fn cost_of_actions(&self, actions: &[String]) -> Result<u32> {
        let mut state = self.start;
        let mut total = 0;
        for (step, action) in actions.iter().enumerate() {
            let (next, cost) = self
                .follow(state, action)
                .ok_or(SearchError::IllegalAction { step })?;
            state = next;
            total += cost;
        }
        Ok(total)
    }
}

/// A chain S -> a -> b -> ... -> G with `length` unit edges.
pub(crate) fn line(length: usize) -> Graph {
    let mut graph = Graph::new("S", &["G"]);
    for i in 0..length {
        let from = NAMES[i];
        let to = if i + 1 == length { "G" } else { NAMES[i + 1] };
        graph = graph.edge(from, to, 1);
    }
    graph
}

/// Two routes to G: S-a-c-G costs 3 over three steps,
/// S-b-G costs 6 over two steps.
pub(crate) fn diamond() -> Graph {
    Graph::new("S", &["G"])
        .edge("S", "a", 1)
        .edge("S", "b", 1)
        .edge("a", "c", 1)
        .edge("c", "G", 1)
        .edge("b", "G", 5)
}

/// G exists, but nothing reachable from S leads to it.
pub(crate) fn disconnected() -> Graph {
    Graph::new("S", &["G"])
        .both("S", "a", 1)
        .edge("a", "b", 2)
        .edge("G", "S", 1)
}

/// A problem which only implements the required methods.
#[derive(Debug)]
pub(crate) struct Bare;

impl SearchProblem for Bare {
    type State = u8;
    type Action = u8;
    type Cost = f64;

    fn start_state(&self) -> u8 {
        0
    }

    fn is_goal_state(&self, state: &u8) -> bool {
        *state == 3
    }

    fn successors(&self, state: &u8) -> Vec<Successor<u8, u8, f64>> {
        if *state < 3 {
            vec![(state + 1, state + 1, 0.5).into()]
        } else {
            Vec::new()
        }
    }
}
