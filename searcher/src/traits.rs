use std::fmt::Debug;
use std::hash::Hash;
use std::ops::Add;

use num::Zero;

use crate::errors::{Result, SearchError};

/// Numeric type used to accumulate step costs.
///
/// Any copyable, partially ordered number with a zero works,
/// including floating point costs. Search algorithms which
/// promise optimality assume costs are never negative.
pub trait Cost: Copy + Debug + PartialOrd + Add<Output = Self> + Zero {}

impl<T> Cost for T where T: Copy + Debug + PartialOrd + Add<Output = T> + Zero {}

/// A single transition out of a state.
#[derive(Debug, Clone, PartialEq)]
pub struct Successor<S, A, C> {
    pub state: S,
    pub action: A,
    pub cost: C,
}

impl<S, A, C> Successor<S, A, C> {
    pub fn new(state: S, action: A, cost: C) -> Self {
        Self {
            state,
            action,
            cost,
        }
    }
}

impl<S, A, C> From<(S, A, C)> for Successor<S, A, C> {
    fn from(triple: (S, A, C)) -> Self {
        Successor::new(triple.0, triple.1, triple.2)
    }
}

/// Provides an interface for conducting searches.
///
/// A problem describes a state space: where to start,
/// which states are goals and how to move between states.
/// The search algorithms never look inside states or actions,
/// they only hash and compare states and collect actions.
pub trait SearchProblem {
    type State: Debug + Clone + Eq + Hash;
    type Action: Debug + Clone;
    type Cost: Cost;

    /// The state every search begins from.
    fn start_state(&self) -> Self::State;

    /// Is this state a valid goal state?
    fn is_goal_state(&self, state: &Self::State) -> bool;

    /// States reachable in one step, along with the action
    /// which gets there and the (non-negative) step cost.
    fn successors(
        &self,
        state: &Self::State,
    ) -> Vec<Successor<Self::State, Self::Action, Self::Cost>>;

    /// Total cost of a sequence of actions from the start state.
    ///
    /// Search algorithms do not call this. Problems which do not
    /// override it report [SearchError::NotImplemented].
    fn cost_of_actions(&self, _actions: &[Self::Action]) -> Result<Self::Cost> {
        Err(SearchError::NotImplemented {
            method: "cost_of_actions",
        })
    }
}

/// An estimate of the remaining cost from a state to the nearest goal.
///
/// A* only returns optimal solutions when the heuristic never
/// overestimates and is consistent along edges. Nothing checks this.
pub trait Heuristic<P>
where
    P: SearchProblem,
{
    fn estimate(&self, state: &P::State, problem: &P) -> P::Cost;
}

impl<P, F> Heuristic<P> for F
where
    P: SearchProblem,
    F: Fn(&P::State, &P) -> P::Cost,
{
    fn estimate(&self, state: &P::State, problem: &P) -> P::Cost {
        self(state, problem)
    }
}

/// The trivial heuristic, which turns A* into uniform cost search.
#[derive(Debug, Clone, Copy, Default)]
pub struct NullHeuristic;

impl<P> Heuristic<P> for NullHeuristic
where
    P: SearchProblem,
{
    fn estimate(&self, _state: &P::State, _problem: &P) -> P::Cost {
        P::Cost::zero()
    }
}

/// Function form of [NullHeuristic].
pub fn null_heuristic<P>(_state: &P::State, _problem: &P) -> P::Cost
where
    P: SearchProblem,
{
    P::Cost::zero()
}
