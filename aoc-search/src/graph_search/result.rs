//! The outcome of a single search invocation.

use std::collections::HashMap;
use std::hash::Hash;

use super::cost::Cost;
use super::error::SearchError;

/// Bookkeeping for one discovered state.
#[derive(Debug, Clone, PartialEq)]
pub struct SeenEntry<T, C> {
    pub(crate) cost: C,
    pub(crate) predecessor: Option<T>,
    pub(crate) expanded: bool,
}

impl<T, C: Cost> SeenEntry<T, C> {
    /// Lowest recorded cumulative cost from the start to this state.
    pub fn cost(&self) -> C {
        self.cost
    }

    /// The state this one was reached from, or `None` for the start state.
    pub fn predecessor(&self) -> Option<&T> {
        self.predecessor.as_ref()
    }

    /// Whether the state was popped from the frontier and had its neighbors enumerated.
    pub fn is_expanded(&self) -> bool {
        self.expanded
    }
}

/// Why a search stopped.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Termination {
    /// A state satisfying the goal predicate was popped
    GoalFound,
    /// The frontier emptied without reaching a goal
    FrontierExhausted,
    /// The configured expansion budget ran out before a goal was popped
    BudgetExhausted,
}

/// Counters collected while searching. Diagnostics only.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SearchStats {
    /// States popped from the frontier and expanded
    pub expanded: usize,
    /// Distinct states inserted into the seen map, the start included
    pub discovered: usize,
    /// Largest frontier size observed
    pub frontier_high_water: usize,
}

/// The immutable result of one search.
///
/// Holds the start state, the goal state that was popped (if any) and the
/// full seen map. All reads take `&self` and return the same answer every
/// time they are called.
#[derive(Debug, Clone)]
pub struct SearchResult<T, C> {
    pub(crate) start: T,
    pub(crate) goal: Option<T>,
    pub(crate) seen: HashMap<T, SeenEntry<T, C>>,
    pub(crate) termination: Termination,
    pub(crate) stats: SearchStats,
}

impl<T, C> SearchResult<T, C>
where
    T: Clone + Eq + Hash,
    C: Cost,
{
    /// The state the search started from.
    pub fn start(&self) -> &T {
        &self.start
    }

    /// The goal state that was reached, or `None` if no goal was popped.
    pub fn goal(&self) -> Option<&T> {
        self.goal.as_ref()
    }

    /// Returns true if a goal state was reached.
    pub fn is_found(&self) -> bool {
        self.goal.is_some()
    }

    /// Why the search stopped.
    pub fn termination(&self) -> Termination {
        self.termination
    }

    /// Counters collected during the search.
    pub fn stats(&self) -> SearchStats {
        self.stats
    }

    /// Returns the recorded cost of `state`.
    ///
    /// # Errors
    ///
    /// [`SearchError::StateNotReached`] if `state` was never discovered.
    pub fn cost_to(&self, state: &T) -> Result<C, SearchError> {
        self.seen
            .get(state)
            .map(SeenEntry::cost)
            .ok_or(SearchError::StateNotReached)
    }

    /// Returns the cost of the reached goal state.
    ///
    /// # Errors
    ///
    /// [`SearchError::NoPathFound`] if the search ended without a goal.
    pub fn cost_to_goal(&self) -> Result<C, SearchError> {
        let goal = self.goal.as_ref().ok_or(SearchError::NoPathFound)?;
        self.cost_to(goal)
    }

    /// Reconstructs the path from the start to the reached goal, both inclusive.
    ///
    /// Follows predecessor links iteratively, so arbitrarily long paths do not
    /// grow the call stack.
    ///
    /// # Errors
    ///
    /// [`SearchError::NoPathFound`] if the search ended without a goal.
    pub fn path_to_goal(&self) -> Result<Vec<T>, SearchError> {
        let goal = self.goal.as_ref().ok_or(SearchError::NoPathFound)?;
        self.path_to(goal)
    }

    /// Reconstructs the recorded path from the start to any discovered state.
    ///
    /// For states that were discovered but never expanded this is the best
    /// route known when the search stopped.
    ///
    /// # Errors
    ///
    /// [`SearchError::StateNotReached`] if `state` was never discovered.
    pub fn path_to(&self, state: &T) -> Result<Vec<T>, SearchError> {
        let mut path = vec![state.clone()];
        let mut current = self.seen.get(state).ok_or(SearchError::StateNotReached)?;

        while let Some(prev) = &current.predecessor {
            path.push(prev.clone());
            current = self.seen.get(prev).ok_or(SearchError::StateNotReached)?;
        }

        path.reverse();
        Ok(path)
    }

    /// All states present in the seen map, in no particular order.
    pub fn explored_states(&self) -> impl Iterator<Item = &T> + '_ {
        self.seen.keys()
    }

    /// Number of states in the seen map.
    pub fn explored_count(&self) -> usize {
        self.seen.len()
    }

    /// The bookkeeping entry for `state`, if it was discovered.
    pub fn seen_entry(&self, state: &T) -> Option<&SeenEntry<T, C>> {
        self.seen.get(state)
    }
}
