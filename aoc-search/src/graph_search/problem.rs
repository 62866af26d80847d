//! Trait-based search problem definition.

use std::marker::PhantomData;

/// A trait for defining an implicit graph to search.
///
/// Implement this trait to describe the goal test, the neighbor enumeration
/// and the edge cost of a puzzle's state space. This provides a cleaner API
/// than passing three separate closures around.
///
/// # Type Parameters
///
/// - `T`: State type (a position, a `(position, facing)` pair, a register snapshot...)
/// - `C`: Cost type accumulated along a path
///
/// # Example
///
/// ```rust
/// use aoc_search::graph_search::{GraphSearch, SearchProblem};
///
/// /// Count up from 0 to a target, one step at a time or doubling.
/// struct ReachNumber {
///     target: u32,
/// }
///
/// impl SearchProblem<u32, u32> for ReachNumber {
///     fn is_goal(&self, n: &u32) -> bool {
///         *n == self.target
///     }
///
///     fn neighbors(&self, n: &u32) -> impl IntoIterator<Item = u32> {
///         [n + 1, n * 2].into_iter().filter(|next| *next <= self.target)
///     }
///
///     fn edge_cost(&self, _from: &u32, _to: &u32) -> u32 {
///         1
///     }
/// }
///
/// let search = GraphSearch::with_problem(ReachNumber { target: 10 });
/// let result = search.search(1);
/// // 1 -> 2 -> 4 -> 5 -> 10
/// assert_eq!(result.cost_to_goal(), Ok(4));
/// ```
pub trait SearchProblem<T, C> {
    /// Returns true if `state` is an acceptable search target.
    ///
    /// Evaluated once per expanded state.
    fn is_goal(&self, state: &T) -> bool;

    /// Returns the states adjacent to `state`.
    ///
    /// Returning `state` itself creates a self-loop; the search discards it
    /// because the state has already been seen.
    fn neighbors(&self, state: &T) -> impl IntoIterator<Item = T>;

    /// Returns the cost of moving from `from` to `to`, where `to` is one of
    /// `neighbors(from)`. Must be non-negative.
    fn edge_cost(&self, from: &T, to: &T) -> C;
}

/// Marker trait for search problems that can be shared across threads.
///
/// Required by [`GraphSearch::par_search_many`](super::GraphSearch::par_search_many).
pub trait ParallelSearchProblem<T, C>: SearchProblem<T, C> + Send + Sync {}

// Blanket implementation: any SearchProblem that is Send + Sync is also ParallelSearchProblem
impl<P, T, C> ParallelSearchProblem<T, C> for P where P: SearchProblem<T, C> + Send + Sync {}

/// Wrapper to adapt closure functions to the [`SearchProblem`] trait.
///
/// # Example
///
/// ```rust
/// use aoc_search::graph_search::{ClosureProblem, GraphSearch};
///
/// let problem = ClosureProblem::new(
///     |n: &i64| *n == 0,
///     |n: &i64| [n - 1, n / 2],
///     |_from: &i64, _to: &i64| 1u32,
/// );
///
/// let result = GraphSearch::with_problem(problem).search(9);
/// // 9 -> 4 -> 2 -> 1 -> 0
/// assert_eq!(result.cost_to_goal(), Ok(4));
/// ```
pub struct ClosureProblem<T, C, G, N, E> {
    goal_fn: G,
    neighbors_fn: N,
    cost_fn: E,
    _phantom: PhantomData<(T, C)>,
}

impl<T, C, G, N, I, E> ClosureProblem<T, C, G, N, E>
where
    G: Fn(&T) -> bool,
    N: Fn(&T) -> I,
    I: IntoIterator<Item = T>,
    E: Fn(&T, &T) -> C,
{
    /// Creates a problem from a goal predicate, a neighbor function and an
    /// edge cost function.
    pub fn new(goal_fn: G, neighbors_fn: N, cost_fn: E) -> Self {
        Self {
            goal_fn,
            neighbors_fn,
            cost_fn,
            _phantom: PhantomData,
        }
    }
}

impl<T, C, G, N, I, E> SearchProblem<T, C> for ClosureProblem<T, C, G, N, E>
where
    G: Fn(&T) -> bool,
    N: Fn(&T) -> I,
    I: IntoIterator<Item = T>,
    E: Fn(&T, &T) -> C,
{
    fn is_goal(&self, state: &T) -> bool {
        (self.goal_fn)(state)
    }

    fn neighbors(&self, state: &T) -> impl IntoIterator<Item = T> {
        (self.neighbors_fn)(state)
    }

    fn edge_cost(&self, from: &T, to: &T) -> C {
        (self.cost_fn)(from, to)
    }
}
