//! Uniform-cost search engine.

use std::cmp::Ordering;
use std::collections::HashMap;
use std::collections::hash_map::Entry;
use std::hash::Hash;
use std::marker::PhantomData;
use std::sync::Arc;

use rayon::ThreadPool;
use rayon::prelude::*;
use tracing::{debug, trace};

use super::cost::Cost;
use super::frontier::Frontier;
use super::problem::{ClosureProblem, ParallelSearchProblem, SearchProblem};
use super::result::{SearchResult, SearchStats, SeenEntry, Termination};

/// When a discovered state's cost and predecessor stop changing.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum FreezePolicy {
    /// The first recorded cost and predecessor are final.
    ///
    /// Later routes to an already-seen state are discarded even when cheaper.
    /// Optimal for uniform edge costs; with mixed costs the answer depends on
    /// which route reaches a state first.
    #[default]
    OnDiscovery,
    /// Tentative costs may be lowered until the state is expanded.
    ///
    /// Dijkstra with lazy deletion: optimal for any non-negative costs.
    OnExpansion,
}

/// Tuning knobs for a [`GraphSearch`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SearchConfig {
    /// Maximum number of states to expand (`None` = unlimited)
    pub max_expanded: Option<usize>,
    /// Initial capacity of the seen map and frontier
    pub capacity_hint: usize,
    /// When seen entries are frozen
    pub freeze: FreezePolicy,
}

impl SearchConfig {
    /// Unlimited search with default policy.
    pub fn new() -> Self {
        Self::default()
    }

    /// Stops the search after `max` expansions.
    pub fn max_expanded(mut self, max: usize) -> Self {
        self.max_expanded = Some(max);
        self
    }

    /// Pre-allocates room for `capacity` states.
    pub fn capacity_hint(mut self, capacity: usize) -> Self {
        self.capacity_hint = capacity;
        self
    }

    /// Sets the freeze policy.
    pub fn freeze(mut self, freeze: FreezePolicy) -> Self {
        self.freeze = freeze;
        self
    }
}

/// A best-first search over the implicit graph described by a [`SearchProblem`].
///
/// Each call to [`search`](Self::search) allocates its own seen map and
/// frontier, so one `GraphSearch` can be reused for any number of starts.
///
/// # Type Parameters
///
/// - `T`: State type (must implement `Clone + Eq + Hash`)
/// - `C`: Cost type (must implement [`Cost`])
/// - `P`: Problem type (must implement `SearchProblem<T, C>`)
///
/// # Example (builder)
///
/// ```rust
/// use aoc_search::graph_search::{ClosureProblem, GraphSearch, SearchConfig, Termination};
///
/// let problem = ClosureProblem::new(
///     |n: &u64| *n == 1_000_000,
///     |n: &u64| [n + 1],
///     |_: &u64, _: &u64| 1u64,
/// );
///
/// let search = GraphSearch::builder()
///     .problem(problem)
///     .config(SearchConfig::new().max_expanded(100))
///     .build();
///
/// let result = search.search(0);
/// assert_eq!(result.termination(), Termination::BudgetExhausted);
/// assert!(result.cost_to_goal().is_err());
/// ```
pub struct GraphSearch<T, C, P> {
    problem: P,
    config: SearchConfig,
    pool: Option<Arc<ThreadPool>>,
    _phantom: PhantomData<(T, C)>,
}

impl<T, C, P> GraphSearch<T, C, P>
where
    T: Clone + Eq + Hash,
    C: Cost,
    P: SearchProblem<T, C>,
{
    /// Creates a search with the default configuration.
    pub fn with_problem(problem: P) -> Self {
        Self::with_config(problem, SearchConfig::default())
    }

    /// Creates a search with an explicit configuration.
    pub fn with_config(problem: P, config: SearchConfig) -> Self {
        Self {
            problem,
            config,
            pool: None,
            _phantom: PhantomData,
        }
    }

    /// The problem being searched.
    pub fn problem(&self) -> &P {
        &self.problem
    }

    /// The active configuration.
    pub fn config(&self) -> &SearchConfig {
        &self.config
    }

    /// Explores states in order of non-decreasing cost from `start`, stopping
    /// at the first popped state that satisfies the goal predicate.
    ///
    /// Never fails: an unreachable goal is reported through the returned
    /// result, whose goal reads then yield
    /// [`SearchError::NoPathFound`](super::SearchError::NoPathFound).
    pub fn search(&self, start: T) -> SearchResult<T, C> {
        let capacity = self.config.capacity_hint;
        let mut seen: HashMap<T, SeenEntry<T, C>> = HashMap::with_capacity(capacity);
        let mut frontier = Frontier::with_capacity(capacity);
        let mut stats = SearchStats::default();

        seen.insert(
            start.clone(),
            SeenEntry {
                cost: C::zero(),
                predecessor: None,
                expanded: false,
            },
        );
        stats.discovered = 1;
        frontier.push(start.clone(), C::zero());

        let mut goal = None;
        let termination = loop {
            let Some((current, current_cost)) = frontier.pop() else {
                break Termination::FrontierExhausted;
            };

            match seen.get(&current) {
                Some(entry) if entry.expanded => continue,
                Some(entry) if current_cost.cmp_cost(&entry.cost) == Ordering::Greater => continue,
                _ => {}
            }

            if self
                .config
                .max_expanded
                .is_some_and(|max| stats.expanded >= max)
            {
                break Termination::BudgetExhausted;
            }

            if let Some(entry) = seen.get_mut(&current) {
                entry.expanded = true;
            }
            stats.expanded += 1;
            trace!(
                event = "expand",
                expanded = stats.expanded,
                frontier = frontier.len(),
            );

            if self.problem.is_goal(&current) {
                goal = Some(current);
                break Termination::GoalFound;
            }

            for next in self.problem.neighbors(&current) {
                match seen.entry(next) {
                    Entry::Vacant(vacant) => {
                        let edge = self.problem.edge_cost(&current, vacant.key());
                        let next_cost = current_cost.add_cost(edge);
                        frontier.push(vacant.key().clone(), next_cost);
                        vacant.insert(SeenEntry {
                            cost: next_cost,
                            predecessor: Some(current.clone()),
                            expanded: false,
                        });
                        stats.discovered += 1;
                    }
                    Entry::Occupied(mut occupied) => {
                        if self.config.freeze == FreezePolicy::OnDiscovery
                            || occupied.get().expanded
                        {
                            continue;
                        }
                        let edge = self.problem.edge_cost(&current, occupied.key());
                        let next_cost = current_cost.add_cost(edge);
                        if next_cost.cmp_cost(&occupied.get().cost) == Ordering::Less {
                            frontier.push(occupied.key().clone(), next_cost);
                            let entry = occupied.get_mut();
                            entry.cost = next_cost;
                            entry.predecessor = Some(current.clone());
                        }
                    }
                }
            }
        };

        stats.frontier_high_water = frontier.high_water();
        debug!(
            event = "finish",
            termination = ?termination,
            expanded = stats.expanded,
            discovered = stats.discovered,
            frontier_high_water = stats.frontier_high_water,
        );

        SearchResult {
            start,
            goal,
            seen,
            termination,
            stats,
        }
    }

    /// Runs one independent search per start, in order.
    pub fn search_many<S>(&self, starts: S) -> Vec<SearchResult<T, C>>
    where
        S: IntoIterator<Item = T>,
    {
        starts.into_iter().map(|start| self.search(start)).collect()
    }
}

impl<T, C, P> GraphSearch<T, C, P>
where
    T: Clone + Eq + Hash + Send + Sync,
    C: Cost + Send + Sync,
    P: ParallelSearchProblem<T, C>,
{
    /// Runs one independent search per start in parallel using Rayon.
    ///
    /// Results are returned in the order of `starts`. Uses the thread pool
    /// given to the builder, or Rayon's global pool otherwise.
    pub fn par_search_many(&self, starts: Vec<T>) -> Vec<SearchResult<T, C>> {
        let run = || {
            starts
                .into_par_iter()
                .map(|start| self.search(start))
                .collect::<Vec<_>>()
        };

        match &self.pool {
            Some(pool) => pool.install(run),
            None => run(),
        }
    }
}

/// Builder for [`GraphSearch`].
///
/// Start with [`GraphSearch::builder`]; a problem must be supplied before
/// [`build`](GraphSearchBuilder::build) becomes available.
pub struct GraphSearchBuilder<P> {
    problem: P,
    config: SearchConfig,
    pool: Option<Arc<ThreadPool>>,
}

impl GraphSearch<(), (), ()> {
    /// Starts building a search.
    pub fn builder() -> GraphSearchBuilder<()> {
        GraphSearchBuilder {
            problem: (),
            config: SearchConfig::default(),
            pool: None,
        }
    }
}

impl<P> GraphSearchBuilder<P> {
    /// Sets the problem to search.
    pub fn problem<Q>(self, problem: Q) -> GraphSearchBuilder<Q> {
        GraphSearchBuilder {
            problem,
            config: self.config,
            pool: self.pool,
        }
    }

    /// Replaces the whole configuration.
    pub fn config(mut self, config: SearchConfig) -> Self {
        self.config = config;
        self
    }

    /// Limits the number of expanded states.
    pub fn max_expanded(mut self, max: usize) -> Self {
        self.config.max_expanded = Some(max);
        self
    }

    /// Sets the freeze policy.
    pub fn freeze(mut self, freeze: FreezePolicy) -> Self {
        self.config.freeze = freeze;
        self
    }

    /// Uses a custom Rayon thread pool for [`GraphSearch::par_search_many`].
    pub fn pool(mut self, pool: Arc<ThreadPool>) -> Self {
        self.pool = Some(pool);
        self
    }

    /// Builds the search.
    pub fn build<T, C>(self) -> GraphSearch<T, C, P>
    where
        T: Clone + Eq + Hash,
        C: Cost,
        P: SearchProblem<T, C>,
    {
        GraphSearch {
            problem: self.problem,
            config: self.config,
            pool: self.pool,
            _phantom: PhantomData,
        }
    }
}

/// Searches from `start` using three closures.
///
/// Shorthand for wrapping the closures in a [`ClosureProblem`] and running a
/// default [`GraphSearch`].
///
/// # Example
///
/// ```rust
/// use aoc_search::graph_search::search;
///
/// // Diamond: A->B (1), A->C (1), B->D (5), C->D (1)
/// let result = search(
///     'A',
///     |s: &char| *s == 'D',
///     |s: &char| match s {
///         'A' => vec!['B', 'C'],
///         'B' | 'C' => vec!['D'],
///         _ => vec![],
///     },
///     |from: &char, to: &char| match (from, to) {
///         ('B', 'D') => 5u32,
///         _ => 1,
///     },
/// );
///
/// assert_eq!(result.cost_to_goal(), Ok(2));
/// assert_eq!(result.path_to_goal(), Ok(vec!['A', 'C', 'D']));
/// ```
pub fn search<T, C, G, N, I, E>(
    start: T,
    is_goal: G,
    neighbors: N,
    edge_cost: E,
) -> SearchResult<T, C>
where
    T: Clone + Eq + Hash,
    C: Cost,
    G: Fn(&T) -> bool,
    N: Fn(&T) -> I,
    I: IntoIterator<Item = T>,
    E: Fn(&T, &T) -> C,
{
    GraphSearch::with_problem(ClosureProblem::new(is_goal, neighbors, edge_cost)).search(start)
}
