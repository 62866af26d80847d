//! Best-first Graph Search
//!
//! This module provides a uniform-cost (Dijkstra) search over implicit graphs,
//! the shortest-path helper shared by puzzles that walk mazes, grids with
//! facings, or machine states.
//!
//! The caller describes the graph with three functions: a goal predicate, a
//! neighbor enumeration and an edge cost. The search explores states in order
//! of non-decreasing cumulative cost from the start and stops at the first
//! popped state that satisfies the goal.
//!
//! # Entry Points
//!
//! - [`search`]: one-shot search from three closures
//! - [`GraphSearch`]: reusable search built from a [`SearchProblem`]
//! - [`GraphSearch::par_search_many`]: independent searches from many starts using Rayon
//!
//! # Result Reads
//!
//! [`SearchResult`] exposes the goal cost, the reconstructed path, the cost of
//! any discovered state and the set of explored states. Asking for something
//! that was never reached yields a [`SearchError`] rather than a wrong value.
//!
//! # Freeze Policy
//!
//! By default a state's cost and predecessor are fixed the first time it is
//! discovered ([`FreezePolicy::OnDiscovery`]). This is exact for uniform edge
//! costs. For arbitrary non-negative weights, opt into
//! [`FreezePolicy::OnExpansion`], which lowers tentative costs until a state
//! is expanded.
//!
//! # Warning: Negative Costs
//!
//! **Edge costs must be non-negative.** Negative costs void the optimality
//! guarantee; the search does not detect them.
//!
//! # Example: Trait-based API with Builder
//!
//! ```rust
//! use aoc_search::graph_search::{GraphSearch, SearchProblem};
//!
//! /// Open 3x3 room, cardinal moves only.
//! struct Room;
//!
//! impl SearchProblem<(i32, i32), u32> for Room {
//!     fn is_goal(&self, pos: &(i32, i32)) -> bool {
//!         *pos == (2, 2)
//!     }
//!
//!     fn neighbors(&self, &(x, y): &(i32, i32)) -> impl IntoIterator<Item = (i32, i32)> {
//!         [(x + 1, y), (x - 1, y), (x, y + 1), (x, y - 1)]
//!             .into_iter()
//!             .filter(|(x, y)| (0..3).contains(x) && (0..3).contains(y))
//!     }
//!
//!     fn edge_cost(&self, _from: &(i32, i32), _to: &(i32, i32)) -> u32 {
//!         1
//!     }
//! }
//!
//! let search = GraphSearch::builder().problem(Room).build();
//! let result = search.search((0, 0));
//!
//! assert_eq!(result.cost_to_goal(), Ok(4));
//! assert_eq!(result.path_to_goal().unwrap().len(), 5);
//! ```
//!
//! # Example: Closure-based API
//!
//! ```rust
//! use aoc_search::graph_search::{search, SearchError};
//!
//! // Nothing is reachable from 0 and 0 is not a goal.
//! let result = search(0u8, |_: &u8| false, |_: &u8| Vec::new(), |_: &u8, _: &u8| 1u32);
//!
//! assert_eq!(result.explored_count(), 1);
//! assert_eq!(result.cost_to_goal(), Err(SearchError::NoPathFound));
//! ```

mod cost;
mod error;
mod frontier;
mod problem;
mod result;
mod search;

pub use cost::Cost;
pub use error::SearchError;
pub use problem::{ClosureProblem, ParallelSearchProblem, SearchProblem};
pub use result::{SearchResult, SearchStats, SeenEntry, Termination};
pub use search::{FreezePolicy, GraphSearch, GraphSearchBuilder, SearchConfig, search};
