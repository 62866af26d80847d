//! Shortest-path search shared by Advent of Code puzzle solutions
//!
//! Many puzzles boil down to "cheapest way from here to there" over a state
//! space only the puzzle knows how to enumerate. This crate provides the
//! reusable engine; each solution supplies the goal test, neighbor function
//! and edge cost and turns the returned cost or path into its answer.

pub mod graph_search;

pub use graph_search::{
    ClosureProblem, Cost, FreezePolicy, GraphSearch, SearchConfig, SearchError, SearchProblem,
    SearchResult, search,
};
