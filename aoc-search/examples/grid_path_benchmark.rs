//! Benchmark for the graph search on weighted grids.
//!
//! Run with: cargo run --example grid_path_benchmark --release
//!
//! Each cell holds a risk level from 1 to 9; entering a cell costs its risk.
//! Find the lowest total risk from the top-left to the bottom-right corner
//! moving in the four cardinal directions.
//!
//! This benchmark compares:
//! - One search per grid (sequential)
//! - One search per grid with `par_iter`
//! - Many starts on one grid with `search_many` and `par_search_many`
//! - Freezing on discovery vs freezing on expansion
//!
//! Set `RUST_LOG=aoc_search=debug` to see a summary event per search.

use std::time::Instant;

use aoc_search::graph_search::{FreezePolicy, GraphSearch, SearchConfig, SearchProblem};
use rayon::prelude::*;
use tracing_subscriber::EnvFilter;

// =============================================================================
// Risk Grid Problem Definition
// =============================================================================

/// Lowest total risk problem using the trait-based API
struct LowestRisk<'a> {
    grid: &'a [Vec<u32>],
}

impl<'a> LowestRisk<'a> {
    fn new(grid: &'a [Vec<u32>]) -> Self {
        Self { grid }
    }

    fn bottom_right(&self) -> (usize, usize) {
        (self.grid.len() - 1, self.grid[0].len() - 1)
    }
}

impl SearchProblem<(usize, usize), u32> for LowestRisk<'_> {
    fn is_goal(&self, pos: &(usize, usize)) -> bool {
        *pos == self.bottom_right()
    }

    fn neighbors(&self, &(row, col): &(usize, usize)) -> impl IntoIterator<Item = (usize, usize)> {
        let rows = self.grid.len();
        let cols = self.grid[0].len();
        let mut next = Vec::with_capacity(4);
        if row > 0 {
            next.push((row - 1, col));
        }
        if col > 0 {
            next.push((row, col - 1));
        }
        if row + 1 < rows {
            next.push((row + 1, col));
        }
        if col + 1 < cols {
            next.push((row, col + 1));
        }
        next
    }

    fn edge_cost(&self, _from: &(usize, usize), &(row, col): &(usize, usize)) -> u32 {
        self.grid[row][col]
    }
}

/// Generate a random grid of risk levels 1..=9 for benchmarking
fn generate_random_grid(seed: u64, rows: usize, cols: usize) -> Vec<Vec<u32>> {
    let mut rng = seed;
    (0..rows)
        .map(|_| {
            (0..cols)
                .map(|_| {
                    rng = rng.wrapping_mul(6364136223846793005).wrapping_add(1);
                    1 + ((rng >> 33) % 9) as u32
                })
                .collect()
        })
        .collect()
}

const GRID_SIZE: usize = 100;
const NUM_GRIDS: usize = 50;
const NUM_STARTS: usize = 200;

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    println!("Lowest Risk Path Benchmark (uniform-cost search)");
    println!("=================================================\n");

    let grids: Vec<Vec<Vec<u32>>> = (0..NUM_GRIDS)
        .map(|i| generate_random_grid(42 + i as u64, GRID_SIZE, GRID_SIZE))
        .collect();

    println!("Sample grid[0][0..5][0..5]:");
    for row in 0..5 {
        println!("  {:?}", &grids[0][row][0..5]);
    }

    // =========================================================================
    // One search per grid
    // =========================================================================
    println!(
        "\n=== One search per grid ({}x{}, {} grids) ===",
        GRID_SIZE, GRID_SIZE, NUM_GRIDS
    );

    println!("Running sequential searches...");
    let start = Instant::now();
    let sequential_results: Vec<u32> = grids
        .iter()
        .map(|grid| {
            let search = GraphSearch::builder()
                .problem(LowestRisk::new(grid))
                .config(
                    SearchConfig::new()
                        .capacity_hint(GRID_SIZE * GRID_SIZE)
                        .freeze(FreezePolicy::OnExpansion),
                )
                .build();
            search.search((0, 0)).cost_to_goal().unwrap_or(u32::MAX)
        })
        .collect();
    let sequential_time = start.elapsed();
    println!("Sequential:                  {:?}", sequential_time);

    println!("Running searches with par_iter...");
    let optimal = SearchConfig::new().freeze(FreezePolicy::OnExpansion);
    let start = Instant::now();
    let par_results: Vec<u32> = grids
        .par_iter()
        .map(|grid| {
            GraphSearch::with_config(LowestRisk::new(grid), optimal)
                .search((0, 0))
                .cost_to_goal()
                .unwrap_or(u32::MAX)
        })
        .collect();
    let par_time = start.elapsed();
    println!("par_iter:                    {:?}", par_time);

    // =========================================================================
    // Many starts on one grid
    // =========================================================================
    println!("\n=== Many starts on one grid ({} starts) ===", NUM_STARTS);

    let starts: Vec<(usize, usize)> = (0..NUM_STARTS)
        .map(|i| ((i * 7) % GRID_SIZE, (i * 13) % GRID_SIZE))
        .collect();
    let search = GraphSearch::with_config(LowestRisk::new(&grids[0]), optimal);

    println!("Running search_many...");
    let start = Instant::now();
    let many_results: Vec<u32> = search
        .search_many(starts.clone())
        .iter()
        .map(|result| result.cost_to_goal().unwrap_or(u32::MAX))
        .collect();
    let many_time = start.elapsed();
    println!("search_many:                 {:?}", many_time);

    println!("Running par_search_many...");
    let start = Instant::now();
    let par_many_results: Vec<u32> = search
        .par_search_many(starts)
        .iter()
        .map(|result| result.cost_to_goal().unwrap_or(u32::MAX))
        .collect();
    let par_many_time = start.elapsed();
    println!("par_search_many:             {:?}", par_many_time);

    // =========================================================================
    // Freeze policies
    // =========================================================================
    println!("\n=== Freeze policies ({} grids) ===", NUM_GRIDS);

    println!("Running default (OnDiscovery) searches...");
    let start = Instant::now();
    let discovery_results: Vec<u32> = grids
        .iter()
        .map(|grid| {
            GraphSearch::with_problem(LowestRisk::new(grid))
                .search((0, 0))
                .cost_to_goal()
                .unwrap_or(u32::MAX)
        })
        .collect();
    let discovery_time = start.elapsed();
    println!("OnDiscovery:                 {:?}", discovery_time);

    let suboptimal = discovery_results
        .iter()
        .zip(&sequential_results)
        .filter(|(discovered, optimal)| discovered != optimal)
        .count();
    println!(
        "OnDiscovery answers above the optimum: {}/{}",
        suboptimal, NUM_GRIDS
    );

    // =========================================================================
    // Verification
    // =========================================================================
    println!("\n=== Verification ===");
    assert_eq!(sequential_results, par_results, "par_iter mismatch");
    assert_eq!(many_results, par_many_results, "par_search_many mismatch");
    assert!(
        discovery_results
            .iter()
            .zip(&sequential_results)
            .all(|(discovered, optimal)| discovered >= optimal),
        "OnDiscovery beat the optimum"
    );
    println!("All results match!");

    println!("\n=== Summary ===");
    println!("Sample answers: {:?}", &sequential_results[0..5]);
    println!(
        "Speedup par_iter vs sequential:            {:.2}x",
        sequential_time.as_secs_f64() / par_time.as_secs_f64()
    );
    println!(
        "Speedup par_search_many vs search_many:    {:.2}x",
        many_time.as_secs_f64() / par_many_time.as_secs_f64()
    );
}
