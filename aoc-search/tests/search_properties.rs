//! Property-based tests for the graph search engine
//!
//! **Feature: graph-search**

use std::collections::{BTreeMap, HashSet, VecDeque};

use aoc_search::graph_search::{
    FreezePolicy, GraphSearch, SearchConfig, SearchError, SearchProblem, Termination,
};
use proptest::prelude::*;

/// Random weighted digraph; parallel edges collapse to their cheapest cost.
#[derive(Debug, Clone)]
struct RandomGraph {
    nodes: usize,
    edges: BTreeMap<(usize, usize), u32>,
    goal: usize,
}

impl RandomGraph {
    fn new(nodes: usize, raw_edges: Vec<(usize, usize, u32)>, goal: usize) -> Self {
        let mut edges = BTreeMap::new();
        for (from, to, cost) in raw_edges {
            edges
                .entry((from, to))
                .and_modify(|c: &mut u32| *c = (*c).min(cost))
                .or_insert(cost);
        }
        Self { nodes, edges, goal }
    }

    /// O(V^2) Dijkstra that settles one node per round, independent of the engine.
    fn reference_distances(&self, start: usize) -> Vec<Option<u32>> {
        let mut dist: Vec<Option<u32>> = vec![None; self.nodes];
        let mut settled = vec![false; self.nodes];
        dist[start] = Some(0);

        loop {
            let next = (0..self.nodes)
                .filter(|&n| !settled[n])
                .filter_map(|n| dist[n].map(|d| (d, n)))
                .min();
            let Some((d, node)) = next else { break };
            settled[node] = true;

            for (&(from, to), &cost) in &self.edges {
                if from == node && !settled[to] {
                    let candidate = d + cost;
                    if dist[to].is_none_or(|old| candidate < old) {
                        dist[to] = Some(candidate);
                    }
                }
            }
        }

        dist
    }

    /// Hop counts, for comparisons under uniform edge costs.
    fn reference_hops(&self, start: usize) -> Vec<Option<u32>> {
        let mut hops = vec![None; self.nodes];
        let mut queue = VecDeque::from([start]);
        hops[start] = Some(0);
        while let Some(node) = queue.pop_front() {
            let here = hops[node].unwrap_or(0);
            for &(from, to) in self.edges.keys() {
                if from == node && hops[to].is_none() {
                    hops[to] = Some(here + 1);
                    queue.push_back(to);
                }
            }
        }
        hops
    }
}

impl SearchProblem<usize, u32> for RandomGraph {
    fn is_goal(&self, state: &usize) -> bool {
        *state == self.goal
    }

    fn neighbors(&self, state: &usize) -> impl IntoIterator<Item = usize> {
        let from = *state;
        self.edges
            .range((from, 0)..(from + 1, 0))
            .map(|(&(_, to), _)| to)
    }

    fn edge_cost(&self, from: &usize, to: &usize) -> u32 {
        self.edges[&(*from, *to)]
    }
}

/// Same graph with every edge costing 1.
struct Uniform(RandomGraph);

impl SearchProblem<usize, u32> for Uniform {
    fn is_goal(&self, state: &usize) -> bool {
        self.0.is_goal(state)
    }

    fn neighbors(&self, state: &usize) -> impl IntoIterator<Item = usize> {
        self.0.neighbors(state)
    }

    fn edge_cost(&self, _from: &usize, _to: &usize) -> u32 {
        1
    }
}

fn graph_strategy() -> impl Strategy<Value = (RandomGraph, usize)> {
    (1usize..12).prop_flat_map(|nodes| {
        (
            prop::collection::vec((0..nodes, 0..nodes, 0u32..20), 0..40),
            0..nodes,
            0..nodes,
        )
            .prop_map(move |(edges, goal, start)| (RandomGraph::new(nodes, edges, goal), start))
    })
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(200))]

    /// **Feature: graph-search, Property 1: Optimal goal cost**
    /// *For any* graph with non-negative costs, freezing on expansion makes
    /// the goal cost equal the
    /// reference Dijkstra distance, or the read fails with `NoPathFound`
    /// exactly when the goal is unreachable.
    #[test]
    fn prop_goal_cost_matches_reference((graph, start) in graph_strategy()) {
        let expected = graph.reference_distances(start)[graph.goal];
        let config = SearchConfig::new().freeze(FreezePolicy::OnExpansion);
        let result = GraphSearch::with_config(graph.clone(), config).search(start);

        match expected {
            Some(cost) => {
                prop_assert_eq!(result.termination(), Termination::GoalFound);
                prop_assert_eq!(result.cost_to_goal(), Ok(cost));
            }
            None => {
                prop_assert_eq!(result.termination(), Termination::FrontierExhausted);
                prop_assert_eq!(result.cost_to_goal(), Err(SearchError::NoPathFound));
                prop_assert_eq!(result.path_to_goal(), Err(SearchError::NoPathFound));
            }
        }
    }

    /// **Feature: graph-search, Property 2: Path validity**
    /// *For any* found goal, the path starts at the start, ends at the goal,
    /// follows existing edges and its edge costs sum to the goal cost.
    #[test]
    fn prop_path_is_valid((graph, start) in graph_strategy()) {
        let result = GraphSearch::with_problem(graph.clone()).search(start);
        if let (Ok(path), Ok(cost)) = (result.path_to_goal(), result.cost_to_goal()) {
            prop_assert_eq!(path.first(), Some(&start));
            prop_assert_eq!(path.last(), Some(&graph.goal));

            let mut total = 0;
            for step in path.windows(2) {
                let edge = graph.edges.get(&(step[0], step[1]));
                prop_assert!(edge.is_some(), "missing edge {} -> {}", step[0], step[1]);
                total += edge.copied().unwrap_or(0);
            }
            prop_assert_eq!(total, cost);
        }
    }

    /// **Feature: graph-search, Property 3: Expanded states are final**
    /// *For any* graph searched with expansion freezing, every expanded state
    /// carries its reference distance, and no discovered state is cheaper
    /// than its reference distance.
    #[test]
    fn prop_expanded_costs_are_final((graph, start) in graph_strategy()) {
        let reference = graph.reference_distances(start);
        let config = SearchConfig::new().freeze(FreezePolicy::OnExpansion);
        let result = GraphSearch::with_config(graph.clone(), config).search(start);

        for state in result.explored_states() {
            let entry = result.seen_entry(state).unwrap();
            let best = reference[*state].unwrap();
            prop_assert!(entry.cost() >= best);
            if entry.is_expanded() {
                prop_assert_eq!(entry.cost(), best);
            }
        }
    }

    /// **Feature: graph-search, Property 4: Exhaustion explores the component**
    /// *For any* search that finds no goal, the explored set is exactly the
    /// set of states reachable from the start.
    #[test]
    fn prop_exhaustion_explores_reachable_set((graph, start) in graph_strategy()) {
        let result = GraphSearch::with_problem(graph.clone()).search(start);
        if !result.is_found() {
            let reachable: HashSet<usize> = graph
                .reference_distances(start)
                .iter()
                .enumerate()
                .filter_map(|(node, dist)| dist.map(|_| node))
                .collect();
            let explored: HashSet<usize> = result.explored_states().copied().collect();
            prop_assert_eq!(explored, reachable);
        }
    }

    /// **Feature: graph-search, Property 5: Determinism**
    /// *For any* graph, repeated searches agree on cost, path and explored set.
    #[test]
    fn prop_repeated_searches_agree((graph, start) in graph_strategy()) {
        let search = GraphSearch::with_problem(graph);
        let first = search.search(start);
        let second = search.search(start);

        let first_explored: HashSet<_> = first.explored_states().copied().collect();
        let second_explored: HashSet<_> = second.explored_states().copied().collect();
        prop_assert_eq!(first.cost_to_goal(), second.cost_to_goal());
        prop_assert_eq!(first.path_to_goal(), second.path_to_goal());
        prop_assert_eq!(first_explored, second_explored);
        prop_assert_eq!(first.stats(), second.stats());
    }

    /// **Feature: graph-search, Property 6: Idempotent reads**
    /// *For any* result, reading it twice yields identical values.
    #[test]
    fn prop_reads_are_idempotent((graph, start) in graph_strategy(), state in 0usize..12) {
        let result = GraphSearch::with_problem(graph).search(start);

        prop_assert_eq!(result.cost_to(&state), result.cost_to(&state));
        prop_assert_eq!(result.cost_to_goal(), result.cost_to_goal());
        prop_assert_eq!(result.path_to_goal(), result.path_to_goal());
        prop_assert_eq!(result.explored_count(), result.explored_states().count());
    }

    /// **Feature: graph-search, Property 7: Discovery freeze on uniform costs**
    /// *For any* graph with unit edge costs, freezing on discovery still
    /// yields the breadth-first hop count.
    #[test]
    fn prop_discovery_freeze_is_optimal_for_uniform_costs((graph, start) in graph_strategy()) {
        let expected = graph.reference_hops(start)[graph.goal];
        let result = GraphSearch::with_problem(Uniform(graph)).search(start);

        match expected {
            Some(hops) => prop_assert_eq!(result.cost_to_goal(), Ok(hops)),
            None => prop_assert_eq!(result.cost_to_goal(), Err(SearchError::NoPathFound)),
        }
    }

    /// **Feature: graph-search, Property 8: Default search never undercuts the optimum**
    /// *For any* graph, the default first-discovery search reaches the goal
    /// exactly when it is reachable, at no less than the reference distance,
    /// and never records a state cheaper than its reference distance.
    #[test]
    fn prop_default_search_is_bounded_by_reference((graph, start) in graph_strategy()) {
        let reference = graph.reference_distances(start);
        let result = GraphSearch::with_problem(graph.clone()).search(start);

        prop_assert_eq!(result.is_found(), reference[graph.goal].is_some());
        if let (Ok(cost), Some(best)) = (result.cost_to_goal(), reference[graph.goal]) {
            prop_assert!(cost >= best);
        }
        for state in result.explored_states() {
            let best = reference[*state].unwrap();
            prop_assert!(result.cost_to(state).unwrap() >= best);
        }
    }

    /// **Feature: graph-search, Property 9: Budget bound**
    /// *For any* budget, the search never expands more states than allowed.
    #[test]
    fn prop_budget_is_respected((graph, start) in graph_strategy(), budget in 0usize..6) {
        let config = SearchConfig::new().max_expanded(budget);
        let result = GraphSearch::with_config(graph, config).search(start);

        prop_assert!(result.stats().expanded <= budget);
        if result.termination() == Termination::BudgetExhausted {
            prop_assert_eq!(result.stats().expanded, budget);
            prop_assert_eq!(result.cost_to_goal(), Err(SearchError::NoPathFound));
        }
    }
}

#[cfg(test)]
mod unit_tests {
    use super::*;

    #[test]
    fn test_reference_handles_parallel_edges() {
        let graph = RandomGraph::new(3, vec![(0, 1, 9), (0, 1, 2), (1, 2, 1)], 2);
        assert_eq!(graph.reference_distances(0), vec![Some(0), Some(2), Some(3)]);

        let result = GraphSearch::with_problem(graph).search(0);
        assert_eq!(result.cost_to_goal(), Ok(3));
        assert_eq!(result.path_to_goal(), Ok(vec![0, 1, 2]));
    }

    #[test]
    fn test_reference_marks_unreachable_nodes() {
        let graph = RandomGraph::new(3, vec![(1, 2, 1)], 2);
        assert_eq!(graph.reference_distances(0), vec![Some(0), None, None]);
        assert_eq!(graph.reference_hops(0), vec![Some(0), None, None]);
    }
}
