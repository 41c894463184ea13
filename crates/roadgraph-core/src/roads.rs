//! Libraries-versus-roads planner
//!
//! A city network is split into its connected components. Each component
//! either rebuilds one library and connects every other city by road, or
//! rebuilds a library in every city, whichever the cost model favours.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::{GraphError, Result};
use crate::graph::{kruskal, partitions, Cost, Graph, Node};

/// Unit costs of the two kinds of repair
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CostModel {
    pub library_cost: u64,
    pub road_cost: u64,
}

impl CostModel {
    pub fn new(library_cost: u64, road_cost: u64) -> Self {
        CostModel {
            library_cost,
            road_cost,
        }
    }

    pub fn strategy(&self) -> Strategy {
        if self.library_cost > self.road_cost {
            Strategy::OneLibraryAndRoads
        } else {
            Strategy::LibraryPerCity
        }
    }
}

/// How a single component gets served
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum Strategy {
    /// One library, every spanning-tree road rebuilt
    OneLibraryAndRoads,
    /// A library in every city, no roads
    LibraryPerCity,
}

impl fmt::Display for Strategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Strategy::OneLibraryAndRoads => write!(f, "one-library-and-roads"),
            Strategy::LibraryPerCity => write!(f, "library-per-city"),
        }
    }
}

/// Repair plan for one connected component
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ComponentPlan {
    /// City ids, ascending
    pub cities: Vec<u32>,
    pub strategy: Strategy,
    pub libraries: u64,
    pub roads: u64,
    pub cost: u64,
}

/// Repair plan for the whole network
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Plan {
    pub costs: CostModel,
    pub components: Vec<ComponentPlan>,
    pub total: u64,
}

/// Node used for city `id`
pub fn city(id: u32) -> Node {
    Node::new(id.to_string())
}

/// Cost of serving the component spanned by `mst`.
///
/// With `n` cities the tree needs `n - 1` roads. When a library costs more
/// than a road, one library plus every road wins; otherwise a library in
/// every city does.
pub fn evaluate(mst: &Graph, costs: &CostModel) -> u64 {
    let (libraries, roads) = repairs(mst.len() as u64, costs);
    libraries
        .saturating_mul(costs.library_cost)
        .saturating_add(roads.saturating_mul(costs.road_cost))
}

fn repairs(cities: u64, costs: &CostModel) -> (u64, u64) {
    match costs.strategy() {
        Strategy::OneLibraryAndRoads => (cities.min(1), cities.saturating_sub(1)),
        Strategy::LibraryPerCity => (cities, 0),
    }
}

/// Build the undirected city graph: cities `1..=count`, one edge per road
/// weighted with the road cost.
pub fn build_city_graph(count: u32, costs: &CostModel, roads: &[(u32, u32)]) -> Result<Graph> {
    let mut graph = Graph::undirected();
    graph.add_nodes((1..=count).map(city))?;
    for &(a, b) in roads {
        graph.add_edge_with_cost(&city(a), &city(b), Cost::new(costs.road_cost))?;
    }
    Ok(graph)
}

/// Plan repairs for every component of the network
#[tracing::instrument(skip(roads), fields(roads = roads.len()))]
pub fn plan(count: u32, costs: &CostModel, roads: &[(u32, u32)]) -> Result<Plan> {
    let graph = build_city_graph(count, costs, roads)?;

    let mut components = Vec::new();
    for component in partitions(&graph)? {
        let mst = kruskal(&component)?;
        let (libraries, roads) = repairs(mst.len() as u64, costs);
        let cost = evaluate(&mst, costs);

        let mut cities = mst
            .nodes()
            .map(|node| {
                node.label()
                    .parse::<u32>()
                    .map_err(|_| GraphError::invalid_value("city id", node))
            })
            .collect::<Result<Vec<u32>>>()?;
        cities.sort_unstable();

        tracing::debug!(cities = cities.len(), cost, "component_planned");
        components.push(ComponentPlan {
            cities,
            strategy: costs.strategy(),
            libraries,
            roads,
            cost,
        });
    }

    let total = components
        .iter()
        .fold(0u64, |acc, component| acc.saturating_add(component.cost));
    Ok(Plan {
        costs: *costs,
        components,
        total,
    })
}

/// Total repair cost for the network
pub fn solution(count: u32, costs: &CostModel, roads: &[(u32, u32)]) -> Result<u64> {
    Ok(plan(count, costs, roads)?.total)
}
