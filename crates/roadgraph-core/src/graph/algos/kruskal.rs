use crate::bail_unsupported;
use crate::error::Result;
use crate::graph::algos::union_find::DisjointSet;
use crate::graph::types::Edge;
use crate::graph::Graph;

/// Minimum spanning forest of an undirected graph (Kruskal).
///
/// Edges are taken in ascending cost order; the sort is stable, so equal
/// costs keep [`Graph::edges`] order. An edge whose endpoints are already
/// joined would close a cycle and is skipped. The scan stops as soon as
/// every node sits in one component.
///
/// The result is a new undirected graph with every input node and only
/// the selected edges. Directed graphs are rejected.
#[tracing::instrument(skip(graph), fields(nodes = graph.len()))]
pub fn kruskal(graph: &Graph) -> Result<Graph> {
    if graph.is_directed() {
        bail_unsupported!(
            "kruskal",
            "spanning trees are only defined for undirected graphs"
        );
    }

    let mut forest = graph.without_edges();
    let mut sets = DisjointSet::new(graph.len());

    let mut candidates: Vec<Edge> = graph.edges().collect();
    candidates.sort_by_key(|edge| edge.cost);

    for edge in candidates {
        if sets.component_count() <= 1 {
            break;
        }

        let origin = graph.position(&edge.origin)?;
        let terminus = graph.position(&edge.terminus)?;
        if !sets.union(origin, terminus) {
            tracing::trace!(edge = %edge, "skip_cycle");
            continue;
        }

        tracing::trace!(edge = %edge, "select_edge");
        forest.add_edge_with_cost(&edge.origin, &edge.terminus, edge.cost)?;
    }

    tracing::debug!(
        edges = forest.edge_count(),
        components = sets.component_count(),
        "kruskal_complete"
    );
    Ok(forest)
}
