use crate::error::Result;
use crate::graph::types::Node;
use crate::graph::GraphProvider;
use std::collections::HashSet;

/// Lowest-labelled neighbor of `node` that has not been visited yet
pub fn next_unvisited_neighbor<'a>(
    provider: &'a dyn GraphProvider,
    node: &Node,
    visited: &HashSet<&'a Node>,
) -> Result<Option<&'a Node>> {
    Ok(provider
        .get_sorted_neighbors(node)?
        .into_iter()
        .find(|neighbor| !visited.contains(*neighbor)))
}

/// Explicit-stack depth-first walk from `start`.
///
/// The node on top of the stack advances to its lowest-labelled unvisited
/// neighbor, or is popped when it has none. `on_visit` sees every node in
/// first-visit order, `start` included. Nodes already in `visited` are
/// treated as walls, which lets callers run several walks over one set.
pub fn depth_first_walk<'a, F>(
    provider: &'a dyn GraphProvider,
    start: &'a Node,
    visited: &mut HashSet<&'a Node>,
    mut on_visit: F,
) -> Result<()>
where
    F: FnMut(&'a Node),
{
    let mut stack = vec![start];
    visited.insert(start);
    on_visit(start);

    while let Some(&top) = stack.last() {
        match next_unvisited_neighbor(provider, top, visited)? {
            Some(next) => {
                visited.insert(next);
                on_visit(next);
                stack.push(next);
            }
            None => {
                stack.pop();
            }
        }
    }

    Ok(())
}

/// Join node labels into one string, e.g. `abegfchd`
pub fn concat_labels(nodes: &[Node]) -> String {
    nodes.iter().map(|node| node.label()).collect()
}
