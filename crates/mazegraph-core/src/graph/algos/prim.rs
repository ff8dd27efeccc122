use std::cmp::{Ordering, Reverse};
use std::collections::BinaryHeap;

use crate::error::{GraphError, Result};
use crate::graph::{Graph, Node};

/// Edge leaving the partial tree, ordered by weight then endpoint names
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CandidateEdge<'g> {
    pub weight: u32,
    /// Endpoint already in the tree
    pub inside: &'g str,
    /// Endpoint the edge would add
    pub outside: &'g str,
}

impl PartialOrd for CandidateEdge<'_> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for CandidateEdge<'_> {
    fn cmp(&self, other: &Self) -> Ordering {
        self.weight
            .cmp(&other.weight)
            .then_with(|| self.outside.cmp(other.outside))
            .then_with(|| self.inside.cmp(other.inside))
    }
}

fn push_candidates<'g>(
    heap: &mut BinaryHeap<Reverse<CandidateEdge<'g>>>,
    node: &'g Node,
    tree: &Graph,
) {
    for (neighbor, weight) in node.weighted_neighbors() {
        if !tree.contains_node(neighbor) {
            heap.push(Reverse(CandidateEdge {
                weight,
                inside: node.name(),
                outside: neighbor,
            }));
        }
    }
}

/// Compute a minimum spanning tree with Prim-Jarnik's algorithm.
///
/// The seed is the lexicographically smallest node name, which keeps the
/// output reproducible. The result is a new graph holding every node of the
/// source and N-1 of its edges with their original weights. An empty graph
/// yields an empty tree.
///
/// Fails with [`GraphError::Disconnected`] if the candidate heap empties
/// before the tree covers the whole graph.
#[tracing::instrument(skip(graph), fields(nodes = graph.node_count()))]
pub fn prim_jarnik(graph: &Graph) -> Result<Graph> {
    let mut tree = Graph::new();
    let Some(seed) = graph.nodes().next() else {
        return Ok(tree);
    };
    let total = graph.node_count();

    tree.get_or_create_node(seed.name());
    let mut heap = BinaryHeap::new();
    push_candidates(&mut heap, seed, &tree);

    while tree.node_count() < total {
        let Some(Reverse(candidate)) = heap.pop() else {
            tracing::debug!(reached = tree.node_count(), total, "candidate heap exhausted");
            return Err(GraphError::Disconnected {
                reached: tree.node_count(),
                total,
            });
        };

        // The inside endpoint is always in the tree already
        if tree.contains_node(candidate.outside) {
            tracing::trace!(
                from = candidate.inside,
                to = candidate.outside,
                "discarding cycle edge"
            );
            continue;
        }

        tree.add_undirected_edge(candidate.inside, candidate.outside, candidate.weight);
        let added = graph.require_node(candidate.outside)?;
        push_candidates(&mut heap, added, &tree);
    }

    tracing::debug!(
        seed = seed.name(),
        edges = tree.edge_count(),
        weight = tree.total_weight(),
        "spanning tree complete"
    );
    Ok(tree)
}
