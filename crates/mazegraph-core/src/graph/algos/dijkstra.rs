use std::cmp::{Ordering, Reverse};
use std::collections::{BTreeMap, BinaryHeap};
use std::time::Instant;

use crate::error::{GraphError, Result};
use crate::graph::Graph;
use crate::trace_time;

/// Path candidate for the min-heap (ordered by accumulated cost, then name)
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HeapEntry<'g> {
    pub node: &'g str,
    pub accumulated_cost: u64,
}

impl PartialOrd for HeapEntry<'_> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for HeapEntry<'_> {
    fn cmp(&self, other: &Self) -> Ordering {
        self.accumulated_cost
            .cmp(&other.accumulated_cost)
            .then_with(|| self.node.cmp(other.node))
    }
}

/// Compute the minimum cost of reaching every node of the graph from `start`.
///
/// Candidates are popped lowest cost first (ties by name). A node may sit in
/// the heap several times; only its first pop finalizes it and later pops are
/// discarded. The loop ends once every node of the graph is finalized.
///
/// Fails with [`GraphError::NodeNotFound`] for an unknown start and with
/// [`GraphError::Unreachable`] when the heap runs dry before every node is
/// finalized.
#[tracing::instrument(skip(graph), fields(start = %start, nodes = graph.node_count()))]
pub fn dijkstra(graph: &Graph, start: &str) -> Result<BTreeMap<String, u64>> {
    let begin = Instant::now();
    let root = graph.require_node(start)?;
    let total = graph.node_count();

    let mut finalized: BTreeMap<&str, u64> = BTreeMap::new();
    let mut heap = BinaryHeap::new();
    heap.push(Reverse(HeapEntry {
        node: root.name(),
        accumulated_cost: 0,
    }));

    while finalized.len() < total {
        let Some(Reverse(HeapEntry {
            node: current_name,
            accumulated_cost,
        })) = heap.pop()
        else {
            let unreachable: Vec<String> = graph
                .nodes()
                .map(|node| node.name())
                .filter(|name| !finalized.contains_key(name))
                .map(str::to_string)
                .collect();
            tracing::debug!(
                finalized = finalized.len(),
                unreachable = unreachable.len(),
                "heap exhausted"
            );
            return Err(GraphError::Unreachable {
                start: start.to_string(),
                unreachable,
            });
        };

        if finalized.contains_key(current_name) {
            tracing::trace!(node = current_name, cost = accumulated_cost, "stale candidate");
            continue;
        }
        finalized.insert(current_name, accumulated_cost);

        let current = graph.require_node(current_name)?;
        for (neighbor, weight) in current.weighted_neighbors() {
            if !finalized.contains_key(neighbor) {
                heap.push(Reverse(HeapEntry {
                    node: neighbor,
                    accumulated_cost: accumulated_cost + u64::from(weight),
                }));
            }
        }
    }

    trace_time!(begin, "dijkstra", finalized = finalized.len());
    Ok(finalized
        .into_iter()
        .map(|(name, cost)| (name.to_string(), cost))
        .collect())
}
