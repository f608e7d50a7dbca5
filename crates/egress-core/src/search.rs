//! Shortest augmenting path search

use crate::residual::{ArcId, ResidualNetwork, VertexIdx};
use std::collections::VecDeque;

/// Breadth-first search from `source` over arcs with positive residual
/// capacity.
///
/// Returns the arcs of a fewest-arc path to `target`, in order from `source`,
/// or `None` when `target` is unreachable. Among equally short paths the one
/// found first in arc insertion order wins.
pub fn shortest_augmenting_path(
    residual: &ResidualNetwork<'_>,
    source: VertexIdx,
    target: VertexIdx,
) -> Option<Vec<ArcId>> {
    let n = residual.vertex_count();
    if source >= n || target >= n || source == target {
        return None;
    }

    let mut predecessor: Vec<Option<ArcId>> = vec![None; n];
    let mut visited = vec![false; n];
    let mut queue = VecDeque::new();
    visited[source] = true;
    queue.push_back(source);

    while let Some(u) = queue.pop_front() {
        for &id in residual.outgoing(u) {
            let arc = residual.arc(id);
            if visited[arc.to] || arc.residual() <= 0 {
                continue;
            }
            visited[arc.to] = true;
            predecessor[arc.to] = Some(id);
            if arc.to == target {
                return Some(walk_back(residual, &predecessor, source, target));
            }
            queue.push_back(arc.to);
        }
    }

    None
}

fn walk_back(
    residual: &ResidualNetwork<'_>,
    predecessor: &[Option<ArcId>],
    source: VertexIdx,
    target: VertexIdx,
) -> Vec<ArcId> {
    let mut path = Vec::new();
    let mut v = target;
    while v != source {
        let Some(id) = predecessor[v] else { break };
        path.push(id);
        v = residual.arc(id).from;
    }
    path.reverse();
    path
}
