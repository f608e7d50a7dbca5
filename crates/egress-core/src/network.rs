//! Escape-route network backed by petgraph::StableDiGraph, keyed by vertex label

use crate::cache::FlowCache;
use crate::error::{NetworkError, NetworkResult};
use crate::model::*;
use petgraph::stable_graph::{NodeIndex, StableDiGraph};
use petgraph::Direction;
use std::collections::{HashMap, HashSet};
use std::iter;
use tracing::debug;

/// What an accepted insertion did to the edge set.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EdgeChange {
    /// A new section was appended.
    Added,
    /// An existing section kept its place and got a new capacity.
    CapacityChanged { previous: Capacity },
}

/// A named escape-route network: its sections plus the flows computed on them.
///
/// Sections are stored in insertion order; a capacity change keeps the
/// section's position.
pub struct Network {
    id: NetworkId,
    inner: StableDiGraph<Vertex, Capacity>,
    vertices: HashMap<Vertex, NodeIndex>,
    flow_cache: FlowCache,
}

impl std::fmt::Debug for Network {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Network")
            .field("id", &self.id)
            .field("vertex_count", &self.inner.node_count())
            .field("edge_count", &self.inner.edge_count())
            .field("cached_flows", &self.flow_cache.len())
            .finish()
    }
}

impl Network {
    /// An empty network. The structural rules apply from the first insertion on.
    pub fn new(id: NetworkId) -> Self {
        Network {
            id,
            inner: StableDiGraph::new(),
            vertices: HashMap::new(),
            flow_cache: FlowCache::new(),
        }
    }

    /// Build a network from a complete edge list, validated as a whole.
    pub fn with_edges(id: NetworkId, edges: Vec<Edge>) -> NetworkResult<Self> {
        edges.iter().try_for_each(check_capacity)?;
        if let Some(edge) = first_duplicate(&edges) {
            return Err(NetworkError::DuplicateEdge {
                from: edge.from.clone(),
                to: edge.to.clone(),
            });
        }
        check_structure(edges.iter().map(|e| (&e.from, &e.to)))?;

        let mut network = Network::new(id);
        for edge in edges {
            network.upsert(edge);
        }
        Ok(network)
    }

    pub fn id(&self) -> &NetworkId {
        &self.id
    }

    /// Number of distinct vertices referenced by any section.
    pub fn vertex_count(&self) -> usize {
        self.inner.node_count()
    }

    pub fn edge_count(&self) -> usize {
        self.inner.edge_count()
    }

    pub fn is_empty(&self) -> bool {
        self.inner.edge_count() == 0
    }

    pub fn contains_vertex(&self, vertex: &str) -> bool {
        self.vertices.contains_key(vertex)
    }

    /// Capacity of the section `from -> to`, if present.
    pub fn capacity(&self, from: &str, to: &str) -> Option<Capacity> {
        let from = *self.vertices.get(from)?;
        let to = *self.vertices.get(to)?;
        let idx = self.inner.find_edge(from, to)?;
        self.inner.edge_weight(idx).copied()
    }

    pub fn in_degree(&self, vertex: &str) -> usize {
        self.degree(vertex, Direction::Incoming)
    }

    pub fn out_degree(&self, vertex: &str) -> usize {
        self.degree(vertex, Direction::Outgoing)
    }

    /// A valid start has outgoing sections and no incoming ones.
    pub fn is_valid_start(&self, vertex: &str) -> bool {
        self.out_degree(vertex) > 0 && self.in_degree(vertex) == 0
    }

    /// A valid target has incoming sections and no outgoing ones.
    pub fn is_valid_target(&self, vertex: &str) -> bool {
        self.in_degree(vertex) > 0 && self.out_degree(vertex) == 0
    }

    /// Sections as `(from, to, capacity)` in insertion order.
    pub fn sections(&self) -> impl Iterator<Item = (&Vertex, &Vertex, Capacity)> + '_ {
        self.inner.edge_indices().filter_map(move |idx| {
            let (from, to) = self.inner.edge_endpoints(idx)?;
            Some((&self.inner[from], &self.inner[to], self.inner[idx]))
        })
    }

    /// Owned copies of all sections in insertion order.
    pub fn edges(&self) -> impl Iterator<Item = Edge> + '_ {
        self.sections()
            .map(|(from, to, capacity)| Edge::new(from.clone(), to.clone(), capacity))
    }

    /// All sections ordered by `(from, to)`.
    pub fn sorted_edges(&self) -> Vec<Edge> {
        let mut edges: Vec<Edge> = self.edges().collect();
        edges.sort_by(Edge::cmp_endpoints);
        edges
    }

    pub fn flow_cache(&self) -> &FlowCache {
        &self.flow_cache
    }

    pub(crate) fn flow_cache_mut(&mut self) -> &mut FlowCache {
        &mut self.flow_cache
    }

    /// Insert a section, or replace the capacity of the section with the same
    /// endpoints.
    ///
    /// The prospective edge set is checked first; a rejected insertion leaves
    /// the network untouched. An accepted one empties the flow cache.
    pub fn insert_edge(&mut self, edge: Edge) -> NetworkResult<EdgeChange> {
        check_capacity(&edge)?;
        let candidate = (&edge.from, &edge.to);
        check_structure(
            self.sections()
                .map(|(from, to, _)| (from, to))
                .chain(iter::once(candidate)),
        )?;

        let change = self.upsert(edge);
        let cleared = self.flow_cache.invalidate();
        debug!(network = %self.id, ?change, cleared, "section inserted");
        Ok(change)
    }

    fn upsert(&mut self, edge: Edge) -> EdgeChange {
        let from = self.node(&edge.from);
        let to = self.node(&edge.to);
        match self.inner.find_edge(from, to) {
            Some(idx) => {
                let previous = std::mem::replace(&mut self.inner[idx], edge.capacity);
                EdgeChange::CapacityChanged { previous }
            }
            None => {
                self.inner.add_edge(from, to, edge.capacity);
                EdgeChange::Added
            }
        }
    }

    fn node(&mut self, vertex: &Vertex) -> NodeIndex {
        if let Some(&idx) = self.vertices.get(vertex) {
            return idx;
        }
        let idx = self.inner.add_node(vertex.clone());
        self.vertices.insert(vertex.clone(), idx);
        idx
    }

    fn degree(&self, vertex: &str, direction: Direction) -> usize {
        self.vertices.get(vertex).map_or(0, |&idx| {
            self.inner.neighbors_directed(idx, direction).count()
        })
    }
}

/// Stored sections carry at least one unit of capacity.
pub fn check_capacity(edge: &Edge) -> NetworkResult<()> {
    if edge.capacity == 0 {
        return Err(NetworkError::ZeroCapacity {
            from: edge.from.clone(),
            to: edge.to.clone(),
        });
    }
    Ok(())
}

/// The first edge whose endpoints already appeared earlier in the list.
pub fn first_duplicate(edges: &[Edge]) -> Option<&Edge> {
    let mut seen = HashSet::new();
    edges.iter().find(|&edge| !seen.insert((&edge.from, &edge.to)))
}

/// Check the structural rules over a prospective edge set given as
/// `(from, to)` pairs.
///
/// No two sections may be mutual reverses, and the set needs at least one
/// vertex with in-degree 0 and one with out-degree 0. The reverse-pair rule is
/// reported first.
pub fn check_structure<'a>(
    sections: impl IntoIterator<Item = (&'a Vertex, &'a Vertex)>,
) -> NetworkResult<()> {
    let pairs: Vec<(&Vertex, &Vertex)> = sections.into_iter().collect();
    let present: HashSet<(&Vertex, &Vertex)> = pairs.iter().copied().collect();

    if let Some((from, to)) = pairs.iter().find(|(from, to)| present.contains(&(*to, *from))) {
        return Err(NetworkError::ParallelContradirectionalEdge {
            from: (*from).clone(),
            to: (*to).clone(),
        });
    }

    let tails: HashSet<&Vertex> = pairs.iter().map(|(from, _)| *from).collect();
    let heads: HashSet<&Vertex> = pairs.iter().map(|(_, to)| *to).collect();
    let has_start = tails.iter().any(|v| !heads.contains(v));
    let has_target = heads.iter().any(|v| !tails.contains(v));

    if has_start && has_target {
        Ok(())
    } else {
        Err(NetworkError::StructuralInvalidGraph)
    }
}
