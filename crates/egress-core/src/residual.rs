//! Residual network used for the duration of one flow computation

use crate::model::Vertex;
use crate::network::Network;
use std::collections::HashMap;

/// Dense vertex index inside a [`ResidualNetwork`].
pub type VertexIdx = usize;

/// Index of an arc inside a [`ResidualNetwork`].
pub type ArcId = usize;

/// A directed arc of the residual network.
///
/// Flow is the only field that changes while the engine runs; the residual
/// capacity is derived from it on every read.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResidualArc {
    pub from: VertexIdx,
    pub to: VertexIdx,
    pub capacity: i64,
    pub flow: i64,
}

impl ResidualArc {
    pub fn residual(&self) -> i64 {
        self.capacity - self.flow
    }
}

/// Forward and reverse arcs for every section of a network.
///
/// Arcs are pushed in pairs, so the partner of arc `i` is `i ^ 1`: forward arcs
/// sit at even indices, their reverse arcs right after them.
#[derive(Debug, Clone)]
pub struct ResidualNetwork<'a> {
    labels: Vec<&'a Vertex>,
    index: HashMap<&'a str, VertexIdx>,
    arcs: Vec<ResidualArc>,
    outgoing: Vec<Vec<ArcId>>,
}

impl<'a> ResidualNetwork<'a> {
    /// Forward arc `(capacity, flow 0)` and reverse arc `(0, 0)` per section,
    /// in the network's insertion order.
    pub fn from_network(network: &'a Network) -> Self {
        let mut residual = ResidualNetwork {
            labels: Vec::with_capacity(network.vertex_count()),
            index: HashMap::with_capacity(network.vertex_count()),
            arcs: Vec::with_capacity(network.edge_count() * 2),
            outgoing: Vec::with_capacity(network.vertex_count()),
        };
        for (from, to, capacity) in network.sections() {
            let from = residual.vertex(from);
            let to = residual.vertex(to);
            residual.push_pair(from, to, i64::from(capacity));
        }
        residual
    }

    fn vertex(&mut self, label: &'a Vertex) -> VertexIdx {
        if let Some(&idx) = self.index.get(label.as_str()) {
            return idx;
        }
        let idx = self.labels.len();
        self.labels.push(label);
        self.index.insert(label.as_str(), idx);
        self.outgoing.push(Vec::new());
        idx
    }

    fn push_pair(&mut self, from: VertexIdx, to: VertexIdx, capacity: i64) {
        let forward = self.arcs.len();
        self.arcs.push(ResidualArc { from, to, capacity, flow: 0 });
        self.arcs.push(ResidualArc { from: to, to: from, capacity: 0, flow: 0 });
        self.outgoing[from].push(forward);
        self.outgoing[to].push(forward + 1);
    }

    /// The arc that cancels flow pushed along `arc`.
    pub fn partner(arc: ArcId) -> ArcId {
        arc ^ 1
    }

    pub fn vertex_index(&self, label: &str) -> Option<VertexIdx> {
        self.index.get(label).copied()
    }

    pub fn label(&self, idx: VertexIdx) -> &'a Vertex {
        self.labels[idx]
    }

    pub fn vertex_count(&self) -> usize {
        self.labels.len()
    }

    pub fn arc_count(&self) -> usize {
        self.arcs.len()
    }

    pub fn arc(&self, id: ArcId) -> &ResidualArc {
        &self.arcs[id]
    }

    /// Arcs leaving `vertex`, reverse arcs included, in insertion order.
    pub fn outgoing(&self, vertex: VertexIdx) -> &[ArcId] {
        &self.outgoing[vertex]
    }

    /// Smallest residual capacity along `path`, or 0 for an empty path.
    pub fn bottleneck(&self, path: &[ArcId]) -> i64 {
        path.iter()
            .map(|&id| self.arcs[id].residual())
            .min()
            .unwrap_or(0)
    }

    /// Push `amount` along every arc of `path` and cancel it on the partners.
    pub fn augment(&mut self, path: &[ArcId], amount: i64) {
        for &id in path {
            self.arcs[id].flow += amount;
            self.arcs[Self::partner(id)].flow -= amount;
        }
    }

    /// Sum of flow over every arc leaving `vertex`.
    ///
    /// Reverse arcs carry the negated flow of sections entering `vertex`, so
    /// this is outflow minus inflow.
    pub fn net_outflow(&self, vertex: VertexIdx) -> i64 {
        self.outgoing[vertex]
            .iter()
            .map(|&id| self.arcs[id].flow)
            .sum()
    }
}
