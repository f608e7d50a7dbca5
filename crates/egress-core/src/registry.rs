//! Registry of named escape-route networks

use crate::error::{NetworkError, NetworkResult, VertexRole};
use crate::flow::{EngineStats, FlowEngine};
use crate::model::*;
use crate::network::{EdgeChange, Network};
use std::collections::HashMap;
use tracing::{debug, info};

/// Owns every network of a session together with the flow engine that
/// answers queries against them.
#[derive(Debug, Default)]
pub struct Registry {
    networks: HashMap<NetworkId, Network>,
    engine: FlowEngine,
}

impl Registry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register an empty network.
    pub fn create_network(&mut self, id: NetworkId) -> NetworkResult<()> {
        if self.networks.contains_key(&id) {
            return Err(NetworkError::DuplicateNetwork(id));
        }
        info!(network = %id, "escape network created");
        self.networks.insert(id.clone(), Network::new(id));
        Ok(())
    }

    /// Register a network built from a complete edge list.
    pub fn create_network_with_edges(&mut self, id: NetworkId, edges: Vec<Edge>) -> NetworkResult<()> {
        if self.networks.contains_key(&id) {
            return Err(NetworkError::DuplicateNetwork(id));
        }
        let network = Network::with_edges(id.clone(), edges).inspect_err(|e| {
            debug!(network = %id, error = %e, "network rejected");
        })?;
        info!(
            network = %id,
            vertices = network.vertex_count(),
            sections = network.edge_count(),
            "escape network created"
        );
        self.networks.insert(id, network);
        Ok(())
    }

    pub fn lookup(&self, id: &str) -> Option<&Network> {
        self.networks.get(id)
    }

    pub fn contains(&self, id: &str) -> bool {
        self.networks.contains_key(id)
    }

    pub fn len(&self) -> usize {
        self.networks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.networks.is_empty()
    }

    /// Add a section to a network or change the capacity of an existing one.
    pub fn insert_edge(&mut self, id: &str, edge: Edge) -> NetworkResult<EdgeChange> {
        let network = self
            .networks
            .get_mut(id)
            .ok_or_else(|| NetworkError::NetworkNotFound(NetworkId::from(id)))?;
        network.insert_edge(edge).inspect_err(|e| {
            debug!(network = id, error = %e, "section rejected");
        })
    }

    /// Maximum flow between two vertices of a network.
    ///
    /// Rejects equal endpoints, a `source` that is not a valid start and a
    /// `target` that is not a valid target before the engine runs.
    pub fn maximum_flow(&mut self, id: &str, source: &str, target: &str) -> NetworkResult<FlowValue> {
        let network = self
            .networks
            .get_mut(id)
            .ok_or_else(|| NetworkError::NetworkNotFound(NetworkId::from(id)))?;

        if source == target {
            return Err(NetworkError::EqualEndpoints);
        }
        if !network.is_valid_start(source) {
            return Err(invalid_vertex(network, source, VertexRole::Start));
        }
        if !network.is_valid_target(target) {
            return Err(invalid_vertex(network, target, VertexRole::Target));
        }

        Ok(self.engine.maximum_flow(network, source, target))
    }

    /// Every network with its vertex count, largest first, ties by identifier.
    pub fn summaries(&self) -> Vec<NetworkSummary> {
        let mut summaries: Vec<NetworkSummary> = self
            .networks
            .values()
            .map(|network| NetworkSummary {
                id: network.id().clone(),
                vertex_count: network.vertex_count(),
            })
            .collect();
        summaries.sort_by(NetworkSummary::cmp_listing);
        summaries
    }

    /// Sections of a network ordered by `(from, to)`.
    pub fn sorted_edges(&self, id: &str) -> NetworkResult<Vec<Edge>> {
        self.get(id).map(Network::sorted_edges)
    }

    /// Cached flows of a network ordered by `(value, source, target)`.
    pub fn sorted_flow_results(&self, id: &str) -> NetworkResult<Vec<FlowResult>> {
        self.get(id).map(|network| network.flow_cache().sorted())
    }

    pub fn engine_stats(&self) -> EngineStats {
        self.engine.stats()
    }

    fn get(&self, id: &str) -> NetworkResult<&Network> {
        self.networks
            .get(id)
            .ok_or_else(|| NetworkError::NetworkNotFound(NetworkId::from(id)))
    }
}

fn invalid_vertex(network: &Network, vertex: &str, role: VertexRole) -> NetworkError {
    NetworkError::InvalidVertexForQuery {
        network: network.id().clone(),
        vertex: Vertex::from(vertex),
        role,
    }
}
