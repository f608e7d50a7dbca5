//! Failure outcomes of registry and network operations

use std::fmt;

use crate::model::{NetworkId, Vertex};
use thiserror::Error;

/// Which end of a flow query a vertex was supplied for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VertexRole {
    Start,
    Target,
}

impl fmt::Display for VertexRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            VertexRole::Start => f.write_str("start"),
            VertexRole::Target => f.write_str("target"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum NetworkError {
    #[error("escape network {0} already exists")]
    DuplicateNetwork(NetworkId),

    #[error("there is no escape network called {0}")]
    NetworkNotFound(NetworkId),

    /// The edge set would lack a vertex with in-degree 0 or one with out-degree 0.
    #[error("the network would have no valid start or no valid target vertex")]
    StructuralInvalidGraph,

    #[error("sections {from}->{to} and {to}->{from} cannot both be part of a network")]
    ParallelContradirectionalEdge { from: Vertex, to: Vertex },

    #[error("{vertex} is not a valid {role} vertex of escape network {network}")]
    InvalidVertexForQuery {
        network: NetworkId,
        vertex: Vertex,
        role: VertexRole,
    },

    #[error("start and target vertex must differ")]
    EqualEndpoints,

    #[error("section {from}->{to} must have a capacity of at least 1")]
    ZeroCapacity { from: Vertex, to: Vertex },

    #[error("section {from}->{to} is given more than once")]
    DuplicateEdge { from: Vertex, to: Vertex },
}

pub type NetworkResult<T> = Result<T, NetworkError>;
