//! Escape-route network model, registry and maximum-flow engine

pub mod model;
pub mod error;
pub mod cache;
pub mod network;
pub mod residual;
pub mod search;
pub mod flow;
pub mod registry;


#[cfg(test)]
pub mod test_utils;

pub use model::{Capacity, FlowValue, Vertex, NetworkId, Edge, FlowKey, FlowResult, NetworkSummary};
pub use error::{NetworkError, NetworkResult, VertexRole};
pub use cache::FlowCache;
pub use network::{Network, EdgeChange, check_capacity, check_structure, first_duplicate};
pub use residual::{ResidualArc, ResidualNetwork};
pub use search::shortest_augmenting_path;
pub use flow::{EngineStats, FlowEngine};
pub use registry::Registry;
