//! Maximum flow via Edmonds-Karp (shortest augmenting paths), memoized per network.

use crate::model::{FlowKey, FlowResult, FlowValue};
use crate::network::Network;
use crate::residual::ResidualNetwork;
use crate::search::shortest_augmenting_path;
use tracing::{debug, trace};

/// Counters kept by a [`FlowEngine`] across all queries.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct EngineStats {
    /// Flow computations that missed the cache.
    pub computations: u64,
    /// Queries answered from a network's flow cache.
    pub cache_hits: u64,
    /// Augmenting-path searches run, the final unsuccessful one included.
    pub searches: u64,
    /// Augmentations applied.
    pub augmentations: u64,
}

/// Edmonds-Karp driver.
///
/// The engine itself holds no network state; results live in each network's
/// flow cache.
#[derive(Debug, Default)]
pub struct FlowEngine {
    stats: EngineStats,
}

impl FlowEngine {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn stats(&self) -> EngineStats {
        self.stats
    }

    /// Maximum flow from `source` to `target`.
    ///
    /// Answered from the network's cache when possible; otherwise computed and
    /// stored there. Vertices missing from the network give a flow of 0.
    /// Callers are expected to have checked that `source` is a valid start,
    /// `target` a valid target and that the two differ.
    pub fn maximum_flow(&mut self, network: &mut Network, source: &str, target: &str) -> FlowValue {
        let key = FlowKey::new(source, target);
        if let Some(value) = network.flow_cache().lookup(&key) {
            self.stats.cache_hits += 1;
            debug!(network = %network.id(), source, target, value, "flow cache hit");
            return value;
        }

        let value = self.compute(network, source, target);
        network
            .flow_cache_mut()
            .insert(FlowResult::new(value, key.source, key.target));
        value
    }

    fn compute(&mut self, network: &Network, source: &str, target: &str) -> FlowValue {
        self.stats.computations += 1;

        let mut residual = ResidualNetwork::from_network(network);
        let (Some(s), Some(t)) = (residual.vertex_index(source), residual.vertex_index(target)) else {
            debug!(network = %network.id(), source, target, "endpoint not in network");
            return 0;
        };

        let mut rounds = 0u64;
        loop {
            self.stats.searches += 1;
            let Some(path) = shortest_augmenting_path(&residual, s, t) else {
                break;
            };
            let bottleneck = residual.bottleneck(&path);
            residual.augment(&path, bottleneck);
            self.stats.augmentations += 1;
            rounds += 1;
            trace!(round = rounds, arcs = path.len(), bottleneck, "augmented");
        }

        // Net outflow at the source; never negative since no path re-enters it.
        let total = FlowValue::try_from(residual.net_outflow(s)).unwrap_or(0);
        debug!(network = %network.id(), source, target, total, rounds, "maximum flow computed");
        total
    }
}
