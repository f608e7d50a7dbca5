//! Test fixtures for Egress Core

use crate::model::{Capacity, Edge, FlowValue, NetworkId};
use crate::network::Network;
use crate::registry::Registry;

/// Edges from a compact `a3b;b2c` description. Vertex labels are lowercase
/// runs, the capacity is the single digit between them.
pub fn edges(description: &str) -> Vec<Edge> {
    description
        .split(';')
        .map(|section| {
            let digit = section
                .find(|c: char| c.is_ascii_digit())
                .unwrap_or_else(|| panic!("no capacity in {section}"));
            let capacity = section[digit..digit + 1].parse::<Capacity>().unwrap();
            Edge::new(&section[..digit], &section[digit + 1..], capacity)
        })
        .collect()
}

pub fn edge(description: &str) -> Edge {
    edges(description).remove(0)
}

pub fn network(id: &str, description: &str) -> Network {
    Network::with_edges(NetworkId::from(id), edges(description)).unwrap()
}

/// A registry holding one network per `(id, description)` pair.
pub fn registry_with(networks: &[(&str, &str)]) -> Registry {
    let mut registry = Registry::new();
    for (id, description) in networks {
        registry
            .create_network_with_edges(NetworkId::from(*id), edges(description))
            .unwrap();
    }
    registry
}

/// SplitMix64, enough randomness for generating small test networks.
pub struct SplitMix64(u64);

impl SplitMix64 {
    pub fn new(seed: u64) -> Self {
        Self(seed)
    }

    pub fn next_u64(&mut self) -> u64 {
        self.0 = self.0.wrapping_add(0x9e3779b97f4a7c15);
        let mut z = self.0;
        z = (z ^ (z >> 30)).wrapping_mul(0xbf58476d1ce4e5b9);
        z = (z ^ (z >> 27)).wrapping_mul(0x94d049bb133111eb);
        z ^ (z >> 31)
    }

    /// Uniform in `0..n`.
    pub fn below(&mut self, n: u64) -> u64 {
        self.next_u64() % n
    }
}

pub fn vertex_label(i: usize) -> String {
    ((b'a' + i as u8) as char).to_string()
}

/// Random sections over `vertex_count` vertices, without self-loops,
/// repeated endpoint pairs or mutually reverse pairs. Cycles of length three
/// and more are allowed.
pub fn random_edges(rng: &mut SplitMix64, vertex_count: usize, attempts: usize) -> Vec<Edge> {
    let mut present = vec![vec![false; vertex_count]; vertex_count];
    let mut result = Vec::new();
    for _ in 0..attempts {
        let from = rng.below(vertex_count as u64) as usize;
        let to = rng.below(vertex_count as u64) as usize;
        if from == to || present[from][to] || present[to][from] {
            continue;
        }
        present[from][to] = true;
        let capacity = 1 + rng.below(9) as Capacity;
        result.push(Edge::new(vertex_label(from).as_str(), vertex_label(to).as_str(), capacity));
    }
    result
}

/// Ford-Fulkerson with depth-first augmenting paths over a capacity matrix.
pub fn reference_max_flow(edges: &[Edge], source: &str, target: &str) -> FlowValue {
    let mut labels: Vec<&str> = Vec::new();
    for edge in edges {
        for label in [edge.from.as_str(), edge.to.as_str()] {
            if !labels.contains(&label) {
                labels.push(label);
            }
        }
    }
    let position = |label: &str| labels.iter().position(|l| *l == label);
    let (Some(s), Some(t)) = (position(source), position(target)) else {
        return 0;
    };

    let n = labels.len();
    let mut residual = vec![vec![0i64; n]; n];
    for edge in edges {
        let u = position(edge.from.as_str()).unwrap();
        let v = position(edge.to.as_str()).unwrap();
        residual[u][v] += i64::from(edge.capacity);
    }

    fn dfs(residual: &mut [Vec<i64>], visited: &mut [bool], u: usize, t: usize, limit: i64) -> i64 {
        if u == t {
            return limit;
        }
        visited[u] = true;
        for v in 0..residual.len() {
            if visited[v] || residual[u][v] <= 0 {
                continue;
            }
            let pushed = dfs(residual, visited, v, t, limit.min(residual[u][v]));
            if pushed > 0 {
                residual[u][v] -= pushed;
                residual[v][u] += pushed;
                return pushed;
            }
        }
        0
    }

    let mut total = 0i64;
    loop {
        let mut visited = vec![false; n];
        let pushed = dfs(&mut residual, &mut visited, s, t, i64::MAX);
        if pushed == 0 {
            break;
        }
        total += pushed;
    }
    total as FlowValue
}
