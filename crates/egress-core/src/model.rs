//! Core value types for escape-route networks

use std::borrow::Borrow;
use std::cmp::Ordering;
use std::fmt;
use std::hash::{Hash, Hasher};

/// Capacity of a single section. Always at least 1 for edges stored in a network.
pub type Capacity = u32;

/// Total flow carried by a network between two vertices.
pub type FlowValue = u64;

/// A vertex label. Vertices have no lifecycle of their own; they only exist as
/// endpoints referenced by edges.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Vertex(String);

impl Vertex {
    pub fn new(label: impl Into<String>) -> Self {
        Vertex(label.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Vertex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl Borrow<str> for Vertex {
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl From<&str> for Vertex {
    fn from(label: &str) -> Self {
        Vertex(label.to_string())
    }
}

/// Identifier under which a network is registered.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NetworkId(String);

impl NetworkId {
    pub fn new(id: impl Into<String>) -> Self {
        NetworkId(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for NetworkId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl Borrow<str> for NetworkId {
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl From<&str> for NetworkId {
    fn from(id: &str) -> Self {
        NetworkId(id.to_string())
    }
}

/// A directed, capacitated section between two vertices.
///
/// Identity is the `(from, to)` pair: two edges with the same endpoints are the
/// same edge whatever their capacities.
#[derive(Debug, Clone)]
pub struct Edge {
    pub from: Vertex,
    pub to: Vertex,
    pub capacity: Capacity,
}

impl Edge {
    pub fn new(from: impl Into<Vertex>, to: impl Into<Vertex>, capacity: Capacity) -> Self {
        Edge {
            from: from.into(),
            to: to.into(),
            capacity,
        }
    }

    /// True if `other` runs between the same two vertices in the opposite direction.
    pub fn is_reverse_of(&self, other: &Edge) -> bool {
        self.from == other.to && self.to == other.from
    }

    /// Listing order: lexicographic by `(from, to)`.
    pub fn cmp_endpoints(&self, other: &Edge) -> Ordering {
        (&self.from, &self.to).cmp(&(&other.from, &other.to))
    }
}

impl PartialEq for Edge {
    fn eq(&self, other: &Self) -> bool {
        self.from == other.from && self.to == other.to
    }
}

impl Eq for Edge {}

impl Hash for Edge {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.from.hash(state);
        self.to.hash(state);
    }
}

/// Renders in the textual section form, e.g. `a3b`.
impl fmt::Display for Edge {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}{}", self.from, self.capacity, self.to)
    }
}

/// Memoization key of a flow computation.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct FlowKey {
    pub source: Vertex,
    pub target: Vertex,
}

impl FlowKey {
    pub fn new(source: impl Into<Vertex>, target: impl Into<Vertex>) -> Self {
        FlowKey {
            source: source.into(),
            target: target.into(),
        }
    }
}

/// A computed maximum flow. Equality and hashing only look at the
/// `(source, target)` key, so a set of results holds one entry per vertex pair.
#[derive(Debug, Clone)]
pub struct FlowResult {
    key: FlowKey,
    value: FlowValue,
}

impl FlowResult {
    pub fn new(value: FlowValue, source: impl Into<Vertex>, target: impl Into<Vertex>) -> Self {
        FlowResult {
            key: FlowKey::new(source, target),
            value,
        }
    }

    pub fn value(&self) -> FlowValue {
        self.value
    }

    pub fn source(&self) -> &Vertex {
        &self.key.source
    }

    pub fn target(&self) -> &Vertex {
        &self.key.target
    }

    pub fn key(&self) -> &FlowKey {
        &self.key
    }

    /// Listing order: by value, then source, then target, all ascending.
    pub fn cmp_listing(&self, other: &FlowResult) -> Ordering {
        self.value
            .cmp(&other.value)
            .then_with(|| self.key.cmp(&other.key))
    }
}

impl PartialEq for FlowResult {
    fn eq(&self, other: &Self) -> bool {
        self.key == other.key
    }
}

impl Eq for FlowResult {}

impl Hash for FlowResult {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.key.hash(state);
    }
}

impl Borrow<FlowKey> for FlowResult {
    fn borrow(&self) -> &FlowKey {
        &self.key
    }
}

impl fmt::Display for FlowResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {} {}", self.value, self.key.source, self.key.target)
    }
}

/// Summary line for a registered network.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NetworkSummary {
    pub id: NetworkId,
    pub vertex_count: usize,
}

impl NetworkSummary {
    /// Listing order: most vertices first, ties broken by identifier.
    pub fn cmp_listing(&self, other: &NetworkSummary) -> Ordering {
        other
            .vertex_count
            .cmp(&self.vertex_count)
            .then_with(|| self.id.cmp(&other.id))
    }
}

impl fmt::Display for NetworkSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.id, self.vertex_count)
    }
}
