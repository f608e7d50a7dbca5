//! Lexical rules for identifiers and sections

use crate::error::{ShellError, ShellResult};
use egress_core::{Capacity, Edge, NetworkError, NetworkId, Vertex, first_duplicate};
use regex::Regex;
use std::sync::LazyLock;

static NETWORK_ID: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[A-Z]{1,6}$").expect("network pattern compiles"));
static VERTEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[a-z]{1,6}$").expect("vertex pattern compiles"));
static SECTION: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^([a-z]{1,6})([0-9])([a-z]{1,6})$").expect("section pattern compiles")
});

/// Separator between the sections of a list.
pub const LIST_SEPARATOR: char = ';';

pub fn parse_network_id(text: &str) -> ShellResult<NetworkId> {
    if NETWORK_ID.is_match(text) {
        Ok(NetworkId::from(text))
    } else {
        Err(ShellError::InvalidNetworkId(text.to_string()))
    }
}

pub fn parse_vertex(text: &str) -> ShellResult<Vertex> {
    if VERTEX.is_match(text) {
        Ok(Vertex::from(text))
    } else {
        Err(ShellError::InvalidVertex(text.to_string()))
    }
}

/// Parse `<from><capacity><to>`, e.g. `ab3c`.
///
/// The capacity is a single digit other than 0 and the two endpoints must
/// differ.
pub fn parse_edge(text: &str) -> ShellResult<Edge> {
    let invalid = || ShellError::InvalidEdge(text.to_string());
    let caps = SECTION.captures(text).ok_or_else(invalid)?;

    let from = &caps[1];
    let to = &caps[3];
    let capacity: Capacity = caps[2].parse().map_err(|_| invalid())?;
    if capacity == 0 || from == to {
        return Err(invalid());
    }
    Ok(Edge::new(from, to, capacity))
}

/// Parse a `;`-separated list of sections. Empty items make the whole list
/// invalid and a repeated `(from, to)` pair is reported as a duplicate.
pub fn parse_edge_list(text: &str) -> ShellResult<Vec<Edge>> {
    let edges = text
        .split(LIST_SEPARATOR)
        .map(parse_edge)
        .collect::<ShellResult<Vec<_>>>()
        .map_err(|_| ShellError::InvalidEdgeList(text.to_string()))?;

    if let Some(edge) = first_duplicate(&edges) {
        return Err(NetworkError::DuplicateEdge {
            from: edge.from.clone(),
            to: edge.to.clone(),
        }
        .into());
    }
    Ok(edges)
}

/// Whether `text` names more than one section.
pub fn is_edge_list(text: &str) -> bool {
    text.contains(LIST_SEPARATOR)
}
