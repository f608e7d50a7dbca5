//! Rendering of command outcomes

use egress_core::{Edge, FlowResult, FlowValue, NetworkId, NetworkSummary};
use std::fmt::Display;

/// Printed in place of an empty listing.
pub const EMPTY: &str = "EMPTY";

/// What a successfully executed command hands back to the session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Reply {
    /// Text for standard output, possibly spanning several lines.
    Output(String),
    Quit,
}

pub fn network_added(id: &NetworkId) -> Reply {
    Reply::Output(format!("Added new escape network with identifier {id}."))
}

pub fn section_added(edge: &Edge, id: &NetworkId) -> Reply {
    Reply::Output(format!("Added new section {edge} to escape network {id}."))
}

pub fn flow_value(value: FlowValue) -> Reply {
    Reply::Output(value.to_string())
}

pub fn sections(edges: &[Edge]) -> Reply {
    lines(edges)
}

pub fn networks(summaries: &[NetworkSummary]) -> Reply {
    lines(summaries)
}

pub fn flows(results: &[FlowResult]) -> Reply {
    lines(results)
}

fn lines<T: Display>(items: &[T]) -> Reply {
    if items.is_empty() {
        return Reply::Output(EMPTY.to_string());
    }
    let text = items
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("\n");
    Reply::Output(text)
}
