//! Parsed shell commands

use crate::error::{ShellError, ShellResult};
use crate::grammar::{is_edge_list, parse_edge, parse_edge_list, parse_network_id, parse_vertex};
use egress_core::{Edge, NetworkId, Vertex};

/// One line of shell input after validation.
#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    /// `add NET a1b;b2c`
    AddNetwork { id: NetworkId, edges: Vec<Edge> },
    /// `add NET a1b`, inserting or re-weighting one section.
    AddSection { id: NetworkId, edge: Edge },
    /// `flow NET s t`
    Flow { id: NetworkId, source: Vertex, target: Vertex },
    /// `print NET`
    Print { id: NetworkId },
    /// `list`
    ListNetworks,
    /// `list NET`
    ListFlows { id: NetworkId },
    /// `quit`
    Quit,
}

impl Command {
    /// Parse a raw input line. Tokens are separated by single spaces, so a
    /// doubled or trailing space shows up as an extra (empty) argument.
    pub fn parse(line: &str) -> ShellResult<Self> {
        let (name, args) = match line.split_once(' ') {
            Some((name, rest)) => (name, rest.split(' ').collect::<Vec<_>>()),
            None => (line, Vec::new()),
        };

        match name {
            "add" => {
                expect_args("add", "2", &args, 2)?;
                let id = parse_network_id(args[0])?;
                if is_edge_list(args[1]) {
                    Ok(Command::AddNetwork { id, edges: parse_edge_list(args[1])? })
                } else {
                    Ok(Command::AddSection { id, edge: parse_edge(args[1])? })
                }
            }
            "flow" => {
                expect_args("flow", "3", &args, 3)?;
                Ok(Command::Flow {
                    id: parse_network_id(args[0])?,
                    source: parse_vertex(args[1])?,
                    target: parse_vertex(args[2])?,
                })
            }
            "print" => {
                expect_args("print", "1", &args, 1)?;
                Ok(Command::Print { id: parse_network_id(args[0])? })
            }
            "list" => match args.as_slice() {
                [] => Ok(Command::ListNetworks),
                [id] => Ok(Command::ListFlows { id: parse_network_id(id)? }),
                _ => Err(ShellError::ArgumentCount {
                    command: "list",
                    expected: "0 or 1",
                    given: args.len(),
                }),
            },
            "quit" => {
                expect_args("quit", "0", &args, 0)?;
                Ok(Command::Quit)
            }
            other => Err(ShellError::UnknownCommand(other.to_string())),
        }
    }
}

fn expect_args(command: &'static str, expected: &'static str, args: &[&str], count: usize) -> ShellResult<()> {
    if args.len() == count {
        Ok(())
    } else {
        Err(ShellError::ArgumentCount {
            command,
            expected,
            given: args.len(),
        })
    }
}
