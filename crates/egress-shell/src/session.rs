//! Line-oriented session over a registry

use crate::command::Command;
use crate::config::ShellConfig;
use crate::error::ShellResult;
use crate::message::{self, Reply};
use egress_core::Registry;
use std::io::{self, BufRead, Write};
use tracing::{debug, trace};

/// How a session loop came to an end.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionEnd {
    Quit,
    EndOfInput,
}

/// A registry plus the shell settings used to talk to it.
#[derive(Debug, Default)]
pub struct Session {
    registry: Registry,
    config: ShellConfig,
}

impl Session {
    pub fn new(config: ShellConfig) -> Self {
        Self {
            registry: Registry::new(),
            config,
        }
    }

    pub fn registry(&self) -> &Registry {
        &self.registry
    }

    pub fn config(&self) -> &ShellConfig {
        &self.config
    }

    /// Parse and run one input line.
    pub fn execute(&mut self, line: &str) -> ShellResult<Reply> {
        let command = Command::parse(line)?;
        trace!(?command, "executing");

        let reply = match command {
            Command::AddNetwork { id, edges } => {
                self.registry.create_network_with_edges(id.clone(), edges)?;
                message::network_added(&id)
            }
            Command::AddSection { id, edge } => {
                self.registry.insert_edge(id.as_str(), edge.clone())?;
                message::section_added(&edge, &id)
            }
            Command::Flow { id, source, target } => {
                let value = self
                    .registry
                    .maximum_flow(id.as_str(), source.as_str(), target.as_str())?;
                message::flow_value(value)
            }
            Command::Print { id } => message::sections(&self.registry.sorted_edges(id.as_str())?),
            Command::ListNetworks => message::networks(&self.registry.summaries()),
            Command::ListFlows { id } => {
                message::flows(&self.registry.sorted_flow_results(id.as_str())?)
            }
            Command::Quit => Reply::Quit,
        };
        Ok(reply)
    }

    /// Read commands from `input` until `quit` or end of input.
    ///
    /// Replies go to `out`, failures to `err` behind the configured prefix.
    /// Only I/O failures abort the loop.
    pub fn run<R, O, E>(&mut self, mut input: R, out: &mut O, err: &mut E) -> io::Result<SessionEnd>
    where
        R: BufRead,
        O: Write,
        E: Write,
    {
        let mut buffer = Vec::new();
        loop {
            if let Some(prompt) = &self.config.prompt {
                write!(out, "{prompt}")?;
                out.flush()?;
            }

            buffer.clear();
            if input.read_until(b'\n', &mut buffer)? == 0 {
                debug!("end of input");
                return Ok(SessionEnd::EndOfInput);
            }
            // Bytes that are not UTF-8 become U+FFFD and fail like any other bad command
            let decoded = String::from_utf8_lossy(&buffer);
            let line = decoded.trim_end_matches(['\n', '\r']);
            if self.config.echo_commands {
                writeln!(out, "> {line}")?;
            }

            match self.execute(line) {
                Ok(Reply::Output(text)) => writeln!(out, "{text}")?,
                Ok(Reply::Quit) => {
                    debug!("quit");
                    return Ok(SessionEnd::Quit);
                }
                Err(e) => {
                    debug!(line, error = %e, "command failed");
                    writeln!(err, "{}{e}", self.config.error_prefix)?;
                }
            }
        }
    }
}
