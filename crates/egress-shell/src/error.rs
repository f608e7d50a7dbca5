//! Errors raised while reading and running shell commands

use egress_core::NetworkError;
use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq)]
pub enum ShellError {
    #[error("there is no command called '{0}'")]
    UnknownCommand(String),

    #[error("{command} expects {expected} argument(s), {given} given")]
    ArgumentCount {
        command: &'static str,
        expected: &'static str,
        given: usize,
    },

    #[error("'{0}' is not a valid escape network identifier")]
    InvalidNetworkId(String),

    #[error("'{0}' is not a valid vertex identifier")]
    InvalidVertex(String),

    #[error("'{0}' is not a valid section")]
    InvalidEdge(String),

    #[error("'{0}' is not a valid list of sections")]
    InvalidEdgeList(String),

    #[error(transparent)]
    Network(#[from] NetworkError),
}

pub type ShellResult<T> = Result<T, ShellError>;
