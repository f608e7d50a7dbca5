//! Command shell over the escape-route registry: grammar, commands, replies
//! and the line-oriented session loop.

pub mod error;
pub mod grammar;
pub mod command;
pub mod message;
pub mod config;
pub mod session;


pub use error::{ShellError, ShellResult};
pub use command::Command;
pub use message::Reply;
pub use config::ShellConfig;
pub use session::{Session, SessionEnd};
