//! CLI command implementations

use anyhow::Context;
use egress_core::EngineStats;
use egress_shell::{Session, SessionEnd, ShellConfig};
use std::fs::File;
use std::io::{self, BufReader};
use std::path::Path;

/// Interactive session on stdin/stdout.
pub fn repl(config: Option<&Path>) -> anyhow::Result<()> {
    let mut session = Session::new(ShellConfig::load(config)?);
    let stdin = io::stdin();
    let end = session
        .run(stdin.lock(), &mut io::stdout(), &mut io::stderr())
        .context("session I/O failed")?;
    finish(&session, end);
    Ok(())
}

/// Run a command file; output is the same as typing the lines into the REPL.
pub fn run_script(script: &Path, config: Option<&Path>) -> anyhow::Result<()> {
    let mut session = Session::new(ShellConfig::load(config)?);
    let file = File::open(script)
        .with_context(|| format!("failed to open script {}", script.display()))?;
    let end = session
        .run(BufReader::new(file), &mut io::stdout(), &mut io::stderr())
        .with_context(|| format!("failed to run script {}", script.display()))?;
    finish(&session, end);
    Ok(())
}

fn finish(session: &Session, end: SessionEnd) {
    let EngineStats {
        computations,
        cache_hits,
        augmentations,
        ..
    } = session.registry().engine_stats();
    tracing::info!(
        ?end,
        networks = session.registry().len(),
        computations,
        cache_hits,
        augmentations,
        "session finished"
    );
}
