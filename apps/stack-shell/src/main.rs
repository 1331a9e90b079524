//! # stack-shell Entry Point
//!
//! ## Startup Sequence
//! 1. Load configuration (LIFO_* environment variables)
//! 2. Initialize tracing (stderr)
//! 3. Run the read loop on stdin/stdout

use std::io;

use anyhow::Context;
use tracing::info;

use stack_shell::{init_tracing, run, ShellConfig};

fn main() -> anyhow::Result<()> {
    let config = ShellConfig::load().context("Failed to load configuration")?;
    init_tracing(&config);

    info!(
        output = %config.output,
        initial_capacity = config.initial_capacity,
        "Starting stack shell"
    );

    let stdin = io::stdin();
    let stdout = io::stdout();
    run(stdin.lock(), stdout.lock(), &config).context("Shell terminated")?;

    Ok(())
}
