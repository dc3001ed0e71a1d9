//! # Jira CLI Entry Point
//!
//! Command-line front end for the Jira REST API client: server info, the
//! current user, fields, projects, create metadata, and issue creation.

use anyhow::{Context, Result};
use clap::Parser;
use jira_api::create_jira_runtime_and_client;
use tracing::{Level, debug};
use tracing_subscriber::prelude::*;
use tracing_subscriber::{EnvFilter, fmt};

mod cli;
mod commands;
mod output;

fn main() -> Result<()> {
  let cmd = cli::Cli::parse();

  // Set up tracing based on verbosity level
  let level = level_for(cmd.verbose);

  tracing_subscriber::registry()
    .with(fmt::layer().with_writer(std::io::stderr))
    .with(EnvFilter::from_default_env().add_directive(level.into()))
    .init();

  debug!("Tracing initialized with level: {}", level);

  let options = cmd.connection.to_options()?;
  let (rt, client) = create_jira_runtime_and_client(options).context("Failed to create Jira client")?;

  let mut stdout = std::io::stdout().lock();
  rt.block_on(commands::run(&client, &cmd.command, cmd.json, &mut stdout))
}

/// Tracing level for a `-v` count.
fn level_for(verbose: u8) -> Level {
  match verbose {
    0 => Level::WARN,  // Default: warnings and errors
    1 => Level::INFO,  // -v: info, warnings, and errors
    2 => Level::DEBUG, // -vv: debug, info, warnings, and errors
    _ => Level::TRACE, // -vvv or more: trace and everything else
  }
}
