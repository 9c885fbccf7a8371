//! CLI for generating lock and project job links.

mod commands;

use anyhow::Result;
use clap::{Parser, Subcommand};
use linkgen_core::config;
use std::path::PathBuf;

use commands::{run_decode, run_job, run_lock, run_routes, JobArgs};

/// Top-level CLI for linkgen.
#[derive(Debug, Parser)]
#[command(name = "linkgen")]
#[command(about = "linkgen: build external links to lock and project job views", long_about = None)]
pub struct Cli {
    /// Config file to use instead of ~/.config/linkgen/config.toml.
    #[arg(long, global = true, value_name = "PATH")]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: CliCommand,
}

#[derive(Debug, Subcommand)]
pub enum CliCommand {
    /// Print the link to the lock view for a lock ID.
    Lock {
        /// Lock identifier (escaped for you).
        id: String,
    },

    /// Print the link to a project's job view within a pull request.
    Job(JobArgs),

    /// List registered routes.
    Routes {
        /// Print as JSON.
        #[arg(long)]
        json: bool,
    },

    /// Decode a query-escaped value (e.g. the id from a lock link).
    Decode {
        /// Escaped value.
        value: String,
    },
}

impl CliCommand {
    pub fn run_from_args() -> Result<()> {
        let cli = Cli::parse();

        if let CliCommand::Decode { value } = &cli.command {
            return run_decode(value);
        }

        let cfg = match &cli.config {
            Some(path) => config::load_from(path)?,
            None => config::load_or_init()?,
        };
        tracing::debug!("loaded config: {:?}", cfg);
        let links = cfg.build_generator()?;

        match cli.command {
            CliCommand::Lock { id } => run_lock(&links, &id)?,
            CliCommand::Job(args) => run_job(&links, &args)?,
            CliCommand::Routes { json } => run_routes(links.resolver(), json)?,
            CliCommand::Decode { .. } => {}
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests;
