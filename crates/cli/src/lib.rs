// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! doqrs - CLI front-end for the doq offline sync queue.
//!
//! This crate wires the [`doq_core`] engine to a command-line surface:
//! a `.doq/` directory holds the configuration and the SQLite-backed
//! queue, and each subcommand maps onto one engine operation.
//!
//! # Main Components
//!
//! - [`Cli`] / [`Command`] - clap definitions for the `doq` binary
//! - [`Config`] - project configuration (`.doq/config.toml`)
//! - [`run`] - testable command dispatch without process execution

mod cli;
mod commands;

pub mod config;
pub mod error;

pub use cli::{Cli, Command};
pub use config::{find_doq_dir, get_db_path, init_doq_dir, Config};
pub use error::{Error, Result};

use clap::CommandFactory;
use clap_complete::generate;

/// Execute a CLI command. This is the main entry point for library users
/// and provides a testable way to run commands without process execution.
pub fn run(command: Command) -> Result<()> {
    match command {
        Command::Init { path } => commands::init::run(path),
        Command::Add {
            operation,
            entity_type,
            entity_id,
            data,
        } => commands::add::run(&operation, &entity_type, &entity_id, data),
        Command::Sync => commands::sync::run(),
        Command::Status => commands::status::run(),
        Command::History { limit } => commands::history::run(limit),
        Command::Stats => commands::stats::run(),
        Command::Clear => commands::clear::run(),
        Command::Offline { mode } => commands::offline::run(&mode),
        Command::Export { filepath } => commands::export::run(&filepath),
        Command::Import { filepath } => commands::import::run(&filepath),
        Command::Completion { shell } => {
            let mut cmd = Cli::command();
            generate(shell, &mut cmd, "doq", &mut std::io::stdout());
            Ok(())
        }
    }
}
