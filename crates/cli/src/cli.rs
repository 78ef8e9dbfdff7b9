// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

use clap::{Parser, Subcommand};
use clap_complete::Shell;

const QUICKSTART_HELP: &str = "\
Get started:
  doq init                              Initialize the sync queue
  doq add create task task-1 \\
      --data '{\"title\": \"buy milk\"}'   Queue a local mutation
  doq sync                              Push queued mutations to the cloud
  doq status                            Show queue and connectivity state";

#[derive(Parser)]
#[command(name = "doq")]
#[command(about = "Offline sync queue for a local-first to-do client")]
#[command(
    long_about = "Offline sync queue for a local-first to-do client.\n\n\
    Local mutations are captured in a durable queue and pushed to the cloud\n\
    with exponential backoff when connectivity allows."
)]
#[command(after_help = QUICKSTART_HELP)]
pub struct Cli {
    /// Enable debug logging
    #[arg(long, short, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand)]
pub enum Command {
    /// Initialize a sync queue in the current (or given) directory
    Init {
        /// Directory to initialize (defaults to the current directory)
        path: Option<String>,
    },

    /// Queue a local mutation for sync
    #[command(
        arg_required_else_help = true,
        after_help = "Examples:\n  \
        doq add create task task-1 --data '{\"title\": \"buy milk\"}'\n  \
        doq add update task task-1 --data '{\"completed\": true}'\n  \
        doq add delete label lbl-3"
    )]
    Add {
        /// Mutation kind (create, update, delete)
        operation: String,

        /// Entity kind (task, label, project)
        entity_type: String,

        /// Identifier of the affected entity
        entity_id: String,

        /// Changed fields as a JSON object
        #[arg(long)]
        data: Option<String>,
    },

    /// Run a sync pass over the queue now
    Sync,

    /// Show queue counts, connectivity, and the last successful sync
    Status,

    /// Show recent sync runs, newest first
    History {
        /// Maximum number of runs to show
        #[arg(long, short, default_value_t = 10)]
        limit: usize,
    },

    /// Show aggregate statistics over the sync history
    Stats,

    /// Remove all queued items
    Clear,

    /// Toggle offline mode (on suppresses auto-sync on reconnect)
    Offline {
        /// "on" or "off"
        mode: String,
    },

    /// Export the queue and history to a JSON snapshot
    Export {
        /// Output file path
        filepath: String,
    },

    /// Validate a JSON snapshot file
    Import {
        /// Snapshot file path
        filepath: String,
    },

    /// Generate shell completions
    Completion {
        /// Shell to generate completions for
        shell: Shell,
    },
}
