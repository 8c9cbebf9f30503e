//! CLI argument definitions and parsing.

pub mod types;

use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;
use types::{ChannelId, PlayerId, ServerId};

/// Arguments identifying one player record
#[derive(Debug, Args)]
pub struct PlayerArgs {
    /// Server (guild) id.
    #[clap(long, short)]
    pub server: ServerId,

    /// Channel id within the server.
    #[clap(long, short)]
    pub channel: ChannelId,

    /// Player (user) id.
    #[clap(long, short)]
    pub player: PlayerId,
}

#[derive(Debug, Parser)]
#[clap(name = "rollkeeper", about = "Player persistence for a dice-rolling chat-bot game")]
pub struct Rollkeeper {
    #[clap(subcommand)]
    pub command: Commands,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Ensure the database file and schema exist.
    ///
    /// Safe to run on an already-initialized file.
    Init {
        /// Database file (or set `ROLLKEEPER_DB` env var).
        #[clap(long)]
        db: Option<PathBuf>,

        /// Print the resolved database path while working.
        #[clap(long)]
        verbose: bool,
    },

    /// Look up a player's flavour, creating the record on first sight.
    ///
    /// Every lookup refreshes the player's last-roll timestamp, so this
    /// doubles as the activity heartbeat.
    Flavour {
        #[clap(flatten)]
        ids: PlayerArgs,

        /// Set the flavour to this tag instead of reading it.
        #[clap(long)]
        set: Option<String>,

        /// Database file (or set `ROLLKEEPER_DB` env var).
        #[clap(long)]
        db: Option<PathBuf>,

        /// Output results as JSON instead of text lines.
        #[clap(long)]
        json: bool,
    },

    /// Delete records inactive for longer than the retention window.
    ///
    /// Records that never rolled are left alone.
    Sweep {
        /// Database file (or set `ROLLKEEPER_DB` env var).
        #[clap(long)]
        db: Option<PathBuf>,

        /// Print the cutoff before sweeping.
        #[clap(long)]
        verbose: bool,
    },

    /// List stored player records.
    Show {
        /// Database file (or set `ROLLKEEPER_DB` env var).
        #[clap(long)]
        db: Option<PathBuf>,

        /// Output results as JSON instead of text lines.
        #[clap(long)]
        json: bool,
    },
}
