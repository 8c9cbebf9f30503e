//! Entry point: parse CLI and dispatch to command handlers.

use clap::Parser;
use rollkeeper::{
    cli::{Commands, Rollkeeper},
    commands::{
        flavour::handle_flavour, init::handle_init, show::handle_show, sweep::handle_sweep,
    },
    storage::PlayerKey,
};
use tracing_subscriber::EnvFilter;

/// Run the CLI.
fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let app = Rollkeeper::parse();

    match app.command {
        Commands::Init { db, verbose } => handle_init(db, verbose)?,

        Commands::Flavour { ids, set, db, json } => handle_flavour(
            PlayerKey::new(ids.server, ids.channel, ids.player),
            set,
            db,
            json,
        )?,

        Commands::Sweep { db, verbose } => handle_sweep(db, verbose)?,

        Commands::Show { db, json } => handle_show(db, json)?,
    }

    Ok(())
}
