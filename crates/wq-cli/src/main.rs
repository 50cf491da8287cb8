//! Terminal front-end for Wizard's Quest.

mod commands;

use std::path::PathBuf;
use std::process;

use clap::{Parser, Subcommand};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(
    name = "wq",
    about = "Wizard's Quest: climb the tower and claim the Gem of Eternity",
    version,
    propagate_version = true
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Play the game in the terminal
    Play {
        /// File used by `save` and `load` when no path is given
        #[arg(short, long, default_value = wq_fiction::config::DEFAULT_SAVE_PATH)]
        save: PathBuf,

        /// File written on quit and resumed from on start
        #[arg(long, default_value = wq_fiction::config::DEFAULT_AUTOSAVE_PATH)]
        autosave: PathBuf,

        /// Never write or resume from an autosave
        #[arg(long, conflicts_with = "autosave")]
        no_autosave: bool,

        /// Ignore any existing autosave and start a new game
        #[arg(long)]
        fresh: bool,
    },

    /// Show the contents of a save file
    Inspect {
        /// Save file to read
        path: PathBuf,
    },
}

fn main() {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "warn".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Play {
            save,
            autosave,
            no_autosave,
            fresh,
        } => {
            let autosave = (!no_autosave).then_some(autosave);
            commands::play::run(save, autosave, fresh)
        }
        Commands::Inspect { path } => commands::inspect::run(&path),
    };

    if let Err(e) = result {
        eprintln!("error: {e}");
        process::exit(1);
    }
}
