use std::io::{self, BufRead, Write};
use std::path::PathBuf;

use colored::Colorize;
use tracing::info;

use wq_core::World;
use wq_fiction::persist::load_file;
use wq_fiction::{Command, GameSession, SessionConfig};

pub fn run(save: PathBuf, autosave: Option<PathBuf>, fresh: bool) -> Result<(), String> {
    let mut config = SessionConfig::default().with_save_path(save);
    config = match autosave {
        Some(path) => config.with_autosave_path(path),
        None => config.without_autosave(),
    };

    let world = if fresh { World::new() } else { resume(&config) };
    let mut session = GameSession::with_world(world, config);

    println!("  {} Wizard's Quest", "Welcome to".bold());
    println!("  Find the Gem of Eternity at the top of the tower.");
    println!("  Type 'help' for commands, 'quit' to exit.\n");

    let opening = session.execute(Command::Look);
    println!("{}\n", opening.text);
    if opening.is_ended() {
        return Ok(());
    }

    let stdin = io::stdin();
    let mut reader = stdin.lock();
    let mut line = String::new();

    loop {
        print!("> ");
        io::stdout().flush().map_err(|e| e.to_string())?;

        line.clear();
        match reader.read_line(&mut line) {
            Ok(0) => break, // EOF
            Err(e) => return Err(e.to_string()),
            _ => {}
        }

        let input = line.trim();
        if input.is_empty() {
            continue;
        }

        let response = session.process(input);
        for text in response.text.lines() {
            if text.starts_with("Warning:") {
                println!("{}", text.yellow());
            } else {
                println!("{text}");
            }
        }
        println!();

        if response.is_ended() {
            break;
        }
    }

    Ok(())
}

/// Pick up where the last session quit, if it left an autosave.
fn resume(config: &SessionConfig) -> World {
    let Some(path) = config.autosave().filter(|p| p.exists()) else {
        return World::new();
    };

    match load_file(path) {
        Ok(restored) => {
            info!(path = %path.display(), "resuming from autosave");
            println!("  {}", format!("Resuming from {}.", path.display()).dimmed());
            for warning in &restored.warnings {
                println!("  {}", format!("Warning: {warning}").yellow());
            }
            restored.world
        }
        Err(e) => {
            println!(
                "  {}",
                format!("Warning: could not resume from {} ({e}); starting a new game.", path.display())
                    .yellow()
            );
            World::new()
        }
    }
}
