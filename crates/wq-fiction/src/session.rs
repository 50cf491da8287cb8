//! Interactive session management.

use std::path::PathBuf;

use tracing::{debug, warn};
use wq_core::{Direction, Narration, World};

use crate::config::SessionConfig;
use crate::parser::{Command, Verb, parse_command};
use crate::persist::{clear_file, load_file, save_file};
use crate::status::render_status;

const HELP: &str = "\
Commands:
  go [direction]      - Move north, south, east, or west
  look                - Show room description and items
  pick [item]         - Pick up an item
  use [item]          - Use an item in the current room
  inventory, i        - Show your inventory
  save [file]         - Save your progress
  load [file]         - Load a saved game
  restart             - Clear progress and start over
  help                - Show this help message
  quit, exit          - Save and quit the game";

/// Why a session ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EndReason {
    /// The player reached the Gem of Eternity.
    Victory,
    /// The player quit.
    Quit,
}

/// Whether a session still accepts commands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SessionStatus {
    /// Commands are processed normally.
    #[default]
    Active,
    /// The adventure is over.
    Ended(EndReason),
}

/// The result of processing one line of input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Response {
    /// Narration, one line per `\n`.
    pub text: String,
    /// Session status after the command.
    pub status: SessionStatus,
}

impl Response {
    /// Whether the session ended with this command (or earlier).
    pub fn is_ended(&self) -> bool {
        matches!(self.status, SessionStatus::Ended(_))
    }
}

/// A game session: one world, one player, one command at a time.
#[derive(Debug)]
pub struct GameSession {
    world: World,
    config: SessionConfig,
    status: SessionStatus,
}

impl GameSession {
    /// Start a session in a fresh world.
    pub fn new(config: SessionConfig) -> Self {
        Self::with_world(World::new(), config)
    }

    /// Start a session in an existing world, e.g. one restored from an autosave.
    pub fn with_world(world: World, config: SessionConfig) -> Self {
        Self {
            world,
            config,
            status: SessionStatus::Active,
        }
    }

    /// The current world.
    pub fn world(&self) -> &World {
        &self.world
    }

    /// Current session status.
    pub fn status(&self) -> SessionStatus {
        self.status
    }

    /// Whether the session has ended.
    pub fn is_ended(&self) -> bool {
        matches!(self.status, SessionStatus::Ended(_))
    }

    /// Process one line of player input.
    pub fn process(&mut self, input: &str) -> Response {
        self.execute(parse_command(input))
    }

    /// Execute a parsed command.
    pub fn execute(&mut self, command: Command) -> Response {
        if self.is_ended() {
            return self.respond(vec!["The adventure is over.".to_string()]);
        }

        debug!(?command, "executing");
        let lines = match command {
            Command::Empty => Vec::new(),
            Command::Move { direction } => self.do_move(direction),
            Command::UnknownDirection { .. } => {
                vec!["I don't recognize that direction. Try north/south/east/west.".to_string()]
            }
            Command::MissingArgument { verb } => vec![missing_argument(verb).to_string()],
            Command::Pick { item } => self.do_pick(&item),
            Command::Use { item } => self.do_use(&item),
            Command::Look => self.status_lines(),
            Command::Inventory => vec![format!(
                "Inventory: {}",
                self.world.player().inventory_line()
            )],
            Command::Help => HELP.lines().map(str::to_string).collect(),
            Command::Quit => self.do_quit(),
            Command::Save { path } => self.do_save(path),
            Command::Load { path } => self.do_load(path),
            Command::Restart => self.do_restart(),
            Command::Unknown { verb, suggestion } => vec![match suggestion {
                Some(s) => format!(
                    "Unknown command '{verb}'. Did you mean '{s}'? (Type 'help' for commands.)"
                ),
                None => format!("Unknown command '{verb}'. Type 'help' for commands."),
            }],
        };

        self.respond(lines)
    }

    fn respond(&self, lines: Vec<String>) -> Response {
        Response {
            text: lines.join("\n"),
            status: self.status,
        }
    }

    /// Render the status block, ending the session if it declares victory.
    fn status_lines(&mut self) -> Vec<String> {
        let report = render_status(&self.world);
        if report.victory {
            debug!("victory");
            self.status = SessionStatus::Ended(EndReason::Victory);
        }
        report.lines
    }

    fn narrate(&mut self, narration: Narration) -> Vec<String> {
        let wants_status = narration.wants_status();
        let mut lines = narration.into_lines();
        if wants_status {
            lines.extend(self.status_lines());
        }
        lines
    }

    fn do_move(&mut self, direction: Direction) -> Vec<String> {
        let narration = self.world.move_player(direction);
        self.narrate(narration)
    }

    fn do_pick(&mut self, raw: &str) -> Vec<String> {
        match self.world.resolve_item(raw) {
            Some(item) => {
                let narration = self.world.pick(item);
                self.narrate(narration)
            }
            None => vec![format!("There is no {raw} here.")],
        }
    }

    fn do_use(&mut self, raw: &str) -> Vec<String> {
        match self.world.resolve_item(raw) {
            Some(item) => {
                let narration = self.world.use_item(item);
                self.narrate(narration)
            }
            None => vec![format!("You don't have a {raw}.")],
        }
    }

    fn target_path(&self, path: Option<String>) -> PathBuf {
        path.map(PathBuf::from)
            .unwrap_or_else(|| self.config.save_path.clone())
    }

    fn do_save(&mut self, path: Option<String>) -> Vec<String> {
        let path = self.target_path(path);
        match save_file(&self.world, &path) {
            Ok(()) => vec![format!("Game saved to {}.", path.display())],
            Err(e) => {
                warn!(path = %path.display(), error = %e, "save failed");
                vec!["Could not save game.".to_string()]
            }
        }
    }

    fn do_load(&mut self, path: Option<String>) -> Vec<String> {
        let path = self.target_path(path);
        match load_file(&path) {
            Ok(restored) => {
                self.world = restored.world;
                let mut lines = vec![format!(
                    "Game loaded from {}. Type 'look' to resume.",
                    path.display()
                )];
                lines.extend(restored.warnings.iter().map(|w| format!("Warning: {w}")));
                lines
            }
            Err(e) => {
                warn!(path = %path.display(), error = %e, "load failed");
                vec!["Could not load game.".to_string()]
            }
        }
    }

    fn do_restart(&mut self) -> Vec<String> {
        if let Some(autosave) = self.config.autosave() {
            if let Err(e) = clear_file(autosave) {
                warn!(path = %autosave.display(), error = %e, "could not clear autosave");
            }
        }

        self.world = World::new();
        let mut lines = vec!["Progress cleared. A new adventure begins.".to_string()];
        lines.extend(self.status_lines());
        lines
    }

    fn do_quit(&mut self) -> Vec<String> {
        let mut lines = Vec::new();
        if let Some(autosave) = self.config.autosave() {
            if let Err(e) = save_file(&self.world, autosave) {
                lines.push(format!("Warning: could not autosave: {e}"));
            }
        }
        lines.push("Farewell, wizard!".to_string());
        self.status = SessionStatus::Ended(EndReason::Quit);
        lines
    }
}

fn missing_argument(verb: Verb) -> &'static str {
    match verb {
        Verb::Go => "Go where? Try: go north",
        Verb::Use => "Use what? Example: use stone",
        _ => "Pick what? Example: pick orb",
    }
}
