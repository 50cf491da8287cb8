//! Command parsing for player input.

use std::fmt;

use wq_core::Direction;

use super::resolver::suggest_verb;

/// A canonical verb, after alias resolution.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Verb {
    /// Move through an exit.
    Go,
    /// Pick up an item.
    Pick,
    /// Use a carried item.
    Use,
    /// Show the full status.
    Look,
    /// List carried items.
    Inventory,
    /// Show help.
    Help,
    /// End the session.
    Quit,
    /// Write a snapshot file.
    Save,
    /// Read a snapshot file.
    Load,
    /// Start over.
    Restart,
}

impl Verb {
    /// Resolve a verb token through the alias table.
    pub fn parse(token: &str) -> Option<Self> {
        let token = token.to_lowercase();
        VERB_ALIASES
            .iter()
            .find(|(alias, _)| *alias == token)
            .map(|(_, verb)| *verb)
    }

    /// The canonical spelling.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Go => "go",
            Self::Pick => "pick",
            Self::Use => "use",
            Self::Look => "look",
            Self::Inventory => "inventory",
            Self::Help => "help",
            Self::Quit => "quit",
            Self::Save => "save",
            Self::Load => "load",
            Self::Restart => "restart",
        }
    }
}

impl fmt::Display for Verb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Verb tokens and the verb each one means.
///
/// Direction abbreviations are not verbs: `n` is only understood
/// as the argument of `go`.
pub const VERB_ALIASES: &[(&str, Verb)] = &[
    ("go", Verb::Go),
    ("move", Verb::Go),
    ("walk", Verb::Go),
    ("pick", Verb::Pick),
    ("take", Verb::Pick),
    ("get", Verb::Pick),
    ("grab", Verb::Pick),
    ("use", Verb::Use),
    ("look", Verb::Look),
    ("l", Verb::Look),
    ("examine", Verb::Look),
    ("inventory", Verb::Inventory),
    ("i", Verb::Inventory),
    ("help", Verb::Help),
    ("quit", Verb::Quit),
    ("exit", Verb::Quit),
    ("save", Verb::Save),
    ("load", Verb::Load),
    ("restart", Verb::Restart),
    ("reset", Verb::Restart),
];

/// A parsed player command.
///
/// Item names stay raw here; the session resolves them against the world's
/// alias index.
#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    /// Blank input.
    Empty,
    /// Move in a direction.
    Move {
        /// The direction to move.
        direction: Direction,
    },
    /// `go` with something that is not a direction.
    UnknownDirection {
        /// What the player typed.
        input: String,
    },
    /// Pick up an item.
    Pick {
        /// The item name as typed.
        item: String,
    },
    /// Use an item.
    Use {
        /// The item name as typed.
        item: String,
    },
    /// Show the full status.
    Look,
    /// List carried items.
    Inventory,
    /// Show help.
    Help,
    /// End the session.
    Quit,
    /// Save the game.
    Save {
        /// Target file, or the configured default.
        path: Option<String>,
    },
    /// Load a saved game.
    Load {
        /// Source file, or the configured default.
        path: Option<String>,
    },
    /// Start a fresh game.
    Restart,
    /// A verb that needs an argument was given none.
    MissingArgument {
        /// The verb.
        verb: Verb,
    },
    /// The verb is not in the alias table.
    Unknown {
        /// The verb token as typed, lowercased.
        verb: String,
        /// The closest known verb, if any is close enough.
        suggestion: Option<&'static str>,
    },
}

/// Parse a player input string into a command.
pub fn parse_command(input: &str) -> Command {
    let input = input.trim();
    if input.is_empty() {
        return Command::Empty;
    }

    let words: Vec<&str> = input.split_whitespace().collect();
    let raw_verb = words[0].to_lowercase();
    let rest = words.get(1..).unwrap_or(&[]);

    let Some(verb) = Verb::parse(&raw_verb) else {
        return Command::Unknown {
            suggestion: suggest_verb(&raw_verb),
            verb: raw_verb,
        };
    };

    match verb {
        Verb::Go => parse_go(rest),
        Verb::Pick => parse_item(verb, rest),
        Verb::Use => parse_item(verb, rest),
        Verb::Look => Command::Look,
        Verb::Inventory => Command::Inventory,
        Verb::Help => Command::Help,
        Verb::Quit => Command::Quit,
        Verb::Save => Command::Save {
            path: parse_path(rest),
        },
        Verb::Load => Command::Load {
            path: parse_path(rest),
        },
        Verb::Restart => Command::Restart,
    }
}

/// Paths keep the player's casing and may contain spaces.
fn parse_path(rest: &[&str]) -> Option<String> {
    if rest.is_empty() {
        None
    } else {
        Some(rest.join(" "))
    }
}

fn parse_go(rest: &[&str]) -> Command {
    let Some(first) = rest.first() else {
        return Command::MissingArgument { verb: Verb::Go };
    };

    match Direction::parse(first) {
        Some(direction) => Command::Move { direction },
        None => Command::UnknownDirection {
            input: first.to_lowercase(),
        },
    }
}

fn parse_item(verb: Verb, rest: &[&str]) -> Command {
    // Skip "up" in "pick up the orb"
    let item_words = match rest {
        [first, tail @ ..] if verb == Verb::Pick && !tail.is_empty() => {
            if first.eq_ignore_ascii_case("up") {
                tail
            } else {
                rest
            }
        }
        _ => rest,
    };

    if item_words.is_empty() {
        return Command::MissingArgument { verb };
    }

    let item = item_words.join(" ").to_lowercase();
    match verb {
        Verb::Use => Command::Use { item },
        _ => Command::Pick { item },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_go_direction() {
        assert_eq!(
            parse_command("go north"),
            Command::Move {
                direction: Direction::North
            }
        );
        assert_eq!(
            parse_command("walk E"),
            Command::Move {
                direction: Direction::East
            }
        );
    }

    #[test]
    fn bare_direction_is_not_a_verb() {
        assert!(matches!(
            parse_command("n"),
            Command::Unknown { ref verb, .. } if verb == "n"
        ));
        assert!(matches!(parse_command("north"), Command::Unknown { .. }));
    }

    #[test]
    fn parse_go_bad_direction() {
        assert_eq!(
            parse_command("go up"),
            Command::UnknownDirection {
                input: "up".to_string()
            }
        );
        assert_eq!(
            parse_command("go"),
            Command::MissingArgument { verb: Verb::Go }
        );
    }

    #[test]
    fn parse_pick_aliases() {
        let expected = Command::Pick {
            item: "fire scroll".to_string(),
        };
        assert_eq!(parse_command("pick fire scroll"), expected);
        assert_eq!(parse_command("TAKE Fire Scroll"), expected);
        assert_eq!(parse_command("grab   fire   scroll"), expected);
        assert_eq!(parse_command("pick up fire scroll"), expected);
        assert_eq!(
            parse_command("get up"),
            Command::Pick {
                item: "up".to_string()
            }
        );
    }

    #[test]
    fn parse_use() {
        assert_eq!(
            parse_command("use tp stone"),
            Command::Use {
                item: "tp stone".to_string()
            }
        );
        assert_eq!(
            parse_command("use"),
            Command::MissingArgument { verb: Verb::Use }
        );
    }

    #[test]
    fn parse_simple_verbs() {
        assert_eq!(parse_command("l"), Command::Look);
        assert_eq!(parse_command("examine"), Command::Look);
        assert_eq!(parse_command("i"), Command::Inventory);
        assert_eq!(parse_command("help"), Command::Help);
        assert_eq!(parse_command("exit"), Command::Quit);
        assert_eq!(parse_command("reset"), Command::Restart);
    }

    #[test]
    fn parse_save_and_load_paths() {
        assert_eq!(parse_command("save"), Command::Save { path: None });
        assert_eq!(
            parse_command("SAVE Slots/Game1.json"),
            Command::Save {
                path: Some("Slots/Game1.json".to_string())
            }
        );
        assert_eq!(
            parse_command("save my game.json"),
            Command::Save {
                path: Some("my game.json".to_string())
            }
        );
        assert_eq!(
            parse_command("load game.json"),
            Command::Load {
                path: Some("game.json".to_string())
            }
        );
    }

    #[test]
    fn parse_unknown_with_suggestion() {
        assert_eq!(
            parse_command("lok"),
            Command::Unknown {
                verb: "lok".to_string(),
                suggestion: Some("look"),
            }
        );
        assert_eq!(
            parse_command("dance wildly"),
            Command::Unknown {
                verb: "dance".to_string(),
                suggestion: None,
            }
        );
    }

    #[test]
    fn empty_input() {
        assert_eq!(parse_command(""), Command::Empty);
        assert_eq!(parse_command("   "), Command::Empty);
    }

    #[test]
    fn verb_lookup() {
        assert_eq!(Verb::parse("Grab"), Some(Verb::Pick));
        assert_eq!(Verb::parse("n"), None);
        assert_eq!(Verb::Restart.to_string(), "restart");
    }
}
