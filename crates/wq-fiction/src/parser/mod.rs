//! Command parsing and verb suggestion.

mod command;
mod resolver;

pub use command::{Command, VERB_ALIASES, Verb, parse_command};
pub use resolver::suggest_verb;
