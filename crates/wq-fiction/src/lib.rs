//! Command interpreter and game session for Wizard's Quest.
//!
//! Turns one line of player input into one buffered block of narration.
//! Verbs and directions go through fixed alias tables, unknown verbs get a
//! fuzzy "did you mean" suggestion, and item names resolve through the
//! world's alias index. A [`GameSession`] owns exactly one world and reports
//! when the adventure has ended, either by victory or by quitting.

/// Session configuration.
pub mod config;
/// Error types for file-level persistence.
pub mod error;
/// Command parsing and verb suggestion.
pub mod parser;
/// Reading and writing snapshot files.
pub mod persist;
/// Interactive session management.
pub mod session;
/// Full status rendering.
pub mod status;

pub use config::SessionConfig;
pub use error::{FictionError, FictionResult};
pub use parser::{Command, Verb, parse_command};
pub use session::{EndReason, GameSession, Response, SessionStatus};
