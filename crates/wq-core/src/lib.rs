//! Core types for Wizard's Quest: rooms, items, the player, and the world graph.
//!
//! This crate owns the world state machine. Rooms are linked by directional
//! exits, some of which only appear once a puzzle has been solved. Puzzles are
//! resolved by [`RoomScript`]s attached to rooms when the world is built, and
//! the whole state can be captured as a versioned [`Snapshot`] and restored
//! from one.

/// Normalised text lookup from item names and aliases to item identifiers.
pub mod alias;
/// Room, item, and player records plus their identifiers.
pub mod entity;
/// Error types used throughout the crate.
pub mod error;
/// Buffered narration produced by world operations.
pub mod narration;
/// Per-room puzzle behaviour for using and picking up items.
pub mod script;
/// Versioned save format and its JSON codec.
pub mod snapshot;
/// The world graph and the operations that mutate it.
pub mod world;

/// Re-export the alias index.
pub use alias::AliasIndex;
/// Re-export entity types.
pub use entity::{
    Direction, IceState, Item, ItemId, ItemLocation, Player, Room, RoomId, RoomState,
};
/// Re-export error types.
pub use error::{WqError, WqResult};
/// Re-export narration.
pub use narration::Narration;
/// Re-export the script seam.
pub use script::RoomScript;
/// Re-export snapshot types.
pub use snapshot::{Restored, SNAPSHOT_VERSION, Snapshot};
/// Re-export the world model.
pub use world::World;
