//! Versioned save format.
//!
//! A snapshot records everything that can change during play: the player's
//! room and inventory, every item's location, and every room's exits and
//! state. Restoring always starts from a freshly built [`World`], so room
//! scripts are wired exactly as in a new game, and then overlays the saved
//! values. Decoding either yields a complete world or fails without touching
//! anything the caller holds.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::entity::{Direction, IceState, ItemId, ItemLocation, Player, RoomId, RoomState};
use crate::error::{WqError, WqResult};
use crate::world::World;

/// The snapshot version written by this build.
pub const SNAPSHOT_VERSION: i64 = 1;

fn default_version() -> i64 {
    SNAPSHOT_VERSION
}

/// The serialised form of a whole game.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Snapshot {
    /// Format version.
    #[serde(default = "default_version")]
    pub version: i64,
    /// Player position and inventory.
    pub player: PlayerSnapshot,
    /// Item name to saved location.
    #[serde(default)]
    pub items: BTreeMap<String, ItemSnapshot>,
    /// Room name to saved exits and state.
    #[serde(default)]
    pub rooms: BTreeMap<String, RoomSnapshot>,
}

/// Saved player state.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlayerSnapshot {
    /// Name of the room the player is in.
    pub room: String,
    /// Carried item names, in pick order.
    #[serde(default)]
    pub inventory: Vec<String>,
}

/// Saved item state.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ItemSnapshot {
    /// A room name, `"inventory"`, or `null` when not placed yet.
    #[serde(default)]
    pub location: Option<String>,
}

/// Saved room state.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct RoomSnapshot {
    /// Direction name to destination room name.
    #[serde(default)]
    pub exits: BTreeMap<String, String>,
    /// Room-local puzzle state.
    #[serde(default)]
    pub state: StateSnapshot,
}

/// Saved room-local state. Only the keys a room actually has are written.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct StateSnapshot {
    /// The Chamber's pool.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ice_state: Option<IceState>,
    /// The Vault's door.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub open: Option<Flag>,
}

/// A boolean that older saves may have written as `"true"`/`"false"`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Flag {
    /// A JSON boolean.
    Bool(bool),
    /// A legacy string flag.
    Text(String),
}

impl Flag {
    fn as_bool(&self) -> WqResult<bool> {
        match self {
            Self::Bool(b) => Ok(*b),
            Self::Text(s) if s.eq_ignore_ascii_case("true") => Ok(true),
            Self::Text(s) if s.eq_ignore_ascii_case("false") => Ok(false),
            Self::Text(s) => Err(WqError::InvalidSnapshot(format!(
                "vault flag must be true or false, got \"{s}\""
            ))),
        }
    }
}

/// A world rebuilt from a snapshot, plus anything that had to be skipped.
#[derive(Debug, Clone)]
pub struct Restored {
    /// The rebuilt world.
    pub world: World,
    /// Version found in the snapshot.
    pub version: i64,
    /// Human-readable notes about entries that were ignored.
    pub warnings: Vec<String>,
}

impl World {
    /// Capture the current state.
    pub fn to_snapshot(&self) -> Snapshot {
        let player = PlayerSnapshot {
            room: self.player().room.name().to_string(),
            inventory: self
                .player()
                .inventory()
                .iter()
                .map(|item| item.name().to_string())
                .collect(),
        };

        let items = self
            .items()
            .map(|item| {
                (
                    item.name().to_string(),
                    ItemSnapshot {
                        location: item.location.to_label(),
                    },
                )
            })
            .collect();

        let rooms = self
            .rooms()
            .map(|room| {
                let exits = room
                    .exits()
                    .map(|(d, to)| (d.name().to_string(), to.name().to_string()))
                    .collect();
                let state = match room.state {
                    RoomState::Plain => StateSnapshot::default(),
                    RoomState::Chamber { ice } => StateSnapshot {
                        ice_state: Some(ice),
                        open: None,
                    },
                    RoomState::Vault { open } => StateSnapshot {
                        ice_state: None,
                        open: Some(Flag::Bool(open)),
                    },
                };
                (room.name().to_string(), RoomSnapshot { exits, state })
            })
            .collect();

        Snapshot {
            version: SNAPSHOT_VERSION,
            player,
            items,
            rooms,
        }
    }

    /// Rebuild a world from a snapshot.
    ///
    /// Unknown item and room names are skipped with a warning, as is an
    /// unrecognised version. Values that would break the world's invariants
    /// (an unknown player room, an invalid item location, an exit to nowhere)
    /// fail the whole restore. Where the carried list and the item locations
    /// disagree, the item ends up carried and a warning is recorded.
    pub fn from_snapshot(snapshot: &Snapshot) -> WqResult<Restored> {
        let mut world = World::new();
        let mut warnings = Vec::new();

        if snapshot.version != SNAPSHOT_VERSION {
            let msg = format!(
                "save version {} not recognized by loader v{SNAPSHOT_VERSION}; attempting best-effort load",
                snapshot.version
            );
            warnings.push(msg);
        }

        // Player
        let room = RoomId::from_name(&snapshot.player.room)
            .ok_or_else(|| WqError::UnknownRoom(snapshot.player.room.clone()))?;
        let mut player = Player::new(room);
        for name in &snapshot.player.inventory {
            match ItemId::from_name(name) {
                Some(item) => {
                    if !player.add(item) {
                        debug!(%item, "duplicate inventory entry collapsed");
                    }
                }
                None => warnings.push(format!("ignored unknown inventory item \"{name}\"")),
            }
        }
        world.replace_player(player);

        // Items
        for (name, saved) in &snapshot.items {
            let Some(item) = ItemId::from_name(name) else {
                warnings.push(format!("ignored unknown item \"{name}\""));
                continue;
            };
            let location = ItemLocation::from_label(saved.location.as_deref()).ok_or_else(|| {
                WqError::InvalidLocation(saved.location.clone().unwrap_or_default())
            })?;
            world.item_mut(item).location = location;
        }

        // The held list and item locations must agree
        for item in ItemId::ALL {
            let held = world.player().has(item);
            let location = world.item(item).location;
            if held && location != ItemLocation::Inventory {
                warnings.push(format!(
                    "\"{item}\" is carried but saved elsewhere; moved to inventory"
                ));
                world.item_mut(item).location = ItemLocation::Inventory;
            } else if !held && location == ItemLocation::Inventory {
                warnings.push(format!(
                    "\"{item}\" is saved in inventory but not carried; added to inventory"
                ));
                world.player_mut().add(item);
            }
        }

        // Rooms
        for (name, saved) in &snapshot.rooms {
            let Some(id) = RoomId::from_name(name) else {
                warnings.push(format!("ignored unknown room \"{name}\""));
                continue;
            };

            let mut exits = Vec::with_capacity(saved.exits.len());
            for (direction, to) in &saved.exits {
                let direction = Direction::from_name(direction)
                    .ok_or_else(|| WqError::UnknownDirection(direction.clone()))?;
                let to = RoomId::from_name(to).ok_or_else(|| WqError::UnknownRoom(to.clone()))?;
                exits.push((direction, to));
            }

            let state = restore_state(world.room(id).state, &saved.state)?;

            let room = world.room_mut(id);
            for (direction, to) in exits {
                room.connect(direction, to);
            }
            room.state = state;
        }

        for msg in &warnings {
            warn!("{msg}");
        }

        Ok(Restored {
            world,
            version: snapshot.version,
            warnings,
        })
    }
}

/// Overlay saved state keys onto a room's fresh state. Keys the room does
/// not have are ignored.
fn restore_state(fresh: RoomState, saved: &StateSnapshot) -> WqResult<RoomState> {
    Ok(match fresh {
        RoomState::Plain => RoomState::Plain,
        RoomState::Chamber { ice } => RoomState::Chamber {
            ice: saved.ice_state.unwrap_or(ice),
        },
        RoomState::Vault { open } => RoomState::Vault {
            open: match &saved.open {
                Some(flag) => flag.as_bool()?,
                None => open,
            },
        },
    })
}

/// Encode a world as pretty-printed snapshot JSON.
pub fn encode(world: &World) -> WqResult<String> {
    Ok(serde_json::to_string_pretty(&world.to_snapshot())?)
}

/// Parse snapshot JSON without restoring it.
pub fn parse(text: &str) -> WqResult<Snapshot> {
    Ok(serde_json::from_str(text)?)
}

/// Decode snapshot JSON into a fresh world.
pub fn decode(text: &str) -> WqResult<Restored> {
    World::from_snapshot(&parse(text)?)
}
