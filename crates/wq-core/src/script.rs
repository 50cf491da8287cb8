use std::fmt;

use tracing::debug;

use crate::entity::{Direction, IceState, ItemId, ItemLocation, RoomId, RoomState};
use crate::narration::Narration;
use crate::world::World;

/// Puzzle behaviour attached to a room at world-build time.
///
/// `on_use` runs when the player uses a carried item in the room; `on_pick`
/// runs after an item has been picked up there. Scripts ignore items they do
/// not know about, narrating that nothing happens.
pub trait RoomScript: fmt::Debug + Send + Sync {
    /// Human-readable name for this script.
    fn name(&self) -> &str;

    /// Resolve using `item` in this room.
    fn on_use(&self, world: &mut World, item: ItemId, out: &mut Narration);

    /// Called after `item` was picked up in this room.
    fn on_pick(&self, _world: &mut World, _item: ItemId, _out: &mut Narration) {}
}

/// The pedestal: the Crystal Orb opens the hidden door east.
#[derive(Debug, Clone, Copy, Default)]
pub struct LibraryScript;

impl RoomScript for LibraryScript {
    fn name(&self) -> &str {
        "library"
    }

    fn on_use(&self, world: &mut World, item: ItemId, out: &mut Narration) {
        if item != ItemId::CrystalOrb {
            out.say("Nothing happens.");
            return;
        }

        let room = world.room_mut(RoomId::Library);
        if room.has_exit(Direction::East) {
            out.say("The hidden door is already open.");
        } else {
            room.connect(Direction::East, RoomId::Altar);
            debug!("library door opened");
            out.say("You place the Crystal Orb on the pedestal. A hidden door opens to the east!");
        }
    }
}

/// The chasm: the Enchanted Rope bridges the way north.
#[derive(Debug, Clone, Copy, Default)]
pub struct AltarScript;

impl RoomScript for AltarScript {
    fn name(&self) -> &str {
        "altar"
    }

    fn on_use(&self, world: &mut World, item: ItemId, out: &mut Narration) {
        if item != ItemId::EnchantedRope {
            out.say("Nothing happens.");
            return;
        }

        let room = world.room_mut(RoomId::Altar);
        if room.has_exit(Direction::North) {
            out.say("The rope bridge is already in place.");
        } else {
            room.connect(Direction::North, RoomId::Chamber);
            debug!("chasm bridged");
            out.say("You lay the rope across the chasm below. The path north is now safe.");
        }
    }
}

/// The pool: fire melts it and reveals the key, ice refreezes it into a bridge.
#[derive(Debug, Clone, Copy, Default)]
pub struct ChamberScript;

impl ChamberScript {
    fn set_ice(world: &mut World, ice: IceState) {
        world.room_mut(RoomId::Chamber).state = RoomState::Chamber { ice };
        debug!(%ice, "pool changed");
    }
}

impl RoomScript for ChamberScript {
    fn name(&self) -> &str {
        "chamber"
    }

    fn on_use(&self, world: &mut World, item: ItemId, out: &mut Narration) {
        let ice = world
            .room(RoomId::Chamber)
            .state
            .ice_state()
            .unwrap_or_default();

        match (item, ice) {
            (ItemId::FireScroll, IceState::Frozen) => {
                Self::set_ice(world, IceState::Melted);
                let key = world.item_mut(ItemId::VaultKey);
                if key.location == ItemLocation::NotPlaced {
                    key.location = ItemLocation::Room(RoomId::Chamber);
                }
                out.say(
                    "You read the Fire Scroll. Flames dance across the pool, melting the ice! \
                     The Vault Key gleams at the bottom.",
                );
            }
            // Once refrozen the pool stays a bridge; it never melts a second time.
            (ItemId::FireScroll, IceState::Melted | IceState::Refrozen) => {
                out.say("The fire crackles, but the pool is already melted.");
            }
            (ItemId::IceWand, IceState::Melted) => {
                Self::set_ice(world, IceState::Refrozen);
                let room = world.room_mut(RoomId::Chamber);
                if !room.has_exit(Direction::East) {
                    room.connect(Direction::East, RoomId::Vault);
                }
                out.say(
                    "You wave the Ice Wand. Frost races across the pool, freezing it solid again. \
                     You can now cross to the east.",
                );
            }
            (ItemId::IceWand, IceState::Frozen) => out.say("The pool is already frozen solid."),
            (ItemId::IceWand, IceState::Refrozen) => out.say("The pool remains safe to cross."),
            _ => out.say("Nothing happens."),
        }
    }

    fn on_pick(&self, _world: &mut World, item: ItemId, out: &mut Narration) {
        if item == ItemId::VaultKey {
            out.say("The key is cold to the touch.");
        }
    }
}

/// The vault door: the Teleportation Stone opens it, but only with the key.
#[derive(Debug, Clone, Copy, Default)]
pub struct VaultScript;

impl RoomScript for VaultScript {
    fn name(&self) -> &str {
        "vault"
    }

    fn on_use(&self, world: &mut World, item: ItemId, out: &mut Narration) {
        if item != ItemId::TeleportationStone {
            out.say("Nothing happens.");
            return;
        }
        if !world.player().has(ItemId::VaultKey) {
            out.say("The stone does nothing without a key.");
            return;
        }
        if world.vault_open() {
            out.say("The vault is already open.");
            return;
        }

        world.room_mut(RoomId::Vault).state = RoomState::Vault { open: true };
        let chamber = world.room_mut(RoomId::Chamber);
        if !chamber.has_exit(Direction::East) {
            chamber.connect(Direction::East, RoomId::Vault);
        }
        debug!("vault opened");
        out.say("You activate the stone. The vault door swings open!");
        out.request_status();
    }
}
