use std::collections::BTreeMap;
use std::fmt;
use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::script::RoomScript;

/// A compass direction an exit can point in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Direction {
    /// North.
    North,
    /// South.
    South,
    /// East.
    East,
    /// West.
    West,
}

impl Direction {
    /// All directions, in display order.
    pub const ALL: [Direction; 4] = [Self::North, Self::South, Self::East, Self::West];

    /// Parse a direction from a full word or its one-letter abbreviation.
    pub fn parse(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "n" | "north" => Some(Self::North),
            "s" | "south" => Some(Self::South),
            "e" | "east" => Some(Self::East),
            "w" | "west" => Some(Self::West),
            _ => None,
        }
    }

    /// Match a direction by its exact lowercase name, as written in saves.
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|d| d.name() == name)
    }

    /// Get the display name for this direction.
    pub fn name(&self) -> &'static str {
        match self {
            Self::North => "north",
            Self::South => "south",
            Self::East => "east",
            Self::West => "west",
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Identifier of one of the fixed rooms of the tower.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum RoomId {
    /// Where every adventure begins.
    Entrance,
    /// The pedestal room that hides the way east.
    Library,
    /// The rune altar at the edge of the chasm.
    Altar,
    /// The room with the frozen pool.
    Chamber,
    /// The sealed vault holding the Gem of Eternity.
    Vault,
}

impl RoomId {
    /// All rooms, in world-build order.
    pub const ALL: [RoomId; 5] = [
        Self::Entrance,
        Self::Library,
        Self::Altar,
        Self::Chamber,
        Self::Vault,
    ];

    /// The room's unique name.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Entrance => "Entrance",
            Self::Library => "Library",
            Self::Altar => "Altar",
            Self::Chamber => "Chamber",
            Self::Vault => "Vault",
        }
    }

    /// Look a room up by its exact name.
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|id| id.name() == name)
    }

    pub(crate) fn index(self) -> usize {
        self as usize
    }
}

impl fmt::Display for RoomId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Identifier of one of the fixed items of the tower.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum ItemId {
    /// Opens the hidden door in the Library.
    CrystalOrb,
    /// Bridges the chasm at the Altar.
    EnchantedRope,
    /// Melts the pool in the Chamber.
    FireScroll,
    /// Refreezes the pool in the Chamber.
    IceWand,
    /// Opens the vault, given the key.
    TeleportationStone,
    /// Lies under the ice until the pool melts.
    VaultKey,
}

impl ItemId {
    /// All items, in world-build order.
    pub const ALL: [ItemId; 6] = [
        Self::CrystalOrb,
        Self::EnchantedRope,
        Self::FireScroll,
        Self::IceWand,
        Self::TeleportationStone,
        Self::VaultKey,
    ];

    /// The item's canonical name.
    pub fn name(&self) -> &'static str {
        match self {
            Self::CrystalOrb => "Crystal Orb",
            Self::EnchantedRope => "Enchanted Rope",
            Self::FireScroll => "Fire Scroll",
            Self::IceWand => "Ice Wand",
            Self::TeleportationStone => "Teleportation Stone",
            Self::VaultKey => "Vault Key",
        }
    }

    /// Look an item up by its exact canonical name.
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|id| id.name() == name)
    }

    pub(crate) fn index(self) -> usize {
        self as usize
    }
}

impl fmt::Display for ItemId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Where an item currently is.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ItemLocation {
    /// Lying in a room.
    Room(RoomId),
    /// Carried by the player.
    Inventory,
    /// Not in the world yet; a puzzle reveals it later.
    NotPlaced,
}

impl ItemLocation {
    /// The marker used for carried items in saved games.
    pub const INVENTORY: &'static str = "inventory";

    /// Encode the location the way saved games store it.
    pub fn to_label(self) -> Option<String> {
        match self {
            Self::Room(room) => Some(room.name().to_string()),
            Self::Inventory => Some(Self::INVENTORY.to_string()),
            Self::NotPlaced => None,
        }
    }

    /// Decode a saved location, rejecting anything that is not a room name or
    /// the inventory marker.
    pub fn from_label(label: Option<&str>) -> Option<Self> {
        match label {
            None => Some(Self::NotPlaced),
            Some(Self::INVENTORY) => Some(Self::Inventory),
            Some(name) => RoomId::from_name(name).map(Self::Room),
        }
    }
}

/// The Chamber pool's puzzle state. Only moves forward: frozen, melted, refrozen.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum IceState {
    /// Solid ice with something glittering underneath.
    #[default]
    Frozen,
    /// Deep water; the key can be fished out.
    Melted,
    /// A bridge of ice leading east.
    Refrozen,
}

impl fmt::Display for IceState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Frozen => write!(f, "frozen"),
            Self::Melted => write!(f, "melted"),
            Self::Refrozen => write!(f, "refrozen"),
        }
    }
}

/// Room-local puzzle state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RoomState {
    /// The room has no state of its own.
    #[default]
    Plain,
    /// The Chamber's pool.
    Chamber {
        /// Current state of the ice.
        ice: IceState,
    },
    /// The Vault's door. Once open it never closes again.
    Vault {
        /// Whether the door has been opened.
        open: bool,
    },
}

impl RoomState {
    /// The pool's ice state, if this room has a pool.
    pub fn ice_state(&self) -> Option<IceState> {
        match self {
            Self::Chamber { ice } => Some(*ice),
            _ => None,
        }
    }

    /// Whether the vault door is open, if this room has one.
    pub fn is_open(&self) -> Option<bool> {
        match self {
            Self::Vault { open } => Some(*open),
            _ => None,
        }
    }
}

/// A room in the tower.
#[derive(Clone)]
pub struct Room {
    /// The room's identifier.
    pub id: RoomId,
    /// Static description shown on every status render.
    pub description: String,
    /// Optional hint shown below the description.
    pub clue: Option<String>,
    /// Room-local puzzle state.
    pub state: RoomState,
    exits: BTreeMap<Direction, RoomId>,
    script: Option<Arc<dyn RoomScript>>,
}

impl Room {
    /// Create a room with no exits, no clue, and no script.
    pub fn new(id: RoomId, description: impl Into<String>) -> Self {
        Self {
            id,
            description: description.into(),
            clue: None,
            state: RoomState::Plain,
            exits: BTreeMap::new(),
            script: None,
        }
    }

    /// Set the clue.
    pub fn with_clue(mut self, clue: impl Into<String>) -> Self {
        self.clue = Some(clue.into());
        self
    }

    /// Set the initial room state.
    pub fn with_state(mut self, state: RoomState) -> Self {
        self.state = state;
        self
    }

    /// Attach the script that resolves `use` and `pick` in this room.
    pub fn with_script(mut self, script: impl RoomScript + 'static) -> Self {
        self.script = Some(Arc::new(script));
        self
    }

    /// The room's name.
    pub fn name(&self) -> &'static str {
        self.id.name()
    }

    /// Add a directional exit. Exits are never removed.
    pub fn connect(&mut self, direction: Direction, to: RoomId) {
        self.exits.insert(direction, to);
    }

    /// Check whether an exit leads in the given direction.
    pub fn has_exit(&self, direction: Direction) -> bool {
        self.exits.contains_key(&direction)
    }

    /// The room an exit leads to.
    pub fn exit(&self, direction: Direction) -> Option<RoomId> {
        self.exits.get(&direction).copied()
    }

    /// All exits, ordered north, south, east, west.
    pub fn exits(&self) -> impl Iterator<Item = (Direction, RoomId)> + '_ {
        self.exits.iter().map(|(d, r)| (*d, *r))
    }

    /// The script attached to this room, if any.
    pub fn script(&self) -> Option<Arc<dyn RoomScript>> {
        self.script.clone()
    }
}

impl fmt::Debug for Room {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Room")
            .field("id", &self.id)
            .field("state", &self.state)
            .field("exits", &self.exits)
            .field("script", &self.script.as_ref().map(|s| s.name()))
            .finish()
    }
}

/// An item that can be picked up and used.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Item {
    /// The item's identifier.
    pub id: ItemId,
    /// Where the item currently is.
    pub location: ItemLocation,
    /// Where the item is meant to be used. Informational only.
    pub used_in: String,
    /// Extra names the player may type for this item.
    pub aliases: Vec<String>,
}

impl Item {
    /// Create an item at the given location.
    pub fn new(id: ItemId, location: ItemLocation, used_in: impl Into<String>) -> Self {
        Self {
            id,
            location,
            used_in: used_in.into(),
            aliases: Vec::new(),
        }
    }

    /// Add aliases.
    pub fn with_aliases(mut self, aliases: &[&str]) -> Self {
        self.aliases
            .extend(aliases.iter().map(|alias| alias.to_string()));
        self
    }

    /// The item's canonical name.
    pub fn name(&self) -> &'static str {
        self.id.name()
    }
}

/// The player's position and belongings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Player {
    /// The room the player is standing in.
    pub room: RoomId,
    inventory: Vec<ItemId>,
}

impl Player {
    /// Create a player in the given room with empty hands.
    pub fn new(room: RoomId) -> Self {
        Self {
            room,
            inventory: Vec::new(),
        }
    }

    /// Items carried, in the order they were picked up.
    pub fn inventory(&self) -> &[ItemId] {
        &self.inventory
    }

    /// Check if the player has an item.
    pub fn has(&self, item: ItemId) -> bool {
        self.inventory.contains(&item)
    }

    /// Add an item to inventory. Returns false if it was already there.
    pub fn add(&mut self, item: ItemId) -> bool {
        if self.inventory.contains(&item) {
            return false;
        }
        self.inventory.push(item);
        true
    }

    /// Comma-separated inventory, or `empty`.
    pub fn inventory_line(&self) -> String {
        if self.inventory.is_empty() {
            return "empty".to_string();
        }
        self.inventory
            .iter()
            .map(|item| item.name())
            .collect::<Vec<_>>()
            .join(", ")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn direction_aliases() {
        assert_eq!(Direction::parse("n"), Some(Direction::North));
        assert_eq!(Direction::parse("West"), Some(Direction::West));
        assert_eq!(Direction::parse("up"), None);
        assert_eq!(Direction::parse("northeast"), None);

        assert_eq!(Direction::from_name("east"), Some(Direction::East));
        assert_eq!(Direction::from_name("e"), None);
        assert_eq!(Direction::from_name("East"), None);
    }

    #[test]
    fn names_round_trip() {
        for id in RoomId::ALL {
            assert_eq!(RoomId::from_name(id.name()), Some(id));
        }
        for id in ItemId::ALL {
            assert_eq!(ItemId::from_name(id.name()), Some(id));
        }
        assert_eq!(RoomId::from_name("library"), None);
    }

    #[test]
    fn location_labels() {
        assert_eq!(ItemLocation::from_label(None), Some(ItemLocation::NotPlaced));
        assert_eq!(
            ItemLocation::from_label(Some("inventory")),
            Some(ItemLocation::Inventory)
        );
        assert_eq!(
            ItemLocation::from_label(Some("Chamber")),
            Some(ItemLocation::Room(RoomId::Chamber))
        );
        assert_eq!(ItemLocation::from_label(Some("the moon")), None);
        assert_eq!(
            ItemLocation::Room(RoomId::Vault).to_label(),
            Some("Vault".to_string())
        );
    }

    #[test]
    fn inventory_management() {
        let mut player = Player::new(RoomId::Entrance);
        assert_eq!(player.inventory_line(), "empty");

        assert!(player.add(ItemId::TeleportationStone));
        assert!(player.add(ItemId::CrystalOrb));

        // Adding again should not duplicate
        assert!(!player.add(ItemId::TeleportationStone));
        assert_eq!(
            player.inventory(),
            &[ItemId::TeleportationStone, ItemId::CrystalOrb]
        );
        assert_eq!(player.inventory_line(), "Teleportation Stone, Crystal Orb");
    }

    #[test]
    fn exits_only_grow() {
        let mut room = Room::new(RoomId::Library, "Books.");
        assert!(!room.has_exit(Direction::East));
        room.connect(Direction::East, RoomId::Altar);
        room.connect(Direction::South, RoomId::Entrance);
        assert_eq!(room.exit(Direction::East), Some(RoomId::Altar));

        let order: Vec<_> = room.exits().map(|(d, _)| d).collect();
        assert_eq!(order, vec![Direction::South, Direction::East]);
    }

    #[test]
    fn room_state_accessors() {
        let chamber = RoomState::Chamber {
            ice: IceState::Melted,
        };
        assert_eq!(chamber.ice_state(), Some(IceState::Melted));
        assert_eq!(chamber.is_open(), None);
        assert_eq!(RoomState::Vault { open: true }.is_open(), Some(true));
        assert_eq!(RoomState::Plain.ice_state(), None);
    }
}
