use tracing::debug;

use crate::alias::AliasIndex;
use crate::entity::{
    Direction, IceState, Item, ItemId, ItemLocation, Player, Room, RoomId, RoomState,
};
use crate::narration::Narration;
use crate::script::{AltarScript, ChamberScript, LibraryScript, VaultScript};

/// The whole game state: rooms, items, and the player.
///
/// Rooms and items are created once by [`World::new`] and never removed.
/// Only exits, room state, item locations, and the player change during play.
#[derive(Debug, Clone)]
pub struct World {
    rooms: Vec<Room>,
    items: Vec<Item>,
    player: Player,

    // Derived from `items`
    aliases: AliasIndex,
}

impl World {
    /// Build the tower in its starting state.
    pub fn new() -> Self {
        let mut rooms = vec![
            Room::new(
                RoomId::Entrance,
                "You stand at the grand entrance of the ancient tower.",
            ),
            Room::new(
                RoomId::Library,
                "Dusty books line the walls. A faint glow comes from a pedestal.",
            )
            .with_clue("A crystal orb must be placed on the pedestal to reveal the path east.")
            .with_script(LibraryScript),
            Room::new(
                RoomId::Altar,
                "An altar with runes that pulse softly. A deep chasm blocks the northern path.",
            )
            .with_clue("You need an enchanted rope to cross the chasm below.")
            .with_script(AltarScript),
            Room::new(
                RoomId::Chamber,
                "The chamber contains a frozen pool. Something glitters beneath the ice.",
            )
            .with_clue("Perhaps fire could melt the ice, and cold could make it safe again.")
            .with_state(RoomState::Chamber {
                ice: IceState::Frozen,
            })
            .with_script(ChamberScript),
            Room::new(
                RoomId::Vault,
                "A vault door bars your way. The Gem of Eternity sits on a stone altar inside.",
            )
            .with_clue(
                "You need the teleportation stone (and a key) to open this vault from here.",
            )
            .with_state(RoomState::Vault { open: false })
            .with_script(VaultScript),
        ];

        // Gated exits (Library east, Altar north, Chamber east) are added by puzzles.
        for (from, direction, to) in [
            (RoomId::Entrance, Direction::North, RoomId::Library),
            (RoomId::Library, Direction::South, RoomId::Entrance),
            (RoomId::Altar, Direction::West, RoomId::Library),
            (RoomId::Chamber, Direction::South, RoomId::Altar),
            (RoomId::Vault, Direction::West, RoomId::Chamber),
        ] {
            rooms[from.index()].connect(direction, to);
        }

        let items = vec![
            Item::new(
                ItemId::CrystalOrb,
                ItemLocation::Room(RoomId::Library),
                "Library",
            )
            .with_aliases(&["orb"]),
            Item::new(
                ItemId::EnchantedRope,
                ItemLocation::Room(RoomId::Altar),
                "Chasm",
            )
            .with_aliases(&["rope"]),
            Item::new(
                ItemId::FireScroll,
                ItemLocation::Room(RoomId::Chamber),
                "Ice Pool",
            )
            .with_aliases(&["fire", "scroll"]),
            Item::new(
                ItemId::IceWand,
                ItemLocation::Room(RoomId::Chamber),
                "Ice Pool",
            )
            .with_aliases(&["ice", "wand"]),
            Item::new(
                ItemId::TeleportationStone,
                ItemLocation::Room(RoomId::Entrance),
                "Vault",
            )
            .with_aliases(&["stone", "teleporter", "tp stone"]),
            Item::new(ItemId::VaultKey, ItemLocation::NotPlaced, "Vault").with_aliases(&["key"]),
        ];

        let aliases = AliasIndex::build(&items);

        Self {
            rooms,
            items,
            player: Player::new(RoomId::Entrance),
            aliases,
        }
    }

    // -----------------------------------------------------------------------
    // Accessors
    // -----------------------------------------------------------------------

    /// Get a room.
    pub fn room(&self, id: RoomId) -> &Room {
        &self.rooms[id.index()]
    }

    /// Get a mutable reference to a room.
    pub fn room_mut(&mut self, id: RoomId) -> &mut Room {
        &mut self.rooms[id.index()]
    }

    /// All rooms, in world-build order.
    pub fn rooms(&self) -> impl Iterator<Item = &Room> {
        self.rooms.iter()
    }

    /// Get an item.
    pub fn item(&self, id: ItemId) -> &Item {
        &self.items[id.index()]
    }

    /// Get a mutable reference to an item.
    pub fn item_mut(&mut self, id: ItemId) -> &mut Item {
        &mut self.items[id.index()]
    }

    /// All items, in world-build order.
    pub fn items(&self) -> impl Iterator<Item = &Item> {
        self.items.iter()
    }

    /// Items lying in a room.
    pub fn items_in(&self, room: RoomId) -> impl Iterator<Item = &Item> {
        self.items
            .iter()
            .filter(move |item| item.location == ItemLocation::Room(room))
    }

    /// The player.
    pub fn player(&self) -> &Player {
        &self.player
    }

    /// Get a mutable reference to the player.
    pub fn player_mut(&mut self) -> &mut Player {
        &mut self.player
    }

    /// The room the player is standing in.
    pub fn current_room(&self) -> &Room {
        self.room(self.player.room)
    }

    /// Resolve player-typed text to an item via names and aliases.
    pub fn resolve_item(&self, input: &str) -> Option<ItemId> {
        self.aliases.resolve(input)
    }

    /// Whether the vault door has been opened.
    pub fn vault_open(&self) -> bool {
        self.room(RoomId::Vault).state.is_open().unwrap_or(false)
    }

    // -----------------------------------------------------------------------
    // Operations
    // -----------------------------------------------------------------------

    /// Move the player through an exit of the current room.
    ///
    /// A missing exit is narrated and changes nothing. A successful move asks
    /// for a status render.
    pub fn move_player(&mut self, direction: Direction) -> Narration {
        match self.current_room().exit(direction) {
            Some(destination) => {
                debug!(from = %self.player.room, to = %destination, "player moved");
                self.player.room = destination;
                let mut narration = Narration::new();
                narration.request_status();
                narration
            }
            None => Narration::line("You can't go that way."),
        }
    }

    /// Pick up an item lying in the current room, then run the room's pick hook.
    pub fn pick(&mut self, item: ItemId) -> Narration {
        let here = self.player.room;
        if self.item(item).location != ItemLocation::Room(here) {
            return Narration::line(format!("There is no {item} here."));
        }
        if self.player.has(item) {
            return Narration::line(format!("You already have the {item}."));
        }

        self.item_mut(item).location = ItemLocation::Inventory;
        self.player.add(item);
        debug!(%item, room = %here, "item picked up");

        let mut narration = Narration::line(format!("You picked up the {item}."));
        if let Some(script) = self.room(here).script() {
            script.on_pick(self, item, &mut narration);
        }
        narration
    }

    /// Use a carried item in the current room.
    ///
    /// What happens is decided by the room's script; rooms without one
    /// narrate that nothing happens.
    pub fn use_item(&mut self, item: ItemId) -> Narration {
        if !self.player.has(item) {
            return Narration::line(format!("You don't have a {item}."));
        }

        let here = self.player.room;
        let mut narration = Narration::new();
        match self.room(here).script() {
            Some(script) => {
                debug!(%item, room = %here, script = script.name(), "resolving use");
                script.on_use(self, item, &mut narration);
            }
            None => narration.say("Nothing happens."),
        }
        narration
    }

    // -----------------------------------------------------------------------
    // Restore
    // -----------------------------------------------------------------------

    pub(crate) fn replace_player(&mut self, player: Player) {
        self.player = player;
    }
}

impl Default for World {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn world_at(room: RoomId) -> World {
        let mut world = World::new();
        world.player_mut().room = room;
        world
    }

    fn give(world: &mut World, item: ItemId) {
        world.item_mut(item).location = ItemLocation::Inventory;
        world.player_mut().add(item);
    }

    #[test]
    fn fresh_world_layout() {
        let world = World::new();
        assert_eq!(world.player().room, RoomId::Entrance);
        assert!(world.player().inventory().is_empty());
        assert_eq!(world.rooms().count(), 5);
        assert_eq!(world.items().count(), 6);
        assert_eq!(world.item(ItemId::VaultKey).location, ItemLocation::NotPlaced);
        assert!(!world.room(RoomId::Library).has_exit(Direction::East));
        assert!(!world.room(RoomId::Altar).has_exit(Direction::North));
        assert!(!world.room(RoomId::Chamber).has_exit(Direction::East));
        assert!(!world.vault_open());
    }

    #[test]
    fn move_through_exit() {
        let mut world = World::new();
        let narration = world.move_player(Direction::North);
        assert!(narration.wants_status());
        assert_eq!(world.player().room, RoomId::Library);
    }

    #[test]
    fn move_into_wall() {
        let mut world = World::new();
        let narration = world.move_player(Direction::East);
        assert!(narration.contains("You can't go that way."));
        assert!(!narration.wants_status());
        assert_eq!(world.player().room, RoomId::Entrance);
    }

    #[test]
    fn pick_item_here() {
        let mut world = World::new();
        let narration = world.pick(ItemId::TeleportationStone);
        assert!(narration.contains("You picked up the Teleportation Stone."));
        assert_eq!(world.player().inventory(), &[ItemId::TeleportationStone]);
        assert_eq!(
            world.item(ItemId::TeleportationStone).location,
            ItemLocation::Inventory
        );
    }

    #[test]
    fn pick_item_elsewhere() {
        let mut world = World::new();
        let narration = world.pick(ItemId::CrystalOrb);
        assert!(narration.contains("There is no Crystal Orb here."));
        assert!(world.player().inventory().is_empty());
        assert_eq!(
            world.item(ItemId::CrystalOrb).location,
            ItemLocation::Room(RoomId::Library)
        );
    }

    #[test]
    fn pick_twice() {
        let mut world = World::new();
        world.pick(ItemId::TeleportationStone);
        let narration = world.pick(ItemId::TeleportationStone);
        assert!(narration.contains("There is no Teleportation Stone here."));
        assert_eq!(world.player().inventory().len(), 1);
    }

    #[test]
    fn pick_unplaced_key() {
        let mut world = world_at(RoomId::Chamber);
        let narration = world.pick(ItemId::VaultKey);
        assert!(narration.contains("There is no Vault Key here."));
        assert!(!world.player().has(ItemId::VaultKey));
    }

    #[test]
    fn use_without_holding() {
        let mut world = world_at(RoomId::Library);
        let narration = world.use_item(ItemId::CrystalOrb);
        assert!(narration.contains("You don't have a Crystal Orb."));
        assert!(!world.room(RoomId::Library).has_exit(Direction::East));
    }

    #[test]
    fn use_in_room_without_script() {
        let mut world = World::new();
        give(&mut world, ItemId::TeleportationStone);
        let narration = world.use_item(ItemId::TeleportationStone);
        assert_eq!(narration.lines(), &["Nothing happens."]);
    }

    #[test]
    fn resolve_aliases() {
        let world = World::new();
        assert_eq!(world.resolve_item("tp stone"), Some(ItemId::TeleportationStone));
        assert_eq!(world.resolve_item("Fire"), Some(ItemId::FireScroll));
        assert_eq!(world.resolve_item("wand"), Some(ItemId::IceWand));
        assert_eq!(world.resolve_item("gem"), None);
    }

    fn room_strategy() -> impl Strategy<Value = RoomId> {
        prop::sample::select(RoomId::ALL.to_vec())
    }

    fn direction_strategy() -> impl Strategy<Value = Direction> {
        prop::sample::select(Direction::ALL.to_vec())
    }

    proptest! {
        #[test]
        fn blocked_moves_change_nothing(room in room_strategy(), direction in direction_strategy()) {
            let mut world = world_at(room);
            prop_assume!(!world.room(room).has_exit(direction));

            let narration = world.move_player(direction);
            prop_assert_eq!(world.player().room, room);
            prop_assert!(narration.contains("You can't go that way."));
            prop_assert!(!narration.wants_status());
        }

        #[test]
        fn picking_elsewhere_changes_nothing(room in room_strategy(), index in 0usize..ItemId::ALL.len()) {
            let item = ItemId::ALL[index];
            let mut world = world_at(room);
            let before = world.item(item).location;
            prop_assume!(before != ItemLocation::Room(room));

            world.pick(item);
            prop_assert!(world.player().inventory().is_empty());
            prop_assert_eq!(world.item(item).location, before);
        }
    }
}
