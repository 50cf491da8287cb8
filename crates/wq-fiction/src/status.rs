use wq_core::{IceState, ItemId, ItemLocation, RoomId, RoomState, World};

const RULE: &str = "---";

/// A rendered status block.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatusReport {
    /// Lines of the block, delimiters included.
    pub lines: Vec<String>,
    /// The player stands in the open vault.
    pub victory: bool,
}

/// Render the full status of the player's current room.
///
/// Standing in the open vault renders the victory lines and stops there;
/// the caller ends the session.
pub fn render_status(world: &World) -> StatusReport {
    let room = world.current_room();
    let mut lines = vec![
        RULE.to_string(),
        format!("You are in the {}.", room.name()),
        room.description.clone(),
    ];
    if let Some(clue) = &room.clue {
        lines.push(format!("Clue: {clue}"));
    }

    match room.state {
        RoomState::Chamber { ice } => match ice {
            IceState::Frozen => {
                lines.push("The pool is frozen solid. Something glitters under the ice.".into());
            }
            IceState::Melted => {
                lines.push("The pool has melted. The water is too deep to cross.".into());
                if world.item(ItemId::VaultKey).location == ItemLocation::Room(RoomId::Chamber) {
                    lines.push("You see the Vault Key gleaming in the water.".into());
                }
            }
            IceState::Refrozen => lines.push(
                "The pool has been refrozen into a bridge of ice. You can cross east to the Vault."
                    .into(),
            ),
        },
        RoomState::Vault { open: true } => {
            lines.push("The Gem of Eternity glows on the altar!".into());
            lines.push(
                "Congratulations! You have reached the Gem of Eternity and won the game!".into(),
            );
            lines.push(RULE.to_string());
            return StatusReport {
                lines,
                victory: true,
            };
        }
        RoomState::Vault { open: false } => {
            lines.push("The vault door is shut. Perhaps a special stone could open it...".into());
        }
        RoomState::Plain => {}
    }

    for item in world.items_in(room.id) {
        lines.push(format!("You see a {} here.", item.name()));
    }

    let exits: Vec<&str> = room.exits().map(|(direction, _)| direction.name()).collect();
    if exits.is_empty() {
        lines.push("Exits: none".into());
    } else {
        lines.push(format!("Exits: {}", exits.join(", ")));
    }

    lines.push(String::new());
    lines.push(format!("Inventory: {}", world.player().inventory_line()));
    lines.push(RULE.to_string());

    StatusReport {
        lines,
        victory: false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn has(report: &StatusReport, needle: &str) -> bool {
        report.lines.iter().any(|line| line.contains(needle))
    }

    #[test]
    fn entrance_status() {
        let world = World::new();
        let report = render_status(&world);
        assert!(!report.victory);
        assert_eq!(report.lines.first().map(String::as_str), Some("---"));
        assert_eq!(report.lines.last().map(String::as_str), Some("---"));
        assert!(has(&report, "You are in the Entrance."));
        assert!(has(&report, "You see a Teleportation Stone here."));
        assert!(has(&report, "Exits: north"));
        assert!(has(&report, "Inventory: empty"));
        assert!(!has(&report, "Clue:"));
    }

    #[test]
    fn chamber_lines_follow_ice_state() {
        let mut world = World::new();
        world.player_mut().room = RoomId::Chamber;
        let report = render_status(&world);
        assert!(has(&report, "Clue: Perhaps fire could melt the ice"));
        assert!(has(&report, "The pool is frozen solid."));

        world.room_mut(RoomId::Chamber).state = RoomState::Chamber {
            ice: IceState::Melted,
        };
        world.item_mut(ItemId::VaultKey).location = ItemLocation::Room(RoomId::Chamber);
        let report = render_status(&world);
        assert!(has(&report, "The water is too deep to cross."));
        assert!(has(&report, "You see the Vault Key gleaming in the water."));

        world.room_mut(RoomId::Chamber).state = RoomState::Chamber {
            ice: IceState::Refrozen,
        };
        let report = render_status(&world);
        assert!(has(&report, "You can cross east to the Vault."));
    }

    #[test]
    fn closed_vault() {
        let mut world = World::new();
        world.player_mut().room = RoomId::Vault;
        let report = render_status(&world);
        assert!(!report.victory);
        assert!(has(&report, "The vault door is shut."));
    }

    #[test]
    fn open_vault_is_victory() {
        let mut world = World::new();
        world.player_mut().room = RoomId::Vault;
        world.room_mut(RoomId::Vault).state = RoomState::Vault { open: true };
        let report = render_status(&world);
        assert!(report.victory);
        assert!(has(&report, "The Gem of Eternity glows on the altar!"));
        assert!(has(&report, "won the game!"));
        assert!(!has(&report, "Inventory:"));
    }
}
