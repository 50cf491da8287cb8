use std::fs;
use std::path::Path;

use colored::Colorize;
use comfy_table::{ContentArrangement, Table};

use wq_core::snapshot::decode;
use wq_core::{ItemLocation, RoomState};

pub fn run(path: &Path) -> Result<(), String> {
    let text =
        fs::read_to_string(path).map_err(|e| format!("cannot read {}: {e}", path.display()))?;
    let restored = decode(&text).map_err(|e| format!("{}: {e}", path.display()))?;
    let world = &restored.world;

    println!(
        "  {} [{}]",
        path.display().to_string().bold(),
        format!("version {}", restored.version).dimmed()
    );
    for warning in &restored.warnings {
        println!("  {}", format!("warning: {warning}").yellow());
    }
    println!();

    println!("  room:       {}", world.player().room);
    println!("  inventory:  {}", world.player().inventory_line());
    println!();

    let mut items = Table::new();
    items.set_content_arrangement(ContentArrangement::Dynamic);
    items.set_header(vec!["Item", "Location"]);
    for item in world.items() {
        let location = match item.location {
            ItemLocation::Room(room) => room.name().to_string(),
            ItemLocation::Inventory => "inventory".to_string(),
            ItemLocation::NotPlaced => "(hidden)".to_string(),
        };
        items.add_row(vec![item.name().to_string(), location]);
    }
    println!("{items}");
    println!();

    let mut rooms = Table::new();
    rooms.set_content_arrangement(ContentArrangement::Dynamic);
    rooms.set_header(vec!["Room", "Exits", "State"]);
    for room in world.rooms() {
        let exits = room
            .exits()
            .map(|(direction, to)| format!("{direction} -> {to}"))
            .collect::<Vec<_>>()
            .join(", ");
        let state = match room.state {
            RoomState::Plain => "-".to_string(),
            RoomState::Chamber { ice } => format!("pool {ice}"),
            RoomState::Vault { open: true } => "open".to_string(),
            RoomState::Vault { open: false } => "closed".to_string(),
        };
        rooms.add_row(vec![room.name().to_string(), exits, state]);
    }
    println!("{rooms}");

    Ok(())
}
