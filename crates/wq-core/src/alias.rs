use std::collections::HashMap;

use crate::entity::{Item, ItemId};

/// Normalise free text for alias lookup: trim, lowercase, strip quotes.
pub fn normalize(input: &str) -> String {
    input
        .trim()
        .to_lowercase()
        .trim_matches('"')
        .trim_matches('\'')
        .to_string()
}

/// Maps normalised item names and aliases to item identifiers.
///
/// Derived from the item table when the world is built and never edited on
/// its own.
#[derive(Debug, Clone, Default)]
pub struct AliasIndex {
    by_alias: HashMap<String, ItemId>,
}

impl AliasIndex {
    /// Build the index from every item's canonical name and aliases.
    pub fn build<'a>(items: impl IntoIterator<Item = &'a Item>) -> Self {
        let mut by_alias = HashMap::new();
        for item in items {
            by_alias.insert(normalize(item.name()), item.id);
            for alias in &item.aliases {
                by_alias.insert(normalize(alias), item.id);
            }
        }
        Self { by_alias }
    }

    /// Resolve player-typed text to an item.
    pub fn resolve(&self, input: &str) -> Option<ItemId> {
        let key = normalize(input);
        if key.is_empty() {
            return None;
        }
        self.by_alias.get(&key).copied()
    }
}
