//! Core dock runtime state types and configuration.

use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::catalog::{
    AppDefinition, DEFAULT_FALLBACK_DELAY_MS, DEFAULT_RESTORE_STORED_ORDER, DEFAULT_STORAGE_KEY,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
/// How the merged list is ordered when it is rebuilt from storage.
pub enum OrderPolicy {
    /// Walk the catalog in catalog order; stored order is not reapplied.
    #[default]
    CatalogOrder,
    /// Stored ids first in stored order, then catalog ids missing from storage in catalog order.
    StoredOrder,
}

#[derive(Debug, Clone, PartialEq, Eq)]
/// Dock configuration. [`Default`] comes from the `[dock]` table of `catalog.toml`.
pub struct DockSettings {
    /// Key-value store key holding the serialized preference list.
    pub storage_key: String,
    /// Delay before the web fallback of a scheme launch opens.
    pub fallback_delay: Duration,
    /// Ordering rule applied at load.
    pub order_policy: OrderPolicy,
}

impl Default for DockSettings {
    fn default() -> Self {
        Self {
            storage_key: DEFAULT_STORAGE_KEY.to_string(),
            fallback_delay: Duration::from_millis(DEFAULT_FALLBACK_DELAY_MS),
            order_policy: if DEFAULT_RESTORE_STORED_ORDER {
                OrderPolicy::StoredOrder
            } else {
                OrderPolicy::CatalogOrder
            },
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
/// Direction of a one-step reorder.
pub enum MoveDirection {
    /// Towards the front of the list.
    Up,
    /// Towards the back of the list.
    Down,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// A catalog definition combined with its effective enabled flag.
pub struct MergedEntry {
    /// Catalog definition.
    pub app: AppDefinition,
    /// Whether the tile is shown in the dock.
    pub enabled: bool,
}

impl MergedEntry {
    /// Entry carrying the catalog default.
    pub const fn from_default(app: AppDefinition) -> Self {
        Self {
            app,
            enabled: app.default_enabled,
        }
    }

    /// Catalog id of this entry.
    pub const fn id(&self) -> &'static str {
        self.app.id
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
/// Persisted user override for one app. Position is implied by array order.
pub struct Preference {
    /// Catalog id.
    pub id: String,
    /// Whether the tile is shown.
    pub enabled: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
/// In-memory merged dock list. Ids are unique and every entry maps to one catalog definition.
pub struct DockState {
    entries: Vec<MergedEntry>,
}

impl DockState {
    /// Wraps an already-merged list.
    pub fn from_entries(entries: Vec<MergedEntry>) -> Self {
        Self { entries }
    }

    /// State equal to the catalog, in catalog order, with default enabled flags.
    pub fn from_catalog(catalog: &[AppDefinition]) -> Self {
        Self::from_entries(catalog.iter().copied().map(MergedEntry::from_default).collect())
    }

    /// Full merged list in display order, including disabled entries (settings surface).
    pub fn entries(&self) -> &[MergedEntry] {
        &self.entries
    }

    /// Looks up an entry by id.
    pub fn entry(&self, id: &str) -> Option<&MergedEntry> {
        self.entries.iter().find(|entry| entry.id() == id)
    }

    /// Display index of `id`.
    pub fn position(&self, id: &str) -> Option<usize> {
        self.entries.iter().position(|entry| entry.id() == id)
    }

    /// Number of entries, enabled or not.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the list has no entries.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Enabled entries only, in display order. This is what the dock grid renders.
    pub fn visible(&self) -> impl Iterator<Item = &MergedEntry> + '_ {
        self.entries.iter().filter(|entry| entry.enabled)
    }

    /// Flips the enabled flag of `id`. Returns `false` (and changes nothing) for unknown ids.
    pub fn toggle(&mut self, id: &str) -> bool {
        match self.entries.iter_mut().find(|entry| entry.id() == id) {
            Some(entry) => {
                entry.enabled = !entry.enabled;
                true
            }
            None => false,
        }
    }

    /// Swaps `id` with its neighbour in `direction`.
    ///
    /// Returns `false` without changing anything for unknown ids, the first entry moving up, and
    /// the last entry moving down.
    pub fn move_entry(&mut self, id: &str, direction: MoveDirection) -> bool {
        let Some(index) = self.position(id) else {
            return false;
        };
        let neighbour = match direction {
            MoveDirection::Up => index.checked_sub(1),
            MoveDirection::Down => Some(index + 1).filter(|next| *next < self.entries.len()),
        };
        match neighbour {
            Some(other) => {
                self.entries.swap(index, other);
                true
            }
            None => false,
        }
    }

    /// The persisted subset (id + enabled) in current display order.
    pub fn preferences(&self) -> Vec<Preference> {
        self.entries
            .iter()
            .map(|entry| Preference {
                id: entry.id().to_string(),
                enabled: entry.enabled,
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    const CATALOG: [AppDefinition; 4] = [
        AppDefinition::web("a", "A", "https://a.example"),
        AppDefinition::web("b", "B", "https://b.example").enabled_by_default(false),
        AppDefinition::web("c", "C", "https://c.example"),
        AppDefinition::web("d", "D", "https://d.example"),
    ];

    fn ids(state: &DockState) -> Vec<&'static str> {
        state.entries().iter().map(MergedEntry::id).collect()
    }

    #[test]
    fn from_catalog_uses_defaults_in_catalog_order() {
        let state = DockState::from_catalog(&CATALOG);
        assert_eq!(ids(&state), vec!["a", "b", "c", "d"]);
        assert_eq!(
            state.entries().iter().map(|e| e.enabled).collect::<Vec<_>>(),
            vec![true, false, true, true]
        );
    }

    #[test]
    fn toggle_flips_only_the_target() {
        let mut state = DockState::from_catalog(&CATALOG);
        assert!(state.toggle("c"));
        assert_eq!(state.entry("c").map(|e| e.enabled), Some(false));
        assert_eq!(ids(&state), vec!["a", "b", "c", "d"]);
        assert!(state.toggle("c"));
        assert_eq!(state, DockState::from_catalog(&CATALOG));
    }

    #[test]
    fn toggle_unknown_id_is_noop() {
        let mut state = DockState::from_catalog(&CATALOG);
        assert!(!state.toggle("zzz"));
        assert_eq!(state, DockState::from_catalog(&CATALOG));
    }

    #[test]
    fn move_down_swaps_with_next_neighbour() {
        for i in 0..CATALOG.len() - 1 {
            let mut state = DockState::from_catalog(&CATALOG);
            let id = CATALOG[i].id;
            assert!(state.move_entry(id, MoveDirection::Down));

            let mut expected: Vec<&str> = CATALOG.iter().map(|app| app.id).collect();
            expected.swap(i, i + 1);
            assert_eq!(ids(&state), expected);
        }
    }

    #[test]
    fn move_up_swaps_with_previous_neighbour() {
        let mut state = DockState::from_catalog(&CATALOG);
        assert!(state.move_entry("c", MoveDirection::Up));
        assert_eq!(ids(&state), vec!["a", "c", "b", "d"]);
    }

    #[test]
    fn move_at_boundaries_does_not_wrap() {
        let mut state = DockState::from_catalog(&CATALOG);
        assert!(!state.move_entry("a", MoveDirection::Up));
        assert!(!state.move_entry("d", MoveDirection::Down));
        assert_eq!(state, DockState::from_catalog(&CATALOG));
    }

    #[test]
    fn move_unknown_id_is_noop() {
        let mut state = DockState::from_catalog(&CATALOG);
        assert!(!state.move_entry("zzz", MoveDirection::Down));
        assert_eq!(state, DockState::from_catalog(&CATALOG));
    }

    #[test]
    fn visible_keeps_relative_order_of_enabled_entries() {
        let mut state = DockState::from_catalog(&CATALOG);
        state.move_entry("d", MoveDirection::Up);
        state.toggle("a");
        let visible: Vec<&str> = state.visible().map(MergedEntry::id).collect();
        assert_eq!(visible, vec!["d", "c"]);
    }

    #[test]
    fn preferences_follow_display_order() {
        let mut state = DockState::from_catalog(&CATALOG);
        state.move_entry("b", MoveDirection::Up);
        assert_eq!(
            state.preferences(),
            vec![
                Preference { id: "b".into(), enabled: false },
                Preference { id: "a".into(), enabled: true },
                Preference { id: "c".into(), enabled: true },
                Preference { id: "d".into(), enabled: true },
            ]
        );
    }

    #[test]
    fn default_settings_come_from_catalog_file() {
        let settings = DockSettings::default();
        assert_eq!(settings.storage_key, "app-dock-config");
        assert_eq!(settings.fallback_delay, Duration::from_millis(700));
        assert_eq!(settings.order_policy, OrderPolicy::CatalogOrder);
    }
}
