//! Preference persistence and the catalog/preference merge.
//!
//! The stored blob is a JSON array of `{ "id": string, "enabled": bool }` objects. Reads are
//! lenient: a missing key, malformed JSON, or a non-array value all fall back to catalog
//! defaults, and individual elements that do not decode are skipped.

use std::collections::HashSet;

use leptos::logging;
use platform_host::PrefsStore;
use serde::Deserialize;
use serde_json::Value;
use thiserror::Error;

use crate::catalog::AppDefinition;
use crate::model::{DockSettings, DockState, MergedEntry, OrderPolicy};

#[derive(Debug, Error, Clone, PartialEq, Eq)]
/// Failures while reading or writing the preference blob.
pub enum PrefsError {
    /// The backing store rejected the read or write.
    #[error("preference storage failed: {0}")]
    Storage(String),
    /// The stored blob is not a JSON array.
    #[error("stored preferences are malformed: {0}")]
    Decode(String),
    /// The preference list could not be serialized.
    #[error("preference serialization failed: {0}")]
    Encode(String),
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Deserialize)]
/// One stored element as read back. Both fields may be missing; extra fields are ignored.
pub struct StoredPreference {
    /// Catalog id, if present.
    #[serde(default)]
    pub id: Option<String>,
    /// Stored flag; `None` means "use the catalog default".
    #[serde(default)]
    pub enabled: Option<bool>,
}

/// Decodes a stored blob into its readable elements, in stored order.
///
/// # Errors
///
/// Returns [`PrefsError::Decode`] when the blob is not valid JSON or not an array.
pub fn decode_preferences(raw: &str) -> Result<Vec<StoredPreference>, PrefsError> {
    let elements: Vec<Value> =
        serde_json::from_str(raw).map_err(|err| PrefsError::Decode(err.to_string()))?;
    Ok(elements
        .into_iter()
        .filter_map(|element| serde_json::from_value::<StoredPreference>(element).ok())
        .collect())
}

/// Serializes the persisted subset of `state` (id + enabled, display order).
///
/// # Errors
///
/// Returns [`PrefsError::Encode`] if serialization fails.
pub fn encode_preferences(state: &DockState) -> Result<String, PrefsError> {
    serde_json::to_string(&state.preferences()).map_err(|err| PrefsError::Encode(err.to_string()))
}

fn stored_flag(stored: &[StoredPreference], id: &str) -> Option<bool> {
    stored
        .iter()
        .find(|pref| pref.id.as_deref() == Some(id))
        .and_then(|pref| pref.enabled)
}

/// Merges the catalog with stored preferences.
///
/// Each catalog id appears exactly once. Stored ids absent from the catalog are dropped, and the
/// first stored element for an id wins.
pub fn merge_preferences(
    catalog: &[AppDefinition],
    stored: &[StoredPreference],
    policy: OrderPolicy,
) -> DockState {
    let merged = |app: &AppDefinition| MergedEntry {
        app: *app,
        enabled: stored_flag(stored, app.id).unwrap_or(app.default_enabled),
    };

    match policy {
        OrderPolicy::CatalogOrder => DockState::from_entries(catalog.iter().map(merged).collect()),
        OrderPolicy::StoredOrder => {
            let mut placed = HashSet::new();
            let mut entries = Vec::with_capacity(catalog.len());
            for id in stored.iter().filter_map(|pref| pref.id.as_deref()) {
                let Some(app) = catalog.iter().find(|app| app.id == id) else {
                    continue;
                };
                if placed.insert(app.id) {
                    entries.push(merged(app));
                }
            }
            entries.extend(
                catalog
                    .iter()
                    .filter(|app| !placed.contains(app.id))
                    .map(merged),
            );
            DockState::from_entries(entries)
        }
    }
}

/// Reads the stored blob.
///
/// # Errors
///
/// Returns [`PrefsError::Storage`] or [`PrefsError::Decode`].
pub fn read_preferences<S: PrefsStore + ?Sized>(
    store: &S,
    key: &str,
) -> Result<Option<Vec<StoredPreference>>, PrefsError> {
    let Some(raw) = store.load_pref(key).map_err(PrefsError::Storage)? else {
        return Ok(None);
    };
    decode_preferences(&raw).map(Some)
}

/// Builds the startup dock state from the catalog and whatever is stored under
/// `settings.storage_key`.
///
/// Never fails: read and decode errors are logged and treated as "nothing stored".
pub fn load_dock_state<S: PrefsStore + ?Sized>(
    store: &S,
    catalog: &[AppDefinition],
    settings: &DockSettings,
) -> DockState {
    let stored = match read_preferences(store, &settings.storage_key) {
        Ok(stored) => stored.unwrap_or_default(),
        Err(err) => {
            logging::warn!(
                "dock preferences load failed for `{}`: {err}",
                settings.storage_key
            );
            Vec::new()
        }
    };
    merge_preferences(catalog, &stored, settings.order_policy)
}

/// Replaces the stored blob with the full current list.
///
/// # Errors
///
/// Returns [`PrefsError::Encode`] or [`PrefsError::Storage`]; the in-memory state is untouched
/// either way.
pub fn persist_dock_state<S: PrefsStore + ?Sized>(
    store: &S,
    key: &str,
    state: &DockState,
) -> Result<(), PrefsError> {
    let raw = encode_preferences(state)?;
    store.save_pref(key, &raw).map_err(PrefsError::Storage)
}
