//! Save and load.
//!
//! ## Versioning
//!
//! - `SAVE_VERSION`: current save format. Bump it when fields are added.
//! - `MIN_COMPATIBLE_VERSION`: oldest format still readable. Only bump it
//!   for breaking changes (a field changes meaning or is removed).
//!
//! Each top-level slice of the save is decoded on its own. A slice that
//! fails to decode is logged and replaced by its default; the rest of the
//! save still loads. Owned tools and upgrade levels are decoded entry by
//! entry, so a single bad or unknown entry is dropped without losing its
//! neighbours.
//!
//! Generated tools are stored under their own key with their own version,
//! and every entry is shape-checked again before it rejoins the catalog.

use std::collections::{BTreeMap, BTreeSet};

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use thiserror::Error;

use crate::config::{Settings, MAX_AUTO_SAVE_INTERVAL};

use super::catalog::{milestones, upgrade_by_id, LeveledUpgrade, ToolDef};
use super::state::{Currencies, EconomyState, OwnedTool, PlayerStats};
use super::unlock::ToolCatalog;

/// Save format version. Bump when fields are added.
pub const SAVE_VERSION: u32 = 1;

/// Oldest readable save format. Bump only on breaking changes.
pub const MIN_COMPATIBLE_VERSION: u32 = 1;

/// Format version of the generated-tool list.
pub const GENERATED_DATA_VERSION: u32 = 1;

/// Generated tool ids carry this prefix.
pub const GENERATED_ID_PREFIX: &str = "generated-";

#[derive(Debug, Error)]
pub enum SaveError {
    #[error("save data is not valid JSON: {0}")]
    Parse(#[source] serde_json::Error),
    #[error("save version {saved} is older than the oldest supported ({min})")]
    Incompatible { saved: u32, min: u32 },
    #[error("could not serialize save data: {0}")]
    Serialize(#[source] serde_json::Error),
    #[error("browser storage unavailable: {0}")]
    Storage(String),
}

#[derive(Serialize, Deserialize)]
struct SaveData<G> {
    version: u32,
    game: G,
}

/// Serialized shape of [`EconomyState`]. Demo mode and the RNG are
/// session-only and not saved.
#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct GameSave<'a> {
    currencies: &'a Currencies,
    stats: &'a PlayerStats,
    settings: &'a Settings,
    owned_tools: &'a BTreeMap<String, OwnedTool>,
    owned_upgrades: &'a BTreeSet<String>,
    upgrade_levels: BTreeMap<&'static str, u32>,
    completed_milestones: &'a [String],
    milestone_multiplier: f64,
}

/// Serializes the full mutable state.
pub fn to_json(state: &EconomyState) -> Result<String, SaveError> {
    let save = SaveData {
        version: SAVE_VERSION,
        game: GameSave {
            currencies: &state.currencies,
            stats: &state.stats,
            settings: &state.settings,
            owned_tools: &state.owned,
            owned_upgrades: &state.owned_upgrades,
            upgrade_levels: state.levels.iter().map(|(u, l)| (u.id(), *l)).collect(),
            completed_milestones: &state.completed_milestones,
            milestone_multiplier: state.milestone_multiplier,
        },
    };
    serde_json::to_string(&save).map_err(SaveError::Serialize)
}

/// Decodes one slice, falling back to its default when absent or corrupt.
fn slice<T: DeserializeOwned + Default>(game: &Map<String, Value>, key: &str) -> T {
    match game.get(key) {
        None | Some(Value::Null) => T::default(),
        Some(value) => T::deserialize(value).unwrap_or_else(|e| {
            log::warn!("save: discarding corrupt `{key}` ({e})");
            T::default()
        }),
    }
}

fn entries<'a>(game: &'a Map<String, Value>, key: &str) -> impl Iterator<Item = (&'a String, &'a Value)> {
    let map = match game.get(key) {
        Some(Value::Object(map)) => Some(map),
        None | Some(Value::Null) => None,
        Some(_) => {
            log::warn!("save: discarding corrupt `{key}`");
            None
        }
    };
    map.into_iter().flat_map(|m| m.iter())
}

fn non_negative(v: f64) -> f64 {
    if v.is_finite() && v > 0.0 {
        v
    } else {
        0.0
    }
}

/// Rebuilds a state from saved JSON. `catalog` must already hold the
/// restored generated tools, since owned entries for ids it does not know
/// are dropped.
pub fn load_from_json(
    json: &str,
    catalog: &ToolCatalog,
    seed: u64,
) -> Result<EconomyState, SaveError> {
    let save: SaveData<Value> = serde_json::from_str(json).map_err(SaveError::Parse)?;
    if save.version < MIN_COMPATIBLE_VERSION {
        return Err(SaveError::Incompatible {
            saved: save.version,
            min: MIN_COMPATIBLE_VERSION,
        });
    }
    if save.version < SAVE_VERSION {
        log::info!("save: migrating from version {} to {}", save.version, SAVE_VERSION);
    }
    let empty = Map::new();
    let game = match &save.game {
        Value::Object(map) => map,
        _ => {
            log::warn!("save: game data is not an object, starting fresh");
            &empty
        }
    };

    let mut state = EconomyState::new(seed);

    let currencies: Currencies = slice(game, "currencies");
    state.currencies = Currencies {
        vibe_codes: non_negative(currencies.vibe_codes),
        prompt_tokens: non_negative(currencies.prompt_tokens),
        dev_points: non_negative(currencies.dev_points),
    };
    state.stats = slice(game, "stats");
    state.settings = slice(game, "settings");
    state.settings.auto_save_interval = state
        .settings
        .auto_save_interval
        .clamp(1, MAX_AUTO_SAVE_INTERVAL);

    for (id, value) in entries(game, "ownedTools") {
        if catalog.get(id).is_none() {
            log::warn!("save: dropping unknown tool `{id}`");
            continue;
        }
        match OwnedTool::deserialize(value) {
            Ok(owned) => {
                state.owned.insert(id.clone(), owned);
            }
            Err(e) => log::warn!("save: dropping corrupt tool `{id}` ({e})"),
        }
    }

    let upgrades: Vec<String> = slice(game, "ownedUpgrades");
    state.owned_upgrades = upgrades
        .into_iter()
        .filter(|id| upgrade_by_id(id).is_some())
        .collect();

    for (id, value) in entries(game, "upgradeLevels") {
        match (LeveledUpgrade::from_id(id), value.as_u64()) {
            (Some(upgrade), Some(level)) => {
                let level = u32::try_from(level).unwrap_or(u32::MAX);
                let level = upgrade.max_level().map_or(level, |max| level.min(max));
                state.levels.insert(upgrade, level);
            }
            _ => log::warn!("save: dropping upgrade level `{id}`"),
        }
    }

    let completed: Vec<String> = slice(game, "completedMilestones");
    for id in completed {
        if milestones().iter().any(|m| m.id == id) && !state.completed_milestones.contains(&id) {
            state.completed_milestones.push(id);
        }
    }

    let multiplier: f64 = match game.get("milestoneMultiplier") {
        None => 1.0,
        Some(v) => v.as_f64().unwrap_or(1.0),
    };
    state.milestone_multiplier = if multiplier.is_finite() && multiplier >= 1.0 {
        multiplier
    } else {
        1.0
    };

    Ok(state)
}

/// Serializes the generated tail of the catalog.
pub fn generated_to_json(catalog: &ToolCatalog) -> Result<String, SaveError> {
    let save = SaveData {
        version: GENERATED_DATA_VERSION,
        game: catalog.generated(),
    };
    serde_json::to_string(&save).map_err(SaveError::Serialize)
}

/// Appends saved generated tools to `catalog`, skipping any entry that
/// fails the shape check. Returns how many were restored.
pub fn restore_generated(catalog: &mut ToolCatalog, json: &str) -> usize {
    let save: SaveData<Vec<Value>> = match serde_json::from_str(json) {
        Ok(save) => save,
        Err(e) => {
            log::warn!("save: discarding generated tools ({e})");
            return 0;
        }
    };
    if save.version != GENERATED_DATA_VERSION {
        log::warn!(
            "save: discarding generated tools from data version {}",
            save.version
        );
        return 0;
    }

    let mut restored = 0;
    for value in save.game {
        let tool = match ToolDef::deserialize(&value) {
            Ok(tool) if tool.id.starts_with(GENERATED_ID_PREFIX) => tool,
            Ok(tool) => {
                log::warn!("save: generated tool has a foreign id `{}`", tool.id);
                continue;
            }
            Err(e) => {
                log::warn!("save: discarding malformed generated tool ({e})");
                continue;
            }
        };
        match catalog.append(tool) {
            Ok(()) => restored += 1,
            Err(e) => log::warn!("save: discarding generated tool: {e}"),
        }
    }
    restored
}

#[cfg(target_arch = "wasm32")]
fn get_storage() -> Option<web_sys::Storage> {
    web_sys::window()?.local_storage().ok()?
}

#[cfg(target_arch = "wasm32")]
fn write_item(key: &str, json: &str) -> Result<(), SaveError> {
    let storage = get_storage().ok_or_else(|| SaveError::Storage("no localStorage".into()))?;
    storage
        .set_item(key, json)
        .map_err(|e| SaveError::Storage(format!("{e:?}")))
}

#[cfg(target_arch = "wasm32")]
fn read_item(key: &str) -> Option<String> {
    get_storage()?.get_item(key).ok()?
}

/// Writes the state and the generated tools to localStorage, stamping
/// `now_ms` as the last-online time first.
#[cfg(target_arch = "wasm32")]
pub fn save_game(state: &mut EconomyState, catalog: &ToolCatalog, now_ms: f64) {
    use crate::config::{GENERATED_TOOLS_STORAGE_KEY, SAVE_STORAGE_KEY};

    state.stats.last_online_ms = now_ms;
    let result = to_json(state)
        .and_then(|json| write_item(SAVE_STORAGE_KEY, &json))
        .and_then(|()| generated_to_json(catalog))
        .and_then(|json| write_item(GENERATED_TOOLS_STORAGE_KEY, &json));
    if let Err(e) = result {
        log::warn!("save failed: {e}");
    }
}

/// Restores generated tools into `catalog`, then the state. A missing or
/// unreadable save yields `None` and the corrupt entry is removed.
#[cfg(target_arch = "wasm32")]
pub fn load_game(catalog: &mut ToolCatalog, seed: u64) -> Option<EconomyState> {
    use crate::config::{GENERATED_TOOLS_STORAGE_KEY, SAVE_STORAGE_KEY};

    if let Some(json) = read_item(GENERATED_TOOLS_STORAGE_KEY) {
        let restored = restore_generated(catalog, &json);
        log::info!("restored {restored} generated tools");
    }
    let json = read_item(SAVE_STORAGE_KEY)?;
    match load_from_json(&json, catalog, seed) {
        Ok(state) => Some(state),
        Err(e) => {
            log::warn!("discarding save: {e}");
            if let Some(storage) = get_storage() {
                let _ = storage.remove_item(SAVE_STORAGE_KEY);
            }
            None
        }
    }
}

/// Removes both save entries.
#[cfg(target_arch = "wasm32")]
pub fn delete_save() {
    use crate::config::{GENERATED_TOOLS_STORAGE_KEY, SAVE_STORAGE_KEY};

    if let Some(storage) = get_storage() {
        let _ = storage.remove_item(SAVE_STORAGE_KEY);
        let _ = storage.remove_item(GENERATED_TOOLS_STORAGE_KEY);
    }
}
