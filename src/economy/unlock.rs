//! The ordered tool catalog and the linear unlock chain over it.
//!
//! Tool `i` can be bought once tool `i - 1` has at least one unit; tool 0
//! always can. The catalog starts with the static tools and grows only by
//! [`ToolCatalog::append`], one generated tool at a time.

use thiserror::Error;

use crate::config::STATIC_TOOL_COUNT;

use super::catalog::{static_tools, ToolDef};
use super::state::EconomyState;

#[derive(Debug, Error, PartialEq)]
pub enum CatalogError {
    #[error("a tool with id `{0}` already exists")]
    DuplicateId(String),
    #[error("a tool named `{0}` already exists")]
    DuplicateName(String),
    #[error("tool `{0}` is malformed")]
    Malformed(String),
}

/// Append-only list of tool definitions: static entries first, generated
/// entries after.
#[derive(Clone, Debug)]
pub struct ToolCatalog {
    tools: Vec<ToolDef>,
    static_len: usize,
}

impl Default for ToolCatalog {
    fn default() -> Self {
        Self::new()
    }
}

impl ToolCatalog {
    pub fn new() -> Self {
        let tools = static_tools();
        let static_len = tools.len();
        Self { tools, static_len }
    }

    pub fn len(&self) -> usize {
        self.tools.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tools.is_empty()
    }

    pub fn at(&self, index: usize) -> Option<&ToolDef> {
        self.tools.get(index)
    }

    pub fn get(&self, id: &str) -> Option<&ToolDef> {
        self.tools.iter().find(|t| t.id == id)
    }

    pub fn index_of(&self, id: &str) -> Option<usize> {
        self.tools.iter().position(|t| t.id == id)
    }

    pub fn iter(&self) -> impl Iterator<Item = &ToolDef> {
        self.tools.iter()
    }

    pub fn last(&self) -> Option<&ToolDef> {
        self.tools.last()
    }

    /// The runtime-generated tail of the catalog.
    pub fn generated(&self) -> &[ToolDef] {
        &self.tools[self.static_len..]
    }

    pub fn contains_name(&self, name: &str) -> bool {
        self.tools.iter().any(|t| t.name == name)
    }

    /// Appends a tool. Names are compared case-sensitively against every
    /// entry, static ones included. On error the catalog is unchanged.
    pub fn append(&mut self, tool: ToolDef) -> Result<(), CatalogError> {
        if !tool.is_well_formed() {
            return Err(CatalogError::Malformed(tool.id));
        }
        if self.get(&tool.id).is_some() {
            return Err(CatalogError::DuplicateId(tool.id));
        }
        if self.contains_name(&tool.name) {
            return Err(CatalogError::DuplicateName(tool.name));
        }
        log::debug!("catalog: appended `{}` at index {}", tool.name, self.tools.len());
        self.tools.push(tool);
        Ok(())
    }

    /// Drops every generated entry.
    pub fn clear_generated(&mut self) {
        self.tools.truncate(self.static_len);
    }
}

/// Whether the tool with `id` may be offered for purchase.
pub fn is_unlocked(catalog: &ToolCatalog, state: &EconomyState, id: &str) -> bool {
    match catalog.index_of(id) {
        Some(0) => true,
        Some(i) => catalog
            .at(i - 1)
            .is_some_and(|prev| state.owned_count(&prev.id) > 0),
        None => false,
    }
}

/// The first locked tool, shown to the player as a preview.
pub fn next_locked<'a>(catalog: &'a ToolCatalog, state: &EconomyState) -> Option<&'a ToolDef> {
    catalog.iter().find(|t| !is_unlocked(catalog, state, &t.id))
}

/// Every tool currently available for purchase, in catalog order.
pub fn all_unlocked<'a>(catalog: &'a ToolCatalog, state: &EconomyState) -> Vec<&'a ToolDef> {
    catalog
        .iter()
        .filter(|t| is_unlocked(catalog, state, &t.id))
        .collect()
}

/// True when every catalog tool is owned and the static floor is reached,
/// i.e. the catalog must grow before the player has anything new to buy.
pub fn needs_generation(catalog: &ToolCatalog, state: &EconomyState) -> bool {
    let owned = catalog
        .iter()
        .filter(|t| state.owned_count(&t.id) > 0)
        .count();
    owned >= catalog.len() && owned >= STATIC_TOOL_COUNT
}

/// Numeric stats of the tool generated at `index`, scaled from `prev`.
/// Display fields are left empty for the generator to fill.
pub fn next_tool_stats(prev: &ToolDef, index: usize) -> ToolDef {
    // Factors are applied as tenths so whole-number inputs stay exact
    // (25e6 * 2.3 lands just below 57.5e6 in binary floating point).
    let scale = |value: f64, tenths: f64| (value * tenths / 10.0).floor();
    let scaled_or = |value: f64, tenths: f64, fallback: f64| {
        if value > 0.0 {
            scale(value, tenths)
        } else {
            fallback
        }
    };
    ToolDef {
        id: String::new(),
        name: String::new(),
        description: String::new(),
        icon: String::new(),
        tier: 3,
        base_cost: scale(prev.base_cost, 23.0),
        base_production: scale(prev.base_production, 22.0),
        pt_generation: scaled_or(prev.pt_generation, 21.0, index as f64 * 1_000.0),
        dp_generation: scaled_or(prev.dp_generation, 20.0, index as f64 * 100.0),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::economy::state::OwnedTool;

    fn own(state: &mut EconomyState, id: &str, count: u32) {
        state.owned.insert(
            id.to_string(),
            OwnedTool {
                count,
                ..OwnedTool::default()
            },
        );
    }

    fn generated(id: &str, name: &str) -> ToolDef {
        ToolDef {
            id: id.to_string(),
            name: name.to_string(),
            description: "test".to_string(),
            icon: "?".to_string(),
            tier: 3,
            base_cost: 1e9,
            base_production: 1e6,
            pt_generation: 1.0,
            dp_generation: 1.0,
        }
    }

    fn own_all(catalog: &ToolCatalog, state: &mut EconomyState) {
        let ids: Vec<String> = catalog.iter().map(|t| t.id.clone()).collect();
        for id in ids {
            own(state, &id, 1);
        }
    }

    #[test]
    fn first_tool_always_unlocked() {
        let cat = ToolCatalog::new();
        let state = EconomyState::new(1);
        assert!(is_unlocked(&cat, &state, "chatgpt"));
        assert!(!is_unlocked(&cat, &state, "claude"));
        assert_eq!(next_locked(&cat, &state).map(|t| t.id.as_str()), Some("claude"));
        assert_eq!(all_unlocked(&cat, &state).len(), 1);
    }

    #[test]
    fn owning_unlocks_next() {
        let cat = ToolCatalog::new();
        let mut state = EconomyState::new(1);
        own(&mut state, "chatgpt", 1);
        assert!(is_unlocked(&cat, &state, "claude"));
        assert!(!is_unlocked(&cat, &state, "gemini"));
    }

    #[test]
    fn zero_count_does_not_unlock() {
        let cat = ToolCatalog::new();
        let mut state = EconomyState::new(1);
        own(&mut state, "chatgpt", 0);
        assert!(!is_unlocked(&cat, &state, "claude"));
    }

    #[test]
    fn unknown_id_is_locked() {
        let cat = ToolCatalog::new();
        assert!(!is_unlocked(&cat, &EconomyState::new(1), "nope"));
    }

    #[test]
    fn everything_unlocked_when_all_owned() {
        let cat = ToolCatalog::new();
        let mut state = EconomyState::new(1);
        own_all(&cat, &mut state);
        assert!(next_locked(&cat, &state).is_none());
        assert_eq!(all_unlocked(&cat, &state).len(), cat.len());
    }

    #[test]
    fn generation_needed_only_when_everything_owned() {
        let mut cat = ToolCatalog::new();
        let mut state = EconomyState::new(1);
        assert!(!needs_generation(&cat, &state));
        own_all(&cat, &mut state);
        assert!(needs_generation(&cat, &state));

        cat.append(generated("generated-18-1", "Quantum Coder")).unwrap();
        assert!(!needs_generation(&cat, &state));
        own(&mut state, "generated-18-1", 1);
        assert!(needs_generation(&cat, &state));
    }

    #[test]
    fn owned_ids_outside_catalog_do_not_count() {
        let cat = ToolCatalog::new();
        let mut state = EconomyState::new(1);
        for i in 0..30 {
            own(&mut state, &format!("stale-{i}"), 1);
        }
        assert!(!needs_generation(&cat, &state));
    }

    #[test]
    fn next_stats_scale_previous() {
        let cat = ToolCatalog::new();
        let prev = cat.last().unwrap();
        let next = next_tool_stats(prev, cat.len());
        assert_eq!(next.base_cost, 57_500_000.0);
        assert_eq!(next.base_production, 550_000.0);
        assert_eq!(next.pt_generation, 168.0);
        assert_eq!(next.dp_generation, 10.0);
    }

    #[test]
    fn next_stats_fall_back_to_index() {
        let cat = ToolCatalog::new();
        let prev = cat.at(0).unwrap();
        let next = next_tool_stats(prev, 5);
        assert_eq!(next.pt_generation, 5_000.0);
        assert_eq!(next.dp_generation, 500.0);
    }

    #[test]
    fn append_rejects_name_of_static_tool() {
        let mut cat = ToolCatalog::new();
        let err = cat.append(generated("generated-18-1", "ChatGPT")).unwrap_err();
        assert_eq!(err, CatalogError::DuplicateName("ChatGPT".into()));
        assert_eq!(cat.len(), STATIC_TOOL_COUNT);
    }

    #[test]
    fn append_rejects_name_of_generated_tool() {
        let mut cat = ToolCatalog::new();
        cat.append(generated("generated-18-1", "Neural Forge")).unwrap();
        let err = cat.append(generated("generated-19-2", "Neural Forge")).unwrap_err();
        assert!(matches!(err, CatalogError::DuplicateName(_)));
        assert_eq!(cat.generated().len(), 1);
    }

    #[test]
    fn name_check_is_case_sensitive() {
        let mut cat = ToolCatalog::new();
        assert!(cat.append(generated("generated-18-1", "chatgpt")).is_ok());
    }

    #[test]
    fn append_rejects_duplicate_id_and_malformed() {
        let mut cat = ToolCatalog::new();
        assert!(matches!(
            cat.append(generated("chatgpt", "Other")),
            Err(CatalogError::DuplicateId(_))
        ));
        let mut bad = generated("generated-18-1", "Bad");
        bad.base_cost = f64::NAN;
        assert!(matches!(cat.append(bad), Err(CatalogError::Malformed(_))));
        assert_eq!(cat.len(), STATIC_TOOL_COUNT);
    }

    #[test]
    fn clear_generated_keeps_static() {
        let mut cat = ToolCatalog::new();
        cat.append(generated("generated-18-1", "Neural Forge")).unwrap();
        cat.clear_generated();
        assert_eq!(cat.len(), STATIC_TOOL_COUNT);
        assert!(cat.generated().is_empty());
    }
}

#[cfg(test)]
mod proptests {
    use super::*;
    use crate::economy::state::OwnedTool;
    use proptest::prelude::*;

    proptest! {
        #[test]
        fn prop_unlock_matches_predecessor(counts in proptest::collection::vec(0u32..3, 18)) {
            let cat = ToolCatalog::new();
            let mut state = EconomyState::new(1);
            for (tool, count) in cat.iter().zip(&counts) {
                state.owned.insert(tool.id.clone(), OwnedTool { count: *count, ..OwnedTool::default() });
            }
            for i in 0..cat.len() {
                let expected = i == 0 || counts[i - 1] > 0;
                prop_assert_eq!(is_unlocked(&cat, &state, &cat.at(i).unwrap().id), expected);
            }
        }
    }
}
