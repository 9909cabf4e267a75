//! When and how the catalog grows past its last tool.
//!
//! At most one generation runs at a time, and a new one starts no sooner
//! than [`GENERATION_COOLDOWN_MS`] after the previous one finished. The
//! catalog is touched only when a finished generation is accepted.

use crate::config::GENERATION_COOLDOWN_MS;
use crate::economy::catalog::ToolDef;
use crate::economy::save::GENERATED_ID_PREFIX;
use crate::economy::state::EconomyState;
use crate::economy::unlock::{needs_generation, next_tool_stats, ToolCatalog};

use super::{Generated, GenerationError, GenerationRequest, ToolSource};

#[derive(Clone, Debug, PartialEq)]
pub enum GrowthStatus {
    Idle,
    InFlight { tool_index: usize },
    CoolingDown { remaining_ms: f64 },
    /// The last attempt failed; the next one waits for the cooldown.
    Failed(String),
}

#[derive(Debug, Default)]
pub struct CatalogGrowth {
    in_flight: Option<usize>,
    last_finished_ms: Option<f64>,
    last_error: Option<String>,
}

impl CatalogGrowth {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_in_flight(&self) -> bool {
        self.in_flight.is_some()
    }

    pub fn last_error(&self) -> Option<&str> {
        self.last_error.as_deref()
    }

    fn cooldown_remaining(&self, now_ms: f64) -> f64 {
        self.last_finished_ms
            .map_or(0.0, |t| (t + GENERATION_COOLDOWN_MS - now_ms).max(0.0))
    }

    pub fn status(&self, now_ms: f64) -> GrowthStatus {
        if let Some(tool_index) = self.in_flight {
            return GrowthStatus::InFlight { tool_index };
        }
        if let Some(e) = &self.last_error {
            return GrowthStatus::Failed(e.clone());
        }
        match self.cooldown_remaining(now_ms) {
            r if r > 0.0 => GrowthStatus::CoolingDown { remaining_ms: r },
            _ => GrowthStatus::Idle,
        }
    }

    /// Starts a generation if the catalog is exhausted, nothing is in
    /// flight and the cooldown has passed. The caller must hand the
    /// outcome back to [`CatalogGrowth::complete`].
    pub fn begin(
        &mut self,
        catalog: &ToolCatalog,
        state: &EconomyState,
        now_ms: f64,
    ) -> Option<GenerationRequest> {
        if self.in_flight.is_some()
            || self.cooldown_remaining(now_ms) > 0.0
            || !needs_generation(catalog, state)
        {
            return None;
        }
        let request = GenerationRequest::for_catalog(catalog);
        self.in_flight = Some(request.tool_index);
        log::info!("generating tool #{}", request.tool_index);
        Some(request)
    }

    /// Finishes the in-flight generation. On success the new tool is
    /// appended and returned; on any error the catalog is left unchanged
    /// and the error is kept for display.
    pub fn complete(
        &mut self,
        catalog: &mut ToolCatalog,
        outcome: Result<Generated, GenerationError>,
        now_ms: f64,
    ) -> Result<ToolDef, GenerationError> {
        let expected = self.in_flight.take();
        self.last_finished_ms = Some(now_ms);

        let result = outcome.and_then(|generated| {
            if expected != Some(catalog.len()) {
                return Err(GenerationError::Stale);
            }
            let tool = build_tool(catalog, generated, now_ms)?;
            catalog.append(tool.clone())?;
            Ok(tool)
        });

        match &result {
            Ok(tool) => {
                self.last_error = None;
                log::info!("new tool: {} {}", tool.icon, tool.name);
            }
            Err(e) => {
                log::warn!("tool generation failed: {e}");
                self.last_error = Some(e.to_string());
            }
        }
        result
    }

    /// Clears the error and the cooldown so the next [`begin`](Self::begin)
    /// may fire at once.
    pub fn retry(&mut self) {
        if self.in_flight.is_none() {
            self.last_error = None;
            self.last_finished_ms = None;
        }
    }

    /// Forgets everything, including an in-flight request whose result
    /// will then be rejected as stale.
    pub fn reset(&mut self) {
        *self = Self::default();
    }
}

fn build_tool(
    catalog: &ToolCatalog,
    generated: Generated,
    now_ms: f64,
) -> Result<ToolDef, GenerationError> {
    let index = catalog.len();
    let prev = catalog.last().ok_or(GenerationError::Stale)?;
    let mut tool = next_tool_stats(prev, index);
    tool.id = format!("{GENERATED_ID_PREFIX}{index}-{}", now_ms.max(0.0) as u64);
    tool.name = generated.tool.name;
    tool.description = generated.tool.description;
    tool.icon = generated.tool.icon;
    if generated.source == ToolSource::LocalFallback {
        log::info!("tool #{index} named locally");
    }
    Ok(tool)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::economy::state::OwnedTool;
    use crate::economy::unlock::CatalogError;
    use crate::generator::GeneratedTool;

    fn exhausted(catalog: &ToolCatalog) -> EconomyState {
        let mut state = EconomyState::new(1);
        for tool in catalog.iter() {
            state
                .owned
                .insert(tool.id.clone(), OwnedTool { count: 1, ..OwnedTool::default() });
        }
        state
    }

    fn named(name: &str) -> Result<Generated, GenerationError> {
        Ok(Generated {
            tool: GeneratedTool {
                name: name.to_string(),
                description: "desc".to_string(),
                icon: "⚡".to_string(),
            },
            source: ToolSource::Remote,
        })
    }

    #[test]
    fn no_request_while_catalog_has_unowned_tools() {
        let cat = ToolCatalog::new();
        let mut growth = CatalogGrowth::new();
        assert!(growth.begin(&cat, &EconomyState::new(1), 0.0).is_none());
        assert_eq!(growth.status(0.0), GrowthStatus::Idle);
    }

    #[test]
    fn single_request_in_flight() {
        let cat = ToolCatalog::new();
        let state = exhausted(&cat);
        let mut growth = CatalogGrowth::new();
        let request = growth.begin(&cat, &state, 0.0).unwrap();
        assert_eq!(request.tool_index, 18);
        assert!(growth.begin(&cat, &state, 1.0).is_none());
        assert_eq!(growth.status(1.0), GrowthStatus::InFlight { tool_index: 18 });
    }

    #[test]
    fn success_appends_scaled_tool() {
        let mut cat = ToolCatalog::new();
        let state = exhausted(&cat);
        let mut growth = CatalogGrowth::new();
        growth.begin(&cat, &state, 0.0).unwrap();
        let tool = growth.complete(&mut cat, named("Quantum Coder"), 5_000.0).unwrap();

        assert_eq!(tool.id, "generated-18-5000");
        assert_eq!(tool.base_cost, 57_500_000.0);
        assert_eq!(tool.base_production, 550_000.0);
        assert_eq!(tool.tier, 3);
        assert_eq!(cat.len(), 19);
        assert_eq!(cat.last().unwrap().name, "Quantum Coder");
        assert!(!growth.is_in_flight());
    }

    #[test]
    fn cooldown_after_completion() {
        let mut cat = ToolCatalog::new();
        let mut growth = CatalogGrowth::new();
        growth.begin(&cat, &exhausted(&cat), 0.0).unwrap();
        growth.complete(&mut cat, named("Quantum Coder"), 1_000.0).unwrap();

        let state = exhausted(&cat);
        assert!(growth.begin(&cat, &state, 5_000.0).is_none());
        assert!(matches!(growth.status(5_000.0), GrowthStatus::CoolingDown { .. }));
        assert!(growth.begin(&cat, &state, 11_000.0).is_some());
    }

    #[test]
    fn duplicate_name_leaves_catalog_unchanged() {
        let mut cat = ToolCatalog::new();
        let mut growth = CatalogGrowth::new();
        growth.begin(&cat, &exhausted(&cat), 0.0).unwrap();
        let err = growth.complete(&mut cat, named("Claude"), 1.0).unwrap_err();
        assert!(matches!(err, GenerationError::Catalog(CatalogError::DuplicateName(_))));
        assert_eq!(cat.len(), 18);
        assert!(matches!(growth.status(2.0), GrowthStatus::Failed(_)));
    }

    #[test]
    fn failure_is_retryable() {
        let mut cat = ToolCatalog::new();
        let state = exhausted(&cat);
        let mut growth = CatalogGrowth::new();
        growth.begin(&cat, &state, 0.0).unwrap();
        let err = growth
            .complete(&mut cat, Err(GenerationError::MissingField("name")), 10.0)
            .unwrap_err();
        assert!(matches!(err, GenerationError::MissingField("name")));
        assert_eq!(growth.last_error(), Some("generator response is missing `name`"));
        assert!(growth.begin(&cat, &state, 20.0).is_none());

        growth.retry();
        assert_eq!(growth.status(20.0), GrowthStatus::Idle);
        assert!(growth.begin(&cat, &state, 20.0).is_some());
    }

    #[test]
    fn result_for_a_changed_catalog_is_stale() {
        let mut cat = ToolCatalog::new();
        let mut growth = CatalogGrowth::new();
        growth.begin(&cat, &exhausted(&cat), 0.0).unwrap();
        let mut other = crate::economy::unlock::next_tool_stats(cat.last().unwrap(), 18);
        other.id = "generated-18-1".into();
        other.name = "Sneaky".into();
        cat.append(other).unwrap();

        let err = growth.complete(&mut cat, named("Late Arrival"), 5.0).unwrap_err();
        assert!(matches!(err, GenerationError::Stale));
        assert_eq!(cat.len(), 19);
    }
}
