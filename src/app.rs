//! Player-facing game object: maps keys to economy commands and drives
//! ticks, autosave and catalog growth.

use crate::config::{TICKS_PER_SEC, TICK_SECONDS};
use crate::economy::catalog::{upgrades, LeveledUpgrade, UpgradeDef};
use crate::economy::logic::{self, ClickOutcome};
use crate::economy::state::EconomyState;
use crate::economy::unlock::{all_unlocked, is_unlocked, ToolCatalog};
use crate::format::format_number;
use crate::generator::growth::CatalogGrowth;
use crate::generator::{Generated, GenerationError, GenerationRequest, ToolSource};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Tab {
    Tools,
    Subscriptions,
    Upgrades,
    Milestones,
}

impl Tab {
    pub fn all() -> &'static [Tab] {
        &[Tab::Tools, Tab::Subscriptions, Tab::Upgrades, Tab::Milestones]
    }

    pub fn title(&self) -> &'static str {
        match self {
            Tab::Tools => "Tools",
            Tab::Subscriptions => "Subscriptions",
            Tab::Upgrades => "Upgrades",
            Tab::Milestones => "Milestones",
        }
    }

    pub fn key(&self) -> char {
        match self {
            Tab::Tools => '1',
            Tab::Subscriptions => '2',
            Tab::Upgrades => '3',
            Tab::Milestones => '4',
        }
    }
}

/// One selectable row of the upgrades tab.
#[derive(Clone, Copy, Debug)]
pub enum UpgradeRow {
    Leveled(LeveledUpgrade),
    OneTime(&'static UpgradeDef),
}

pub struct VibecodeGame {
    pub state: EconomyState,
    pub catalog: ToolCatalog,
    pub growth: CatalogGrowth,
    pub tab: Tab,
    pub cursor: usize,
    /// One-line feedback shown under the header.
    pub message: Option<String>,
    pub confirm_reset: bool,
    pub last_click: Option<ClickOutcome>,
    /// Wall clock of the latest frame, ms since epoch.
    pub now_ms: f64,
    ticks_since_save: u32,
}

impl VibecodeGame {
    pub fn new(state: EconomyState, catalog: ToolCatalog, now_ms: f64) -> Self {
        Self {
            state,
            catalog,
            growth: CatalogGrowth::new(),
            tab: Tab::Tools,
            cursor: 0,
            message: None,
            confirm_reset: false,
            last_click: None,
            now_ms,
            ticks_since_save: 0,
        }
    }

    /// Ids of owned tools, in catalog order.
    pub fn subscription_rows(&self) -> Vec<String> {
        self.catalog
            .iter()
            .filter(|t| self.state.owned_count(&t.id) > 0)
            .map(|t| t.id.clone())
            .collect()
    }

    pub fn upgrade_rows(&self) -> Vec<UpgradeRow> {
        LeveledUpgrade::all()
            .iter()
            .map(|u| UpgradeRow::Leveled(*u))
            .chain(upgrades().iter().map(UpgradeRow::OneTime))
            .collect()
    }

    fn row_count(&self) -> usize {
        match self.tab {
            Tab::Tools => all_unlocked(&self.catalog, &self.state).len(),
            Tab::Subscriptions => self.subscription_rows().len(),
            Tab::Upgrades => self.upgrade_rows().len(),
            Tab::Milestones => 0,
        }
    }

    fn move_cursor(&mut self, down: bool) {
        let rows = self.row_count();
        if rows == 0 {
            self.cursor = 0;
        } else if down {
            self.cursor = (self.cursor + 1) % rows;
        } else {
            self.cursor = (self.cursor + rows - 1) % rows;
        }
    }

    fn switch_tab(&mut self, tab: Tab) {
        self.tab = tab;
        self.cursor = 0;
    }

    /// Handles one key press. Returns true if the key did something.
    pub fn handle_key(&mut self, key: char) -> bool {
        if self.confirm_reset {
            self.confirm_reset = false;
            if key == 'y' {
                let seed = self.now_ms.to_bits();
                logic::reset(&mut self.state, &mut self.catalog, self.now_ms, seed);
                #[cfg(target_arch = "wasm32")]
                crate::economy::save::delete_save();
                self.growth.reset();
                self.cursor = 0;
                self.message = Some("Game reset".into());
            } else {
                self.message = Some("Reset cancelled".into());
            }
            return true;
        }

        match key {
            ' ' | 'c' => {
                let outcome = logic::click_detailed(&mut self.state);
                self.last_click = Some(outcome);
                if outcome.lucky_drop > 0.0 {
                    self.message = Some(format!("Lucky drop! +{} PT", format_number(outcome.lucky_drop)));
                }
                true
            }
            'j' => {
                self.move_cursor(true);
                true
            }
            'k' => {
                self.move_cursor(false);
                true
            }
            '\n' | 'b' => {
                self.buy_selected();
                true
            }
            'd' => {
                logic::toggle_demo_mode(&mut self.state);
                self.message = Some(format!(
                    "Demo mode {}",
                    if self.state.demo_mode { "ON (x1,000,000)" } else { "off" }
                ));
                true
            }
            's' => {
                logic::toggle_sound(&mut self.state);
                true
            }
            'g' => {
                self.growth.retry();
                true
            }
            'r' => {
                self.confirm_reset = true;
                self.message = Some("Reset everything? [y] to confirm".into());
                true
            }
            _ => match Tab::all().iter().find(|t| t.key() == key) {
                Some(tab) => {
                    self.switch_tab(*tab);
                    true
                }
                None => false,
            },
        }
    }

    fn buy_selected(&mut self) {
        let bought = match self.tab {
            Tab::Tools => {
                let Some(id) = all_unlocked(&self.catalog, &self.state)
                    .get(self.cursor)
                    .map(|t| t.id.clone())
                else {
                    return;
                };
                is_unlocked(&self.catalog, &self.state, &id)
                    && logic::purchase_tool(&mut self.state, &self.catalog, &id)
            }
            Tab::Subscriptions => match self.subscription_rows().get(self.cursor) {
                Some(id) => logic::upgrade_subscription(&mut self.state, id),
                None => return,
            },
            Tab::Upgrades => match self.upgrade_rows().get(self.cursor) {
                Some(UpgradeRow::Leveled(u)) => logic::purchase_leveled_upgrade(&mut self.state, *u),
                Some(UpgradeRow::OneTime(u)) => logic::purchase_upgrade(&mut self.state, u.id),
                None => return,
            },
            Tab::Milestones => return,
        };
        if !bought {
            self.message = Some("Not enough funds".into());
        }
    }

    /// Runs `delta_ticks` fixed steps. Returns true when an autosave is due.
    pub fn tick(&mut self, delta_ticks: u32, now_ms: f64) -> bool {
        self.now_ms = now_ms;
        for _ in 0..delta_ticks {
            logic::tick(&mut self.state, &self.catalog, TICK_SECONDS);
        }
        self.ticks_since_save += delta_ticks;
        if self.ticks_since_save >= self.state.settings.auto_save_ticks() {
            self.ticks_since_save = 0;
            return true;
        }
        false
    }

    /// A generation request, if the catalog needs to grow right now.
    pub fn poll_generation(&mut self) -> Option<GenerationRequest> {
        self.growth.begin(&self.catalog, &self.state, self.now_ms)
    }

    pub fn finish_generation(&mut self, outcome: Result<Generated, GenerationError>) {
        let source = outcome.as_ref().map(|g| g.source).ok();
        match self.growth.complete(&mut self.catalog, outcome, self.now_ms) {
            Ok(tool) => {
                let suffix = if source == Some(ToolSource::LocalFallback) {
                    " (offline name)"
                } else {
                    ""
                };
                self.message = Some(format!("New tool unlocked: {} {}{suffix}", tool.icon, tool.name));
            }
            Err(e) => self.message = Some(format!("Generation failed: {e}. [g] to retry")),
        }
    }

    /// Seconds until the next autosave, for display.
    pub fn seconds_to_autosave(&self) -> u32 {
        self.state
            .settings
            .auto_save_ticks()
            .saturating_sub(self.ticks_since_save)
            / TICKS_PER_SEC
    }
}
