//! Mutable economy state and the values derived from it.

use std::collections::{BTreeMap, BTreeSet};

use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};
use serde::{Deserialize, Serialize};

use crate::config::{self, Settings};

use super::catalog::{
    upgrade_by_id, Currency, EffectKind, LeveledUpgrade, Stacking, SubscriptionTier,
};
use super::unlock::ToolCatalog;

/// The three balances. Spends are check-then-deduct and never go negative.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Currencies {
    pub vibe_codes: f64,
    pub prompt_tokens: f64,
    pub dev_points: f64,
}

impl Currencies {
    pub fn get(&self, currency: Currency) -> f64 {
        match currency {
            Currency::VibeCodes => self.vibe_codes,
            Currency::PromptTokens => self.prompt_tokens,
            Currency::DevPoints => self.dev_points,
        }
    }

    fn slot(&mut self, currency: Currency) -> &mut f64 {
        match currency {
            Currency::VibeCodes => &mut self.vibe_codes,
            Currency::PromptTokens => &mut self.prompt_tokens,
            Currency::DevPoints => &mut self.dev_points,
        }
    }

    /// Adds a non-negative amount. Negative or NaN amounts are ignored.
    pub fn add(&mut self, currency: Currency, amount: f64) {
        if amount > 0.0 {
            *self.slot(currency) += amount;
        }
    }

    /// Deducts `amount` if the balance covers it. Returns whether it did.
    pub fn spend(&mut self, currency: Currency, amount: f64) -> bool {
        if !amount.is_finite() || amount < 0.0 {
            return false;
        }
        let slot = self.slot(currency);
        if *slot < amount {
            return false;
        }
        *slot -= amount;
        true
    }
}

/// Cumulative statistics.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct PlayerStats {
    pub total_clicks: u64,
    /// Lifetime VB earned. Never decreases, not even on spend.
    pub total_vibe_codes_earned: f64,
    pub total_prestige_count: u32,
    pub prestige_tokens: f64,
    /// Seconds of ticked play time.
    pub play_time: f64,
    /// Wall clock (ms since epoch) when the game was last known to be running.
    pub last_online_ms: f64,
}

/// Ownership record for one tool.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct OwnedTool {
    pub count: u32,
    pub subscription: SubscriptionTier,
    /// Lifetime VB produced by this tool.
    pub total_produced: f64,
}

impl Default for OwnedTool {
    fn default() -> Self {
        Self {
            count: 0,
            subscription: SubscriptionTier::Free,
            total_produced: 0.0,
        }
    }
}

/// Per-second rates for all three currencies.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Income {
    pub vibe_codes: f64,
    pub prompt_tokens: f64,
    pub dev_points: f64,
}

/// All mutable game state. Tool definitions live in [`ToolCatalog`] and are
/// referenced here by id only.
#[derive(Clone, Debug)]
pub struct EconomyState {
    pub currencies: Currencies,
    pub stats: PlayerStats,
    pub settings: Settings,
    pub owned: BTreeMap<String, OwnedTool>,
    pub owned_upgrades: BTreeSet<String>,
    pub levels: BTreeMap<LeveledUpgrade, u32>,
    /// Completed milestone ids, in completion order.
    pub completed_milestones: Vec<String>,
    /// Product of all milestone multiplier rewards.
    pub milestone_multiplier: f64,
    /// Session-only debug multiplier toggle.
    pub demo_mode: bool,
    rng: SmallRng,
}

impl EconomyState {
    pub fn new(seed: u64) -> Self {
        Self {
            currencies: Currencies::default(),
            stats: PlayerStats::default(),
            settings: Settings::default(),
            owned: BTreeMap::new(),
            owned_upgrades: BTreeSet::new(),
            levels: BTreeMap::new(),
            completed_milestones: Vec::new(),
            milestone_multiplier: 1.0,
            demo_mode: false,
            rng: SmallRng::seed_from_u64(seed),
        }
    }

    /// True with probability `chance` (clamped to 0..=1).
    pub(crate) fn roll(&mut self, chance: f64) -> bool {
        if chance <= 0.0 {
            return false;
        }
        if chance >= 1.0 {
            return true;
        }
        self.rng.gen::<f64>() < chance
    }

    pub fn level(&self, upgrade: LeveledUpgrade) -> u32 {
        self.levels.get(&upgrade).copied().unwrap_or(0)
    }

    pub fn owned_count(&self, id: &str) -> u32 {
        self.owned.get(id).map(|o| o.count).unwrap_or(0)
    }

    pub fn subscription(&self, id: &str) -> SubscriptionTier {
        self.owned
            .get(id)
            .map(|o| o.subscription)
            .unwrap_or_default()
    }

    /// Number of tools with at least one unit.
    pub fn distinct_tools_owned(&self) -> usize {
        self.owned.values().filter(|o| o.count > 0).count()
    }

    fn demo_multiplier(&self) -> f64 {
        if self.demo_mode {
            config::DEMO_MULTIPLIER
        } else {
            1.0
        }
    }

    pub fn prestige_multiplier(&self) -> f64 {
        1.0 + self.stats.prestige_tokens * 0.1
    }

    pub fn synergy_multiplier(&self) -> f64 {
        let per_tool = self.level(LeveledUpgrade::SynergyBonus) as f64
            * LeveledUpgrade::SynergyBonus.effect_per_level();
        1.0 + per_tool * self.distinct_tools_owned() as f64
    }

    /// (Σ additive, Π multiplicative) over owned one-time upgrades of `kind`.
    pub fn upgrade_effects(&self, kind: EffectKind) -> (f64, f64) {
        self.owned_upgrades
            .iter()
            .filter_map(|id| upgrade_by_id(id))
            .filter(|u| u.effect.kind == kind)
            .fold((0.0, 1.0), |(sum, product), u| match u.effect.stacking {
                Stacking::Additive => (sum + u.effect.value, product),
                Stacking::Multiplicative => (sum, product * u.effect.value),
            })
    }

    fn percent(&self, upgrade: LeveledUpgrade) -> f64 {
        self.level(upgrade) as f64 * upgrade.effect_per_level()
    }

    // ── Click ───────────────────────────────────────────────────

    /// Non-crit value of one click, before demo mode. Integer, at least 1.
    pub fn click_value(&self) -> f64 {
        let base = 1.0 + self.level(LeveledUpgrade::ClickPower) as f64;
        let (additive, multiplicative) = self.upgrade_effects(EffectKind::ClickMultiplier);
        let value = base
            * (1.0 + self.percent(LeveledUpgrade::ClickMultiplier) + additive)
            * multiplicative
            * self.synergy_multiplier()
            * self.prestige_multiplier()
            * self.milestone_multiplier;
        value.round().max(1.0)
    }

    /// Click value as shown to the player, demo mode included.
    pub fn effective_click_value(&self) -> f64 {
        self.click_value() * self.demo_multiplier()
    }

    /// Probability a click crits, capped at 80%.
    pub fn crit_chance(&self) -> f64 {
        let from_subscriptions: f64 = self
            .owned
            .values()
            .map(|o| o.subscription.crit_chance())
            .sum();
        (from_subscriptions + self.percent(LeveledUpgrade::CritChance)).min(0.8)
    }

    pub fn crit_multiplier(&self) -> f64 {
        2.0 + self.percent(LeveledUpgrade::CritDamage)
    }

    pub fn golden_click_chance(&self) -> f64 {
        self.percent(LeveledUpgrade::GoldenClicks)
    }

    pub fn chain_reaction_chance(&self) -> f64 {
        self.percent(LeveledUpgrade::ChainReaction)
    }

    pub fn lucky_drop_chance(&self) -> f64 {
        self.percent(LeveledUpgrade::LuckyDrops)
    }

    /// PT granted by a lucky drop.
    pub fn lucky_drop_amount(&self) -> f64 {
        1.0 + (self.level(LeveledUpgrade::LuckyDrops) / 10) as f64
    }

    // ── Costs ───────────────────────────────────────────────────

    /// VB cost of the next unit of `id`, or infinity for unknown ids.
    pub fn tool_cost(&self, catalog: &ToolCatalog, id: &str) -> f64 {
        let Some(tool) = catalog.get(id) else {
            return f64::INFINITY;
        };
        let growth = (config::TOOL_COST_GROWTH - self.percent(LeveledUpgrade::BulkDiscount))
            .max(config::MIN_TOOL_COST_GROWTH);
        let discount = (1.0 - self.percent(LeveledUpgrade::CostReduction)).max(0.5);
        let cost = (tool.base_cost * growth.powi(self.owned_count(id) as i32) * discount).floor();
        cost.max(1.0)
    }

    /// DP cost of moving `id` to its next tier. `None` at the top tier.
    pub fn subscription_cost(&self, id: &str) -> Option<f64> {
        let next = self.subscription(id).next()?;
        let discount = (1.0 - self.percent(LeveledUpgrade::SubscriptionDiscount)).max(0.2);
        Some((next.dp_cost() * discount).floor())
    }

    /// Cost of the next level, in the upgrade's own currency, with the PT
    /// efficiency discount applied to PT-denominated upgrades.
    pub fn leveled_cost(&self, upgrade: LeveledUpgrade) -> f64 {
        let cost = upgrade.cost_at(self.level(upgrade));
        if upgrade.currency() == Currency::PromptTokens {
            let discount = (1.0 - self.percent(LeveledUpgrade::PtEfficiency)).max(0.2);
            (cost * discount).floor()
        } else {
            cost
        }
    }

    pub fn at_max_level(&self, upgrade: LeveledUpgrade) -> bool {
        upgrade
            .max_level()
            .is_some_and(|max| self.level(upgrade) >= max)
    }

    // ── Production ──────────────────────────────────────────────

    /// VB-per-second multiplier shared by every tool.
    pub fn production_multiplier(&self) -> f64 {
        let (additive, multiplicative) = self.upgrade_effects(EffectKind::ProductionMultiplier);
        (1.0 + self.percent(LeveledUpgrade::ProductionBoost) + additive)
            * multiplicative
            * self.synergy_multiplier()
            * self.prestige_multiplier()
            * self.milestone_multiplier
            * self.demo_multiplier()
    }

    /// VB per second produced by one owned tool, all multipliers applied.
    pub fn tool_production(&self, catalog: &ToolCatalog, id: &str) -> f64 {
        match (catalog.get(id), self.owned.get(id)) {
            (Some(tool), Some(owned)) => {
                tool.base_production
                    * owned.count as f64
                    * owned.subscription.vb_multiplier()
                    * self.production_multiplier()
            }
            _ => 0.0,
        }
    }

    /// Current per-second rates. Owned ids missing from the catalog produce
    /// nothing.
    pub fn passive_income(&self, catalog: &ToolCatalog) -> Income {
        let mut vb = 0.0;
        let mut pt = 0.0;
        let mut dp = 0.0;
        for (id, owned) in &self.owned {
            let Some(tool) = catalog.get(id) else {
                continue;
            };
            let count = owned.count as f64;
            let tier = owned.subscription;
            vb += tool.base_production * count * tier.vb_multiplier();
            pt += (tool.pt_generation + tier.pt_bonus()) * count;
            dp += (tool.dp_generation + tier.dp_bonus()) * count;
        }
        let demo = self.demo_multiplier();
        Income {
            vibe_codes: vb * self.production_multiplier(),
            prompt_tokens: pt * (1.0 + self.percent(LeveledUpgrade::PtGeneration)) * demo,
            dev_points: dp * (1.0 + self.percent(LeveledUpgrade::DpBoost)) * demo,
        }
    }

    // ── Offline ─────────────────────────────────────────────────

    /// Longest absence (seconds) credited by offline catch-up.
    pub fn offline_cap_seconds(&self) -> f64 {
        config::OFFLINE_BASE_CAP_SECONDS
            + self.level(LeveledUpgrade::OfflineCap) as f64
                * LeveledUpgrade::OfflineCap.effect_per_level()
    }

    /// Share of normal VB production earned while away, at most 1.
    pub fn offline_yield(&self) -> f64 {
        let (additive, multiplicative) = self.upgrade_effects(EffectKind::OfflineMultiplier);
        (config::OFFLINE_BASE_YIELD
            * (1.0 + self.percent(LeveledUpgrade::OfflineProduction) + additive)
            * multiplicative)
            .min(1.0)
    }
}


#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        #[test]
        fn prop_tool_cost_at_least_one(count in 0u32..200, idx in 0usize..18) {
            let cat = ToolCatalog::new();
            let id = cat.at(idx).unwrap().id.clone();
            let mut state = EconomyState::new(1);
            state.owned.insert(id.clone(), OwnedTool { count, ..OwnedTool::default() });
            prop_assert!(state.tool_cost(&cat, &id) >= 1.0);
        }

        #[test]
        fn prop_tool_cost_strictly_increases(count in 0u32..120, idx in 0usize..18) {
            let cat = ToolCatalog::new();
            let id = cat.at(idx).unwrap().id.clone();
            let mut state = EconomyState::new(1);
            state.owned.insert(id.clone(), OwnedTool { count, ..OwnedTool::default() });
            let before = state.tool_cost(&cat, &id);
            state.owned.get_mut(&id).unwrap().count += 1;
            prop_assert!(state.tool_cost(&cat, &id) > before);
        }

        #[test]
        fn prop_spend_never_negative(balance in 0.0f64..1e9, amount in 0.0f64..1e9) {
            let mut c = Currencies { vibe_codes: balance, ..Currencies::default() };
            let ok = c.spend(Currency::VibeCodes, amount);
            prop_assert_eq!(ok, balance >= amount);
            prop_assert!(c.vibe_codes >= 0.0);
        }

        #[test]
        fn prop_crit_chance_within_bounds(level in 0u32..500) {
            let mut state = EconomyState::new(1);
            state.levels.insert(LeveledUpgrade::CritChance, level);
            let chance = state.crit_chance();
            prop_assert!((0.0..=0.8).contains(&chance));
        }
    }
}
