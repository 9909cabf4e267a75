//! Static game data: tools, subscription tiers, upgrades and milestones.
//!
//! Everything here is read-only. Mutable records elsewhere refer to these
//! entries by id.

use serde::{Deserialize, Serialize};

/// The three currencies of the game.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Currency {
    /// Primary currency, earned by clicking and from every tool.
    VibeCodes,
    /// Earned from mid-tier tools and subscriptions.
    PromptTokens,
    /// Earned from high-tier tools and subscriptions.
    DevPoints,
}

impl Currency {
    pub fn short_name(&self) -> &'static str {
        match self {
            Currency::VibeCodes => "VB",
            Currency::PromptTokens => "PT",
            Currency::DevPoints => "DP",
        }
    }
}

/// A purchasable tool (producer). Static tools come from [`static_tools`];
/// generated ones are appended at runtime and share this shape.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ToolDef {
    pub id: String,
    pub name: String,
    pub description: String,
    pub icon: String,
    /// Cosmetic grouping, 1..=3.
    pub tier: u8,
    /// VB cost of the first unit.
    pub base_cost: f64,
    /// VB per second per unit.
    pub base_production: f64,
    /// PT per second per unit.
    #[serde(default)]
    pub pt_generation: f64,
    /// DP per second per unit.
    #[serde(default)]
    pub dp_generation: f64,
}

impl ToolDef {
    /// Shape check used when generated tools come back from storage.
    pub fn is_well_formed(&self) -> bool {
        let positive = |v: f64| v.is_finite() && v > 0.0;
        let non_negative = |v: f64| v.is_finite() && v >= 0.0;
        !self.id.is_empty()
            && !self.name.trim().is_empty()
            && (1..=3).contains(&self.tier)
            && positive(self.base_cost)
            && positive(self.base_production)
            && non_negative(self.pt_generation)
            && non_negative(self.dp_generation)
    }
}

struct StaticTool {
    id: &'static str,
    name: &'static str,
    description: &'static str,
    icon: &'static str,
    tier: u8,
    base_cost: f64,
    base_production: f64,
    pt_generation: f64,
    dp_generation: f64,
}

const STATIC_TOOLS: &[StaticTool] = &[
    // ── Tier 1: assistants ──────────────────────────────────────
    StaticTool { id: "chatgpt", name: "ChatGPT", description: "The classic chat assistant", icon: "💬", tier: 1, base_cost: 15.0, base_production: 1.0, pt_generation: 0.0, dp_generation: 0.0 },
    StaticTool { id: "claude", name: "Claude", description: "A thoughtful assistant", icon: "🧠", tier: 1, base_cost: 50.0, base_production: 3.0, pt_generation: 0.0, dp_generation: 0.0 },
    StaticTool { id: "gemini", name: "Gemini", description: "Multimodal model", icon: "✨", tier: 1, base_cost: 120.0, base_production: 6.0, pt_generation: 0.0, dp_generation: 0.0 },
    StaticTool { id: "copilot", name: "GitHub Copilot", description: "Real-time code completion", icon: "🤖", tier: 1, base_cost: 300.0, base_production: 12.0, pt_generation: 0.1, dp_generation: 0.0 },
    StaticTool { id: "cursor", name: "Cursor", description: "An editor with a built-in pair programmer", icon: "📝", tier: 1, base_cost: 700.0, base_production: 25.0, pt_generation: 0.2, dp_generation: 0.0 },
    StaticTool { id: "codewhisperer", name: "CodeWhisperer", description: "Cloud-flavoured code assistant", icon: "🔮", tier: 1, base_cost: 1_500.0, base_production: 50.0, pt_generation: 0.3, dp_generation: 0.0 },
    StaticTool { id: "tabnine", name: "Tabnine", description: "Completion for every language", icon: "⌨️", tier: 1, base_cost: 3_500.0, base_production: 100.0, pt_generation: 0.5, dp_generation: 0.0 },
    // ── Tier 2: media and agents ────────────────────────────────
    StaticTool { id: "midjourney", name: "Midjourney", description: "Images from a description", icon: "🎨", tier: 2, base_cost: 8_000.0, base_production: 200.0, pt_generation: 1.0, dp_generation: 0.0 },
    StaticTool { id: "dalle", name: "DALL-E 3", description: "Picture generation", icon: "🖼️", tier: 2, base_cost: 18_000.0, base_production: 400.0, pt_generation: 1.5, dp_generation: 0.0 },
    StaticTool { id: "stable-diffusion", name: "Stable Diffusion", description: "Open-source image generation", icon: "🌀", tier: 2, base_cost: 40_000.0, base_production: 800.0, pt_generation: 2.0, dp_generation: 0.1 },
    StaticTool { id: "whisper", name: "Whisper", description: "Speech to text", icon: "🎙️", tier: 2, base_cost: 90_000.0, base_production: 1_600.0, pt_generation: 3.0, dp_generation: 0.2 },
    StaticTool { id: "elevenlabs", name: "ElevenLabs", description: "Voice cloning and synthesis", icon: "🗣️", tier: 2, base_cost: 200_000.0, base_production: 3_200.0, pt_generation: 5.0, dp_generation: 0.3 },
    StaticTool { id: "runway", name: "Runway Gen-3", description: "Professional video generation", icon: "🎥", tier: 2, base_cost: 450_000.0, base_production: 6_500.0, pt_generation: 8.0, dp_generation: 0.5 },
    StaticTool { id: "sora", name: "Sora", description: "Video from a prompt", icon: "🎬", tier: 2, base_cost: 1_000_000.0, base_production: 13_000.0, pt_generation: 12.0, dp_generation: 0.8 },
    StaticTool { id: "devin", name: "Devin", description: "Autonomous software engineer", icon: "👨‍💻", tier: 2, base_cost: 2_200_000.0, base_production: 26_000.0, pt_generation: 18.0, dp_generation: 1.2 },
    // ── Tier 3: premium ─────────────────────────────────────────
    StaticTool { id: "gpt5", name: "GPT-5", description: "The next generation of language models", icon: "🚀", tier: 3, base_cost: 5_000_000.0, base_production: 55_000.0, pt_generation: 30.0, dp_generation: 2.0 },
    StaticTool { id: "claude-opus", name: "Claude Opus Pro", description: "Everything Claude can do, at once", icon: "💎", tier: 3, base_cost: 11_000_000.0, base_production: 120_000.0, pt_generation: 50.0, dp_generation: 3.5 },
    StaticTool { id: "gemini-ultra", name: "Gemini Ultra 2", description: "The full weight of a datacenter", icon: "⚡", tier: 3, base_cost: 25_000_000.0, base_production: 250_000.0, pt_generation: 80.0, dp_generation: 5.0 },
];

/// The hand-authored tools, in unlock order.
pub fn static_tools() -> Vec<ToolDef> {
    STATIC_TOOLS
        .iter()
        .map(|t| ToolDef {
            id: t.id.to_string(),
            name: t.name.to_string(),
            description: t.description.to_string(),
            icon: t.icon.to_string(),
            tier: t.tier,
            base_cost: t.base_cost,
            base_production: t.base_production,
            pt_generation: t.pt_generation,
            dp_generation: t.dp_generation,
        })
        .collect()
}

// ── Subscriptions ───────────────────────────────────────────────

/// Per-tool subscription tier. Upgrades move exactly one step up.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum SubscriptionTier {
    #[default]
    Free,
    Pro,
    ProPlus,
    Max,
    Ultra,
}

impl SubscriptionTier {
    /// All tiers, lowest first.
    pub fn all() -> &'static [SubscriptionTier] {
        &[
            SubscriptionTier::Free,
            SubscriptionTier::Pro,
            SubscriptionTier::ProPlus,
            SubscriptionTier::Max,
            SubscriptionTier::Ultra,
        ]
    }

    /// The tier directly above, or `None` at the top.
    pub fn next(&self) -> Option<SubscriptionTier> {
        match self {
            SubscriptionTier::Free => Some(SubscriptionTier::Pro),
            SubscriptionTier::Pro => Some(SubscriptionTier::ProPlus),
            SubscriptionTier::ProPlus => Some(SubscriptionTier::Max),
            SubscriptionTier::Max => Some(SubscriptionTier::Ultra),
            SubscriptionTier::Ultra => None,
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            SubscriptionTier::Free => "Free",
            SubscriptionTier::Pro => "Pro",
            SubscriptionTier::ProPlus => "Pro+",
            SubscriptionTier::Max => "Max",
            SubscriptionTier::Ultra => "Ultra",
        }
    }

    /// DP price of upgrading *into* this tier, before discounts.
    pub fn dp_cost(&self) -> f64 {
        match self {
            SubscriptionTier::Free => 0.0,
            SubscriptionTier::Pro => 10.0,
            SubscriptionTier::ProPlus => 25.0,
            SubscriptionTier::Max => 50.0,
            SubscriptionTier::Ultra => 100.0,
        }
    }

    /// Multiplier on the tool's VB production.
    pub fn vb_multiplier(&self) -> f64 {
        match self {
            SubscriptionTier::Free => 1.0,
            SubscriptionTier::Pro => 1.5,
            SubscriptionTier::ProPlus => 2.5,
            SubscriptionTier::Max => 4.0,
            SubscriptionTier::Ultra => 6.0,
        }
    }

    /// Flat PT per second per unit.
    pub fn pt_bonus(&self) -> f64 {
        match self {
            SubscriptionTier::Free | SubscriptionTier::Pro => 0.0,
            SubscriptionTier::ProPlus => 5.0,
            SubscriptionTier::Max => 15.0,
            SubscriptionTier::Ultra => 30.0,
        }
    }

    /// Flat DP per second per unit. Only the two highest tiers grant any.
    pub fn dp_bonus(&self) -> f64 {
        match self {
            SubscriptionTier::Max => 0.1,
            SubscriptionTier::Ultra => 0.3,
            _ => 0.0,
        }
    }

    /// Contribution to the global crit chance, per subscribed tool.
    pub fn crit_chance(&self) -> f64 {
        match self {
            SubscriptionTier::Max => 0.01,
            SubscriptionTier::Ultra => 0.03,
            _ => 0.0,
        }
    }
}

// ── Leveled ("infinite") upgrades ───────────────────────────────

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum UpgradeCategory {
    Click,
    Production,
    Efficiency,
    Crit,
    Offline,
    PromptTokens,
    DevPoints,
    Special,
    /// One-time upgrades for idle play.
    Idle,
}

impl UpgradeCategory {
    pub fn label(&self) -> &'static str {
        match self {
            UpgradeCategory::Click => "Click",
            UpgradeCategory::Production => "Production",
            UpgradeCategory::Efficiency => "Efficiency",
            UpgradeCategory::Crit => "Crit",
            UpgradeCategory::Offline => "Offline",
            UpgradeCategory::PromptTokens => "Prompt Tokens",
            UpgradeCategory::DevPoints => "Dev Points",
            UpgradeCategory::Special => "Special",
            UpgradeCategory::Idle => "Idle",
        }
    }
}

/// Upgrades bought repeatedly, each purchase adding one level.
/// Cost at level L is `floor(base_cost * growth_rate^L)`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum LeveledUpgrade {
    ClickPower,
    ClickMultiplier,
    ProductionBoost,
    SynergyBonus,
    CostReduction,
    BulkDiscount,
    CritChance,
    CritDamage,
    OfflineProduction,
    OfflineCap,
    PtGeneration,
    PtEfficiency,
    DpBoost,
    SubscriptionDiscount,
    GoldenClicks,
    LuckyDrops,
    ChainReaction,
}

impl LeveledUpgrade {
    /// All leveled upgrades in display order.
    pub fn all() -> &'static [LeveledUpgrade] {
        use LeveledUpgrade::*;
        &[
            ClickPower,
            ClickMultiplier,
            ProductionBoost,
            SynergyBonus,
            CostReduction,
            BulkDiscount,
            CritChance,
            CritDamage,
            OfflineProduction,
            OfflineCap,
            PtGeneration,
            PtEfficiency,
            DpBoost,
            SubscriptionDiscount,
            GoldenClicks,
            LuckyDrops,
            ChainReaction,
        ]
    }

    /// Stable string id, as used in saves.
    pub fn id(&self) -> &'static str {
        use LeveledUpgrade::*;
        match self {
            ClickPower => "click-power",
            ClickMultiplier => "click-multiplier",
            ProductionBoost => "production-boost",
            SynergyBonus => "synergy-bonus",
            CostReduction => "cost-reduction",
            BulkDiscount => "bulk-discount",
            CritChance => "crit-chance",
            CritDamage => "crit-damage",
            OfflineProduction => "offline-production",
            OfflineCap => "offline-cap",
            PtGeneration => "pt-generation",
            PtEfficiency => "pt-efficiency",
            DpBoost => "dp-boost",
            SubscriptionDiscount => "subscription-discount",
            GoldenClicks => "golden-clicks",
            LuckyDrops => "lucky-drops",
            ChainReaction => "chain-reaction",
        }
    }

    pub fn from_id(id: &str) -> Option<LeveledUpgrade> {
        Self::all().iter().copied().find(|u| u.id() == id)
    }

    pub fn name(&self) -> &'static str {
        use LeveledUpgrade::*;
        match self {
            ClickPower => "Click Power",
            ClickMultiplier => "Click Multiplier",
            ProductionBoost => "Production Boost",
            SynergyBonus => "Synergy",
            CostReduction => "Cost Optimization",
            BulkDiscount => "Bulk Discount",
            CritChance => "Crit Chance",
            CritDamage => "Crit Damage",
            OfflineProduction => "Offline Income",
            OfflineCap => "Offline Limit",
            PtGeneration => "PT Generation",
            PtEfficiency => "PT Efficiency",
            DpBoost => "DP Boost",
            SubscriptionDiscount => "Subscription Discount",
            GoldenClicks => "Golden Clicks",
            LuckyDrops => "Lucky Drops",
            ChainReaction => "Chain Reaction",
        }
    }

    /// Effect of one level, for display.
    pub fn effect_label(&self) -> &'static str {
        use LeveledUpgrade::*;
        match self {
            ClickPower => "+1 VB per click",
            ClickMultiplier => "+5% click",
            ProductionBoost => "+10% VB production",
            SynergyBonus => "+2% per distinct tool",
            CostReduction => "-1% tool cost",
            BulkDiscount => "-0.5% cost growth",
            CritChance => "+0.5% crit chance",
            CritDamage => "+10% crit damage",
            OfflineProduction => "+5% offline yield",
            OfflineCap => "+1h offline limit",
            PtGeneration => "+10% PT",
            PtEfficiency => "-2% PT upgrade cost",
            DpBoost => "+15% DP",
            SubscriptionDiscount => "-2% subscription cost",
            GoldenClicks => "+0.2% chance of x10 click",
            LuckyDrops => "+0.1% chance of bonus PT",
            ChainReaction => "+0.3% chance of x2 click",
        }
    }

    /// Numeric magnitude of one level (fraction, flat amount or seconds).
    pub fn effect_per_level(&self) -> f64 {
        use LeveledUpgrade::*;
        match self {
            ClickPower => 1.0,
            ClickMultiplier => 0.05,
            ProductionBoost => 0.10,
            SynergyBonus => 0.02,
            CostReduction => 0.01,
            BulkDiscount => 0.005,
            CritChance => 0.005,
            CritDamage => 0.1,
            OfflineProduction => 0.05,
            OfflineCap => 3_600.0,
            PtGeneration => 0.10,
            PtEfficiency => 0.02,
            DpBoost => 0.15,
            SubscriptionDiscount => 0.02,
            GoldenClicks => 0.002,
            LuckyDrops => 0.001,
            ChainReaction => 0.003,
        }
    }

    pub fn category(&self) -> UpgradeCategory {
        use LeveledUpgrade::*;
        match self {
            ClickPower | ClickMultiplier => UpgradeCategory::Click,
            ProductionBoost | SynergyBonus => UpgradeCategory::Production,
            CostReduction | BulkDiscount => UpgradeCategory::Efficiency,
            CritChance | CritDamage => UpgradeCategory::Crit,
            OfflineProduction | OfflineCap => UpgradeCategory::Offline,
            PtGeneration | PtEfficiency => UpgradeCategory::PromptTokens,
            DpBoost | SubscriptionDiscount => UpgradeCategory::DevPoints,
            GoldenClicks | LuckyDrops | ChainReaction => UpgradeCategory::Special,
        }
    }

    pub fn base_cost(&self) -> f64 {
        use LeveledUpgrade::*;
        match self {
            ClickPower => 50.0,
            ClickMultiplier => 500.0,
            ProductionBoost => 200.0,
            SynergyBonus => 1_000.0,
            CostReduction => 800.0,
            BulkDiscount => 2_000.0,
            CritChance => 100.0,
            CritDamage => 250.0,
            OfflineProduction => 150.0,
            OfflineCap => 500.0,
            PtGeneration => 5_000.0,
            PtEfficiency => 10_000.0,
            DpBoost => 50.0,
            SubscriptionDiscount => 100.0,
            GoldenClicks => 200.0,
            LuckyDrops => 150.0,
            ChainReaction => 300.0,
        }
    }

    pub fn growth_rate(&self) -> f64 {
        use LeveledUpgrade::*;
        match self {
            ClickPower => 1.12,
            ClickMultiplier => 1.18,
            ProductionBoost => 1.15,
            SynergyBonus => 1.20,
            CostReduction => 1.25,
            BulkDiscount => 1.30,
            CritChance => 1.22,
            CritDamage => 1.25,
            OfflineProduction => 1.18,
            OfflineCap => 1.30,
            PtGeneration => 1.20,
            PtEfficiency => 1.25,
            DpBoost => 1.22,
            SubscriptionDiscount => 1.28,
            GoldenClicks => 1.35,
            LuckyDrops => 1.30,
            ChainReaction => 1.32,
        }
    }

    /// Currency the upgrade is paid in.
    pub fn currency(&self) -> Currency {
        use LeveledUpgrade::*;
        match self {
            ClickPower | ClickMultiplier | ProductionBoost | SynergyBonus | CostReduction
            | BulkDiscount | PtGeneration | PtEfficiency => Currency::VibeCodes,
            CritChance | CritDamage | OfflineProduction | OfflineCap => Currency::PromptTokens,
            DpBoost | SubscriptionDiscount | GoldenClicks | LuckyDrops | ChainReaction => {
                Currency::DevPoints
            }
        }
    }

    /// `None` means unbounded.
    pub fn max_level(&self) -> Option<u32> {
        use LeveledUpgrade::*;
        match self {
            CostReduction => Some(50),
            BulkDiscount => Some(30),
            CritChance => Some(80),
            OfflineProduction => Some(100),
            OfflineCap => Some(24),
            PtEfficiency => Some(40),
            SubscriptionDiscount => Some(40),
            GoldenClicks => Some(50),
            LuckyDrops => Some(100),
            ChainReaction => Some(60),
            _ => None,
        }
    }

    /// Undiscounted cost of buying the level after `level`.
    pub fn cost_at(&self, level: u32) -> f64 {
        (self.base_cost() * self.growth_rate().powi(level as i32)).floor()
    }
}

// ── One-time upgrades ───────────────────────────────────────────

/// Which derived value a one-time upgrade modifies.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum EffectKind {
    ClickMultiplier,
    ProductionMultiplier,
    OfflineMultiplier,
}

/// How an effect combines with the others of its kind.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Stacking {
    /// Added to the percentage sum, applied as `(1 + Σ)`.
    Additive,
    /// Multiplied into the final value.
    Multiplicative,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct UpgradeEffect {
    pub kind: EffectKind,
    pub value: f64,
    pub stacking: Stacking,
}

/// An upgrade purchasable at most once, always paid in VB.
#[derive(Debug)]
pub struct UpgradeDef {
    pub id: &'static str,
    pub name: &'static str,
    pub description: &'static str,
    pub category: UpgradeCategory,
    pub cost: f64,
    pub effect: UpgradeEffect,
}

const fn effect(kind: EffectKind, value: f64, stacking: Stacking) -> UpgradeEffect {
    UpgradeEffect { kind, value, stacking }
}

static UPGRADES: &[UpgradeDef] = &[
    UpgradeDef {
        id: "better-prompts",
        name: "Better Prompts",
        description: "+50% click",
        category: UpgradeCategory::Click,
        cost: 100.0,
        effect: effect(EffectKind::ClickMultiplier, 0.5, Stacking::Additive),
    },
    UpgradeDef {
        id: "prompt-library",
        name: "Prompt Library",
        description: "+100% click",
        category: UpgradeCategory::Click,
        cost: 1_000.0,
        effect: effect(EffectKind::ClickMultiplier, 1.0, Stacking::Additive),
    },
    UpgradeDef {
        id: "pair-programming",
        name: "Pair Programming",
        description: "Click x2",
        category: UpgradeCategory::Click,
        cost: 25_000.0,
        effect: effect(EffectKind::ClickMultiplier, 2.0, Stacking::Multiplicative),
    },
    UpgradeDef {
        id: "ci-pipeline",
        name: "CI Pipeline",
        description: "+25% VB production",
        category: UpgradeCategory::Production,
        cost: 5_000.0,
        effect: effect(EffectKind::ProductionMultiplier, 0.25, Stacking::Additive),
    },
    UpgradeDef {
        id: "cloud-gpus",
        name: "Cloud GPUs",
        description: "VB production x2",
        category: UpgradeCategory::Production,
        cost: 100_000.0,
        effect: effect(EffectKind::ProductionMultiplier, 2.0, Stacking::Multiplicative),
    },
    UpgradeDef {
        id: "night-shift",
        name: "Night Shift",
        description: "+25% offline yield",
        category: UpgradeCategory::Idle,
        cost: 10_000.0,
        effect: effect(EffectKind::OfflineMultiplier, 0.25, Stacking::Additive),
    },
    UpgradeDef {
        id: "always-on-agents",
        name: "Always-On Agents",
        description: "Offline yield x1.5",
        category: UpgradeCategory::Idle,
        cost: 500_000.0,
        effect: effect(EffectKind::OfflineMultiplier, 1.5, Stacking::Multiplicative),
    },
];

/// All one-time upgrades in display order.
pub fn upgrades() -> &'static [UpgradeDef] {
    UPGRADES
}

pub fn upgrade_by_id(id: &str) -> Option<&'static UpgradeDef> {
    UPGRADES.iter().find(|u| u.id == id)
}

// ── Milestones ──────────────────────────────────────────────────

/// What a milestone waits for.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum MilestoneCondition {
    /// Lifetime VB earned reaches the threshold.
    TotalEarned(f64),
    /// Manual clicks reach the threshold.
    TotalClicks(u64),
    /// Number of distinct tools owned reaches the threshold.
    DistinctTools(usize),
}

/// A one-time grant paid out when a milestone completes.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Reward {
    Currency(Currency, f64),
    /// Permanent multiplier on VB production and click value.
    Multiplier(f64),
}

#[derive(Debug)]
pub struct MilestoneDef {
    pub id: &'static str,
    pub name: &'static str,
    pub description: &'static str,
    pub condition: MilestoneCondition,
    pub rewards: &'static [Reward],
}

static MILESTONES: &[MilestoneDef] = &[
    MilestoneDef {
        id: "first-steps",
        name: "First Steps",
        description: "Buy your first tool",
        condition: MilestoneCondition::DistinctTools(1),
        rewards: &[Reward::Currency(Currency::VibeCodes, 50.0)],
    },
    MilestoneDef {
        id: "developer-setup",
        name: "Developer's First Setup",
        description: "Own 3 different tools",
        condition: MilestoneCondition::DistinctTools(3),
        rewards: &[
            Reward::Currency(Currency::VibeCodes, 500.0),
            Reward::Currency(Currency::DevPoints, 5.0),
        ],
    },
    MilestoneDef {
        id: "click-master",
        name: "Click Master",
        description: "Click 100 times",
        condition: MilestoneCondition::TotalClicks(100),
        rewards: &[Reward::Currency(Currency::VibeCodes, 100.0)],
    },
    MilestoneDef {
        id: "ide-master",
        name: "IDE Master",
        description: "Earn 2,000 VB",
        condition: MilestoneCondition::TotalEarned(2_000.0),
        rewards: &[Reward::Currency(Currency::DevPoints, 10.0)],
    },
    MilestoneDef {
        id: "multi-tool",
        name: "Multi-Tool Developer",
        description: "Own 7 different tools",
        condition: MilestoneCondition::DistinctTools(7),
        rewards: &[
            Reward::Currency(Currency::DevPoints, 25.0),
            Reward::Currency(Currency::VibeCodes, 1_000.0),
        ],
    },
    MilestoneDef {
        id: "click-veteran",
        name: "Click Veteran",
        description: "Click 1,000 times",
        condition: MilestoneCondition::TotalClicks(1_000),
        rewards: &[
            Reward::Currency(Currency::VibeCodes, 500.0),
            Reward::Currency(Currency::DevPoints, 10.0),
        ],
    },
    MilestoneDef {
        id: "enterprise-setup",
        name: "Enterprise Setup",
        description: "Earn 50,000 VB",
        condition: MilestoneCondition::TotalEarned(50_000.0),
        rewards: &[Reward::Currency(Currency::DevPoints, 100.0)],
    },
    MilestoneDef {
        id: "vibecode-master",
        name: "Vibecode Master",
        description: "Earn 250,000 VB in total",
        condition: MilestoneCondition::TotalEarned(250_000.0),
        rewards: &[Reward::Multiplier(1.5)],
    },
];

/// All milestones in evaluation order.
pub fn milestones() -> &'static [MilestoneDef] {
    MILESTONES
}
