//! Tuning constants and persisted player settings.

use serde::{Deserialize, Serialize};

/// Game ticks per real-time second.
pub const TICKS_PER_SEC: u32 = 10;

/// Seconds of game time covered by one fixed step.
pub const TICK_SECONDS: f64 = 1.0 / TICKS_PER_SEC as f64;

/// Longest frame delta (ms) fed into the accumulator. A backgrounded tab
/// would otherwise replay minutes of ticks in one frame; long absences are
/// covered by offline progress instead.
pub const MAX_FRAME_MS: f64 = 1_000.0;

/// Global multiplier applied to click value and every rate in demo mode.
pub const DEMO_MULTIPLIER: f64 = 1_000_000.0;

/// PT credited by every click in demo mode.
pub const DEMO_CLICK_PROMPT_TOKENS: f64 = 1_000.0;

/// Per-unit cost growth of tools before bulk discounts.
pub const TOOL_COST_GROWTH: f64 = 1.15;

/// Cost growth never drops below this, however much bulk discount is bought.
pub const MIN_TOOL_COST_GROWTH: f64 = 1.01;

/// Number of hand-authored tools. Generation only starts past this point.
pub const STATIC_TOOL_COUNT: usize = 18;

/// Offline catch-up is skipped for absences shorter than this.
pub const OFFLINE_MIN_SECONDS: f64 = 60.0;

/// Offline catch-up cap before `offline-cap` levels.
pub const OFFLINE_BASE_CAP_SECONDS: f64 = 2.0 * 60.0 * 60.0;

/// Share of normal production earned while away, before upgrades.
pub const OFFLINE_BASE_YIELD: f64 = 0.5;

/// Minimum delay between two completed tool generations.
pub const GENERATION_COOLDOWN_MS: f64 = 10_000.0;

/// Path of the tool-name service, relative to the page origin.
pub const GENERATE_TOOL_PATH: &str = "/api/generate-tool";

/// localStorage key of the main save.
pub const SAVE_STORAGE_KEY: &str = "vibecode-clicker-save";

/// localStorage key of the generated-tool catalog extension.
pub const GENERATED_TOOLS_STORAGE_KEY: &str = "vibecode-generated-tools";

/// Longest autosave interval (s) a save may request.
pub const MAX_AUTO_SAVE_INTERVAL: u32 = 3_600;

/// Player-facing settings, persisted with the save.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub sound_enabled: bool,
    pub particles_enabled: bool,
    /// Seconds between autosaves.
    pub auto_save_interval: u32,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            sound_enabled: true,
            particles_enabled: true,
            auto_save_interval: 5,
        }
    }
}

impl Settings {
    /// Autosave cadence expressed in ticks. Never zero.
    pub fn auto_save_ticks(&self) -> u32 {
        self.auto_save_interval.clamp(1, MAX_AUTO_SAVE_INTERVAL) * TICKS_PER_SEC
    }
}
