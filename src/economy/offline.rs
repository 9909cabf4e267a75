//! One-shot catch-up for the time the game was closed.

use crate::config::OFFLINE_MIN_SECONDS;

use super::catalog::Currency;
use super::milestones::check_milestones;
use super::state::EconomyState;
use super::unlock::ToolCatalog;

/// What the player earned while away.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct OfflineReport {
    /// Credited seconds, after the cap.
    pub seconds: f64,
    pub earned: f64,
}

/// Credits VB for the absence since `last_online_ms`, then stamps `now_ms`
/// as the new last-online time.
///
/// The absence is capped by [`EconomyState::offline_cap_seconds`] and paid
/// at [`EconomyState::offline_yield`]. Absences of a minute or less, a
/// missing timestamp and a clock that went backwards all credit nothing.
pub fn apply_offline_progress(
    state: &mut EconomyState,
    catalog: &ToolCatalog,
    now_ms: f64,
) -> Option<OfflineReport> {
    let last = state.stats.last_online_ms;
    state.stats.last_online_ms = now_ms;
    if last <= 0.0 || !now_ms.is_finite() {
        return None;
    }

    let seconds = ((now_ms - last) / 1000.0).min(state.offline_cap_seconds());
    if seconds <= OFFLINE_MIN_SECONDS {
        return None;
    }

    let earned = state.passive_income(catalog).vibe_codes * seconds * state.offline_yield();
    if earned <= 0.0 {
        return None;
    }
    state.currencies.add(Currency::VibeCodes, earned);
    state.stats.total_vibe_codes_earned += earned;
    check_milestones(state);
    log::info!(
        "welcome back: {:.0} VB earned over {:.0} minutes offline",
        earned,
        seconds / 60.0
    );
    Some(OfflineReport { seconds, earned })
}
