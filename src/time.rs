//! Frame timestamps to economy ticks.
//!
//! Passive income is linear in `dt`, so it is only ever integrated in
//! [`TICK_SECONDS`](crate::config::TICK_SECONDS) steps. Time is banked in
//! whole microseconds; fractions of a tick wait for the next frame.

use crate::config::{MAX_FRAME_MS, TICKS_PER_SEC};

const MICROS_PER_SEC: u64 = 1_000_000;

pub struct FixedStep {
    tick_us: u64,
    banked_us: u64,
    prev_frame_us: Option<i64>,
}

impl Default for FixedStep {
    fn default() -> Self {
        Self::new(TICKS_PER_SEC)
    }
}

impl FixedStep {
    pub fn new(ticks_per_sec: u32) -> Self {
        Self {
            tick_us: MICROS_PER_SEC / u64::from(ticks_per_sec.max(1)),
            banked_us: 0,
            prev_frame_us: None,
        }
    }

    /// Banks the time since the previous frame and returns how many whole
    /// ticks are now due.
    ///
    /// A frame contributes at most `MAX_FRAME_MS`; anything longer is the
    /// business of offline progress. Frames that go backwards or carry a
    /// non-finite timestamp contribute nothing.
    pub fn update(&mut self, now_ms: f64) -> u32 {
        if !now_ms.is_finite() {
            return 0;
        }
        let now_us = (now_ms * 1_000.0).round() as i64;
        if let Some(prev) = self.prev_frame_us.replace(now_us) {
            let max_us = (MAX_FRAME_MS * 1_000.0) as i64;
            self.banked_us += (now_us - prev).clamp(0, max_us) as u64;
        }
        let due = self.banked_us / self.tick_us;
        self.banked_us %= self.tick_us;
        due as u32
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::TICK_SECONDS;
    use crate::economy::logic;
    use crate::economy::state::{EconomyState, OwnedTool};
    use crate::economy::unlock::ToolCatalog;

    /// Feeds `frames` evenly spaced frames spanning `span_ms` and runs the
    /// resulting ticks against a state earning 10 VB/s.
    fn income_over(frames: u32, span_ms: f64) -> f64 {
        let catalog = ToolCatalog::new();
        let mut state = EconomyState::new(3);
        state.owned.insert("chatgpt".into(), OwnedTool { count: 10, ..OwnedTool::default() });
        state.completed_milestones.push("first-steps".into());

        let mut clock = FixedStep::default();
        clock.update(0.0);
        for i in 1..=frames {
            let ticks = clock.update(span_ms * i as f64 / frames as f64);
            for _ in 0..ticks {
                logic::tick(&mut state, &catalog, TICK_SECONDS);
            }
        }
        state.currencies.vibe_codes
    }

    #[test]
    fn opening_frame_banks_nothing() {
        let mut clock = FixedStep::default();
        assert_eq!(clock.update(48_213.7), 0);
    }

    #[test]
    fn second_of_frames_pays_a_second_of_income() {
        assert!((income_over(60, 1_000.0) - 10.0).abs() < 1e-6);
        assert!((income_over(144, 1_000.0) - 10.0).abs() < 1e-6);
        assert!((income_over(7, 1_000.0) - 10.0).abs() < 1e-6);
    }

    #[test]
    fn partial_tick_waits_for_next_frame() {
        let mut clock = FixedStep::default();
        clock.update(0.0);
        assert_eq!(clock.update(250.0), 2);
        assert_eq!(clock.update(299.0), 0);
        assert_eq!(clock.update(300.0), 1);
    }

    #[test]
    fn backgrounded_tab_pays_at_most_one_frame_cap() {
        // A minute-long gap contributes MAX_FRAME_MS, i.e. one second.
        assert!((income_over(1, 60_000.0) - 10.0).abs() < 1e-6);
    }

    #[test]
    fn bad_timestamps_are_skipped() {
        let mut clock = FixedStep::default();
        clock.update(1_000.0);
        assert_eq!(clock.update(400.0), 0);
        assert_eq!(clock.update(f64::NAN), 0);
        assert_eq!(clock.update(f64::INFINITY), 0);
        assert_eq!(clock.update(500.0), 1);
    }

    #[test]
    fn faster_tick_rate_splits_finer() {
        let mut clock = FixedStep::new(60);
        clock.update(0.0);
        assert_eq!(clock.update(1_000.0), 60);
    }
}
