//! Count-up animation for the headline stat cards.
//!
//! Each counter climbs from 0 to its target in fixed 20 ms ticks with a step
//! of `max(1, target / 30)`, so any value lands in roughly the same number of
//! frames. Ticks are derived from elapsed time, not from frame count, so a
//! slow frame catches up instead of stretching the animation.

use std::collections::HashMap;

use strum_macros::EnumIter;

use crate::config::PRESENTATION;
use crate::utils::app_time::AppInstant;

#[cfg(debug_assertions)]
use crate::config::DEBUG_FLAGS;

/// Shown before the first tick lands.
pub const COUNTER_PLACEHOLDER: &str = "—";

/// Display slots that can host an animation.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug, EnumIter)]
pub enum CounterTarget {
    TotalPoints,
    AnomalyCount,
}

#[derive(Clone, Debug)]
pub struct ProgressiveCounter {
    target: u32,
    step: u32,
    shown: Option<u32>,
    started_at: AppInstant,
    ticks_run: u64,
    finished: bool,
}

impl ProgressiveCounter {
    pub fn new(target: u32, started_at: AppInstant) -> Self {
        let frames = PRESENTATION.counter.target_frames.max(1) as u32;
        Self {
            target,
            step: (target / frames).max(1),
            shown: None,
            started_at,
            ticks_run: 0,
            finished: false,
        }
    }

    pub fn target(&self) -> u32 {
        self.target
    }

    pub fn step(&self) -> u32 {
        self.step
    }

    /// Value currently displayed, None before the first tick.
    pub fn shown(&self) -> Option<u32> {
        self.shown
    }

    pub fn is_running(&self) -> bool {
        !self.finished
    }

    /// Runs exactly one tick.
    pub fn tick(&mut self) {
        if self.finished {
            return;
        }
        let next = self.shown.unwrap_or(0).saturating_add(self.step);
        if next >= self.target {
            self.shown = Some(self.target);
            self.finished = true;
        } else {
            self.shown = Some(next);
        }
        self.ticks_run += 1;
    }

    /// Runs every tick that has fallen due by `now`.
    pub fn advance(&mut self, now: AppInstant) {
        let tick_ms = PRESENTATION.counter.tick.as_millis().max(1);
        let elapsed_ms = now.saturating_duration_since(self.started_at).as_millis();
        let due = (elapsed_ms / tick_ms) as u64;

        while self.ticks_run < due && !self.finished {
            self.tick();
        }
    }

    pub fn display(&self) -> String {
        match self.shown {
            Some(value) => value.to_string(),
            None => COUNTER_PLACEHOLDER.to_string(),
        }
    }
}

/// At most one running animation per target.
#[derive(Default)]
pub struct CounterBoard {
    counters: HashMap<CounterTarget, ProgressiveCounter>,
}

impl CounterBoard {
    pub fn new() -> Self {
        Self::default()
    }

    /// Starts counting `target` up to `value`, cancelling whatever was running there.
    pub fn animate(&mut self, target: CounterTarget, value: u32, now: AppInstant) {
        let _replaced = self
            .counters
            .insert(target, ProgressiveCounter::new(value, now));

        #[cfg(debug_assertions)]
        if DEBUG_FLAGS.print_counter_events {
            match _replaced {
                Some(previous) if previous.is_running() => log::info!(
                    "[counter] {:?}: animation to {} replaced by {}",
                    target,
                    previous.target(),
                    value
                ),
                _ => log::info!("[counter] {:?}: animating to {}", target, value),
            }
        }
    }

    /// Catches every counter up to `now`. Returns true while any is still running.
    pub fn advance(&mut self, now: AppInstant) -> bool {
        let mut running = false;
        for counter in self.counters.values_mut() {
            counter.advance(now);
            running |= counter.is_running();
        }
        running
    }

    pub fn get(&self, target: CounterTarget) -> Option<&ProgressiveCounter> {
        self.counters.get(&target)
    }

    /// Text for the slot, `fallback` when nothing was ever animated there.
    pub fn display_or(&self, target: CounterTarget, fallback: &str) -> String {
        self.get(target)
            .map(ProgressiveCounter::display)
            .unwrap_or_else(|| fallback.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::app_time::now;
    use std::time::Duration;

    fn ms(value: u64) -> Duration {
        Duration::from_millis(value)
    }

    #[test]
    fn ninety_takes_thirty_ticks_of_three() {
        let mut counter = ProgressiveCounter::new(90, now());
        assert_eq!(counter.step(), 3);

        let mut seen = Vec::new();
        while counter.is_running() {
            counter.tick();
            seen.push(counter.shown().unwrap());
        }

        assert_eq!(seen.len(), 30);
        assert_eq!(seen[0], 3);
        assert_eq!(seen[1], 6);
        assert_eq!(*seen.last().unwrap(), 90);
        assert!(seen.windows(2).all(|pair| pair[0] < pair[1]));
    }

    #[test]
    fn small_values_step_by_one() {
        let mut counter = ProgressiveCounter::new(7, now());
        assert_eq!(counter.step(), 1);
        for _ in 0..7 {
            counter.tick();
        }
        assert_eq!(counter.shown(), Some(7));
        assert!(!counter.is_running());
    }

    #[test]
    fn overshoot_is_clamped_to_target() {
        // 100 / 30 = 3, so the 34th tick would reach 102
        let mut counter = ProgressiveCounter::new(100, now());
        for _ in 0..40 {
            counter.tick();
        }
        assert_eq!(counter.shown(), Some(100));
    }

    #[test]
    fn zero_renders_zero_on_first_tick() {
        let mut counter = ProgressiveCounter::new(0, now());
        assert_eq!(counter.display(), COUNTER_PLACEHOLDER);
        counter.tick();
        assert_eq!(counter.display(), "0");
        assert!(!counter.is_running());
    }

    #[test]
    fn first_tick_lands_after_one_interval() {
        let start = now();
        let mut counter = ProgressiveCounter::new(90, start);

        counter.advance(start + ms(10));
        assert_eq!(counter.shown(), None);

        counter.advance(start + ms(20));
        assert_eq!(counter.shown(), Some(3));

        // A long frame catches up on every missed tick
        counter.advance(start + ms(200));
        assert_eq!(counter.shown(), Some(30));

        counter.advance(start + ms(5_000));
        assert_eq!(counter.shown(), Some(90));
    }

    #[test]
    fn new_animation_replaces_previous_one() {
        let start = now();
        let mut board = CounterBoard::new();

        board.animate(CounterTarget::AnomalyCount, 90, start);
        board.advance(start + ms(100));
        assert_eq!(board.display_or(CounterTarget::AnomalyCount, "0"), "15");

        board.animate(CounterTarget::AnomalyCount, 4, start + ms(100));
        assert_eq!(board.display_or(CounterTarget::AnomalyCount, "0"), COUNTER_PLACEHOLDER);

        let running = board.advance(start + ms(1_000));
        assert!(!running);
        assert_eq!(board.display_or(CounterTarget::AnomalyCount, "0"), "4");
    }

    #[test]
    fn targets_are_independent() {
        let start = now();
        let mut board = CounterBoard::new();
        board.animate(CounterTarget::TotalPoints, 375, start);
        board.animate(CounterTarget::AnomalyCount, 12, start);

        assert!(board.advance(start + ms(40)));
        assert_eq!(board.display_or(CounterTarget::TotalPoints, "0"), "24");
        assert_eq!(board.display_or(CounterTarget::AnomalyCount, "0"), "2");
    }

    #[test]
    fn untouched_slot_uses_fallback() {
        use strum::IntoEnumIterator;

        let board = CounterBoard::new();
        for target in CounterTarget::iter() {
            assert_eq!(board.display_or(target, "0"), "0");
            assert!(board.get(target).is_none());
        }
    }
}
