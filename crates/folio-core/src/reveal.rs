//! One-shot reveal tracking and stat count-up animations.

use std::collections::BTreeSet;
use std::time::Instant;

use crate::constants::{COUNT_UP_STEPS, COUNT_UP_STEP_INTERVAL};

/// Set of section ids that have been revealed at least once.
///
/// Membership is monotonic: sections are only ever added, so scrolling
/// an element back out of the viewport never un-reveals it.
#[derive(Debug, Clone, Default)]
pub struct RevealRegistry {
    revealed: BTreeSet<String>,
}

impl RevealRegistry {
    /// Create an empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Mark a section as revealed. Returns true only on the first call
    /// for that section; repeats are idempotent.
    pub fn reveal(&mut self, id: &str) -> bool {
        self.revealed.insert(id.to_string())
    }

    /// Whether a section has been revealed.
    #[must_use]
    pub fn is_revealed(&self, id: &str) -> bool {
        self.revealed.contains(id)
    }

    /// Number of revealed sections.
    #[must_use]
    pub fn len(&self) -> usize {
        self.revealed.len()
    }

    /// Whether nothing has been revealed yet.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.revealed.is_empty()
    }
}

/// Animation phase of a stat counter.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CounterPhase {
    /// Not started; displays 0.
    Idle,
    /// Counting up toward the target.
    Running,
    /// Finished; displays exactly the target.
    Done,
}

/// A count-up animation from 0 to a fixed target in equal steps.
///
/// The displayed value is derived from the step index rather than
/// accumulated, so it is monotonically non-decreasing, never exceeds
/// the target, and lands exactly on it at the final step.
#[derive(Debug, Clone)]
pub struct StatCounter {
    target: u64,
    step: u32,
    phase: CounterPhase,
    next_step_at: Option<Instant>,
}

impl StatCounter {
    /// Create an idle counter for the given target.
    #[must_use]
    pub fn new(target: u64) -> Self {
        Self {
            target,
            step: 0,
            phase: CounterPhase::Idle,
            next_step_at: None,
        }
    }

    /// The target value.
    #[must_use]
    pub fn target(&self) -> u64 {
        self.target
    }

    /// Current animation phase.
    #[must_use]
    pub fn phase(&self) -> CounterPhase {
        self.phase
    }

    /// Start the animation. No-op unless the counter is idle.
    pub fn start(&mut self, now: Instant) {
        if self.phase != CounterPhase::Idle {
            return;
        }
        if self.target == 0 {
            self.phase = CounterPhase::Done;
            return;
        }
        self.phase = CounterPhase::Running;
        self.next_step_at = Some(now + COUNT_UP_STEP_INTERVAL);
    }

    /// Advance the animation. Catches up several steps if the caller
    /// ticked late. Returns true if the displayed value changed.
    pub fn tick(&mut self, now: Instant) -> bool {
        if self.phase != CounterPhase::Running {
            return false;
        }
        let mut changed = false;
        while let Some(deadline) = self.next_step_at {
            if now < deadline {
                break;
            }
            self.step += 1;
            changed = true;
            if self.step >= COUNT_UP_STEPS {
                self.phase = CounterPhase::Done;
                self.next_step_at = None;
            } else {
                self.next_step_at = Some(deadline + COUNT_UP_STEP_INTERVAL);
            }
        }
        changed
    }

    /// Jump straight to the final value.
    pub fn skip_to_end(&mut self) {
        self.step = COUNT_UP_STEPS;
        self.phase = CounterPhase::Done;
        self.next_step_at = None;
    }

    /// Displayed value at the current step: `target * step / steps`,
    /// widened so large targets cannot overflow.
    #[must_use]
    pub fn current(&self) -> u64 {
        if self.phase == CounterPhase::Done {
            return self.target;
        }
        let value =
            u128::from(self.target) * u128::from(self.step) / u128::from(COUNT_UP_STEPS);
        // value <= target <= u64::MAX, so the narrowing cannot fail
        u64::try_from(value).unwrap_or(self.target)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    #[test]
    fn reveal_is_idempotent_and_monotonic() {
        let mut registry = RevealRegistry::new();
        assert!(registry.reveal("about"));
        assert!(!registry.reveal("about"));
        assert!(registry.is_revealed("about"));
        assert_eq!(registry.len(), 1);
    }

    #[test]
    fn unrevealed_section_reports_false() {
        let registry = RevealRegistry::new();
        assert!(!registry.is_revealed("skills"));
        assert!(registry.is_empty());
    }

    #[test]
    fn counter_idle_displays_zero() {
        let counter = StatCounter::new(120);
        assert_eq!(counter.current(), 0);
        assert_eq!(counter.phase(), CounterPhase::Idle);
    }

    #[test]
    fn counter_reaches_target_exactly_after_all_steps() {
        let t0 = Instant::now();
        let mut counter = StatCounter::new(120);
        counter.start(t0);

        let mut now = t0;
        for _ in 0..COUNT_UP_STEPS {
            now += COUNT_UP_STEP_INTERVAL;
            counter.tick(now);
        }
        assert_eq!(counter.current(), 120);
        assert_eq!(counter.phase(), CounterPhase::Done);
    }

    #[test]
    fn counter_is_monotone_and_never_exceeds_target() {
        let t0 = Instant::now();
        let mut counter = StatCounter::new(7);
        counter.start(t0);

        let mut now = t0;
        let mut previous = 0;
        while counter.phase() == CounterPhase::Running {
            now += COUNT_UP_STEP_INTERVAL;
            counter.tick(now);
            let value = counter.current();
            assert!(value >= previous);
            assert!(value <= 7);
            previous = value;
        }
        assert_eq!(counter.current(), 7);
    }

    #[test]
    fn counter_catches_up_after_a_late_tick() {
        let t0 = Instant::now();
        let mut counter = StatCounter::new(1000);
        counter.start(t0);

        // One tick long after all deadlines have passed.
        counter.tick(t0 + COUNT_UP_STEP_INTERVAL * (COUNT_UP_STEPS + 10));
        assert_eq!(counter.phase(), CounterPhase::Done);
        assert_eq!(counter.current(), 1000);
    }

    #[test]
    fn zero_target_completes_immediately() {
        let mut counter = StatCounter::new(0);
        counter.start(Instant::now());
        assert_eq!(counter.phase(), CounterPhase::Done);
        assert_eq!(counter.current(), 0);
    }

    #[test]
    fn start_is_one_shot() {
        let t0 = Instant::now();
        let mut counter = StatCounter::new(50);
        counter.start(t0);
        counter.skip_to_end();
        // A second start must not restart the animation.
        counter.start(t0 + Duration::from_secs(1));
        assert_eq!(counter.phase(), CounterPhase::Done);
        assert_eq!(counter.current(), 50);
    }

    #[test]
    fn skip_to_end_lands_on_target() {
        let mut counter = StatCounter::new(860);
        counter.start(Instant::now());
        counter.skip_to_end();
        assert_eq!(counter.current(), 860);
    }

    #[test]
    fn large_target_does_not_overflow() {
        let t0 = Instant::now();
        let mut counter = StatCounter::new(u64::MAX);
        counter.start(t0);
        counter.tick(t0 + COUNT_UP_STEP_INTERVAL);
        assert!(counter.current() <= u64::MAX);
        counter.skip_to_end();
        assert_eq!(counter.current(), u64::MAX);
    }
}
