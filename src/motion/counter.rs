use crate::config::{COUNTER_DURATION_MS, COUNTER_STEPS};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CounterTick {
    Value(u32),
    /// Clamped to the target; no further ticks are produced.
    Finished(u32),
}

/// Steps a displayed value from 0 to `target` in `steps` equal increments.
///
/// After tick `k` the exact accumulated value is `target * k / steps`; the
/// display shows its floor. Integer arithmetic guarantees the target is
/// reached on tick `steps` and never overshot.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CounterAnimation {
    target: u32,
    steps: u32,
    duration_ms: u32,
    ticks: u32,
    displayed: u32,
    finished: bool,
}

impl CounterAnimation {
    pub fn new(target: u32) -> Self {
        Self::with_timing(target, COUNTER_STEPS, COUNTER_DURATION_MS)
    }

    pub fn with_timing(target: u32, steps: u32, duration_ms: u32) -> Self {
        Self {
            target,
            steps: steps.max(1),
            duration_ms,
            ticks: 0,
            displayed: 0,
            finished: false,
        }
    }

    /// Starts over towards `target` with the same timing. Returns `false`
    /// when the target is unchanged and progress is kept.
    pub fn retarget(&mut self, target: u32) -> bool {
        if target == self.target {
            return false;
        }
        *self = Self::with_timing(target, self.steps, self.duration_ms);
        true
    }

    pub fn is_finished(&self) -> bool {
        self.finished
    }

    /// Timer period in whole milliseconds, never zero.
    pub fn interval_ms(&self) -> u32 {
        (self.duration_ms / self.steps).max(1)
    }

    pub fn tick(&mut self) -> Option<CounterTick> {
        if self.finished {
            return None;
        }
        self.ticks += 1;
        if self.ticks >= self.steps || self.target == 0 {
            self.finished = true;
            self.displayed = self.target;
            return Some(CounterTick::Finished(self.target));
        }
        let accumulated = u64::from(self.target) * u64::from(self.ticks) / u64::from(self.steps);
        // `accumulated < target` while ticks < steps, so the cast cannot truncate.
        self.displayed = accumulated as u32;
        Some(CounterTick::Value(self.displayed))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn drain(mut counter: CounterAnimation) -> Vec<CounterTick> {
        std::iter::from_fn(|| counter.tick()).collect()
    }

    fn value(tick: &CounterTick) -> u32 {
        match tick {
            CounterTick::Value(v) | CounterTick::Finished(v) => *v,
        }
    }

    #[test]
    fn hundred_over_sixty_steps() {
        let counter = CounterAnimation::with_timing(100, 60, 2000);
        assert_eq!(counter.interval_ms(), 33);
        let ticks = drain(counter);
        assert_eq!(ticks.len(), 60);
        assert_eq!(ticks.last(), Some(&CounterTick::Finished(100)));
        let values: Vec<u32> = ticks.iter().map(value).collect();
        assert!(values.windows(2).all(|w| w[0] <= w[1]));
        assert!(values.iter().all(|v| *v <= 100));
        assert_eq!(values[0], 1);
    }

    #[test]
    fn small_target_ends_exactly_and_stops() {
        let mut counter = CounterAnimation::new(5);
        let ticks = drain(counter);
        let values: Vec<u32> = ticks.iter().map(value).collect();
        assert!(values.windows(2).all(|w| w[0] <= w[1]));
        assert_eq!(values.iter().filter(|v| **v == 5).count(), 1);
        assert_eq!(*values.last().unwrap(), 5);

        for _ in 0..60 {
            counter.tick();
        }
        assert!(counter.is_finished());
        assert_eq!(counter.tick(), None);
    }

    #[test]
    fn retarget_restarts_from_zero() {
        let mut counter = CounterAnimation::with_timing(100, 60, 2000);
        for _ in 0..60 {
            counter.tick();
        }
        assert!(counter.is_finished());
        assert!(!counter.retarget(100));
        assert!(counter.is_finished());

        assert!(counter.retarget(40));
        assert!(!counter.is_finished());
        assert_eq!(counter.interval_ms(), 33);
        let ticks = drain(counter);
        assert_eq!(ticks.len(), 60);
        assert_eq!(ticks.last(), Some(&CounterTick::Finished(40)));
    }

    #[test]
    fn zero_target_finishes_on_first_tick() {
        let mut counter = CounterAnimation::new(0);
        assert_eq!(counter.tick(), Some(CounterTick::Finished(0)));
        assert_eq!(counter.tick(), None);
    }

    #[test]
    fn zero_steps_is_treated_as_one() {
        let mut counter = CounterAnimation::with_timing(20, 0, 0);
        assert_eq!(counter.interval_ms(), 1);
        assert_eq!(counter.tick(), Some(CounterTick::Finished(20)));
    }
}
