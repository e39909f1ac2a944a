use crate::config::NAV_HIDE_THRESHOLD;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ScrollDirection {
    Up,
    Down,
}

/// What one scroll event tells the navbar.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ScrollSample {
    pub offset: f64,
    pub direction: ScrollDirection,
    /// Past the hide threshold, regardless of direction.
    pub scrolled: bool,
}

impl ScrollSample {
    /// Moving down and past the hide threshold.
    pub fn hides_navbar(&self) -> bool {
        self.direction == ScrollDirection::Down && self.scrolled
    }
}

/// Remembers the previous offset so consecutive samples yield a direction.
/// The first sample is compared against 0.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ScrollTracker {
    previous: f64,
    threshold: f64,
}

impl Default for ScrollTracker {
    fn default() -> Self {
        Self::with_threshold(NAV_HIDE_THRESHOLD)
    }
}

impl ScrollTracker {
    pub fn with_threshold(threshold: f64) -> Self {
        Self { previous: 0.0, threshold }
    }

    pub fn sample(&mut self, offset: f64) -> ScrollSample {
        let moving_down = offset > self.previous;
        let scrolled = offset > self.threshold;
        self.previous = offset;

        ScrollSample {
            offset,
            direction: if moving_down { ScrollDirection::Down } else { ScrollDirection::Up },
            scrolled,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn first_sample_compares_against_zero() {
        let mut tracker = ScrollTracker::default();
        let sample = tracker.sample(150.0);
        assert_eq!(sample.direction, ScrollDirection::Down);
        assert!(sample.hides_navbar());
        assert_eq!(tracker.sample(120.0).direction, ScrollDirection::Up);
    }

    #[test]
    fn downward_below_threshold_keeps_navbar() {
        let mut tracker = ScrollTracker::default();
        assert!(!tracker.sample(40.0).hides_navbar());
        assert!(!tracker.sample(100.0).hides_navbar());
        assert!(tracker.sample(101.0).hides_navbar());
    }

    #[test]
    fn equal_offset_counts_as_up() {
        let mut tracker = ScrollTracker::default();
        tracker.sample(500.0);
        let sample = tracker.sample(500.0);
        assert_eq!(sample.direction, ScrollDirection::Up);
        assert!(!sample.hides_navbar());
        assert!(sample.scrolled);
    }

    #[test]
    fn hide_matches_rule_for_any_sequence() {
        let offsets = [0.0, 20.0, 120.0, 90.0, 300.0, 300.0, 299.0, 1000.0, 101.0, 102.0, 0.0];
        let mut tracker = ScrollTracker::default();
        let mut previous = 0.0;
        for offset in offsets {
            let sample = tracker.sample(offset);
            assert_eq!(sample.hides_navbar(), offset > previous && offset > 100.0, "offset {offset}");
            previous = offset;
        }
    }
}
