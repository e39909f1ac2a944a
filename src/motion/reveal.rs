//! Enter animations expressed as inline CSS transitions.
//!
//! A reveal has two rendered states, hidden and visible. Components flip
//! between them once and let the browser interpolate.

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Easing {
    #[default]
    EaseOut,
    EaseInOut,
    /// Overshooting curve standing in for a stiffness-100 spring.
    Spring,
}

impl Easing {
    pub fn css(&self) -> &'static str {
        match self {
            Easing::EaseOut => "cubic-bezier(0, 0, 0.58, 1)",
            Easing::EaseInOut => "cubic-bezier(0.42, 0, 0.58, 1)",
            Easing::Spring => "cubic-bezier(0.34, 1.56, 0.64, 1)",
        }
    }
}

/// Where a block starts before it is revealed.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RevealPreset {
    pub x: f64,
    pub y: f64,
    pub scale: f64,
    pub duration_ms: u32,
    pub easing: Easing,
}

impl Default for RevealPreset {
    fn default() -> Self {
        Self::fade_up(20.0)
    }
}

impl RevealPreset {
    pub const fn fade() -> Self {
        Self { x: 0.0, y: 0.0, scale: 1.0, duration_ms: 600, easing: Easing::EaseOut }
    }

    pub const fn fade_up(distance: f64) -> Self {
        Self { y: distance, ..Self::fade() }
    }

    pub fn fade_down(distance: f64) -> Self {
        Self { y: -distance, ..Self::fade() }
    }

    pub fn slide_from_left(distance: f64) -> Self {
        Self { x: -distance, ..Self::fade() }
    }

    pub const fn scale_in(from: f64) -> Self {
        Self { scale: from, ..Self::fade() }
    }

    pub const fn duration(self, duration_ms: u32) -> Self {
        Self { duration_ms, ..self }
    }

    pub const fn easing(self, easing: Easing) -> Self {
        Self { easing, ..self }
    }

    /// Inline style for either state. `delay_ms` applies to the transition
    /// into the visible state.
    pub fn style(&self, visible: bool, delay_ms: u32) -> String {
        let transition = format!(
            "transition: opacity {d}ms {e} {delay_ms}ms, transform {d}ms {e} {delay_ms}ms;",
            d = self.duration_ms,
            e = self.easing.css(),
        );
        if visible {
            format!("opacity: 1; transform: none; {transition}")
        } else {
            format!(
                "opacity: 0; transform: translate3d({}px, {}px, 0) scale({}); {transition}",
                self.x, self.y, self.scale
            )
        }
    }
}

/// Sequential start times for the ordered children of one block.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Stagger {
    pub base_ms: u32,
    pub interval_ms: u32,
}

impl Stagger {
    pub const fn new(base_ms: u32, interval_ms: u32) -> Self {
        Self { base_ms, interval_ms }
    }

    pub fn delay_for_index(&self, index: usize) -> u32 {
        let index = u32::try_from(index).unwrap_or(u32::MAX);
        self.base_ms.saturating_add(index.saturating_mul(self.interval_ms))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn stagger_is_linear_in_index() {
        let stagger = Stagger::new(300, 200);
        let delays: Vec<u32> = (0..4).map(|i| stagger.delay_for_index(i)).collect();
        assert_eq!(delays, vec![300, 500, 700, 900]);
    }

    #[test]
    fn stagger_saturates() {
        let stagger = Stagger::new(u32::MAX - 1, 10);
        assert_eq!(stagger.delay_for_index(3), u32::MAX);
    }

    #[test]
    fn hidden_style_carries_offset_and_scale() {
        let style = RevealPreset::fade_down(20.0).style(false, 0);
        assert!(style.starts_with("opacity: 0;"));
        assert!(style.contains("translate3d(0px, -20px, 0) scale(1)"));

        let style = RevealPreset::scale_in(0.5).style(false, 0);
        assert!(style.contains("scale(0.5)"));
    }

    #[test]
    fn visible_style_rests_and_delays() {
        let style = RevealPreset::slide_from_left(20.0)
            .duration(300)
            .easing(Easing::EaseInOut)
            .style(true, 150);
        assert!(style.starts_with("opacity: 1; transform: none;"));
        assert!(style.contains("opacity 300ms cubic-bezier(0.42, 0, 0.58, 1) 150ms"));
    }
}
