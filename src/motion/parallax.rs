/// Scroll progress of an element tracked from "its top meets the viewport
/// top" (0) to "its bottom meets the viewport top" (1).
pub fn exit_progress(top: f64, height: f64) -> f64 {
    if height <= 0.0 {
        return if top < 0.0 { 1.0 } else { 0.0 };
    }
    (-top / height).clamp(0.0, 1.0)
}

/// Linear map of `value` from `input` onto `output`, clamped at both ends.
pub fn map_range(value: f64, input: (f64, f64), output: (f64, f64)) -> f64 {
    let (in_start, in_end) = input;
    let (out_start, out_end) = output;
    if (in_end - in_start).abs() < f64::EPSILON {
        return if value < in_start { out_start } else { out_end };
    }
    let t = ((value - in_start) / (in_end - in_start)).clamp(0.0, 1.0);
    out_start + (out_end - out_start) * t
}

/// Hero styling derived from its own scroll progress.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct HeroParallax {
    pub corner_radius_px: f64,
    pub content_offset_pct: f64,
}

impl HeroParallax {
    pub fn at(progress: f64) -> Self {
        Self {
            corner_radius_px: map_range(progress, (0.0, 0.4), (0.0, 80.0)),
            content_offset_pct: map_range(progress, (0.0, 1.0), (0.0, 50.0)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn progress_clamps() {
        assert_eq!(exit_progress(100.0, 800.0), 0.0);
        assert_eq!(exit_progress(-400.0, 800.0), 0.5);
        assert_eq!(exit_progress(-2000.0, 800.0), 1.0);
        assert_eq!(exit_progress(-1.0, 0.0), 1.0);
    }

    #[test]
    fn radius_saturates_at_forty_percent() {
        assert_eq!(HeroParallax::at(0.0).corner_radius_px, 0.0);
        assert_eq!(HeroParallax::at(0.2).corner_radius_px, 40.0);
        assert_eq!(HeroParallax::at(0.4).corner_radius_px, 80.0);
        assert_eq!(HeroParallax::at(0.9).corner_radius_px, 80.0);
    }

    #[test]
    fn content_offset_tracks_full_range() {
        assert_eq!(HeroParallax::at(0.5).content_offset_pct, 25.0);
        assert_eq!(HeroParallax::at(1.0).content_offset_pct, 50.0);
    }

    #[test]
    fn degenerate_input_range() {
        assert_eq!(map_range(0.0, (1.0, 1.0), (0.0, 10.0)), 0.0);
        assert_eq!(map_range(2.0, (1.0, 1.0), (0.0, 10.0)), 10.0);
    }
}
