/// A flag that goes from unset to set exactly once.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct OnceLatch {
    set: bool,
}

impl OnceLatch {
    pub fn is_set(&self) -> bool {
        self.set
    }

    /// Returns `true` only on the call that sets the latch.
    pub fn trigger(&mut self) -> bool {
        let fired = !self.set;
        self.set = true;
        fired
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fires_once() {
        let mut latch = OnceLatch::default();
        assert!(!latch.is_set());
        assert!(latch.trigger());
        for _ in 0..5 {
            assert!(!latch.trigger());
            assert!(latch.is_set());
        }
    }
}
