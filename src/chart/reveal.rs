//! One-shot reveal on scroll-into-view
//!
//! Page elements (the radar chart, statistic counters) animate the first time
//! they become visible and never again.

/// Intersection ratio at which an element counts as visible
pub const REVEAL_THRESHOLD: f64 = 0.5;

/// Two-state reveal lifecycle
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Reveal {
    /// Not yet seen in the viewport
    #[default]
    Pending,
    /// Already revealed; further visibility changes are ignored
    Revealed,
}

impl Reveal {
    /// Feed a visibility notification. Returns true exactly once: on the
    /// first notification with `visible` set.
    pub fn trigger(&mut self, visible: bool) -> bool {
        match self {
            Reveal::Pending if visible => {
                *self = Reveal::Revealed;
                true
            }
            _ => false,
        }
    }

    pub fn is_revealed(&self) -> bool {
        *self == Reveal::Revealed
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_trigger_once() {
        let mut reveal = Reveal::default();
        assert!(!reveal.trigger(false));
        assert!(!reveal.is_revealed());
        assert!(reveal.trigger(true));
        assert!(reveal.is_revealed());
        assert!(!reveal.trigger(true));
        assert!(!reveal.trigger(false));
        assert!(reveal.is_revealed());
    }
}
