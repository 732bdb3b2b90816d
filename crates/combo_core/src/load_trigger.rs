//! Load-more de-duplication
//!
//! Hover on the terminal row and highlight reaching the terminal index both
//! request more options. Both go through [`LoadTrigger::arm_for`], which
//! allows one request per distinct terminal index.

/// Remembers the terminal index for which load-more last fired
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct LoadTrigger {
    last_triggered: Option<usize>,
}

impl LoadTrigger {
    pub fn new() -> Self {
        Self::default()
    }

    /// Check-and-set for `terminal_index`
    ///
    /// Returns `true` when the caller should fire load-more. The mark is
    /// updated in the same call.
    pub fn arm_for(&mut self, terminal_index: usize) -> bool {
        if self.last_triggered == Some(terminal_index) {
            return false;
        }
        self.last_triggered = Some(terminal_index);
        true
    }

    /// Terminal index of the last request, if any
    pub fn last_triggered(&self) -> Option<usize> {
        self.last_triggered
    }

    /// Forget the mark so the next terminal observation fires again
    pub fn rearm(&mut self) {
        self.last_triggered = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fires_once_per_index() {
        let mut trigger = LoadTrigger::new();
        assert!(trigger.arm_for(4));
        assert!(!trigger.arm_for(4));
        assert!(!trigger.arm_for(4));
        assert_eq!(trigger.last_triggered(), Some(4));
    }

    #[test]
    fn test_new_index_fires_again() {
        let mut trigger = LoadTrigger::new();
        assert!(trigger.arm_for(4));
        assert!(trigger.arm_for(9));
        // Going back to an older terminal index is a new distinct value
        assert!(trigger.arm_for(4));
    }

    #[test]
    fn test_rearm() {
        let mut trigger = LoadTrigger::new();
        assert!(trigger.arm_for(2));
        trigger.rearm();
        assert_eq!(trigger.last_triggered(), None);
        assert!(trigger.arm_for(2));
    }
}
