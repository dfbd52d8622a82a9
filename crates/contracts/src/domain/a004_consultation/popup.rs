/// Phases of the consultation nudge.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PopupPhase {
    /// Waiting for the initial delay to elapse.
    Waiting,
    Visible { remaining: u32 },
    /// Gone for good (dismissed, expired, accepted or shown before).
    Dismissed,
}

/// Side effect the view has to perform after a transition.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PopupEffect {
    None,
    /// Persist the "already shown" flag.
    MarkShown,
    /// Persist the flag and open the consultation form.
    MarkShownAndOpenForm,
}

/// Delayed consultation popup with a one-second countdown.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PopupCountdown {
    phase: PopupPhase,
    countdown_sec: u32,
}

impl PopupCountdown {
    pub fn new(countdown_sec: u32, already_shown: bool) -> Self {
        let phase = if already_shown {
            PopupPhase::Dismissed
        } else {
            PopupPhase::Waiting
        };
        Self {
            phase,
            countdown_sec,
        }
    }

    pub fn phase(&self) -> PopupPhase {
        self.phase
    }

    pub fn is_visible(&self) -> bool {
        matches!(self.phase, PopupPhase::Visible { .. })
    }

    pub fn remaining(&self) -> Option<u32> {
        match self.phase {
            PopupPhase::Visible { remaining } => Some(remaining),
            _ => None,
        }
    }

    /// The initial delay elapsed.
    pub fn show(&mut self) -> bool {
        if self.phase != PopupPhase::Waiting {
            return false;
        }
        if self.countdown_sec == 0 {
            self.phase = PopupPhase::Dismissed;
            return false;
        }
        self.phase = PopupPhase::Visible {
            remaining: self.countdown_sec,
        };
        true
    }

    /// One second passed while visible.
    pub fn tick(&mut self) -> PopupEffect {
        match self.phase {
            PopupPhase::Visible { remaining } if remaining <= 1 => {
                self.phase = PopupPhase::Dismissed;
                PopupEffect::MarkShown
            }
            PopupPhase::Visible { remaining } => {
                self.phase = PopupPhase::Visible {
                    remaining: remaining - 1,
                };
                PopupEffect::None
            }
            _ => PopupEffect::None,
        }
    }

    /// Call-to-action clicked.
    pub fn accept(&mut self) -> PopupEffect {
        if self.is_visible() {
            self.phase = PopupPhase::Dismissed;
            PopupEffect::MarkShownAndOpenForm
        } else {
            PopupEffect::None
        }
    }

    /// Close button clicked.
    pub fn close(&mut self) -> PopupEffect {
        if self.is_visible() {
            self.phase = PopupPhase::Dismissed;
            PopupEffect::MarkShown
        } else {
            PopupEffect::None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn counts_down_then_hides_and_marks_shown() {
        let mut p = PopupCountdown::new(4, false);
        assert_eq!(p.phase(), PopupPhase::Waiting);
        assert_eq!(p.tick(), PopupEffect::None);
        assert!(p.show());
        assert_eq!(p.remaining(), Some(4));
        for expected in [3, 2, 1] {
            assert_eq!(p.tick(), PopupEffect::None);
            assert_eq!(p.remaining(), Some(expected));
        }
        assert_eq!(p.tick(), PopupEffect::MarkShown);
        assert!(!p.is_visible());
        assert_eq!(p.tick(), PopupEffect::None);
    }

    #[test]
    fn already_shown_never_appears() {
        let mut p = PopupCountdown::new(4, true);
        assert!(!p.show());
        assert_eq!(p.accept(), PopupEffect::None);
    }

    #[test]
    fn accept_and_close() {
        let mut p = PopupCountdown::new(4, false);
        p.show();
        assert_eq!(p.accept(), PopupEffect::MarkShownAndOpenForm);
        assert_eq!(p.phase(), PopupPhase::Dismissed);

        let mut p = PopupCountdown::new(4, false);
        p.show();
        p.tick();
        assert_eq!(p.close(), PopupEffect::MarkShown);
        assert_eq!(p.close(), PopupEffect::None);
    }
}
