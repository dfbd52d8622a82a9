/// Hero slideshow state.
///
/// Time is driven from outside: the view calls [`HeroCarousel::tick`] on a
/// timer and restarts that timer whenever [`HeroCarousel::timer_key`]
/// changes, so a running timer never works with a stale image count.
#[derive(Debug, Clone, PartialEq)]
pub struct HeroCarousel {
    current: usize,
    len: usize,
    paused: bool,
    swipe_threshold: f64,
}

impl HeroCarousel {
    pub fn new(len: usize, swipe_threshold: f64) -> Self {
        Self {
            current: 0,
            len,
            paused: false,
            swipe_threshold,
        }
    }

    pub fn current(&self) -> usize {
        self.current
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub fn is_paused(&self) -> bool {
        self.paused
    }

    /// Whether a timer should be running at all.
    pub fn autoplay_active(&self) -> bool {
        !self.paused && self.len > 1
    }

    /// The inputs the autoplay timer depends on.
    pub fn timer_key(&self) -> (bool, usize) {
        (self.paused, self.len)
    }

    /// New slide list; the index is pulled back into range.
    pub fn set_len(&mut self, len: usize) {
        self.len = len;
        if self.current >= len {
            self.current = len.saturating_sub(1);
        }
    }

    /// Pointer entered the slideshow.
    pub fn pause(&mut self) {
        self.paused = true;
    }

    /// Pointer left. Does not advance by itself; the next tick does.
    pub fn resume(&mut self) {
        self.paused = false;
    }

    /// One autoplay step. Returns whether the slide changed.
    pub fn tick(&mut self) -> bool {
        if !self.autoplay_active() {
            return false;
        }
        self.current = (self.current + 1) % self.len;
        true
    }

    /// Horizontal swipe of `dx` pixels (end x minus start x).
    ///
    /// Below the threshold nothing happens. A left swipe shows the next
    /// slide, a right swipe the previous one, stopping at either end.
    pub fn swipe(&mut self, dx: f64) -> bool {
        if self.len == 0 || dx.abs() < self.swipe_threshold {
            return false;
        }
        let before = self.current;
        if dx < 0.0 {
            self.current = (self.current + 1).min(self.len - 1);
        } else {
            self.current = self.current.saturating_sub(1);
        }
        before != self.current
    }

    pub fn go_to(&mut self, index: usize) -> bool {
        if index < self.len {
            self.current = index;
            true
        } else {
            false
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ticks_wrap_around() {
        let mut c = HeroCarousel::new(3, 30.0);
        let seen: Vec<usize> = (0..4)
            .map(|_| {
                c.tick();
                c.current()
            })
            .collect();
        assert_eq!(seen, vec![1, 2, 0, 1]);
    }

    #[test]
    fn pause_freezes_and_resume_waits_for_next_tick() {
        let mut c = HeroCarousel::new(3, 30.0);
        c.tick();
        c.pause();
        for _ in 0..10 {
            assert!(!c.tick());
        }
        assert_eq!(c.current(), 1);
        c.resume();
        assert_eq!(c.current(), 1);
        assert!(c.tick());
        assert_eq!(c.current(), 2);
    }

    #[test]
    fn single_image_never_advances() {
        let mut c = HeroCarousel::new(1, 30.0);
        assert!(!c.autoplay_active());
        assert!(!c.tick());
        assert_eq!(c.current(), 0);
        let mut empty = HeroCarousel::new(0, 30.0);
        assert!(!empty.tick());
        assert!(!empty.swipe(-100.0));
    }

    #[test]
    fn swipes_respect_threshold_and_ends() {
        let mut c = HeroCarousel::new(3, 30.0);
        assert!(!c.swipe(-29.0));
        assert!(c.swipe(-30.0));
        assert!(c.swipe(-80.0));
        assert_eq!(c.current(), 2);
        assert!(!c.swipe(-80.0));
        assert!(c.swipe(45.0));
        assert_eq!(c.current(), 1);
        c.go_to(0);
        assert!(!c.swipe(200.0));
    }

    #[test]
    fn manual_navigation_does_not_touch_autoplay() {
        let mut c = HeroCarousel::new(4, 30.0);
        c.swipe(-50.0);
        assert!(c.autoplay_active());
        assert!(c.tick());
        assert_eq!(c.current(), 2);
    }

    #[test]
    fn shrinking_the_list_clamps_the_index() {
        let mut c = HeroCarousel::new(5, 30.0);
        c.go_to(4);
        let key = c.timer_key();
        c.set_len(2);
        assert_eq!(c.current(), 1);
        assert_ne!(c.timer_key(), key);
        c.set_len(0);
        assert_eq!(c.current(), 0);
        assert!(!c.go_to(0));
    }
}
