//! Guards for async work that may outlive the view that started it.
//!
//! Fetches are never aborted. Instead every async task carries a guard and
//! checks it right before writing its result into view state.

use std::sync::atomic::{AtomicBool, AtomicU64, Ordering};
use std::sync::Arc;

/// Owned by a view for as long as it is mounted.
#[derive(Debug)]
pub struct LifecycleToken {
    alive: Arc<AtomicBool>,
}

impl LifecycleToken {
    pub fn new() -> Self {
        Self {
            alive: Arc::new(AtomicBool::new(true)),
        }
    }

    pub fn guard(&self) -> LifecycleGuard {
        LifecycleGuard {
            alive: self.alive.clone(),
        }
    }

    /// Mark the view as gone. Idempotent.
    pub fn end(&self) {
        self.alive.store(false, Ordering::SeqCst);
    }
}

impl Default for LifecycleToken {
    fn default() -> Self {
        Self::new()
    }
}

impl Drop for LifecycleToken {
    fn drop(&mut self) {
        self.end();
    }
}

/// Cheap clone handed to async tasks.
#[derive(Debug, Clone)]
pub struct LifecycleGuard {
    alive: Arc<AtomicBool>,
}

impl LifecycleGuard {
    pub fn is_alive(&self) -> bool {
        self.alive.load(Ordering::SeqCst)
    }

    /// Run `apply` only while the owning view is alive. Returns whether it ran.
    pub fn apply<F: FnOnce()>(&self, apply: F) -> bool {
        if self.is_alive() {
            apply();
            true
        } else {
            false
        }
    }
}

/// Restartable timer identity.
///
/// Each restart of a periodic task takes a fresh ticket; a loop holding an
/// older ticket stops at its next wake-up.
#[derive(Debug, Clone, Default)]
pub struct TimerGeneration {
    current: Arc<AtomicU64>,
}

impl TimerGeneration {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn restart(&self) -> TimerTicket {
        let generation = self.current.fetch_add(1, Ordering::SeqCst) + 1;
        TimerTicket {
            generation,
            current: self.current.clone(),
        }
    }

    /// Invalidate every outstanding ticket without starting a new one.
    pub fn stop(&self) {
        self.current.fetch_add(1, Ordering::SeqCst);
    }
}

#[derive(Debug, Clone)]
pub struct TimerTicket {
    generation: u64,
    current: Arc<AtomicU64>,
}

impl TimerTicket {
    pub fn is_current(&self) -> bool {
        self.current.load(Ordering::SeqCst) == self.generation
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn guard_blocks_writes_after_end() {
        let token = LifecycleToken::new();
        let guard = token.guard();
        let mut writes = 0;
        assert!(guard.apply(|| writes += 1));
        token.end();
        assert!(!guard.apply(|| writes += 1));
        assert_eq!(writes, 1);
    }

    #[test]
    fn dropping_the_token_ends_the_lifecycle() {
        let guard = {
            let token = LifecycleToken::new();
            token.guard()
        };
        assert!(!guard.is_alive());
    }

    #[test]
    fn restart_invalidates_previous_tickets() {
        let timers = TimerGeneration::new();
        let first = timers.restart();
        assert!(first.is_current());
        let second = timers.restart();
        assert!(!first.is_current());
        assert!(second.is_current());
        timers.stop();
        assert!(!second.is_current());
    }
}
