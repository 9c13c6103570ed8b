//! Hold-to-repeat timing for the step buttons.
//!
//! Pure timing logic, fed with the frame clock so it stays testable without
//! a UI: one step fires on press, then repeats after an initial delay.

use spin_core::SpinId;

/// Which direction a step button points.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum StepDir {
    Up,
    Down,
}

const INITIAL_DELAY: f64 = 0.40;
const REPEAT_INTERVAL: f64 = 0.08;

#[derive(Clone, Copy, Debug)]
struct ArmedRepeat {
    id: SpinId,
    dir: StepDir,
    next_at: f64,
}

/// Tracks the one step button currently held, if any.
#[derive(Clone, Copy, Debug, Default)]
pub(crate) struct RepeatClock {
    armed: Option<ArmedRepeat>,
}

impl RepeatClock {
    /// Called each frame a step button is held down.
    ///
    /// Returns how many steps fire this frame: one on the press itself,
    /// none during the initial delay, then one per elapsed repeat interval.
    pub(crate) fn held(&mut self, id: SpinId, dir: StepDir, now: f64) -> u32 {
        match self.armed {
            Some(armed) if armed.id == id && armed.dir == dir => {
                let mut fired = 0;
                let mut next_at = armed.next_at;
                while now >= next_at {
                    fired += 1;
                    next_at += REPEAT_INTERVAL;
                }
                self.armed = Some(ArmedRepeat { id, dir, next_at });
                fired
            }
            _ => {
                self.armed = Some(ArmedRepeat {
                    id,
                    dir,
                    next_at: now + INITIAL_DELAY,
                });
                1
            }
        }
    }

    /// Called when the button for `(id, dir)` is no longer held.
    pub(crate) fn released(&mut self, id: SpinId, dir: StepDir) {
        if let Some(armed) = self.armed
            && armed.id == id
            && armed.dir == dir
        {
            self.armed = None;
        }
    }

    /// Returns `true` while any button is held (the view keeps repainting).
    pub(crate) fn is_armed(&self) -> bool {
        self.armed.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn press_fires_immediately() {
        let mut clock = RepeatClock::default();
        let id = SpinId::from_raw(1);

        assert_eq!(clock.held(id, StepDir::Up, 0.0), 1);
        assert!(clock.is_armed());
    }

    #[test]
    fn no_repeat_during_the_initial_delay() {
        let mut clock = RepeatClock::default();
        let id = SpinId::from_raw(1);

        clock.held(id, StepDir::Up, 0.0);
        assert_eq!(clock.held(id, StepDir::Up, 0.1), 0);
        assert_eq!(clock.held(id, StepDir::Up, 0.39), 0);
    }

    #[test]
    fn repeats_after_the_delay_at_the_repeat_interval() {
        let mut clock = RepeatClock::default();
        let id = SpinId::from_raw(1);

        clock.held(id, StepDir::Up, 0.0);
        assert_eq!(clock.held(id, StepDir::Up, 0.41), 1);
        assert_eq!(clock.held(id, StepDir::Up, 0.45), 0);
        assert_eq!(clock.held(id, StepDir::Up, 0.50), 1);
    }

    #[test]
    fn a_long_stall_fires_catch_up_steps() {
        let mut clock = RepeatClock::default();
        let id = SpinId::from_raw(1);

        clock.held(id, StepDir::Up, 0.0);
        // 0.40 + 2 * 0.08 <= 0.57 < 0.40 + 3 * 0.08
        assert_eq!(clock.held(id, StepDir::Up, 0.57), 3);
    }

    #[test]
    fn release_disarms() {
        let mut clock = RepeatClock::default();
        let id = SpinId::from_raw(1);

        clock.held(id, StepDir::Up, 0.0);
        clock.released(id, StepDir::Up);
        assert!(!clock.is_armed());

        // The next press starts a fresh cycle.
        assert_eq!(clock.held(id, StepDir::Up, 1.0), 1);
    }

    #[test]
    fn switching_buttons_rearms() {
        let mut clock = RepeatClock::default();
        let id = SpinId::from_raw(1);

        clock.held(id, StepDir::Up, 0.0);
        // Holding the other button fires immediately and takes over.
        assert_eq!(clock.held(id, StepDir::Down, 0.1), 1);
        // Releasing the old button must not disarm the new one.
        clock.released(id, StepDir::Up);
        assert!(clock.is_armed());
    }
}
