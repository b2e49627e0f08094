//! Latched driver state.
//!
//! The subsystem latches persist across ticks for the lifetime of the
//! driver-control task and reset when the host restarts it. They are plain
//! fields on [`OpState`] so the update rules can be tested without a
//! connected controller.

use super::input::Buttons;

/// The persistent driver-control latches.
///
/// Updated once per tick from the sampled button levels by [`update`].
/// Each latch is driven by a dedicated set button and clear button; the
/// flipper has no latch and is handled directly in the tick function.
///
/// [`update`]: OpState::update
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OpState {
    /// Whether the intake (and its feed belt) is running.
    pub intake_on:     bool,
    /// Whether the flywheel pair is spinning.
    pub flywheel_on:   bool,
    /// Which flywheel power level is selected: `true` for full, `false`
    /// for reduced. Only updated while the flywheel is on; holds its last
    /// value otherwise.
    pub flywheel_full: bool,
}

impl Default for OpState {
    /// Task-start state: everything off, full flywheel level selected.
    fn default() -> Self {
        Self {
            intake_on:     false,
            flywheel_on:   false,
            flywheel_full: true,
        }
    }
}

impl OpState {
    /// Applies one tick's button levels to the latches.
    ///
    /// Updates are level-triggered: a held button re-asserts its state
    /// every tick, which is idempotent. Each latch checks its set button
    /// before its clear button, so the clear wins when both are held in
    /// the same tick.
    ///
    /// The speed selection is only sampled while the flywheel latch is on
    /// (checked after this tick's flywheel buttons are applied); while the
    /// flywheel is off the selection keeps its last value.
    pub fn update(&mut self, buttons: &Buttons) {
        if buttons.intake_on {
            self.intake_on = true;
        }
        if buttons.intake_off {
            self.intake_on = false;
        }

        if buttons.flywheel_on {
            self.flywheel_on = true;
        }
        if buttons.flywheel_off {
            self.flywheel_on = false;
        }

        if self.flywheel_on {
            if buttons.speed_full {
                self.flywheel_full = true;
            }
            if buttons.speed_low {
                self.flywheel_full = false;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn held(f: impl Fn(&mut Buttons)) -> Buttons {
        let mut buttons = Buttons::default();
        f(&mut buttons);
        buttons
    }

    #[test]
    fn latch_persists_after_release() {
        let mut state = OpState::default();
        state.update(&held(|b| b.intake_on = true));
        assert!(state.intake_on);

        // button released, latch stays set across many ticks
        for _ in 0..10 {
            state.update(&Buttons::default());
            assert!(state.intake_on);
        }

        state.update(&held(|b| b.intake_off = true));
        assert!(!state.intake_on);
    }

    #[test]
    fn repeated_set_is_idempotent() {
        let mut state = OpState::default();
        let set = held(|b| b.flywheel_on = true);
        for _ in 0..5 {
            state.update(&set);
            assert!(state.flywheel_on);
        }
    }

    #[test]
    fn clear_wins_when_both_held() {
        let mut state = OpState::default();
        let both = held(|b| {
            b.intake_on = true;
            b.intake_off = true;
        });
        state.update(&both);
        assert!(!state.intake_on);

        // same order for the flywheel pair
        let both = held(|b| {
            b.flywheel_on = true;
            b.flywheel_off = true;
        });
        state.update(&both);
        assert!(!state.flywheel_on);
    }

    #[test]
    fn speed_ignored_while_flywheel_off() {
        let mut state = OpState::default();
        assert!(state.flywheel_full);

        state.update(&held(|b| b.speed_low = true));
        assert!(state.flywheel_full, "selection must hold while flywheel is off");

        // once on, the selection takes effect
        state.update(&held(|b| {
            b.flywheel_on = true;
            b.speed_low = true;
        }));
        assert!(state.flywheel_on);
        assert!(!state.flywheel_full);

        // and holds its value after the flywheel is latched off again
        state.update(&held(|b| b.flywheel_off = true));
        state.update(&held(|b| b.speed_full = true));
        assert!(!state.flywheel_full);
    }

    #[test]
    fn speed_low_wins_when_both_held() {
        let mut state = OpState::default();
        state.update(&held(|b| {
            b.flywheel_on = true;
            b.speed_full = true;
            b.speed_low = true;
        }));
        assert!(!state.flywheel_full);
    }
}
