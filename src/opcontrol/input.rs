//! Controller sampling and dead-zone filtering.
//!
//! Reads the primary controller once per tick into a plain-data
//! [`TickInput`]: three stick axes scaled to the signed -127 to 127 power
//! domain with the dead zone applied, and the button levels the control law
//! consumes.
//!
//! A failed controller read logs a warning and substitutes a neutral state
//! (centered sticks, released buttons), so a disconnected controller
//! commands no movement.

use log::warn;
use vexide::{controller::ControllerState, prelude::Controller};

use crate::drivetrain::MAX_POWER;

/// Stick magnitudes at or below this value read as exactly zero.
pub const DEADBAND: i32 = 15;

/// Applies a symmetric dead zone to a single axis value.
///
/// Values with magnitude at or below `threshold` become exactly zero;
/// anything larger passes through unchanged. No smoothing or rescaling.
///
/// # Example
///
/// ```
/// use talos::opcontrol::input::deadband;
///
/// assert_eq!(deadband(15, 15), 0);
/// assert_eq!(deadband(16, 15), 16);
/// ```
pub fn deadband(value: i32, threshold: i32) -> i32 {
    if value.abs() > threshold { value } else { 0 }
}

/// Scales a unit-interval stick reading to the -127 to 127 power domain.
///
/// Truncates toward zero, matching integer joystick hardware.
pub fn axis_power(unit: f64) -> i32 { (unit * MAX_POWER as f64) as i32 }

/// Dead-zoned stick axes for one tick, in the -127 to 127 power domain.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Axes {
    /// Left stick X: strafe input.
    pub left_x:  i32,
    /// Left stick Y: forward/backward input.
    pub left_y:  i32,
    /// Right stick X: rotation input.
    pub right_x: i32,
}

/// Button levels for one tick.
///
/// These are levels, not edges: a held button reads `true` on every tick it
/// stays down.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Buttons {
    /// R1: latch the intake on.
    pub intake_on:    bool,
    /// R2: latch the intake off.
    pub intake_off:   bool,
    /// L1: latch the flywheel on.
    pub flywheel_on:  bool,
    /// L2: latch the flywheel off.
    pub flywheel_off: bool,
    /// D-pad Up: select the full flywheel power level.
    pub speed_full:   bool,
    /// D-pad Down: select the reduced flywheel power level.
    pub speed_low:    bool,
    /// A: run the flipper outward while held.
    pub flip_out:     bool,
    /// B: run the flipper inward while held.
    pub flip_in:      bool,
}

/// Everything the control law reads in one tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct TickInput {
    pub axes:    Axes,
    pub buttons: Buttons,
}

impl TickInput {
    /// Samples the controller into a `TickInput`.
    ///
    /// Axes are scaled to the power domain and passed through
    /// [`deadband`] with [`DEADBAND`]; buttons are read as levels.
    ///
    /// # Example
    ///
    /// ```ignore
    /// use talos::opcontrol::input::TickInput;
    /// use vexide::prelude::*;
    ///
    /// let controller = Controller::new(ControllerId::Primary);
    /// let input = TickInput::sample(&controller);
    /// ```
    pub fn sample(controller: &Controller) -> Self {
        let state = controller.state().unwrap_or_else(|e| {
            warn!("Controller State Error: {}", e);
            ControllerState::default()
        });

        Self {
            axes:    Axes {
                left_x:  deadband(axis_power(state.left_stick.x()), DEADBAND),
                left_y:  deadband(axis_power(state.left_stick.y()), DEADBAND),
                right_x: deadband(axis_power(state.right_stick.x()), DEADBAND),
            },
            buttons: Buttons {
                intake_on:    state.button_r1.is_pressed(),
                intake_off:   state.button_r2.is_pressed(),
                flywheel_on:  state.button_l1.is_pressed(),
                flywheel_off: state.button_l2.is_pressed(),
                speed_full:   state.button_up.is_pressed(),
                speed_low:    state.button_down.is_pressed(),
                flip_out:     state.button_a.is_pressed(),
                flip_in:      state.button_b.is_pressed(),
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn deadband_at_threshold_is_zero() {
        assert_eq!(deadband(DEADBAND, DEADBAND), 0);
        assert_eq!(deadband(-DEADBAND, DEADBAND), 0);
        assert_eq!(deadband(0, DEADBAND), 0);
    }

    #[test]
    fn deadband_above_threshold_passes_through() {
        assert_eq!(deadband(DEADBAND + 1, DEADBAND), DEADBAND + 1);
        assert_eq!(deadband(-DEADBAND - 1, DEADBAND), -DEADBAND - 1);
        assert_eq!(deadband(127, DEADBAND), 127);
        assert_eq!(deadband(-127, DEADBAND), -127);
    }

    #[test]
    fn axis_power_scales_and_truncates() {
        assert_eq!(axis_power(1.0), 127);
        assert_eq!(axis_power(-1.0), -127);
        assert_eq!(axis_power(0.0), 0);
        // 0.5 * 127 = 63.5 truncates to 63, both signs toward zero
        assert_eq!(axis_power(0.5), 63);
        assert_eq!(axis_power(-0.5), -63);
    }
}
