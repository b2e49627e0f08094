//! The per-tick control law.
//!
//! [`tick`] is the pure function at the center of operator control: it
//! takes the persistent latches and one tick's sampled input and returns
//! the power for every motor channel on the robot. No device handles, no
//! I/O, no hidden state.

use std::time::Duration;

use super::{input::TickInput, state::OpState};
use crate::drivetrain::{self, WheelPowers};

/// Loop period of the driver-control task, matching the controller's
/// update rate.
pub const TICK_PERIOD: Duration = Duration::from_millis(20);

/// Intake and feed-belt power while the intake latch is on.
pub const INTAKE_POWER: i32 = -127;

/// Flywheel power at the full level.
pub const FLYWHEEL_FULL_POWER: i32 = 127;

/// Flywheel power at the reduced level.
pub const FLYWHEEL_LOW_POWER: i32 = 90;

/// Flipper power while one of its buttons is held.
pub const FLIPPER_POWER: i32 = 90;

/// Power commands for every motor channel, produced once per tick.
///
/// Paired channels (flywheel, flipper) run opposed so the two motors of
/// each mechanism turn toward each other.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct TickCommand {
    /// The four drive wheels.
    pub wheels:     WheelPowers,
    /// Intake roller.
    pub intake:     i32,
    /// Feed belt behind the intake.
    pub belt:       i32,
    /// First flywheel motor.
    pub flywheel_a: i32,
    /// Second flywheel motor, opposed to the first.
    pub flywheel_b: i32,
    /// First flipper motor.
    pub flipper_a:  i32,
    /// Second flipper motor, opposed to the first.
    pub flipper_b:  i32,
}

/// Runs one tick of the control law.
///
/// Applies the button levels to the latches, then derives every motor
/// power from the updated state and the dead-zoned axes:
///
/// - wheels from the mecanum mixer ([`drivetrain::mix`]);
/// - intake and belt from the intake latch;
/// - the flywheel pair from the flywheel latch and the selected level;
/// - the flipper pair directly from its two buttons, out taking priority,
///   stopped when neither is held.
///
/// # Example
///
/// ```
/// use talos::opcontrol::{input::TickInput, state::OpState, tick::tick};
///
/// let mut state = OpState::default();
/// let command = tick(&mut state, &TickInput::default());
/// assert_eq!(command.intake, 0);
/// ```
pub fn tick(state: &mut OpState, input: &TickInput) -> TickCommand {
    state.update(&input.buttons);

    let wheels = drivetrain::mix(input.axes.left_y, input.axes.left_x, input.axes.right_x);

    let (intake, belt) = if state.intake_on {
        (INTAKE_POWER, INTAKE_POWER)
    } else {
        (0, 0)
    };

    let flywheel = if state.flywheel_on {
        if state.flywheel_full {
            FLYWHEEL_FULL_POWER
        } else {
            FLYWHEEL_LOW_POWER
        }
    } else {
        0
    };

    let flipper = if input.buttons.flip_out {
        FLIPPER_POWER
    } else if input.buttons.flip_in {
        -FLIPPER_POWER
    } else {
        0
    };

    TickCommand {
        wheels,
        intake,
        belt,
        flywheel_a: flywheel,
        flywheel_b: -flywheel,
        flipper_a: flipper,
        flipper_b: -flipper,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::opcontrol::input::{Axes, Buttons, DEADBAND, deadband};

    fn input_with(axes: Axes, f: impl Fn(&mut Buttons)) -> TickInput {
        let mut buttons = Buttons::default();
        f(&mut buttons);
        TickInput { axes, buttons }
    }

    #[test]
    fn neutral_input_commands_nothing() {
        let mut state = OpState::default();
        let command = tick(&mut state, &TickInput::default());
        assert_eq!(command, TickCommand::default());
    }

    #[test]
    fn forward_stick_drives_wheels() {
        // forward push on the left stick after the dead zone
        let axes = Axes {
            left_x:  deadband(0, DEADBAND),
            left_y:  deadband(100, DEADBAND),
            right_x: deadband(0, DEADBAND),
        };
        let mut state = OpState::default();
        let command = tick(&mut state, &input_with(axes, |_| {}));
        assert_eq!(command.wheels.front_right, -50);
        assert_eq!(command.wheels.back_right, -50);
        assert_eq!(command.wheels.front_left, -50);
        assert_eq!(command.wheels.back_left, 50);
    }

    #[test]
    fn intake_runs_until_cleared() {
        let mut state = OpState::default();

        // one press
        let command = tick(&mut state, &input_with(Axes::default(), |b| b.intake_on = true));
        assert_eq!(command.intake, INTAKE_POWER);
        assert_eq!(command.belt, INTAKE_POWER);

        // released: stays on every subsequent tick
        for _ in 0..25 {
            let command = tick(&mut state, &TickInput::default());
            assert_eq!(command.intake, INTAKE_POWER);
            assert_eq!(command.belt, INTAKE_POWER);
        }

        let command = tick(&mut state, &input_with(Axes::default(), |b| b.intake_off = true));
        assert_eq!(command.intake, 0);
        assert_eq!(command.belt, 0);
    }

    #[test]
    fn flywheel_pair_is_opposed() {
        let mut state = OpState::default();
        let command = tick(&mut state, &input_with(Axes::default(), |b| b.flywheel_on = true));
        assert_eq!(command.flywheel_a, FLYWHEEL_FULL_POWER);
        assert_eq!(command.flywheel_b, -FLYWHEEL_FULL_POWER);
    }

    #[test]
    fn flywheel_level_switches_while_on() {
        let mut state = OpState::default();
        tick(&mut state, &input_with(Axes::default(), |b| b.flywheel_on = true));

        let command = tick(&mut state, &input_with(Axes::default(), |b| b.speed_low = true));
        assert_eq!(command.flywheel_a, FLYWHEEL_LOW_POWER);

        let command = tick(&mut state, &input_with(Axes::default(), |b| b.speed_full = true));
        assert_eq!(command.flywheel_a, FLYWHEEL_FULL_POWER);
    }

    #[test]
    fn flipper_is_momentary() {
        let mut state = OpState::default();

        let command = tick(&mut state, &input_with(Axes::default(), |b| b.flip_out = true));
        assert_eq!(command.flipper_a, FLIPPER_POWER);
        assert_eq!(command.flipper_b, -FLIPPER_POWER);

        let command = tick(&mut state, &input_with(Axes::default(), |b| b.flip_in = true));
        assert_eq!(command.flipper_a, -FLIPPER_POWER);
        assert_eq!(command.flipper_b, FLIPPER_POWER);

        // no button, no movement
        let command = tick(&mut state, &TickInput::default());
        assert_eq!(command.flipper_a, 0);
        assert_eq!(command.flipper_b, 0);
    }

    #[test]
    fn flipper_out_wins_when_both_held() {
        let mut state = OpState::default();
        let command = tick(
            &mut state,
            &input_with(Axes::default(), |b| {
                b.flip_out = true;
                b.flip_in = true;
            }),
        );
        assert_eq!(command.flipper_a, FLIPPER_POWER);
    }

    #[test]
    fn drive_and_subsystems_are_independent() {
        let mut state = OpState::default();
        tick(&mut state, &input_with(Axes::default(), |b| b.intake_on = true));

        let axes = Axes {
            left_x:  40,
            left_y:  -80,
            right_x: 25,
        };
        let command = tick(&mut state, &input_with(axes, |_| {}));
        assert_eq!(command.wheels, crate::drivetrain::mix(-80, 40, 25));
        assert_eq!(command.intake, INTAKE_POWER);
    }
}
