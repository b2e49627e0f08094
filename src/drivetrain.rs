//! Mecanum drivetrain control.
//!
//! This module provides the `Mecanum` struct for controlling robots with
//! four independently-driven mecanum wheels, and [`mix`], the pure function
//! that combines forward, strafe, and rotation inputs into four wheel
//! powers.
//!
//! # Power Domain
//!
//! Wheel powers are expressed in the signed joystick range of -127 to 127.
//! [`Mecanum::apply`] scales powers linearly to the motor voltage range
//! when writing to the motors.
//!
//! # Example
//!
//! ```ignore
//! use talos::drivetrain::{Mecanum, mix};
//! use vexide::prelude::*;
//!
//! let mut drive = Mecanum::new(
//!     Motor::new(peripherals.port_1, Gearset::Green, Direction::Forward),
//!     Motor::new(peripherals.port_2, Gearset::Green, Direction::Forward),
//!     Motor::new(peripherals.port_3, Gearset::Green, Direction::Forward),
//!     Motor::new(peripherals.port_4, Gearset::Green, Direction::Forward),
//! );
//!
//! // In your control loop:
//! let wheels = mix(forward, strafe, rotate);
//! drive.apply(&wheels);
//! ```

use log::warn;
use vexide::{prelude::Motor, smart::motor::BrakeMode};

/// Maximum magnitude of a joystick axis or wheel power command.
pub const MAX_POWER: i32 = 127;

/// Nominal motor voltage corresponding to full power.
pub const MAX_VOLTAGE: f64 = 12.0;

/// Power commands for the four wheels of a mecanum chassis.
///
/// Values are in the -127 to 127 power domain. The mixer does not clamp:
/// with large combined inputs a wheel command can exceed the nominal range,
/// in which case the motor's own voltage saturation applies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct WheelPowers {
    pub front_left:  i32,
    pub front_right: i32,
    pub back_left:   i32,
    pub back_right:  i32,
}

/// Mixes forward, strafe, and rotation inputs into four wheel powers.
///
/// This is the conventional mecanum linear combination: each wheel receives
/// a signed sum of the three inputs, halved to keep commands near the power
/// range. Division is integer division, truncating toward zero.
///
/// The function is stateless and odd-symmetric: negating all three inputs
/// negates all four outputs.
///
/// # Arguments
///
/// * `forward` - Forward/backward input (left stick Y), -127 to 127.
/// * `strafe` - Sideways input (left stick X), -127 to 127.
/// * `rotate` - Rotation input (right stick X), -127 to 127.
///
/// # Example
///
/// ```
/// use talos::drivetrain::mix;
///
/// let wheels = mix(100, 0, 0);
/// assert_eq!(wheels.front_right, -50);
/// ```
pub fn mix(forward: i32, strafe: i32, rotate: i32) -> WheelPowers {
    WheelPowers {
        front_right: -(forward - rotate - strafe) / 2,
        back_right:  -(forward - rotate + strafe) / 2,
        front_left:  -(forward + rotate + strafe) / 2,
        back_left:   (forward + rotate - strafe) / 2,
    }
}

/// Scales a power command in the -127 to 127 domain to motor volts.
///
/// Commands beyond the nominal power range map to voltages beyond the
/// nominal 12 V and are saturated by the motor driver.
pub fn power_to_voltage(power: i32) -> f64 { power as f64 * MAX_VOLTAGE / MAX_POWER as f64 }

/// A mecanum drivetrain controller.
///
/// Owns the four wheel motors of a mecanum chassis and applies
/// [`WheelPowers`] commands to them. Motors on the two sides of the chassis
/// typically need opposite spin directions; configure motor directions
/// when creating the motors.
///
/// # Example
///
/// ```ignore
/// let mut drive = Mecanum::new(front_left, front_right, back_left, back_right);
/// drive.apply(&mix(100, 0, 0));
/// ```
pub struct Mecanum {
    /// Front-left wheel motor.
    pub front_left:  Motor,
    /// Front-right wheel motor.
    pub front_right: Motor,
    /// Back-left wheel motor.
    pub back_left:   Motor,
    /// Back-right wheel motor.
    pub back_right:  Motor,
}

impl Mecanum {
    /// Creates a new drivetrain from the four wheel motors.
    ///
    /// # Examples
    ///
    /// ```ignore
    /// let drive = Mecanum::new(
    ///     Motor::new(peripherals.port_1, Gearset::Green, Direction::Forward),
    ///     Motor::new(peripherals.port_2, Gearset::Green, Direction::Forward),
    ///     Motor::new(peripherals.port_3, Gearset::Green, Direction::Forward),
    ///     Motor::new(peripherals.port_4, Gearset::Green, Direction::Forward),
    /// );
    /// ```
    pub fn new(front_left: Motor, front_right: Motor, back_left: Motor, back_right: Motor) -> Self {
        Self {
            front_left,
            front_right,
            back_left,
            back_right,
        }
    }

    /// Writes a set of wheel powers to the four motors.
    ///
    /// Powers are scaled to volts with [`power_to_voltage`]. Writes happen
    /// unconditionally every call, even when values are unchanged. A failed
    /// write is logged and otherwise ignored.
    pub fn apply(&mut self, wheels: &WheelPowers) {
        for (motor, power) in [
            (&mut self.front_left, wheels.front_left),
            (&mut self.front_right, wheels.front_right),
            (&mut self.back_left, wheels.back_left),
            (&mut self.back_right, wheels.back_right),
        ] {
            motor.set_voltage(power_to_voltage(power)).unwrap_or_else(|e| {
                warn!("Motor Set Voltage Error: {}", e);
            });
        }
    }

    /// Stops all four wheels by commanding zero power.
    pub fn stop(&mut self) { self.apply(&WheelPowers::default()); }

    /// Sets the brake mode for all motors in the drivetrain.
    ///
    /// The brake mode determines how motors behave when no voltage is
    /// applied:
    ///
    /// - [`BrakeMode::Coast`]: Motors spin freely.
    /// - [`BrakeMode::Brake`]: Motors actively resist rotation.
    /// - [`BrakeMode::Hold`]: Motors actively hold their position.
    pub fn set_brakemode(&mut self, brakemode: BrakeMode) {
        for motor in [
            &mut self.front_left,
            &mut self.front_right,
            &mut self.back_left,
            &mut self.back_right,
        ] {
            let _ = motor.brake(brakemode);
        }
    }
}
