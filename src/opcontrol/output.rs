//! Motor-group output helpers.
//!
//! Thin wrappers for writing one power command to a group of motors. A
//! maximum of 8 motors can be driven per group. Failed writes are logged
//! with a warning and otherwise ignored, so a single faulted motor does
//! not take down the control loop.

use heapless::Vec;
use log::warn;
use vexide::prelude::Motor;

use crate::drivetrain::power_to_voltage;

/// Writes one power command to every motor in a group.
///
/// The power is scaled from the -127 to 127 domain to volts with
/// [`power_to_voltage`] before writing.
///
/// # Arguments
///
/// * `motors` - A `heapless::Vec` of motors to drive together.
/// * `power` - The power command, -127 to 127.
///
/// # Example
///
/// ```ignore
/// use talos::opcontrol::output;
///
/// // intake roller and feed belt run as one group
/// output::set_power(heapless::Vec::from_array([&mut intake, &mut belt]), -127);
/// ```
pub fn set_power(motors: Vec<&mut Motor, 8>, power: i32) {
    let voltage = power_to_voltage(power);
    for motor in motors {
        motor.set_voltage(voltage).unwrap_or_else(|e| {
            warn!("Motor Set Voltage Error: {}", e);
        });
    }
}

/// Stops every motor in a group by commanding zero power.
///
/// # Example
///
/// ```ignore
/// use talos::opcontrol::output;
///
/// output::stop(heapless::Vec::from_array([&mut flywheel_a, &mut flywheel_b]));
/// ```
pub fn stop(motors: Vec<&mut Motor, 8>) { set_power(motors, 0); }
