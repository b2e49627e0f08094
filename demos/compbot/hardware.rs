//! Hardware configuration for the competition robot.
//!
//! One place for every port assignment, gearset, and spin direction, plus
//! the glue that fans a [`TickCommand`] out to the physical motors.

use talos::{
    drivetrain::Mecanum,
    opcontrol::{output, tick::TickCommand},
};
use vexide::prelude::*;

/// The competition robot: controller, drivetrain, and subsystem motors.
pub struct Robot {
    pub controller: Controller,
    pub drive:      Mecanum,
    pub intake:     Motor,
    pub belt:       Motor,
    pub flywheel_a: Motor,
    pub flywheel_b: Motor,
    pub flipper_a:  Motor,
    pub flipper_b:  Motor,
}

impl Robot {
    /// Builds the robot with its standard port map.
    ///
    /// Wheel directions are configured so a positive mixer output spins
    /// the wheel toward the robot's front; the subsystem pairs are left
    /// forward and opposed in software.
    pub fn default_config(peripherals: Peripherals) -> Self {
        Self {
            controller: peripherals.primary_controller,
            drive:      Mecanum::new(
                Motor::new(peripherals.port_11, Gearset::Green, Direction::Forward),
                Motor::new(peripherals.port_20, Gearset::Green, Direction::Reverse),
                Motor::new(peripherals.port_12, Gearset::Green, Direction::Forward),
                Motor::new(peripherals.port_19, Gearset::Green, Direction::Reverse),
            ),
            intake:     Motor::new(peripherals.port_1, Gearset::Green, Direction::Forward),
            belt:       Motor::new(peripherals.port_2, Gearset::Green, Direction::Forward),
            flywheel_a: Motor::new(peripherals.port_3, Gearset::Blue, Direction::Forward),
            flywheel_b: Motor::new(peripherals.port_4, Gearset::Blue, Direction::Forward),
            flipper_a:  Motor::new(peripherals.port_5, Gearset::Red, Direction::Forward),
            flipper_b:  Motor::new(peripherals.port_6, Gearset::Red, Direction::Forward),
        }
    }

    /// Writes one tick's command to every motor channel.
    ///
    /// All channels are written every call, whether or not the values
    /// changed since the last tick.
    pub fn apply(&mut self, command: &TickCommand) {
        self.drive.apply(&command.wheels);

        for (motor, power) in [
            (&mut self.intake, command.intake),
            (&mut self.belt, command.belt),
            (&mut self.flywheel_a, command.flywheel_a),
            (&mut self.flywheel_b, command.flywheel_b),
            (&mut self.flipper_a, command.flipper_a),
            (&mut self.flipper_b, command.flipper_b),
        ] {
            output::set_power(heapless::Vec::from_array([motor]), power);
        }
    }
}
