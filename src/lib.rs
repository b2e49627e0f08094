//! # Talos
//!
//! Talos is an operator-control library for VEX V5 robots with mecanum
//! drivetrains, built on top of [Vexide](https://vexide.dev). It provides:
//!
//! - **Mecanum Drivetrain**: four-wheel holonomic mixing of forward, strafe,
//!   and rotation stick inputs into independent wheel powers.
//! - **Operator Control**: a pure, testable per-tick pipeline from sampled
//!   sticks and buttons to a complete set of motor commands, with dead-zone
//!   filtering and latched subsystem modes.
//! - **Logging**: a file-based logger for debugging and telemetry.
//!
//! ## Quick Start
//!
//! ```ignore
//! use talos::{
//!     drivetrain::Mecanum,
//!     opcontrol::{input::TickInput, state::OpState, tick},
//! };
//! use vexide::prelude::*;
//!
//! #[vexide::main]
//! async fn main(peripherals: Peripherals) {
//!     let mut drive = Mecanum::new(
//!         Motor::new(peripherals.port_1, Gearset::Green, Direction::Forward),
//!         Motor::new(peripherals.port_2, Gearset::Green, Direction::Forward),
//!         Motor::new(peripherals.port_3, Gearset::Green, Direction::Forward),
//!         Motor::new(peripherals.port_4, Gearset::Green, Direction::Forward),
//!     );
//!
//!     let controller = Controller::new(ControllerId::Primary);
//!     let mut state = OpState::default();
//!     loop {
//!         let input = TickInput::sample(&controller);
//!         let command = tick::tick(&mut state, &input);
//!         drive.apply(&command.wheels);
//!         sleep(tick::TICK_PERIOD).await;
//!     }
//! }
//! ```
//!
//! ## Modules
//!
//! - [`drivetrain`]: Mecanum chassis control and the wheel-power mixer.
//! - [`opcontrol`]: The driver-control pipeline: input sampling, latched
//!   state, the per-tick update, and motor-group output.
//! - [`fs`]: Filesystem utilities including logging.

/// Mecanum drivetrain control module.
///
/// Provides the [`Mecanum`](drivetrain::Mecanum) struct for four-wheel
/// holonomic chassis and [`mix`](drivetrain::mix), the pure function that
/// combines forward, strafe, and rotation inputs into wheel powers.
pub mod drivetrain;

/// Filesystem utilities module.
///
/// Contains logging functionality for recording robot telemetry and debug
/// information to files on the V5 Brain's SD card.
pub mod fs;

/// Operator control module.
///
/// The per-tick driver-control pipeline: joystick sampling with dead-zone
/// filtering, level-triggered subsystem latches, a pure tick function
/// producing motor commands, and helpers for applying those commands to
/// motor groups.
pub mod opcontrol;
