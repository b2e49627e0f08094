//! Operator control for driver control periods.
//!
//! This module implements the robot's driver-control pipeline. Once per
//! fixed tick it samples the controller, filters stick noise through a dead
//! zone, updates the latched subsystem state, and produces a complete set
//! of motor power commands.
//!
//! # Pipeline
//!
//! - **Sample** ([`input`]): read sticks and buttons into a [`TickInput`],
//!   with the dead zone already applied to the axes.
//! - **Update** ([`state`], [`tick`]): feed the input and the persistent
//!   [`OpState`] latches through the pure [`tick::tick`] function to get a
//!   [`TickCommand`].
//! - **Write** ([`output`]): apply the commanded powers to the motors,
//!   unconditionally, every tick.
//!
//! The update step is free of device types, so the whole control law can be
//! unit tested hostside without a connected controller.
//!
//! # Example
//!
//! ```ignore
//! use talos::opcontrol::{input::TickInput, state::OpState, tick};
//! use vexide::prelude::*;
//!
//! let controller = Controller::new(ControllerId::Primary);
//! let mut state = OpState::default();
//!
//! loop {
//!     let input = TickInput::sample(&controller);
//!     let command = tick::tick(&mut state, &input);
//!     robot.apply(&command);
//!     sleep(tick::TICK_PERIOD).await;
//! }
//! ```
//!
//! [`TickInput`]: input::TickInput
//! [`OpState`]: state::OpState
//! [`TickCommand`]: tick::TickCommand

/// Controller sampling and dead-zone filtering.
///
/// Provides [`TickInput`](input::TickInput), the per-tick snapshot of
/// stick axes and button levels.
pub mod input;

/// Motor-group output helpers.
///
/// Applies power commands to one or more motors at a time.
pub mod output;

/// Latched driver state.
///
/// Provides [`OpState`](state::OpState), the persistent subsystem latches,
/// and their level-triggered button update rules.
pub mod state;

/// The per-tick control law.
///
/// Provides [`tick`](tick::tick), the pure function from latched state and
/// sampled input to a full [`TickCommand`](tick::TickCommand).
pub mod tick;
