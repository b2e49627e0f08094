//! The driver-control loop.

use log::info;
use talos::opcontrol::{input::TickInput, state::OpState, tick};
use vexide::prelude::*;

use crate::hardware::Robot;

/// Runs driver control until the task is stopped by the competition
/// dispatcher.
///
/// Every tick: sample the controller, run the control law, write every
/// motor channel, then sleep for the fixed period. Latches start from
/// their defaults each time the task is (re)started.
pub async fn opcontrol(robot: &mut Robot) {
    info!("driver control started");

    let mut state = OpState::default();

    loop {
        let input = TickInput::sample(&robot.controller);
        let command = tick::tick(&mut state, &input);
        robot.apply(&command);

        sleep(tick::TICK_PERIOD).await;
    }
}
