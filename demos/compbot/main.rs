use log::LevelFilter;
use talos::fs::logger;
use vexide::prelude::*;
pub mod hardware;
pub mod opcontrol;

impl Compete for hardware::Robot {
    // No autonomous routine on this robot; the dispatcher still needs one.
    async fn autonomous(&mut self) {}

    async fn driver(&mut self) { opcontrol::opcontrol(self).await; }
}

#[vexide::main]
async fn main(peripherals: Peripherals) {
    logger::init(LevelFilter::Info).expect("Logger init failed");

    let robot = hardware::Robot::default_config(peripherals);

    robot.compete().await;
}
