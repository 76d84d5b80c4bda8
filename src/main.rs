//! Morse beacon firmware entry point
//!
//! Sends SOS or OK on two LEDs and switches message on a button press.
//! The pattern tick task runs on a high-priority interrupt executor, the
//! button task on the thread executor.

#![no_std]
#![no_main]

use crate::task::{mode_button::mode_button, pattern_tick::pattern_tick};
use embassy_executor::{InterruptExecutor, Spawner};
use embassy_rp::block::ImageDef;
use embassy_rp::config::Config;
use embassy_rp::interrupt;
use embassy_rp::interrupt::{InterruptExt, Priority};
use system::resources::{AssignedResources, IndicatorResources, ModeButtonResources};
use {defmt_rtt as _, panic_probe as _};

/// Firmware image type for bootloader
#[link_section = ".start_block"]
#[used]
pub static IMAGE_DEF: ImageDef = ImageDef::secure_exe();

/// System core modules
mod system;
/// Task implementations
mod task;

/// Executor for the pattern tick, preempting the thread executor
static EXECUTOR_HIGH: InterruptExecutor = InterruptExecutor::new();

#[interrupt]
unsafe fn SWI_IRQ_1() {
    EXECUTOR_HIGH.on_interrupt()
}

/// Firmware entry point
#[embassy_executor::main]
async fn main(spawner: Spawner) {
    let p = embassy_rp::init(Config::default());

    // Split the resources into separate groups for each task.
    let r = split_resources!(p);

    defmt::info!("Beacon starting");

    // Tick task at higher priority than the button task
    interrupt::SWI_IRQ_1.set_priority(Priority::P2);
    let high_spawner = EXECUTOR_HIGH.start(interrupt::SWI_IRQ_1);
    high_spawner.spawn(pattern_tick(r.indicators)).unwrap();

    spawner.spawn(mode_button(r.mode_button)).unwrap();
}
