//! ChoreTracker - Family Chore Tracking Appliance Firmware
//!
//! Eight latching task buttons, each with a status LED, two rows of four
//! displays and two row-select buttons. Holding both row selects for
//! five seconds starts a self-running demo.

#![no_std]
#![no_main]

use defmt::*;
use embassy_executor::Spawner;
use embassy_rp::clocks::RoscRng;
use embassy_time::Timer;
use heapless::Vec;
use static_cell::StaticCell;
use {defmt_rtt as _, panic_probe as _};

use choretracker_core::config::{PinConfig, Settings, COLUMN_COUNT, WIRING};
use choretracker_core::output::output_level_for;
use choretracker_core::system::ChoreTracker;
use choretracker_hal_rp2040::flash::Rp2040FlashStorage;
use choretracker_hal_rp2040::gpio::{RpInput, RpOutput};
use choretracker_hal_rp2040::pins::{PinBank, PinError};

use crate::config::{log_settings_summary, SettingsPersistence};
use crate::tasks::Tracker;

mod config;
mod display;
mod tasks;

/// What each column shows on this appliance
const COLUMN_TITLES: [&str; COLUMN_COUNT] = ["Emma", "Jack", "Weather", "Family"];

// Lives forever so tasks can borrow it
static SETTINGS: StaticCell<Settings> = StaticCell::new();

#[embassy_executor::main]
async fn main(spawner: Spawner) {
    info!("ChoreTracker firmware starting...");

    let p = embassy_rp::init(Default::default());
    let (mut bank, rest) = PinBank::split(p);
    info!("Peripherals initialized");

    let flash = Rp2040FlashStorage::new(rest.flash, rest.dma_ch0);
    let settings: &'static Settings =
        SETTINGS.init(SettingsPersistence::new(flash).load_or_default().await);
    log_settings_summary(settings);

    log_wiring();
    let tracker = match build_tracker(&mut bank, settings) {
        Ok(tracker) => tracker,
        Err(e) => {
            error!("Pin setup failed: {}", e);
            return;
        }
    };
    info!("{} ready", settings.device_name());
    info!("Hold both row selects for 5 seconds to enter demo mode");

    unwrap!(spawner.spawn(tasks::event_log_task(settings.debug_mode())));
    unwrap!(spawner.spawn(tasks::poll_task(tracker)));

    info!("All tasks spawned, firmware running");

    loop {
        Timer::after_secs(60).await;
        trace!("Main loop heartbeat");
    }
}

/// Claim every wired pin and assemble the tracker
fn build_tracker(bank: &mut PinBank, settings: &Settings) -> Result<Tracker, PinError> {
    let task_pins = take_inputs(bank, &WIRING.task_buttons)?;
    let row_pins = take_inputs(bank, &WIRING.row_selects)?;
    let led_pins = take_outputs(bank, &WIRING.task_leds)?;

    let mut tracker = ChoreTracker::new(task_pins, row_pins, led_pins, &WIRING, RoscRng);
    tracker.apply_settings(settings);
    for (column, title) in COLUMN_TITLES.iter().enumerate() {
        tracker.navigator_mut().set_column_title(column, title);
    }
    Ok(tracker)
}

fn take_inputs<const N: usize>(
    bank: &mut PinBank,
    config: &[PinConfig; N],
) -> Result<[RpInput; N], PinError> {
    let mut pins: Vec<RpInput, N> = Vec::new();
    for pin in config {
        let _ = pins.push(bank.take_input(pin.pin, pin.pull_up)?);
    }
    pins.into_array().map_err(|_| PinError::InvalidPin)
}

fn take_outputs<const N: usize>(
    bank: &mut PinBank,
    config: &[PinConfig; N],
) -> Result<[RpOutput; N], PinError> {
    let mut pins: Vec<RpOutput, N> = Vec::new();
    for pin in config {
        // Lit from the first instant: incomplete
        let _ = pins.push(bank.take_output(pin.pin, output_level_for(false))?);
    }
    pins.into_array().map_err(|_| PinError::InvalidPin)
}

fn log_wiring() {
    info!("Task buttons: GPIO {}", WIRING.task_buttons.map(|p| p.pin));
    info!("Task LEDs:    GPIO {}", WIRING.task_leds.map(|p| p.pin));
    info!("Row selects:  GPIO {}", WIRING.row_selects.map(|p| p.pin));
}
