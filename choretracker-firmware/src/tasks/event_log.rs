//! Event log task
//!
//! Logs tracker events at `info` in debug mode, otherwise at `debug`.

use defmt::*;
use embassy_sync::blocking_mutex::raw::CriticalSectionRawMutex;
use embassy_sync::channel::Channel;

use choretracker_core::system::Event;

/// Events waiting to be logged
pub static EVENTS: Channel<CriticalSectionRawMutex, Event, 32> = Channel::new();

macro_rules! event_log {
    ($verbose:expr, $($arg:tt)*) => {
        if $verbose {
            info!($($arg)*)
        } else {
            debug!($($arg)*)
        }
    };
}

#[embassy_executor::task]
pub async fn event_log_task(verbose: bool) {
    info!("Event log task started");

    loop {
        match EVENTS.receive().await {
            Event::TaskChanged { channel, completed } => event_log!(
                verbose,
                "Task button {} -> {}",
                channel,
                if completed { "complete" } else { "incomplete" }
            ),
            Event::ColumnSelected { row, column } => {
                event_log!(verbose, "Row {} -> column {}", row, column)
            }
            Event::TitleExpired { row } => event_log!(verbose, "Row {} back to content", row),
            Event::HoldStarted => info!("Demo activation: holding both row selects..."),
            Event::HoldCancelled => info!("Demo activation cancelled, buttons released"),
            Event::DemoEntered => info!("Entering demo mode; press any task button to exit"),
            Event::DemoExited => info!("Exiting demo mode"),
            Event::DemoStats => {}
            Event::RenderFailed(e) => warn!("Render failed: {}", e),
        }
    }
}
