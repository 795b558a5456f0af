//! Poll task
//!
//! Runs one tracker tick every poll interval, forwarding events to the
//! event log task and logging demo stats itself.

use defmt::*;
use embassy_rp::clocks::RoscRng;
use embassy_time::{Duration, Instant, Ticker};

use choretracker_core::config::POLL_INTERVAL_MS;
use choretracker_core::demo::DemoMode;
use choretracker_core::system::{ChoreTracker, Event};
use choretracker_hal_rp2040::gpio::{RpInput, RpOutput};

use super::event_log::EVENTS;
use crate::display::LogRenderer;

/// The tracker as wired on this board
pub type Tracker = ChoreTracker<RpInput, RpOutput, RoscRng>;

#[embassy_executor::task]
pub async fn poll_task(tracker: Tracker) {
    info!("Poll task started");

    let mut tracker = tracker;
    let mut display = LogRenderer::new();
    let mut ticker = Ticker::every(Duration::from_millis(POLL_INTERVAL_MS));
    let start = Instant::now();

    loop {
        let now_ms = start.elapsed().as_millis();
        let report = tracker.tick(now_ms, &mut display);

        for event in report.events() {
            if *event == Event::DemoStats {
                log_demo_stats(tracker.demo(), now_ms, display.frames());
                continue;
            }
            if EVENTS.try_send(*event).is_err() {
                warn!("Event queue full, dropped {}", event);
            }
        }

        ticker.next().await;
    }
}

fn log_demo_stats(demo: &DemoMode, now_ms: u64, frames: u32) {
    let content = demo.content();

    info!("=== Demo stats ===");
    for (index, person) in content.people().iter().enumerate() {
        info!(
            "{}: {}/{} ({=f32}%)",
            person.name,
            person.completed_count(),
            person.total_count(),
            content.completion_percentage(index)
        );
    }
    let weather = content.weather();
    info!(
        "Weather: {} {}C, {}",
        weather.condition, weather.temperature_c, weather.description
    );
    info!("Demo running {}s, {} frames drawn", demo.runtime_ms(now_ms) / 1000, frames);
}
