//! Pattern Tick Module
//!
//! Advances the pattern engine once per tick and writes both indicator LEDs.
//! Runs on the high-priority interrupt executor so the tick is not delayed by
//! the button task.
use crate::system::indicator::LedPair;
use crate::system::mode;
use crate::system::resources::IndicatorResources;
use beacon_pattern::{Message, PatternEngine, PatternState, TICK_PERIOD_MS};
use defmt::{debug, info};
use embassy_time::{Duration, Ticker};

/// Interval between two pattern steps
const TICK_PERIOD: Duration = Duration::from_millis(TICK_PERIOD_MS);

/// Pattern tick task
///
/// Owns the engine and the LEDs; nothing else writes the indicators.
#[embassy_executor::task]
pub async fn pattern_tick(r: IndicatorResources) {
    let mut leds = LedPair::new(r);
    let mut engine = PatternEngine::new();
    let mut ticker = Ticker::every(TICK_PERIOD);

    let selector = mode::selector();
    info!("Pattern engine started, message {}", selector.current());

    loop {
        ticker.next().await;

        let previous = engine.state();
        engine.tick(selector, &mut leds);

        if engine.state() != previous {
            log_boundary(engine.state());
        }
    }
}

/// Logs the start and end of each message
fn log_boundary(state: PatternState) {
    match state {
        PatternState::DotRun1 => debug!("Sending {}", Message::Sos),
        PatternState::LongDashRun => debug!("Sending {}", Message::Ok),
        PatternState::Break => debug!("Message complete"),
        _ => (),
    }
}
