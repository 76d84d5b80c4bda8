//! Indicator LED Module
//!
//! Drives the dot (red) and dash (green) LEDs for the pattern engine.
use crate::system::resources::IndicatorResources;
use beacon_pattern::{Indicator, IndicatorSink};
use embassy_rp::gpio::{Level, Output};

/// The two indicator LEDs, both off after construction
pub struct LedPair {
    dot: Output<'static>,
    dash: Output<'static>,
}

impl LedPair {
    pub fn new(r: IndicatorResources) -> Self {
        Self {
            dot: Output::new(r.dot_pin, Level::Low),
            dash: Output::new(r.dash_pin, Level::Low),
        }
    }
}

impl IndicatorSink for LedPair {
    fn set_level(&mut self, indicator: Indicator, on: bool) {
        let led = match indicator {
            Indicator::Dot => &mut self.dot,
            Indicator::Dash => &mut self.dash,
        };
        led.set_level(Level::from(on));
    }
}
