//! Hardware Resource Management
//!
//! Allocates the beacon's pins to the tasks that own them.
//!
//! # Resource Groups
//! - Indicators: dot and dash LEDs, written only by the pattern tick task
//! - Mode Button: push button to ground, read only by the mode button task

use assign_resources::assign_resources;
use embassy_rp::peripherals;

assign_resources! {
    /// Dot (red) and dash (green) indicator LEDs
    indicators: IndicatorResources {
        dot_pin: PIN_2,
        dash_pin: PIN_4,
    },
    /// Message mode push button, active low
    mode_button: ModeButtonResources {
        btn: PIN_16,
    },
}
