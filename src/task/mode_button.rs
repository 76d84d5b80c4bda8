//! Mode button handling
//!
//! Switches the beacon between its two messages on each button press.

use crate::system::mode;
use crate::system::resources::ModeButtonResources;
use defmt::info;
use embassy_rp::gpio::{Input, Pull};
use embassy_time::{Duration, Timer};

/// Button debounce delay (ms)
const DEBOUNCE_DURATION: Duration = Duration::from_millis(30);

/// Mode button handler
///
/// The button pulls the pin to ground, so a press is a falling edge. One
/// toggle per press; the task re-arms only after the button is released.
#[embassy_executor::task]
pub async fn mode_button(r: ModeButtonResources) {
    let mut btn = Input::new(r.btn, Pull::Up);

    loop {
        btn.wait_for_falling_edge().await;
        Timer::after(DEBOUNCE_DURATION).await;

        if btn.is_low() {
            let message = mode::toggle();
            info!("Mode button pressed, next message {}", message);
        }

        btn.wait_for_high().await;
        Timer::after(DEBOUNCE_DURATION).await;
    }
}
