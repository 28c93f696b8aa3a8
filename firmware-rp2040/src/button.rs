//! Debounced reset button.

use embassy_rp::gpio::Input;
use embassy_time::{Duration, Timer};

/// Hold-off after an edge before the pin level is trusted.
const DEBOUNCE: Duration = Duration::from_millis(30);

/// Active-low push button with edge-triggered debouncing.
pub struct ResetButton<'d> {
    pin: Input<'d>,
}

impl<'d> ResetButton<'d> {
    /// Create a new button from an input pin (expects an internal or
    /// external pull-up; pressing pulls the pin low).
    #[must_use]
    pub fn new(pin: Input<'d>) -> Self {
        Self { pin }
    }

    /// Wait for one debounced press.
    ///
    /// Returns after the button has been pressed and released, so a held
    /// button triggers exactly once.
    pub async fn wait_for_press(&mut self) {
        loop {
            self.pin.wait_for_falling_edge().await;
            Timer::after(DEBOUNCE).await;
            if self.pin.is_low() {
                self.pin.wait_for_high().await;
                Timer::after(DEBOUNCE).await;
                return;
            }
            // Bounce shorter than the hold-off; keep waiting.
        }
    }
}
