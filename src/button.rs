//! An async, debounced push button.

use embassy_rp::gpio::Input;
use embassy_time::Timer;

use crate::shared_constants::BUTTON_DEBOUNCE_DELAY;

/// One of the two selection buttons.
///
/// The pin idles high (pull-up) and a press pulls it low. The start and end
/// of a press can be "noisy" (fluctuations between "pressed" and "unpressed"
/// on the microsecond scale as the physical contacts move from "not
/// touching" through "almost touching" to "touching"). We ignore the pin
/// during that fluctuating window by pausing after each edge; this is called
/// "debouncing", and it keeps one physical press to one event.
pub struct Button {
    inner: Input<'static>,
}

impl Button {
    #[must_use]
    pub fn new(button: Input<'static>) -> Self {
        Self { inner: button }
    }

    /// Waits for one complete press: the button released, then its falling
    /// edge.
    pub async fn wait_for_press(&mut self) {
        // wait out any prior press still being held
        self.inner.wait_for_high().await;
        self.debounce_delay().await;

        // the falling edge is the press
        self.inner.wait_for_falling_edge().await;
        self.debounce_delay().await;
    }

    /// Pause for a predetermined time to let the button's state become consistent.
    async fn debounce_delay(&mut self) {
        Timer::after(BUTTON_DEBOUNCE_DELAY).await;
    }
}
