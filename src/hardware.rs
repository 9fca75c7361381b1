use embassy_rp::gpio::{self, Level, Pull};

/// Pin assignments for the beacon board.
pub struct Hardware {
    pub red_led: gpio::Output<'static>,
    pub green_led: gpio::Output<'static>,
    pub next_button: gpio::Input<'static>,
    pub prev_button: gpio::Input<'static>,
}

impl Default for Hardware {
    fn default() -> Self {
        let peripherals: embassy_rp::Peripherals =
            embassy_rp::init(embassy_rp::config::Config::default());

        let red_led = gpio::Output::new(peripherals.PIN_0, Level::Low);
        let green_led = gpio::Output::new(peripherals.PIN_1, Level::Low);

        // Both buttons idle high and signal on the falling edge.
        let next_button = gpio::Input::new(peripherals.PIN_13, Pull::Up);
        let prev_button = gpio::Input::new(peripherals.PIN_14, Pull::Up);

        Self {
            red_led,
            green_led,
            next_button,
            prev_button,
        }
    }
}
