//! A two-LED Morse beacon for the Raspberry Pi Pico.
//!
//! Plays the preset message list on the red/green LEDs. The two buttons move
//! to the following or preceding message once the one in progress has
//! finished playing.
#![no_std]
#![no_main]

use defmt::info;
use defmt_rtt as _;
use embassy_executor::Spawner;
use embassy_time::Timer;
use morse_beacon::{
    Beacon, BeaconStatic, Button, Hardware, LightDriver, Never, Result, MESSAGES, ONE_DAY,
};
use panic_probe as _;

#[embassy_executor::main]
pub async fn main(spawner: Spawner) -> ! {
    // If it returns, something went wrong.
    let err = inner_main(spawner).await.unwrap_err();
    panic!("{err}");
}

async fn inner_main(spawner: Spawner) -> Result<Never> {
    static BEACON: BeaconStatic = Beacon::new_static(MESSAGES);

    let hardware = Hardware::default();
    let _beacon = Beacon::new(
        &BEACON,
        LightDriver::new(hardware.red_led, hardware.green_led),
        Button::new(hardware.next_button),
        Button::new(hardware.prev_button),
        spawner,
    )?;
    info!("beacon running, {} messages", MESSAGES.len());

    // the beacon runs in its own tasks; nothing left to do here
    loop {
        Timer::after(ONE_DAY).await;
    }
}
