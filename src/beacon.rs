//! The beacon device: the tick-driven playback loop plus one watcher task
//! per selection button.

use defmt::info;
use embassy_executor::Spawner;
use embassy_time::Ticker;

use crate::button::Button;
use crate::light_driver::LightDriver;
use crate::message_set::MessageSet;
use crate::selector::Selector;
use crate::shared_constants::TICK_INTERVAL;
use crate::signal_engine::SignalEngine;
use crate::Result;

/// A device abstraction for the two-LED Morse beacon.
///
/// Construction spawns three Embassy tasks: the playback loop and a watcher
/// per button. The playback cursor lives inside the loop task; the only
/// state crossing tasks is the [`Selector`], which is safe to share.
pub struct Beacon<'a> {
    selector: &'a Selector,
}

/// Static state for the [`Beacon`]: the selection shared between the button
/// watchers and the playback loop, plus the preset message list.
pub struct BeaconStatic {
    selector: Selector,
    messages: MessageSet,
}

impl BeaconStatic {
    #[must_use]
    pub const fn new_static(messages: MessageSet) -> Self {
        Self {
            selector: Selector::new(messages.len()),
            messages,
        }
    }

    fn selector(&'static self) -> &'static Selector {
        &self.selector
    }
}

impl Beacon<'_> {
    /// Creates the beacon, which entails spawning its Embassy tasks.
    ///
    /// # Errors
    ///
    /// Returns an error if any task cannot be spawned.
    #[must_use = "Must be used to manage the spawned tasks"]
    pub fn new(
        beacon_static: &'static BeaconStatic,
        lights: LightDriver<'static>,
        next_button: Button,
        prev_button: Button,
        spawner: Spawner,
    ) -> Result<Self> {
        spawner.spawn(beacon_device_loop(
            beacon_static.selector(),
            beacon_static.messages,
            lights,
        ))?;
        spawner.spawn(next_button_loop(next_button, beacon_static.selector()))?;
        spawner.spawn(prev_button_loop(prev_button, beacon_static.selector()))?;
        Ok(Self {
            selector: beacon_static.selector(),
        })
    }

    /// Creates a new `BeaconStatic` for the given message list.
    ///
    /// This should be assigned to a static variable and passed to
    /// [`Beacon::new`].
    #[must_use]
    pub const fn new_static(messages: MessageSet) -> BeaconStatic {
        BeaconStatic::new_static(messages)
    }

    /// Requests the following message, as if the next button were pressed.
    pub fn request_next(&self) {
        self.selector.request_next();
    }

    /// Requests the preceding message, as if the prev button were pressed.
    pub fn request_prev(&self) {
        self.selector.request_prev();
    }
}

#[embassy_executor::task]
async fn beacon_device_loop(
    selector: &'static Selector,
    messages: MessageSet,
    mut lights: LightDriver<'static>,
) -> ! {
    let mut engine = SignalEngine::new(messages);
    let mut ticker = Ticker::every(TICK_INTERVAL);
    loop {
        ticker.next().await;

        // One phase step per tick. Its light write lands before any pending
        // switch is considered, so switches commit only at message
        // boundaries.
        if let Some(pattern) = engine.step() {
            #[cfg(feature = "playback-trace")]
            info!("tick: pattern {=u8:b}", pattern.bits());
            lights.set(pattern);
        }
        if let Some(next_index) = selector.try_apply(engine.message_index(), engine.ended()) {
            info!("switching to message {}", next_index);
            engine.switch_to(next_index);
        }
    }
}

#[embassy_executor::task]
async fn next_button_loop(mut button: Button, selector: &'static Selector) -> ! {
    loop {
        button.wait_for_press().await;
        selector.request_next();
    }
}

#[embassy_executor::task]
async fn prev_button_loop(mut button: Button, selector: &'static Selector) -> ! {
    loop {
        button.wait_for_press().await;
        selector.request_prev();
    }
}
