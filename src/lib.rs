//! Shared items for the Morse beacon project.
#![no_std]

#[cfg(any(feature = "pico1", feature = "pico2"))]
mod beacon;
#[cfg(any(feature = "pico1", feature = "pico2"))]
mod button;
#[cfg(any(feature = "pico1", feature = "pico2"))]
mod error;
#[cfg(any(feature = "pico1", feature = "pico2"))]
mod hardware;
mod led_pattern;
#[cfg(any(feature = "pico1", feature = "pico2"))]
mod light_driver;
mod message_set;
pub mod morse_table;
mod never;
mod selector;
mod shared_constants;
mod signal_engine;

// Re-export commonly used items
#[cfg(any(feature = "pico1", feature = "pico2"))]
pub use beacon::{Beacon, BeaconStatic};
#[cfg(any(feature = "pico1", feature = "pico2"))]
pub use button::Button;
#[cfg(any(feature = "pico1", feature = "pico2"))]
pub use error::{Error, Result};
#[cfg(any(feature = "pico1", feature = "pico2"))]
pub use hardware::Hardware;
pub use led_pattern::LedPattern;
#[cfg(any(feature = "pico1", feature = "pico2"))]
pub use light_driver::LightDriver;
pub use message_set::MessageSet;
pub use morse_table::Symbol;
pub use never::Never;
pub use selector::Selector;
pub use shared_constants::*;
pub use signal_engine::SignalEngine;
