use embassy_time::Duration;

use crate::message_set::MessageSet;

/// One engine phase tick. Every dot, dash, and pause length is expressed in
/// this unit, so changing it rescales the whole transmission.
pub const TICK_INTERVAL: Duration = Duration::from_millis(100);

/// Settle time absorbed around each button edge.
pub const BUTTON_DEBOUNCE_DELAY: Duration = Duration::from_millis(10);

pub const ONE_DAY: Duration = Duration::from_secs(60 * 60 * 24);

/// The messages the beacon cycles through.
pub const MESSAGES: MessageSet = MessageSet::new(&["ss", "oo", "sos"]);
