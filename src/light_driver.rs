//! The two-LED output stage.

use embassy_rp::gpio;

use crate::led_pattern::LedPattern;
use crate::output_array::OutputArray;

/// Drives the dot/dash indicator LEDs from a [`LedPattern`].
///
/// Every call reasserts both outputs, so a pattern fully replaces the
/// previous one; there is no separate all-off step.
pub struct LightDriver<'a>(OutputArray<'a, 2>);

impl<'a> LightDriver<'a> {
    /// Wires the driver: `red` carries dots (bit 0), `green` dashes (bit 1).
    #[must_use]
    pub fn new(red: gpio::Output<'a>, green: gpio::Output<'a>) -> Self {
        Self(OutputArray::new([red, green]))
    }

    /// Asserts the given pattern on both LEDs.
    pub fn set(&mut self, pattern: LedPattern) {
        match self.0.set_from_bits(pattern.bits()) {
            Ok(()) => (),
            Err(never) => match never {},
        }
    }
}
