//! The light pattern asserted on each engine emission.

/// Which of the two indicator LEDs are lit.
///
/// Instead of passing a raw bitmask around, the four reachable settings get
/// their own variants; [`Self::bits`] recovers the mask the output stage
/// needs. Bit 0 drives the red (dot) LED and bit 1 the green (dash) LED.
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LedPattern {
    #[default]
    Off,
    Red,
    Green,
    Both,
}

impl LedPattern {
    /// The pattern as a bitmask, one bit per LED.
    #[must_use]
    pub const fn bits(self) -> u8 {
        match self {
            Self::Off => 0b00,
            Self::Red => 0b01,
            Self::Green => 0b10,
            Self::Both => 0b11,
        }
    }
}
