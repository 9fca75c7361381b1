//! Character-to-Morse lookup and symbol classification.

/// One action unit within a character's Morse pattern.
///
/// Classifying pattern bytes up front lets the engine dispatch on a tagged
/// variant instead of comparing raw character codes at every tick.
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Symbol {
    Dot,
    Dash,
    Pause,
}

impl Symbol {
    /// Classifies one byte of a pattern string from [`lookup`].
    ///
    /// Anything that is not a dot or a dash (the space placeholder included)
    /// reads as a pause.
    #[must_use]
    pub const fn classify(symbol: u8) -> Self {
        match symbol {
            b'.' => Self::Dot,
            b'-' => Self::Dash,
            _ => Self::Pause,
        }
    }
}

/// Returns the international Morse pattern for a character.
///
/// Total over its domain: the 26 lowercase letters map to their `.`/`-`
/// patterns, while space and every other character map to a single-space
/// placeholder that plays as a pause rather than a displayable symbol.
#[must_use]
pub const fn lookup(character: char) -> &'static str {
    match character {
        'a' => ".-",
        'b' => "-...",
        'c' => "-.-.",
        'd' => "-..",
        'e' => ".",
        'f' => "..-.",
        'g' => "--.",
        'h' => "....",
        'i' => "..",
        'j' => ".---",
        'k' => "-.-",
        'l' => ".-..",
        'm' => "--",
        'n' => "-.",
        'o' => "---",
        'p' => ".--.",
        'q' => "--.-",
        'r' => ".-.",
        's' => "...",
        't' => "-",
        'u' => "..-",
        'v' => "...-",
        'w' => ".--",
        'x' => "-..-",
        'y' => "-.--",
        'z' => "--..",
        _ => " ",
    }
}
