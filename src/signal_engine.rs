//! The phase-stepped Morse playback state machine.
//!
//! [`SignalEngine::step`] advances playback by exactly one phase per call and
//! yields at most one light pattern; the caller owns the tick cadence (one
//! call per base time unit) and forwards emitted patterns to the output
//! stage. Pure logic, testable on the host.

use crate::led_pattern::LedPattern;
use crate::message_set::MessageSet;
use crate::morse_table::{self, Symbol};

/// Ticks a dot's LED stays lit.
const DOT_LEN: u8 = 2;
/// Ticks a dash's LED stays lit.
const DASH_LEN: u8 = 4;
/// Base length of the pause after each character.
const CHARACTER_PAUSE_LEN: u8 = 2;
/// Base length of the pause for a space and between message repeats.
const WORD_PAUSE_LEN: u8 = 4;

/// Playback position within the current message.
///
/// `character_index` may equal the message length ("between characters") and
/// `symbol_index` may equal the pattern length ("between symbols"); `phase`
/// counts elapsed ticks within the active symbol or pause.
#[derive(Debug, Clone, Copy)]
struct PlaybackCursor {
    message_index: usize,
    character_index: usize,
    symbol_index: usize,
    phase: u8,
}

impl PlaybackCursor {
    const fn start() -> Self {
        Self {
            message_index: 0,
            character_index: 0,
            symbol_index: 0,
            phase: 0,
        }
    }

    /// Rewinds to the start of the current message.
    fn rewind(&mut self) {
        self.character_index = 0;
        self.symbol_index = 0;
        self.phase = 0;
    }
}

/// Converts the active message into per-tick light patterns.
///
/// The cursor and ended flag are owned here exclusively; callers interact
/// only through [`Self::step`] and [`Self::switch_to`], so a message switch
/// can never tear a symbol mid-display.
pub struct SignalEngine {
    messages: MessageSet,
    cursor: PlaybackCursor,
    ended: bool,
}

impl SignalEngine {
    /// Creates an engine positioned at the start of the first message.
    #[must_use]
    pub const fn new(messages: MessageSet) -> Self {
        Self {
            messages,
            cursor: PlaybackCursor::start(),
            ended: false,
        }
    }

    /// Index of the message currently playing.
    #[must_use]
    pub const fn message_index(&self) -> usize {
        self.cursor.message_index
    }

    /// True once the current message, trailing pause included, has played
    /// through. Cleared by [`Self::switch_to`] and again by the engine itself
    /// as soon as the next traversal is displaying characters.
    #[must_use]
    pub const fn ended(&self) -> bool {
        self.ended
    }

    /// Starts playback of another message from its beginning.
    ///
    /// Callers gate this on [`Self::ended`] so the running message is never
    /// cut off mid-display.
    pub fn switch_to(&mut self, message_index: usize) {
        debug_assert!(message_index < self.messages.len());
        self.cursor.message_index = message_index;
        self.cursor.rewind();
        self.ended = false;
    }

    /// Advances playback by one tick.
    ///
    /// Returns the light pattern to assert for this tick, or `None` when the
    /// tick was spent moving to the next symbol, character, or message.
    pub fn step(&mut self) -> Option<LedPattern> {
        let message = self
            .messages
            .get(self.cursor.message_index)
            .unwrap_or_default();
        let Some(&character) = message.as_bytes().get(self.cursor.character_index) else {
            // Pause between message repeats. Once it runs out, mark the
            // traversal done and rewind so the message replays unless the
            // loop commits a pending switch first.
            if self.cursor.phase <= WORD_PAUSE_LEN {
                self.cursor.phase = self.cursor.phase.saturating_add(1);
                return Some(LedPattern::Off);
            }
            self.ended = true;
            self.cursor.rewind();
            return None;
        };

        // A character is in progress, so the traversal is not ended. Without
        // this write a stale flag would let a press interrupt a replay.
        self.ended = false;

        let pattern = morse_table::lookup(char::from(character));
        let Some(&symbol) = pattern.as_bytes().get(self.cursor.symbol_index) else {
            // pause after the character
            if self.cursor.phase <= CHARACTER_PAUSE_LEN {
                self.cursor.phase = self.cursor.phase.saturating_add(1);
                return Some(LedPattern::Off);
            }
            self.cursor.character_index = self.cursor.character_index.saturating_add(1);
            self.cursor.symbol_index = 0;
            self.cursor.phase = 0;
            return None;
        };

        match Symbol::classify(symbol) {
            Symbol::Dot => self.run_lit(DOT_LEN, LedPattern::Red),
            Symbol::Dash => self.run_lit(DASH_LEN, LedPattern::Green),
            Symbol::Pause => self.run_symbol_pause(),
        }
    }

    /// Holds `pattern` for `length` ticks, then spends one tick advancing to
    /// the next symbol. No off phase is interposed between consecutive lit
    /// symbols; the dark time comes from the pause that follows the
    /// character.
    fn run_lit(&mut self, length: u8, pattern: LedPattern) -> Option<LedPattern> {
        if self.cursor.phase < length {
            self.cursor.phase = self.cursor.phase.saturating_add(1);
            return Some(pattern);
        }
        self.advance_symbol();
        None
    }

    /// The space placeholder: lights off for a word-length pause. Note the
    /// strict bound; unlike the character and repeat pauses this one does
    /// not overshoot its length by a tick.
    fn run_symbol_pause(&mut self) -> Option<LedPattern> {
        if self.cursor.phase < WORD_PAUSE_LEN {
            self.cursor.phase = self.cursor.phase.saturating_add(1);
            return Some(LedPattern::Off);
        }
        self.advance_symbol();
        None
    }

    fn advance_symbol(&mut self) {
        self.cursor.symbol_index = self.cursor.symbol_index.saturating_add(1);
        self.cursor.phase = 0;
    }
}

#[cfg(all(test, not(target_os = "none")))]
mod tests {
    use super::{SignalEngine, DOT_LEN, WORD_PAUSE_LEN};
    use crate::led_pattern::LedPattern;
    use crate::message_set::MessageSet;

    #[test]
    fn dot_holds_for_its_full_length() {
        let mut engine = SignalEngine::new(MessageSet::new(&["e"]));
        for _ in 0..DOT_LEN {
            assert_eq!(engine.step(), Some(LedPattern::Red));
        }
        // the tick that moves on to the next symbol emits nothing
        assert_eq!(engine.step(), None);
    }

    #[test]
    fn repeat_pause_runs_one_tick_past_its_length() {
        let mut engine = SignalEngine::new(MessageSet::new(&[""]));
        for _ in 0..=WORD_PAUSE_LEN {
            assert_eq!(engine.step(), Some(LedPattern::Off));
        }
        assert!(!engine.ended());
        assert_eq!(engine.step(), None);
        assert!(engine.ended());
    }
}
