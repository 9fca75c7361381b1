//! The fixed, ordered list of messages the beacon can play.

/// An ordered, non-empty set of preset messages.
///
/// Messages are lowercase ASCII letters and spaces; any other character plays
/// as a pause (see [`crate::morse_table::lookup`]). The set is fixed for the
/// process lifetime, so it is `Copy` and hands out `&'static str`.
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[derive(Debug, Clone, Copy)]
pub struct MessageSet(&'static [&'static str]);

impl MessageSet {
    /// Creates a message set.
    ///
    /// # Panics
    ///
    /// Panics (at compile time when used in a `const`) if `messages` is
    /// empty.
    #[must_use]
    pub const fn new(messages: &'static [&'static str]) -> Self {
        assert!(
            !messages.is_empty(),
            "a MessageSet needs at least one message"
        );
        Self(messages)
    }

    /// Number of messages in the set (always at least one).
    #[must_use]
    pub const fn len(&self) -> usize {
        self.0.len()
    }

    /// Always false; the constructor rejects empty sets.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Returns the message at `index`, if in range.
    #[must_use]
    pub fn get(&self, index: usize) -> Option<&'static str> {
        self.0.get(index).copied()
    }
}
