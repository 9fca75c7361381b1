//! Button-driven message selection: a free-running request counter behind a
//! press latch.

use portable_atomic::{AtomicBool, AtomicUsize, Ordering};

/// Pending-selection state shared between the button tasks and the beacon
/// loop.
///
/// The two button tasks are the producers and the beacon loop the consumer.
/// `requested` only ever increments; it is reduced modulo the message count
/// at apply time. `latched` guards it so one physical press counts once no
/// matter how noisily its edge arrives, and the compare-and-set in
/// [`Self::latch`] serializes the two producers so simultaneous presses
/// cannot both slip past an apparently-clear latch.
pub struct Selector {
    requested: AtomicUsize,
    latched: AtomicBool,
    message_count: usize,
}

impl Selector {
    /// Creates a selector over `message_count` messages.
    ///
    /// # Panics
    ///
    /// Panics (at compile time when used in a `const`) if `message_count` is
    /// zero.
    #[must_use]
    pub const fn new(message_count: usize) -> Self {
        assert!(message_count > 0, "Selector needs at least one message");
        Self {
            requested: AtomicUsize::new(0),
            latched: AtomicBool::new(false),
            message_count,
        }
    }

    /// Requests the following message in the list.
    ///
    /// Ignored while a press is already latched, so bounce or a held button
    /// advances at most one position per apply window.
    pub fn request_next(&self) {
        if self.latch() {
            self.requested.fetch_add(1, Ordering::AcqRel);
        }
    }

    /// Requests the preceding message in the list.
    ///
    /// Adds `message_count - 1`: minus one modulo the message count, with no
    /// negative arithmetic on the unsigned counter.
    pub fn request_prev(&self) {
        if self.latch() {
            self.requested
                .fetch_add(self.message_count.saturating_sub(1), Ordering::AcqRel);
        }
    }

    /// Commits a pending selection, but only at a message boundary.
    ///
    /// Returns the new message index when the normalized request differs
    /// from `current_index` and `ended` is set; the latch clears on commit,
    /// reopening the window for the next press.
    #[must_use]
    #[expect(
        clippy::integer_division_remainder_used,
        reason = "Modulo is how the free-running counter maps onto the message list"
    )]
    pub fn try_apply(&self, current_index: usize, ended: bool) -> Option<usize> {
        let normalized = self.requested.load(Ordering::Acquire) % self.message_count;
        if ended && normalized != current_index {
            self.latched.store(false, Ordering::Release);
            Some(normalized)
        } else {
            None
        }
    }

    /// Takes the latch; false if another press already holds it.
    fn latch(&self) -> bool {
        self.latched
            .compare_exchange(false, true, Ordering::AcqRel, Ordering::Acquire)
            .is_ok()
    }
}
