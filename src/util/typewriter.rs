//! Phrase-cycling typing effect for the hero headline.
//!
//! DESIGN
//! ======
//! The stepper is plain data: `advance` moves one tick and `delay_ms` says
//! how long to sleep before the next one, so the whole cadence is testable
//! without a browser. The async loop that drives it lives in the hero
//! component.

#[cfg(test)]
#[path = "typewriter_test.rs"]
mod typewriter_test;

/// Milliseconds between typed characters.
pub const TYPE_MS: u64 = 100;
/// Milliseconds between deleted characters.
pub const DELETE_MS: u64 = 50;
/// Milliseconds a fully typed phrase stays up before deletion starts.
pub const HOLD_MS: u64 = 2_000;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Phase {
    Typing,
    Holding,
    Deleting,
}

/// Cycles through a fixed phrase list one character at a time.
#[derive(Clone, Debug)]
pub struct Typewriter {
    phrases: &'static [&'static str],
    phrase: usize,
    shown: usize,
    phase: Phase,
}

impl Typewriter {
    /// Start empty on the first phrase. `phrases` must be non-empty.
    #[must_use]
    pub fn new(phrases: &'static [&'static str]) -> Self {
        Self {
            phrases,
            phrase: 0,
            shown: 0,
            phase: Phase::Typing,
        }
    }

    /// The currently visible prefix.
    #[must_use]
    pub fn text(&self) -> String {
        self.phrases[self.phrase].chars().take(self.shown).collect()
    }

    /// How long to wait before the next `advance`.
    #[must_use]
    pub fn delay_ms(&self) -> u64 {
        match self.phase {
            Phase::Typing => TYPE_MS,
            Phase::Holding => HOLD_MS,
            Phase::Deleting => DELETE_MS,
        }
    }

    /// One tick: type a character, or begin deleting after the hold, or
    /// delete a character and roll over to the next phrase at empty.
    pub fn advance(&mut self) {
        let full = self.phrases[self.phrase].chars().count();
        match self.phase {
            Phase::Typing => {
                self.shown = (self.shown + 1).min(full);
                if self.shown == full {
                    self.phase = Phase::Holding;
                }
            }
            Phase::Holding => {
                self.phase = Phase::Deleting;
            }
            Phase::Deleting => {
                self.shown = self.shown.saturating_sub(1);
                if self.shown == 0 {
                    self.phase = Phase::Typing;
                    self.phrase = (self.phrase + 1) % self.phrases.len();
                }
            }
        }
    }
}
