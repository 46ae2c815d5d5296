//! Cyclic typing effect over a list of phrases.
//!
//! Characters are counted as `char`s, not bytes, so phrases with
//! non-ASCII text grow and shrink one visible character at a time.

use std::time::Instant;

use crate::constants::{
    ERASING_DELAY, PHRASE_PAUSE, TYPING_DELAY, TYPING_INITIAL_DELAY, TYPING_RESTART_PAUSE,
};

/// Phase of the typing animation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TypingPhase {
    /// Waiting for the initial delay before the first character.
    Idle,
    /// Adding one character per step.
    Typing,
    /// Full phrase shown, waiting before erasing.
    Pausing,
    /// Removing one character per step.
    Erasing,
}

/// Typing effect state machine.
///
/// Cycles through its phrases forever: type, pause, erase, pause,
/// advance. A single deadline drives all phases; a late tick catches up
/// several steps at once.
#[derive(Debug, Clone)]
pub struct TypingEffect {
    phrases: Vec<String>,
    phrase_index: usize,
    shown_chars: usize,
    phase: TypingPhase,
    deadline: Option<Instant>,
}

impl TypingEffect {
    /// Create an idle effect over the given phrases. An empty list
    /// yields a permanently blank effect.
    #[must_use]
    pub fn new(phrases: Vec<String>) -> Self {
        Self {
            phrases,
            phrase_index: 0,
            shown_chars: 0,
            phase: TypingPhase::Idle,
            deadline: None,
        }
    }

    /// Current phase.
    #[must_use]
    pub fn phase(&self) -> TypingPhase {
        self.phase
    }

    /// Begin the animation; the first character appears after the
    /// initial delay. No-op if already started or there are no phrases.
    pub fn start(&mut self, now: Instant) {
        if self.deadline.is_some() || self.phrases.is_empty() {
            return;
        }
        self.deadline = Some(now + TYPING_INITIAL_DELAY);
    }

    /// The currently visible text.
    #[must_use]
    pub fn display(&self) -> String {
        match self.phrases.get(self.phrase_index) {
            Some(phrase) => phrase.chars().take(self.shown_chars).collect(),
            None => String::new(),
        }
    }

    /// Advance the animation. Returns true if the visible text changed.
    pub fn tick(&mut self, now: Instant) -> bool {
        if self.phrases.is_empty() {
            return false;
        }
        let mut changed = false;
        while let Some(deadline) = self.deadline {
            if now < deadline {
                break;
            }
            changed |= self.step(deadline);
        }
        changed
    }

    /// Perform one step at the given deadline and schedule the next.
    fn step(&mut self, deadline: Instant) -> bool {
        let phrase_len = self.phrases[self.phrase_index].chars().count();
        match self.phase {
            TypingPhase::Idle => {
                self.phase = TypingPhase::Typing;
                self.deadline = Some(deadline + TYPING_DELAY);
                false
            }
            TypingPhase::Typing => {
                self.shown_chars += 1;
                if self.shown_chars >= phrase_len {
                    self.shown_chars = phrase_len;
                    self.phase = TypingPhase::Pausing;
                    self.deadline = Some(deadline + PHRASE_PAUSE);
                } else {
                    self.deadline = Some(deadline + TYPING_DELAY);
                }
                true
            }
            TypingPhase::Pausing => {
                self.phase = TypingPhase::Erasing;
                self.deadline = Some(deadline + ERASING_DELAY);
                false
            }
            TypingPhase::Erasing => {
                if self.shown_chars > 0 {
                    self.shown_chars -= 1;
                }
                if self.shown_chars == 0 {
                    self.phrase_index = (self.phrase_index + 1) % self.phrases.len();
                    self.phase = TypingPhase::Typing;
                    self.deadline = Some(deadline + TYPING_RESTART_PAUSE);
                } else {
                    self.deadline = Some(deadline + ERASING_DELAY);
                }
                true
            }
        }
    }
}
