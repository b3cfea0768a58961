use serde::{Deserialize, Serialize};

/// Attempts a fresh round starts with.
pub const STARTING_ATTEMPTS: u8 = 10;

/// One player's game round, keyed by pseudonym in the session registry.
///
/// Invariants:
/// - `chosen_word` is uppercase; empty means no round is in progress.
/// - `guessed_letters` holds unique uppercase ASCII letters in insertion
///   order (pre-reveals first, then player guesses).
/// - `attempts_left <= STARTING_ATTEMPTS`, non-increasing within a round.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameSession {
    pub chosen_word: String,
    pub guessed_letters: Vec<char>,
    pub attempts_left: u8,
}

/// Round phase, computed from the session record on every query.
///
/// `Won` and `Lost` are predicates over the record, not stored transitions:
/// resetting the record is the only way back to `Idle`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Phase {
    Idle,
    Playing,
    Won,
    Lost,
}

impl GameSession {
    pub fn new() -> Self {
        Self {
            chosen_word: String::new(),
            guessed_letters: Vec::new(),
            attempts_left: STARTING_ATTEMPTS,
        }
    }

    /// Any state → Idle: clears the word and guesses, restores attempts.
    pub fn reset(&mut self) {
        self.chosen_word.clear();
        self.guessed_letters.clear();
        self.attempts_left = STARTING_ATTEMPTS;
    }

    /// True once a word has been chosen for the current round.
    pub fn has_round(&self) -> bool {
        !self.chosen_word.is_empty()
    }

    pub fn has_guessed(&self, letter: char) -> bool {
        self.guessed_letters.contains(&letter)
    }

    pub fn phase(&self) -> Phase {
        if self.chosen_word.is_empty() {
            Phase::Idle
        } else if is_word_guessed(&self.chosen_word, &self.guessed_letters) {
            Phase::Won
        } else if self.attempts_left == 0 {
            Phase::Lost
        } else {
            Phase::Playing
        }
    }
}

impl Default for GameSession {
    fn default() -> Self {
        Self::new()
    }
}

/// Display form of the chosen word: guessed characters shown, `_` elsewhere,
/// one space between positions. Reveal is by letter identity, so every
/// occurrence of a guessed letter is shown.
pub fn mask_word(word: &str, guessed: &[char]) -> String {
    let mut masked = String::with_capacity(word.len() * 2);
    for (i, c) in word.chars().enumerate() {
        if i > 0 {
            masked.push(' ');
        }
        if guessed.contains(&c) {
            masked.push(c);
        } else {
            masked.push('_');
        }
    }
    masked
}

/// True iff every distinct character of `word` has been guessed.
pub fn is_word_guessed(word: &str, guessed: &[char]) -> bool {
    word.chars().all(|c| guessed.contains(&c))
}
