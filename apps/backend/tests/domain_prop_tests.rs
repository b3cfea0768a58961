//! Property-based tests for the hangman core.
//!
//! Developer notes:
//! - Increase cases locally with PROPTEST_CASES=800.
//! - All tests are pure (no HTTP, no filesystem) and deterministic per seed.

use std::collections::HashSet;
use std::env;

use hangman_backend::domain::{
    is_word_guessed, mask_word, submit_guess, GameSession, Phase, STARTING_ATTEMPTS,
};
use proptest::prelude::*;

/// Helper to get proptest config from environment
fn proptest_config() -> ProptestConfig {
    let cases = env::var("PROPTEST_CASES")
        .ok()
        .and_then(|s| s.parse().ok())
        .unwrap_or(64); // Low default for fast CI

    ProptestConfig {
        cases,
        ..ProptestConfig::default()
    }
}

fn word_strategy() -> impl Strategy<Value = String> {
    proptest::string::string_regex("[A-Z]{1,12}").unwrap()
}

fn guesses_strategy() -> impl Strategy<Value = Vec<char>> {
    proptest::collection::vec(proptest::char::range('A', 'Z'), 0..12)
}

fn session_with_word(word: &str) -> GameSession {
    GameSession {
        chosen_word: word.to_string(),
        guessed_letters: Vec::new(),
        attempts_left: STARTING_ATTEMPTS,
    }
}

proptest! {
    #![proptest_config(proptest_config())]

    /// The mask has exactly len(word) non-separator characters, each either
    /// a guessed letter of the word or the placeholder.
    #[test]
    fn mask_preserves_length_and_shape(word in word_strategy(), guessed in guesses_strategy()) {
        let masked = mask_word(&word, &guessed);
        let cells: Vec<char> = masked.chars().filter(|c| *c != ' ').collect();
        prop_assert_eq!(cells.len(), word.len());

        for (cell, original) in cells.iter().zip(word.chars()) {
            if *cell == '_' {
                prop_assert!(!guessed.contains(&original));
            } else {
                prop_assert_eq!(*cell, original);
                prop_assert!(guessed.contains(cell));
            }
        }
    }

    /// is_word_guessed is true iff every distinct character of the word has
    /// been guessed.
    #[test]
    fn word_guessed_iff_distinct_letters_covered(word in word_strategy(), guessed in guesses_strategy()) {
        let distinct: HashSet<char> = word.chars().collect();
        let covered = distinct.iter().all(|c| guessed.contains(c));
        prop_assert_eq!(is_word_guessed(&word, &guessed), covered);
    }

    /// Guessing every letter of the word round-trips to a win with no
    /// attempts spent.
    #[test]
    fn guessing_all_letters_wins(word in word_strategy()) {
        let mut session = session_with_word(&word);
        for letter in word.chars() {
            if session.phase() != Phase::Playing {
                break;
            }
            submit_guess(&mut session, &letter.to_string()).unwrap();
        }
        prop_assert_eq!(session.phase(), Phase::Won);
        prop_assert_eq!(session.attempts_left, STARTING_ATTEMPTS);
        prop_assert!(mask_word(&session.chosen_word, &session.guessed_letters).chars().all(|c| c != '_'));
    }

    /// attempts_left is monotonically non-increasing over any guess sequence
    /// and never goes below zero.
    #[test]
    fn attempts_monotonically_non_increasing(word in word_strategy(), guesses in guesses_strategy()) {
        let mut session = session_with_word(&word);
        let mut previous = session.attempts_left;
        for letter in guesses {
            // Terminal phases reject guesses; the record must stay frozen.
            let _ = submit_guess(&mut session, &letter.to_string());
            prop_assert!(session.attempts_left <= previous);
            previous = session.attempts_left;
        }
    }

    /// Re-guessing an already-guessed letter leaves the session identical.
    #[test]
    fn reguess_is_identity(word in word_strategy(), guesses in guesses_strategy()) {
        let mut session = session_with_word(&word);
        for letter in guesses {
            if session.phase() != Phase::Playing {
                break;
            }
            submit_guess(&mut session, &letter.to_string()).unwrap();
            if session.phase() == Phase::Playing {
                let before = session.clone();
                submit_guess(&mut session, &letter.to_string()).unwrap();
                prop_assert_eq!(&session, &before);
            }
        }
    }

    /// Distinct wrong guesses cost exactly one attempt each.
    #[test]
    fn wrong_guesses_cost_one_attempt_each(word in word_strategy(), guesses in guesses_strategy()) {
        let mut session = session_with_word(&word);
        let mut wrong: HashSet<char> = HashSet::new();
        for letter in guesses {
            if session.phase() != Phase::Playing {
                break;
            }
            submit_guess(&mut session, &letter.to_string()).unwrap();
            if !word.contains(letter) {
                wrong.insert(letter);
            }
        }
        prop_assert_eq!(
            session.attempts_left,
            STARTING_ATTEMPTS - wrong.len() as u8
        );
    }
}
