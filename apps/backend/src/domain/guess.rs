//! Guess evaluator: validates and applies a single letter guess.

use crate::domain::state::{GameSession, Phase};
use crate::errors::DomainError;

/// Submit one letter guess against the session's current round.
///
/// The input is trimmed and case-normalized to uppercase; anything other
/// than exactly one ASCII letter is rejected. Re-guessing an already-guessed
/// letter is a no-op and is never re-penalized. A miss decrements
/// `attempts_left`, never below zero. Every error path leaves the session
/// unchanged.
pub fn submit_guess(session: &mut GameSession, input: &str) -> Result<(), DomainError> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return Err(DomainError::invalid_guess("no letter received"));
    }

    let mut chars = trimmed.chars();
    let letter = match (chars.next(), chars.next()) {
        (Some(c), None) if c.is_ascii_alphabetic() => c.to_ascii_uppercase(),
        _ => {
            return Err(DomainError::invalid_guess(format!(
                "expected a single letter, got {trimmed:?}"
            )))
        }
    };

    if session.phase() != Phase::Playing {
        return Err(DomainError::RoundNotActive);
    }

    if session.has_guessed(letter) {
        return Ok(());
    }

    session.guessed_letters.push(letter);
    if !session.chosen_word.contains(letter) {
        session.attempts_left = session.attempts_left.saturating_sub(1);
    }

    Ok(())
}
