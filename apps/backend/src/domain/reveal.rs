//! Reveal policy: pre-populates a session's guessed letters with vowels
//! as a difficulty-based hint before the first guess.

use rand::seq::IndexedRandom;

use crate::domain::state::GameSession;
use crate::domain::Difficulty;

const VOWELS: [char; 5] = ['A', 'E', 'I', 'O', 'U'];

/// Reveal up to `difficulty.reveal_count()` vowels of `word` into the
/// session's guessed letters.
///
/// Sampling is uniform and without replacement over the distinct vowels
/// actually present in the word, so the loop is bounded by construction: a
/// word with fewer vowels than the reveal count yields fewer reveals, and a
/// vowel-less word yields none. Reveal is by letter identity; the mask step
/// uncovers every occurrence of a revealed letter.
pub fn reveal_initial_letters(word: &str, difficulty: Difficulty, session: &mut GameSession) {
    let count = difficulty.reveal_count();
    if count == 0 {
        return;
    }

    let mut candidates: Vec<char> = Vec::new();
    for c in word.chars() {
        if VOWELS.contains(&c) && !candidates.contains(&c) && !session.has_guessed(c) {
            candidates.push(c);
        }
    }

    for letter in candidates.choose_multiple(&mut rand::rng(), count) {
        session.guessed_letters.push(*letter);
    }
}
