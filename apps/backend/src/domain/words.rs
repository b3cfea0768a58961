//! Word source: draws one random word from a difficulty's word list.

use std::fs;
use std::path::Path;

use rand::seq::IndexedRandom;

use crate::domain::Difficulty;
use crate::errors::DomainError;

/// Pick one word uniformly at random from the word list for `difficulty`.
///
/// The list is a flat line-delimited file under `words_dir`, re-read on
/// every call (lists are tiny and rounds are rare; staleness beats caching
/// here). Blank lines are skipped and the winner is uppercased before use.
pub fn pick_word(words_dir: &Path, difficulty: Difficulty) -> Result<String, DomainError> {
    let path = words_dir.join(difficulty.word_list_file());
    let contents =
        fs::read_to_string(&path).map_err(|e| DomainError::word_list_unavailable(&path, e))?;

    let words: Vec<&str> = contents
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .collect();

    let word = words
        .choose(&mut rand::rng())
        .ok_or_else(|| DomainError::word_list_empty(&path))?;

    Ok(word.to_uppercase())
}
