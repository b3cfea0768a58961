//! Plain data projections consumed by the rendering layer.
//!
//! The core never produces HTML; these are the only shapes the route
//! handlers serialize.

use serde::{Deserialize, Serialize};

use crate::domain::state::{is_word_guessed, mask_word, GameSession, Phase};

/// Projection for the play screen. The chosen word itself never leaves the
/// core through this view, only its masked form.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayView {
    pub masked_word: String,
    pub guessed_letters: Vec<char>,
    pub attempts_left: u8,
    pub phase: Phase,
}

impl PlayView {
    pub fn project(session: &GameSession) -> Self {
        Self {
            masked_word: mask_word(&session.chosen_word, &session.guessed_letters),
            guessed_letters: session.guessed_letters.clone(),
            attempts_left: session.attempts_left,
            phase: session.phase(),
        }
    }
}

/// Projection for the result screen; the chosen word is disclosed here.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResultView {
    pub won: bool,
    pub lost: bool,
    pub chosen_word: String,
}

impl ResultView {
    pub fn project(session: &GameSession) -> Self {
        let won = session.has_round()
            && is_word_guessed(&session.chosen_word, &session.guessed_letters);
        Self {
            won,
            lost: session.attempts_left == 0 && !won,
            chosen_word: session.chosen_word.clone(),
        }
    }
}
