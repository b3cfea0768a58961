//! Pure hangman game logic.
//!
//! Nothing in this module knows about HTTP, cookies, or the session
//! registry. The only I/O is the word-list read in [`words`], which the
//! service layer performs before mutating any session state.

pub mod difficulty;
pub mod guess;
pub mod reveal;
pub mod state;
pub mod view;
pub mod words;


pub use difficulty::Difficulty;
pub use guess::submit_guess;
pub use reveal::reveal_initial_letters;
pub use state::{is_word_guessed, mask_word, GameSession, Phase, STARTING_ATTEMPTS};
pub use view::{PlayView, ResultView};
pub use words::pick_word;
