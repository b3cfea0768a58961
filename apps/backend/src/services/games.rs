//! Game orchestration over the session registry.
//!
//! Each operation resolves the caller's session, takes its lock, and runs
//! one synchronous core operation to completion. Word-list reads happen
//! before any session mutation, so a failed start leaves the session as it
//! was.

use tracing::{debug, info};

use crate::domain::{
    pick_word, reveal_initial_letters, submit_guess, Difficulty, PlayView, ResultView,
};
use crate::errors::DomainError;
use crate::state::app_state::{AppState, SharedSession};

/// Game domain service. Stateless; all state lives in [`AppState`].
pub struct GameService;

impl GameService {
    /// Validate a pseudonym and register its session (login).
    ///
    /// Returns the trimmed pseudonym. An existing session for the same
    /// pseudonym is kept as-is, so logging back in resumes the round.
    pub fn login(state: &AppState, pseudo: &str) -> Result<String, DomainError> {
        let pseudo = pseudo.trim();
        if pseudo.is_empty() {
            return Err(DomainError::invalid_pseudo("pseudo cannot be empty"));
        }
        state.register(pseudo);
        info!(pseudo = %pseudo, "player logged in");
        Ok(pseudo.to_string())
    }

    /// Drop the session registry entry (logout).
    pub fn logout(state: &AppState, pseudo: &str) {
        state.remove(pseudo);
        info!(pseudo = %pseudo, "player logged out");
    }

    /// Idle → Playing: pick a word and apply the reveal policy.
    ///
    /// If a round is already in progress the call resumes it unchanged,
    /// whatever difficulty is asked for.
    pub fn start_or_resume(
        state: &AppState,
        pseudo: &str,
        difficulty: Difficulty,
    ) -> Result<PlayView, DomainError> {
        let session = Self::session(state, pseudo)?;
        let mut session = session.lock();

        if !session.has_round() {
            let word = pick_word(state.words().dir(), difficulty)?;
            reveal_initial_letters(&word, difficulty, &mut session);
            session.chosen_word = word;
            info!(
                pseudo = %pseudo,
                difficulty = %difficulty,
                word_len = session.chosen_word.len(),
                revealed = session.guessed_letters.len(),
                "round started"
            );
        } else {
            debug!(pseudo = %pseudo, "resuming round in progress");
        }

        Ok(PlayView::project(&session))
    }

    /// Apply one letter guess to the caller's round.
    pub fn submit_guess(
        state: &AppState,
        pseudo: &str,
        input: &str,
    ) -> Result<PlayView, DomainError> {
        let session = Self::session(state, pseudo)?;
        let mut session = session.lock();
        submit_guess(&mut session, input)?;
        debug!(
            pseudo = %pseudo,
            attempts_left = session.attempts_left,
            phase = ?session.phase(),
            "guess applied"
        );
        Ok(PlayView::project(&session))
    }

    /// Play-screen projection of the current state; never starts a round.
    pub fn status(state: &AppState, pseudo: &str) -> Result<PlayView, DomainError> {
        let session = Self::session(state, pseudo)?;
        let session = session.lock();
        Ok(PlayView::project(&session))
    }

    /// Result-screen projection (win/loss verdict plus the chosen word).
    pub fn result(state: &AppState, pseudo: &str) -> Result<ResultView, DomainError> {
        let session = Self::session(state, pseudo)?;
        let session = session.lock();
        Ok(ResultView::project(&session))
    }

    /// Any state → Idle.
    pub fn reset(state: &AppState, pseudo: &str) -> Result<PlayView, DomainError> {
        let session = Self::session(state, pseudo)?;
        let mut session = session.lock();
        session.reset();
        info!(pseudo = %pseudo, "session reset");
        Ok(PlayView::project(&session))
    }

    fn session(state: &AppState, pseudo: &str) -> Result<SharedSession, DomainError> {
        state
            .session(pseudo)
            .ok_or_else(|| DomainError::no_active_session(pseudo))
    }
}

#[cfg(test)]
mod tests {
    use std::fs;

    use super::*;
    use crate::config::words::WordsConfig;
    use crate::domain::Phase;

    fn state_with_single_word(word: &str) -> (AppState, tempfile::TempDir) {
        let dir = tempfile::tempdir().unwrap();
        for d in Difficulty::ALL {
            fs::write(dir.path().join(d.word_list_file()), format!("{word}\n")).unwrap();
        }
        (AppState::new(WordsConfig::new(dir.path())), dir)
    }

    #[test]
    fn login_trims_and_rejects_empty() {
        let (state, _dir) = state_with_single_word("CAT");
        assert_eq!(GameService::login(&state, "  alice ").unwrap(), "alice");
        assert!(matches!(
            GameService::login(&state, "   "),
            Err(DomainError::InvalidPseudo(_))
        ));
    }

    #[test]
    fn operations_require_a_registered_session() {
        let (state, _dir) = state_with_single_word("CAT");
        assert!(matches!(
            GameService::status(&state, "ghost"),
            Err(DomainError::NoActiveSession(_))
        ));
        assert!(matches!(
            GameService::submit_guess(&state, "ghost", "A"),
            Err(DomainError::NoActiveSession(_))
        ));
    }

    #[test]
    fn start_is_lazy_and_resume_keeps_the_word() {
        let (state, _dir) = state_with_single_word("CAT");
        GameService::login(&state, "alice").unwrap();

        // Login alone does not start a round
        assert_eq!(GameService::status(&state, "alice").unwrap().phase, Phase::Idle);

        let first = GameService::start_or_resume(&state, "alice", Difficulty::Hard).unwrap();
        assert_eq!(first.masked_word, "_ _ _");
        assert_eq!(first.phase, Phase::Playing);

        // Starting again resumes rather than redrawing
        GameService::submit_guess(&state, "alice", "C").unwrap();
        let resumed = GameService::start_or_resume(&state, "alice", Difficulty::Easy).unwrap();
        assert_eq!(resumed.masked_word, "C _ _");
    }

    #[test]
    fn full_round_to_win() {
        let (state, _dir) = state_with_single_word("CAT");
        GameService::login(&state, "alice").unwrap();
        GameService::start_or_resume(&state, "alice", Difficulty::Hard).unwrap();

        for letter in ["C", "A", "T"] {
            GameService::submit_guess(&state, "alice", letter).unwrap();
        }

        let result = GameService::result(&state, "alice").unwrap();
        assert!(result.won);
        assert!(!result.lost);
        assert_eq!(result.chosen_word, "CAT");
    }

    #[test]
    fn failed_start_leaves_session_unchanged() {
        let dir = tempfile::tempdir().unwrap();
        let state = AppState::new(WordsConfig::new(dir.path()));
        GameService::login(&state, "alice").unwrap();

        // No word lists in the directory
        assert!(matches!(
            GameService::start_or_resume(&state, "alice", Difficulty::Easy),
            Err(DomainError::WordListUnavailable { .. })
        ));
        let status = GameService::status(&state, "alice").unwrap();
        assert_eq!(status.phase, Phase::Idle);
        assert!(status.guessed_letters.is_empty());
    }

    #[test]
    fn reset_starts_a_fresh_round_on_next_start() {
        let (state, _dir) = state_with_single_word("CAT");
        GameService::login(&state, "alice").unwrap();
        GameService::start_or_resume(&state, "alice", Difficulty::Hard).unwrap();
        GameService::submit_guess(&state, "alice", "Z").unwrap();

        let idle = GameService::reset(&state, "alice").unwrap();
        assert_eq!(idle.phase, Phase::Idle);
        assert!(idle.guessed_letters.is_empty());

        let fresh = GameService::start_or_resume(&state, "alice", Difficulty::Hard).unwrap();
        assert_eq!(fresh.attempts_left, crate::domain::STARTING_ATTEMPTS);
    }

    #[test]
    fn players_do_not_interfere() {
        let (state, _dir) = state_with_single_word("CAT");
        GameService::login(&state, "alice").unwrap();
        GameService::login(&state, "bob").unwrap();
        GameService::start_or_resume(&state, "alice", Difficulty::Hard).unwrap();
        GameService::submit_guess(&state, "alice", "Z").unwrap();

        assert_eq!(GameService::status(&state, "bob").unwrap().phase, Phase::Idle);
    }

    #[test]
    fn logout_forgets_the_session() {
        let (state, _dir) = state_with_single_word("CAT");
        GameService::login(&state, "alice").unwrap();
        GameService::logout(&state, "alice");
        assert!(matches!(
            GameService::status(&state, "alice"),
            Err(DomainError::NoActiveSession(_))
        ));
    }
}
