//! Domain-level error type used across the game core and services.
//!
//! This error type is HTTP-agnostic. Handlers should return
//! `Result<T, crate::error::AppError>` and convert from `DomainError`
//! using the provided `From<DomainError> for AppError` implementation.

use std::error::Error;
use std::fmt::{Display, Formatter, Result as FmtResult};
use std::path::Path;

/// Central domain error type for the hangman core.
#[derive(Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum DomainError {
    /// Difficulty tag has no mapped word list; fails closed on unknown tags.
    UnknownDifficulty(String),
    /// Word list file could not be read.
    WordListUnavailable { path: String, reason: String },
    /// Word list file exists but contains no usable lines.
    WordListEmpty { path: String },
    /// Guess input is empty or not a single letter.
    InvalidGuess(String),
    /// Pseudonym is empty after trimming.
    InvalidPseudo(String),
    /// No session is registered for the given pseudonym.
    NoActiveSession(String),
    /// Guess submitted while no round is in progress or the round has ended.
    RoundNotActive,
}

impl Display for DomainError {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        match self {
            DomainError::UnknownDifficulty(tag) => {
                write!(f, "unknown difficulty tag: {tag:?}")
            }
            DomainError::WordListUnavailable { path, reason } => {
                write!(f, "word list unavailable at {path}: {reason}")
            }
            DomainError::WordListEmpty { path } => {
                write!(f, "word list at {path} contains no words")
            }
            DomainError::InvalidGuess(d) => write!(f, "invalid guess: {d}"),
            DomainError::InvalidPseudo(d) => write!(f, "invalid pseudo: {d}"),
            DomainError::NoActiveSession(pseudo) => {
                write!(f, "no active session for pseudo {pseudo:?}")
            }
            DomainError::RoundNotActive => write!(f, "no round is currently active"),
        }
    }
}

impl Error for DomainError {}

impl DomainError {
    pub fn unknown_difficulty(tag: impl Into<String>) -> Self {
        Self::UnknownDifficulty(tag.into())
    }

    pub fn word_list_unavailable(path: &Path, source: std::io::Error) -> Self {
        Self::WordListUnavailable {
            path: path.display().to_string(),
            reason: source.to_string(),
        }
    }

    pub fn word_list_empty(path: &Path) -> Self {
        Self::WordListEmpty {
            path: path.display().to_string(),
        }
    }

    pub fn invalid_guess(detail: impl Into<String>) -> Self {
        Self::InvalidGuess(detail.into())
    }

    pub fn invalid_pseudo(detail: impl Into<String>) -> Self {
        Self::InvalidPseudo(detail.into())
    }

    pub fn no_active_session(pseudo: impl Into<String>) -> Self {
        Self::NoActiveSession(pseudo.into())
    }
}
