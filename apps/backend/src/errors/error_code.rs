//! Error codes for the hangman backend API.
//!
//! This module defines all error codes used throughout the application.
//! Add new codes here; never pass ad-hoc strings as error codes.
//!
//! All error codes are SCREAMING_SNAKE_CASE and map 1:1 to the strings
//! that appear in HTTP responses.

use core::fmt;

/// Centralized error codes for the hangman backend API.
///
/// Each variant maps to a canonical SCREAMING_SNAKE_CASE string that appears
/// in HTTP responses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorCode {
    // Authentication
    /// A pseudo cookie is required for this route
    Unauthorized,

    // Request validation
    /// Pseudonym empty after trimming
    InvalidPseudo,
    /// Guess is empty or not a single letter
    InvalidGuess,
    /// Difficulty tag has no mapped word list
    UnknownDifficulty,
    /// General bad request error
    BadRequest,

    // Resource not found
    /// No session registered for this pseudonym
    NoActiveSession,
    /// General not found error
    NotFound,

    // Game state conflicts
    /// Guess submitted outside an active round
    RoundNotActive,

    // System errors
    /// Word list file missing or unreadable
    WordListUnavailable,
    /// Word list file contains no words
    WordListEmpty,
    /// Internal server error
    Internal,
    /// Configuration error
    ConfigError,
}

impl ErrorCode {
    /// Returns the canonical SCREAMING_SNAKE_CASE string for this error code.
    ///
    /// This is the exact string that appears in HTTP responses.
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Unauthorized => "UNAUTHORIZED",
            Self::InvalidPseudo => "INVALID_PSEUDO",
            Self::InvalidGuess => "INVALID_GUESS",
            Self::UnknownDifficulty => "UNKNOWN_DIFFICULTY",
            Self::BadRequest => "BAD_REQUEST",
            Self::NoActiveSession => "NO_ACTIVE_SESSION",
            Self::NotFound => "NOT_FOUND",
            Self::RoundNotActive => "ROUND_NOT_ACTIVE",
            Self::WordListUnavailable => "WORD_LIST_UNAVAILABLE",
            Self::WordListEmpty => "WORD_LIST_EMPTY",
            Self::Internal => "INTERNAL",
            Self::ConfigError => "CONFIG_ERROR",
        }
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
