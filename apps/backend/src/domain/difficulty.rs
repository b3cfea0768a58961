use std::fmt;
use std::str::FromStr;

use crate::errors::DomainError;

/// Game difficulty, controlling which word list is drawn from and how many
/// vowels are pre-revealed before the first guess.
///
/// Parsed from request payloads via [`FromStr`] rather than serde so that
/// unmapped tags surface through the domain error taxonomy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Difficulty {
    Easy,
    Medium,
    Hard,
}

impl Difficulty {
    pub const ALL: [Difficulty; 3] = [Difficulty::Easy, Difficulty::Medium, Difficulty::Hard];

    /// Number of vowels pre-revealed before the player's first guess.
    pub const fn reveal_count(self) -> usize {
        match self {
            Difficulty::Easy => 2,
            Difficulty::Medium => 1,
            Difficulty::Hard => 0,
        }
    }

    /// File name of this difficulty's word list inside the words directory.
    pub const fn word_list_file(self) -> &'static str {
        match self {
            Difficulty::Easy => "easy.txt",
            Difficulty::Medium => "medium.txt",
            Difficulty::Hard => "hard.txt",
        }
    }

    pub const fn as_str(self) -> &'static str {
        match self {
            Difficulty::Easy => "easy",
            Difficulty::Medium => "medium",
            Difficulty::Hard => "hard",
        }
    }
}

impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Difficulty {
    type Err = DomainError;

    /// Fails closed: any tag without a mapped word list is rejected rather
    /// than silently defaulting.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "easy" => Ok(Difficulty::Easy),
            "medium" => Ok(Difficulty::Medium),
            "hard" => Ok(Difficulty::Hard),
            _ => Err(DomainError::unknown_difficulty(s)),
        }
    }
}
