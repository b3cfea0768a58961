//! Word-list location configuration.
//!
//! The three difficulty lists live as flat line-delimited files in one
//! directory, configured via `HANGMAN_WORDS_DIR` (default `./words`).

use std::env;
use std::path::{Path, PathBuf};

use crate::domain::Difficulty;
use crate::error::AppError;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WordsConfig {
    dir: PathBuf,
}

impl WordsConfig {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    /// Build from environment (defaults to `./words`).
    pub fn from_env() -> Self {
        let dir = env::var("HANGMAN_WORDS_DIR").unwrap_or_else(|_| "./words".to_string());
        Self::new(dir)
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    pub fn list_path(&self, difficulty: Difficulty) -> PathBuf {
        self.dir.join(difficulty.word_list_file())
    }

    /// Check that every difficulty's list exists. Run at startup and by the
    /// health endpoint so a missing list is reported before the first round.
    pub fn verify(&self) -> Result<(), AppError> {
        let missing: Vec<String> = Difficulty::ALL
            .iter()
            .map(|d| self.list_path(*d))
            .filter(|path| !path.is_file())
            .map(|path| path.display().to_string())
            .collect();

        if missing.is_empty() {
            Ok(())
        } else {
            Err(AppError::config(format!(
                "missing word lists: {}",
                missing.join(", ")
            )))
        }
    }
}

#[cfg(test)]
mod tests {
    use std::fs;

    use super::*;

    #[test]
    fn verify_reports_missing_lists() {
        let dir = tempfile::tempdir().unwrap();
        let config = WordsConfig::new(dir.path());
        assert!(config.verify().is_err());

        for d in Difficulty::ALL {
            fs::write(config.list_path(d), "WORD\n").unwrap();
        }
        assert!(config.verify().is_ok());
    }

    #[test]
    fn list_path_appends_difficulty_file() {
        let config = WordsConfig::new("/srv/words");
        assert_eq!(
            config.list_path(Difficulty::Hard),
            PathBuf::from("/srv/words/hard.txt")
        );
    }
}
