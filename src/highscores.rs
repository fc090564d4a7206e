//! High score leaderboard
//!
//! In memory only; tracks the top 10 named scores. Serializable so a
//! presentation layer can store it wherever it likes.

use serde::{Deserialize, Serialize};

use crate::consts::{MAX_HIGH_SCORES, MAX_NAME_LEN};

/// A single leaderboard record
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HighScoreEntry {
    /// Trimmed player name
    pub name: String,
    pub score: u32,
    /// Formatted submission date
    pub date: String,
    /// Whether the coupon was unlocked in that round
    pub bonus_unlocked: bool,
}

/// Outcome of a leaderboard submission
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Submission {
    /// Blank name; nothing changed
    Rejected,
    /// Recorded at this 1-indexed rank
    Ranked(usize),
    /// Valid, but fell off the bottom of a full board
    Dropped,
}

/// High score leaderboard, best first
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HighScores {
    entries: Vec<HighScoreEntry>,
    #[serde(default = "default_capacity")]
    capacity: usize,
    #[serde(default = "default_name_len")]
    max_name_len: usize,
}

fn default_capacity() -> usize {
    MAX_HIGH_SCORES
}

fn default_name_len() -> usize {
    MAX_NAME_LEN
}

impl Default for HighScores {
    fn default() -> Self {
        Self::new()
    }
}

impl HighScores {
    /// Create empty top-10 leaderboard
    pub fn new() -> Self {
        Self::with_limits(MAX_HIGH_SCORES, MAX_NAME_LEN)
    }

    pub fn with_limits(capacity: usize, max_name_len: usize) -> Self {
        Self {
            entries: Vec::new(),
            capacity,
            max_name_len,
        }
    }

    /// Trim and length-limit a player name; `None` if nothing is left
    pub fn clean_name(&self, name: &str) -> Option<String> {
        let trimmed = name.trim();
        if trimmed.is_empty() {
            return None;
        }
        let cut: String = trimmed.chars().take(self.max_name_len).collect();
        Some(cut.trim_end().to_string())
    }

    /// Get the rank a score would achieve if submitted now (1-indexed)
    pub fn potential_rank(&self, score: u32) -> Option<usize> {
        // Ties rank below existing records
        let rank = self
            .entries
            .iter()
            .position(|e| score > e.score)
            .unwrap_or(self.entries.len())
            + 1;
        (rank <= self.capacity).then_some(rank)
    }

    /// Add a record, re-sort best first (stable on ties) and keep the top N
    pub fn submit(&mut self, name: &str, score: u32, bonus_unlocked: bool, date: String) -> Submission {
        let Some(name) = self.clean_name(name) else {
            log::debug!("Rejected blank leaderboard name");
            return Submission::Rejected;
        };

        let rank = self.potential_rank(score);

        self.entries.push(HighScoreEntry {
            name,
            score,
            date,
            bonus_unlocked,
        });
        // Stable: earlier submissions stay ahead on equal scores
        self.entries.sort_by(|a, b| b.score.cmp(&a.score));
        self.entries.truncate(self.capacity);

        match rank {
            Some(rank) => {
                log::info!("Leaderboard: {} points at rank {}", score, rank);
                Submission::Ranked(rank)
            }
            None => {
                log::info!("Leaderboard: {} points did not place", score);
                Submission::Dropped
            }
        }
    }

    pub fn entries(&self) -> &[HighScoreEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Check if the leaderboard is empty
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Get the top score (if any)
    pub fn top_score(&self) -> Option<u32> {
        self.entries.first().map(|e| e.score)
    }
}

/// Today's date for a new record, local time
pub fn today() -> String {
    chrono::Local::now().format("%Y-%m-%d").to_string()
}
