use serde::{Deserialize, Serialize};

use crate::game::ClockPhase;

/// A word the player has submitted in the current game
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WordSubmission {
    pub word: String,
    /// `None` until the dictionary answers, then fixed
    pub is_real_word: Option<bool>,
}

impl WordSubmission {
    pub fn pending(word: &str) -> Self {
        Self {
            word: word.to_string(),
            is_real_word: None,
        }
    }
}

/// One of the allowed letters, shown as a tile with its point value
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LetterTile {
    pub letter: char,
    pub score: u32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SubmissionStatus {
    Pending,
    Real,
    NotReal,
}

/// How a submission is rendered: real words carry their score
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SubmissionView {
    pub word: String,
    pub status: SubmissionStatus,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub score: Option<u32>,
}

/// Everything the frontend needs to draw the game
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameSnapshot {
    pub phase: ClockPhase,
    pub started: bool,
    pub seconds_remaining: u32,
    pub allowed_letters: Vec<LetterTile>,
    pub submissions: Vec<SubmissionView>,
    pub current_attempt: String,
    /// Letters in the current attempt that can't be used
    pub disallowed_letters: Vec<char>,
    pub score: u32,
    /// False before the first game and after time runs out
    pub accepting_input: bool,
}
