use crate::{game::WordValidator, models::WordSubmission};

/// Result of a word submission
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// Appended to the ledger, waiting on the dictionary
    Accepted,
    Rejected(RejectReason),
}

/// Why a submission was turned away
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RejectReason {
    /// No game in progress (never started, or time is up)
    NotRunning,
    Empty,
    DisallowedLetters(Vec<char>),
    AlreadySubmitted,
}

/// Result of applying a dictionary answer to the ledger
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResolveOutcome {
    Resolved,
    /// The word already had an answer, which is kept
    AlreadyResolved,
    /// No submission with that word in this game
    UnknownWord,
    /// The answer belongs to an earlier game
    Stale,
}

/// Ordered, append-only list of the words submitted in one game
#[derive(Debug, Clone, Default)]
pub struct SubmissionLedger {
    entries: Vec<WordSubmission>,
}

impl SubmissionLedger {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn entries(&self) -> &[WordSubmission] {
        &self.entries
    }

    pub fn contains(&self, word: &str) -> bool {
        self.entries.iter().any(|s| s.word == word)
    }

    /// Append a pending submission if the word only uses allowed letters
    /// and hasn't been submitted before. Otherwise nothing changes.
    pub fn submit(&mut self, word: &str, validator: &WordValidator<'_>) -> SubmitOutcome {
        let disallowed = validator.disallowed_letters_in_word(word);
        if !disallowed.is_empty() {
            return SubmitOutcome::Rejected(RejectReason::DisallowedLetters(disallowed));
        }

        if self.contains(word) {
            return SubmitOutcome::Rejected(RejectReason::AlreadySubmitted);
        }

        self.entries.push(WordSubmission::pending(word));
        SubmitOutcome::Accepted
    }

    /// Record whether a submitted word is real. The first answer sticks.
    pub fn resolve(&mut self, word: &str, is_real_word: bool) -> ResolveOutcome {
        match self.entries.iter_mut().find(|s| s.word == word) {
            None => ResolveOutcome::UnknownWord,
            Some(submission) if submission.is_real_word.is_some() => {
                ResolveOutcome::AlreadyResolved
            }
            Some(submission) => {
                submission.is_real_word = Some(is_real_word);
                ResolveOutcome::Resolved
            }
        }
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }
}
