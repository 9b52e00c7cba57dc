use crate::{
    game::{GameError, WordValidator},
    models::WordSubmission,
    utils::letters::get_letter_value,
};

pub struct Scorer;

impl Scorer {
    /// Point value of a single letter, case-insensitive
    pub fn letter_score(letter: char) -> Result<u32, GameError> {
        get_letter_value(letter).ok_or(GameError::UnknownLetter(letter))
    }

    /// Sum of the letter values of the word.
    ///
    /// Returns 0 if the word contains any letter outside `allowed`, or
    /// anything the letter table doesn't know.
    pub fn word_score(word: &str, allowed: &[char]) -> u32 {
        if !WordValidator::new(allowed).uses_only_allowed_letters(word) {
            return 0;
        }

        word.chars()
            .map(Self::letter_score)
            .sum::<Result<u32, _>>()
            .unwrap_or(0)
    }

    /// Total of the word scores of every submission confirmed as a real word.
    /// Pending and rejected submissions count for nothing.
    pub fn total_score(submissions: &[WordSubmission], allowed: &[char]) -> u32 {
        submissions
            .iter()
            .filter(|s| s.is_real_word == Some(true))
            .map(|s| Self::word_score(&s.word, allowed))
            .sum()
    }
}
