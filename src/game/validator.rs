/// Letter legality checks against the allowed letters of the current game.
/// Comparisons are lowercase on both sides.
pub struct WordValidator<'a> {
    allowed: &'a [char],
}

impl<'a> WordValidator<'a> {
    pub fn new(allowed: &'a [char]) -> Self {
        Self { allowed }
    }

    /// Check if a single letter is one of the allowed letters
    pub fn is_letter_allowed(&self, letter: char) -> bool {
        let letter = letter.to_ascii_lowercase();
        self.allowed.iter().any(|c| c.to_ascii_lowercase() == letter)
    }

    /// Check that every letter of the word is allowed.
    /// The empty word passes.
    pub fn uses_only_allowed_letters(&self, word: &str) -> bool {
        word.chars().all(|c| self.is_letter_allowed(c))
    }

    /// Letters of the word that are not allowed, in the order they appear
    pub fn disallowed_letters_in_word(&self, word: &str) -> Vec<char> {
        word.chars().filter(|c| !self.is_letter_allowed(*c)).collect()
    }
}
