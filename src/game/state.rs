use rand::Rng;

use crate::{
    game::{
        ClockPhase, GameClock, LetterSelector, RejectReason, ResolveOutcome, Scorer,
        SubmissionLedger, SubmitOutcome, WordValidator,
    },
    models::{GameSnapshot, LetterTile, SubmissionStatus, SubmissionView, WordSubmission},
    utils::letters::get_letter_value,
};

/// Number of distinct letters drawn for every game
pub const LETTER_COUNT: usize = 7;

/// State of one player's game.
///
/// Every change goes through `start_game`, `set_attempt`, `submit_word`,
/// `tick` or `resolve_lookup`. Words and letters are kept lowercase.
#[derive(Debug, Clone)]
pub struct GameState {
    clock: GameClock,
    allowed_letters: Vec<char>,
    ledger: SubmissionLedger,
    current_attempt: String,
    /// Bumped on every start so late dictionary answers can be told apart
    generation: u64,
}

impl GameState {
    pub fn new(duration_secs: u32) -> Self {
        Self {
            clock: GameClock::new(duration_secs),
            allowed_letters: Vec::new(),
            ledger: SubmissionLedger::new(),
            current_attempt: String::new(),
            generation: 0,
        }
    }

    /// Start a fresh game with newly drawn letters. Returns the new generation.
    pub fn start_game(&mut self, rng: &mut impl Rng) -> u64 {
        let letters = LetterSelector::generate(LETTER_COUNT, rng);
        self.start_with_letters(letters)
    }

    /// Start a fresh game with the given letters
    pub fn start_with_letters(&mut self, letters: Vec<char>) -> u64 {
        self.generation += 1;
        self.allowed_letters = letters.iter().map(|c| c.to_ascii_lowercase()).collect();
        self.ledger.clear();
        self.current_attempt.clear();
        self.clock.start();
        self.generation
    }

    pub fn set_attempt(&mut self, text: &str) {
        self.current_attempt = text.to_lowercase();
    }

    /// Try to add a word to the ledger. The current attempt is cleared
    /// whether or not the word is accepted.
    pub fn submit_word(&mut self, word: &str) -> SubmitOutcome {
        self.current_attempt.clear();

        if !self.clock.is_running() {
            return SubmitOutcome::Rejected(RejectReason::NotRunning);
        }

        let word = word.trim().to_lowercase();
        if word.is_empty() {
            return SubmitOutcome::Rejected(RejectReason::Empty);
        }

        let validator = WordValidator::new(&self.allowed_letters);
        self.ledger.submit(&word, &validator)
    }

    /// Advance the countdown by one second
    pub fn tick(&mut self) -> ClockPhase {
        self.clock.tick()
    }

    /// Apply a dictionary answer issued during game `generation`.
    /// Answers from an earlier game are dropped.
    pub fn resolve_lookup(
        &mut self,
        generation: u64,
        word: &str,
        is_real_word: bool,
    ) -> ResolveOutcome {
        if generation != self.generation {
            return ResolveOutcome::Stale;
        }
        self.ledger.resolve(word, is_real_word)
    }

    pub fn started(&self) -> bool {
        self.clock.phase() != ClockPhase::NotStarted
    }

    pub fn phase(&self) -> ClockPhase {
        self.clock.phase()
    }

    pub fn seconds_remaining(&self) -> u32 {
        self.clock.seconds_remaining()
    }

    pub fn allowed_letters(&self) -> &[char] {
        &self.allowed_letters
    }

    pub fn submissions(&self) -> &[WordSubmission] {
        self.ledger.entries()
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }

    pub fn word_score(&self, word: &str) -> u32 {
        Scorer::word_score(word, &self.allowed_letters)
    }

    pub fn total_score(&self) -> u32 {
        Scorer::total_score(self.ledger.entries(), &self.allowed_letters)
    }

    pub fn snapshot(&self) -> GameSnapshot {
        let validator = WordValidator::new(&self.allowed_letters);

        let allowed_letters = self
            .allowed_letters
            .iter()
            .map(|&letter| LetterTile {
                letter,
                score: get_letter_value(letter).unwrap_or(0),
            })
            .collect();

        let submissions = self
            .ledger
            .entries()
            .iter()
            .map(|s| match s.is_real_word {
                None => SubmissionView {
                    word: s.word.clone(),
                    status: SubmissionStatus::Pending,
                    score: None,
                },
                Some(true) => SubmissionView {
                    word: s.word.clone(),
                    status: SubmissionStatus::Real,
                    score: Some(self.word_score(&s.word)),
                },
                Some(false) => SubmissionView {
                    word: s.word.clone(),
                    status: SubmissionStatus::NotReal,
                    score: None,
                },
            })
            .collect();

        GameSnapshot {
            phase: self.phase(),
            started: self.started(),
            seconds_remaining: self.seconds_remaining(),
            allowed_letters,
            submissions,
            current_attempt: self.current_attempt.clone(),
            disallowed_letters: validator.disallowed_letters_in_word(&self.current_attempt),
            score: self.total_score(),
            accepting_input: self.clock.is_running(),
        }
    }
}
