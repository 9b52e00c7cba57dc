// Game engine modules

pub mod clock;
pub mod ledger;
pub mod scorer;
pub mod selector;
pub mod state;
pub mod validator;

pub use clock::{ClockPhase, GameClock};
pub use ledger::{RejectReason, ResolveOutcome, SubmissionLedger, SubmitOutcome};
pub use scorer::Scorer;
pub use selector::LetterSelector;
pub use state::{GameState, LETTER_COUNT};
pub use validator::WordValidator;

/// Errors raised by the game engine
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum GameError {
    #[error("'{0}' has no point value")]
    UnknownLetter(char),
}
