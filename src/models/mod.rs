pub mod game;

pub use game::{GameSnapshot, LetterTile, SubmissionStatus, SubmissionView, WordSubmission};
