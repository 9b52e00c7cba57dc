use axum::Json;
use serde::Serialize;

use crate::{models::LetterTile, utils::letters::{get_letter_value, letter_pool}};

#[derive(Debug, Serialize)]
pub struct LetterValuesResponse {
    pub letters: Vec<LetterTile>,
}

/// Point value of every letter, alphabetically
pub async fn letter_values() -> Json<LetterValuesResponse> {
    let letters = letter_pool()
        .into_iter()
        .filter_map(|letter| get_letter_value(letter).map(|score| LetterTile { letter, score }))
        .collect();

    Json(LetterValuesResponse { letters })
}
