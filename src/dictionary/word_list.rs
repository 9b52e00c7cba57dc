use std::collections::HashSet;
use std::path::Path;

use async_trait::async_trait;
use tokio::fs;

use super::{DictionaryError, DictionaryLookup};

/// Dictionary backed by a newline-separated word list, for playing offline
pub struct WordListDictionary {
    words: HashSet<String>,
}

impl WordListDictionary {
    /// Load dictionary from a file
    pub async fn load<P: AsRef<Path>>(path: P) -> Result<Self, DictionaryError> {
        let content = fs::read_to_string(path).await?;
        let dict = Self::from_words(content.lines());

        tracing::info!("Loaded {} words into dictionary", dict.len());

        Ok(dict)
    }

    pub fn from_words<'a>(words: impl IntoIterator<Item = &'a str>) -> Self {
        let words = words
            .into_iter()
            .map(|line| line.trim().to_lowercase())
            .filter(|word| !word.is_empty())
            .collect();
        Self { words }
    }

    /// Check if a word exists in the dictionary
    pub fn contains(&self, word: &str) -> bool {
        self.words.contains(&word.to_lowercase())
    }

    /// Get the number of words in the dictionary
    pub fn len(&self) -> usize {
        self.words.len()
    }
}

#[async_trait]
impl DictionaryLookup for WordListDictionary {
    async fn is_real_word(&self, word: &str) -> Result<bool, DictionaryError> {
        Ok(self.contains(word))
    }
}
