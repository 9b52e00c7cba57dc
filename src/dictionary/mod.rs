pub mod remote;
pub mod word_list;

use async_trait::async_trait;

pub use remote::RemoteDictionary;
pub use word_list::WordListDictionary;

#[derive(Debug, thiserror::Error)]
pub enum DictionaryError {
    #[error("dictionary request failed: {0}")]
    Request(#[from] reqwest::Error),
    #[error("dictionary answered with status {0}")]
    Status(reqwest::StatusCode),
    #[error("failed to read word list: {0}")]
    Io(#[from] std::io::Error),
}

/// Answers whether a word is in a reference dictionary
#[async_trait]
pub trait DictionaryLookup: Send + Sync {
    async fn is_real_word(&self, word: &str) -> Result<bool, DictionaryError>;
}
