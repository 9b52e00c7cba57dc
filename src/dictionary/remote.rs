use std::time::Duration;

use async_trait::async_trait;
use serde::Deserialize;

use super::{DictionaryError, DictionaryLookup};

/// Body of a dictionary entries lookup. Any result means the word exists.
#[derive(Debug, Deserialize)]
struct EntriesResponse {
    results: Vec<serde_json::Value>,
}

/// Looks words up against an HTTP dictionary service
/// (`GET {url}?headword={word}`)
pub struct RemoteDictionary {
    client: reqwest::Client,
    url: String,
}

impl RemoteDictionary {
    pub fn new(client: reqwest::Client, url: impl Into<String>) -> Self {
        Self {
            client,
            url: url.into(),
        }
    }

    /// Build with a dedicated client using the given request timeout
    pub fn with_timeout(url: impl Into<String>, timeout: Duration) -> Result<Self, DictionaryError> {
        let client = reqwest::Client::builder().timeout(timeout).build()?;
        Ok(Self::new(client, url))
    }
}

#[async_trait]
impl DictionaryLookup for RemoteDictionary {
    async fn is_real_word(&self, word: &str) -> Result<bool, DictionaryError> {
        let response = self
            .client
            .get(&self.url)
            .query(&[("headword", word)])
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(DictionaryError::Status(status));
        }

        let entries: EntriesResponse = response.json().await?;
        tracing::debug!("Dictionary returned {} results for '{}'", entries.results.len(), word);

        Ok(!entries.results.is_empty())
    }
}
