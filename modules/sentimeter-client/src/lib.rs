pub mod batch;
pub mod error;

pub use batch::{score_comments, tally, Comment, CommentStats, ScoredComment};
pub use error::{ClientError, Result};

use std::time::Duration;

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde::Serialize;
use tracing::warn;
use uuid::Uuid;

use sentimeter_core::{basic, SentimentResult};

/// Where a result actually came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ScorerOrigin {
    /// The network-backed weighted scorer answered.
    Remote,
    /// The endpoint was unreachable or errored; the local word-list
    /// strategy was used instead.
    LocalFallback,
}

/// A scoring outcome with provenance, stamped for correlation by the caller.
#[derive(Debug, Clone, Serialize)]
pub struct Analysis {
    pub id: Uuid,
    pub result: SentimentResult,
    pub origin: ScorerOrigin,
    pub analyzed_at: DateTime<Utc>,
}

/// Anything that can score a span of text. Implemented by the HTTP client
/// and, for offline batch work, by [`WordlistScorer`].
#[async_trait]
pub trait TextScorer: Send + Sync {
    async fn score(&self, text: &str) -> SentimentResult;
}

/// Purely local scorer using the basic word-list strategy. No network.
pub struct WordlistScorer;

#[async_trait]
impl TextScorer for WordlistScorer {
    async fn score(&self, text: &str) -> SentimentResult {
        basic::score(text)
    }
}

pub struct SentimentClient {
    client: reqwest::Client,
    base_url: String,
}

impl SentimentClient {
    pub fn new(base_url: &str) -> Self {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(10))
            .build()
            .expect("Failed to build HTTP client");

        Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    /// Score text, preferring the remote weighted scorer. Never fails: on
    /// any network or API error the local word-list strategy answers
    /// instead. The two strategies stay distinct; this only selects between
    /// them.
    pub async fn analyze(&self, text: &str) -> Analysis {
        match self.remote_analyze(text).await {
            Ok(result) => Analysis {
                id: Uuid::new_v4(),
                result,
                origin: ScorerOrigin::Remote,
                analyzed_at: Utc::now(),
            },
            Err(e) => {
                warn!(error = %e, "Remote scorer unavailable, using word-list fallback");
                Analysis {
                    id: Uuid::new_v4(),
                    result: basic::score(text),
                    origin: ScorerOrigin::LocalFallback,
                    analyzed_at: Utc::now(),
                }
            }
        }
    }

    /// POST the text to the analyze endpoint and parse the result.
    pub async fn remote_analyze(&self, text: &str) -> Result<SentimentResult> {
        let endpoint = format!("{}/analyze", self.base_url);
        let body = serde_json::json!({ "text": text });

        let resp = self.client.post(&endpoint).json(&body).send().await?;

        let status = resp.status();
        if !status.is_success() {
            let message = resp.text().await.unwrap_or_default();
            return Err(ClientError::Api {
                status: status.as_u16(),
                message,
            });
        }

        Ok(resp.json::<SentimentResult>().await?)
    }
}

#[async_trait]
impl TextScorer for SentimentClient {
    async fn score(&self, text: &str) -> SentimentResult {
        self.analyze(text).await.result
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use sentimeter_core::SentimentLabel;

    #[tokio::test]
    async fn unreachable_endpoint_falls_back_locally() {
        // Port 9 (discard) refuses connections immediately
        let client = SentimentClient::new("http://127.0.0.1:9");
        let analysis = client.analyze("I love this, it is great").await;
        assert_eq!(analysis.origin, ScorerOrigin::LocalFallback);
        assert_eq!(analysis.result.sentiment, SentimentLabel::Positive);
        assert_eq!(analysis.result.model_version, "wordlist-v1.0");
    }

    #[tokio::test]
    async fn wordlist_scorer_is_offline() {
        let result = WordlistScorer.score("terrible awful mess").await;
        assert_eq!(result.sentiment, SentimentLabel::Negative);
    }

    #[test]
    fn base_url_is_normalized() {
        let client = SentimentClient::new("http://example.com/api/");
        assert_eq!(client.base_url, "http://example.com/api");
    }
}
