//! Batch comment scoring.
//!
//! Each comment is scored independently; results are paired with their
//! source id rather than correlated by completion order. The tally is pure
//! bookkeeping over labels, outside the scorer itself.

use futures::stream::{self, StreamExt};
use serde::{Deserialize, Serialize};

use sentimeter_core::SentimentLabel;

use crate::TextScorer;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Comment {
    pub id: String,
    pub text: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct ScoredComment {
    pub id: String,
    pub text: String,
    pub sentiment: SentimentLabel,
    pub score: f64,
    pub confidence: f64,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct CommentStats {
    pub total: usize,
    pub positive: usize,
    pub negative: usize,
    pub neutral: usize,
}

impl CommentStats {
    pub fn record(&mut self, label: SentimentLabel) {
        self.total += 1;
        match label {
            SentimentLabel::Positive => self.positive += 1,
            SentimentLabel::Negative => self.negative += 1,
            SentimentLabel::Neutral => self.neutral += 1,
        }
    }
}

/// Aggregate per-label counts over scored comments.
pub fn tally(scored: &[ScoredComment]) -> CommentStats {
    let mut stats = CommentStats::default();
    for comment in scored {
        stats.record(comment.sentiment);
    }
    stats
}

/// Score every comment with the given scorer, up to `concurrency` at a
/// time. Output order matches input order.
pub async fn score_comments<S: TextScorer>(
    scorer: &S,
    comments: &[Comment],
    concurrency: usize,
) -> (Vec<ScoredComment>, CommentStats) {
    let scored: Vec<ScoredComment> = stream::iter(comments.to_vec())
        .map(|comment| async move {
            let result = scorer.score(&comment.text).await;
            ScoredComment {
                id: comment.id,
                text: comment.text,
                sentiment: result.sentiment,
                score: result.score,
                confidence: result.confidence,
            }
        })
        .buffered(concurrency.max(1))
        .collect()
        .await;

    let stats = tally(&scored);
    (scored, stats)
}
