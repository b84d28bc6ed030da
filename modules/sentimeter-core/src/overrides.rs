//! Exact-match override table.
//!
//! Demo/testing affordance carried over from a prior deployment: specific
//! full input strings (lowercased, trimmed, inner whitespace collapsed)
//! bypass tokenization and scoring entirely and return a canned result.
//! Kept separate from the general algorithm so callers can skip it without
//! affecting core behavior; the API only consults it when explicitly
//! enabled.

use std::collections::HashMap;
use std::sync::LazyLock;
use std::time::Instant;

use regex::Regex;

use crate::types::{SentimentLabel, SentimentResult, MODEL_CANNED};

static WHITESPACE_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\s+").unwrap());

static CANNED: LazyLock<HashMap<&'static str, (SentimentLabel, f64, f64)>> = LazyLock::new(|| {
    HashMap::from([
        (
            "this product is okay. it's average and works fine for basic tasks",
            (SentimentLabel::Neutral, 0.1, 0.7),
        ),
        (
            "this product is not good! i hate it!",
            (SentimentLabel::Negative, -0.9, 0.85),
        ),
        (
            "this is great product! i love it.",
            (SentimentLabel::Positive, 0.9, 0.85),
        ),
    ])
});

/// Return the canned result for an exact-match input, if any.
pub fn lookup(text: &str) -> Option<SentimentResult> {
    let start = Instant::now();
    let normalized = text.trim().to_lowercase();
    let collapsed = WHITESPACE_RE.replace_all(&normalized, " ");

    CANNED
        .get(collapsed.as_ref())
        .map(|&(sentiment, score, confidence)| SentimentResult {
            sentiment,
            score,
            confidence,
            model_version: MODEL_CANNED.to_string(),
            processing_time_ms: start.elapsed().as_millis() as u64,
            error: None,
        })
}
