use serde::{Deserialize, Serialize};

/// Model version reported by the weighted lexicon scorer.
pub const MODEL_LEXICON: &str = "lexicon-v1.2";
/// Model version reported when a canned override short-circuits scoring.
pub const MODEL_CANNED: &str = "lexicon-v1.2-canned";
/// Model version reported by the basic word-list fallback scorer.
pub const MODEL_WORDLIST: &str = "wordlist-v1.0";
/// Model version reported by the fail-open neutral result.
pub const MODEL_FALLBACK: &str = "fallback-v1.0";

/// Label thresholds for the weighted scorer. The basic word-list scorer
/// classifies by raw counts and does not use these.
pub const POSITIVE_THRESHOLD: f64 = 0.3;
pub const NEGATIVE_THRESHOLD: f64 = -0.3;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SentimentLabel {
    Negative,
    Neutral,
    Positive,
}

impl SentimentLabel {
    /// Classify a normalized score. Deterministic: no label may contradict
    /// its accompanying score.
    pub fn from_score(score: f64) -> Self {
        if score > POSITIVE_THRESHOLD {
            SentimentLabel::Positive
        } else if score < NEGATIVE_THRESHOLD {
            SentimentLabel::Negative
        } else {
            SentimentLabel::Neutral
        }
    }
}

impl std::fmt::Display for SentimentLabel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SentimentLabel::Negative => write!(f, "negative"),
            SentimentLabel::Neutral => write!(f, "neutral"),
            SentimentLabel::Positive => write!(f, "positive"),
        }
    }
}

/// Output of a single scoring call. Created fresh per call; the scorer
/// retains no reference after returning.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SentimentResult {
    pub sentiment: SentimentLabel,
    /// Normalized score in [-1, 1].
    pub score: f64,
    /// Derived scalar in [0, 1]; lexical evidence, not a probability.
    pub confidence: f64,
    pub model_version: String,
    pub processing_time_ms: u64,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub error: Option<String>,
}

impl SentimentResult {
    /// Fail-open default: sentiment scoring is advisory, so an internal
    /// fault yields a neutral result instead of an unhandled error.
    pub fn fail_open(detail: impl Into<String>, processing_time_ms: u64) -> Self {
        Self {
            sentiment: SentimentLabel::Neutral,
            score: 0.0,
            confidence: 0.5,
            model_version: MODEL_FALLBACK.to_string(),
            processing_time_ms,
            error: Some(detail.into()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn label_serializes_lowercase() {
        assert_eq!(
            serde_json::to_string(&SentimentLabel::Positive).unwrap(),
            "\"positive\""
        );
        assert_eq!(
            serde_json::to_string(&SentimentLabel::Negative).unwrap(),
            "\"negative\""
        );
    }

    #[test]
    fn from_score_thresholds() {
        assert_eq!(SentimentLabel::from_score(0.31), SentimentLabel::Positive);
        assert_eq!(SentimentLabel::from_score(0.3), SentimentLabel::Neutral);
        assert_eq!(SentimentLabel::from_score(-0.3), SentimentLabel::Neutral);
        assert_eq!(SentimentLabel::from_score(-0.31), SentimentLabel::Negative);
        assert_eq!(SentimentLabel::from_score(0.0), SentimentLabel::Neutral);
    }

    #[test]
    fn result_wire_shape() {
        let result = SentimentResult {
            sentiment: SentimentLabel::Neutral,
            score: 0.0,
            confidence: 0.5,
            model_version: MODEL_LEXICON.to_string(),
            processing_time_ms: 1,
            error: None,
        };
        let json = serde_json::to_value(&result).unwrap();
        assert_eq!(json["sentiment"], "neutral");
        assert_eq!(json["model_version"], "lexicon-v1.2");
        // error is omitted entirely when absent
        assert!(json.get("error").is_none());
    }

    #[test]
    fn fail_open_is_neutral() {
        let result = SentimentResult::fail_open("boom", 0);
        assert_eq!(result.sentiment, SentimentLabel::Neutral);
        assert_eq!(result.score, 0.0);
        assert_eq!(result.confidence, 0.5);
        assert_eq!(result.error.as_deref(), Some("boom"));
    }
}
