//! Basic word-count fallback strategy.
//!
//! Deliberately cruder than the weighted scorer: fixed positive/negative
//! indicator lists, whole-word case-insensitive counting, no weights, no
//! negation handling. Used when the network-backed scorer is unreachable.
//! Its word lists and labeling rules are independent of the weighted
//! scorer's and must never be blended with them.

use std::sync::LazyLock;
use std::time::Instant;

use regex::Regex;

use crate::types::{SentimentLabel, SentimentResult, MODEL_WORDLIST};

const POSITIVE_WORDS: &[&str] = &[
    "love", "great", "awesome", "amazing", "excellent", "fantastic", "wonderful", "brilliant",
    "perfect", "best", "good", "nice", "beautiful", "outstanding", "superb", "incredible",
    "fabulous", "marvelous", "terrific", "splendid", "magnificent", "glorious", "divine",
    "heavenly", "delightful", "charming", "lovely", "sweet", "kind", "helpful", "supportive",
    "encouraging", "inspiring", "motivating", "uplifting", "positive", "optimistic", "hopeful",
    "joyful", "happy", "pleased", "satisfied", "content", "grateful", "thankful", "blessed",
    "lucky", "fortunate", "successful", "achieved", "accomplished", "completed", "finished",
    "improved", "enhanced", "upgraded", "better", "stronger", "faster", "smoother", "easier",
];

const NEGATIVE_WORDS: &[&str] = &[
    "hate", "terrible", "awful", "horrible", "dreadful", "atrocious", "abysmal", "appalling",
    "disgusting", "revolting", "nauseating", "sickening", "vile", "foul", "rotten", "corrupt",
    "evil", "wicked", "sinful", "immoral", "unethical", "dishonest", "deceitful", "treacherous",
    "betrayal", "abandoned", "rejected", "excluded", "isolated", "lonely", "alone", "desperate",
    "hopeless", "helpless", "powerless", "weak", "fragile", "vulnerable", "exposed", "defenseless",
    "defeated", "conquered", "overwhelmed", "crushed", "destroyed", "ruined", "wasted", "lost",
    "failed", "disappointed", "frustrated", "angry", "furious", "enraged", "livid", "irritated",
    "annoyed", "bothered", "troubled", "worried", "anxious", "nervous", "scared", "frightened",
    "terrified", "panicked", "stressed", "tired", "exhausted", "drained", "burned", "out",
];

fn whole_word_matcher(words: &[&str]) -> Regex {
    let pattern = format!(r"(?i)\b(?:{})\b", words.join("|"));
    Regex::new(&pattern).unwrap()
}

static POSITIVE_RE: LazyLock<Regex> = LazyLock::new(|| whole_word_matcher(POSITIVE_WORDS));
static NEGATIVE_RE: LazyLock<Regex> = LazyLock::new(|| whole_word_matcher(NEGATIVE_WORDS));

/// Label by raw counts: whichever list matches more often wins; ties and
/// zero matches are neutral.
pub fn classify(text: &str) -> SentimentLabel {
    let (positive, negative) = count_matches(text);
    if positive > negative && positive > 0 {
        SentimentLabel::Positive
    } else if negative > positive && negative > 0 {
        SentimentLabel::Negative
    } else {
        SentimentLabel::Neutral
    }
}

/// Full fallback result for callers that need the shared result type. The
/// score is the normalized count difference; confidence is capped at 0.9
/// since this strategy carries less evidence than the weighted one.
pub fn score(text: &str) -> SentimentResult {
    let start = Instant::now();
    let (positive, negative) = count_matches(text);

    let sentiment = if positive > negative && positive > 0 {
        SentimentLabel::Positive
    } else if negative > positive && negative > 0 {
        SentimentLabel::Negative
    } else {
        SentimentLabel::Neutral
    };

    let total = positive + negative;
    let score = (positive as f64 - negative as f64) / total.max(1) as f64;
    let confidence = (0.5 + score.abs() * 0.5).min(0.9);

    SentimentResult {
        sentiment,
        score: score.clamp(-1.0, 1.0),
        confidence,
        model_version: MODEL_WORDLIST.to_string(),
        processing_time_ms: start.elapsed().as_millis() as u64,
        error: None,
    }
}

fn count_matches(text: &str) -> (usize, usize) {
    let positive = POSITIVE_RE.find_iter(text).count();
    let negative = NEGATIVE_RE.find_iter(text).count();
    (positive, negative)
}
