//! Weighted lexicon scoring: single left-to-right pass with negation
//! handling, exclamation intensification, then normalization into a
//! `SentimentResult`.

use std::panic::{catch_unwind, AssertUnwindSafe};
use std::time::Instant;

use tracing::warn;

use crate::error::{Result, SentimeterError};
use crate::lexicon::{is_negation, weight_of};
use crate::tokenize::tokenize;
use crate::types::{SentimentLabel, SentimentResult, MODEL_LEXICON};

/// Negation stops applying after this many non-matching tokens.
const NEGATION_WINDOW: usize = 3;
/// Added (or subtracted) per bare "!" token, following the running total's sign.
const EXCLAMATION_BOOST: f64 = 0.3;

/// Accumulate weights over the token sequence. Returns the raw total and the
/// number of lexicon matches.
///
/// Negation scope is tracked from the index of the most recent negation
/// token: after `NEGATION_WINDOW` non-matching tokens the flag decays so a
/// "not" does not leak across unrelated clauses.
pub fn score_tokens(tokens: &[String]) -> (f64, usize) {
    let mut total = 0.0;
    let mut matched = 0usize;
    let mut negation_active = false;
    let mut last_negation: Option<usize> = None;

    for (i, token) in tokens.iter().enumerate() {
        if is_negation(token) {
            negation_active = true;
            last_negation = Some(i);
            continue;
        }

        if let Some(weight) = weight_of(token) {
            let value = if negation_active {
                negation_active = false;
                -weight
            } else {
                weight
            };
            total += value;
            matched += 1;
        } else if negation_active {
            if let Some(n) = last_negation {
                if i - n > NEGATION_WINDOW {
                    negation_active = false;
                }
            }
        }

        // Intensifier: applies every time a bare "!" appears, independent of
        // lexicon and negation handling. Does not count as a match.
        if token == "!" {
            if total > 0.0 {
                total += EXCLAMATION_BOOST;
            } else if total < 0.0 {
                total -= EXCLAMATION_BOOST;
            }
        }
    }

    (total, matched)
}

/// Normalize the accumulated total into (score, label, confidence).
pub fn normalize(total: f64, matched: usize, token_count: usize) -> (f64, SentimentLabel, f64) {
    let score = if matched > 0 {
        (total / matched.max(1) as f64).clamp(-1.0, 1.0)
    } else {
        0.0
    };
    let label = SentimentLabel::from_score(score);

    let score_confidence = (0.5 + score.abs() * 0.5).min(1.0);
    let match_ratio = matched as f64 / token_count.max(1) as f64;
    let confidence = (score_confidence * (0.5 + match_ratio * 0.5)).clamp(0.0, 1.0);

    (score, label, confidence)
}

/// Score a span of text with the weighted lexicon strategy.
///
/// Pure and synchronous: no I/O, no locks, O(tokens). Safe under arbitrary
/// concurrency because the lexicon tables are read-only statics.
pub fn analyze(text: &str) -> Result<SentimentResult> {
    if text.trim().is_empty() {
        return Err(SentimeterError::InvalidInput("text is required".into()));
    }

    let start = Instant::now();
    let tokens = tokenize(text);
    let (total, matched) = score_tokens(&tokens);
    let (score, sentiment, confidence) = normalize(total, matched, tokens.len());

    Ok(SentimentResult {
        sentiment,
        score,
        confidence,
        model_version: MODEL_LEXICON.to_string(),
        processing_time_ms: start.elapsed().as_millis() as u64,
        error: None,
    })
}

/// Like [`analyze`], but converts any panic during scoring into the
/// fail-open neutral result instead of unwinding into the caller. Invalid
/// input is still surfaced as an error.
pub fn analyze_guarded(text: &str) -> Result<SentimentResult> {
    if text.trim().is_empty() {
        return Err(SentimeterError::InvalidInput("text is required".into()));
    }

    let start = Instant::now();
    match catch_unwind(AssertUnwindSafe(|| analyze(text))) {
        Ok(result) => result,
        Err(panic) => {
            let detail = panic
                .downcast_ref::<&str>()
                .map(|s| s.to_string())
                .or_else(|| panic.downcast_ref::<String>().cloned())
                .unwrap_or_else(|| "unknown scoring failure".to_string());
            warn!(error = %detail, "Scoring panicked, returning neutral fallback");
            Ok(SentimentResult::fail_open(
                SentimeterError::Scoring(detail).to_string(),
                start.elapsed().as_millis() as u64,
            ))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn score_of(text: &str) -> SentimentResult {
        analyze(text).unwrap()
    }

    // --- scoring pass ---

    #[test]
    fn negation_inverts_next_match() {
        let plain = score_tokens(&tokenize("this is good"));
        let negated = score_tokens(&tokenize("this is not good"));
        assert_eq!(plain.0, 0.8);
        assert_eq!(negated.0, -0.8);
        assert_eq!(plain.1, 1);
        assert_eq!(negated.1, 1);
    }

    #[test]
    fn negation_clears_after_applying_once() {
        // "not good good": first "good" inverted, second taken as-is
        let (total, matched) = score_tokens(&tokenize("not good good"));
        assert_eq!(matched, 2);
        assert!((total - 0.0).abs() < 1e-9);
    }

    #[test]
    fn negation_survives_three_unmatched_tokens() {
        // not@0, three filler tokens, good@4: 4 - 0 > 3 fails only at the
        // 4th filler, so the inversion still applies here
        let (total, _) = score_tokens(&tokenize("not foo bar baz good"));
        assert_eq!(total, -0.8);
    }

    #[test]
    fn negation_decays_after_window() {
        // not@0, four filler tokens, good@5: flag cleared before the match
        let (total, _) = score_tokens(&tokenize("not foo bar baz qux good"));
        assert_eq!(total, 0.8);
    }

    #[test]
    fn exclamation_boosts_positive_total() {
        let plain = score_tokens(&tokenize("great"));
        let boosted = score_tokens(&tokenize("great!"));
        assert_eq!(plain.0, 0.9);
        assert!((boosted.0 - 1.2).abs() < 1e-9);
        // "!" is not a lexicon match
        assert_eq!(boosted.1, 1);
    }

    #[test]
    fn exclamation_deepens_negative_total() {
        let (total, _) = score_tokens(&tokenize("terrible!"));
        assert!((total - (-1.2)).abs() < 1e-9);
    }

    #[test]
    fn exclamation_is_noop_at_zero() {
        let (total, matched) = score_tokens(&tokenize("whatever!"));
        assert_eq!(total, 0.0);
        assert_eq!(matched, 0);
    }

    // --- normalization ---

    #[test]
    fn no_matches_means_neutral_zero() {
        let (score, label, _) = normalize(0.0, 0, 3);
        assert_eq!(score, 0.0);
        assert_eq!(label, SentimentLabel::Neutral);
    }

    #[test]
    fn score_is_clamped() {
        let (score, _, _) = normalize(5.0, 1, 1);
        assert_eq!(score, 1.0);
        let (score, _, _) = normalize(-5.0, 1, 1);
        assert_eq!(score, -1.0);
    }

    #[test]
    fn confidence_combines_magnitude_and_match_ratio() {
        // score 1.0, every token matched: full confidence
        let (_, _, confidence) = normalize(1.0, 1, 1);
        assert!((confidence - 1.0).abs() < 1e-9);
        // no matches: 0.5 * 0.5
        let (_, _, confidence) = normalize(0.0, 0, 4);
        assert!((confidence - 0.25).abs() < 1e-9);
    }

    // --- end-to-end properties ---

    #[test]
    fn bounds_hold_for_varied_inputs() {
        let inputs = [
            "great great great great great!!!!",
            "terrible horrible awful hate hate!!!!",
            "the and of",
            "",
            "not not not good",
            "okay.",
        ];
        for text in inputs {
            if let Ok(result) = analyze(text) {
                assert!((-1.0..=1.0).contains(&result.score), "{text}");
                assert!((0.0..=1.0).contains(&result.confidence), "{text}");
                assert_eq!(result.sentiment, SentimentLabel::from_score(result.score));
            }
        }
    }

    #[test]
    fn scoring_is_idempotent() {
        let a = score_of("This product is not good! I hate it!");
        let b = score_of("This product is not good! I hate it!");
        assert_eq!(a.sentiment, b.sentiment);
        assert_eq!(a.score, b.score);
        assert_eq!(a.confidence, b.confidence);
    }

    #[test]
    fn empty_text_is_invalid_input() {
        assert!(matches!(
            analyze(""),
            Err(SentimeterError::InvalidInput(_))
        ));
        assert!(matches!(
            analyze("   "),
            Err(SentimeterError::InvalidInput(_))
        ));
    }

    #[test]
    fn unmatched_text_is_neutral() {
        let result = score_of("the and of");
        assert_eq!(result.sentiment, SentimentLabel::Neutral);
        assert_eq!(result.score, 0.0);
    }

    // --- concrete scenarios ---

    #[test]
    fn enthusiastic_review_is_positive() {
        let result = score_of("This is great product! I love it.");
        assert_eq!(result.sentiment, SentimentLabel::Positive);
        assert!(result.score > 0.3);
    }

    #[test]
    fn harsh_review_is_negative() {
        let result = score_of("The service was terrible and the staff was rude.");
        assert_eq!(result.sentiment, SentimentLabel::Negative);
        assert!(result.score < -0.3);
    }

    #[test]
    fn lukewarm_review_is_neutral() {
        // "okay" carries 0.1, under the 0.3 threshold
        let result = score_of("The weather is okay today.");
        assert_eq!(result.sentiment, SentimentLabel::Neutral);
        assert!((result.score - 0.1).abs() < 1e-9);
    }

    #[test]
    fn negated_and_intensified_review_is_negative() {
        let result = score_of("This product is not good! I hate it!");
        assert_eq!(result.sentiment, SentimentLabel::Negative);
        assert!(result.score <= -0.3);
    }

    #[test]
    fn guarded_matches_plain_analyze_on_good_input() {
        let a = analyze("this is great").unwrap();
        let b = analyze_guarded("this is great").unwrap();
        assert_eq!(a.sentiment, b.sentiment);
        assert_eq!(a.score, b.score);
    }

    #[test]
    fn guarded_rejects_empty_text() {
        assert!(analyze_guarded("").is_err());
    }
}
