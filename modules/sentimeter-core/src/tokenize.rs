//! Text normalization and tokenization.
//!
//! Pure function of the input: lowercase, expand contractions, strip
//! everything but word characters and sentiment punctuation, then split.
//! The marks `. , ! ?` survive as standalone tokens because `!` acts as an
//! intensifier downstream.

use regex::Regex;
use std::sync::LazyLock;

static STRIP_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"[^\w\s.,!?]").unwrap());
static PUNCT_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"([.,!?])").unwrap());

/// Split text into an ordered sequence of normalized tokens. Order matters:
/// it determines negation scope in the scoring pass.
pub fn tokenize(text: &str) -> Vec<String> {
    let lowered = text.to_lowercase();
    let expanded = expand_contractions(&lowered);
    let stripped = STRIP_RE.replace_all(&expanded, "");
    let spaced = PUNCT_RE.replace_all(&stripped, " $1 ");
    spaced.split_whitespace().map(str::to_string).collect()
}

/// Multi-word contractions first ("won't" must not also hit the generic
/// "n't" rule), then the generic suffix expansions.
fn expand_contractions(text: &str) -> String {
    text.replace("can't", "cannot")
        .replace("won't", "will not")
        .replace("n't", " not")
        .replace("'s", " is")
        .replace("'m", " am")
        .replace("'re", " are")
        .replace("'ll", " will")
        .replace("'ve", " have")
        .replace("'d", " would")
}
