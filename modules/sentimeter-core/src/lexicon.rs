//! Fixed word-weight table and negation set for the weighted scorer.
//!
//! Both tables are built once at first use and never mutated, so any number
//! of concurrent scoring calls can read them without coordination.

use std::collections::{HashMap, HashSet};
use std::sync::LazyLock;

/// Word → signed weight in [-1.0, 1.0]. Keys are lowercase; the tokenizer
/// guarantees lookups are lowercase too.
static LEXICON: LazyLock<HashMap<&'static str, f64>> = LazyLock::new(|| {
    HashMap::from([
        // Positive
        ("good", 0.8),
        ("great", 0.9),
        ("excellent", 1.0),
        ("amazing", 0.95),
        ("wonderful", 0.9),
        ("fantastic", 0.95),
        ("terrific", 0.9),
        ("outstanding", 0.85),
        ("superb", 0.95),
        ("awesome", 0.9),
        ("brilliant", 0.85),
        ("fabulous", 0.8),
        ("impressive", 0.75),
        ("remarkable", 0.7),
        ("exceptional", 0.85),
        ("love", 0.9),
        ("like", 0.7),
        ("enjoy", 0.75),
        ("pleased", 0.7),
        ("happy", 0.8),
        ("delighted", 0.85),
        ("satisfied", 0.75),
        ("thrilled", 0.9),
        // Negative
        ("bad", -0.8),
        ("terrible", -0.9),
        ("horrible", -0.95),
        ("awful", -0.9),
        ("poor", -0.7),
        ("disappointing", -0.75),
        ("mediocre", -0.6),
        ("subpar", -0.65),
        ("unsatisfactory", -0.8),
        ("inadequate", -0.7),
        ("inferior", -0.75),
        ("defective", -0.85),
        ("faulty", -0.8),
        ("flawed", -0.7),
        ("broken", -0.85),
        ("hate", -0.9),
        ("dislike", -0.8),
        ("unhappy", -0.75),
        ("frustrated", -0.7),
        ("annoyed", -0.65),
        ("angry", -0.8),
        ("upset", -0.7),
        ("disappointed", -0.75),
        // Weakly polar
        ("okay", 0.1),
        ("fine", 0.2),
        ("average", 0.0),
        ("acceptable", 0.2),
        ("decent", 0.3),
        ("standard", 0.1),
        ("normal", 0.0),
        ("usual", 0.0),
        ("common", 0.0),
        ("ordinary", -0.1),
        ("so-so", -0.2),
        ("fair", 0.2),
        ("moderate", 0.1),
        ("tolerable", 0.1),
    ])
});

/// Particles that invert the next lexicon match. Contraction forms
/// ("can't", "isn't", ...) never reach this set: the tokenizer expands them
/// into these base words before lookup.
static NEGATIONS: LazyLock<HashSet<&'static str>> =
    LazyLock::new(|| HashSet::from(["not", "no", "never", "without", "cannot"]));

pub fn weight_of(token: &str) -> Option<f64> {
    LEXICON.get(token).copied()
}

pub fn is_negation(token: &str) -> bool {
    NEGATIONS.contains(token)
}
