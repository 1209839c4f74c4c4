//! Set-overlap similarity over trigram sequences.
//!
//! The score is the ratio of distinct trigrams matched in both inputs to
//! the distinct trigrams across both inputs combined, matching
//! `PostgreSQL`'s `similarity()` function.

use crate::extract::extract_trigrams;
use crate::trigram::{Trigram, Trigrams};
use rustc_hash::FxHashSet;

/// Similarity of two trigram sequences, in `[0, 1]`.
///
/// Multiplicity is ignored: a trigram occurring twice in one sequence still
/// counts once. With `M` distinct trigrams present in both sequences and
/// `U` distinct trigrams across both combined, the score is `M / U`.
///
/// When both sequences are empty, `U` is zero; the score is defined as 0.0
/// rather than dividing by zero ("no trigrams at all" reads as "no trigrams
/// in common").
#[must_use]
pub fn trigrams_similarity(a: &Trigrams, b: &Trigrams) -> f64 {
    let set_a: FxHashSet<Trigram> = a.iter().copied().collect();
    let set_b: FxHashSet<Trigram> = b.iter().copied().collect();

    let unique = set_a.union(&set_b).count();
    if unique == 0 {
        return 0.0;
    }
    let matched = set_a.intersection(&set_b).count();

    matched as f64 / unique as f64
}

/// Similarity of two raw strings, extracting trigrams from each first.
///
/// # Example
///
/// ```
/// use trgm_core::strings_similarity;
///
/// let score = strings_similarity("word", "two words");
/// assert!((score - 0.363_636).abs() < 1e-4);
/// ```
#[must_use]
pub fn strings_similarity(s1: &str, s2: &str) -> f64 {
    let t1 = extract_trigrams(s1);
    let t2 = extract_trigrams(s2);
    let score = trigrams_similarity(&t1, &t2);

    tracing::trace!(
        len1 = t1.len(),
        len2 = t2.len(),
        score,
        "computed string similarity"
    );

    score
}
