//! Tests for `similarity` module

use super::extract::extract_trigrams;
use super::similarity::*;

#[test]
fn test_identical_strings_score_one() {
    let score = strings_similarity("hello world", "hello world");
    assert!((score - 1.0).abs() < f64::EPSILON);
}

#[test]
fn test_known_score_word_vs_two_words() {
    // 4 shared unique trigrams out of 11 unique total.
    let score = strings_similarity("word", "two words");
    assert!((score - 0.363_636).abs() < 1e-4, "got {score}");
}

#[test]
fn test_known_score_addresses() {
    let score = strings_similarity("1600 Pennsylvania Ave", "1600 Penna Avenue");
    assert!((score - 0.428_571).abs() < 1e-4, "got {score}");
}

#[test]
fn test_disjoint_strings_score_zero() {
    let score = strings_similarity("abc", "xyz");
    assert!(score.abs() < f64::EPSILON);
}

#[test]
fn test_both_empty_scores_zero() {
    // Policy: zero unique trigrams across both inputs scores 0.0 rather
    // than dividing by zero.
    assert!(strings_similarity("", "").abs() < f64::EPSILON);
    assert!(strings_similarity("   ", "\t\n").abs() < f64::EPSILON);
}

#[test]
fn test_one_empty_scores_zero() {
    assert!(strings_similarity("word", "").abs() < f64::EPSILON);
    assert!(strings_similarity("", "word").abs() < f64::EPSILON);
}

#[test]
fn test_multiplicity_is_ignored() {
    // "ab ab" carries the same distinct trigrams as "ab"; duplicates in the
    // sequence do not add weight.
    let score = strings_similarity("ab ab", "ab");
    assert!((score - 1.0).abs() < f64::EPSILON);
}

#[test]
fn test_symmetry() {
    let pairs = [
        ("word", "two words"),
        ("1600 Pennsylvania Ave", "1600 Penna Avenue"),
        ("", "word"),
    ];
    for (s1, s2) in pairs {
        assert!((strings_similarity(s1, s2) - strings_similarity(s2, s1)).abs() < f64::EPSILON);
    }
}

#[test]
fn test_sequence_methods_match_free_functions() {
    let t1 = extract_trigrams("word");
    let t2 = extract_trigrams("two words");

    let expected = trigrams_similarity(&t1, &t2);
    assert!((t1.similarity(&t2) - expected).abs() < f64::EPSILON);
    assert!((t1.similarity_to_str("two words") - expected).abs() < f64::EPSILON);
}

// =========================================================================
// Property-Based Tests with proptest
// =========================================================================

mod proptest_tests {
    use super::*;
    use proptest::prelude::*;

    /// Strategy for strings over the single-byte alphabet the scorer targets.
    fn text_strategy() -> impl Strategy<Value = String> {
        "[a-zA-Z0-9 ]{0,40}"
    }

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(200))]

        /// Property: similarity stays within [0, 1]
        #[test]
        fn prop_score_bounded(s1 in text_strategy(), s2 in text_strategy()) {
            let score = strings_similarity(&s1, &s2);
            prop_assert!((0.0..=1.0).contains(&score));
        }

        /// Property: any string with a non-whitespace character scores 1.0
        /// against itself
        #[test]
        fn prop_reflexive(s in text_strategy()) {
            prop_assume!(s.split_whitespace().next().is_some());
            let score = strings_similarity(&s, &s);
            prop_assert!((score - 1.0).abs() < f64::EPSILON);
        }

        /// Property: similarity is symmetric
        #[test]
        fn prop_symmetric(s1 in text_strategy(), s2 in text_strategy()) {
            let forward = strings_similarity(&s1, &s2);
            let backward = strings_similarity(&s2, &s1);
            prop_assert!((forward - backward).abs() < f64::EPSILON);
        }

        /// Property: a single token of length n yields n + 1 trigrams
        #[test]
        fn prop_token_count(token in "[a-zA-Z0-9]{1,32}") {
            prop_assert_eq!(extract_trigrams(&token).len(), token.len() + 1);
        }

        /// Property: extraction never panics and is deterministic
        #[test]
        fn prop_extraction_deterministic(s in "\\PC{0,64}") {
            prop_assert_eq!(extract_trigrams(&s), extract_trigrams(&s));
        }
    }
}
