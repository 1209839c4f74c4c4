//! Trigram extraction with `pg_trgm` padding rules.
//!
//! Following the `PostgreSQL` `pg_trgm` algorithm:
//! - split the input into whitespace-delimited tokens
//! - pad each token with two leading spaces and one trailing space
//! - slide a 3-byte window across the padded token
//!
//! The window covering both synthetic leading spaces is replaced by a short
//! two-character form, so no all-padding trigram is ever emitted.

use crate::trigram::{Trigram, Trigrams, PAD};

/// Extracts the ordered trigram sequence of `text`.
///
/// Tokens are processed independently and their trigrams concatenated in
/// token order. A token of length n yields exactly n + 1 trigrams; empty or
/// all-whitespace input yields an empty sequence. Extraction never fails.
///
/// # Example
///
/// ```
/// use trgm_core::extract_trigrams;
///
/// // "word" padded to "  word " → " w", " wo", "wor", "ord", "rd "
/// let trigrams = extract_trigrams("word");
/// let rendered: Vec<String> = trigrams.iter().map(ToString::to_string).collect();
/// assert_eq!(rendered, vec![" w", " wo", "wor", "ord", "rd "]);
/// ```
#[must_use]
pub fn extract_trigrams(text: &str) -> Trigrams {
    let mut trigrams = Trigrams::default();
    for token in text.split_whitespace() {
        extract_token(token.as_bytes(), &mut trigrams);
    }
    trigrams
}

/// Pads a single token and emits its windows into `out`.
fn extract_token(token: &[u8], out: &mut Trigrams) {
    let mut padded = Vec::with_capacity(token.len() + 3);
    padded.push(PAD);
    padded.push(PAD);
    padded.extend_from_slice(token);
    padded.push(PAD);

    for (i, window) in padded.windows(3).enumerate() {
        // Offset 0 is the only window whose first two bytes are both
        // synthetic padding; keep at most one leading space.
        let trigram = if i == 0 {
            Trigram::short(window[1], window[2])
        } else {
            Trigram::full(window[0], window[1], window[2])
        };
        out.push(trigram);
    }
}
